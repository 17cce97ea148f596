pub mod color;
pub mod material;

pub use color::Color;
pub use material::Material;
