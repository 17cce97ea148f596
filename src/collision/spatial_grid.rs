// Uniform spatial grid used by the grid broad phase.

use std::collections::BTreeSet;

use log::debug;

use crate::collision::AABB;
use crate::error::{PhysicsError, Result};

/// Upper bound on the number of cells a grid may allocate.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// A uniform grid over the domain. Each cell lists the bodies whose bounds
/// touch it; bounds outside the grid are clamped into the border cells.
#[derive(Debug)]
pub struct SpatialGrid {
    bounds: AABB,           // Area covered by the grid, normally the domain
    inv_cell_size: f64,     // 1.0 / cell_size
    num_cols: usize,        // Number of columns in the grid
    num_rows: usize,        // Number of rows in the grid
    cells: Vec<Vec<usize>>, // Row-major, body indices per cell
}

/// Columns and rows needed to cover `bounds` with cells of `cell_size`.
///
/// Fails for a non-positive or non-finite `cell_size`, and for grids that
/// would need more than [`MAX_GRID_CELLS`] cells.
pub fn grid_dimensions(bounds: &AABB, cell_size: f64) -> Result<(usize, usize)> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(PhysicsError::invalid_config(format!(
            "grid cell size must be positive, got {cell_size}"
        )));
    }
    let cols = ((bounds.max.x - bounds.min.x) / cell_size).ceil().max(1.0);
    let rows = ((bounds.max.y - bounds.min.y) / cell_size).ceil().max(1.0);
    if !(cols * rows <= MAX_GRID_CELLS as f64) {
        return Err(PhysicsError::invalid_config(format!(
            "grid cell size {cell_size} needs {cols}x{rows} cells, limit is {MAX_GRID_CELLS}"
        )));
    }
    Ok((cols as usize, rows as usize))
}

impl SpatialGrid {
    /// Creates a new SpatialGrid.
    ///
    /// # Arguments
    /// * `bounds` - The AABB the grid should cover.
    /// * `cell_size` - Width and height of each cell.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when [`grid_dimensions`] rejects the size.
    pub fn new(bounds: AABB, cell_size: f64) -> Result<Self> {
        let (num_cols, num_rows) = grid_dimensions(&bounds, cell_size)?;

        debug!(
            "spatial grid: bounds={:?} cell_size={} dims={}x{}",
            bounds, cell_size, num_cols, num_rows
        );

        Ok(SpatialGrid {
            bounds,
            inv_cell_size: 1.0 / cell_size,
            num_cols,
            num_rows,
            cells: vec![Vec::new(); num_cols * num_rows],
        })
    }

    /// Column/row of the cell containing a point, clamped to the grid.
    #[inline]
    fn cell_coords(&self, x: f64, y: f64) -> (usize, usize) {
        let col = ((x - self.bounds.min.x) * self.inv_cell_size).floor();
        let row = ((y - self.bounds.min.y) * self.inv_cell_size).floor();
        let col = col.clamp(0.0, (self.num_cols - 1) as f64) as usize;
        let row = row.clamp(0.0, (self.num_rows - 1) as f64) as usize;
        (col, row)
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
    }

    /// Registers a body in every cell its bounds overlap.
    ///
    /// # Arguments
    /// * `body_index` - Index of the body in the simulation's body list.
    /// * `aabb` - The body's current bounds. Parts outside the grid land in
    ///   the border cells.
    pub fn insert(&mut self, body_index: usize, aabb: &AABB) {
        let (min_col, min_row) = self.cell_coords(aabb.min.x, aabb.min.y);
        let (max_col, max_row) = self.cell_coords(aabb.max.x, aabb.max.y);

        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.cells[col + row * self.num_cols].push(body_index);
            }
        }
    }

    /// Every unordered pair sharing at least one cell, as `(low, high)`,
    /// sorted and without duplicates.
    pub fn query_potential_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        for indices in self.cells.iter().filter(|c| c.len() >= 2) {
            for (i, &a) in indices.iter().enumerate() {
                for &b in &indices[i + 1..] {
                    if a != b {
                        pairs.insert((a.min(b), a.max(b)));
                    }
                }
            }
        }
        pairs.into_iter().collect()
    }
}
