//! Seams to the host application: where frame time comes from and where
//! poses go. The host owns the window, the event loop and the wall clock.

use crate::world::{BodyPose, Simulation};

/// Supplies the elapsed time for each frame, in seconds.
pub trait Clock {
    fn delta_seconds(&mut self) -> f64;
}

/// Draws a frame from body poses. Owns no physics state.
pub trait Renderer {
    fn render(&mut self, poses: &[BodyPose]);
}

/// A clock that reports the same `dt` every frame, for headless runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub dt: f64,
}

impl FixedClock {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    pub fn from_fps(fps: f64) -> Self {
        Self::new(1.0 / fps)
    }
}

impl Clock for FixedClock {
    fn delta_seconds(&mut self) -> f64 {
        self.dt
    }
}

impl Simulation {
    /// Runs one host frame: reads `dt` from the clock, steps, then hands the
    /// resulting poses to the renderer. Returns the `dt` the clock reported.
    pub fn advance_frame<C, R>(&mut self, clock: &mut C, renderer: &mut R) -> f64
    where
        C: Clock + ?Sized,
        R: Renderer + ?Sized,
    {
        let dt = clock.delta_seconds();
        self.step(dt);
        let poses: Vec<BodyPose> = self.poses().collect();
        renderer.render(&poses);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BodyConfig, SimulationConfig};

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Vec<BodyPose>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, poses: &[BodyPose]) {
            self.frames.push(poses.to_vec());
        }
    }

    struct ScriptedClock(Vec<f64>);

    impl Clock for ScriptedClock {
        fn delta_seconds(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    fn sim() -> Simulation {
        Simulation::with_bodies(
            SimulationConfig::default(),
            &[BodyConfig::circle(400.0, 100.0, 30.0, 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::from_fps(60.0);
        assert!((clock.delta_seconds() - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(clock.delta_seconds(), clock.dt);
    }

    #[test]
    fn test_advance_frame_renders_each_frame() {
        let mut s = sim();
        let mut clock = FixedClock::from_fps(60.0);
        let mut renderer = RecordingRenderer::default();

        for _ in 0..3 {
            s.advance_frame(&mut clock, &mut renderer);
        }

        assert_eq!(renderer.frames.len(), 3);
        let ys: Vec<f64> = renderer.frames.iter().map(|f| f[0].position.y).collect();
        assert!(ys[0] > 100.0 && ys[1] > ys[0] && ys[2] > ys[1]);
    }

    #[test]
    fn test_paused_clock_still_renders() {
        let mut s = sim();
        let mut clock = ScriptedClock(vec![0.0, 1.0 / 60.0]);
        let mut renderer = RecordingRenderer::default();

        assert_eq!(s.advance_frame(&mut clock, &mut renderer), 0.0);
        assert_eq!(renderer.frames[0][0].position.y, 100.0);

        s.advance_frame(&mut clock, &mut renderer);
        assert!(renderer.frames[1][0].position.y > 100.0);
    }
}
