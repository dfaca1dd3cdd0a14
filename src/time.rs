//! Frame timing utility.
//!
//! Accumulates elapsed seconds and the per-frame delta supplied by the
//! platform collaborator (`get_frame_time`), applying a mutable
//! `time_scale` multiplier. Frame-rate capping is delegated to the
//! collaborator (`set_target_fps`).

/// Simulation time for the current session.
#[derive(Clone, Copy, Debug)]
pub struct Time {
    elapsed: f32,
    delta: f32,
    unscaled_delta: f32,
    /// Multiplier applied to every frame delta. 1.0 is normal speed.
    pub time_scale: f32,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            unscaled_delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl Time {
    /// Builder-style: set the time scale.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Advance one frame. `dt` is the unscaled frame delta in seconds.
    pub fn update(&mut self, dt: f32) {
        self.unscaled_delta = dt;
        self.delta = dt * self.time_scale;
        self.elapsed += self.delta;
    }

    /// Scaled seconds elapsed since startup.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Scaled delta of the current frame in seconds.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Raw frame delta, ignoring `time_scale`.
    pub fn unscaled_delta(&self) -> f32 {
        self.unscaled_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_is_zeroed_at_normal_speed() {
        let time = Time::default();
        assert!(approx_eq(time.elapsed(), 0.0));
        assert!(approx_eq(time.delta(), 0.0));
        assert!(approx_eq(time.time_scale, 1.0));
    }

    #[test]
    fn test_update_accumulates_elapsed() {
        let mut time = Time::default();
        time.update(0.016);
        time.update(0.016);
        assert!(approx_eq(time.elapsed(), 0.032));
        assert!(approx_eq(time.delta(), 0.016));
    }

    #[test]
    fn test_time_scale_affects_delta_not_unscaled() {
        let mut time = Time::default().with_time_scale(0.5);
        time.update(0.02);
        assert!(approx_eq(time.delta(), 0.01));
        assert!(approx_eq(time.unscaled_delta(), 0.02));
        assert!(approx_eq(time.elapsed(), 0.01));
    }

    #[test]
    fn test_zero_scale_freezes_time() {
        let mut time = Time::default().with_time_scale(0.0);
        time.update(0.5);
        assert!(approx_eq(time.elapsed(), 0.0));
        assert!(approx_eq(time.delta(), 0.0));
        assert!(approx_eq(time.unscaled_delta(), 0.5));
    }
}
