//! Fixed-timestep loop: simulation at a fixed 60 Hz, rendering once per frame.

use std::time::Instant;

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame the accumulator will absorb. Anything longer is clamped
/// and the simulation falls behind wall time instead of spiralling.
pub const MAX_FRAME_TIME: f64 = 0.25;

pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Measure wall time since the last call and run one frame.
    ///
    /// `update_fn(fixed_dt, total_sim_time)` runs zero or more times;
    /// `render_fn(alpha)` runs exactly once with alpha in `[0.0, 1.0)`.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64), render_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.step(frame_time, update_fn, render_fn);
    }

    /// Run one frame with an explicit frame time in seconds.
    pub fn step(
        &mut self,
        frame_time: f64,
        mut update_fn: impl FnMut(f64, f64),
        mut render_fn: impl FnMut(f64),
    ) {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time
        };

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        render_fn(self.alpha());
        self.frame_count += 1;
    }

    /// Interpolation alpha between the last two simulation states.
    fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_single_step() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.step(FIXED_DT, |_, _| updates += 1, |_| {});
        assert_eq!(updates, 1);
        assert!(loop_.alpha().abs() < 1e-9);
    }

    #[test]
    fn test_accumulator_multiple_steps() {
        let mut loop_ = GameLoop::new();
        let mut sim_times = Vec::new();
        loop_.step(3.0 * FIXED_DT + 1e-9, |_, t| sim_times.push(t), |_| {});
        assert_eq!(sim_times.len(), 3);
        assert!((sim_times[2] - 2.0 * FIXED_DT).abs() < 1e-12);
        assert!((loop_.total_sim_time() - 3.0 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_partial_frame_renders_with_alpha() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        let mut alpha_received = -1.0;
        loop_.step(0.25 * FIXED_DT, |_, _| updates += 1, |a| alpha_received = a);
        assert_eq!(updates, 0);
        assert!(
            (alpha_received - 0.25).abs() < 1e-10,
            "alpha should be ~0.25, got {alpha_received}"
        );
    }

    #[test]
    fn test_render_alpha_stays_in_unit_range() {
        let mut loop_ = GameLoop::new();
        for &ft in &[0.017, 0.015, 0.020, 0.033, 0.008, 0.3, 0.0] {
            let mut alpha_received = -1.0;
            loop_.step(ft, |_, _| {}, |a| alpha_received = a);
            assert!(
                (0.0..1.0).contains(&alpha_received),
                "frame time {ft}: alpha {alpha_received} out of range"
            );
        }
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.step(5.0, |_, _| updates += 1, |_| {});
        let max_updates = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(
            updates > 0 && updates <= max_updates,
            "Expected 1..={max_updates} updates, got {updates}"
        );
    }

    #[test]
    fn test_counters_advance() {
        let mut loop_ = GameLoop::default();
        for _ in 0..10 {
            loop_.step(FIXED_DT * 2.0, |_, _| {}, |_| {});
        }
        assert_eq!(loop_.frame_count(), 10);
        let expected = loop_.update_count() as f64 * FIXED_DT;
        assert!((loop_.total_sim_time() - expected).abs() < 1e-10);
    }
}
