//! Stateful front end over [`OrbitState`] for frame loops and UI panels.

use tracing::debug;

use crate::clock::{Clock, MonotonicClock};
use crate::error::OrbitError;
use crate::pose::{Pose, orbit_pose};
use crate::state::OrbitState;

/// Drives one satellite orbit from a clock.
///
/// Call [`compute_pose`](Self::compute_pose) once per frame with the current
/// pose of the body being orbited.
#[derive(Debug)]
pub struct OrbitPoseController<C: Clock = MonotonicClock> {
    clock: C,
    state: OrbitState,
}

impl OrbitPoseController<MonotonicClock> {
    /// Controller on a fresh wall clock.
    pub fn new(radius_m: f32, period_ms: u32) -> Result<Self, OrbitError> {
        Self::with_clock(MonotonicClock::new(), radius_m, period_ms)
    }
}

impl Default for OrbitPoseController<MonotonicClock> {
    fn default() -> Self {
        let clock = MonotonicClock::new();
        let state = OrbitState::with_defaults(clock.now());
        Self { clock, state }
    }
}

impl<C: Clock> OrbitPoseController<C> {
    /// Controller on the given clock, starting now.
    pub fn with_clock(clock: C, radius_m: f32, period_ms: u32) -> Result<Self, OrbitError> {
        let state = OrbitState::new(clock.now(), radius_m, period_ms)?;
        Ok(Self { clock, state })
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggle_pause(self.clock.now());
        debug!(paused = self.state.is_paused(), "orbit pause toggled");
    }

    /// Set the orbit radius. Only non-finite or non-positive values are rejected.
    pub fn set_radius(&mut self, radius_m: f32) -> Result<(), OrbitError> {
        self.state = self.state.with_radius(radius_m)?;
        debug!(radius_m, "orbit radius set");
        Ok(())
    }

    /// Set the time for one revolution. Zero is rejected.
    pub fn set_period_ms(&mut self, period_ms: u32) -> Result<(), OrbitError> {
        self.state = self.state.with_period_ms(period_ms)?;
        debug!(period_ms, "orbit period set");
        Ok(())
    }

    /// Sample the clock (unless paused) and return the satellite pose around `origin`.
    pub fn compute_pose(&mut self, origin: &Pose) -> Result<Pose, OrbitError> {
        self.state = self.state.advance(self.clock.now());
        orbit_pose(origin, self.state.radius_m(), self.state.parametric_time())
    }

    pub fn radius_m(&self) -> f32 {
        self.state.radius_m()
    }

    pub fn period_ms(&self) -> u32 {
        self.state.period_ms()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Revolutions completed as of the last sample.
    pub fn parametric_time(&self) -> f64 {
        self.state.parametric_time()
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec3;

    use super::*;
    use crate::clock::ManualClock;

    const EPS: f32 = 1e-4;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller(radius_m: f32, period_ms: u32) -> OrbitPoseController<ManualClock> {
        OrbitPoseController::with_clock(ManualClock::starting_at(ms(1000)), radius_m, period_ms)
            .unwrap()
    }

    fn origin() -> Pose {
        Pose::at(Vec3::new(0.0, 0.0, 10.0))
    }

    #[test]
    fn test_initial_pose_on_forward_axis() {
        let mut ctl = controller(10.0, 1000);
        let pose = ctl.compute_pose(&origin()).unwrap();
        assert!(pose.position.abs_diff_eq(Vec3::new(10.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn test_quarter_period_scenario() {
        let mut ctl = controller(10.0, 1000);
        ctl.clock().advance(ms(250));
        let pose = ctl.compute_pose(&origin()).unwrap();
        assert!(
            pose.position.abs_diff_eq(Vec3::new(0.0, 10.0, 10.0), EPS),
            "expected (0, 10, 10), got {}",
            pose.position
        );
    }

    #[test]
    fn test_periodicity() {
        let mut ctl = controller(10.0, 800);
        let first = ctl.compute_pose(&origin()).unwrap();
        ctl.clock().advance(ms(800));
        let second = ctl.compute_pose(&origin()).unwrap();
        assert!(second.position.abs_diff_eq(first.position, EPS));
        assert!((ctl.parametric_time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_freezes_pose() {
        let mut ctl = controller(10.0, 1000);
        ctl.clock().advance(ms(100));
        let before = ctl.compute_pose(&origin()).unwrap();
        ctl.toggle_pause();
        assert!(ctl.is_paused());

        ctl.clock().advance(ms(3333));
        let frozen = ctl.compute_pose(&origin()).unwrap();
        assert!(frozen.position.abs_diff_eq(before.position, EPS));
    }

    #[test]
    fn test_pause_resume_preserves_phase() {
        let mut ctl = controller(10.0, 1000);
        ctl.clock().advance(ms(300));
        ctl.compute_pose(&origin()).unwrap();
        ctl.toggle_pause();
        let t1 = ctl.parametric_time();

        ctl.clock().advance(ms(12_345));
        ctl.toggle_pause();
        ctl.compute_pose(&origin()).unwrap();
        assert!(
            (ctl.parametric_time() - t1).abs() < 1e-9,
            "resumed at {} instead of {t1}",
            ctl.parametric_time()
        );

        ctl.clock().advance(ms(100));
        ctl.compute_pose(&origin()).unwrap();
        assert!((ctl.parametric_time() - (t1 + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_paused_orbit_still_follows_reference() {
        let mut ctl = controller(10.0, 1000);
        ctl.toggle_pause();
        let moved = Pose::at(Vec3::new(50.0, 0.0, 10.0));
        let pose = ctl.compute_pose(&moved).unwrap();
        assert!(pose.position.abs_diff_eq(Vec3::new(60.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn test_period_change_rescales_phase() {
        let mut ctl = controller(10.0, 1000);
        ctl.clock().advance(ms(500));
        ctl.compute_pose(&origin()).unwrap();
        assert!((ctl.parametric_time() - 0.5).abs() < 1e-9);
        ctl.set_period_ms(2000).unwrap();
        assert!((ctl.parametric_time() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_setters_validate_and_expose_values() {
        let mut ctl = controller(10.0, 1000);
        ctl.set_radius(42.0).unwrap();
        ctl.set_period_ms(50).unwrap();
        assert_eq!(ctl.radius_m(), 42.0);
        assert_eq!(ctl.period_ms(), 50);

        assert_eq!(ctl.set_radius(0.0), Err(OrbitError::InvalidRadius(0.0)));
        assert_eq!(ctl.set_period_ms(0), Err(OrbitError::InvalidPeriod(0)));
        assert_eq!(ctl.radius_m(), 42.0);
        assert_eq!(ctl.period_ms(), 50);
    }

    #[test]
    fn test_default_controller_parameters() {
        let ctl = OrbitPoseController::<MonotonicClock>::default();
        assert_eq!(ctl.radius_m(), OrbitState::DEFAULT_RADIUS_M);
        assert_eq!(ctl.period_ms(), OrbitState::DEFAULT_PERIOD_MS);
        assert!(!ctl.is_paused());
    }
}
