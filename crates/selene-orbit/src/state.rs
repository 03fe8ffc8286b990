//! The orbit time model: start/pause bookkeeping and the parametric fraction.
//!
//! All transitions take the state by value and return the next state, so the
//! same logic can be driven by a live clock, a replay, or a test without any
//! shared mutable object in between.

use std::time::Duration;

use crate::clock::Timestamp;
use crate::error::OrbitError;

/// Timing and shape parameters of one orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    paused: bool,
    start_time: Timestamp,
    pause_time: Timestamp,
    current_time: Timestamp,
    radius_m: f32,
    period_ms: u32,
}

impl OrbitState {
    /// Radius used when nothing else is configured, in meters.
    pub const DEFAULT_RADIUS_M: f32 = 100.0;
    /// Period used when nothing else is configured, in milliseconds.
    pub const DEFAULT_PERIOD_MS: u32 = 5000;

    /// Start a running orbit at `now`.
    pub fn new(now: Timestamp, radius_m: f32, period_ms: u32) -> Result<Self, OrbitError> {
        validate_radius(radius_m)?;
        validate_period(period_ms)?;
        Ok(Self::unchecked(now, radius_m, period_ms))
    }

    /// Start a running orbit at `now` with the default radius and period.
    pub fn with_defaults(now: Timestamp) -> Self {
        Self::unchecked(now, Self::DEFAULT_RADIUS_M, Self::DEFAULT_PERIOD_MS)
    }

    fn unchecked(now: Timestamp, radius_m: f32, period_ms: u32) -> Self {
        Self {
            paused: false,
            start_time: now,
            pause_time: now,
            current_time: now,
            radius_m,
            period_ms,
        }
    }

    /// Sample `now` as the current time, unless paused.
    pub fn advance(mut self, now: Timestamp) -> Self {
        if !self.paused {
            self.current_time = now;
        }
        self
    }

    /// Flip between running and paused.
    ///
    /// Pausing freezes `current_time` at `now`. Resuming pushes `start_time`
    /// forward by the time spent paused, so the orbit picks up at the phase it
    /// was frozen at.
    pub fn toggle_pause(mut self, now: Timestamp) -> Self {
        self.paused = !self.paused;
        if self.paused {
            self.pause_time = now;
        } else {
            self.start_time += now.saturating_sub(self.pause_time);
        }
        self.current_time = now;
        self
    }

    pub fn with_radius(mut self, radius_m: f32) -> Result<Self, OrbitError> {
        validate_radius(radius_m)?;
        self.radius_m = radius_m;
        Ok(self)
    }

    pub fn with_period_ms(mut self, period_ms: u32) -> Result<Self, OrbitError> {
        validate_period(period_ms)?;
        self.period_ms = period_ms;
        Ok(self)
    }

    /// Revolutions completed since start, not wrapped: 2.5 means two and a half turns.
    pub fn parametric_time(&self) -> f64 {
        let period = Duration::from_millis(u64::from(self.period_ms)).as_secs_f64();
        self.elapsed().as_secs_f64() / period
    }

    /// Orbit time accumulated while running, as of the last sample.
    pub fn elapsed(&self) -> Duration {
        self.current_time.saturating_sub(self.start_time)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn radius_m(&self) -> f32 {
        self.radius_m
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn pause_time(&self) -> Timestamp {
        self.pause_time
    }

    pub fn current_time(&self) -> Timestamp {
        self.current_time
    }
}

fn validate_radius(radius_m: f32) -> Result<(), OrbitError> {
    if radius_m.is_finite() && radius_m > 0.0 {
        Ok(())
    } else {
        Err(OrbitError::InvalidRadius(radius_m))
    }
}

fn validate_period(period_ms: u32) -> Result<(), OrbitError> {
    if period_ms == 0 {
        Err(OrbitError::InvalidPeriod(period_ms))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_state_is_running_at_phase_zero() {
        let state = OrbitState::new(ms(1234), 10.0, 1000).unwrap();
        assert!(!state.is_paused());
        assert_eq!(state.start_time(), ms(1234));
        assert_eq!(state.parametric_time(), 0.0);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert_eq!(
            OrbitState::new(ms(0), 0.0, 1000),
            Err(OrbitError::InvalidRadius(0.0))
        );
        assert_eq!(
            OrbitState::new(ms(0), -5.0, 1000),
            Err(OrbitError::InvalidRadius(-5.0))
        );
        assert!(matches!(
            OrbitState::new(ms(0), f32::NAN, 1000),
            Err(OrbitError::InvalidRadius(_))
        ));
        assert_eq!(
            OrbitState::new(ms(0), 10.0, 0),
            Err(OrbitError::InvalidPeriod(0))
        );
    }

    #[test]
    fn test_out_of_panel_range_values_are_accepted() {
        let state = OrbitState::new(ms(0), 0.25, 20).unwrap();
        let state = state.with_radius(500.0).unwrap().with_period_ms(60_000).unwrap();
        assert_eq!(state.radius_m(), 500.0);
        assert_eq!(state.period_ms(), 60_000);
    }

    #[test]
    fn test_rejected_setter_leaves_state_unchanged() {
        let state = OrbitState::new(ms(0), 10.0, 1000).unwrap();
        assert!(state.with_period_ms(0).is_err());
        assert_eq!(state.period_ms(), 1000);
    }

    #[test]
    fn test_parametric_time_accumulates_revolutions() {
        let state = OrbitState::new(ms(0), 10.0, 1000).unwrap();
        assert!((state.advance(ms(250)).parametric_time() - 0.25).abs() < 1e-12);
        assert!((state.advance(ms(2500)).parametric_time() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_parametric_time_monotonic_while_running() {
        let mut state = OrbitState::new(ms(0), 10.0, 700).unwrap();
        let mut prev = state.parametric_time();
        for frame in 1..=500u64 {
            state = state.advance(ms(frame * 16));
            let t = state.parametric_time();
            assert!(t >= prev, "frame {frame}: t went from {prev} to {t}");
            prev = t;
        }
    }

    #[test]
    fn test_pause_freezes_current_time() {
        let state = OrbitState::new(ms(0), 10.0, 1000)
            .unwrap()
            .advance(ms(300))
            .toggle_pause(ms(400));
        assert!(state.is_paused());
        assert_eq!(state.pause_time(), ms(400));

        let later = state.advance(ms(9000));
        assert_eq!(later.current_time(), ms(400));
        assert!((later.parametric_time() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_resume_shifts_start_by_paused_duration() {
        let state = OrbitState::new(ms(100), 10.0, 1000)
            .unwrap()
            .toggle_pause(ms(600))
            .toggle_pause(ms(5600));
        assert!(!state.is_paused());
        assert_eq!(state.start_time(), ms(5100));

        let resumed = state.advance(ms(5600));
        assert!(
            (resumed.parametric_time() - 0.5).abs() < 1e-12,
            "resume should continue at 0.5, got {}",
            resumed.parametric_time()
        );
    }

    #[test]
    fn test_multiple_pause_cycles_accumulate() {
        let mut state = OrbitState::new(ms(0), 10.0, 1000).unwrap();
        // Run 100ms, pause 1s, run 100ms, pause 2s, run 50ms.
        state = state.toggle_pause(ms(100)).toggle_pause(ms(1100));
        state = state.toggle_pause(ms(1200)).toggle_pause(ms(3200));
        state = state.advance(ms(3250));
        assert!(
            (state.parametric_time() - 0.25).abs() < 1e-12,
            "expected 250ms of orbit time, got t={}",
            state.parametric_time()
        );
    }

    #[test]
    fn test_resume_keeps_frozen_phase_before_next_sample() {
        let state = OrbitState::new(ms(0), 10.0, 1000)
            .unwrap()
            .toggle_pause(ms(100))
            .toggle_pause(ms(900));
        assert!(state.current_time() >= state.start_time());
        assert!((state.parametric_time() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_elapsed_saturates_when_current_precedes_start() {
        // A stale sample older than the start must not underflow.
        let state = OrbitState::new(ms(500), 10.0, 1000).unwrap().advance(ms(200));
        assert_eq!(state.elapsed(), Duration::ZERO);
        assert_eq!(state.parametric_time(), 0.0);
    }
}
