//! Pausable, periodic orbital poses for a satellite circling a moving reference body.
//!
//! The time model lives in [`OrbitState`], a small `Copy` struct advanced by pure
//! transition functions. [`OrbitPoseController`] owns one state plus a [`Clock`]
//! and is what a frame loop or UI panel talks to.

mod clock;
mod controller;
mod error;
mod pose;
mod state;

pub use clock::{Clock, ManualClock, MonotonicClock, Timestamp};
pub use controller::OrbitPoseController;
pub use error::OrbitError;
pub use pose::{Pose, orbit_pose};
pub use state::OrbitState;

/// Radius range offered by the orbit panel, in meters.
pub const RADIUS_RANGE_M: std::ops::RangeInclusive<f32> = 1.0..=100.0;

/// Period range offered by the orbit panel, in milliseconds.
pub const PERIOD_RANGE_MS: std::ops::RangeInclusive<u32> = 50..=10_000;
