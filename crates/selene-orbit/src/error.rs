//! Orbit error types.

/// Contract violations detected by the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum OrbitError {
    /// Radius was zero, negative, or not finite.
    #[error("orbit radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    /// Period was zero milliseconds.
    #[error("orbit period must be positive, got {0} ms")]
    InvalidPeriod(u32),

    /// The satellite coincides with the reference body, or the reference up
    /// axis is parallel to the line of sight, so no facing basis exists.
    #[error("orbit pose is degenerate: no orthonormal facing basis")]
    DegenerateOrbit,
}
