//! Panel error types.

use selene_orbit::OrbitError;

/// Errors raised when routing an edit through a panel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanelError {
    /// No control with this id exists on the panel.
    #[error("no control named {0:?}")]
    UnknownControl(String),

    /// The control exists but is not the kind the edit expects.
    #[error("control {0:?} is not a {1}")]
    WrongKind(String, &'static str),

    /// The edit carried NaN, which has no place in any range.
    #[error("control {0:?} got NaN")]
    NotANumber(String),

    /// The target refused the value.
    #[error(transparent)]
    Rejected(#[from] OrbitError),
}
