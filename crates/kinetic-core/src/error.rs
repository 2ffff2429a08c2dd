//! Error types surfaced at construction and attach time.

use thiserror::Error;

/// Fatal configuration problems. An element or driver that fails with one of
/// these is never created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("element is missing the `{0}` marker attribute")]
    MissingMarker(&'static str),
    #[error("constraint axis must be `X` or `Y`, got `{0}`")]
    InvalidConstraintAxis(String),
    #[error("start distance must be greater than zero, got {0}")]
    InvalidStartDistance(f32),
    #[error("minimum distance must not be negative, got {0}")]
    InvalidMinimumDistance(f32),
    #[error("attribute `{name}` is not a number: `{value}`")]
    InvalidNumber { name: &'static str, value: String },
    #[error("driver has been destroyed")]
    Destroyed,
}
