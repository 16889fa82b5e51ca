//! Error types for seqrule.
//!
//! Only descriptor construction can fail. Match-time rejection is an
//! ordinary outcome reported through the verdict, never through an error.

use thiserror::Error;

/// Error raised when a constraint descriptor is built from malformed
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// A value range where the lower bound exceeds the upper bound.
    #[error("empty value range: lower bound exceeds upper bound")]
    EmptyValueRange,

    /// A count range where the minimum exceeds the maximum.
    #[error("empty count range: min {min} exceeds max {max}")]
    EmptyCountRange {
        /// Requested minimum count.
        min: usize,
        /// Requested maximum count.
        max: usize,
    },

    /// A stepped range whose step does not advance the expected value.
    #[error("stepped range requires a step that advances the expected value")]
    ZeroStep,
}

/// Result type alias for descriptor construction.
pub type Result<T> = std::result::Result<T, ConstraintError>;
