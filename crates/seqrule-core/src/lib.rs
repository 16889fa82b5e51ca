//! seqrule Core - Verdict lattice and the constraint contract
//!
//! This crate provides the fundamental abstractions for seqrule:
//! - The four-valued [`Verdict`] lattice reporting accept-now/continue-possible
//! - The [`Constraint`]/[`Evaluation`] contract all rules implement
//! - The [`matches`] driver that feeds a token sequence to an evaluation
//! - Construction-time error types
//!
//! A constraint descriptor is immutable and freely shared; an evaluation is
//! one exclusive, non-restartable pass over one token sequence. Matching is
//! incremental: tokens are consumed one at a time, with no buffering and no
//! backtracking.

pub mod constraint;
pub mod error;
pub mod matcher;
pub mod verdict;

pub use constraint::{BoxEvaluation, Constraint, Evaluation, SharedConstraint};
pub use error::{ConstraintError, Result};
pub use matcher::matches;
pub use verdict::Verdict;
