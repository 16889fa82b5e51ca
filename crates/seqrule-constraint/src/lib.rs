//! seqrule Constraint Library - primitives and logical combinators
//!
//! This crate provides the constraint vocabulary built directly on the
//! seqrule-core contract:
//! - Trivial constraints (`Any`, `Null`, `Single`)
//! - Token value constraints (`Member`, `ValueRange`, `Unique`, `Ascending`,
//!   `Alternate`)
//! - Token count constraints (`CountRange`, `SteppedRange`, `Tally`)
//! - Projection adapters (`Attribute`, `Key`)
//! - Logical combinators (`And`, `Or`)
//!
//! Every descriptor here is a pure factory: construction either succeeds
//! with an immutable, shareable rule or fails fast with a
//! [`ConstraintError`](seqrule_core::ConstraintError). Matching never
//! errors; rejection is reported through the verdict.

pub mod count;
pub mod logical;
pub mod project;
pub mod trivial;
pub mod value;

pub use count::{CountRange, SteppedRange, Tally};
pub use logical::{And, Or};
pub use project::{Attribute, Key};
pub use trivial::{Any, Null, Single};
pub use value::{Alternate, Ascending, Member, Unique, ValueRange};
