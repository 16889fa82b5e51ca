//! seqrule - a constraint algebra for token-sequence matching
//!
//! Declaratively composed, reusable rules evaluated incrementally over any
//! token alphabet (characters, numbers, records) one token at a time,
//! without buffering the sequence and without backtracking.
//!
//! # Example
//!
//! ```rust
//! use seqrule::prelude::*;
//!
//! // An identifier: one leading underscore or letter, then any mix of
//! // underscores, letters and digits.
//! let letters = Member::new(('a'..='z').chain('A'..='Z')).shared();
//! let alpha = Or::new([Member::new(['_']).shared(), letters]).shared();
//! let alpha_num = Or::new([alpha.clone(), Member::new('0'..='9').shared()]).shared();
//! let first_char = And::new([Single.shared(), alpha]).shared();
//! let identifier = Sequence::new([first_char, alpha_num]);
//!
//! assert!(matches(&identifier, "_tmp1".chars()));
//! assert!(!matches(&identifier, "1tmp".chars()));
//! ```
//!
//! Descriptors are immutable and freely reused across matches; every call to
//! [`matches`] runs an independent evaluation. The verdict lattice
//! ([`Verdict`]) distinguishes "acceptable now" from "may continue", which
//! is what lets the combinators compose without lookahead.

// Core contract and driver
pub use seqrule_core::{
    matches, BoxEvaluation, Constraint, ConstraintError, Evaluation, SharedConstraint, Verdict,
};

// Primitive constraints and logical combinators
pub use seqrule_constraint::{
    Alternate, And, Any, Ascending, Attribute, CountRange, Key, Member, Null, Or, Single,
    SteppedRange, Tally, Unique, ValueRange,
};

// Path engine
pub use seqrule_engine::{Group, Sequence};

pub mod prelude {
    //! Everything needed to build and run constraints.
    pub use super::{
        matches, Alternate, And, Any, Ascending, Attribute, Constraint, CountRange, Group, Key,
        Member, Null, Or, Sequence, SharedConstraint, Single, SteppedRange, Tally, Unique,
        ValueRange, Verdict,
    };
}
