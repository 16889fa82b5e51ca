//! seqrule Engine - the Group/Sequence path combinator
//!
//! This crate provides the one algorithmically interesting piece of seqrule:
//! composing child constraints so the active child can hand over to another
//! mid-sequence, with the handovers governed by a meta-constraint over child
//! indices. The engine simulates all candidate handover points in parallel
//! as a set of live paths: no backtracking, one pass over the tokens.
//!
//! [`Group`] composes children freely; [`Sequence`] pins them to declaration
//! order by using a stepped range over child indices as the admission
//! automaton.

pub mod group;
pub mod sequence;

pub use group::Group;
pub use sequence::Sequence;
