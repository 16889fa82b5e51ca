//! Shared test fixtures for seqrule crates.
//!
//! This crate provides token types and character-class constraints used
//! across the workspace's tests. It does NOT depend on `seqrule-engine` to
//! avoid circular dependencies.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! seqrule-test = { workspace = true }
//! ```

use seqrule_constraint::Member;
use seqrule_core::{Constraint, SharedConstraint};

/// A record token with named fields, for projection tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub sensor: u32,
    pub channel: u32,
    pub value: i64,
}

impl Reading {
    /// Creates a reading on the given sensor and channel.
    pub fn new(sensor: u32, channel: u32, value: i64) -> Self {
        Self {
            sensor,
            channel,
            value,
        }
    }
}

/// A burst of `n` readings on one sensor, values 0, 1, 2, …
pub fn burst(sensor: u32, n: usize) -> Vec<Reading> {
    (0..n as i64)
        .map(|value| Reading::new(sensor, 0, value))
        .collect()
}

/// ASCII letters, upper and lower case.
pub fn letters() -> SharedConstraint<char> {
    Member::new(('a'..='z').chain('A'..='Z')).shared()
}

/// ASCII decimal digits.
pub fn digits() -> SharedConstraint<char> {
    Member::new('0'..='9').shared()
}
