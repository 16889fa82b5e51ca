//! Trivial constraints: accept everything, accept nothing, accept one token.

use seqrule_core::{BoxEvaluation, Constraint, Evaluation, Verdict};

/// Evaluation that reports the same verdict on every step.
struct Steady(Verdict);

impl<T> Evaluation<T> for Steady {
    fn step(&mut self, _token: &T) -> Verdict {
        self.0
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(Steady(self.0))
    }
}

/// Matches any token sequence, including the empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl Any {
    /// Creates the always-satisfied constraint.
    pub fn new() -> Self {
        Any
    }
}

impl<T: 'static> Constraint<T> for Any {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        (Box::new(Steady(Verdict::Satisfied)), Verdict::Satisfied)
    }
}

/// Matches only the empty token sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

impl Null {
    /// Creates the empty-sequence constraint.
    pub fn new() -> Self {
        Null
    }
}

impl<T: 'static> Constraint<T> for Null {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        (Box::new(Steady(Verdict::Invalid)), Verdict::Matching)
    }
}

/// Matches exactly one token of any value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Single;

impl Single {
    /// Creates the one-token constraint.
    pub fn new() -> Self {
        Single
    }
}

struct SingleEval {
    spent: bool,
}

impl<T> Evaluation<T> for SingleEval {
    fn step(&mut self, _token: &T) -> Verdict {
        if self.spent {
            Verdict::Invalid
        } else {
            self.spent = true;
            Verdict::Matching
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(SingleEval { spent: self.spent })
    }
}

impl<T: 'static> Constraint<T> for Single {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        (Box::new(SingleEval { spent: false }), Verdict::Continue)
    }
}
