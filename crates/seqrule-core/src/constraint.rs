//! The descriptor/evaluation contract every constraint implements.
//!
//! A [`Constraint`] is an immutable description of a matching rule. It can be
//! shared freely and instantiated any number of times; each call to
//! [`Constraint::initiate`] produces an independent [`Evaluation`] that owns
//! all the mutable state for one pass over one token sequence. Nothing
//! outside an evaluation ever inspects that state; the only observable
//! output is the [`Verdict`] returned by `initiate` and by every `step`.

use std::sync::Arc;

use crate::verdict::Verdict;

/// A boxed, exclusively owned evaluation.
pub type BoxEvaluation<T> = Box<dyn Evaluation<T> + Send>;

/// A shared, immutable constraint descriptor.
///
/// Combinators hold their children through this alias so one descriptor can
/// be instantiated many times (the path engine spawns fresh instances of the
/// same child on every admission).
pub type SharedConstraint<T> = Arc<dyn Constraint<T> + Send + Sync>;

/// An immutable matching rule over tokens of type `T`.
///
/// Descriptors are stateless and safely shared between concurrent matches;
/// all per-match state lives in the [`Evaluation`] returned by
/// [`initiate`](Constraint::initiate).
pub trait Constraint<T>: Send + Sync {
    /// Starts a fresh evaluation pass.
    ///
    /// Returns the evaluation together with its initial verdict: the verdict
    /// the empty token sequence earns under this constraint.
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict);

    /// Wraps this descriptor in an [`Arc`] for composition.
    fn shared(self) -> SharedConstraint<T>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// One stateful pass of a constraint over one token sequence.
///
/// An evaluation is exclusively owned by a single in-progress match and is
/// not restartable; a new pass requires a new evaluation from the same
/// descriptor. Once a verdict at the top level lacks the CONTINUE flag the
/// match driver feeds no further tokens. Combinators, by contrast, keep
/// stepping every child while they themselves continue; an evaluation whose
/// own state forbids continuation answers [`Verdict::Invalid`] from that
/// state, never by panicking.
pub trait Evaluation<T>: Send {
    /// Consumes one token, advancing internal state, and reports the verdict
    /// for the sequence consumed so far.
    fn step(&mut self, token: &T) -> Verdict;

    /// Clones this evaluation's state into an independent evaluation.
    ///
    /// The path engine advances one path's admission automaton speculatively
    /// once per candidate child; each speculation runs on a fork so the
    /// original path keeps its state. Implementations must deep-copy every
    /// piece of mutable state, including nested child evaluations.
    fn fork(&self) -> BoxEvaluation<T>;
}

impl<T, C> Constraint<T> for Arc<C>
where
    C: Constraint<T> + ?Sized,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        (**self).initiate()
    }
}

impl<T, C> Constraint<T> for &C
where
    C: Constraint<T> + ?Sized,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        (**self).initiate()
    }
}
