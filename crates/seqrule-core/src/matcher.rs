//! The match driver: the sole evaluation entry point.

use std::borrow::Borrow;

use crate::constraint::Constraint;
use crate::verdict::Verdict;

/// Matches a finite token sequence against a constraint descriptor.
///
/// Instantiates the descriptor once and feeds tokens in order. If the
/// verdict ever loses its CONTINUE flag while tokens remain, the sequence is
/// rejected outright and the remaining tokens are not consumed. This
/// short-circuit belongs to the driver alone; combinators keep feeding
/// their children as long as they themselves continue.
///
/// The token source is consumed at most once; any `IntoIterator` whose items
/// borrow as `T` works, so owned sequences, slices, and `str::chars` all
/// compose directly.
///
/// # Examples
///
/// ```
/// use seqrule_core::{matches, BoxEvaluation, Constraint, Evaluation, Verdict};
///
/// /// Accepts any sequence of even numbers.
/// struct Even;
/// struct EvenEval;
///
/// impl Constraint<i64> for Even {
///     fn initiate(&self) -> (BoxEvaluation<i64>, Verdict) {
///         (Box::new(EvenEval), Verdict::Satisfied)
///     }
/// }
///
/// impl Evaluation<i64> for EvenEval {
///     fn step(&mut self, token: &i64) -> Verdict {
///         if token % 2 == 0 { Verdict::Satisfied } else { Verdict::Invalid }
///     }
///     fn fork(&self) -> BoxEvaluation<i64> {
///         Box::new(EvenEval)
///     }
/// }
///
/// assert!(matches(&Even, [2, 4, 6]));
/// assert!(!matches(&Even, [2, 3]));
/// ```
pub fn matches<T, C, I>(constraint: &C, tokens: I) -> bool
where
    C: Constraint<T> + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let (mut evaluation, mut verdict) = constraint.initiate();

    for token in tokens {
        if !verdict.may_continue() {
            verdict = Verdict::Invalid;
            break;
        }
        verdict = evaluation.step(token.borrow());
    }

    verdict.accepts()
}
