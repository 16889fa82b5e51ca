//! Constraints on token counts and running values.

use std::ops::Add;

use seqrule_core::{
    BoxEvaluation, Constraint, ConstraintError, Evaluation, Result, SharedConstraint, Verdict,
};

/// Matches by the number of tokens consumed, ignoring their values.
///
/// The verdict tracks where the running count sits relative to the bounds:
/// below `min` the match can only continue, inside the range it is
/// acceptable and extendable, exactly at `max` it is acceptable but closed,
/// and a step past `max` is invalid and leaves the count untouched.
///
/// # Examples
///
/// ```
/// use seqrule_constraint::CountRange;
/// use seqrule_core::matches;
///
/// let c = CountRange::between(1, 3).unwrap();
/// assert!(!matches(&c, "".chars()));
/// assert!(matches(&c, "ab".chars()));
/// assert!(!matches(&c, "abcd".chars()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CountRange {
    min: usize,
    max: Option<usize>,
}

impl CountRange {
    /// Matches sequences whose length lies in `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::EmptyCountRange`] if `min > max`.
    pub fn between(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(ConstraintError::EmptyCountRange { min, max });
        }
        Ok(CountRange {
            min,
            max: Some(max),
        })
    }

    /// Matches sequences of at least `min` tokens, with no upper bound.
    pub fn at_least(min: usize) -> Self {
        CountRange { min, max: None }
    }

    /// Matches sequences of exactly `n` tokens.
    pub fn exactly(n: usize) -> Self {
        CountRange { min: n, max: Some(n) }
    }

    fn verdict_at(self, count: usize) -> Verdict {
        if count < self.min {
            return Verdict::Continue;
        }
        match self.max {
            None => Verdict::Satisfied,
            Some(max) if count < max => Verdict::Satisfied,
            Some(max) if count == max => Verdict::Matching,
            Some(_) => Verdict::Invalid,
        }
    }
}

struct CountRangeEval {
    range: CountRange,
    count: usize,
}

impl<T> Evaluation<T> for CountRangeEval {
    fn step(&mut self, _token: &T) -> Verdict {
        // Past max the count stays untouched: canonical policy for steps
        // beyond the upper bound.
        if let Some(max) = self.range.max {
            if self.count >= max {
                return Verdict::Invalid;
            }
        }
        self.count += 1;
        self.range.verdict_at(self.count)
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(CountRangeEval {
            range: self.range,
            count: self.count,
        })
    }
}

impl<T: 'static> Constraint<T> for CountRange {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = CountRangeEval {
            range: *self,
            count: 0,
        };
        (Box::new(eval), self.verdict_at(0))
    }
}

/// Matches tokens that step through an arithmetic run from `min` to `max`.
///
/// Each token must equal the running expected value `min`, `min + step`,
/// `min + 2 * step`, and so on. The match becomes acceptable once the
/// expected value reaches `max`; once it would pass `max`, no further token
/// is admissible.
///
/// Over `usize` child indices this doubles as the admission automaton that
/// turns a `Group` into an ordered `Sequence`.
#[derive(Debug, Clone, Copy)]
pub struct SteppedRange<T> {
    min: T,
    max: T,
    step: T,
}

impl<T> SteppedRange<T>
where
    T: PartialOrd + Add<Output = T> + Copy,
{
    /// Creates a stepped range over `min..=max` advancing by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::EmptyValueRange`] if `min > max`, and
    /// [`ConstraintError::ZeroStep`] if `min + step` does not exceed `min`.
    pub fn new(min: T, max: T, step: T) -> Result<Self> {
        if min > max {
            return Err(ConstraintError::EmptyValueRange);
        }
        if min + step <= min {
            return Err(ConstraintError::ZeroStep);
        }
        Ok(SteppedRange { min, max, step })
    }
}

struct SteppedRangeEval<T> {
    expected: T,
    max: T,
    step: T,
}

impl<T> Evaluation<T> for SteppedRangeEval<T>
where
    T: PartialOrd + Add<Output = T> + Copy + Send + Sync + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        if *token != self.expected || *token > self.max {
            return Verdict::Invalid;
        }
        self.expected = *token + self.step;
        if self.expected < self.max {
            Verdict::Continue
        } else if self.expected <= self.max {
            Verdict::Satisfied
        } else {
            Verdict::Matching
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(SteppedRangeEval {
            expected: self.expected,
            max: self.max,
            step: self.step,
        })
    }
}

impl<T> Constraint<T> for SteppedRange<T>
where
    T: PartialOrd + Add<Output = T> + Copy + Send + Sync + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = SteppedRangeEval {
            expected: self.min,
            max: self.max,
            step: self.step,
        };
        // The empty sequence is acceptable only when the run is already
        // within one step of the upper bound.
        let verdict = if self.min + self.step < self.max {
            Verdict::Continue
        } else {
            Verdict::Satisfied
        };
        (Box::new(eval), verdict)
    }
}

/// Feeds an inner constraint the running token count instead of token
/// values, so any value constraint doubles as a length constraint.
///
/// The inner constraint sees `0` when the tally is initiated and `n` when
/// the `n`-th token (1-based) arrives.
#[derive(Clone)]
pub struct Tally {
    inner: SharedConstraint<usize>,
}

impl Tally {
    /// Wraps `inner` so it observes counts rather than tokens.
    pub fn new(inner: impl Constraint<usize> + 'static) -> Self {
        Tally {
            inner: inner.shared(),
        }
    }
}

struct TallyEval {
    count: usize,
    inner: BoxEvaluation<usize>,
}

impl<T> Evaluation<T> for TallyEval {
    fn step(&mut self, _token: &T) -> Verdict {
        let verdict = self.inner.step(&self.count);
        if verdict == Verdict::Invalid {
            return Verdict::Invalid;
        }
        self.count += 1;
        verdict
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(TallyEval {
            count: self.count,
            inner: self.inner.fork(),
        })
    }
}

impl<T: 'static> Constraint<T> for Tally {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let (mut inner, _) = self.inner.initiate();
        // The count 0 is observed before any token arrives, so the inner
        // verdict on 0 is the tally's initial verdict.
        let verdict = inner.step(&0);
        (Box::new(TallyEval { count: 1, inner }), verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Member;
    use seqrule_core::matches;

    #[test]
    fn test_count_range_bounded() {
        let c = CountRange::between(1, 3).unwrap();
        assert!(!matches(&c, "".chars()));
        assert!(matches(&c, "1".chars()));
        assert!(matches(&c, "11".chars()));
        assert!(matches(&c, "111".chars()));
        assert!(!matches(&c, "1111".chars()));
    }

    #[test]
    fn test_count_range_unbounded() {
        let c = CountRange::at_least(2);
        assert!(!matches(&c, "".chars()));
        assert!(!matches(&c, "1".chars()));
        assert!(matches(&c, "11".chars()));
        assert!(matches(&c, "111".chars()));
        assert!(matches(&c, "1111".chars()));
    }

    #[test]
    fn test_count_range_exact() {
        let c = CountRange::exactly(0);
        assert!(matches(&c, Vec::<u8>::new()));
        assert!(!matches(&c, [1u8]));

        let c = CountRange::exactly(2);
        assert!(!matches(&c, [1, 2, 3]));
        assert!(matches(&c, [1, 2]));
    }

    #[test]
    fn test_count_range_rejects_inverted_bounds() {
        assert_eq!(
            CountRange::between(3, 1).unwrap_err(),
            ConstraintError::EmptyCountRange { min: 3, max: 1 }
        );
    }

    #[test]
    fn test_stepped_range_walks_the_run() {
        let c = SteppedRange::new(3, 15, 2).unwrap();
        assert!(matches(&c, [3, 5, 7, 9, 11, 13]));
        assert!(matches(&c, [3, 5, 7, 9, 11, 13, 15]));
        assert!(!matches(&c, [3, 5, 9]));
        assert!(!matches(&c, [5, 7]));
        assert!(!matches(&c, [3, 5]));
    }

    #[test]
    fn test_stepped_range_stops_past_max() {
        let c = SteppedRange::new(3, 15, 2).unwrap();
        // After 15 the expected value exceeds max, so nothing more fits.
        assert!(!matches(&c, [3, 5, 7, 9, 11, 13, 15, 17]));
    }

    #[test]
    fn test_stepped_range_construction_errors() {
        assert_eq!(
            SteppedRange::new(5, 1, 1).unwrap_err(),
            ConstraintError::EmptyValueRange
        );
        assert_eq!(
            SteppedRange::new(0, 10, 0).unwrap_err(),
            ConstraintError::ZeroStep
        );
        assert_eq!(
            SteppedRange::new(0i32, 10, -2).unwrap_err(),
            ConstraintError::ZeroStep
        );
    }

    #[test]
    fn test_tally_observes_counts_not_values() {
        // Lengths 0..=2 are acceptable regardless of token values.
        let c = Tally::new(Member::new([0usize, 1, 2]));
        assert!(matches(&c, Vec::<char>::new()));
        assert!(matches(&c, "xy".chars()));
        assert!(!matches(&c, "xyz".chars()));
    }
}
