//! Constraints on token values: membership, ordering, uniqueness.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use seqrule_core::{
    BoxEvaluation, Constraint, ConstraintError, Evaluation, Result, Verdict,
};

/// Matches tokens that belong to a fixed set of elements.
#[derive(Debug, Clone)]
pub struct Member<T> {
    elements: Arc<HashSet<T>>,
}

impl<T: Eq + Hash> Member<T> {
    /// Creates a membership constraint from any collection of elements.
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Member {
            elements: Arc::new(elements.into_iter().collect()),
        }
    }
}

struct MemberEval<T> {
    elements: Arc<HashSet<T>>,
}

impl<T> Evaluation<T> for MemberEval<T>
where
    T: Eq + Hash + Send + Sync + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        if self.elements.contains(token) {
            Verdict::Satisfied
        } else {
            Verdict::Invalid
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(MemberEval {
            elements: Arc::clone(&self.elements),
        })
    }
}

impl<T> Constraint<T> for Member<T>
where
    T: Eq + Hash + Send + Sync + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = MemberEval {
            elements: Arc::clone(&self.elements),
        };
        (Box::new(eval), Verdict::Satisfied)
    }
}

/// Matches tokens `t` with `min <= t <= max`.
#[derive(Debug, Clone)]
pub struct ValueRange<T> {
    bounds: Arc<(T, T)>,
}

impl<T: PartialOrd> ValueRange<T> {
    /// Creates an inclusive value range.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::EmptyValueRange`] if `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(ConstraintError::EmptyValueRange);
        }
        Ok(ValueRange {
            bounds: Arc::new((min, max)),
        })
    }
}

struct ValueRangeEval<T> {
    bounds: Arc<(T, T)>,
}

impl<T> Evaluation<T> for ValueRangeEval<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        let (min, max) = &*self.bounds;
        if min <= token && token <= max {
            Verdict::Satisfied
        } else {
            Verdict::Invalid
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(ValueRangeEval {
            bounds: Arc::clone(&self.bounds),
        })
    }
}

impl<T> Constraint<T> for ValueRange<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = ValueRangeEval {
            bounds: Arc::clone(&self.bounds),
        };
        (Box::new(eval), Verdict::Satisfied)
    }
}

/// Matches sequences with no repeated token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unique;

impl Unique {
    /// Creates the no-repeats constraint.
    pub fn new() -> Self {
        Unique
    }
}

struct UniqueEval<T> {
    seen: HashSet<T>,
}

impl<T> Evaluation<T> for UniqueEval<T>
where
    T: Eq + Hash + Clone + Send + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        if self.seen.contains(token) {
            Verdict::Invalid
        } else {
            self.seen.insert(token.clone());
            Verdict::Satisfied
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(UniqueEval {
            seen: self.seen.clone(),
        })
    }
}

impl<T> Constraint<T> for Unique
where
    T: Eq + Hash + Clone + Send + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = UniqueEval::<T> {
            seen: HashSet::new(),
        };
        (Box::new(eval), Verdict::Satisfied)
    }
}

/// Matches sequences where each token is `>=` its predecessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl Ascending {
    /// Creates the non-decreasing constraint.
    pub fn new() -> Self {
        Ascending
    }
}

struct AscendingEval<T> {
    previous: Option<T>,
}

impl<T> Evaluation<T> for AscendingEval<T>
where
    T: PartialOrd + Clone + Send + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        match &self.previous {
            Some(previous) if !(previous <= token) => Verdict::Invalid,
            _ => {
                self.previous = Some(token.clone());
                Verdict::Satisfied
            }
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(AscendingEval {
            previous: self.previous.clone(),
        })
    }
}

impl<T> Constraint<T> for Ascending
where
    T: PartialOrd + Clone + Send + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = AscendingEval::<T> { previous: None };
        (Box::new(eval), Verdict::Satisfied)
    }
}

/// Matches sequences where no token equals its immediate predecessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alternate;

impl Alternate {
    /// Creates the no-consecutive-repeats constraint.
    pub fn new() -> Self {
        Alternate
    }
}

struct AlternateEval<T> {
    previous: Option<T>,
}

impl<T> Evaluation<T> for AlternateEval<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        match &self.previous {
            Some(previous) if previous == token => Verdict::Invalid,
            _ => {
                self.previous = Some(token.clone());
                Verdict::Satisfied
            }
        }
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(AlternateEval {
            previous: self.previous.clone(),
        })
    }
}

impl<T> Constraint<T> for Alternate
where
    T: PartialEq + Clone + Send + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let eval = AlternateEval::<T> { previous: None };
        (Box::new(eval), Verdict::Satisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqrule_core::matches;

    #[test]
    fn test_member() {
        let nine = Member::new(0..9);
        let ten = Member::new(0..10);
        assert!(matches(&ten, 0..9));
        assert!(!matches(&nine, 0..10));
    }

    #[test]
    fn test_value_range() {
        let c = ValueRange::new(1, 6).unwrap();
        assert!(matches(&c, [1, 2, 3, 4, 5, 6]));
        assert!(matches(&c, [1, 2, 3, 4, 5, 6, 1, 2, 3, 4, 5, 6]));
        assert!(!matches(&c, [0]));
        assert!(!matches(&c, [7]));
    }

    #[test]
    fn test_value_range_rejects_inverted_bounds() {
        assert_eq!(
            ValueRange::new(6, 1).unwrap_err(),
            ConstraintError::EmptyValueRange
        );
    }

    #[test]
    fn test_unique() {
        assert!(matches(&Unique, "abcdefghijklmno9231".chars()));
        assert!(matches(&Unique, "abcd".chars()));
        assert!(!matches(&Unique, "abca".chars()));
    }

    #[test]
    fn test_ascending() {
        assert!(matches(&Ascending, [1, 2, 2, 3, 3, 4, 5, 6, 7]));
        assert!(matches(&Ascending, [1, 2, 2, 3]));
        assert!(!matches(&Ascending, [1, 2, 1]));
        assert!(!matches(&Ascending, [1, 2, 3, 0]));
        assert!(matches(&Ascending, "aaaabcdefg".chars()));
        assert!(!matches(&Ascending, "xyza".chars()));
    }

    #[test]
    fn test_alternate() {
        assert!(matches(&Alternate, "".chars()));
        assert!(matches(&Alternate, "a".chars()));
        assert!(matches(&Alternate, "abababa".chars()));
        assert!(matches(&Alternate, "abcbabcabacb".chars()));
        assert!(!matches(&Alternate, "aa".chars()));
        assert!(!matches(&Alternate, "bacc".chars()));
    }
}
