//! Logical combinators: conjunction and disjunction across constraints.
//!
//! Both fan each token out to independently instantiated children and reduce
//! the child verdicts with the lattice operators. Every child sees every
//! token for as long as the combinator itself is stepped: a child whose own
//! state forbids continuation answers `Invalid` for itself, while a
//! stateless child answers per token. `Or` over memberships is therefore a
//! token-wise set union.

use seqrule_core::{BoxEvaluation, Constraint, Evaluation, SharedConstraint, Verdict};

struct FanOut<T> {
    children: Vec<BoxEvaluation<T>>,
    identity: Verdict,
}

impl<T: 'static> Evaluation<T> for FanOut<T> {
    fn step(&mut self, token: &T) -> Verdict {
        let conjunctive = self.identity == Verdict::Satisfied;
        let mut combined = self.identity;
        for child in &mut self.children {
            let verdict = child.step(token);
            combined = if conjunctive {
                combined & verdict
            } else {
                combined | verdict
            };
        }
        combined
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(FanOut {
            children: self.children.iter().map(|child| child.fork()).collect(),
            identity: self.identity,
        })
    }
}

fn fan_out<T>(children: &[SharedConstraint<T>], identity: Verdict) -> (BoxEvaluation<T>, Verdict)
where
    T: 'static,
{
    let conjunctive = identity == Verdict::Satisfied;
    let mut evaluations = Vec::with_capacity(children.len());
    let mut combined = identity;
    for child in children {
        let (eval, verdict) = child.initiate();
        evaluations.push(eval);
        combined = if conjunctive {
            combined & verdict
        } else {
            combined | verdict
        };
    }
    let eval = FanOut {
        children: evaluations,
        identity,
    };
    (Box::new(eval), combined)
}

/// Matches sequences that satisfy every child constraint.
///
/// Child verdicts reduce under the lattice AND; `And` of no children is the
/// AND identity and accepts everything.
///
/// # Examples
///
/// ```
/// use seqrule_constraint::{And, CountRange, Member};
/// use seqrule_core::{matches, Constraint};
///
/// let c = And::new([
///     CountRange::between(1, 2).unwrap().shared(),
///     Member::new("abc".chars()).shared(),
/// ]);
/// assert!(matches(&c, "a".chars()));
/// assert!(matches(&c, "bc".chars()));
/// assert!(!matches(&c, "abc".chars()));
/// assert!(!matches(&c, "".chars()));
/// ```
pub struct And<T> {
    children: Vec<SharedConstraint<T>>,
}

impl<T> And<T> {
    /// Creates a conjunction over the given children.
    pub fn new(children: impl IntoIterator<Item = SharedConstraint<T>>) -> Self {
        And {
            children: children.into_iter().collect(),
        }
    }
}

impl<T: 'static> Constraint<T> for And<T> {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        fan_out(&self.children, Verdict::Satisfied)
    }
}

/// Matches sequences that satisfy at least one child constraint.
///
/// Child verdicts reduce under the lattice OR; `Or` of no children is the
/// OR identity and rejects everything.
pub struct Or<T> {
    children: Vec<SharedConstraint<T>>,
}

impl<T> Or<T> {
    /// Creates a disjunction over the given children.
    pub fn new(children: impl IntoIterator<Item = SharedConstraint<T>>) -> Self {
        Or {
            children: children.into_iter().collect(),
        }
    }
}

impl<T: 'static> Constraint<T> for Or<T> {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        fan_out(&self.children, Verdict::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::CountRange;
    use crate::trivial::{Any, Null};
    use crate::value::{Member, Unique};
    use seqrule_core::matches;

    #[test]
    fn test_and_single_child() {
        let c = And::new([Null.shared()]);
        assert!(matches(&c, Vec::<i32>::new()));
        assert!(!matches(&c, [1]));
    }

    #[test]
    fn test_and_behaves_like_intersection() {
        let c = And::new([Any.shared(), Any.shared()]);
        assert!(matches(&c, Vec::<i32>::new()));
        assert!(matches(&c, [1]));
        assert!(matches(&c, [1, 1]));

        let c = And::new([Null.shared(), Any.shared()]);
        assert!(matches(&c, Vec::<i32>::new()));
        assert!(!matches(&c, [1]));
        assert!(!matches(&c, [1, 1]));
    }

    #[test]
    fn test_and_count_and_membership() {
        let c = And::new([
            CountRange::between(1, 2).unwrap().shared(),
            Member::new("abc".chars()).shared(),
        ]);
        assert!(matches(&c, "a".chars()));
        assert!(matches(&c, "bc".chars()));
        assert!(!matches(&c, "abc".chars()));
        assert!(!matches(&c, "".chars()));
    }

    #[test]
    fn test_or_of_count_ranges() {
        let c = Or::new([
            CountRange::between(1, 1).unwrap().shared(),
            CountRange::between(3, 4).unwrap().shared(),
        ]);
        assert!(!matches(&c, "".chars()));
        assert!(matches(&c, "a".chars()));
        assert!(!matches(&c, "ab".chars()));
        assert!(matches(&c, "abc".chars()));
        assert!(matches(&c, "abcd".chars()));
        assert!(!matches(&c, "abcde".chars()));
    }

    #[test]
    fn test_or_of_members_is_tokenwise_union() {
        let letters = Member::new('a'..='z').shared();
        let c = Or::new([Member::new(['_']).shared(), letters]);
        assert!(matches(&c, "_a".chars()));
        assert!(matches(&c, "a_a_".chars()));
        assert!(matches(&c, "ab_cd".chars()));
        assert!(!matches(&c, "_1".chars()));
    }

    #[test]
    fn test_or_children_rejoin_after_rejecting() {
        // Unique rejects the repeated 'a' but is consulted again on 'b';
        // only its own state decides, not the earlier rejection.
        let c = Or::new([Unique.shared(), CountRange::at_least(4).shared()]);
        assert!(matches(&c, "aab".chars()));
        assert!(matches(&c, "aabb".chars()));
    }

    #[test]
    fn test_empty_combinators_are_identities() {
        let all: And<i32> = And::new([]);
        assert!(matches(&all, [1, 2, 3]));
        let none: Or<i32> = Or::new([]);
        assert!(!matches(&none, Vec::<i32>::new()));
        assert!(!matches(&none, [1]));
    }
}
