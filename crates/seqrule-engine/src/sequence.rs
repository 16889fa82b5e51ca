//! Ordered composition: each child once, in declaration order.

use seqrule_constraint::SteppedRange;
use seqrule_core::{BoxEvaluation, Constraint, SharedConstraint, Verdict};

use crate::group::Group;

/// Matches a sequence of constraints, strictly left to right.
///
/// A `Sequence` is a [`Group`] whose admission automaton is a
/// [`SteppedRange`] over child indices: the ids must step through
/// `0, 1, …, n - 1` exactly once each, which pins the children to
/// declaration order. The engine still explores every split point between
/// adjacent children, so a child handing over "as early as possible" and
/// "as late as possible" are both considered.
///
/// # Examples
///
/// ```
/// use seqrule_constraint::{And, Member, Or, Single};
/// use seqrule_core::{matches, Constraint};
/// use seqrule_engine::Sequence;
///
/// let letters = Member::new(('a'..='z').chain('A'..='Z')).shared();
/// let first = And::new([
///     Single.shared(),
///     Or::new([Member::new(['_']).shared(), letters.clone()]).shared(),
/// ]);
/// let rest = Or::new([letters, Member::new('0'..='9').shared()]);
/// let name = Sequence::new([first.shared(), rest.shared()]);
///
/// assert!(matches(&name, "_tmp1".chars()));
/// assert!(!matches(&name, "1tmp".chars()));
/// ```
pub struct Sequence<T> {
    group: Group<T>,
}

impl<T: 'static> Sequence<T> {
    /// Creates an ordered composition of the given children.
    pub fn new(children: impl IntoIterator<Item = SharedConstraint<T>>) -> Self {
        let children: Vec<_> = children.into_iter().collect();
        let n = children.len();
        let meta = SteppedRange::new(0usize, n, 1)
            .expect("a unit step over 0..=n is always a valid stepped range");
        Sequence {
            group: Group::with_meta(children, meta.shared()),
        }
    }
}

impl<T: 'static> Constraint<T> for Sequence<T> {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        self.group.initiate()
    }
}
