//! The path engine: unordered composition under an admission automaton.
//!
//! A `Group` composes child constraints so that, as tokens arrive, the
//! active child may hand over to a fresh instance of any admissible child.
//! Which children are admissible, in what order and how many times, is
//! decided by a meta-constraint evaluated over the sequence of chosen child
//! indices, never over token values.
//!
//! Instead of backtracking, the evaluation keeps a set of live paths and
//! advances all of them on every token, like a small nondeterministic
//! automaton: a path whose active child can continue is continued, and a
//! path whose active child could stop here spawns a sibling path for every
//! admissible child. Paths whose verdict goes invalid are dropped.

use smallvec::SmallVec;
use tracing::trace;

use seqrule_constraint::Any;
use seqrule_core::{BoxEvaluation, Constraint, Evaluation, SharedConstraint, Verdict};

/// Composes children in any order, bounded by a meta-constraint.
///
/// With the default meta-constraint ([`Any`]) children may recur in any
/// order, any number of times. A `Group` accepts the empty sequence exactly
/// when its meta-constraint does.
///
/// # Resource note
///
/// The live path set is the only unbounded resource in the system. Children
/// that are stateless and accept many tokens identically make the set grow
/// each step; enable `trace`-level logging for this module to watch the
/// per-step path counts.
///
/// # Examples
///
/// ```
/// use seqrule_constraint::{Member, ValueRange};
/// use seqrule_core::{matches, Constraint};
/// use seqrule_engine::Group;
///
/// let digits = ValueRange::new('0', '9').unwrap();
/// let dashes = Member::new(['-']);
/// let phone = Group::new([digits.shared(), dashes.shared()]);
/// assert!(matches(&phone, "123-456-7890".chars()));
/// assert!(!matches(&phone, "123x456".chars()));
/// ```
pub struct Group<T> {
    children: Vec<SharedConstraint<T>>,
    meta: SharedConstraint<usize>,
}

impl<T: 'static> Group<T> {
    /// Creates a group whose children may be chosen freely.
    pub fn new(children: impl IntoIterator<Item = SharedConstraint<T>>) -> Self {
        Group::with_meta(children, Any.shared())
    }

    /// Creates a group whose admissions are governed by `meta`.
    ///
    /// The meta-constraint is fed the index of every child the engine tries
    /// to activate; an admission it rejects is simply not explored.
    pub fn with_meta(
        children: impl IntoIterator<Item = SharedConstraint<T>>,
        meta: SharedConstraint<usize>,
    ) -> Self {
        Group {
            children: children.into_iter().collect(),
            meta,
        }
    }

    /// Number of child constraints.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// One candidate parse branch: an admission automaton state plus the active
/// child evaluation. The seed path has no active child and a `Matching`
/// child verdict, meaning "ready to start one".
struct Path<T> {
    meta_eval: BoxEvaluation<usize>,
    meta_verdict: Verdict,
    child_id: Option<usize>,
    child_eval: Option<BoxEvaluation<T>>,
    child_verdict: Verdict,
}

impl<T> Path<T> {
    /// CONTINUE if either the child or the admission automaton can extend;
    /// MATCHING only if both agree the composition is complete here.
    fn contribution(&self) -> Verdict {
        Verdict::from_flags(
            self.child_verdict.may_continue() || self.meta_verdict.may_continue(),
            self.child_verdict.accepts() && self.meta_verdict.accepts(),
        )
    }

    fn fork(&self) -> Path<T> {
        Path {
            meta_eval: self.meta_eval.fork(),
            meta_verdict: self.meta_verdict,
            child_id: self.child_id,
            child_eval: self.child_eval.as_ref().map(|eval| eval.fork()),
            child_verdict: self.child_verdict,
        }
    }
}

type PathSet<T> = SmallVec<[Path<T>; 4]>;

struct GroupEval<T> {
    children: Vec<SharedConstraint<T>>,
    paths: PathSet<T>,
    invalidated: bool,
}

impl<T: 'static> GroupEval<T> {
    /// Builds the next generation of paths for one token.
    fn advance(&self, token: &T) -> PathSet<T> {
        let mut next: PathSet<T> = SmallVec::new();

        for path in &self.paths {
            if path.child_verdict.may_continue() {
                // Continue the active child on a fork, leaving this
                // generation intact for rollback.
                let mut continued = path.fork();
                if let Some(child) = continued.child_eval.as_mut() {
                    let verdict = child.step(token);
                    if verdict != Verdict::Invalid {
                        continued.child_verdict = verdict;
                        next.push(continued);
                    }
                }
            }

            if path.child_verdict.accepts() && path.meta_verdict.may_continue() {
                // The active child could stop here, so every admissible
                // child is eligible to take over at this token.
                for (id, child) in self.children.iter().enumerate() {
                    let mut meta_eval = path.meta_eval.fork();
                    let meta_verdict = meta_eval.step(&id);
                    if meta_verdict == Verdict::Invalid {
                        continue;
                    }
                    let (mut child_eval, initial) = child.initiate();
                    if !initial.may_continue() {
                        continue;
                    }
                    let child_verdict = child_eval.step(token);
                    if child_verdict == Verdict::Invalid {
                        continue;
                    }
                    next.push(Path {
                        meta_eval,
                        meta_verdict,
                        child_id: Some(id),
                        child_eval: Some(child_eval),
                        child_verdict,
                    });
                }
            }
        }

        next
    }
}

impl<T: 'static> Evaluation<T> for GroupEval<T> {
    fn step(&mut self, token: &T) -> Verdict {
        if self.invalidated {
            return Verdict::Invalid;
        }

        let next = self.advance(token);
        let verdict = next
            .iter()
            .fold(Verdict::Invalid, |acc, path| acc | path.contribution());

        trace!(
            live = self.paths.len(),
            next = next.len(),
            verdict = %verdict,
            "advanced path set"
        );

        if verdict == Verdict::Invalid {
            // Roll back: keep the last valid generation untouched.
            self.invalidated = true;
            return Verdict::Invalid;
        }

        self.paths = next;
        verdict
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(GroupEval {
            children: self.children.clone(),
            paths: self.paths.iter().map(Path::fork).collect(),
            invalidated: self.invalidated,
        })
    }
}

impl<T: 'static> Constraint<T> for Group<T> {
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let (meta_eval, meta_verdict) = self.meta.initiate();
        let seed = Path {
            meta_eval,
            meta_verdict,
            child_id: None,
            child_eval: None,
            child_verdict: Verdict::Matching,
        };
        let mut paths = PathSet::new();
        paths.push(seed);
        let eval = GroupEval {
            children: self.children.clone(),
            paths,
            invalidated: false,
        };
        (Box::new(eval), meta_verdict)
    }
}
