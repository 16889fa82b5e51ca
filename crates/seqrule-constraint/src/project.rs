//! Projection adapters: rewrite the token before an inner constraint sees it.
//!
//! These are the only places a token is transformed. The projection itself
//! belongs to the caller's token type: a field accessor closure for
//! [`Attribute`], an [`Index`] implementation for [`Key`].

use std::marker::PhantomData;
use std::ops::Index;
use std::sync::Arc;

use seqrule_core::{BoxEvaluation, Constraint, Evaluation, SharedConstraint, Verdict};

/// Applies an inner constraint to a projected attribute of each token.
///
/// # Examples
///
/// ```
/// use seqrule_constraint::{Attribute, Member};
/// use seqrule_core::matches;
///
/// struct Reading { sensor: u8, value: i32 }
///
/// let from_first_sensor = Attribute::new(|r: &Reading| r.sensor, Member::new([1u8]));
/// let readings = [Reading { sensor: 1, value: 40 }, Reading { sensor: 1, value: 41 }];
/// assert!(matches(&from_first_sensor, readings.iter()));
/// ```
pub struct Attribute<T, V, F> {
    project: Arc<F>,
    inner: SharedConstraint<V>,
    _marker: PhantomData<fn(&T) -> V>,
}

impl<T, V, F> Attribute<T, V, F>
where
    F: Fn(&T) -> V,
{
    /// Wraps `inner` behind the attribute accessor `project`.
    pub fn new(project: F, inner: impl Constraint<V> + 'static) -> Self {
        Attribute {
            project: Arc::new(project),
            inner: inner.shared(),
            _marker: PhantomData,
        }
    }
}

struct AttributeEval<T, V, F> {
    project: Arc<F>,
    inner: BoxEvaluation<V>,
    _marker: PhantomData<fn(&T) -> V>,
}

impl<T, V, F> Evaluation<T> for AttributeEval<T, V, F>
where
    F: Fn(&T) -> V + Send + Sync + 'static,
    T: 'static,
    V: 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        let projected = (self.project)(token);
        self.inner.step(&projected)
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(AttributeEval {
            project: Arc::clone(&self.project),
            inner: self.inner.fork(),
            _marker: PhantomData,
        })
    }
}

impl<T, V, F> Constraint<T> for Attribute<T, V, F>
where
    F: Fn(&T) -> V + Send + Sync + 'static,
    T: 'static,
    V: 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let (inner, verdict) = self.inner.initiate();
        let eval = AttributeEval {
            project: Arc::clone(&self.project),
            inner,
            _marker: PhantomData,
        };
        (Box::new(eval), verdict)
    }
}

/// Applies an inner constraint to an indexed component of each token.
///
/// Works with any token type implementing [`Index`] for the key, so map and
/// slice tokens compose without a custom accessor.
pub struct Key<K, T>
where
    T: Index<K>,
    T::Output: Sized,
{
    key: K,
    inner: SharedConstraint<T::Output>,
}

impl<K, T> Key<K, T>
where
    T: Index<K>,
    T::Output: Sized,
{
    /// Wraps `inner` behind index lookups with `key`.
    pub fn new(key: K, inner: impl Constraint<T::Output> + 'static) -> Self {
        Key {
            key,
            inner: inner.shared(),
        }
    }
}

struct KeyEval<K, T>
where
    T: Index<K>,
    T::Output: Sized,
{
    key: K,
    inner: BoxEvaluation<T::Output>,
}

impl<K, T> Evaluation<T> for KeyEval<K, T>
where
    K: Clone + Send + Sync + 'static,
    T: Index<K> + 'static,
    T::Output: Sized + 'static,
{
    fn step(&mut self, token: &T) -> Verdict {
        self.inner.step(&token[self.key.clone()])
    }

    fn fork(&self) -> BoxEvaluation<T> {
        Box::new(KeyEval {
            key: self.key.clone(),
            inner: self.inner.fork(),
        })
    }
}

impl<K, T> Constraint<T> for Key<K, T>
where
    K: Clone + Send + Sync + 'static,
    T: Index<K> + 'static,
    T::Output: Sized + 'static,
{
    fn initiate(&self) -> (BoxEvaluation<T>, Verdict) {
        let (inner, verdict) = self.inner.initiate();
        let eval = KeyEval::<K, T> {
            key: self.key.clone(),
            inner,
        };
        (Box::new(eval), verdict)
    }
}
