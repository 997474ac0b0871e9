//! Lifecycle guard around a dispatch function.

use super::lifecycle::ScopeHandle;
use std::sync::Arc;
use tracing::debug;

/// A dispatch function that goes quiet after its owner's teardown.
///
/// Wraps a raw state-update function so that calls made after the owning
/// [`ActiveScope`](super::ActiveScope) deactivates are silently dropped.
/// A settling future that outlives its owner is an expected event, not a
/// bug to surface, so late calls produce a `debug` log and nothing else.
///
/// The wrapped function is a single allocation fixed at construction;
/// clones share it, which is what keeps downstream handles such as
/// [`Runner`](crate::machine::Runner) referentially stable.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use settle::scope::{ActiveScope, SafeDispatch};
///
/// let scope = ActiveScope::new();
/// let count = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&count);
/// let dispatch = SafeDispatch::new(scope.handle(), move |_: u32| {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// dispatch.dispatch(1);
/// scope.deactivate();
/// dispatch.dispatch(2); // dropped
/// assert_eq!(count.load(Ordering::SeqCst), 1);
/// ```
pub struct SafeDispatch<A> {
    scope: ScopeHandle,
    dispatch: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> SafeDispatch<A> {
    /// Wrap a raw dispatch function with the given scope's lifetime.
    pub fn new<F>(scope: ScopeHandle, dispatch: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            scope,
            dispatch: Arc::new(dispatch),
        }
    }

    /// Forward the action if the scope is still active; drop it otherwise.
    pub fn dispatch(&self, action: A) {
        if self.scope.is_active() {
            (self.dispatch)(action);
        } else {
            debug!("dropping dispatch after scope teardown");
        }
    }

    /// Check whether two guards share the same underlying dispatch
    /// function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dispatch, &other.dispatch)
    }
}

impl<A> Clone for SafeDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            dispatch: Arc::clone(&self.dispatch),
        }
    }
}

impl<A> std::fmt::Debug for SafeDispatch<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeDispatch")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ActiveScope;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_dispatch(scope: &ActiveScope) -> (SafeDispatch<u32>, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let dispatch = SafeDispatch::new(scope.handle(), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (dispatch, count)
    }

    #[test]
    fn forwards_while_active() {
        let scope = ActiveScope::new();
        let (dispatch, count) = counting_dispatch(&scope);

        dispatch.dispatch(1);
        dispatch.dispatch(2);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn drops_after_deactivation_without_panicking() {
        let scope = ActiveScope::new();
        let (dispatch, count) = counting_dispatch(&scope);

        dispatch.dispatch(1);
        scope.deactivate();
        dispatch.dispatch(2);
        dispatch.dispatch(3);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_the_underlying_function() {
        let scope = ActiveScope::new();
        let (dispatch, count) = counting_dispatch(&scope);
        let clone = dispatch.clone();

        assert!(dispatch.ptr_eq(&clone));

        clone.dispatch(1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_guards_are_not_pointer_equal() {
        let scope = ActiveScope::new();
        let (a, _) = counting_dispatch(&scope);
        let (b, _) = counting_dispatch(&scope);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn forwards_the_action_payload() {
        let scope = ActiveScope::new();
        let last = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&last);
        let dispatch = SafeDispatch::new(scope.handle(), move |n: u32| {
            seen.store(n as usize, Ordering::SeqCst);
        });

        dispatch.dispatch(42);
        assert_eq!(last.load(Ordering::SeqCst), 42);
    }
}
