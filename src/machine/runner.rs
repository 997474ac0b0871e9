//! The `run` entry point.

use crate::core::Action;
use crate::scope::SafeDispatch;
use std::future::Future;
use tracing::trace;

/// Stable handle that starts a tracked operation.
///
/// A machine builds exactly one `Runner` at construction and hands out
/// clones of it. The runner holds only the lifecycle-guarded dispatch,
/// never the state itself, so its identity is fixed for the machine's
/// lifetime and it can safely serve as a trigger dependency without
/// re-trigger loops ([`ptr_eq`](Runner::ptr_eq) across any two clones
/// holds).
pub struct Runner<T, E> {
    dispatch: SafeDispatch<Action<T, E>>,
}

impl<T, E> Runner<T, E> {
    pub(crate) fn new(dispatch: SafeDispatch<Action<T, E>>) -> Self {
        Self { dispatch }
    }

    /// Check whether two runners drive the same machine's dispatch.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.dispatch.ptr_eq(&other.dispatch)
    }
}

impl<T, E> Runner<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Start tracking an operation, or do nothing when given `None`.
    ///
    /// With `Some(operation)`, a `Pending` reset is dispatched synchronously
    /// before this call returns, then a task is spawned that awaits the
    /// future and dispatches `Resolved`/`Rejected` on settlement. The
    /// settlement dispatch goes through the lifecycle guard, so it becomes
    /// a no-op if the owner tears down first.
    ///
    /// Calling `run` again before the prior operation settles does not
    /// cancel it; both tasks settle and the last one to do so determines
    /// the final state.
    ///
    /// `None` skips the run entirely and leaves the current state
    /// untouched, letting callers thread an optional operation through
    /// without branching at the call site.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as the settlement
    /// continuation needs an executor to run on.
    pub fn run<F>(&self, operation: Option<F>)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let Some(operation) = operation else {
            trace!("run called without an operation; state unchanged");
            return;
        };

        self.dispatch.dispatch(Action::Pending);

        let dispatch = self.dispatch.clone();
        tokio::spawn(async move {
            match operation.await {
                Ok(data) => dispatch.dispatch(Action::Resolved(data)),
                Err(error) => dispatch.dispatch(Action::Rejected(error)),
            }
        });
    }
}

impl<T, E> Clone for Runner<T, E> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
        }
    }
}

impl<T, E> std::fmt::Debug for Runner<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ActiveScope;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    type TestRunner = Runner<u32, String>;

    fn counting_runner(scope: &ActiveScope) -> (TestRunner, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let dispatch = SafeDispatch::new(scope.handle(), move |_: Action<u32, String>| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (Runner::new(dispatch), count)
    }

    #[test]
    fn run_none_dispatches_nothing_and_needs_no_runtime() {
        let scope = ActiveScope::new();
        let (runner, count) = counting_runner(&scope);

        runner.run(None::<std::future::Ready<Result<u32, String>>>);

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn run_dispatches_pending_before_returning() {
        let scope = ActiveScope::new();
        let (runner, count) = counting_runner(&scope);

        runner.run(Some(std::future::pending::<Result<u32, String>>()));

        // The operation never settles; the one dispatch is the pending reset.
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_are_pointer_equal() {
        let scope = ActiveScope::new();
        let (runner, _) = counting_runner(&scope);
        let clone = runner.clone();
        assert!(runner.ptr_eq(&clone));
    }

    #[test]
    fn runners_of_distinct_machines_are_not_pointer_equal() {
        let scope = ActiveScope::new();
        let (a, _) = counting_runner(&scope);
        let (b, _) = counting_runner(&scope);
        assert!(!a.ptr_eq(&b));
    }
}
