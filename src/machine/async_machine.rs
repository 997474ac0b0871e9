//! The machine that owns one tracked operation's state.

use super::runner::Runner;
use super::snapshot::Snapshot;
use crate::core::{Action, AsyncState, Status};
use crate::scope::{ActiveScope, SafeDispatch};
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

/// Tracks the lifecycle of a single asynchronous operation.
///
/// The machine owns the one [`AsyncState`] cell, the [`ActiveScope`] that
/// bounds which dispatches are honored, and the single [`Runner`] built at
/// construction. All mutation flows through the lifecycle guard into the
/// pure reducer; consumers only ever see cloned [`Snapshot`]s.
///
/// Dropping the machine (or calling [`teardown`](AsyncMachine::teardown))
/// closes the scope: settlements of futures still in flight at that point
/// are silently discarded.
///
/// # Example
///
/// ```rust
/// use settle::{AsyncMachine, Status};
///
/// let rt = tokio::runtime::Builder::new_current_thread()
///     .build()
///     .unwrap();
/// rt.block_on(async {
///     let machine: AsyncMachine<String, String> = AsyncMachine::new();
///     assert_eq!(machine.status(), Status::Idle);
///
///     machine.run(Some(async { Ok("pikachu".to_string()) }));
///     assert_eq!(machine.status(), Status::Pending);
///
///     while !machine.status().is_settled() {
///         tokio::task::yield_now().await;
///     }
///     let snapshot = machine.snapshot();
///     assert_eq!(snapshot.status(), Status::Resolved);
///     assert_eq!(snapshot.data().map(String::as_str), Some("pikachu"));
/// });
/// ```
pub struct AsyncMachine<T, E> {
    state: Arc<Mutex<AsyncState<T, E>>>,
    scope: ActiveScope,
    runner: Runner<T, E>,
}

impl<T, E> AsyncMachine<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Create a machine in the `Idle` state with an active scope.
    ///
    /// Use [`MachineBuilder`](crate::builder::MachineBuilder) to start in
    /// `Pending` instead.
    pub fn new() -> Self {
        Self::with_initial(AsyncState::Idle)
    }

    pub(crate) fn with_initial(initial: AsyncState<T, E>) -> Self {
        let state = Arc::new(Mutex::new(initial));
        let scope = ActiveScope::new();

        let cell = Arc::clone(&state);
        let dispatch = SafeDispatch::new(scope.handle(), move |action: Action<T, E>| {
            // The only write is a whole-value assignment, so a poisoned
            // cell still holds a coherent state.
            let mut state = cell.lock().unwrap_or_else(PoisonError::into_inner);
            let next = state.apply(action);
            trace!(status = next.status().name(), "state transition");
            *state = next;
        });

        Self {
            state,
            scope,
            runner: Runner::new(dispatch),
        }
    }

    /// Start tracking an operation through the machine's runner.
    /// See [`Runner::run`].
    pub fn run<F>(&self, operation: Option<F>)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.runner.run(operation)
    }
}

impl<T, E> AsyncMachine<T, E> {
    /// Get the current status.
    pub fn status(&self) -> Status {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .status()
    }

    /// Get the machine's stable run handle.
    ///
    /// Every call returns the same underlying handle; clones of it remain
    /// [`ptr_eq`](Runner::ptr_eq) for the machine's lifetime.
    pub fn runner(&self) -> &Runner<T, E> {
        &self.runner
    }

    /// Check whether the machine's scope is still active.
    pub fn is_active(&self) -> bool {
        self.scope.is_active()
    }

    /// Tear the owner down.
    ///
    /// Settlements arriving after this point are dropped by the guard.
    /// Idempotent; dropping the machine has the same effect.
    pub fn teardown(&self) {
        self.scope.deactivate();
    }
}

impl<T, E> AsyncMachine<T, E>
where
    T: Clone,
    E: Clone,
{
    /// Get a point-in-time copy of the current state.
    pub fn state(&self) -> AsyncState<T, E> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the `{status, data, error, run}` record for consumers.
    pub fn snapshot(&self) -> Snapshot<T, E> {
        Snapshot::new(self.state(), self.runner.clone())
    }
}

impl<T, E> Default for AsyncMachine<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for AsyncMachine<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncMachine")
            .field("status", &self.status().name())
            .field("active", &self.scope.is_active())
            .finish_non_exhaustive()
    }
}
