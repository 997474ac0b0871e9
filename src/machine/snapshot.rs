//! Read-only view of a machine's state.

use super::runner::Runner;
use crate::core::{AsyncState, Status};
use std::future::Future;

/// The record a machine hands to its consumer: current state plus the
/// stable [`Runner`].
///
/// A snapshot is a point-in-time clone; later transitions do not show up
/// in it. Take a fresh one per observation cycle. The embedded runner is a
/// clone of the machine's single runner, so [`Runner::ptr_eq`] holds
/// across snapshots of the same machine.
#[derive(Clone, Debug)]
pub struct Snapshot<T, E> {
    state: AsyncState<T, E>,
    runner: Runner<T, E>,
}

impl<T, E> Snapshot<T, E> {
    pub(crate) fn new(state: AsyncState<T, E>, runner: Runner<T, E>) -> Self {
        Self { state, runner }
    }

    /// Get the status at snapshot time.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Get the success payload, if resolved.
    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    /// Get the failure value, if rejected.
    ///
    /// Whether to convert this into a propagated error (an error-boundary
    /// style re-raise) is the consumer's call; the machine itself only ever
    /// reports it as data.
    pub fn error(&self) -> Option<&E> {
        self.state.error()
    }

    /// Get the full state value.
    pub fn state(&self) -> &AsyncState<T, E> {
        &self.state
    }

    /// Get the machine's stable run handle.
    pub fn runner(&self) -> &Runner<T, E> {
        &self.runner
    }
}

impl<T, E> Snapshot<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Start a new tracked operation. See [`Runner::run`].
    pub fn run<F>(&self, operation: Option<F>)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.runner.run(operation)
    }
}
