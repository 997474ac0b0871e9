//! Actions and the pure reducer.
//!
//! The reducer deliberately never inspects the current state: every
//! transition is fully determined by the action alone, so any state accepts
//! a `Pending` reset and the owner can re-run at will. Because `Action` is
//! a closed enum there is no "unhandled action" failure path; the reducer
//! is total.

use super::state::AsyncState;

/// A state transition request for one tracked operation.
///
/// Actions are produced by the [`Runner`](crate::machine::Runner) as the
/// tracked future starts and settles, and flow through the lifecycle guard
/// before reaching the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Action<T, E> {
    /// A new operation started; reset to pending and clear any prior
    /// data or error.
    Pending,
    /// The operation settled successfully with this payload.
    Resolved(T),
    /// The operation settled with this failure value.
    Rejected(E),
}

impl<T, E> AsyncState<T, E> {
    /// Apply an action, returning the next state.
    ///
    /// Pure: no I/O, no clock, and the current state (`self`) does not
    /// participate in the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settle::core::{Action, AsyncState};
    ///
    /// let state: AsyncState<&str, &str> = AsyncState::Idle;
    /// let state = state.apply(Action::Pending);
    /// assert_eq!(state, AsyncState::Pending);
    ///
    /// let state = state.apply(Action::Resolved("pikachu"));
    /// assert_eq!(state, AsyncState::Resolved("pikachu"));
    ///
    /// // A pending reset is accepted from any state, enabling re-runs.
    /// let state = state.apply(Action::Pending);
    /// assert_eq!(state, AsyncState::Pending);
    /// ```
    pub fn apply(&self, action: Action<T, E>) -> AsyncState<T, E> {
        match action {
            Action::Pending => AsyncState::Pending,
            Action::Resolved(data) => AsyncState::Resolved(data),
            Action::Rejected(error) => AsyncState::Rejected(error),
        }
    }
}

impl<T, E> Action<T, E> {
    /// Get the action kind for display/logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved(_) => "resolved",
            Self::Rejected(_) => "rejected",
        }
    }
}
