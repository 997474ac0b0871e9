//! Builder API for machine construction.
//!
//! [`AsyncMachine::new`](crate::machine::AsyncMachine::new) covers the
//! common case (start `Idle`). The builder exists for owners that trigger
//! a run immediately on construction and want to start `Pending` so no
//! idle frame is ever observable.

pub mod error;

pub use error::BuildError;

use crate::core::{AsyncState, Status};
use crate::machine::AsyncMachine;

/// Fluent builder for an [`AsyncMachine`].
///
/// # Example
///
/// ```rust
/// use settle::{AsyncMachine, MachineBuilder, Status};
///
/// let machine: AsyncMachine<String, String> = MachineBuilder::new()
///     .initial(Status::Pending)
///     .build()
///     .unwrap();
/// assert_eq!(machine.status(), Status::Pending);
/// ```
///
/// A settled initial status is rejected:
///
/// ```rust
/// use settle::{AsyncMachine, BuildError, MachineBuilder, Status};
///
/// let result: Result<AsyncMachine<String, String>, _> =
///     MachineBuilder::new().initial(Status::Resolved).build();
/// assert_eq!(result.unwrap_err(), BuildError::SettledInitialStatus("resolved"));
/// ```
#[derive(Clone, Debug)]
pub struct MachineBuilder {
    initial: Status,
}

impl MachineBuilder {
    /// Create a builder with the default `Idle` initial status.
    pub fn new() -> Self {
        Self {
            initial: Status::Idle,
        }
    }

    /// Set the initial status.
    ///
    /// Only `Idle` and `Pending` are valid; the settled statuses carry a
    /// payload and are only reachable through the reducer.
    pub fn initial(mut self, status: Status) -> Self {
        self.initial = status;
        self
    }

    /// Build the machine.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SettledInitialStatus`] if the configured
    /// initial status is `Resolved` or `Rejected`.
    pub fn build<T, E>(self) -> Result<AsyncMachine<T, E>, BuildError>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        match self.initial {
            Status::Idle => Ok(AsyncMachine::with_initial(AsyncState::Idle)),
            Status::Pending => Ok(AsyncMachine::with_initial(AsyncState::Pending)),
            settled => Err(BuildError::SettledInitialStatus(settled.name())),
        }
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestMachine = AsyncMachine<String, String>;

    #[test]
    fn default_initial_status_is_idle() {
        let machine: TestMachine = MachineBuilder::new().build().unwrap();
        assert_eq!(machine.status(), Status::Idle);
    }

    #[test]
    fn pending_initial_status_is_allowed() {
        let machine: TestMachine = MachineBuilder::new()
            .initial(Status::Pending)
            .build()
            .unwrap();
        assert_eq!(machine.status(), Status::Pending);
    }

    #[test]
    fn settled_initial_statuses_are_rejected() {
        for status in [Status::Resolved, Status::Rejected] {
            let result: Result<TestMachine, _> =
                MachineBuilder::new().initial(status).build();
            assert_eq!(
                result.unwrap_err(),
                BuildError::SettledInitialStatus(status.name())
            );
        }
    }

    #[test]
    fn build_error_message_names_the_offending_status() {
        let result: Result<TestMachine, _> =
            MachineBuilder::new().initial(Status::Rejected).build();
        let message = result.unwrap_err().to_string();
        assert!(message.contains("rejected"));
        assert!(message.contains("idle"));
    }

    #[test]
    fn built_machine_starts_with_an_active_scope() {
        let machine: TestMachine = MachineBuilder::new()
            .initial(Status::Pending)
            .build()
            .unwrap();
        assert!(machine.is_active());
    }
}
