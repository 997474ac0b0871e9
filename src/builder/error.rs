//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when building an
/// [`AsyncMachine`](crate::machine::AsyncMachine).
///
/// These signal misuse of the library, not runtime failures of a tracked
/// operation; operation failures are ordinary `Rejected` state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("initial status must be 'idle' or 'pending', got '{0}'. Settled states carry a payload and cannot be an initial status")]
    SettledInitialStatus(&'static str),
}
