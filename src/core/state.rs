//! State types for a tracked asynchronous operation.
//!
//! `AsyncState` is a closed enum, so the shape invariants (idle and pending
//! carry nothing, resolved carries only data, rejected carries only the
//! failure value) hold by construction rather than by runtime checks.

use serde::{Deserialize, Serialize};

/// Payload-free discriminant of [`AsyncState`].
///
/// The lowercase serde names ("idle", "pending", "resolved", "rejected")
/// are the wire names consumers match on.
///
/// # Example
///
/// ```rust
/// use settle::core::Status;
///
/// assert_eq!(Status::Pending.name(), "pending");
/// assert!(!Status::Pending.is_settled());
/// assert!(Status::Rejected.is_settled());
/// assert!(Status::Rejected.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No operation has been requested yet.
    Idle,
    /// An operation is in flight.
    Pending,
    /// The operation settled successfully.
    Resolved,
    /// The operation settled with a failure.
    Rejected,
}

impl Status {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    /// Check whether the tracked operation has settled.
    ///
    /// Both success and failure count as settled; idle and pending do not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }

    /// Check whether this status represents a failed operation.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// State of one tracked asynchronous operation.
///
/// Exactly one variant holds at any time. The state is owned by an
/// [`AsyncMachine`](crate::machine::AsyncMachine) and mutated only through
/// the reducer ([`AsyncState::apply`]); consumers only ever see cloned
/// snapshots.
///
/// # Example
///
/// ```rust
/// use settle::core::{AsyncState, Status};
///
/// let state: AsyncState<u32, String> = AsyncState::Resolved(7);
/// assert_eq!(state.status(), Status::Resolved);
/// assert_eq!(state.data(), Some(&7));
/// assert_eq!(state.error(), None);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsyncState<T, E> {
    /// No operation requested; no data, no error.
    Idle,
    /// Operation in flight; no data, no error.
    Pending,
    /// Operation succeeded with this payload.
    Resolved(T),
    /// Operation failed with this value.
    Rejected(E),
}

impl<T, E> AsyncState<T, E> {
    /// Get the payload-free status discriminant.
    pub fn status(&self) -> Status {
        match self {
            Self::Idle => Status::Idle,
            Self::Pending => Status::Pending,
            Self::Resolved(_) => Status::Resolved,
            Self::Rejected(_) => Status::Rejected,
        }
    }

    /// Get the success payload, if the operation has resolved.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Resolved(data) => Some(data),
            _ => None,
        }
    }

    /// Get the failure value, if the operation has rejected.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }

    /// Check whether the tracked operation has settled.
    pub fn is_settled(&self) -> bool {
        self.status().is_settled()
    }
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self::Idle
    }
}
