//! Lifecycle primitives: the activation window and the dispatch guard.
//!
//! An [`ActiveScope`] represents one owner's activation window. The owner
//! deactivates it on teardown (or lets `Drop` do it); [`SafeDispatch`]
//! reads the flag through a [`ScopeHandle`] and silently drops any state
//! update requested after the window closed. The guard only reads the flag,
//! never writes it.

mod guard;
mod lifecycle;

pub use guard::SafeDispatch;
pub use lifecycle::{ActiveScope, ScopeHandle};
