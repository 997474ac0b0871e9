//! Owner activation window.
//!
//! An `ActiveScope` bounds which dispatches are honored: it is active from
//! construction until `deactivate` (or drop), and once deactivated it never
//! becomes active again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The activation flag for one owner.
///
/// Created active. `deactivate` flips it off exactly once; there is no way
/// to turn it back on, matching the one-way mount/unmount window it models.
/// Dropping the scope also deactivates it, so a forgotten teardown cannot
/// leave guards open.
///
/// # Example
///
/// ```rust
/// use settle::scope::ActiveScope;
///
/// let scope = ActiveScope::new();
/// let handle = scope.handle();
/// assert!(handle.is_active());
///
/// scope.deactivate();
/// assert!(!handle.is_active());
/// ```
#[derive(Debug)]
pub struct ActiveScope {
    active: Arc<AtomicBool>,
}

impl ActiveScope {
    /// Create a new scope, already active.
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// End the activation window.
    ///
    /// Idempotent; calling it again has no further effect.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Check whether the scope is still active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Get a read-only handle for guards.
    ///
    /// Handles share the scope's flag; they observe deactivation but
    /// cannot cause it.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            active: Arc::clone(&self.active),
        }
    }
}

impl Default for ActiveScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ActiveScope {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Read-only view of an [`ActiveScope`]'s flag.
#[derive(Clone, Debug)]
pub struct ScopeHandle {
    active: Arc<AtomicBool>,
}

impl ScopeHandle {
    /// Check whether the owning scope is still active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_starts_active() {
        let scope = ActiveScope::new();
        assert!(scope.is_active());
        assert!(scope.handle().is_active());
    }

    #[test]
    fn deactivate_is_observed_by_handles() {
        let scope = ActiveScope::new();
        let handle = scope.handle();
        scope.deactivate();
        assert!(!scope.is_active());
        assert!(!handle.is_active());
    }

    #[test]
    fn deactivate_is_idempotent() {
        let scope = ActiveScope::new();
        scope.deactivate();
        scope.deactivate();
        assert!(!scope.is_active());
    }

    #[test]
    fn handles_outlive_the_scope() {
        let scope = ActiveScope::new();
        let handle = scope.handle();
        drop(scope);
        assert!(!handle.is_active());
    }

    #[test]
    fn handles_taken_after_deactivation_see_it() {
        let scope = ActiveScope::new();
        scope.deactivate();
        assert!(!scope.handle().is_active());
    }
}
