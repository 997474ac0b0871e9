//! Settle: lifecycle-aware async state tracking
//!
//! Settle tracks the lifecycle of a single asynchronous operation for an
//! owner that may activate, deactivate, and re-trigger the operation many
//! times. It follows a "pure core, imperative shell" split: the reducer
//! over `{idle, pending, resolved, rejected}` is a pure function, while the
//! shell drives it from a future's settlement and guards every update with
//! the owner's activation window, so a settlement that arrives after
//! teardown is silently discarded instead of corrupting state.
//!
//! # Core concepts
//!
//! - **State**: [`AsyncState`] is a closed enum, so "resolved carries only
//!   data, rejected carries only the error" holds by construction
//! - **Guard**: [`SafeDispatch`] drops state updates once the owning
//!   [`ActiveScope`] deactivates
//! - **Runner**: the [`Runner`] handle is built once per machine and stays
//!   referentially stable, so it is safe to use as a trigger dependency
//!
//! # Example
//!
//! A consumer observes snapshots, feeds futures to `run`, and decides for
//! itself how to surface a rejection (for instance by re-raising it toward
//! an error boundary):
//!
//! ```rust
//! use settle::{AsyncMachine, Status};
//!
//! let rt = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .unwrap();
//! rt.block_on(async {
//!     let machine: AsyncMachine<String, String> = AsyncMachine::new();
//!
//!     // Nothing requested yet.
//!     assert_eq!(machine.status(), Status::Idle);
//!
//!     // Hand the machine a future; pending is observable immediately.
//!     machine.run(Some(async { Ok("pikachu".to_string()) }));
//!     assert_eq!(machine.status(), Status::Pending);
//!
//!     // Once the executor drains, the settlement is visible.
//!     while !machine.status().is_settled() {
//!         tokio::task::yield_now().await;
//!     }
//!     let snapshot = machine.snapshot();
//!     assert_eq!(snapshot.data().map(String::as_str), Some("pikachu"));
//!
//!     // After teardown, late settlements are dropped.
//!     machine.teardown();
//! });
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod scope;

// Re-export commonly used types
pub use crate::core::{Action, AsyncState, Status};
pub use builder::{BuildError, MachineBuilder};
pub use machine::{AsyncMachine, Runner, Snapshot};
pub use scope::{ActiveScope, SafeDispatch, ScopeHandle};
