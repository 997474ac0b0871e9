//! Effectful shell around the pure core.
//!
//! [`AsyncMachine`] owns the state cell and the lifecycle scope,
//! [`Runner`] is the stable entry point that drives transitions from a
//! future's settlement, and [`Snapshot`] is the read-only record handed to
//! consumers. Everything here funnels mutation through the lifecycle guard
//! into [`AsyncState::apply`](crate::core::AsyncState::apply).

mod async_machine;
mod runner;
mod snapshot;

pub use async_machine::AsyncMachine;
pub use runner::Runner;
pub use snapshot::Snapshot;
