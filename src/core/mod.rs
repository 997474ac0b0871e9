//! Pure core of the async state machine.
//!
//! This module contains the side-effect-free heart of the library:
//! - `AsyncState` / `Status`: the state of one tracked operation
//! - `Action`: transition requests
//! - `AsyncState::apply`: the pure reducer
//!
//! Nothing here spawns tasks, reads clocks, or logs. The effectful shell
//! lives in [`crate::machine`].

mod action;
mod state;

pub use action::Action;
pub use state::{AsyncState, Status};
