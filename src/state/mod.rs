//! State Management
//!
//! Global toast state plus the per-action state machine.

pub mod action;
pub mod global;

pub use action::ActionState;
pub use global::{provide_global_state, GlobalState};
