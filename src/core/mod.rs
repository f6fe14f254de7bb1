//! Core state machine types.
//!
//! This module contains the building blocks the machine is made of:
//! - State identifiers via `StateName`
//! - Records of individual changes via `StateTransition`
//! - Linear undo/redo tracking via `History`
//!
//! Nothing in this module knows about configurations or events being legal;
//! that validation lives in the machine.

mod history;
mod state;
mod transition;

pub use history::{History, HistoryEntry};
pub use state::StateName;
pub use transition::{StateTransition, TransitionKind};
