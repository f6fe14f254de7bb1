//! The finite state machine.
//!
//! # Key Concepts
//!
//! - **Machine**: Tracks the current state over an immutable configuration
//! - **History**: Every applied change is undoable until a reset
//! - **Observers**: Closures or trait objects notified after each change
//!
//! All operations are synchronous and leave the machine unchanged when they
//! fail.

mod error;
mod fsm;
mod observer;

pub use error::FsmError;
pub use fsm::FiniteStateMachine;
pub use observer::TransitionObserver;
