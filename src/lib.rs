//! fsm-rewind: a configuration-driven finite state machine with undo/redo
//!
//! A machine is built from a declarative configuration of states and the
//! events that move between them. It tracks the current state, rejects
//! transitions the configuration does not allow, and records every applied
//! change in a linear history that can be stepped back and forth.
//!
//! # Core Concepts
//!
//! - **Configuration**: States and event-triggered transitions, built in code
//!   or deserialized from JSON, in declared order
//! - **Machine**: The current state plus validated `trigger` and
//!   `change_state` operations
//! - **History**: Linear undo/redo; a new change after an undo discards the
//!   redo path
//!
//! # Example
//!
//! ```rust
//! use fsm_rewind::{machine_config, FiniteStateMachine, FsmError};
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     states: {
//!         "idle" => { "start" => "running" },
//!         "running" => { "stop" => "idle" },
//!     }
//! }
//! .unwrap();
//!
//! let mut fsm = FiniteStateMachine::new(config).unwrap();
//! fsm.trigger("start").unwrap();
//! assert_eq!(fsm.state(), "running");
//!
//! let err = fsm.trigger("jump").unwrap_err();
//! assert!(matches!(err, FsmError::IllegalTransition { .. }));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "idle");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "running");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, StateBuilder};
pub use config::{MachineConfig, StateDefinition};
pub use self::core::{History, HistoryEntry, StateName, StateTransition, TransitionKind};
pub use machine::{FiniteStateMachine, FsmError, TransitionObserver};
