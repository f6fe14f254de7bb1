//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is defined more than once")]
    DuplicateState { state: String },

    #[error("State '{state}' defines event '{event}' more than once")]
    DuplicateEvent { state: String, event: String },
}
