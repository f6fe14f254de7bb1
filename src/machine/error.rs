//! Machine error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors returned by machine construction and state changes.
///
/// A failed operation never changes the machine.
#[derive(Debug, Error)]
pub enum FsmError {
    /// Construction was attempted without a configuration
    #[error("A config is missing")]
    ConfigMissing,

    /// The state is not defined in the configuration
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// The current state has no transition for the event
    #[error("Illegal transition: no '{event}' transition from state '{state}'")]
    IllegalTransition { state: String, event: String },

    /// The configuration could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The configuration builder rejected its input
    #[error("Invalid config: {0}")]
    Build(#[from] BuildError),
}

impl FsmError {
    /// Returns a stable code for this error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            FsmError::ConfigMissing => "CONFIG_MISSING",
            FsmError::UnknownState { .. } => "UNKNOWN_STATE",
            FsmError::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            FsmError::InvalidConfig(_) | FsmError::Build(_) => "INVALID_CONFIG",
        }
    }
}
