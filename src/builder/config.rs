//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::MachineConfig;
use crate::core::StateName;
use crate::machine::{FiniteStateMachine, FsmError};

/// Builder for machine configurations with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateName>,
    states: Vec<StateBuilder>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state definition.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple state definitions at once.
    pub fn states(mut self, states: impl IntoIterator<Item = StateBuilder>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or names repeat.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut states = Vec::with_capacity(self.states.len());
        for builder in self.states {
            let (name, definition) = builder.build()?;
            if states.iter().any(|(n, _)| n == &name) {
                return Err(BuildError::DuplicateState {
                    state: name.into_inner(),
                });
            }
            states.push((name, definition));
        }

        Ok(MachineConfig::from_parts(Some(initial), states))
    }

    /// Build the configuration and construct a machine from it.
    pub fn build_machine(self) -> Result<FiniteStateMachine, FsmError> {
        FiniteStateMachine::new(self.build()?)
    }
}
