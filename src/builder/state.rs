//! Builder for a single state definition.

use crate::builder::error::BuildError;
use crate::config::StateDefinition;
use crate::core::StateName;

/// Builder for one state and the transitions leaving it.
#[derive(Clone, Debug)]
pub struct StateBuilder {
    name: StateName,
    transitions: Vec<(String, StateName)>,
}

impl StateBuilder {
    /// Create a builder for the named state.
    pub fn new(name: impl Into<StateName>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// Add a transition: `event` moves this state to `target`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<StateName>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// The state being built.
    pub fn name(&self) -> &StateName {
        &self.name
    }

    /// Build the definition, paired with its state name.
    pub fn build(self) -> Result<(StateName, StateDefinition), BuildError> {
        for (i, (event, _)) in self.transitions.iter().enumerate() {
            if self.transitions[..i].iter().any(|(e, _)| e == event) {
                return Err(BuildError::DuplicateEvent {
                    state: self.name.into_inner(),
                    event: event.clone(),
                });
            }
        }

        Ok((self.name, StateDefinition::from_transitions(self.transitions)))
    }
}
