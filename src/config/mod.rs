//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for each state, the events
//! it accepts and the state each event leads to:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```
//!
//! Declared order of states and events is preserved. Configurations are
//! immutable once built; see [`crate::builder`] for fluent construction.

use crate::core::StateName;
use serde::{Deserialize, Serialize};

mod ordered;

/// The transitions leaving one state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(
        default,
        serialize_with = "ordered::serialize",
        deserialize_with = "ordered::deserialize"
    )]
    transitions: Vec<(String, StateName)>,
}

impl StateDefinition {
    pub(crate) fn from_transitions(transitions: Vec<(String, StateName)>) -> Self {
        Self { transitions }
    }

    /// Target state for `event`, if this state accepts it.
    pub fn target(&self, event: &str) -> Option<&StateName> {
        self.transitions
            .iter()
            .find(|(e, _)| e == event)
            .map(|(_, target)| target)
    }

    /// Whether this state has a transition for `event`.
    pub fn accepts(&self, event: &str) -> bool {
        self.target(event).is_some()
    }

    /// Events accepted by this state, in declared order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.iter().map(|(e, _)| e.as_str())
    }

    /// `(event, target)` pairs in declared order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &StateName)> {
        self.transitions.iter().map(|(e, t)| (e.as_str(), t))
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Complete machine configuration: the initial state and every state
/// definition.
///
/// The default configuration is empty and is rejected by
/// [`FiniteStateMachine::new`](crate::machine::FiniteStateMachine::new).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial: Option<StateName>,

    #[serde(
        default,
        serialize_with = "ordered::serialize",
        deserialize_with = "ordered::deserialize"
    )]
    states: Vec<(StateName, StateDefinition)>,
}

impl MachineConfig {
    pub(crate) fn from_parts(
        initial: Option<StateName>,
        states: Vec<(StateName, StateDefinition)>,
    ) -> Self {
        Self { initial, states }
    }

    /// Start building a configuration.
    pub fn builder() -> crate::builder::ConfigBuilder {
        crate::builder::ConfigBuilder::new()
    }

    /// The configured initial state, if one was given.
    pub fn initial(&self) -> Option<&StateName> {
        self.initial.as_ref()
    }

    /// Definition of the named state.
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    /// Whether `name` is a configured state.
    pub fn contains(&self, name: &str) -> bool {
        self.state(name).is_some()
    }

    /// Target of the transition for `event` out of `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&StateName> {
        self.state(state)?.target(event)
    }

    /// All state names, in declared order.
    pub fn state_names(&self) -> impl Iterator<Item = &StateName> {
        self.states.iter().map(|(n, _)| n)
    }

    /// Names of the states that accept `event`, in declared order.
    pub fn states_accepting(&self, event: &str) -> Vec<&StateName> {
        self.states
            .iter()
            .filter(|(_, def)| def.accepts(event))
            .map(|(n, _)| n)
            .collect()
    }

    /// Number of configured states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// A configuration with no states is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
