//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for creating machine
//! configurations in code, with the same validation the JSON form gets.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::config::MachineConfig;
use crate::core::StateName;

/// Create a configuration for a linear chain of states, each moving to the
/// next on the same event.
///
/// The first state is the initial state. The last state has no transitions.
///
/// # Example
///
/// ```
/// use fsm_rewind::builder::chain;
///
/// let config = chain("next", ["draft", "review", "published"]).unwrap();
///
/// assert_eq!(config.target("draft", "next").map(|s| s.as_str()), Some("review"));
/// assert!(config.state("published").unwrap().is_empty());
/// ```
pub fn chain<I, S>(event: &str, states: I) -> Result<MachineConfig, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<StateName>,
{
    let names: Vec<StateName> = states.into_iter().map(Into::into).collect();
    let Some(first) = names.first() else {
        return Err(BuildError::NoStates);
    };

    let mut builder = ConfigBuilder::new().initial(first.clone());
    for (i, name) in names.iter().enumerate() {
        let mut state = StateBuilder::new(name.clone());
        if let Some(next) = names.get(i + 1) {
            state = state.on(event, next.clone());
        }
        builder = builder.state(state);
    }
    builder.build()
}
