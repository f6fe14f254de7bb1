//! Records of individual state changes.

use super::state::StateName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionKind {
    /// A direct state change, or a triggered one when `event` is set.
    Change { event: Option<String> },

    /// A step back through history.
    Undo,

    /// A step forward through history.
    Redo,

    /// Return to the initial state with history cleared.
    Reset,
}

/// Record of a single state change.
///
/// Transitions are immutable values describing a move from one state to
/// another at a point in time. They are handed to observers after the
/// change has been applied.
///
/// # Example
///
/// ```rust
/// use fsm_rewind::core::{StateName, StateTransition, TransitionKind};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: StateName::new("idle"),
///     to: StateName::new("running"),
///     kind: TransitionKind::Change { event: Some("start".to_string()) },
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(transition.event(), Some("start"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: StateName,
    /// The state being entered
    pub to: StateName,
    /// What caused the change
    pub kind: TransitionKind,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Create a transition stamped with the current time.
    pub fn now(from: StateName, to: StateName, kind: TransitionKind) -> Self {
        Self {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        }
    }

    /// The triggering event, if the change came from `trigger`.
    pub fn event(&self) -> Option<&str> {
        match &self.kind {
            TransitionKind::Change { event } => event.as_deref(),
            _ => None,
        }
    }

    /// Whether this change moved through history rather than recording to it.
    pub fn is_history_step(&self) -> bool {
        matches!(self.kind, TransitionKind::Undo | TransitionKind::Redo)
    }
}
