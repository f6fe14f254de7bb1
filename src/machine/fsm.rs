//! Configuration-driven state machine with linear undo/redo.

use crate::config::MachineConfig;
use crate::core::{History, HistoryEntry, StateName, StateTransition, TransitionKind};
use crate::machine::error::FsmError;
use crate::machine::observer::TransitionObserver;
use std::fmt;

/// Finite state machine over a fixed configuration.
///
/// Every successful state change is recorded in a linear history. `undo`
/// steps back through it, falling back to the initial state once the first
/// recorded entry is undone. A new change after an undo discards the redo
/// path.
///
/// # Example
///
/// ```rust
/// use fsm_rewind::machine::FiniteStateMachine;
///
/// let mut fsm = FiniteStateMachine::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle":    { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.state(), "running");
/// assert!(fsm.trigger("jump").is_err());
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "idle");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "running");
/// ```
pub struct FiniteStateMachine {
    config: MachineConfig,
    initial: StateName,
    current: StateName,
    history: History,
    observers: Vec<Box<dyn TransitionObserver>>,
}

impl FiniteStateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// Fails with `ConfigMissing` for an empty configuration and with
    /// `UnknownState` if the initial state is not one of the configured
    /// states.
    pub fn new(config: MachineConfig) -> Result<Self, FsmError> {
        if config.is_empty() {
            return Err(FsmError::ConfigMissing);
        }
        let initial = config.initial().cloned().ok_or(FsmError::ConfigMissing)?;
        if !config.contains(initial.as_str()) {
            return Err(FsmError::UnknownState {
                state: initial.into_inner(),
            });
        }

        tracing::debug!(
            initial = %initial,
            states = config.len(),
            "State machine created"
        );

        Ok(Self {
            history: History::new(initial.clone()),
            current: initial.clone(),
            initial,
            config,
            observers: Vec::new(),
        })
    }

    /// Create a machine from a JSON configuration.
    ///
    /// A blank string or `null` counts as a missing configuration.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        if json.trim().is_empty() {
            return Err(FsmError::ConfigMissing);
        }
        let config: Option<MachineConfig> = serde_json::from_str(json)?;
        Self::new(config.ok_or(FsmError::ConfigMissing)?)
    }

    /// Create a machine from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FsmError> {
        let config: Option<MachineConfig> = serde_json::from_value(value)?;
        Self::new(config.ok_or(FsmError::ConfigMissing)?)
    }

    /// Register a closure to be called after every applied change.
    pub fn observe<F>(&mut self, f: F)
    where
        F: Fn(&StateTransition) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(f));
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: impl TransitionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Get the current state.
    pub fn state(&self) -> &StateName {
        &self.current
    }

    /// Get the configured initial state.
    pub fn initial(&self) -> &StateName {
        &self.initial
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get the undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move to `state` directly, recording the change in history.
    pub fn change_state(&mut self, state: impl AsRef<str>) -> Result<(), FsmError> {
        self.apply_change(state.as_ref(), None)
    }

    /// Fire `event` from the current state.
    ///
    /// Fails with `IllegalTransition` if the current state has no transition
    /// for `event`, and with `UnknownState` if the transition points at a
    /// state that is not configured.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.config.target(self.current.as_str(), event).cloned() else {
            tracing::debug!(
                state = %self.current,
                event,
                "Rejected event: no transition"
            );
            return Err(FsmError::IllegalTransition {
                state: self.current.to_string(),
                event: event.to_string(),
            });
        };

        self.apply_change(target.as_str(), Some(event))
    }

    /// Return to the initial state and clear history.
    ///
    /// Observers are only notified if the state or history actually changed.
    pub fn reset(&mut self) {
        let unchanged = self.current == self.initial && self.history.is_empty();
        let from = std::mem::replace(&mut self.current, self.initial.clone());
        self.history.clear();
        if unchanged {
            tracing::trace!(state = %self.current, "Reset with nothing to undo");
            return;
        }
        self.notify(from, TransitionKind::Reset);
    }

    /// State names in declared order.
    ///
    /// With `None`, every configured state. With an event, only the states
    /// that have a transition for it.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateName> {
        match event {
            None => self.config.state_names().collect(),
            Some(event) => self.config.states_accepting(event),
        }
    }

    /// Events the current state accepts, in declared order.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(self.current.as_str())
            .map(|def| def.events().collect())
            .unwrap_or_default()
    }

    /// Step back one state in history. Returns `false` if there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let Some(to) = self.history.step_back().cloned() else {
            tracing::trace!(state = %self.current, "Undo unavailable");
            return false;
        };
        let from = std::mem::replace(&mut self.current, to);
        self.notify(from, TransitionKind::Undo);
        true
    }

    /// Step forward one state in history. Returns `false` if there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(to) = self.history.step_forward().cloned() else {
            tracing::trace!(state = %self.current, "Redo unavailable");
            return false;
        };
        let from = std::mem::replace(&mut self.current, to);
        self.notify(from, TransitionKind::Redo);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all history. The current state stays; a later undo past the
    /// first new entry falls back to the initial state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn apply_change(&mut self, state: &str, event: Option<&str>) -> Result<(), FsmError> {
        if !self.config.contains(state) {
            tracing::debug!(state, "Rejected change to unknown state");
            return Err(FsmError::UnknownState {
                state: state.to_string(),
            });
        }

        let to = StateName::from(state);
        let event = event.map(str::to_string);
        self.history.record(HistoryEntry::new(to.clone(), event.clone()));
        let from = std::mem::replace(&mut self.current, to);
        self.notify(from, TransitionKind::Change { event });
        Ok(())
    }

    fn notify(&self, from: StateName, kind: TransitionKind) {
        let transition = StateTransition::now(from, self.current.clone(), kind);
        tracing::debug!(
            from = %transition.from,
            to = %transition.to,
            event = transition.event(),
            kind = ?transition.kind,
            "State changed"
        );
        for observer in &self.observers {
            observer.on_transition(&transition);
        }
    }
}

impl fmt::Debug for FiniteStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteStateMachine")
            .field("config", &self.config)
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ConfigBuilder, StateBuilder};
    use std::sync::{Arc, Mutex};

    fn idle_running() -> MachineConfig {
        ConfigBuilder::new()
            .initial("idle")
            .state(StateBuilder::new("idle").on("start", "running"))
            .state(StateBuilder::new("running").on("stop", "idle"))
            .build()
            .unwrap()
    }

    fn abc() -> FiniteStateMachine {
        let config = ConfigBuilder::new()
            .initial("A")
            .state(StateBuilder::new("A").on("e1", "B"))
            .state(StateBuilder::new("B").on("e2", "C"))
            .state(StateBuilder::new("C").on("e3", "A"))
            .build()
            .unwrap();
        FiniteStateMachine::new(config).unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let fsm = FiniteStateMachine::new(idle_running()).unwrap();
        assert_eq!(fsm.state(), "idle");
        assert_eq!(fsm.initial(), "idle");
        assert!(!fsm.can_undo());
        assert!(!fsm.can_redo());
    }

    #[test]
    fn empty_config_is_missing() {
        let result = FiniteStateMachine::new(MachineConfig::default());
        assert!(matches!(result, Err(FsmError::ConfigMissing)));
    }

    #[test]
    fn unconfigured_initial_state_fails_fast() {
        let config: MachineConfig =
            serde_json::from_str(r#"{"initial": "ghost", "states": {"idle": {}}}"#).unwrap();
        let result = FiniteStateMachine::new(config);
        assert!(matches!(result, Err(FsmError::UnknownState { state }) if state == "ghost"));
    }

    #[test]
    fn missing_initial_is_missing_config() {
        let config: MachineConfig = serde_json::from_str(r#"{"states": {"idle": {}}}"#).unwrap();
        let result = FiniteStateMachine::new(config);
        assert!(matches!(result, Err(FsmError::ConfigMissing)));
    }

    #[test]
    fn trigger_follows_transition() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        fsm.trigger("start").unwrap();
        assert_eq!(fsm.state(), "running");
        assert_eq!(fsm.history().entries()[0].event.as_deref(), Some("start"));
    }

    #[test]
    fn illegal_trigger_leaves_machine_unchanged() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        let err = fsm.trigger("stop").unwrap_err();

        assert!(matches!(
            err,
            FsmError::IllegalTransition { ref state, ref event } if state == "idle" && event == "stop"
        ));
        assert_eq!(fsm.state(), "idle");
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn trigger_to_unconfigured_target_fails() {
        let config: MachineConfig = serde_json::from_str(
            r#"{"initial": "a", "states": {"a": {"transitions": {"go": "nowhere"}}}}"#,
        )
        .unwrap();
        let mut fsm = FiniteStateMachine::new(config).unwrap();

        assert!(matches!(
            fsm.trigger("go"),
            Err(FsmError::UnknownState { .. })
        ));
        assert_eq!(fsm.state(), "a");
        assert!(!fsm.can_undo());
    }

    #[test]
    fn change_state_rejects_unknown_state() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        assert!(matches!(
            fsm.change_state("paused"),
            Err(FsmError::UnknownState { .. })
        ));
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn change_state_is_undoable() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        fsm.change_state("running").unwrap();
        assert_eq!(fsm.history().entries()[0].event, None);

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "idle");
    }

    #[test]
    fn change_state_accepts_state_names() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        let target = StateName::new("running");
        fsm.change_state(&target).unwrap();
        assert_eq!(fsm.state(), &target);
    }

    #[test]
    fn undo_and_redo_walk_history() {
        let mut fsm = abc();
        fsm.trigger("e1").unwrap();
        fsm.trigger("e2").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.state(), "B");
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "A");
        assert!(!fsm.undo());

        assert!(fsm.redo());
        assert_eq!(fsm.state(), "B");
        assert!(fsm.redo());
        assert_eq!(fsm.state(), "C");
        assert!(!fsm.redo());
    }

    #[test]
    fn new_transition_after_undo_discards_redo() {
        let mut fsm = abc();
        fsm.trigger("e1").unwrap();
        fsm.trigger("e2").unwrap();
        fsm.undo();

        fsm.change_state("A").unwrap();
        assert!(!fsm.can_redo());
        assert!(!fsm.redo());
        assert_eq!(fsm.state(), "A");

        let path: Vec<&str> = fsm.history().path().iter().map(|s| s.as_str()).collect();
        assert_eq!(path, vec!["A", "B", "A"]);
    }

    #[test]
    fn undo_uses_state_after_undo_for_transitions() {
        let mut fsm = abc();
        fsm.trigger("e1").unwrap();
        fsm.undo();

        // Back in A, so only A's transitions apply.
        assert!(fsm.trigger("e2").is_err());
        fsm.trigger("e1").unwrap();
        assert_eq!(fsm.state(), "B");
    }

    #[test]
    fn reset_returns_to_initial_and_clears_history() {
        let mut fsm = abc();
        fsm.trigger("e1").unwrap();
        fsm.trigger("e2").unwrap();
        fsm.undo();

        fsm.reset();
        assert_eq!(fsm.state(), "A");
        assert!(!fsm.can_undo());
        assert!(!fsm.can_redo());
        assert!(!fsm.undo());
        assert!(!fsm.redo());
    }

    #[test]
    fn clear_history_keeps_state_and_undo_falls_back_to_initial() {
        let mut fsm = abc();
        fsm.trigger("e1").unwrap();
        fsm.clear_history();

        assert_eq!(fsm.state(), "B");
        assert!(!fsm.undo());
        assert_eq!(fsm.state(), "B");

        fsm.trigger("e2").unwrap();
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "A");
        assert!(fsm.redo());
        assert_eq!(fsm.state(), "C");
    }

    #[test]
    fn states_by_event_accepts_short_lived_event_names() {
        let fsm = abc();
        let states = {
            let event = String::from("e2");
            fsm.states(Some(&event))
        };
        assert_eq!(states, vec![&StateName::new("B")]);
    }

    #[test]
    fn reset_in_initial_state_notifies_nobody() {
        let seen: Arc<Mutex<Vec<StateTransition>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let mut fsm = abc();
        fsm.observe(move |t| sink.lock().unwrap().push(t.clone()));

        fsm.reset();
        assert!(seen.lock().unwrap().is_empty());

        fsm.trigger("e1").unwrap();
        fsm.undo();
        fsm.reset();
        let kinds: Vec<TransitionKind> = seen
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.kind.clone())
            .collect();
        assert_eq!(kinds.len(), 3);
        assert_eq!(kinds[2], TransitionKind::Reset);
    }

    #[test]
    fn states_lists_all_or_filters_by_event() {
        let fsm = abc();
        let all: Vec<&str> = fsm.states(None).iter().map(|s| s.as_str()).collect();
        assert_eq!(all, vec!["A", "B", "C"]);

        let with_e2: Vec<&str> = fsm.states(Some("e2")).iter().map(|s| s.as_str()).collect();
        assert_eq!(with_e2, vec!["B"]);

        assert!(fsm.states(Some("missing")).is_empty());
    }

    #[test]
    fn events_reflect_current_state() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        assert_eq!(fsm.events(), vec!["start"]);
        fsm.trigger("start").unwrap();
        assert_eq!(fsm.events(), vec!["stop"]);
    }

    #[test]
    fn from_json_treats_blank_and_null_as_missing() {
        assert!(matches!(
            FiniteStateMachine::from_json("   "),
            Err(FsmError::ConfigMissing)
        ));
        assert!(matches!(
            FiniteStateMachine::from_json("null"),
            Err(FsmError::ConfigMissing)
        ));
        assert!(matches!(
            FiniteStateMachine::from_json("{}"),
            Err(FsmError::ConfigMissing)
        ));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        assert!(matches!(
            FiniteStateMachine::from_json("{\"initial\": "),
            Err(FsmError::InvalidConfig(_))
        ));
    }

    #[test]
    fn from_value_builds_machine() {
        let value = serde_json::json!({
            "initial": "idle",
            "states": {
                "idle": { "transitions": { "start": "running" } },
                "running": { "transitions": { "stop": "idle" } }
            }
        });
        let mut fsm = FiniteStateMachine::from_value(value).unwrap();
        fsm.trigger("start").unwrap();
        assert_eq!(fsm.state(), "running");

        assert!(matches!(
            FiniteStateMachine::from_value(serde_json::Value::Null),
            Err(FsmError::ConfigMissing)
        ));
    }

    #[test]
    fn from_value_keeps_declared_state_order() {
        let value = serde_json::json!({
            "initial": "z",
            "states": { "z": {}, "a": {}, "m": {} }
        });
        let fsm = FiniteStateMachine::from_value(value).unwrap();
        let names: Vec<&str> = fsm.states(None).into_iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn observers_see_applied_changes_only() {
        let seen: Arc<Mutex<Vec<StateTransition>>> = Arc::default();
        let sink = Arc::clone(&seen);

        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        fsm.observe(move |t| sink.lock().unwrap().push(t.clone()));

        fsm.trigger("start").unwrap();
        assert!(fsm.trigger("start").is_err());
        fsm.undo();
        fsm.redo();
        fsm.redo();
        fsm.reset();

        let seen = seen.lock().unwrap();
        let kinds: Vec<&TransitionKind> = seen.iter().map(|t| &t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &TransitionKind::Change {
                    event: Some("start".to_string())
                },
                &TransitionKind::Undo,
                &TransitionKind::Redo,
                &TransitionKind::Reset,
            ]
        );
        assert_eq!(seen[1].from, "running");
        assert_eq!(seen[1].to, "idle");
    }

    #[test]
    fn add_observer_accepts_trait_implementations() {
        struct Counter(Arc<Mutex<usize>>);

        impl TransitionObserver for Counter {
            fn on_transition(&self, _transition: &StateTransition) {
                *self.0.lock().unwrap() += 1;
            }
        }

        let count = Arc::new(Mutex::new(0));
        let mut fsm = abc();
        fsm.add_observer(Counter(Arc::clone(&count)));

        fsm.trigger("e1").unwrap();
        fsm.change_state("C").unwrap();
        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn empty_string_names_are_legitimate() {
        let config: MachineConfig = serde_json::from_str(
            r#"{"initial": "start", "states": {"start": {"transitions": {"": ""}}, "": {}}}"#,
        )
        .unwrap();
        let mut fsm = FiniteStateMachine::new(config).unwrap();

        fsm.trigger("").unwrap();
        assert_eq!(fsm.state(), "");
        assert!(fsm.undo());
        assert_eq!(fsm.state(), "start");
    }

    #[test]
    fn debug_output_summarizes_observers() {
        let mut fsm = FiniteStateMachine::new(idle_running()).unwrap();
        fsm.observe(|_| {});
        let debug = format!("{fsm:?}");
        assert!(debug.contains("FiniteStateMachine"));
        assert!(debug.contains("observers: 1"));
    }
}
