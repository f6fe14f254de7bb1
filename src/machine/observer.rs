//! Observation hook for applied state changes.

use crate::core::StateTransition;

/// Receives every state change a machine applies.
///
/// Observers are called after the change, in registration order. Failed
/// operations are never reported. Any `Fn(&StateTransition)` closure that is
/// `Send + Sync` is an observer.
///
/// # Example
///
/// ```rust
/// use fsm_rewind::machine::FiniteStateMachine;
/// use fsm_rewind::machine_config;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => {},
///     }
/// }
/// .unwrap();
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
///
/// let mut fsm = FiniteStateMachine::new(config).unwrap();
/// fsm.observe(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// fsm.trigger("start").unwrap();
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub trait TransitionObserver: Send + Sync {
    fn on_transition(&self, transition: &StateTransition);
}

impl<F> TransitionObserver for F
where
    F: Fn(&StateTransition) + Send + Sync,
{
    fn on_transition(&self, transition: &StateTransition) {
        self(transition)
    }
}
