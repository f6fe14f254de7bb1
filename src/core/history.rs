//! Linear undo/redo history.
//!
//! History is a list of the states entered by successful state changes,
//! anchored at the machine's initial state, with a cursor marking how many
//! entries are currently applied. Recording after an undo discards the redo
//! tail. Undoing the first entry always falls back to the base.

use super::state::StateName;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// One recorded state change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// The state entered
    pub state: StateName,
    /// The event that caused the change, if it came from `trigger`
    pub event: Option<String>,
    /// When the change was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(state: StateName, event: Option<String>) -> Self {
        Self {
            state,
            event,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of visited states with an undo/redo cursor.
///
/// `cursor` counts the applied entries, so `entries[cursor]` is the next
/// redo slot. The cursor points at `entries[cursor - 1]`, or at the base
/// when it is zero.
///
/// # Example
///
/// ```rust
/// use fsm_rewind::core::{History, HistoryEntry, StateName};
///
/// let mut history = History::new(StateName::new("A"));
/// history.record(HistoryEntry::new("B".into(), Some("e1".to_string())));
/// history.record(HistoryEntry::new("C".into(), Some("e2".to_string())));
///
/// assert_eq!(history.step_back().map(|s| s.as_str()), Some("B"));
/// assert_eq!(history.step_back().map(|s| s.as_str()), Some("A"));
/// assert!(history.step_back().is_none());
///
/// assert_eq!(history.step_forward().map(|s| s.as_str()), Some("B"));
/// assert_eq!(history.path().len(), 3); // A -> B -> C
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    base: StateName,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Create an empty history anchored at `base`.
    pub fn new(base: StateName) -> Self {
        Self {
            base,
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Record a new entry.
    ///
    /// Entries beyond the cursor are discarded first, so any redo path is
    /// lost. The cursor ends up past the new entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor);
        self.entries.push(entry);
        self.cursor = self.entries.len();
    }

    /// Move the cursor back one entry, returning the state now current.
    ///
    /// Returns `None` without changing anything when nothing is applied.
    pub fn step_back(&mut self) -> Option<&StateName> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Move the cursor forward one entry, returning the state now current.
    ///
    /// Returns `None` without changing anything when there is no redo path.
    pub fn step_forward(&mut self) -> Option<&StateName> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Drop all entries. The base is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// State at the cursor: the last applied entry, or the base.
    pub fn current(&self) -> &StateName {
        match self.cursor {
            0 => &self.base,
            n => &self.entries[n - 1].state,
        }
    }

    /// The state reached by undoing every entry.
    pub fn base(&self) -> &StateName {
        &self.base
    }

    /// Number of applied entries.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether `step_back` would succeed.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether `step_forward` would succeed.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// All recorded entries, including any redo tail.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full path of states: the base, then every recorded entry.
    pub fn path(&self) -> Vec<&StateName> {
        std::iter::once(&self.base)
            .chain(self.entries.iter().map(|e| &e.state))
            .collect()
    }

    /// Elapsed time between the first and last recorded entry.
    ///
    /// Returns `None` if there are no entries.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
