//! Run history tracking.
//!
//! A history is the ordered sequence of states visited since the last reset,
//! always starting with the initial state.

use super::state::State;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when rebuilding a history from an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("state history must contain at least the initial state")]
pub struct EmptyHistory;

/// Ordered sequence of visited states.
///
/// A history is never empty: it is created from the state a run starts in
/// and only grows by [`record`](StateHistory::record) until it is reset.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::StateHistory;
///
/// let mut history = StateHistory::new("locked");
/// history.record("unlocked");
/// history.record("locked");
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.initial(), &"locked");
/// assert_eq!(history.to_vec(), vec!["locked", "unlocked", "locked"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<S>",
    into = "Vec<S>",
    bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>")
)]
pub struct StateHistory<S: State> {
    states: Vec<S>,
}

impl<S: State> StateHistory<S> {
    /// Start a history at `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            states: vec![initial],
        }
    }

    /// Rebuild a history from a previously captured path.
    pub fn from_path(states: Vec<S>) -> Result<Self, EmptyHistory> {
        if states.is_empty() {
            Err(EmptyHistory)
        } else {
            Ok(Self { states })
        }
    }

    /// Append a visited state.
    pub fn record(&mut self, state: S) {
        self.states.push(state);
    }

    /// Truncate back to the single element `[initial]`.
    pub fn reset(&mut self, initial: S) {
        self.states.clear();
        self.states.push(initial);
    }

    // `states` is never empty: every constructor and `reset` leave at least
    // the initial state in place, and nothing else removes entries.

    /// The state the run started in.
    pub fn initial(&self) -> &S {
        match self.states.first() {
            Some(state) => state,
            None => unreachable!("state history is never empty"),
        }
    }

    /// The most recently visited state.
    pub fn last(&self) -> &S {
        match self.states.last() {
            Some(state) => state,
            None => unreachable!("state history is never empty"),
        }
    }

    /// Number of states visited, including the initial one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of transitions taken since the start of the run.
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }

    /// Borrow the visited states in order.
    pub fn path(&self) -> &[S] {
        &self.states
    }

    /// Owned copy of the visited states, detached from this history.
    pub fn to_vec(&self) -> Vec<S> {
        self.states.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }
}

impl<S: State> TryFrom<Vec<S>> for StateHistory<S> {
    type Error = EmptyHistory;

    fn try_from(states: Vec<S>) -> Result<Self, Self::Error> {
        Self::from_path(states)
    }
}

impl<S: State> From<StateHistory<S>> for Vec<S> {
    fn from(history: StateHistory<S>) -> Self {
        history.states
    }
}

impl<'a, S: State> IntoIterator for &'a StateHistory<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
