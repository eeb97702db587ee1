//! Declarative automaton configuration.

use super::state::{State, Symbol};
use std::collections::HashMap;

/// Nested transition table: source state, then input symbol, to target state.
///
/// A missing outer or inner entry means the transition is undefined, which
/// is legal in a configuration and only fails when exercised.
pub type TransitionTable<S, I> = HashMap<S, HashMap<I, S>>;

/// Description of a deterministic finite automaton.
///
/// A `Config` is plain data. It is checked once, when handed to
/// [`Engine::new`](crate::engine::Engine::new), and the engine never mutates
/// it afterwards.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::Config;
///
/// let mut config = Config::new(vec!["locked", "unlocked"], vec!['C', 'P'], "locked");
/// config.final_states = vec!["unlocked"];
/// config.add_transition("locked", 'C', "unlocked");
/// config.add_transition("locked", 'P', "locked");
/// config.add_transition("unlocked", 'C', "unlocked");
/// config.add_transition("unlocked", 'P', "locked");
///
/// assert_eq!(config.transition_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config<S: State, I: Symbol> {
    /// Declared state space (duplicates are tolerated)
    pub states: Vec<S>,
    /// Declared input alphabet
    pub alphabet: Vec<I>,
    /// State every run starts from
    pub initial_state: S,
    /// Accepting states; empty means nothing is accepted
    pub final_states: Vec<S>,
    /// Partial transition function
    pub transitions: TransitionTable<S, I>,
}

impl<S: State, I: Symbol> Config<S, I> {
    /// Create a configuration with no accepting states and no transitions.
    pub fn new(states: Vec<S>, alphabet: Vec<I>, initial_state: S) -> Self {
        Self {
            states,
            alphabet,
            initial_state,
            final_states: Vec::new(),
            transitions: HashMap::new(),
        }
    }

    /// Add (or overwrite) the transition `from --input--> to`.
    pub fn add_transition(&mut self, from: S, input: I, to: S) {
        self.transitions.entry(from).or_default().insert(input, to);
    }

    /// Look up the target of `from --input-->`, if defined.
    pub fn target(&self, from: &S, input: &I) -> Option<&S> {
        self.transitions.get(from).and_then(|row| row.get(input))
    }

    /// Total number of defined transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }
}
