//! Deterministic automaton engine.

use crate::core::{validate, Config, ConfigErrors, State, StateHistory, Symbol};
use crate::engine::error::{ProcessError, TransitionError};
use std::collections::HashSet;

/// Executes input against a validated [`Config`].
///
/// The engine owns its configuration and never mutates it. Run state is the
/// current state plus the history of states visited since the last reset.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::Config;
/// use finite_automaton::engine::Engine;
///
/// let mut config = Config::new(vec!["locked", "unlocked"], vec!['C', 'P'], "locked");
/// config.final_states = vec!["unlocked"];
/// config.add_transition("locked", 'C', "unlocked");
/// config.add_transition("locked", 'P', "locked");
/// config.add_transition("unlocked", 'C', "unlocked");
/// config.add_transition("unlocked", 'P', "locked");
///
/// let mut engine = Engine::new(config).unwrap();
/// engine.execute(&['C', 'P', 'C']).unwrap();
///
/// assert_eq!(engine.current_state(), &"unlocked");
/// assert!(engine.is_in_final_state());
/// assert_eq!(engine.state_history(), vec!["locked", "unlocked", "locked", "unlocked"]);
/// ```
#[derive(Clone, Debug)]
pub struct Engine<S: State, I: Symbol> {
    config: Config<S, I>,
    current: S,
    history: StateHistory<S>,
    alphabet: HashSet<I>,
    final_states: HashSet<S>,
}

impl<S: State, I: Symbol> Engine<S, I> {
    /// Validate `config` and create an engine in its initial state.
    ///
    /// Fails with every configuration defect found; no engine is produced.
    pub fn new(config: Config<S, I>) -> Result<Self, ConfigErrors<S, I>> {
        let sets = validate(&config).inspect_err(|errors| {
            tracing::debug!(
                count = errors.len(),
                "rejected automaton configuration: {errors}"
            );
        })?;

        tracing::debug!(
            states = config.states.len(),
            symbols = sets.alphabet.len(),
            final_states = sets.final_states.len(),
            transitions = config.transition_count(),
            "constructed automaton engine"
        );

        let initial = config.initial_state.clone();
        Ok(Self {
            history: StateHistory::new(initial.clone()),
            current: initial,
            alphabet: sets.alphabet,
            final_states: sets.final_states,
            config,
        })
    }

    /// Restore run state captured elsewhere. Callers have already checked
    /// that `history` is consistent with the configuration.
    pub(crate) fn with_history(mut self, history: StateHistory<S>) -> Self {
        self.current = history.last().clone();
        self.history = history;
        self
    }

    /// The validated configuration (read only)
    pub fn config(&self) -> &Config<S, I> {
        &self.config
    }

    /// Return to the initial state and clear the history.
    pub fn reset(&mut self) {
        tracing::trace!(initial = ?self.config.initial_state, "reset");
        self.current = self.config.initial_state.clone();
        self.history.reset(self.current.clone());
    }

    /// Pure lookup of the transition function.
    pub fn next_state(&self, state: &S, symbol: &I) -> Option<&S> {
        self.config.target(state, symbol)
    }

    /// Take the transition for `symbol` from the current state.
    ///
    /// On failure nothing is mutated. On success the target becomes the
    /// current state and is appended to the history.
    pub fn transition(&mut self, symbol: I) -> Result<&S, TransitionError<S, I>> {
        let Some(row) = self.config.transitions.get(&self.current) else {
            tracing::debug!(state = ?self.current, "no transitions defined for state");
            return Err(TransitionError::NoTransitionsFrom {
                state: self.current.clone(),
            });
        };

        let Some(next) = row.get(&symbol) else {
            tracing::debug!(state = ?self.current, ?symbol, "no transition defined");
            return Err(TransitionError::NoTransition {
                state: self.current.clone(),
                symbol,
            });
        };

        tracing::trace!(from = ?self.current, ?symbol, to = ?next, "transition");
        self.current = next.clone();
        self.history.record(next.clone());
        Ok(&self.current)
    }

    /// Feed `symbols` in order, continuing from the current state.
    ///
    /// Stops at the first failing symbol. Transitions before it stay applied.
    pub fn process<'a, T>(&mut self, symbols: T) -> Result<(), ProcessError<S, I>>
    where
        T: IntoIterator<Item = &'a I>,
        I: 'a,
    {
        for (position, symbol) in symbols.into_iter().enumerate() {
            if let Err(source) = self.transition(symbol.clone()) {
                tracing::debug!(position, "processing stopped: {source}");
                return Err(ProcessError { position, source });
            }
        }
        Ok(())
    }

    /// Reset, then process `symbols` from the initial state.
    pub fn execute<'a, T>(&mut self, symbols: T) -> Result<(), ProcessError<S, I>>
    where
        T: IntoIterator<Item = &'a I>,
        I: 'a,
    {
        self.reset();
        self.process(symbols)
    }

    /// Run `symbols` from scratch and report whether the run ends accepting.
    pub fn accepts<'a, T>(&mut self, symbols: T) -> Result<bool, ProcessError<S, I>>
    where
        T: IntoIterator<Item = &'a I>,
        I: 'a,
    {
        self.execute(symbols)?;
        Ok(self.is_in_final_state())
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Owned copy of the states visited since the last reset.
    pub fn state_history(&self) -> Vec<S> {
        self.history.to_vec()
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Whether the current state is accepting. Always `false` when no final
    /// states were declared.
    pub fn is_in_final_state(&self) -> bool {
        self.final_states.contains(&self.current)
    }

    /// Whether `symbol` belongs to the alphabet. Transitions are not consulted.
    pub fn validate_input(&self, symbol: &I) -> bool {
        self.alphabet.contains(symbol)
    }
}
