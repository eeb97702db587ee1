//! Builder for constructing automaton configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, State, Symbol, TransitionTable};
use crate::engine::Engine;

/// Builder for automaton configurations with a fluent API.
pub struct AutomatonBuilder<S: State, I: Symbol> {
    states: Vec<S>,
    alphabet: Vec<I>,
    initial: Option<S>,
    accepting: Vec<S>,
    transitions: TransitionTable<S, I>,
}

impl<S: State, I: Symbol> AutomatonBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            initial: None,
            accepting: Vec::new(),
            transitions: TransitionTable::new(),
        }
    }

    /// Declare a single state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare a single input symbol.
    pub fn symbol(mut self, symbol: I) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Declare several input symbols at once.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = I>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark states as accepting.
    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Add the transition `from --symbol--> to`. A later call for the same
    /// `(from, symbol)` pair replaces the earlier target.
    pub fn transition(mut self, from: S, symbol: I, to: S) -> Self {
        self.transitions.entry(from).or_default().insert(symbol, to);
        self
    }

    /// Merge a whole table, e.g. one produced by [`transition_table!`](crate::transition_table).
    pub fn transitions(mut self, table: TransitionTable<S, I>) -> Self {
        for (from, row) in table {
            self.transitions.entry(from).or_default().extend(row);
        }
        self
    }

    /// Assemble the configuration without validating it.
    pub fn build(self) -> Result<Config<S, I>, BuildError<S, I>> {
        let initial_state = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(Config {
            states: self.states,
            alphabet: self.alphabet,
            initial_state,
            final_states: self.accepting,
            transitions: self.transitions,
        })
    }

    /// Assemble and validate, returning a ready engine.
    pub fn build_engine(self) -> Result<Engine<S, I>, BuildError<S, I>> {
        Ok(Engine::new(self.build()?)?)
    }
}

impl<S: State, I: Symbol> Default for AutomatonBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;
    use crate::transition_table;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = AutomatonBuilder::<Light, char>::new()
            .states([Light::Red, Light::Green])
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = AutomatonBuilder::new()
            .states([Light::Red, Light::Green])
            .state(Light::Yellow)
            .alphabet(['t'])
            .initial(Light::Red)
            .accepting([Light::Red])
            .transition(Light::Red, 't', Light::Green)
            .transition(Light::Green, 't', Light::Yellow)
            .transition(Light::Yellow, 't', Light::Red)
            .build()
            .unwrap();

        assert_eq!(config.states.len(), 3);
        assert_eq!(config.alphabet, vec!['t']);
        assert_eq!(config.initial_state, Light::Red);
        assert_eq!(config.final_states, vec![Light::Red]);
        assert_eq!(config.transition_count(), 3);
    }

    #[test]
    fn build_engine_runs_validation() {
        let result = AutomatonBuilder::new()
            .states([Light::Red, Light::Green])
            .symbol('t')
            .initial(Light::Red)
            .transition(Light::Red, 't', Light::Yellow)
            .build_engine();

        match result {
            Err(BuildError::InvalidConfig(errors)) => {
                assert_eq!(
                    errors.errors(),
                    &[ConfigError::UndefinedTargetState {
                        from: Light::Red,
                        symbol: 't',
                        to: Light::Yellow
                    }]
                );
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn build_engine_produces_ready_engine() {
        let mut engine = AutomatonBuilder::new()
            .states([Light::Red, Light::Green, Light::Yellow])
            .symbol('t')
            .initial(Light::Red)
            .accepting([Light::Yellow])
            .transitions(transition_table! {
                Light::Red => { 't' => Light::Green },
                Light::Green => { 't' => Light::Yellow },
                Light::Yellow => { 't' => Light::Red },
            })
            .build_engine()
            .unwrap();

        engine.execute(&['t', 't']).unwrap();
        assert_eq!(engine.current_state(), &Light::Yellow);
        assert!(engine.is_in_final_state());
    }

    #[test]
    fn later_transition_replaces_earlier() {
        let config = AutomatonBuilder::new()
            .states([Light::Red, Light::Green])
            .symbol('t')
            .initial(Light::Red)
            .transition(Light::Red, 't', Light::Red)
            .transitions(transition_table! {
                Light::Red => { 't' => Light::Green },
            })
            .build()
            .unwrap();

        assert_eq!(config.target(&Light::Red, &'t'), Some(&Light::Green));
        assert_eq!(config.transition_count(), 1);
    }
}
