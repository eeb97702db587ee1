//! Referential integrity checks for automaton configurations.
//!
//! Every category of problem is checked and ALL violations are accumulated
//! with Stillwater's `Validation`, so a broken configuration is reported in
//! a single pass instead of one error at a time.

use super::config::Config;
use super::state::{State, Symbol};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single defect in an automaton configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError<S: State, I: Symbol> {
    #[error("no states defined")]
    NoStates,

    #[error("no alphabet defined")]
    NoAlphabet,

    #[error("initial state {0:?} not in states list")]
    InvalidInitialState(S),

    #[error("final state {0:?} not in states list")]
    InvalidFinalState(S),

    #[error("transition references undefined source state {0:?}")]
    UndefinedSourceState(S),

    #[error("transition from state {state:?} uses input {symbol:?} not in alphabet")]
    SymbolNotInAlphabet { state: S, symbol: I },

    #[error("transition {from:?} --{symbol:?}--> references undefined target state {to:?}")]
    UndefinedTargetState { from: S, symbol: I, to: S },
}

/// Every defect found while validating a configuration.
///
/// Never empty: a `ConfigErrors` is only produced when at least one check
/// failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid automaton configuration: {}", summarize(.errors))]
pub struct ConfigErrors<S: State, I: Symbol> {
    errors: Vec<ConfigError<S, I>>,
}

impl<S: State, I: Symbol> ConfigErrors<S, I> {
    /// All violations, in check order.
    pub fn errors(&self) -> &[ConfigError<S, I>] {
        &self.errors
    }

    /// The first violation found.
    pub fn first(&self) -> Option<&ConfigError<S, I>> {
        self.errors.first()
    }

    /// Whether `error` was among the violations found.
    pub fn contains(&self, error: &ConfigError<S, I>) -> bool {
        self.errors.contains(error)
    }

    /// Number of violations; at least one.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Take ownership of the violations, in check order.
    pub fn into_errors(self) -> Vec<ConfigError<S, I>> {
        self.errors
    }
}

fn summarize<S: State, I: Symbol>(errors: &[ConfigError<S, I>]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Lookup sets derived from a configuration that passed validation.
#[derive(Debug, Clone)]
pub struct LookupSets<S: State, I: Symbol> {
    pub alphabet: HashSet<I>,
    pub final_states: HashSet<S>,
}

type Check<S, I> = Validation<(), NonEmptyVec<ConfigError<S, I>>>;

fn check<S: State, I: Symbol>(ok: bool, error: impl FnOnce() -> ConfigError<S, I>) -> Check<S, I> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

/// Validate a configuration and build its lookup sets.
///
/// Pure: the configuration is only read.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::{validate, Config, ConfigError};
///
/// let config: Config<u8, char> = Config::new(vec![0, 1], vec!['a'], 7);
/// let errors = validate(&config).unwrap_err();
///
/// assert!(errors.contains(&ConfigError::InvalidInitialState(7)));
/// ```
pub fn validate<S: State, I: Symbol>(
    config: &Config<S, I>,
) -> Result<LookupSets<S, I>, ConfigErrors<S, I>> {
    let states: HashSet<&S> = config.states.iter().collect();
    let alphabet: HashSet<I> = config.alphabet.iter().cloned().collect();

    let mut checks: Vec<Check<S, I>> = vec![
        check(!config.states.is_empty(), || ConfigError::NoStates),
        check(!config.alphabet.is_empty(), || ConfigError::NoAlphabet),
        check(states.contains(&config.initial_state), || {
            ConfigError::InvalidInitialState(config.initial_state.clone())
        }),
    ];

    for final_state in &config.final_states {
        checks.push(check(states.contains(final_state), || {
            ConfigError::InvalidFinalState(final_state.clone())
        }));
    }

    for (from, row) in &config.transitions {
        checks.push(check(states.contains(from), || {
            ConfigError::UndefinedSourceState(from.clone())
        }));

        for (symbol, to) in row {
            checks.push(check(alphabet.contains(symbol), || {
                ConfigError::SymbolNotInAlphabet {
                    state: from.clone(),
                    symbol: symbol.clone(),
                }
            }));
            checks.push(check(states.contains(to), || {
                ConfigError::UndefinedTargetState {
                    from: from.clone(),
                    symbol: symbol.clone(),
                    to: to.clone(),
                }
            }));
        }
    }

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(LookupSets {
            alphabet,
            final_states: config.final_states.iter().cloned().collect(),
        }),
        Validation::Failure(errors) => Err(ConfigErrors {
            errors: errors.iter().cloned().collect(),
        }),
    }
}
