//! Execution errors raised while feeding input to an engine.

use crate::core::{State, Symbol};
use thiserror::Error;

/// A single transition could not be taken.
///
/// The engine is left exactly where it was when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError<S: State, I: Symbol> {
    #[error("no transition defined for state: {state:?}")]
    NoTransitionsFrom { state: S },

    #[error("no transition defined from state {state:?} with input {symbol:?}")]
    NoTransition { state: S, symbol: I },
}

impl<S: State, I: Symbol> TransitionError<S, I> {
    /// The state the engine was in when the transition failed.
    pub fn state(&self) -> &S {
        match self {
            Self::NoTransitionsFrom { state } | Self::NoTransition { state, .. } => state,
        }
    }

    /// The offending symbol, if the state had any transitions at all.
    pub fn symbol(&self) -> Option<&I> {
        match self {
            Self::NoTransitionsFrom { .. } => None,
            Self::NoTransition { symbol, .. } => Some(symbol),
        }
    }
}

/// A sequence of inputs stopped part way through.
///
/// Every transition before `position` has already been applied.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("error at position {position}: {source}")]
pub struct ProcessError<S: State, I: Symbol> {
    /// Zero-based index of the symbol that failed
    pub position: usize,
    #[source]
    pub source: TransitionError<S, I>,
}
