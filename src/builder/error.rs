//! Build errors for the automaton builder.

use crate::core::{ConfigErrors, State, Symbol};
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError<S: State, I: Symbol> {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigErrors<S, I>),
}
