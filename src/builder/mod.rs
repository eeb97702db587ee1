//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the [`transition_table!`]
//! macro for writing automata with minimal boilerplate. Building never
//! bypasses validation: [`AutomatonBuilder::build_engine`] goes through
//! [`Engine::new`](crate::engine::Engine::new).
//!
//! [`transition_table!`]: crate::transition_table

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
