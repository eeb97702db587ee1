//! Core automaton types and logic.
//!
//! This module contains the pure part of the engine:
//! - State and symbol bounds via the `State` and `Symbol` traits
//! - The declarative `Config` and its nested transition table
//! - Configuration validation with accumulated errors
//! - Run history tracking
//!
//! Nothing in this module performs I/O or holds run state.

mod config;
mod history;
mod state;
mod validation;

pub use config::{Config, TransitionTable};
pub use history::{EmptyHistory, StateHistory};
pub use state::{State, Symbol};
pub use validation::{validate, ConfigError, ConfigErrors, LookupSets};
