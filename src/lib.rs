//! Finite Automaton: a generic deterministic finite automaton engine.
//!
//! An automaton is described declaratively by a [`Config`]: its states, input
//! alphabet, initial state, accepting states, and a partial transition
//! function. Handing the configuration to [`Engine::new`] validates it once;
//! the engine then runs input symbols and records every state it visits.
//!
//! # Core Concepts
//!
//! - **State / Symbol**: any `Clone + Eq + Hash + Debug` type
//! - **Config**: immutable automaton definition, checked at construction
//! - **Engine**: current state, history, acceptance and alphabet queries
//! - **Checkpoint**: serializable snapshot of a run, resumable later
//!
//! # Example
//!
//! ```rust
//! use finite_automaton::builder::AutomatonBuilder;
//!
//! let mut engine = AutomatonBuilder::new()
//!     .states([0, 1, 2])
//!     .alphabet(["next", "prev", "reset"])
//!     .initial(0)
//!     .accepting([2])
//!     .transition(0, "next", 1)
//!     .transition(1, "next", 2)
//!     .transition(1, "prev", 0)
//!     .transition(2, "reset", 0)
//!     .build_engine()
//!     .unwrap();
//!
//! engine.execute(&["next", "next"]).unwrap();
//! assert_eq!(engine.current_state(), &2);
//! assert!(engine.is_in_final_state());
//! assert_eq!(engine.state_history(), vec![0, 1, 2]);
//!
//! let error = engine.execute(&["next", "next", "next"]).unwrap_err();
//! assert_eq!(error.position, 2);
//! assert_eq!(engine.state_history(), vec![0, 1, 2]);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod modthree;

// Re-export commonly used types
pub use crate::core::{Config, ConfigError, ConfigErrors, State, StateHistory, Symbol};
pub use engine::{Engine, ProcessError, TransitionError};
