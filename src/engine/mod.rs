//! Execution of validated automata.
//!
//! This module holds the only mutable part of the crate: an [`Engine`] owns a
//! validated configuration together with its run state (current state and
//! history) and drives transitions one symbol at a time or over a sequence.
//!
//! # Key Concepts
//!
//! - **Construction**: validation runs once, in [`Engine::new`]
//! - **Transition**: the sole primitive mutator; failure changes nothing
//! - **Process / Execute**: batch input, continuing or from a fresh reset
//!
//! Mutating methods take `&mut self`, so one engine serves one run at a time.
//! Independent engines built from clones of one `Config` share nothing.

mod error;
mod machine;

pub use error::{ProcessError, TransitionError};
pub use machine::Engine;
