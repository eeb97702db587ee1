//! Remainder of a binary number modulo three, computed by an automaton.
//!
//! The automaton reads the number most significant bit first. Its state is
//! the remainder of the prefix read so far, so reading bit `b` in state `s`
//! moves to `(2s + b) mod 3`:
//!
//! | state | on `0` | on `1` |
//! |-------|--------|--------|
//! | 0     | 0      | 1      |
//! | 1     | 2      | 0      |
//! | 2     | 1      | 2      |
//!
//! Only remainder zero is accepting, so `is_in_final_state` after a run
//! answers "divisible by three".

use crate::core::{Config, ConfigErrors};
use crate::engine::{Engine, ProcessError};
use crate::transition_table;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remainder classes modulo three.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ModState {
    Zero,
    One,
    Two,
}

impl ModState {
    pub fn remainder(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// One binary digit of input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BinarySymbol(pub char);

impl BinarySymbol {
    pub const ZERO: Self = Self('0');
    pub const ONE: Self = Self('1');
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid binary character {character:?} at position {position}")]
pub struct ParseError {
    pub character: char,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModThreeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Execution(#[from] ProcessError<ModState, BinarySymbol>),
}

/// The modulo-three automaton definition.
pub fn config() -> Config<ModState, BinarySymbol> {
    use BinarySymbol as B;
    use ModState::*;

    let mut config = Config::new(vec![Zero, One, Two], vec![B::ZERO, B::ONE], Zero);
    config.final_states = vec![Zero];
    config.transitions = transition_table! {
        Zero => { B::ZERO => Zero, B::ONE => One },
        One => { B::ZERO => Two, B::ONE => Zero },
        Two => { B::ZERO => One, B::ONE => Two },
    };
    config
}

/// Binary-string front end over the modulo-three engine.
///
/// # Example
///
/// ```rust
/// use finite_automaton::modthree::{ModState, ModThree};
///
/// let mut mod_three = ModThree::new().unwrap();
///
/// assert_eq!(mod_three.remainder("1101").unwrap(), ModState::One);
/// assert!(mod_three.is_divisible_by_three("110"));
/// assert!(!mod_three.is_divisible_by_three("102"));
/// ```
#[derive(Clone, Debug)]
pub struct ModThree {
    engine: Engine<ModState, BinarySymbol>,
}

impl ModThree {
    pub fn new() -> Result<Self, ConfigErrors<ModState, BinarySymbol>> {
        Ok(Self {
            engine: Engine::new(config())?,
        })
    }

    /// Convert a binary string into symbols, rejecting anything outside the
    /// automaton's alphabet. The engine is not touched.
    pub fn parse_input(&self, binary: &str) -> Result<Vec<BinarySymbol>, ParseError> {
        binary
            .chars()
            .enumerate()
            .map(|(position, character)| {
                let symbol = BinarySymbol(character);
                if self.engine.validate_input(&symbol) {
                    Ok(symbol)
                } else {
                    Err(ParseError {
                        character,
                        position,
                    })
                }
            })
            .collect()
    }

    /// Remainder of `binary` modulo three. The empty string counts as zero.
    pub fn remainder(&mut self, binary: &str) -> Result<ModState, ModThreeError> {
        let symbols = self.parse_input(binary)?;
        self.engine.execute(&symbols)?;
        Ok(*self.engine.current_state())
    }

    /// `false` for malformed input as well as for non-multiples of three.
    pub fn is_divisible_by_three(&mut self, binary: &str) -> bool {
        match self.parse_input(binary) {
            Ok(symbols) => match self.engine.accepts(&symbols) {
                Ok(accepted) => accepted,
                Err(error) => {
                    tracing::debug!("run over {binary:?} failed: {error}");
                    false
                }
            },
            Err(error) => {
                tracing::debug!("rejected input {binary:?}: {error}");
                false
            }
        }
    }

    /// States visited by the most recent run.
    pub fn last_run(&self) -> Vec<ModState> {
        self.engine.state_history()
    }
}
