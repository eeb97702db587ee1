//! State and input symbol traits for automaton definitions.
//!
//! The engine never inspects states or symbols beyond equality and hashing,
//! so both traits are blanket-implemented for every type that qualifies.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the run history
/// - `Eq` + `Hash`: States are used as lookup keys
/// - `Debug`: States appear in error values and log output
///
/// Any type satisfying these bounds is a `State`; there is nothing to
/// implement by hand.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn takes_state<S: State>(_state: S) {}
///
/// takes_state(Door::Open);
/// takes_state("locked");
/// takes_state(3u8);
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// Trait for input symbols consumed by transitions.
///
/// Shares the bounds of [`State`]; kept as a separate name so signatures
/// read `Engine<S: State, I: Symbol>`.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct Coin {
        cents: u32,
    }

    fn assert_state<S: State>(_: &S) {}
    fn assert_symbol<I: Symbol>(_: &I) {}

    #[test]
    fn enums_are_states() {
        assert_state(&TestState::Initial);
        assert_state(&TestState::Processing);
        assert_state(&TestState::Complete);
    }

    #[test]
    fn primitives_and_strings_qualify() {
        assert_state(&0usize);
        assert_state(&"locked");
        assert_state(&String::from("unlocked"));
        assert_symbol(&'C');
        assert_symbol(&"next");
    }

    #[test]
    fn structs_are_symbols() {
        assert_symbol(&Coin { cents: 25 });
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Processing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
