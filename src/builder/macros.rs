//! Macros for ergonomic automaton construction.

/// Build a nested [`TransitionTable`](crate::core::TransitionTable) from a
/// literal listing of rows.
///
/// # Example
///
/// ```
/// use finite_automaton::core::{Config, TransitionTable};
/// use finite_automaton::transition_table;
///
/// let table: TransitionTable<&str, char> = transition_table! {
///     "locked" => { 'C' => "unlocked", 'P' => "locked" },
///     "unlocked" => { 'C' => "unlocked", 'P' => "locked" },
/// };
///
/// let mut config = Config::new(vec!["locked", "unlocked"], vec!['C', 'P'], "locked");
/// config.transitions = table;
/// assert_eq!(config.transition_count(), 4);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $from:expr => { $( $symbol:expr => $to:expr ),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = ::std::collections::HashMap::new();
        $(
            #[allow(unused_variables)]
            let row: &mut ::std::collections::HashMap<_, _> = table
                .entry($from)
                .or_insert_with(::std::collections::HashMap::new);
            $( row.insert($symbol, $to); )*
        )*
        table
    }};
}
