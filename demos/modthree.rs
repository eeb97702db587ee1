//! Modulo Three
//!
//! This example runs the modulo-three automaton over binary numbers and
//! prints the remainder together with the states visited.
//!
//! Key concepts:
//! - A concrete client plugging its own state and symbol types into the engine
//! - Rejecting malformed input before the engine runs
//! - Treating a configuration error as fatal at startup
//!
//! Run with: cargo run --example modthree -- 110 1101 102
//! Set RUST_LOG=trace to see each transition.

use finite_automaton::modthree::{ModThree, ModThreeError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Modulo Three Example ===\n");

    let mut mod_three = match ModThree::new() {
        Ok(mod_three) => mod_three,
        Err(errors) => {
            eprintln!("modulo-three automaton is misconfigured: {errors}");
            std::process::exit(1);
        }
    };

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["", "0", "1", "110", "1101", "102"]
            .into_iter()
            .map(String::from)
            .collect();
    }

    for input in &inputs {
        match mod_three.remainder(input) {
            Ok(state) => {
                println!(
                    "{input:>10} -> remainder {} (divisible: {})",
                    state.remainder(),
                    state.remainder() == 0
                );
                println!("{:>10}    path: {:?}", "", mod_three.last_run());
            }
            Err(ModThreeError::Parse(error)) => {
                println!("{input:>10} -> rejected: {error}");
            }
            Err(error) => {
                println!("{input:>10} -> failed: {error}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
