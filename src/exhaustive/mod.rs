//! Exhaustive search.
//!
//! Enumerates every permutation of the padded roster, so it is globally
//! optimal and only usable for tiny rosters (about ten seats). Mostly a
//! reference to check the heuristics against.

mod config;
mod runner;

pub use config::ExhaustiveConfig;
pub use runner::{ExhaustiveResult, ExhaustiveRunner};
