//! Steepest-ascent hill climbing over single seat swaps.
//!
//! Starts from a random partition and repeatedly commits the best swap
//! between two tables until no swap improves the score. The result is a
//! local optimum only.

mod config;
mod runner;

pub use config::ClimbConfig;
pub use runner::{ClimbResult, ClimbRunner};
