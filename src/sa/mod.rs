//! Simulated Annealing (SA) over seatings.
//!
//! Each pass starts from a random partition and repeatedly swaps two people
//! at different tables, accepting worse seatings with a probability that
//! shrinks as the temperature cools. [`SaRunner::run`] repeats the pass from
//! fresh partitions and keeps the best; [`SaRunner::run_single`] runs one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod pass;
mod runner;

pub use config::{SaConfig, TEMPERATURE_FLOOR};
pub use runner::{AnnealResult, SaResult, SaRunner};
