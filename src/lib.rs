//! Seating assignment by friendship affinity.
//!
//! Seats a set of people at tables of fixed capacity so as to maximize the
//! total value of friendships between people at the same table. A
//! friendship is worth `1/friends(a) + 1/friends(b)`, so pairing someone
//! with one of their few friends counts for more.
//!
//! - **Registry**: the symmetric, case-insensitive friendship relation
//!   ([`RelationshipRegistry`]).
//! - **Scoring**: pair and assignment values ([`Scorer`]).
//! - **Seating**: seatings, seat swaps and roster partitioning
//!   ([`seating`]).
//! - **Simulated Annealing (SA)**: random restarts or a single pass
//!   ([`sa`]).
//! - **Hill climbing**: steepest ascent over single swaps ([`climb`]).
//! - **Exhaustive search**: every permutation, for tiny rosters and as a
//!   reference ([`exhaustive`]).
//!
//! Every strategy borrows the registry immutably and takes an explicit,
//! seedable configuration.
//!
//! # Examples
//!
//! ```
//! use tableware::RelationshipRegistry;
//! use tableware::sa::{SaConfig, SaRunner};
//!
//! let mut registry = RelationshipRegistry::new();
//! registry.register_friendship("Ann", "Bo");
//! registry.register_friendship("Cy", "Di");
//! registry.register_friendship("Ed", "");
//!
//! let config = SaConfig::default()
//!     .with_initial_temperature(20.0)
//!     .with_cooling_rate(0.05)
//!     .with_seed(1);
//! let result = SaRunner::run(&registry, 2, &config).unwrap();
//! let tables = result.best.unwrap().into_names();
//! assert_eq!(tables.len(), 3);
//! ```

pub mod climb;
pub mod error;
pub mod exhaustive;
pub mod random;
pub mod registry;
pub mod sa;
pub mod scoring;
pub mod seating;

pub use error::{Result, SeatingError};
pub use registry::{Friendship, PersonId, RelationshipRegistry};
pub use scoring::Scorer;
pub use seating::Seating;
