//! Exhaustive search execution.

use itertools::Itertools;

use super::config::ExhaustiveConfig;
use crate::error::{Result, SeatingError};
use crate::registry::{PersonId, RelationshipRegistry};
use crate::scoring::Scorer;
use crate::seating::{partition, roster, Roster, Seating};

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
pub struct ExhaustiveResult {
    /// A globally optimal seating (the first found among ties).
    pub best: Seating,
    /// Its score.
    pub best_score: f64,
    /// Permutations scored.
    pub permutations: usize,
}

/// Exhaustive search runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Scores every permutation of the padded roster split into
    /// consecutive tables and returns the best.
    ///
    /// # Examples
    ///
    /// ```
    /// use tableware::RelationshipRegistry;
    /// use tableware::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
    ///
    /// let registry: RelationshipRegistry =
    ///     [("a", "b"), ("b", "c"), ("c", "d")].into_iter().collect();
    /// let result = ExhaustiveRunner::run(&registry, 2, &ExhaustiveConfig::default()).unwrap();
    /// assert_eq!(result.permutations, 24);
    /// // a-b and c-d: (1 + 1/2) twice
    /// assert!((result.best_score - 3.0).abs() < 1e-9);
    /// ```
    #[tracing::instrument(level = "debug", skip(registry, config))]
    pub fn run(
        registry: &RelationshipRegistry,
        chairs_per_table: usize,
        config: &ExhaustiveConfig,
    ) -> Result<ExhaustiveResult> {
        let scorer = Scorer::new(registry);

        let names = match roster(registry, chairs_per_table)? {
            Roster::Settled(seating) => {
                let score = scorer.seating_value(&seating);
                return Ok(ExhaustiveResult {
                    best: seating,
                    best_score: score,
                    permutations: 1,
                });
            }
            Roster::Open(names) => names,
        };
        if names.len() > config.max_seats {
            return Err(SeatingError::TooManySeats {
                seats: names.len(),
                limit: config.max_seats,
            });
        }

        let mut best: Option<Vec<Vec<&PersonId>>> = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut permutations = 0;

        for order in names.iter().permutations(names.len()) {
            permutations += 1;
            let tables = partition(order, chairs_per_table);
            let score = scorer.assignment_value(&tables);
            if score > best_score {
                tracing::trace!(score, permutation = permutations, "new high score");
                best_score = score;
                best = Some(tables);
            }
        }

        let best = best.map_or_else(Seating::empty, |tables| {
            Seating::new(
                tables
                    .into_iter()
                    .map(|table| table.into_iter().cloned().collect())
                    .collect(),
            )
        });
        tracing::debug!(best_score, permutations, "exhaustive search finished");

        Ok(ExhaustiveResult {
            best,
            best_score,
            permutations,
        })
    }
}
