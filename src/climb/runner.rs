//! Hill climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Seat everyone by one random partition; its score is the pinnacle
//! 2. Each pass:
//!    a. Try every swap between seats at two distinct tables, rolling each
//!    back after scoring it
//!    b. If the best swap beats the pinnacle, commit it and raise the
//!    pinnacle
//!    c. Otherwise stop: the seating is a local optimum for single swaps
//!
//! A pass costs `O(tables² · chairs² · seats²)`, so this suits small rosters.

use super::config::ClimbConfig;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use crate::registry::RelationshipRegistry;
use crate::scoring::Scorer;
use crate::seating::{partition_randomly, roster, Roster, SeatSwap, Seating};

/// Minimum gain for a swap to count as an improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-12;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult {
    /// Local optimum reached.
    pub best: Seating,
    /// Its score (the final pinnacle).
    pub best_score: f64,
    /// Neighborhood scans executed.
    pub passes: usize,
    /// Neighbor seatings scored.
    pub evaluations: usize,
    /// Pinnacle score at the start and after each pass.
    pub score_history: Vec<f64>,
}

/// Steepest-ascent hill climbing runner.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Climbs from one random partition to a local optimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use tableware::RelationshipRegistry;
    /// use tableware::climb::{ClimbConfig, ClimbRunner};
    ///
    /// let registry: RelationshipRegistry =
    ///     [("a", "b"), ("c", "d")].into_iter().collect();
    /// let result = ClimbRunner::run(&registry, 2, &ClimbConfig::default().with_seed(1)).unwrap();
    /// assert!((result.best_score - 4.0).abs() < 1e-9);
    /// ```
    #[tracing::instrument(level = "debug", skip(registry, config))]
    pub fn run(
        registry: &RelationshipRegistry,
        chairs_per_table: usize,
        config: &ClimbConfig,
    ) -> Result<ClimbResult> {
        let scorer = Scorer::new(registry);

        let names = match roster(registry, chairs_per_table)? {
            Roster::Settled(seating) => {
                let score = scorer.seating_value(&seating);
                return Ok(ClimbResult {
                    best: seating,
                    best_score: score,
                    passes: 0,
                    evaluations: 0,
                    score_history: vec![score],
                });
            }
            Roster::Open(names) => names,
        };

        let mut rng = create_rng(resolve_seed(config.seed));
        let mut seating = Seating::new(partition_randomly(names, chairs_per_table, &mut rng));
        let mut pinnacle = scorer.seating_value(&seating);
        let mut score_history = vec![pinnacle];
        let mut passes = 0;
        let mut evaluations = 0;

        loop {
            if config.max_passes > 0 && passes >= config.max_passes {
                break;
            }
            passes += 1;

            let swaps: Vec<SeatSwap> = seating.cross_table_swaps().collect();
            let mut best_move: Option<(SeatSwap, f64)> = None;
            for swap in swaps {
                let trial = seating.trial(swap);
                let score = scorer.seating_value(trial.seating());
                trial.rollback();
                evaluations += 1;

                if best_move.is_none_or(|(_, best)| score > best) {
                    best_move = Some((swap, score));
                }
            }

            match best_move {
                Some((swap, score)) if score > pinnacle + IMPROVEMENT_EPSILON => {
                    seating.apply(swap);
                    tracing::debug!(pass = passes, score, "climbed");
                    pinnacle = score;
                    score_history.push(pinnacle);
                }
                _ => {
                    score_history.push(pinnacle);
                    break;
                }
            }
        }

        Ok(ClimbResult {
            best: seating,
            best_score: pinnacle,
            passes,
            evaluations,
            score_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeatingError;

    fn triangles() -> RelationshipRegistry {
        [
            ("a", "b"),
            ("b", "c"),
            ("a", "c"),
            ("d", "e"),
            ("e", "f"),
            ("d", "f"),
            ("g", "h"),
            ("h", "i"),
            ("g", "i"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_climb_is_local_optimum() {
        let registry = triangles();
        let scorer = Scorer::new(&registry);
        let result = ClimbRunner::run(&registry, 3, &ClimbConfig::default().with_seed(5)).unwrap();

        let mut seating = result.best.clone();
        let swaps: Vec<SeatSwap> = seating.cross_table_swaps().collect();
        for swap in swaps {
            let trial = seating.trial(swap);
            let score = scorer.seating_value(trial.seating());
            assert!(score <= result.best_score + 1e-9);
        }
        assert_eq!(seating, result.best);
    }

    #[test]
    fn test_climb_score_matches_seating() {
        let registry = triangles();
        let result = ClimbRunner::run(&registry, 3, &ClimbConfig::default().with_seed(8)).unwrap();
        let rescored = Scorer::new(&registry).seating_value(&result.best);
        assert!((rescored - result.best_score).abs() < 1e-9);
        assert_eq!(result.best.people().count(), 9);
    }

    #[test]
    fn test_climb_history_strictly_rising() {
        let registry = triangles();
        let result = ClimbRunner::run(&registry, 3, &ClimbConfig::default().with_seed(2)).unwrap();
        let rises = &result.score_history[..result.score_history.len() - 1];
        for window in rises.windows(2) {
            assert!(window[1] > window[0]);
        }
        // 9 people, 3 tables of 3: 27 swaps per scan
        assert_eq!(result.evaluations, result.passes * 27);
    }

    #[test]
    fn test_climb_pairs_reach_optimum() {
        // Pairs of mutual only-friends: any improving swap moves toward
        // the optimum, so climbing always reaches it.
        let registry: RelationshipRegistry =
            [("a", "b"), ("c", "d"), ("e", "f")].into_iter().collect();
        for seed in 0..5 {
            let result =
                ClimbRunner::run(&registry, 2, &ClimbConfig::default().with_seed(seed)).unwrap();
            assert!((result.best_score - 6.0).abs() < 1e-9, "seed {seed}");
        }
    }

    #[test]
    fn test_climb_max_passes() {
        let registry = triangles();
        let result = ClimbRunner::run(
            &registry,
            3,
            &ClimbConfig::default().with_max_passes(1).with_seed(4),
        )
        .unwrap();
        assert!(result.passes <= 1);
    }

    #[test]
    fn test_climb_degenerate_inputs() {
        let registry = triangles();
        assert_eq!(
            ClimbRunner::run(&registry, 0, &ClimbConfig::default()).unwrap_err(),
            SeatingError::NoChairs
        );

        let result = ClimbRunner::run(&registry, 9, &ClimbConfig::default()).unwrap();
        assert_eq!(result.best.table_count(), 1);
        // nine friendships, each between two people with two friends
        assert!((result.best_score - 9.0).abs() < 1e-9);

        let empty = ClimbRunner::run(&RelationshipRegistry::new(), 3, &ClimbConfig::default())
            .unwrap();
        assert!(empty.best.is_empty());
        assert_eq!(empty.best_score, 0.0);
    }
}
