//! SA execution: restarts and single passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::SaConfig;
use super::pass::{anneal, PassStats};
use crate::error::Result;
use crate::random::{create_rng, resolve_seed, stream_seed};
use crate::registry::{PersonId, RelationshipRegistry};
use crate::scoring::Scorer;
use crate::seating::{partition_randomly, roster, Roster, Seating};

/// Result of simulated annealing with restarts.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best seating across restarts, `None` if no restart scored above 0.
    pub best: Option<Seating>,

    /// Score of the best seating (0 when `best` is `None`).
    pub best_score: f64,

    /// Number of restarts that ran.
    pub restarts: usize,

    /// Total moves tried across all restarts.
    pub iterations: usize,

    /// Moves kept, including improvements.
    pub accepted_moves: usize,

    /// Moves that raised the score.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best score after each completed restart.
    pub score_history: Vec<f64>,
}

impl SaResult {
    fn settled(seating: Seating, score: f64) -> Self {
        Self {
            best: Some(seating),
            best_score: score,
            restarts: 0,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            cancelled: false,
            score_history: Vec::new(),
        }
    }
}

/// Result of a single annealing pass.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Seating at the end of the pass.
    pub seating: Seating,

    /// Its score.
    pub score: f64,

    /// Moves tried.
    pub iterations: usize,

    /// Moves kept, including improvements.
    pub accepted_moves: usize,

    /// Moves that raised the score.
    pub improving_moves: usize,

    /// Temperature when the pass stopped.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

struct RestartOutcome {
    seating: Seating,
    score: f64,
    stats: PassStats,
}

/// Executes simulated annealing over seatings.
pub struct SaRunner;

impl SaRunner {
    /// Runs `config.restarts` annealing passes and keeps the best.
    ///
    /// # Examples
    ///
    /// ```
    /// use tableware::RelationshipRegistry;
    /// use tableware::sa::{SaConfig, SaRunner};
    ///
    /// let registry: RelationshipRegistry =
    ///     [("a", "b"), ("c", "d"), ("e", "f")].into_iter().collect();
    /// let config = SaConfig::default()
    ///     .with_initial_temperature(50.0)
    ///     .with_cooling_rate(0.05)
    ///     .with_seed(42);
    ///
    /// let result = SaRunner::run(&registry, 2, &config).unwrap();
    /// assert_eq!(result.best.unwrap().table_count(), 3);
    /// ```
    pub fn run(
        registry: &RelationshipRegistry,
        chairs_per_table: usize,
        config: &SaConfig,
    ) -> Result<SaResult> {
        Self::run_with_cancel(registry, chairs_per_table, config, None)
    }

    /// Runs restarts with an optional cancellation token.
    ///
    /// A set token stops the pass in progress and skips the remaining
    /// restarts; the best seating seen so far is still returned.
    #[tracing::instrument(level = "debug", skip(registry, config, cancel))]
    pub fn run_with_cancel(
        registry: &RelationshipRegistry,
        chairs_per_table: usize,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;
        let scorer = Scorer::new(registry);

        let names = match roster(registry, chairs_per_table)? {
            Roster::Settled(seating) => {
                let score = scorer.seating_value(&seating);
                return Ok(SaResult::settled(seating, score));
            }
            Roster::Open(names) => names,
        };

        let base_seed = resolve_seed(config.seed);
        let flag = cancel.as_deref();
        let outcomes = run_restarts(config.restarts, config.parallel, |index| {
            restart(
                &scorer,
                &names,
                chairs_per_table,
                config,
                stream_seed(base_seed, index),
                flag,
            )
        });

        let mut result = SaResult {
            best: None,
            best_score: 0.0,
            restarts: 0,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            cancelled: false,
            score_history: Vec::with_capacity(config.restarts),
        };

        // Strictly greater wins; ties keep the earlier restart.
        for (index, outcome) in outcomes.into_iter().enumerate() {
            let Some(outcome) = outcome else {
                result.cancelled = true;
                continue;
            };
            result.restarts += 1;
            result.iterations += outcome.stats.iterations;
            result.accepted_moves += outcome.stats.accepted_moves;
            result.improving_moves += outcome.stats.improving_moves;
            result.cancelled |= outcome.stats.cancelled;

            if outcome.score > result.best_score {
                tracing::debug!(restart = index, score = outcome.score, "new high score");
                result.best = Some(outcome.seating);
                result.best_score = outcome.score;
            }
            result.score_history.push(result.best_score);
        }

        Ok(result)
    }

    /// Runs one annealing pass from one random partition.
    pub fn run_single(
        registry: &RelationshipRegistry,
        chairs_per_table: usize,
        config: &SaConfig,
    ) -> Result<AnnealResult> {
        Self::run_single_with_cancel(registry, chairs_per_table, config, None)
    }

    /// Single pass with an optional cancellation token.
    #[tracing::instrument(level = "debug", skip(registry, config, cancel))]
    pub fn run_single_with_cancel(
        registry: &RelationshipRegistry,
        chairs_per_table: usize,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult> {
        config.validate()?;
        let scorer = Scorer::new(registry);

        let names = match roster(registry, chairs_per_table)? {
            Roster::Settled(seating) => {
                let score = scorer.seating_value(&seating);
                return Ok(AnnealResult {
                    seating,
                    score,
                    iterations: 0,
                    accepted_moves: 0,
                    improving_moves: 0,
                    final_temperature: config.initial_temperature,
                    cancelled: false,
                });
            }
            Roster::Open(names) => names,
        };

        let mut rng = create_rng(resolve_seed(config.seed));
        let mut seating = Seating::new(partition_randomly(names, chairs_per_table, &mut rng));
        let (score, stats) = anneal(
            &scorer,
            &mut seating,
            config.initial_temperature,
            config.cooling_rate,
            &mut rng,
            cancel.as_deref(),
        );
        tracing::debug!(score, iterations = stats.iterations, "annealing pass finished");

        Ok(AnnealResult {
            seating,
            score,
            iterations: stats.iterations,
            accepted_moves: stats.accepted_moves,
            improving_moves: stats.improving_moves,
            final_temperature: stats.final_temperature,
            cancelled: stats.cancelled,
        })
    }
}

/// One restart on its own seating and RNG stream. `None` if cancelled
/// before it began.
fn restart(
    scorer: &Scorer<'_>,
    names: &[PersonId],
    chairs_per_table: usize,
    config: &SaConfig,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Option<RestartOutcome> {
    if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
        return None;
    }
    let mut rng = create_rng(seed);
    let mut seating = Seating::new(partition_randomly(
        names.to_vec(),
        chairs_per_table,
        &mut rng,
    ));
    let (score, stats) = anneal(
        scorer,
        &mut seating,
        config.initial_temperature,
        config.cooling_rate,
        &mut rng,
        cancel,
    );
    tracing::trace!(score, iterations = stats.iterations, "annealing pass finished");
    Some(RestartOutcome {
        seating,
        score,
        stats,
    })
}

/// Runs `count` restarts, in index order or on the rayon pool.
fn run_restarts<F>(count: usize, parallel: bool, restart: F) -> Vec<Option<RestartOutcome>>
where
    F: Fn(usize) -> Option<RestartOutcome> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return (0..count).into_par_iter().map(&restart).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..count).map(restart).collect()
}
