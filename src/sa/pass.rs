//! A single annealing pass over one seating.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use super::config::TEMPERATURE_FLOOR;
use crate::scoring::Scorer;
use crate::seating::Seating;

/// Counters from one pass.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PassStats {
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    pub final_temperature: f64,
    pub cancelled: bool,
}

/// Metropolis acceptance probability of moving from `current` to `score`
/// when maximizing.
pub(crate) fn acceptance_probability(score: f64, current: f64, temperature: f64) -> f64 {
    if score > current {
        1.0
    } else {
        ((score - current) / temperature).exp()
    }
}

/// Anneals `seating` in place and returns its final score.
///
/// Each move swaps two seats at distinct tables. `current` always holds the
/// score of the seating as it stands, so rejected moves restore both.
pub(crate) fn anneal<R: Rng + ?Sized>(
    scorer: &Scorer<'_>,
    seating: &mut Seating,
    mut temperature: f64,
    cooling_rate: f64,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> (f64, PassStats) {
    let mut current = scorer.seating_value(seating);
    let mut stats = PassStats::default();

    while temperature > TEMPERATURE_FLOOR {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            stats.cancelled = true;
            break;
        }
        let Some(swap) = seating.random_swap(rng) else {
            break;
        };

        let trial = seating.trial(swap);
        let score = scorer.seating_value(trial.seating());
        let p = acceptance_probability(score, current, temperature);
        if p < 1.0 && p < rng.random::<f64>() {
            trial.rollback();
        } else {
            trial.commit();
            if score > current {
                stats.improving_moves += 1;
            }
            stats.accepted_moves += 1;
            current = score;
        }

        stats.iterations += 1;
        temperature *= 1.0 - cooling_rate;
    }

    stats.final_temperature = temperature;
    (current, stats)
}
