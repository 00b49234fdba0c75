//! SA configuration.

use crate::error::{Result, SeatingError};

/// Temperature at or below which an annealing pass stops.
pub const TEMPERATURE_FLOOR: f64 = 1.0;

/// Configuration for simulated annealing.
///
/// Cooling is geometric: after every move `T <- T * (1 - cooling_rate)`,
/// until `T` drops to [`TEMPERATURE_FLOOR`]. The run length is roughly
/// `ln(T0) / cooling_rate` moves per pass; a cooling rate close to zero
/// makes for a very long pass and is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use tableware::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.01)
///     .with_restarts(4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature of each pass.
    pub initial_temperature: f64,

    /// Fraction of the temperature shed after each move, in (0, 1).
    pub cooling_rate: f64,

    /// Number of independent passes, each from a fresh random partition.
    pub restarts: usize,

    /// Whether to run restarts on the rayon pool. Requires the `parallel`
    /// feature; results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.0005,
            restarts: 10,
            parallel: true,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Approximate number of moves in one pass.
    pub fn cooling_steps(&self) -> usize {
        if self.initial_temperature <= TEMPERATURE_FLOOR {
            return 0;
        }
        let per_step = -(1.0 - self.cooling_rate).ln();
        (self.initial_temperature.ln() / per_step).ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SeatingError::Temperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SeatingError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}
