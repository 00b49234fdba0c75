//! Hill climbing configuration.

/// Configuration parameters for steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use tableware::climb::ClimbConfig;
///
/// let config = ClimbConfig::default().with_max_passes(50).with_seed(3);
/// assert_eq!(config.max_passes, 50);
/// assert_eq!(config.seed, Some(3));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Maximum neighborhood scans. 0 = climb until a local optimum.
    pub max_passes: usize,
    /// Random seed for the starting partition (None for random).
    pub seed: Option<u64>,
}

impl ClimbConfig {
    /// Sets the maximum number of neighborhood scans.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
