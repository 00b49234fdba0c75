//! Exhaustive search configuration.

/// Configuration for exhaustive search.
///
/// Search cost is `seats!` evaluations, so the roster size is capped.
///
/// # Examples
///
/// ```
/// use tableware::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default().with_max_seats(8);
/// assert_eq!(config.max_seats, 8);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Largest padded roster the search accepts.
    pub max_seats: usize,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self { max_seats: 10 }
    }
}

impl ExhaustiveConfig {
    /// Sets the largest padded roster the search accepts.
    pub fn with_max_seats(mut self, n: usize) -> Self {
        self.max_seats = n;
        self
    }
}
