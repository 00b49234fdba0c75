//! Error type shared by every search strategy.

use thiserror::Error;

/// Invalid parameters rejected before a search begins.
///
/// Registry operations never fail; only strategy entry points return this.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatingError {
    /// `chairs_per_table` was zero.
    #[error("chairs_per_table must be positive")]
    NoChairs,

    /// Cooling rate outside the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    /// Initial temperature that is not a finite positive number.
    #[error("initial_temperature must be finite and positive, got {0}")]
    Temperature(f64),

    /// Exhaustive search requested over more seats than allowed.
    #[error("exhaustive search over {seats} seats exceeds the limit of {limit}")]
    TooManySeats {
        /// Seats in the padded roster.
        seats: usize,
        /// Configured maximum.
        limit: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = SeatingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SeatingError::NoChairs.to_string(),
            "chairs_per_table must be positive"
        );
        assert_eq!(
            SeatingError::CoolingRate(1.5).to_string(),
            "cooling_rate must be in (0, 1), got 1.5"
        );
        assert_eq!(
            SeatingError::TooManySeats { seats: 12, limit: 10 }.to_string(),
            "exhaustive search over 12 seats exceeds the limit of 10"
        );
    }
}
