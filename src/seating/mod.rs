//! Seating assignments and roster partitioning.

mod layout;
mod partition;

pub use layout::{Seat, SeatSwap, Seating, SwapTrial};
pub use partition::{pad, partition, partition_randomly};

use crate::error::{Result, SeatingError};
use crate::registry::{PersonId, RelationshipRegistry};

/// Padded roster a strategy starts from.
#[derive(Debug)]
pub(crate) enum Roster {
    /// Nothing to search: nobody registered, or everyone fits at one table.
    Settled(Seating),
    /// Padded names spanning at least two tables.
    Open(Vec<PersonId>),
}

/// Validates `chairs_per_table` and pads the registry's people to fill
/// whole tables.
pub(crate) fn roster(registry: &RelationshipRegistry, chairs_per_table: usize) -> Result<Roster> {
    if chairs_per_table == 0 {
        return Err(SeatingError::NoChairs);
    }
    if registry.is_empty() {
        return Ok(Roster::Settled(Seating::empty()));
    }
    let names = pad(registry.known_people().cloned().collect(), chairs_per_table);
    if names.len() <= chairs_per_table {
        return Ok(Roster::Settled(Seating::new(vec![names])));
    }
    Ok(Roster::Open(names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_rejects_zero_chairs() {
        let registry: RelationshipRegistry = [("a", "b")].into_iter().collect();
        assert_eq!(roster(&registry, 0).unwrap_err(), SeatingError::NoChairs);
    }

    #[test]
    fn test_roster_empty_registry() {
        let registry = RelationshipRegistry::new();
        match roster(&registry, 4).unwrap() {
            Roster::Settled(seating) => assert!(seating.is_empty()),
            Roster::Open(_) => panic!("empty registry needs no search"),
        }
    }

    #[test]
    fn test_roster_single_table() {
        let registry: RelationshipRegistry = [("a", "b"), ("c", "")].into_iter().collect();
        match roster(&registry, 4).unwrap() {
            Roster::Settled(seating) => {
                assert_eq!(seating.into_names(), vec![vec!["a", "b", "c", ""]]);
            }
            Roster::Open(_) => panic!("three people fit at one table of four"),
        }
    }

    #[test]
    fn test_roster_open() {
        let registry: RelationshipRegistry =
            [("a", "b"), ("c", "d"), ("e", "")].into_iter().collect();
        match roster(&registry, 2).unwrap() {
            Roster::Open(names) => {
                assert_eq!(names.len(), 6);
                assert_eq!(names.iter().filter(|n| n.is_empty()).count(), 1);
            }
            Roster::Settled(_) => panic!("five people need three tables"),
        }
    }
}
