//! Objective function over seating assignments.
//!
//! A friendship is worth `1/friends(a) + 1/friends(b)`: seating someone
//! with one of their few friends counts for more than seating a popular
//! person with one of many.

use crate::registry::{PersonId, RelationshipRegistry};
use crate::seating::Seating;

/// Scores pairs and assignments against a borrowed registry.
///
/// # Examples
///
/// ```
/// use tableware::{RelationshipRegistry, Scorer};
///
/// let registry: RelationshipRegistry =
///     [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("d", "e")]
///         .into_iter()
///         .collect();
/// let scorer = Scorer::new(&registry);
///
/// let score = scorer.assignment_value(&[vec!["a", "b"], vec!["c", "d", "e"]]);
/// assert!((score - 3.1667).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'r> {
    registry: &'r RelationshipRegistry,
}

impl<'r> Scorer<'r> {
    pub fn new(registry: &'r RelationshipRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r RelationshipRegistry {
        self.registry
    }

    /// Value of seating `name1` next to `name2`.
    ///
    /// Zero for padding, for a person paired with themselves, and for
    /// people who are not friends.
    pub fn pair_value(&self, name1: &str, name2: &str) -> f64 {
        let a = PersonId::normalize(name1);
        let b = PersonId::normalize(name2);
        if a.is_empty() || b.is_empty() || a == b {
            return 0.0;
        }
        let Some(friends_of_a) = self.registry.friends_of(&a) else {
            return 0.0;
        };
        if !friends_of_a.contains(&*b) {
            return 0.0;
        }
        // Both sides hold at least this friendship, so neither count is zero.
        let friends_of_b = self.registry.friends_of(&b).map_or(1, |f| f.len());
        1.0 / friends_of_a.len() as f64 + 1.0 / friends_of_b as f64
    }

    /// Sum of [`pair_value`](Self::pair_value) over every unordered pair
    /// seated at the same table.
    ///
    /// Quadratic in the table size; this is the cost every search pays per
    /// candidate.
    pub fn assignment_value<T, S>(&self, tables: &[T]) -> f64
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut total = 0.0;
        for table in tables {
            let seats = table.as_ref();
            for (i, first) in seats.iter().enumerate() {
                let first = first.as_ref();
                if first.is_empty() {
                    continue;
                }
                for second in &seats[i + 1..] {
                    total += self.pair_value(first, second.as_ref());
                }
            }
        }
        total
    }

    /// Value of a whole [`Seating`].
    pub fn seating_value(&self, seating: &Seating) -> f64 {
        self.assignment_value(seating.tables())
    }
}
