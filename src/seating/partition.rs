//! Splitting a roster into fixed-size groups.

use rand::seq::SliceRandom;
use rand::Rng;

/// Appends `T::default()` (the empty sentinel for names) until the length
/// is a multiple of `group_size`.
///
/// # Panics
///
/// Panics if `group_size` is zero.
pub fn pad<T: Default>(mut names: Vec<T>, group_size: usize) -> Vec<T> {
    assert!(group_size > 0, "group_size must be positive");
    let remainder = names.len() % group_size;
    if remainder > 0 {
        names.resize_with(names.len() + group_size - remainder, T::default);
    }
    names
}

/// Slices `names` into consecutive groups of `group_size`, keeping order.
///
/// # Panics
///
/// Panics if `group_size` is zero or does not divide `names.len()`;
/// [`pad`] first.
pub fn partition<T>(names: Vec<T>, group_size: usize) -> Vec<Vec<T>> {
    assert!(group_size > 0, "group_size must be positive");
    assert!(
        names.len() % group_size == 0,
        "pad names before partitioning"
    );
    let mut groups = Vec::with_capacity(names.len() / group_size);
    let mut names = names.into_iter();
    loop {
        let group: Vec<T> = names.by_ref().take(group_size).collect();
        if group.is_empty() {
            break;
        }
        groups.push(group);
    }
    groups
}

/// Pads, shuffles uniformly, then partitions.
///
/// # Examples
///
/// ```
/// use tableware::seating::partition_randomly;
/// use tableware::random::create_rng;
///
/// let names: Vec<String> = "abcdefghij".chars().map(String::from).collect();
/// let tables = partition_randomly(names, 3, &mut create_rng(1));
/// assert_eq!(tables.len(), 4);
/// assert!(tables.iter().all(|t| t.len() == 3));
/// assert_eq!(tables.iter().flatten().filter(|s| s.is_empty()).count(), 2);
/// ```
pub fn partition_randomly<T: Default, R: Rng + ?Sized>(
    names: Vec<T>,
    group_size: usize,
    rng: &mut R,
) -> Vec<Vec<T>> {
    let mut names = pad(names, group_size);
    names.shuffle(rng);
    partition(names, group_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn letters() -> Vec<String> {
        "abcdefghij".chars().map(String::from).collect()
    }

    #[test]
    fn test_pad_to_multiple() {
        let padded = pad(vec!["a", "b", "c", "d"], 3);
        assert_eq!(padded, vec!["a", "b", "c", "d", "", ""]);
    }

    #[test]
    fn test_pad_noop_on_multiple() {
        assert_eq!(pad(vec!["a", "b"], 2), vec!["a", "b"]);
        assert!(pad(Vec::<String>::new(), 4).is_empty());
    }

    #[test]
    fn test_partition_preserves_order() {
        let groups = partition(vec![1, 2, 3, 4, 5, 6], 2);
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    #[should_panic(expected = "pad names before partitioning")]
    fn test_partition_requires_padding() {
        partition(vec![1, 2, 3], 2);
    }

    #[test]
    fn test_partition_randomly_shape() {
        let mut rng = create_rng(42);
        let tables = partition_randomly(letters(), 3, &mut rng);
        assert_eq!(tables.len(), 4);
        assert!(tables.iter().all(|t| t.len() == 3));

        let mut seated: Vec<String> = tables.into_iter().flatten().collect();
        let blanks = seated.iter().filter(|s| s.is_empty()).count();
        assert_eq!(blanks, 2);
        seated.retain(|s| !s.is_empty());
        seated.sort();
        assert_eq!(seated, letters());
    }

    #[test]
    fn test_partition_randomly_reproducible() {
        let a = partition_randomly(letters(), 4, &mut create_rng(9));
        let b = partition_randomly(letters(), 4, &mut create_rng(9));
        assert_eq!(a, b);
    }
}
