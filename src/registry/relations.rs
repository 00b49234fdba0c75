//! The friendship relation and per-person friend counts.

use std::collections::{BTreeMap, BTreeSet};

use super::person::{Friendship, PersonId};

/// Symmetric, case-insensitive friendship relation.
///
/// Every registered person maps to the set of their distinct friends, so a
/// person's friend count is the size of that set and a lonely person maps to
/// an empty set. People iterate in sorted order, which keeps seeded searches
/// reproducible.
///
/// The registry only grows. Search strategies borrow it immutably.
///
/// # Examples
///
/// ```
/// use tableware::RelationshipRegistry;
///
/// let mut registry = RelationshipRegistry::new();
/// registry.register_friendship("Bob", "Kim");
/// registry.register_friendship("kim", "bob"); // duplicate, ignored
/// registry.register_friendship("Timmy", "");  // lonely person
///
/// assert!(registry.is_friend("KIM", "Bob"));
/// assert_eq!(registry.friend_count("bob"), Some(1));
/// assert_eq!(registry.friend_count("timmy"), Some(0));
/// assert_eq!(registry.people_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelationshipRegistry {
    friends: BTreeMap<PersonId, BTreeSet<PersonId>>,
    friendship_count: usize,
}

impl RelationshipRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `name1` and `name2` are friends.
    ///
    /// - both empty, or the same person: no-op
    /// - exactly one empty: registers the other as a known person with no
    ///   friends, if not already known
    /// - otherwise records the friendship once; repeats are ignored
    ///
    /// Returns `true` if the registry changed.
    pub fn register_friendship(&mut self, name1: &str, name2: &str) -> bool {
        let a = PersonId::new(name1);
        let b = PersonId::new(name2);
        match (a.is_empty(), b.is_empty()) {
            (true, true) => false,
            (false, true) => self.insert_person(a),
            (true, false) => self.insert_person(b),
            (false, false) => self.insert_friendship(a, b),
        }
    }

    /// Registers a person with no friendships, if not already known.
    ///
    /// Equivalent to `register_friendship(name, "")`.
    pub fn register_person(&mut self, name: &str) -> bool {
        self.register_friendship(name, "")
    }

    fn insert_person(&mut self, person: PersonId) -> bool {
        if self.friends.contains_key(&person) {
            return false;
        }
        self.friends.insert(person, BTreeSet::new());
        true
    }

    fn insert_friendship(&mut self, a: PersonId, b: PersonId) -> bool {
        if a == b || self.friends_of(a.as_str()).is_some_and(|f| f.contains(&b)) {
            return false;
        }
        self.friends.entry(a.clone()).or_default().insert(b.clone());
        self.friends.entry(b).or_default().insert(a);
        self.friendship_count += 1;
        true
    }

    /// Returns `true` if the two names are registered friends.
    pub fn is_friend(&self, name1: &str, name2: &str) -> bool {
        let a = PersonId::normalize(name1);
        let b = PersonId::normalize(name2);
        if a.is_empty() || b.is_empty() || a == b {
            return false;
        }
        self.friends_of(&a).is_some_and(|f| f.contains(&*b))
    }

    /// Number of distinct friends of `name`, or `None` if unknown.
    pub fn friend_count(&self, name: &str) -> Option<usize> {
        self.friends_of(&PersonId::normalize(name)).map(BTreeSet::len)
    }

    /// Friends of an already-normalized name.
    pub(crate) fn friends_of(&self, normalized: &str) -> Option<&BTreeSet<PersonId>> {
        self.friends.get(normalized)
    }

    /// Every registered person, sorted.
    pub fn known_people(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.friends.keys()
    }

    /// Every friendship as a canonical pair, sorted.
    pub fn friendships(&self) -> impl Iterator<Item = Friendship> + '_ {
        self.friends.iter().flat_map(|(person, friends)| {
            friends
                .range::<PersonId, _>((
                    std::ops::Bound::Excluded(person),
                    std::ops::Bound::Unbounded,
                ))
                .filter_map(move |friend| Friendship::new(person.clone(), friend.clone()))
        })
    }

    /// Number of registered people, lonely ones included.
    pub fn people_count(&self) -> usize {
        self.friends.len()
    }

    /// Number of distinct friendships.
    pub fn friendship_count(&self) -> usize {
        self.friendship_count
    }

    /// Returns `true` if nobody has been registered.
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

impl<A: AsRef<str>, B: AsRef<str>> Extend<(A, B)> for RelationshipRegistry {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, pairs: I) {
        for (a, b) in pairs {
            self.register_friendship(a.as_ref(), b.as_ref());
        }
    }
}

impl<A: AsRef<str>, B: AsRef<str>> FromIterator<(A, B)> for RelationshipRegistry {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(pairs: I) -> Self {
        let mut registry = Self::new();
        registry.extend(pairs);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> RelationshipRegistry {
        let mut registry = RelationshipRegistry::new();
        registry.register_friendship("bob", "kim");
        registry.register_friendship("bob", "timmy");
        registry.register_friendship("Bob", "James");
        registry.register_friendship("Timmy", "James");
        registry.register_friendship("Timmy", "Bob");
        registry.register_friendship("Bob", "");
        registry.register_friendship("James", "james");
        registry
    }

    #[test]
    fn test_counts_ignore_duplicates_and_case() {
        let registry = fixture();
        assert_eq!(registry.friend_count("Bob"), Some(3));
        assert_eq!(registry.friend_count("kim"), Some(1));
        assert_eq!(registry.friend_count("timmy"), Some(2));
        assert_eq!(registry.friend_count("james"), Some(2));
        assert_eq!(registry.friendship_count(), 4);
    }

    #[test]
    fn test_is_friend_symmetric() {
        let registry = fixture();
        assert!(registry.is_friend("Kim", "Bob"));
        assert!(registry.is_friend("bob", "KIM"));
        assert!(!registry.is_friend("Timmy", "Kim"));
        assert!(!registry.is_friend("james", "James"));
        assert!(!registry.is_friend("bob", ""));
    }

    #[test]
    fn test_lonely_person_registration_is_idempotent() {
        let mut registry = RelationshipRegistry::new();
        assert!(registry.register_friendship("Bob", ""));
        assert_eq!(registry.friend_count("bob"), Some(0));
        assert_eq!(registry.friendship_count(), 0);
        assert!(!registry.register_friendship("Bob", ""));
        assert!(!registry.register_person("BOB"));
        assert_eq!(registry.people_count(), 1);
    }

    #[test]
    fn test_lonely_registration_keeps_existing_friends() {
        let mut registry = RelationshipRegistry::new();
        registry.register_friendship("a", "b");
        assert!(!registry.register_friendship("", "A"));
        assert_eq!(registry.friend_count("a"), Some(1));
    }

    #[test]
    fn test_degenerate_inputs_are_noops() {
        let mut registry = RelationshipRegistry::new();
        assert!(!registry.register_friendship("", ""));
        assert!(!registry.register_friendship("Narcissus", "narcissus"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_known_people_sorted() {
        let registry = fixture();
        let people: Vec<&str> = registry.known_people().map(PersonId::as_str).collect();
        assert_eq!(people, vec!["bob", "james", "kim", "timmy"]);
    }

    #[test]
    fn test_friendships_listed_once() {
        let registry = fixture();
        let pairs: Vec<(String, String)> = registry
            .friendships()
            .map(|f| (f.first().to_string(), f.second().to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("bob".to_string(), "james".to_string()),
                ("bob".to_string(), "kim".to_string()),
                ("bob".to_string(), "timmy".to_string()),
                ("james".to_string(), "timmy".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_iterator() {
        let registry: RelationshipRegistry =
            [("a", "b"), ("b", "c"), ("d", "")].into_iter().collect();
        assert_eq!(registry.people_count(), 4);
        assert_eq!(registry.friendship_count(), 2);
        assert_eq!(registry.friend_count("d"), Some(0));
    }
}
