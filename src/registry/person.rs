//! Person identifiers and canonical friendship pairs.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// Case-insensitive person identifier.
///
/// Stored lowercased; two ids compare equal iff their lowercased names do.
/// The empty id is the padding sentinel for an unfilled seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct PersonId(String);

impl PersonId {
    /// Creates an identifier, folding `name` to lowercase.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Self::normalize(name.as_ref()).into_owned())
    }

    /// The padding sentinel.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Folds `name` to its canonical form.
    ///
    /// Borrows when `name` is already lowercase, so lookups with stored
    /// identifiers never allocate.
    pub fn normalize(name: &str) -> Cow<'_, str> {
        if name.chars().all(is_folded) {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        }
    }

    /// Returns `true` for the padding sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_folded(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PersonId {
    fn from(name: String) -> Self {
        if name.chars().all(is_folded) {
            Self(name)
        } else {
            Self(name.to_lowercase())
        }
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

/// An unordered pair of two distinct, non-empty people.
///
/// Stored sorted so `(a, b)` and `(b, a)` are the same friendship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Friendship(PersonId, PersonId);

impl Friendship {
    /// Builds the canonical pair, or `None` for a self-pair or an empty side.
    pub fn new(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Option<Self> {
        let (a, b) = (a.into(), b.into());
        if a.is_empty() || b.is_empty() || a == b {
            return None;
        }
        if a < b {
            Some(Self(a, b))
        } else {
            Some(Self(b, a))
        }
    }

    /// The alphabetically smaller side.
    pub fn first(&self) -> &PersonId {
        &self.0
    }

    /// The alphabetically larger side.
    pub fn second(&self) -> &PersonId {
        &self.1
    }

    /// Returns `true` if `person` is one side of this friendship.
    pub fn involves(&self, person: &str) -> bool {
        let person = PersonId::normalize(person);
        self.0.as_str() == person || self.1.as_str() == person
    }
}
