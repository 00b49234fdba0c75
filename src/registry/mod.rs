//! Relationship registry.
//!
//! Holds the reciprocal, unweighted friendship relation that every
//! objective evaluation reads from. Identifiers are case-insensitive and
//! normalized once, in [`PersonId`].

mod person;
mod relations;

pub use person::{Friendship, PersonId};
pub use relations::RelationshipRegistry;
