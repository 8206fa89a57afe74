//! Error types for world mutation.

use thiserror::Error;

use crate::id::{ActorId, ObjectId};

/// Errors raised when mutating a [`World`](crate::World).
///
/// Reads never fail; these only come from spawning, moving and party changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// An actor with this identity already exists.
    #[error("Actor already exists: {0}")]
    DuplicateActor(ActorId),

    /// No actor with this identity exists.
    #[error("Actor not found: {0}")]
    UnknownActor(ActorId),

    /// A script object with this identity already exists.
    #[error("Object already exists: {0}")]
    DuplicateObject(ObjectId),

    /// The party has no free slot.
    #[error("Party is full (limit: {limit})")]
    PartyFull {
        /// Maximum party size.
        limit: usize,
    },

    /// The actor is already a party member.
    #[error("Actor already in party: {0}")]
    AlreadyInParty(ActorId),

    /// The actor is not a party member.
    #[error("Actor not in party: {0}")]
    NotInParty(ActorId),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, WorldError>;
