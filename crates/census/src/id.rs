//! Stable identities for actors, areas and script objects.
//!
//! Identities are plain values. Holding an identity never keeps the referenced
//! thing alive: every read goes back through a [`Directory`](crate::Directory),
//! which answers `None` once the referent has left the world.
//!
//! # Example
//!
//! ```
//! use census::id::ActorId;
//!
//! let id1 = ActorId::new(1);
//! let id2 = ActorId::new(2);
//!
//! assert!(id1 < id2);
//! assert_eq!(id1.as_u32(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Global identity of an actor.
///
/// Actor identities are unique across the whole game, not just one area, so a
/// stored back-reference can be re-resolved after the referent changed areas.
///
/// # Ordering
///
/// Identities are ordered by their numeric value, which the in-memory
/// [`World`](crate::World) uses for deterministic storage order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(u32);

impl ActorId {
    /// Creates a new `ActorId` from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<ActorId> for u32 {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

/// Identity of a non-actor script object (door, container, region).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Creates a new `ObjectId` from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// Identity of an area (one loaded map).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AreaId(u16);

impl AreaId {
    /// Creates a new `AreaId` from a raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaId({})", self.0)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AR{:04}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod actor_id_tests {
        use super::*;

        #[test]
        fn new_creates_id_with_value() {
            let id = ActorId::new(42);
            assert_eq!(id.as_u32(), 42);
        }

        #[test]
        fn ordering() {
            let mut ids = vec![ActorId::new(3), ActorId::new(1), ActorId::new(2)];
            ids.sort();
            assert_eq!(ids, vec![ActorId::new(1), ActorId::new(2), ActorId::new(3)]);
        }

        #[test]
        fn hashing() {
            use std::collections::HashSet;

            let mut set = HashSet::new();
            set.insert(ActorId::new(1));
            set.insert(ActorId::new(2));
            set.insert(ActorId::new(1)); // Duplicate

            assert_eq!(set.len(), 2);
        }

        #[test]
        fn debug_and_display_format() {
            let id = ActorId::new(42);
            assert_eq!(format!("{:?}", id), "ActorId(42)");
            assert_eq!(format!("{}", id), "42");
        }

        #[test]
        fn conversions() {
            let id: ActorId = 7u32.into();
            let raw: u32 = id.into();
            assert_eq!(raw, 7);
        }

        #[test]
        fn serialization_roundtrip() {
            let id = ActorId::new(12345);
            let json = serde_json::to_string(&id).unwrap();
            let deserialized: ActorId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, deserialized);
        }
    }

    mod area_id_tests {
        use super::*;

        #[test]
        fn display_uses_area_resref_style() {
            assert_eq!(AreaId::new(100).to_string(), "AR0100");
            assert_eq!(format!("{:?}", AreaId::new(3)), "AreaId(3)");
        }
    }

    mod object_id_tests {
        use super::*;

        #[test]
        fn debug_format() {
            assert_eq!(format!("{:?}", ObjectId::new(9)), "ObjectId(9)");
            assert_eq!(ObjectId::from(9).as_u32(), 9);
        }
    }
}
