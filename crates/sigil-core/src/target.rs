//! Target Sets: the unit of input and output of every resolver.
//!
//! A [`Targets`] value is an ordered list of `(target, distance, flags)`
//! entries with set semantics on target identity.
//!
//! # Ordering
//!
//! [`Targets::add`] inserts before the first entry with a strictly greater
//! distance. Entries therefore stay in ascending distance order, and entries
//! at equal distance keep their insertion order. A resolver that adds
//! everything at distance 0 preserves its own enumeration order.
//!
//! # Duplicates
//!
//! Adding a target that is already present keeps the existing entry
//! (including its distance and flags) and returns `false`.
//!
//! # Example
//!
//! ```
//! use census::{ActorId, ObjectId};
//! use sigil_core::{KindFilter, TargetFlags, TargetRef, Targets};
//!
//! let mut set = Targets::new();
//! set.add(TargetRef::Actor(ActorId::new(1)), 10, TargetFlags::empty());
//! set.add(TargetRef::Object(ObjectId::new(7)), 2, TargetFlags::empty());
//! set.add(TargetRef::Actor(ActorId::new(2)), 5, TargetFlags::empty());
//!
//! // Ascending distance, door first.
//! assert_eq!(set.first(KindFilter::Any).map(|e| e.distance), Some(2));
//! // Second actor entry.
//! assert_eq!(
//!     set.get(1, KindFilter::Actor).map(|e| e.target),
//!     Some(TargetRef::Actor(ActorId::new(1)))
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use census::{Actor, ActorId, ObjectId, ScriptObject};

use crate::flags::TargetFlags;

/// Non-owning reference to something a Target Set can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRef {
    /// An actor.
    Actor(ActorId),
    /// A door, container or region.
    Object(ObjectId),
}

impl TargetRef {
    /// Returns the actor identity if this references an actor.
    #[must_use]
    pub const fn actor(self) -> Option<ActorId> {
        match self {
            Self::Actor(id) => Some(id),
            Self::Object(_) => None,
        }
    }

    /// Returns the object identity if this references a script object.
    #[must_use]
    pub const fn object(self) -> Option<ObjectId> {
        match self {
            Self::Actor(_) => None,
            Self::Object(id) => Some(id),
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor(id) => write!(f, "actor {id}"),
            Self::Object(id) => write!(f, "object {id}"),
        }
    }
}

/// Capability filter for ordinal access and iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KindFilter {
    /// Every entry.
    #[default]
    Any,
    /// Actor entries only.
    Actor,
    /// Script object entries only.
    Object,
}

impl KindFilter {
    /// Returns `true` if `target` passes this filter.
    #[must_use]
    pub const fn accepts(self, target: TargetRef) -> bool {
        matches!(
            (self, target),
            (Self::Any, _)
                | (Self::Actor, TargetRef::Actor(_))
                | (Self::Object, TargetRef::Object(_))
        )
    }
}

/// One entry of a Target Set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntry {
    /// What the entry refers to.
    pub target: TargetRef,
    /// Distance recorded at insertion (usually from the requester).
    pub distance: u32,
    /// Inclusion flags the entry was admitted under.
    pub flags: TargetFlags,
}

/// Ordered, identity-deduplicated set of resolved targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    entries: Vec<TargetEntry>,
}

impl Targets {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts a target in distance order.
    ///
    /// Returns `false` and leaves the set unchanged if the target is already
    /// present. No inclusion flags are checked here; see
    /// [`add_actor`](Self::add_actor).
    pub fn add(&mut self, target: TargetRef, distance: u32, flags: TargetFlags) -> bool {
        if self.contains(target) {
            return false;
        }
        let at = self
            .entries
            .iter()
            .position(|entry| entry.distance > distance)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            at,
            TargetEntry {
                target,
                distance,
                flags,
            },
        );
        true
    }

    /// Inserts an actor if it passes `flags`.
    ///
    /// Returns `true` if the actor was added.
    pub fn add_actor(&mut self, actor: &Actor, distance: u32, flags: TargetFlags) -> bool {
        if !flags.admits(actor) {
            return false;
        }
        self.add(TargetRef::Actor(actor.id()), distance, flags)
    }

    /// Inserts a script object. Objects are never rejected by flags.
    pub fn add_object(&mut self, object: &ScriptObject, distance: u32, flags: TargetFlags) -> bool {
        self.add(TargetRef::Object(object.id()), distance, flags)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `target` is in the set.
    #[must_use]
    pub fn contains(&self, target: TargetRef) -> bool {
        self.entries.iter().any(|entry| entry.target == target)
    }

    /// Iterates over all entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TargetEntry> {
        self.entries.iter()
    }

    /// Iterates over the entries accepted by `filter`, in either direction.
    pub fn matching(&self, filter: KindFilter) -> impl DoubleEndedIterator<Item = &TargetEntry> {
        self.entries
            .iter()
            .filter(move |entry| filter.accepts(entry.target))
    }

    /// Iterates over the actor identities in order.
    pub fn actor_ids(&self) -> impl DoubleEndedIterator<Item = ActorId> + '_ {
        self.entries.iter().filter_map(|entry| entry.target.actor())
    }

    /// Returns the `index`-th (0-based) entry accepted by `filter`.
    #[must_use]
    pub fn get(&self, index: usize, filter: KindFilter) -> Option<&TargetEntry> {
        self.matching(filter).nth(index)
    }

    /// Returns the first entry accepted by `filter`.
    #[must_use]
    pub fn first(&self, filter: KindFilter) -> Option<&TargetEntry> {
        self.matching(filter).next()
    }

    /// Returns the last entry accepted by `filter`, by position in the set.
    #[must_use]
    pub fn last(&self, filter: KindFilter) -> Option<&TargetEntry> {
        self.matching(filter).next_back()
    }

    /// Keeps only the entries for which `keep` returns `true`.
    ///
    /// Relative order is preserved.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&TargetEntry) -> bool,
    {
        self.entries.retain(keep);
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a TargetEntry;
    type IntoIter = std::slice::Iter<'a, TargetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
