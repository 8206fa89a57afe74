//! The read-only view the resolution engine has of the world.
//!
//! # Snapshot semantics
//!
//! Every method reads the live world. Nothing is cached between calls, and a
//! returned enumeration says nothing about the world after the next mutation.
//! Lookups that find nothing return `None` or an empty list; none of them
//! fail.

use crate::actor::Actor;
use crate::id::{ActorId, AreaId, ObjectId};
use crate::located::Located;
use crate::object::{ObjectKind, ScriptObject};

/// Enumeration and lookup of actors, party members and script objects.
///
/// # Example
///
/// ```
/// use census::{Actor, ActorId, AreaId, Directory, World};
/// use glam::IVec2;
///
/// let mut world = World::new();
/// let area = AreaId::new(1);
/// world.spawn(Actor::new(ActorId::new(1), area, IVec2::ZERO)).unwrap();
///
/// let dir: &dyn Directory = &world;
/// assert!(dir.actor_in_area(area, ActorId::new(1)).is_some());
/// assert!(dir.actor_in_area(AreaId::new(2), ActorId::new(1)).is_none());
/// ```
pub trait Directory {
    /// Looks up an actor anywhere in the world.
    fn actor(&self, id: ActorId) -> Option<&Actor>;

    /// Looks up an actor that is currently in `area`.
    ///
    /// An actor that left the area, or left the world, is not found.
    fn actor_in_area(&self, area: AreaId, id: ActorId) -> Option<&Actor> {
        self.actor(id).filter(|actor| actor.area() == area)
    }

    /// Enumerates the actors of an area in area order.
    ///
    /// With `visible_only`, dead and invisible actors are skipped.
    fn area_actors(&self, area: AreaId, visible_only: bool) -> Vec<&Actor>;

    /// Enumerates party members in slot order.
    ///
    /// With `alive_only`, dead members are skipped.
    fn party(&self, alive_only: bool) -> Vec<&Actor>;

    /// Returns the party member in a 0-based slot.
    fn party_member(&self, slot: usize) -> Option<&Actor>;

    /// Returns the party member with a 1-based recruitment number.
    fn party_member_by_number(&self, number: u8) -> Option<&Actor>;

    /// Looks up a script object.
    fn object(&self, id: ObjectId) -> Option<&ScriptObject>;

    /// Enumerates the script objects of one kind in an area.
    fn area_objects(&self, area: AreaId, kind: ObjectKind) -> Vec<&ScriptObject>;

    /// Returns the actor currently speaking in dialogue, if any.
    fn dialogue_speaker(&self) -> Option<ActorId>;
}
