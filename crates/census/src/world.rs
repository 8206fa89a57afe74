//! In-memory world implementing [`Directory`].
//!
//! The `World` is the container for everything the resolution engine can see:
//! - Actors by identity with deterministic storage order (`BTreeMap`)
//! - Per-area enumeration order (arrival order)
//! - Party slots and recruitment numbers
//! - Doors, containers and regions
//! - The current dialogue speaker
//!
//! # Area order
//!
//! Each area keeps its actors in the order they arrived. Moving an actor to
//! another area appends it to the new area's order. Resolvers that enumerate
//! an area see exactly this order.
//!
//! # Party numbers
//!
//! Party slots are compacted when a member leaves, recruitment numbers are not.
//! A member keeps the number it got on joining, and a new member takes the
//! lowest free number. This is why "player 2" and "player 2 by recruitment"
//! can name different actors.
//!
//! # Example
//!
//! ```
//! use census::{Actor, ActorId, AreaId, Directory, World};
//! use glam::IVec2;
//!
//! let mut world = World::new();
//! let area = AreaId::new(1);
//!
//! let hero = world.spawn(Actor::new(ActorId::new(1), area, IVec2::ZERO)).unwrap();
//! world.join_party(hero).unwrap();
//!
//! assert_eq!(world.party_member(0).map(|a| a.id()), Some(hero));
//! assert_eq!(world.party_member_by_number(1).map(|a| a.id()), Some(hero));
//! ```

use std::collections::BTreeMap;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actor::Actor;
use crate::directory::Directory;
use crate::error::{Result, WorldError};
use crate::id::{ActorId, AreaId, ObjectId};
use crate::located::Located;
use crate::object::{ObjectKind, ScriptObject};

/// Maximum number of party members.
pub const MAX_PARTY_SIZE: usize = 8;

/// The live game world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Actor storage with deterministic iteration order.
    actors: BTreeMap<ActorId, Actor>,
    /// Arrival order of actors, per area.
    area_order: BTreeMap<AreaId, Vec<ActorId>>,
    /// Doors, containers and regions.
    objects: BTreeMap<ObjectId, ScriptObject>,
    /// Party members by slot.
    party: Vec<ActorId>,
    /// Actor currently speaking in dialogue.
    speaker: Option<ActorId>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor to the world, at the end of its area's order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateActor`] if the identity is taken.
    pub fn spawn(&mut self, mut actor: Actor) -> Result<ActorId> {
        let id = actor.id();
        if self.actors.contains_key(&id) {
            return Err(WorldError::DuplicateActor(id));
        }
        actor.set_party_number(None);
        self.area_order.entry(actor.area()).or_default().push(id);
        debug!(actor = %id, area = %actor.area(), "spawned actor");
        self.actors.insert(id, actor);
        Ok(id)
    }

    /// Removes an actor from the world.
    ///
    /// The actor leaves the party and stops being the dialogue speaker.
    /// Back-references other actors hold to it are left as they are; they
    /// simply stop resolving.
    pub fn despawn(&mut self, id: ActorId) -> Option<Actor> {
        let actor = self.actors.remove(&id)?;
        if let Some(order) = self.area_order.get_mut(&actor.area()) {
            order.retain(|&other| other != id);
        }
        self.party.retain(|&member| member != id);
        if self.speaker == Some(id) {
            self.speaker = None;
        }
        debug!(actor = %id, "despawned actor");
        Some(actor)
    }

    /// Moves an actor to a position, possibly in another area.
    ///
    /// Changing area appends the actor to the new area's order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownActor`] if the actor does not exist.
    pub fn move_actor(&mut self, id: ActorId, area: AreaId, position: IVec2) -> Result<()> {
        let actor = self
            .actors
            .get_mut(&id)
            .ok_or(WorldError::UnknownActor(id))?;
        let old_area = actor.area();
        actor.set_position(position);
        if old_area != area {
            actor.set_area(area);
            if let Some(order) = self.area_order.get_mut(&old_area) {
                order.retain(|&other| other != id);
            }
            self.area_order.entry(area).or_default().push(id);
            debug!(actor = %id, from = %old_area, to = %area, "actor changed area");
        }
        Ok(())
    }

    /// Returns a reference to an actor.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Returns a mutable reference to an actor.
    ///
    /// Use [`move_actor`](Self::move_actor) to change its area.
    #[must_use]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// Adds an actor to the end of the party.
    ///
    /// Returns the recruitment number the actor was given.
    ///
    /// # Errors
    ///
    /// Fails if the actor does not exist, is already a member, or the party
    /// is full.
    pub fn join_party(&mut self, id: ActorId) -> Result<u8> {
        let taken: Vec<u8> = self
            .party
            .iter()
            .filter_map(|member| self.actors.get(member))
            .filter_map(Actor::party_number)
            .collect();

        let actor = self
            .actors
            .get_mut(&id)
            .ok_or(WorldError::UnknownActor(id))?;
        if actor.in_party() {
            return Err(WorldError::AlreadyInParty(id));
        }
        if self.party.len() >= MAX_PARTY_SIZE {
            return Err(WorldError::PartyFull {
                limit: MAX_PARTY_SIZE,
            });
        }

        // The party is not full, so one of the first MAX_PARTY_SIZE numbers
        // is free.
        let number = (1u8..)
            .take(MAX_PARTY_SIZE)
            .find(|n| !taken.contains(n))
            .ok_or(WorldError::PartyFull {
                limit: MAX_PARTY_SIZE,
            })?;
        actor.set_party_number(Some(number));
        self.party.push(id);
        debug!(actor = %id, number, "actor joined party");
        Ok(number)
    }

    /// Removes an actor from the party, compacting the slots behind it.
    ///
    /// # Errors
    ///
    /// Fails if the actor does not exist or is not a member.
    pub fn leave_party(&mut self, id: ActorId) -> Result<()> {
        let actor = self
            .actors
            .get_mut(&id)
            .ok_or(WorldError::UnknownActor(id))?;
        if !actor.in_party() {
            return Err(WorldError::NotInParty(id));
        }
        actor.set_party_number(None);
        self.party.retain(|&member| member != id);
        debug!(actor = %id, "actor left party");
        Ok(())
    }

    /// Sets (or clears) the dialogue speaker.
    pub fn set_speaker(&mut self, speaker: Option<ActorId>) {
        self.speaker = speaker;
    }

    /// Adds a door, container or region.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateObject`] if the identity is taken.
    pub fn spawn_object(&mut self, object: ScriptObject) -> Result<ObjectId> {
        let id = object.id();
        if self.objects.contains_key(&id) {
            return Err(WorldError::DuplicateObject(id));
        }
        self.objects.insert(id, object);
        Ok(id)
    }

    /// Removes a script object.
    pub fn despawn_object(&mut self, id: ObjectId) -> Option<ScriptObject> {
        self.objects.remove(&id)
    }

    /// Returns a mutable reference to a script object.
    #[must_use]
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ScriptObject> {
        self.objects.get_mut(&id)
    }

    /// Returns an iterator over actors in identity order.
    pub fn actors_sorted(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.values()
    }

    /// Returns the number of actors in the world.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Returns the number of party members.
    #[must_use]
    pub fn party_size(&self) -> usize {
        self.party.len()
    }
}

impl Directory for World {
    fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    fn area_actors(&self, area: AreaId, visible_only: bool) -> Vec<&Actor> {
        let Some(order) = self.area_order.get(&area) else {
            return Vec::new();
        };
        order
            .iter()
            .filter_map(|id| self.actors.get(id))
            .filter(|actor| !visible_only || (!actor.is_dead() && !actor.is_invisible()))
            .collect()
    }

    fn party(&self, alive_only: bool) -> Vec<&Actor> {
        self.party
            .iter()
            .filter_map(|id| self.actors.get(id))
            .filter(|actor| !alive_only || !actor.is_dead())
            .collect()
    }

    fn party_member(&self, slot: usize) -> Option<&Actor> {
        self.party.get(slot).and_then(|id| self.actors.get(id))
    }

    fn party_member_by_number(&self, number: u8) -> Option<&Actor> {
        self.party
            .iter()
            .filter_map(|id| self.actors.get(id))
            .find(|actor| actor.party_number() == Some(number))
    }

    fn object(&self, id: ObjectId) -> Option<&ScriptObject> {
        self.objects.get(&id)
    }

    fn area_objects(&self, area: AreaId, kind: ObjectKind) -> Vec<&ScriptObject> {
        self.objects
            .values()
            .filter(|object| object.area() == area && object.kind() == kind)
            .collect()
    }

    fn dialogue_speaker(&self) -> Option<ActorId> {
        self.speaker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorState;

    const AREA: AreaId = AreaId::new(1);
    const OTHER_AREA: AreaId = AreaId::new(2);

    fn spawn_at(world: &mut World, id: u32, area: AreaId) -> ActorId {
        world
            .spawn(Actor::new(ActorId::new(id), area, IVec2::ZERO))
            .unwrap()
    }

    fn ids(actors: &[&Actor]) -> Vec<u32> {
        actors.iter().map(|a| a.id().as_u32()).collect()
    }

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn spawn_and_lookup() {
            let mut world = World::new();
            let id = spawn_at(&mut world, 5, AREA);

            assert_eq!(world.actor(id).map(Actor::id), Some(id));
            assert_eq!(world.actor_count(), 1);
        }

        #[test]
        fn duplicate_spawn_fails() {
            let mut world = World::new();
            spawn_at(&mut world, 5, AREA);

            let err = world
                .spawn(Actor::new(ActorId::new(5), AREA, IVec2::ZERO))
                .unwrap_err();
            assert_eq!(err, WorldError::DuplicateActor(ActorId::new(5)));
        }

        #[test]
        fn despawn_removes_everywhere() {
            let mut world = World::new();
            let id = spawn_at(&mut world, 1, AREA);
            world.join_party(id).unwrap();
            world.set_speaker(Some(id));

            assert!(world.despawn(id).is_some());
            assert!(world.actor(id).is_none());
            assert!(world.area_actors(AREA, false).is_empty());
            assert!(world.party(false).is_empty());
            assert_eq!(world.dialogue_speaker(), None);
        }

        #[test]
        fn despawn_missing_is_none() {
            let mut world = World::new();
            assert!(world.despawn(ActorId::new(1)).is_none());
        }
    }

    mod area_tests {
        use super::*;

        #[test]
        fn area_order_is_arrival_order() {
            let mut world = World::new();
            spawn_at(&mut world, 3, AREA);
            spawn_at(&mut world, 1, AREA);
            spawn_at(&mut world, 2, OTHER_AREA);

            assert_eq!(ids(&world.area_actors(AREA, false)), vec![3, 1]);
            assert_eq!(ids(&world.area_actors(OTHER_AREA, false)), vec![2]);
        }

        #[test]
        fn visible_only_skips_dead_and_invisible() {
            let mut world = World::new();
            spawn_at(&mut world, 1, AREA);
            let dead = spawn_at(&mut world, 2, AREA);
            let hidden = spawn_at(&mut world, 3, AREA);
            world.get_mut(dead).unwrap().set_state(ActorState::DEAD, true);
            world
                .get_mut(hidden)
                .unwrap()
                .set_state(ActorState::INVISIBLE, true);

            assert_eq!(ids(&world.area_actors(AREA, true)), vec![1]);
            assert_eq!(ids(&world.area_actors(AREA, false)), vec![1, 2, 3]);
        }

        #[test]
        fn move_actor_changes_area_membership() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 1, AREA);
            spawn_at(&mut world, 2, OTHER_AREA);

            world.move_actor(a, OTHER_AREA, IVec2::new(5, 5)).unwrap();

            assert!(world.actor_in_area(AREA, a).is_none());
            assert!(world.actor_in_area(OTHER_AREA, a).is_some());
            assert_eq!(ids(&world.area_actors(OTHER_AREA, false)), vec![2, 1]);
            assert_eq!(world.actor(a).unwrap().position(), IVec2::new(5, 5));
        }

        #[test]
        fn move_missing_actor_fails() {
            let mut world = World::new();
            let err = world
                .move_actor(ActorId::new(9), AREA, IVec2::ZERO)
                .unwrap_err();
            assert_eq!(err, WorldError::UnknownActor(ActorId::new(9)));
        }

        #[test]
        fn unknown_area_is_empty() {
            let world = World::new();
            assert!(world.area_actors(AreaId::new(77), false).is_empty());
        }
    }

    mod party_tests {
        use super::*;

        #[test]
        fn join_assigns_numbers_in_order() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 10, AREA);
            let b = spawn_at(&mut world, 11, AREA);

            assert_eq!(world.join_party(a).unwrap(), 1);
            assert_eq!(world.join_party(b).unwrap(), 2);
            assert_eq!(world.party_size(), 2);
        }

        #[test]
        fn leaving_compacts_slots_but_not_numbers() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 10, AREA);
            let b = spawn_at(&mut world, 11, AREA);
            let c = spawn_at(&mut world, 12, AREA);
            world.join_party(a).unwrap();
            world.join_party(b).unwrap();
            world.join_party(c).unwrap();

            world.leave_party(b).unwrap();

            assert_eq!(world.party_member(1).map(Actor::id), Some(c));
            assert_eq!(world.party_member_by_number(3).map(Actor::id), Some(c));
            assert!(world.party_member_by_number(2).is_none());

            // A new member fills the freed number.
            let d = spawn_at(&mut world, 13, AREA);
            assert_eq!(world.join_party(d).unwrap(), 2);
            assert_eq!(world.party_member(2).map(Actor::id), Some(d));
        }

        #[test]
        fn join_twice_fails() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 1, AREA);
            world.join_party(a).unwrap();
            assert_eq!(world.join_party(a), Err(WorldError::AlreadyInParty(a)));
        }

        #[test]
        fn party_full() {
            let mut world = World::new();
            for raw in (0u32..).take(MAX_PARTY_SIZE) {
                let id = spawn_at(&mut world, raw, AREA);
                world.join_party(id).unwrap();
            }
            let extra = spawn_at(&mut world, 100, AREA);
            assert_eq!(
                world.join_party(extra),
                Err(WorldError::PartyFull {
                    limit: MAX_PARTY_SIZE
                })
            );
        }

        #[test]
        fn numbers_cover_every_slot_of_a_full_party() {
            let mut world = World::new();
            let members: Vec<ActorId> = (1u32..)
                .take(MAX_PARTY_SIZE)
                .map(|raw| spawn_at(&mut world, raw, AREA))
                .collect();
            let numbers: Vec<u8> = members
                .iter()
                .map(|&id| world.join_party(id).unwrap())
                .collect();
            assert_eq!(numbers, (1u8..).take(MAX_PARTY_SIZE).collect::<Vec<_>>());

            // The highest number is reused once freed.
            let last = members[MAX_PARTY_SIZE - 1];
            world.leave_party(last).unwrap();
            let late = spawn_at(&mut world, 100, AREA);
            assert_eq!(
                world.join_party(late).map(usize::from),
                Ok(MAX_PARTY_SIZE)
            );
        }

        #[test]
        fn leave_non_member_fails() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 1, AREA);
            assert_eq!(world.leave_party(a), Err(WorldError::NotInParty(a)));
        }

        #[test]
        fn alive_only_skips_dead_members() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 1, AREA);
            let b = spawn_at(&mut world, 2, AREA);
            world.join_party(a).unwrap();
            world.join_party(b).unwrap();
            world.get_mut(a).unwrap().set_state(ActorState::DEAD, true);

            assert_eq!(ids(&world.party(true)), vec![2]);
            assert_eq!(ids(&world.party(false)), vec![1, 2]);
        }

        #[test]
        fn spawn_clears_stale_party_number() {
            let mut world = World::new();
            let a = spawn_at(&mut world, 1, AREA);
            world.join_party(a).unwrap();
            let actor = world.despawn(a).unwrap();
            assert!(actor.in_party());

            world.spawn(actor).unwrap();
            assert!(!world.actor(a).unwrap().in_party());
        }
    }

    mod object_tests {
        use super::*;

        #[test]
        fn area_objects_filter_by_kind_and_area() {
            let mut world = World::new();
            world
                .spawn_object(ScriptObject::door(ObjectId::new(1), AREA, IVec2::ZERO))
                .unwrap();
            world
                .spawn_object(ScriptObject::new(
                    ObjectId::new(2),
                    ObjectKind::Container,
                    AREA,
                    IVec2::ZERO,
                ))
                .unwrap();
            world
                .spawn_object(ScriptObject::door(ObjectId::new(3), OTHER_AREA, IVec2::ZERO))
                .unwrap();

            let doors = world.area_objects(AREA, ObjectKind::Door);
            assert_eq!(doors.len(), 1);
            assert_eq!(doors[0].id(), ObjectId::new(1));
        }

        #[test]
        fn duplicate_object_fails() {
            let mut world = World::new();
            let door = ScriptObject::door(ObjectId::new(1), AREA, IVec2::ZERO);
            world.spawn_object(door.clone()).unwrap();
            assert_eq!(
                world.spawn_object(door),
                Err(WorldError::DuplicateObject(ObjectId::new(1)))
            );
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let mut world = World::new();
        let a = spawn_at(&mut world, 1, AREA);
        world.join_party(a).unwrap();

        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back.party_member(0).map(Actor::id), Some(a));
    }
}
