//! Test helper functions for building worlds and contexts.
//!
//! Factory functions that keep resolver tests short and consistent.

use census::{Actor, ActorId, AreaId, Located, Stat, World};
use glam::IVec2;

use crate::config::ResolverConfig;
use crate::flags::TargetFlags;
use crate::requester::Requester;
use crate::resolvers::ResolveContext;
use crate::target::{TargetRef, Targets};

/// Area most scenarios take place in.
pub const AREA: AreaId = AreaId::new(1);

/// A second area for cross-area checks.
pub const OTHER_AREA: AreaId = AreaId::new(2);

// =============================================================================
// Actor Factories
// =============================================================================

/// An actor in [`AREA`] at `(x, y)` with zeroed stats.
pub fn actor_at(id: u32, x: i32, y: i32) -> Actor {
    Actor::new(ActorId::new(id), AREA, IVec2::new(x, y))
}

/// Spawns an actor, panicking on duplicate identities.
pub fn spawn(world: &mut World, actor: Actor) -> ActorId {
    world.spawn(actor).expect("duplicate actor in test setup")
}

/// Spawns an actor at `(x, y)` with the given allegiance.
pub fn spawn_ea(world: &mut World, id: u32, x: i32, y: i32, ea: i32) -> ActorId {
    spawn(world, actor_at(id, x, y).with_stat(Stat::Ea, ea))
}

/// Spawns an actor and adds it to the party.
pub fn spawn_member(world: &mut World, actor: Actor) -> ActorId {
    let id = spawn(world, actor);
    world.join_party(id).expect("party join in test setup");
    id
}

// =============================================================================
// Scenario Setup
// =============================================================================

/// Party scenario: a requester at the origin and three party members.
///
/// Members are placed at:
/// - (0, 0): distance 0
/// - (10, 0): distance 10
/// - (3, 4): distance 5
///
/// # Returns
///
/// The requester and the members in placement order.
pub fn setup_party_scenario(world: &mut World) -> (ActorId, [ActorId; 3]) {
    let requester = spawn(world, actor_at(100, 0, 0));
    let a = spawn_member(world, actor_at(1, 0, 0));
    let b = spawn_member(world, actor_at(2, 10, 0));
    let c = spawn_member(world, actor_at(3, 3, 4));
    (requester, [a, b, c])
}

// =============================================================================
// Contexts and Sets
// =============================================================================

/// Context for an actor requester with the default configuration.
pub fn ctx(world: &World, requester: ActorId) -> ResolveContext<'_> {
    ctx_with(world, requester, ResolverConfig::default())
}

/// Context for an actor requester with an explicit configuration.
pub fn ctx_with(world: &World, requester: ActorId, config: ResolverConfig) -> ResolveContext<'_> {
    let actor = world.get(requester).expect("requester must exist");
    ResolveContext::new(world, Requester::Actor(actor), config)
}

/// Target Set of actors at their distance from `origin`, in distance order.
pub fn set_from(world: &World, origin: ActorId, ids: &[ActorId]) -> Targets {
    let origin = world.get(origin).expect("origin must exist").position();
    let mut set = Targets::new();
    for &id in ids {
        let actor = world.get(id).expect("member must exist");
        set.add(
            TargetRef::Actor(id),
            crate::distance(origin, actor.position()),
            TargetFlags::empty(),
        );
    }
    set
}

/// Target Set of actors at distance 0, in the given order.
pub fn set_of(ids: &[ActorId]) -> Targets {
    let mut set = Targets::new();
    for &id in ids {
        set.add(TargetRef::Actor(id), 0, TargetFlags::empty());
    }
    set
}

/// Raw actor identities of a set, in order.
pub fn ids(set: &Targets) -> Vec<u32> {
    set.actor_ids().map(ActorId::as_u32).collect()
}
