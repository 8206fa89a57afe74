//! Candidate search: the distance-ordered sets the ordinal families rank.
//!
//! A script writes `NearestEnemyOfType([ENEMY.0.ORC])`; the bracketed part is
//! an [`IdsFilter`] and the candidates are every actor in the requester's
//! area passing it.
//!
//! # Example
//!
//! ```
//! use census::{Actor, ActorId, AreaId, Stat, World};
//! use glam::IVec2;
//! use sigil_core::{
//!     candidates_in_area, IdsFilter, Requester, ResolveContext, ResolverConfig, TargetFlags,
//! };
//!
//! let area = AreaId::new(1);
//! let mut world = World::new();
//! world.spawn(Actor::new(ActorId::new(1), area, IVec2::ZERO)).unwrap();
//! for (id, x) in [(2, 9), (3, 3)] {
//!     let orc = Actor::new(ActorId::new(id), area, IVec2::new(x, 0)).with_stat(Stat::Race, 4);
//!     world.spawn(orc).unwrap();
//! }
//!
//! let me = world.get(ActorId::new(1)).unwrap();
//! let ctx = ResolveContext::new(&world, Requester::Actor(me), ResolverConfig::default());
//! let found = candidates_in_area(&ctx, &IdsFilter::any().with_race(4), TargetFlags::empty());
//!
//! let ids: Vec<u32> = found.actor_ids().map(ActorId::as_u32).collect();
//! assert_eq!(ids, vec![3, 2]);
//! ```

use census::Located;

use crate::flags::TargetFlags;
use crate::matching::IdsFilter;
use crate::resolvers::ResolveContext;
use crate::target::Targets;

/// Every actor in the requester's area passing `filter`, at its distance
/// from the requester, nearest first.
///
/// Dead and invisible actors are enumerated; use `flags` to drop them.
#[must_use]
pub fn candidates_in_area(
    ctx: &ResolveContext<'_>,
    filter: &IdsFilter,
    flags: TargetFlags,
) -> Targets {
    let mut targets = Targets::new();
    let area = ctx.requester().area();
    for actor in ctx.directory().area_actors(area, false) {
        if filter.matches(actor) {
            targets.add_actor(actor, ctx.distance_from_requester(actor), flags);
        }
    }
    targets
}
