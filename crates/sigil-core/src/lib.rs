//! # Sigil Core
//!
//! Object resolution and identifier matching for behavior scripts.
//!
//! A behavior script names its targets with object expressions such as
//! `LastHitter(Myself)` or `SecondNearestEnemyOf(Player1)`. This crate
//! evaluates those expressions against a [`census::Directory`]:
//!
//! - **Target Set**: [`Targets`], an ordered, deduplicated list of resolved
//!   actors and objects with their distances
//! - **Resolvers**: functions from one Target Set to the next, one per
//!   object function; see [`resolvers`]
//! - **Matchers**: categorical predicates over one actor attribute; see
//!   [`matching`]
//! - **Dispatch**: [`ObjectFunction`] and [`IdsField`] map script names onto
//!   resolvers and matchers
//!
//! Resolution is total. References that no longer resolve produce empty
//! sets, never errors.
//!
//! ## Quick Start
//!
//! ```
//! use census::stats::ea;
//! use census::{Actor, ActorId, AreaId, Stat, World};
//! use glam::IVec2;
//! use sigil_core::{ObjectFunction, ObjectResolver, Requester, ResolverConfig, TargetFlags};
//!
//! let area = AreaId::new(1);
//! let mut world = World::new();
//! let hero = world
//!     .spawn(Actor::new(ActorId::new(1), area, IVec2::ZERO).with_stat(Stat::Ea, ea::PC))
//!     .unwrap();
//! for (id, x) in [(2, 30), (3, 12)] {
//!     let enemy =
//!         Actor::new(ActorId::new(id), area, IVec2::new(x, 0)).with_stat(Stat::Ea, ea::ENEMY);
//!     world.spawn(enemy).unwrap();
//! }
//!
//! let resolver = ObjectResolver::new(ResolverConfig::default());
//! let me = world.get(hero).unwrap();
//! let out = resolver.resolve_chain(
//!     &world,
//!     Requester::Actor(me),
//!     &[ObjectFunction::Myself, ObjectFunction::NearestEnemyOf(0)],
//!     TargetFlags::NO_DEAD,
//! );
//! assert_eq!(out.actor_ids().collect::<Vec<_>>(), vec![ActorId::new(3)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod candidates;
pub mod config;
pub mod distance;
pub mod error;
pub mod flags;
pub mod matching;
pub mod registry;
pub mod requester;
pub mod resolvers;
pub mod target;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use candidates::candidates_in_area;
pub use config::{Feature, FeatureQuery, GameVariant, ResolverConfig};
pub use distance::{distance, distance_between};
pub use error::{ResolveError, Result};
pub use flags::TargetFlags;
pub use matching::{IdsField, IdsFilter, Side};
pub use registry::{ObjectFunction, ObjectResolver};
pub use requester::Requester;
pub use resolvers::ordinal::Ordinal;
pub use resolvers::{ResolveContext, ResolverFn};
pub use target::{KindFilter, TargetEntry, TargetRef, Targets};
