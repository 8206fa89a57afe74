//! # Census
//!
//! Actor, area and party directory for behavior-script object resolution.
//!
//! Census holds the live state that targeting scripts read: actors with their
//! stats and back-references, the areas they stand in, the player's party and
//! the doors, containers and regions that can run scripts of their own.
//!
//! - **Identities**: [`ActorId`], [`AreaId`], [`ObjectId`] are plain values;
//!   holding one never keeps anything alive
//! - **Directory**: the read-only [`Directory`] trait is all a resolver sees
//! - **World**: [`World`] is the in-memory implementation, with deterministic
//!   enumeration order
//!
//! ## Quick Start
//!
//! ```
//! use census::{Actor, ActorId, AreaId, BackRef, Directory, Stat, World};
//! use census::stats::ea;
//! use glam::IVec2;
//!
//! let mut world = World::new();
//! let area = AreaId::new(1);
//!
//! let orc = world
//!     .spawn(Actor::new(ActorId::new(2), area, IVec2::new(10, 0)).with_stat(Stat::Ea, ea::ENEMY))
//!     .unwrap();
//! let hero = world
//!     .spawn(Actor::new(ActorId::new(1), area, IVec2::ZERO).with_back_ref(BackRef::Hitter, orc))
//!     .unwrap();
//!
//! let attacker = world
//!     .actor(hero)
//!     .and_then(|a| a.back_ref(BackRef::Hitter))
//!     .and_then(|id| world.actor_in_area(area, id));
//! assert_eq!(attacker.map(|a| a.stat(Stat::Ea)), Some(ea::ENEMY));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod backref;
pub mod class;
pub mod directory;
pub mod error;
pub mod id;
pub mod located;
pub mod object;
pub mod stats;
pub mod world;

// Re-exports for convenience
pub use actor::{Actor, ActorState};
pub use backref::{BackRef, BackRefs};
pub use class::{BaseClass, ClassLevels};
pub use directory::Directory;
pub use error::{Result, WorldError};
pub use id::{ActorId, AreaId, ObjectId};
pub use located::Located;
pub use object::{ObjectKind, ScriptObject};
pub use stats::{Stat, StatTable};
pub use world::{World, MAX_PARTY_SIZE};
