//! Object resolvers: functions from one Target Set to the next.
//!
//! Every resolver has the shape
//!
//! ```text
//! fn(ctx: &ResolveContext, targets: Targets, flags: TargetFlags) -> Targets
//! ```
//!
//! taking the incoming set by value and returning the outgoing one, so
//! resolvers chain. Families:
//!
//! - [`identity`]: `Myself`, `Nothing`, `Gabber`
//! - [`party`]: player slots, `Protagonist`, `NearestPC`, `SelectedCharacter`
//! - [`backref`]: stored back-references such as `LastHitter`
//! - [`group`]: `GroupOf`, `ProtectorOf`
//! - [`ranking`]: extremum picks such as `BestAC`
//! - [`ordinal`]: the k-th nearest families
//!
//! # Invariants
//!
//! - Resolvers never fail. Unresolved references give an empty set.
//! - Resolvers never mutate the world; they only read the [`Directory`].
//! - Actors are admitted through [`Targets::add_actor`], so the inclusion
//!   flags apply to every actor a resolver produces.
//!
//! # Subject rule
//!
//! Resolvers that read an attribute of "the subject" use the first actor in
//! the incoming set if there is one, and the requester otherwise (when it is
//! an actor). This lets scripts write `LastHitter(NearestEnemyOf(Myself))`.

pub mod backref;
pub mod group;
pub mod identity;
pub mod ordinal;
pub mod party;
pub mod ranking;

use census::{Actor, ActorId, AreaId, Directory, Located};
use glam::IVec2;

use crate::config::ResolverConfig;
use crate::distance::distance;
use crate::flags::TargetFlags;
use crate::requester::Requester;
use crate::target::{TargetRef, Targets};

/// Signature shared by every resolver.
pub type ResolverFn = fn(&ResolveContext<'_>, Targets, TargetFlags) -> Targets;

/// Everything a resolver may read.
///
/// Built per evaluation step and dropped with it.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    directory: &'a dyn Directory,
    requester: Requester<'a>,
    config: ResolverConfig,
}

impl<'a> ResolveContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(
        directory: &'a dyn Directory,
        requester: Requester<'a>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            directory,
            requester,
            config,
        }
    }

    /// The world as the engine sees it.
    #[must_use]
    pub fn directory(&self) -> &'a dyn Directory {
        self.directory
    }

    /// The script owner the resolution runs for.
    #[must_use]
    pub fn requester(&self) -> Requester<'a> {
        self.requester
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Looks up an actor anywhere in the world.
    pub(crate) fn actor(&self, id: ActorId) -> Option<&'a Actor> {
        self.directory.actor(id)
    }

    /// Actors named by the set, in set order. Entries that no longer resolve
    /// are skipped.
    pub(crate) fn actors(&self, targets: &Targets) -> Vec<&'a Actor> {
        targets
            .actor_ids()
            .filter_map(|id| self.directory.actor(id))
            .collect()
    }

    /// First actor named by the set.
    pub(crate) fn first_actor(&self, targets: &Targets) -> Option<&'a Actor> {
        targets.actor_ids().find_map(|id| self.directory.actor(id))
    }

    /// The first actor in the set, else the requester if it is an actor.
    pub(crate) fn subject(&self, targets: &Targets) -> Option<&'a Actor> {
        self.first_actor(targets)
            .or_else(|| self.requester.as_actor())
    }

    /// Area and position of whatever a target refers to.
    pub(crate) fn locate(&self, target: TargetRef) -> Option<(AreaId, IVec2)> {
        match target {
            TargetRef::Actor(id) => self.directory.actor(id).map(|a| (a.area(), a.position())),
            TargetRef::Object(id) => self.directory.object(id).map(|o| (o.area(), o.position())),
        }
    }

    /// Distance from the requester.
    pub(crate) fn distance_from_requester(&self, other: &impl Located) -> u32 {
        distance(self.requester.position(), other.position())
    }
}

impl std::fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveContext")
            .field("requester", &self.requester.target_ref())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
