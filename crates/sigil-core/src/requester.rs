//! The thing on whose behalf an object expression is evaluated.
//!
//! Scripts run on actors and on doors, containers and regions. Only actors
//! carry stats and back-references, so resolvers match on the variant instead
//! of assuming an actor.

use census::{Actor, ActorId, AreaId, Located, ScriptObject};
use glam::IVec2;

use crate::target::TargetRef;

/// Script owner requesting a resolution.
#[derive(Debug, Clone, Copy)]
pub enum Requester<'a> {
    /// A creature or character.
    Actor(&'a Actor),
    /// A door, container or region.
    Object(&'a ScriptObject),
}

impl<'a> Requester<'a> {
    /// Returns the actor if the requester is one.
    #[must_use]
    pub const fn as_actor(&self) -> Option<&'a Actor> {
        match *self {
            Self::Actor(actor) => Some(actor),
            Self::Object(_) => None,
        }
    }

    /// Returns the requester as a Target Set reference.
    #[must_use]
    pub fn target_ref(&self) -> TargetRef {
        match *self {
            Self::Actor(actor) => TargetRef::Actor(actor.id()),
            Self::Object(object) => TargetRef::Object(object.id()),
        }
    }

    /// Returns the actor that last triggered the requester's script.
    #[must_use]
    pub const fn last_trigger(&self) -> Option<ActorId> {
        match *self {
            Self::Actor(actor) => actor.last_trigger(),
            Self::Object(object) => object.last_trigger(),
        }
    }

    /// Returns `true` if `actor` is the requester itself.
    #[must_use]
    pub fn is_actor(&self, actor: &Actor) -> bool {
        matches!(*self, Self::Actor(me) if me.id() == actor.id())
    }
}

impl Located for Requester<'_> {
    fn area(&self) -> AreaId {
        match *self {
            Self::Actor(actor) => actor.area(),
            Self::Object(object) => object.area(),
        }
    }

    fn position(&self) -> IVec2 {
        match *self {
            Self::Actor(actor) => actor.position(),
            Self::Object(object) => object.position(),
        }
    }
}

impl<'a> From<&'a Actor> for Requester<'a> {
    fn from(actor: &'a Actor) -> Self {
        Self::Actor(actor)
    }
}

impl<'a> From<&'a ScriptObject> for Requester<'a> {
    fn from(object: &'a ScriptObject) -> Self {
        Self::Object(object)
    }
}
