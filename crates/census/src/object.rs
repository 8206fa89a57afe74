//! Non-actor script objects: doors, containers and trigger regions.
//!
//! These can run scripts (and so act as requesters) and doors can be
//! targeted, but they have no stats and record only one back-reference, the
//! last actor that triggered them.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::{ActorId, AreaId, ObjectId};
use crate::located::Located;

/// Kind of a non-actor script object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Door.
    Door,
    /// Container.
    Container,
    /// Trigger region (info point, travel region, trap).
    Region,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => write!(f, "Door"),
            Self::Container => write!(f, "Container"),
            Self::Region => write!(f, "Region"),
        }
    }
}

/// A door, container or region placed in an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptObject {
    id: ObjectId,
    kind: ObjectKind,
    area: AreaId,
    position: IVec2,
    last_trigger: Option<ActorId>,
}

impl ScriptObject {
    /// Creates a script object.
    #[must_use]
    pub const fn new(id: ObjectId, kind: ObjectKind, area: AreaId, position: IVec2) -> Self {
        Self {
            id,
            kind,
            area,
            position,
            last_trigger: None,
        }
    }

    /// Convenience constructor for a door.
    #[must_use]
    pub const fn door(id: ObjectId, area: AreaId, position: IVec2) -> Self {
        Self::new(id, ObjectKind::Door, area, position)
    }

    /// Records the actor that last triggered this object.
    #[must_use]
    pub const fn with_last_trigger(mut self, actor: ActorId) -> Self {
        self.last_trigger = Some(actor);
        self
    }

    /// Returns the object's identity.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the object's kind.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the actor that last triggered this object.
    #[must_use]
    pub const fn last_trigger(&self) -> Option<ActorId> {
        self.last_trigger
    }

    /// Records (or clears) the last triggering actor.
    pub fn set_last_trigger(&mut self, actor: Option<ActorId>) {
        self.last_trigger = actor;
    }
}

impl Located for ScriptObject {
    fn area(&self) -> AreaId {
        self.area
    }

    fn position(&self) -> IVec2 {
        self.position
    }
}
