//! Weak back-references to recent interaction partners.
//!
//! Combat and dialogue code records, on each actor, who last attacked it, who
//! it last talked to, and so on. These are stored as bare [`ActorId`]s and are
//! never followed directly: readers resolve them through a
//! [`Directory`](crate::Directory) at read time and treat a failed lookup as
//! "nobody".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::ActorId;

/// Kinds of recorded interaction partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackRef {
    /// Last actor that hit this one.
    Hitter,
    /// Last actor this one targeted.
    Target,
    /// Last actor this one saw.
    Seen,
    /// Last actor this one heard.
    Heard,
    /// Last actor that called this one for help.
    Help,
    /// Last actor this one marked.
    Marked,
    /// Last actor this one protects or is protected by.
    Protected,
    /// Last actor that commanded this one.
    Commander,
    /// Last actor this one followed (its leader).
    Followed,
    /// Last actor this one talked to.
    TalkedTo,
    /// Last actor that summoned this one.
    Summoner,
}

impl BackRef {
    /// Number of back-reference kinds.
    pub const COUNT: usize = 11;

    /// All kinds.
    pub const ALL: [BackRef; Self::COUNT] = [
        BackRef::Hitter,
        BackRef::Target,
        BackRef::Seen,
        BackRef::Heard,
        BackRef::Help,
        BackRef::Marked,
        BackRef::Protected,
        BackRef::Commander,
        BackRef::Followed,
        BackRef::TalkedTo,
        BackRef::Summoner,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hitter => "LastHitter",
            Self::Target => "LastTarget",
            Self::Seen => "LastSeen",
            Self::Heard => "LastHeard",
            Self::Help => "LastHelp",
            Self::Marked => "LastMarked",
            Self::Protected => "LastProtected",
            Self::Commander => "LastCommander",
            Self::Followed => "LastFollowed",
            Self::TalkedTo => "LastTalkedTo",
            Self::Summoner => "LastSummoner",
        };
        f.write_str(name)
    }
}

/// The back-reference slots of one actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackRefs {
    slots: [Option<ActorId>; BackRef::COUNT],
}

impl BackRefs {
    /// Creates a set of empty slots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; BackRef::COUNT],
        }
    }

    /// Returns the identity recorded for a kind.
    #[must_use]
    pub const fn get(&self, kind: BackRef) -> Option<ActorId> {
        self.slots[kind.index()]
    }

    /// Records (or clears, with `None`) the partner for a kind.
    pub fn set(&mut self, kind: BackRef, id: Option<ActorId>) {
        self.slots[kind.index()] = id;
    }
}
