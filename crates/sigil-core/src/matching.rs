//! Identifier matchers: categorical predicates over one actor.
//!
//! Each matcher compares one attribute of an actor against an integer
//! parameter taken from an identifier table. Most are plain equality; the
//! interesting ones are:
//!
//! - [`id_alignment`]: two independent nibbles, zero meaning "don't care"
//! - [`id_allegiance`]: named cutoffs that turn into inequalities
//! - [`id_class`]: class groups that sum per-class levels, so multi- and
//!   dual-classed actors match a group their stored class does not name
//! - [`id_class_mask`]: single-class fast path, then the full class mask
//!
//! [`IdsFilter`] combines the standard object-spec fields for candidate
//! searches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use census::stats::{class, ea};
use census::{Actor, BaseClass, Stat};

use crate::error::ResolveError;

const LAW_AXIS: i32 = 0x0F;
const MORAL_AXIS: i32 = 0xF0;

/// Matches alignment, axis by axis.
///
/// The low nibble of `parameter` selects the lawful/chaotic axis and the high
/// nibble the good/evil axis. A zero nibble accepts any value on that axis.
#[must_use]
pub fn id_alignment(actor: &Actor, parameter: i32) -> bool {
    let value = actor.stat(Stat::Alignment);

    let law = parameter & LAW_AXIS;
    if law != 0 && law != value & LAW_AXIS {
        return false;
    }
    let moral = parameter & MORAL_AXIS;
    if moral != 0 && moral != value & MORAL_AXIS {
        return false;
    }
    true
}

/// Matches allegiance, honouring the cutoff sentinels.
#[must_use]
pub fn id_allegiance(actor: &Actor, parameter: i32) -> bool {
    let value = actor.stat(Stat::Ea);
    match parameter {
        ea::GOODCUTOFF => value <= ea::GOODCUTOFF,
        ea::NOTGOOD => value >= ea::NOTGOOD,
        ea::NOTEVIL => value <= ea::NOTEVIL,
        ea::EVILCUTOFF => value >= ea::EVILCUTOFF,
        0 | ea::ANYTHING => true,
        _ => parameter == value,
    }
}

/// Matches the stored class, or a class group.
///
/// A dormant dual-class contributes no levels, so it detects only as its new
/// class until reactivated.
#[must_use]
pub fn id_class(actor: &Actor, parameter: i32) -> bool {
    let level = |c: BaseClass| actor.class_level(c);
    let group_level = match parameter {
        class::MAGE_ALL => level(BaseClass::Mage) + level(BaseClass::Sorcerer),
        class::FIGHTER_ALL => level(BaseClass::Fighter) + level(BaseClass::Monk),
        class::CLERIC_ALL => level(BaseClass::Cleric),
        class::THIEF_ALL => level(BaseClass::Thief),
        class::BARD_ALL => level(BaseClass::Bard),
        class::PALADIN_ALL => level(BaseClass::Paladin),
        class::DRUID_ALL => level(BaseClass::Druid),
        class::RANGER_ALL => level(BaseClass::Ranger),
        _ => return actor.stat(Stat::Class) == parameter,
    };
    group_level > 0
}

/// Matches a class bitmask.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn id_class_mask(actor: &Actor, parameter: i32) -> bool {
    let mask = parameter as u32;

    let stored = actor.stat(Stat::Class);
    if (1..=32).contains(&stored) && mask & (1 << (stored - 1)) != 0 {
        return true;
    }
    mask & actor.class_mask() != 0
}

/// Matches race.
#[must_use]
pub fn id_race(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::Race) == parameter
}

/// Matches subrace.
#[must_use]
pub fn id_subrace(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::Subrace) == parameter
}

/// Matches faction.
#[must_use]
pub fn id_faction(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::Faction) == parameter
}

/// Matches team.
#[must_use]
pub fn id_team(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::Team) == parameter
}

/// Matches gender.
#[must_use]
pub fn id_gender(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::Gender) == parameter
}

/// Matches the general category.
#[must_use]
pub fn id_general(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::General) == parameter
}

/// Matches the specific category.
#[must_use]
pub fn id_specific(actor: &Actor, parameter: i32) -> bool {
    actor.stat(Stat::Specific) == parameter
}

/// Identifier tables that can be matched by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdsField {
    /// `ALIGN`
    Alignment,
    /// `EA`
    Allegiance,
    /// `CLASS`
    Class,
    /// `CLASSMSK`
    ClassMask,
    /// `RACE`
    Race,
    /// `SUBRACE`
    Subrace,
    /// `FACTION`
    Faction,
    /// `TEAM`
    Team,
    /// `GENDER`
    Gender,
    /// `GENERAL`
    General,
    /// `SPECIFIC`
    Specific,
}

impl IdsField {
    /// Number of identifier tables.
    pub const COUNT: usize = 11;

    /// Every identifier table, in canonical order.
    pub const ALL: [IdsField; Self::COUNT] = [
        IdsField::Alignment,
        IdsField::Allegiance,
        IdsField::Class,
        IdsField::ClassMask,
        IdsField::Race,
        IdsField::Subrace,
        IdsField::Faction,
        IdsField::Team,
        IdsField::Gender,
        IdsField::General,
        IdsField::Specific,
    ];

    /// Returns every identifier table.
    #[must_use]
    pub fn all() -> &'static [IdsField] {
        &Self::ALL
    }

    /// Canonical table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alignment => "alignment",
            Self::Allegiance => "allegiance",
            Self::Class => "class",
            Self::ClassMask => "classmask",
            Self::Race => "race",
            Self::Subrace => "subrace",
            Self::Faction => "faction",
            Self::Team => "team",
            Self::Gender => "gender",
            Self::General => "general",
            Self::Specific => "specific",
        }
    }

    /// Looks up a table by name, case-insensitively.
    ///
    /// `ea` is accepted as an alias of `allegiance`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownIdsField`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, ResolveError> {
        if name.eq_ignore_ascii_case("ea") {
            return Ok(Self::Allegiance);
        }
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ResolveError::UnknownIdsField(name.to_string()))
    }

    /// Runs the matcher for this table.
    #[must_use]
    pub fn matches(self, actor: &Actor, parameter: i32) -> bool {
        let matcher: fn(&Actor, i32) -> bool = match self {
            Self::Alignment => id_alignment,
            Self::Allegiance => id_allegiance,
            Self::Class => id_class,
            Self::ClassMask => id_class_mask,
            Self::Race => id_race,
            Self::Subrace => id_subrace,
            Self::Faction => id_faction,
            Self::Team => id_team,
            Self::Gender => id_gender,
            Self::General => id_general,
            Self::Specific => id_specific,
        };
        matcher(actor, parameter)
    }
}

impl fmt::Display for IdsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdsField {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Which side of the allegiance scale an actor stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// At or below the good cutoff: the party and its allies.
    Party,
    /// Strictly between the cutoffs. Neutrals have no enemies.
    Neutral,
    /// At or above the evil cutoff.
    Enemy,
}

impl Side {
    /// Classifies an allegiance value.
    #[must_use]
    pub const fn of_allegiance(value: i32) -> Self {
        if value <= ea::GOODCUTOFF {
            Self::Party
        } else if value >= ea::EVILCUTOFF {
            Self::Enemy
        } else {
            Self::Neutral
        }
    }

    /// Classifies an actor by its allegiance stat.
    #[must_use]
    pub fn of(actor: &Actor) -> Self {
        Self::of_allegiance(actor.stat(Stat::Ea))
    }

    /// Returns the side this one fights, if any.
    #[must_use]
    pub const fn opponent(self) -> Option<Self> {
        match self {
            Self::Party => Some(Self::Enemy),
            Self::Enemy => Some(Self::Party),
            Self::Neutral => None,
        }
    }
}

/// Standard object-spec filter. Zero fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdsFilter {
    /// Allegiance parameter.
    #[serde(default)]
    pub ea: i32,
    /// General category.
    #[serde(default)]
    pub general: i32,
    /// Race.
    #[serde(default)]
    pub race: i32,
    /// Class or class group.
    #[serde(default)]
    pub class: i32,
    /// Specific category.
    #[serde(default)]
    pub specific: i32,
    /// Gender.
    #[serde(default)]
    pub gender: i32,
    /// Packed alignment.
    #[serde(default)]
    pub alignment: i32,
}

impl IdsFilter {
    /// A filter that matches every actor.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            ea: 0,
            general: 0,
            race: 0,
            class: 0,
            specific: 0,
            gender: 0,
            alignment: 0,
        }
    }

    /// Restricts allegiance.
    #[must_use]
    pub const fn with_ea(mut self, ea: i32) -> Self {
        self.ea = ea;
        self
    }

    /// Restricts the general category.
    #[must_use]
    pub const fn with_general(mut self, general: i32) -> Self {
        self.general = general;
        self
    }

    /// Restricts race.
    #[must_use]
    pub const fn with_race(mut self, race: i32) -> Self {
        self.race = race;
        self
    }

    /// Restricts class.
    #[must_use]
    pub const fn with_class(mut self, class: i32) -> Self {
        self.class = class;
        self
    }

    /// Restricts the specific category.
    #[must_use]
    pub const fn with_specific(mut self, specific: i32) -> Self {
        self.specific = specific;
        self
    }

    /// Restricts gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: i32) -> Self {
        self.gender = gender;
        self
    }

    /// Restricts alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: i32) -> Self {
        self.alignment = alignment;
        self
    }

    /// Returns `true` if `actor` passes every non-zero field.
    #[must_use]
    pub fn matches(&self, actor: &Actor) -> bool {
        let checks = [
            (IdsField::Allegiance, self.ea),
            (IdsField::General, self.general),
            (IdsField::Race, self.race),
            (IdsField::Class, self.class),
            (IdsField::Specific, self.specific),
            (IdsField::Gender, self.gender),
            (IdsField::Alignment, self.alignment),
        ];
        checks
            .into_iter()
            .all(|(field, parameter)| parameter == 0 || field.matches(actor, parameter))
    }
}
