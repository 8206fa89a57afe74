//! Actor statistics and the well-known values stored in them.
//!
//! Each actor carries a [`StatTable`] indexed by [`Stat`]. Categorical stats
//! (class, race, allegiance, ...) hold small integers whose meaning comes from
//! the game's identifier tables; the constants for the values the resolution
//! engine cares about live in the [`ea`], [`gender`], [`class`] and
//! [`alignment`] modules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistic kinds readable from an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Stored (active) class value.
    Class,
    /// Race.
    Race,
    /// Subrace.
    Subrace,
    /// Faction.
    Faction,
    /// Team.
    Team,
    /// Packed alignment nibbles, see [`alignment`].
    Alignment,
    /// Enemy/ally stance, see [`ea`].
    Ea,
    /// Gender, see [`gender`].
    Gender,
    /// General category (humanoid, animal, ...).
    General,
    /// Specific category; actors sharing it form a group.
    Specific,
    /// Current hit points.
    HitPoints,
    /// Maximum hit points.
    MaxHitPoints,
    /// Armor class.
    ArmorClass,
}

impl Stat {
    /// Number of stat kinds.
    pub const COUNT: usize = 13;

    /// All stat kinds in table order.
    pub const ALL: [Stat; Self::COUNT] = [
        Stat::Class,
        Stat::Race,
        Stat::Subrace,
        Stat::Faction,
        Stat::Team,
        Stat::Alignment,
        Stat::Ea,
        Stat::Gender,
        Stat::General,
        Stat::Specific,
        Stat::HitPoints,
        Stat::MaxHitPoints,
        Stat::ArmorClass,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "CLASS",
            Self::Race => "RACE",
            Self::Subrace => "SUBRACE",
            Self::Faction => "FACTION",
            Self::Team => "TEAM",
            Self::Alignment => "ALIGNMENT",
            Self::Ea => "EA",
            Self::Gender => "SEX",
            Self::General => "GENERAL",
            Self::Specific => "SPECIFIC",
            Self::HitPoints => "HITPOINTS",
            Self::MaxHitPoints => "MAXHITPOINTS",
            Self::ArmorClass => "ARMORCLASS",
        };
        f.write_str(name)
    }
}

/// Fixed-size table of an actor's statistics.
///
/// Unset stats read as zero, which every identifier table treats as "none".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    values: [i32; Stat::COUNT],
}

impl StatTable {
    /// Creates a table with every stat at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [0; Stat::COUNT],
        }
    }

    /// Returns the value of a stat.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    /// Sets the value of a stat.
    pub fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat.index()] = value;
    }

    /// Returns the table with one stat replaced.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }
}

/// Enemy/ally stance values.
pub mod ea {
    /// Controlled party member.
    pub const PC: i32 = 2;
    /// Familiar.
    pub const FAMILIAR: i32 = 3;
    /// Ally.
    pub const ALLY: i32 = 4;
    /// Controlled by the party.
    pub const CONTROLLED: i32 = 5;
    /// Charmed to the party side.
    pub const CHARMED: i32 = 6;
    /// Good, but shown red.
    pub const GOODBUTRED: i32 = 28;
    /// Good, but shown blue.
    pub const GOODBUTBLUE: i32 = 29;
    /// Everything up to here is on the party side.
    pub const GOODCUTOFF: i32 = 30;
    /// Anything not on the party side.
    pub const NOTGOOD: i32 = 31;
    /// Wildcard.
    pub const ANYTHING: i32 = 126;
    /// Neutral.
    pub const NEUTRAL: i32 = 128;
    /// Anything not on the enemy side.
    pub const NOTEVIL: i32 = 199;
    /// Everything from here up is on the enemy side.
    pub const EVILCUTOFF: i32 = 200;
    /// Evil, but shown green.
    pub const EVILBUTGREEN: i32 = 201;
    /// Evil, but shown blue.
    pub const EVILBUTBLUE: i32 = 202;
    /// Party member charmed by the enemy.
    pub const CHARMEDPC: i32 = 254;
    /// Enemy.
    pub const ENEMY: i32 = 255;
}

/// Gender values.
pub mod gender {
    /// Male.
    pub const MALE: i32 = 1;
    /// Female.
    pub const FEMALE: i32 = 2;
    /// Other.
    pub const OTHER: i32 = 3;
    /// Neither.
    pub const NEITHER: i32 = 4;
    /// Both.
    pub const BOTH: i32 = 5;
    /// Summoned creature.
    pub const SUMMONED: i32 = 6;
    /// Illusion.
    pub const ILLUSIONARY: i32 = 7;
    /// Extra.
    pub const EXTRA: i32 = 8;
    /// Summoned demon.
    pub const SUMMONED_DEMON: i32 = 9;
}

/// Stored class values.
///
/// Single classes use the values below; the gaps (7-10, 13-18) are the
/// multi-class combinations.
pub mod class {
    /// Mage.
    pub const MAGE: i32 = 1;
    /// Fighter.
    pub const FIGHTER: i32 = 2;
    /// Cleric.
    pub const CLERIC: i32 = 3;
    /// Thief.
    pub const THIEF: i32 = 4;
    /// Bard.
    pub const BARD: i32 = 5;
    /// Paladin.
    pub const PALADIN: i32 = 6;
    /// Fighter/mage.
    pub const FIGHTER_MAGE: i32 = 7;
    /// Fighter/cleric.
    pub const FIGHTER_CLERIC: i32 = 8;
    /// Fighter/thief.
    pub const FIGHTER_THIEF: i32 = 9;
    /// Fighter/mage/thief.
    pub const FIGHTER_MAGE_THIEF: i32 = 10;
    /// Druid.
    pub const DRUID: i32 = 11;
    /// Ranger.
    pub const RANGER: i32 = 12;
    /// Mage/thief.
    pub const MAGE_THIEF: i32 = 13;
    /// Cleric/mage.
    pub const CLERIC_MAGE: i32 = 14;
    /// Cleric/thief.
    pub const CLERIC_THIEF: i32 = 15;
    /// Fighter/druid.
    pub const FIGHTER_DRUID: i32 = 16;
    /// Fighter/mage/cleric.
    pub const FIGHTER_MAGE_CLERIC: i32 = 17;
    /// Cleric/ranger.
    pub const CLERIC_RANGER: i32 = 18;
    /// Sorcerer.
    pub const SORCERER: i32 = 19;
    /// Monk.
    pub const MONK: i32 = 20;

    /// Any mage-type (mage and sorcerer levels).
    pub const MAGE_ALL: i32 = 202;
    /// Any fighter-type (fighter and monk levels).
    pub const FIGHTER_ALL: i32 = 203;
    /// Any cleric.
    pub const CLERIC_ALL: i32 = 204;
    /// Any thief.
    pub const THIEF_ALL: i32 = 205;
    /// Any bard.
    pub const BARD_ALL: i32 = 206;
    /// Any paladin.
    pub const PALADIN_ALL: i32 = 207;
    /// Any druid.
    pub const DRUID_ALL: i32 = 208;
    /// Any ranger.
    pub const RANGER_ALL: i32 = 209;
}

/// Alignment nibbles.
pub mod alignment {
    /// Lawful (low nibble).
    pub const LAWFUL: i32 = 0x01;
    /// Neutral on the law/chaos axis.
    pub const NEUTRAL: i32 = 0x02;
    /// Chaotic (low nibble).
    pub const CHAOTIC: i32 = 0x03;
    /// Good (high nibble).
    pub const GOOD: i32 = 0x10;
    /// Neutral on the good/evil axis.
    pub const MID: i32 = 0x20;
    /// Evil (high nibble).
    pub const EVIL: i32 = 0x30;

    /// Lawful good.
    pub const LAWFUL_GOOD: i32 = LAWFUL | GOOD;
    /// True neutral.
    pub const TRUE_NEUTRAL: i32 = NEUTRAL | MID;
    /// Chaotic evil.
    pub const CHAOTIC_EVIL: i32 = CHAOTIC | EVIL;
}
