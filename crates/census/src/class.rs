//! Per-class experience levels.
//!
//! The stored [`Stat::Class`](crate::Stat::Class) value only names the active
//! class. Multi-classed and dual-classed actors additionally carry a level in
//! each base class they have trained, which [`ClassLevels`] tracks.
//!
//! # Dual-classing
//!
//! A dual-classed actor's original class stays dormant until the new class
//! surpasses it. While dormant, [`ClassLevels::level`] reports zero for it, so
//! the actor detects only as its new class.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stats::class;

/// A single base class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseClass {
    /// Mage.
    Mage,
    /// Fighter.
    Fighter,
    /// Cleric.
    Cleric,
    /// Thief.
    Thief,
    /// Bard.
    Bard,
    /// Paladin.
    Paladin,
    /// Druid.
    Druid,
    /// Ranger.
    Ranger,
    /// Sorcerer.
    Sorcerer,
    /// Monk.
    Monk,
}

impl BaseClass {
    /// Number of base classes.
    pub const COUNT: usize = 10;

    /// All base classes.
    pub const ALL: [BaseClass; Self::COUNT] = [
        BaseClass::Mage,
        BaseClass::Fighter,
        BaseClass::Cleric,
        BaseClass::Thief,
        BaseClass::Bard,
        BaseClass::Paladin,
        BaseClass::Druid,
        BaseClass::Ranger,
        BaseClass::Sorcerer,
        BaseClass::Monk,
    ];

    /// Returns the stored class value of this class as a single class.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Mage => class::MAGE,
            Self::Fighter => class::FIGHTER,
            Self::Cleric => class::CLERIC,
            Self::Thief => class::THIEF,
            Self::Bard => class::BARD,
            Self::Paladin => class::PALADIN,
            Self::Druid => class::DRUID,
            Self::Ranger => class::RANGER,
            Self::Sorcerer => class::SORCERER,
            Self::Monk => class::MONK,
        }
    }

    /// Looks up the base class whose single-class value is `id`.
    #[must_use]
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Bit of this class in a class mask.
    #[must_use]
    pub const fn mask_bit(self) -> u32 {
        1 << (self.id() - 1)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mage => "Mage",
            Self::Fighter => "Fighter",
            Self::Cleric => "Cleric",
            Self::Thief => "Thief",
            Self::Bard => "Bard",
            Self::Paladin => "Paladin",
            Self::Druid => "Druid",
            Self::Ranger => "Ranger",
            Self::Sorcerer => "Sorcerer",
            Self::Monk => "Monk",
        };
        f.write_str(name)
    }
}

/// Levels an actor holds in each base class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevels {
    levels: [u8; BaseClass::COUNT],
    /// Original class of a dual-classed actor that has not been reactivated.
    dormant: Option<BaseClass>,
}

impl ClassLevels {
    /// Creates an empty level table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            levels: [0; BaseClass::COUNT],
            dormant: None,
        }
    }

    /// Sets the trained level in a class.
    pub fn set(&mut self, class: BaseClass, level: u8) {
        self.levels[class.index()] = level;
    }

    /// Marks a class as the dormant original class of a dual-class.
    ///
    /// Pass `None` once the original class is reactivated.
    pub fn set_dormant(&mut self, class: Option<BaseClass>) {
        self.dormant = class;
    }

    /// Returns the dormant class, if any.
    #[must_use]
    pub const fn dormant(&self) -> Option<BaseClass> {
        self.dormant
    }

    /// Returns the effective level in a class.
    ///
    /// A dormant dual-class reports zero.
    #[must_use]
    pub fn level(&self, class: BaseClass) -> u32 {
        if self.dormant == Some(class) {
            return 0;
        }
        u32::from(self.levels[class.index()])
    }

    /// Returns the trained level ignoring dormancy.
    #[must_use]
    pub fn trained_level(&self, class: BaseClass) -> u32 {
        u32::from(self.levels[class.index()])
    }

    /// Returns the mask of every class with a positive effective level.
    #[must_use]
    pub fn mask(&self) -> u32 {
        BaseClass::ALL
            .into_iter()
            .filter(|&c| self.level(c) > 0)
            .fold(0, |mask, c| mask | c.mask_bit())
    }
}
