//! Inclusion flags applied when an actor enters a Target Set.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use census::stats::ea;
use census::{Actor, Stat};

bitflags! {
    /// Filters checked by [`Targets::add_actor`](crate::Targets::add_actor).
    ///
    /// Each set flag rejects a category of actor. Non-actor targets are never
    /// rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct TargetFlags: u8 {
        /// Reject dead actors.
        const NO_DEAD = 1 << 0;
        /// Reject invisible actors.
        const NO_HIDDEN = 1 << 1;
        /// Reject party members and the good side of the allegiance scale.
        const NO_ALLY = 1 << 2;
        /// Reject non-party actors on the evil side of the allegiance scale.
        const NO_ENEMY = 1 << 3;
        /// Reject actors strictly between the good and evil cutoffs.
        const NO_NEUTRAL = 1 << 4;
        /// Reject actors the player could not select.
        const SELECTABLE = 1 << 5;
    }
}

impl TargetFlags {
    /// Returns `true` if `actor` passes every set flag.
    #[must_use]
    pub fn admits(self, actor: &Actor) -> bool {
        if self.contains(Self::NO_DEAD) && actor.is_dead() {
            return false;
        }
        if self.contains(Self::NO_HIDDEN) && actor.is_invisible() {
            return false;
        }
        if self.contains(Self::SELECTABLE) && !actor.is_selectable() {
            return false;
        }

        let allegiance = actor.stat(Stat::Ea);
        if self.contains(Self::NO_ALLY) && (actor.in_party() || allegiance <= ea::GOODCUTOFF) {
            return false;
        }
        if self.contains(Self::NO_ENEMY) && !actor.in_party() && allegiance >= ea::EVILCUTOFF {
            return false;
        }
        if self.contains(Self::NO_NEUTRAL)
            && allegiance > ea::GOODCUTOFF
            && allegiance < ea::EVILCUTOFF
        {
            return false;
        }
        true
    }
}
