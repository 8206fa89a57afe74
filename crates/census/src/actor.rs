//! Actors: creatures and characters that scripts can target.

use bitflags::bitflags;
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::backref::{BackRef, BackRefs};
use crate::class::{BaseClass, ClassLevels};
use crate::id::{ActorId, AreaId};
use crate::located::Located;
use crate::stats::{Stat, StatTable};

bitflags! {
    /// Transient actor state relevant to targeting.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ActorState: u8 {
        /// Actor is dead (its body may still be in the area).
        const DEAD = 1 << 0;
        /// Actor is invisible.
        const INVISIBLE = 1 << 1;
        /// Actor is currently selected by the player.
        const SELECTED = 1 << 2;
        /// Actor cannot be selected (cutscene, held, petrified).
        const UNSELECTABLE = 1 << 3;
    }
}

/// A live actor.
///
/// Area membership and party membership are owned by the
/// [`World`](crate::World); move an actor between areas with
/// [`World::move_actor`](crate::World::move_actor) so the per-area
/// enumeration order stays consistent.
///
/// # Example
///
/// ```
/// use census::{Actor, ActorId, AreaId, Stat};
/// use census::stats::ea;
/// use glam::IVec2;
///
/// let orc = Actor::new(ActorId::new(7), AreaId::new(1), IVec2::new(30, 40))
///     .with_stat(Stat::Ea, ea::ENEMY)
///     .with_stat(Stat::HitPoints, 12);
///
/// assert_eq!(orc.stat(Stat::Ea), 255);
/// assert!(!orc.in_party());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    area: AreaId,
    position: IVec2,
    stats: StatTable,
    levels: ClassLevels,
    refs: BackRefs,
    state: ActorState,
    /// Last actor that triggered one of this actor's scripts.
    last_trigger: Option<ActorId>,
    /// 1-based recruitment number while in the party.
    party_number: Option<u8>,
}

impl Actor {
    /// Creates an actor with zeroed stats at a position.
    #[must_use]
    pub fn new(id: ActorId, area: AreaId, position: IVec2) -> Self {
        Self {
            id,
            area,
            position,
            stats: StatTable::new(),
            levels: ClassLevels::new(),
            refs: BackRefs::new(),
            state: ActorState::empty(),
            last_trigger: None,
            party_number: None,
        }
    }

    /// Sets one stat.
    #[must_use]
    pub fn with_stat(mut self, stat: Stat, value: i32) -> Self {
        self.stats.set(stat, value);
        self
    }

    /// Sets the trained level in a base class.
    #[must_use]
    pub fn with_level(mut self, class: BaseClass, level: u8) -> Self {
        self.levels.set(class, level);
        self
    }

    /// Marks the dormant original class of a dual-class.
    #[must_use]
    pub fn with_dormant_class(mut self, class: BaseClass) -> Self {
        self.levels.set_dormant(Some(class));
        self
    }

    /// Records a back-reference.
    #[must_use]
    pub fn with_back_ref(mut self, kind: BackRef, id: ActorId) -> Self {
        self.refs.set(kind, Some(id));
        self
    }

    /// Adds state flags.
    #[must_use]
    pub fn with_state(mut self, state: ActorState) -> Self {
        self.state.insert(state);
        self
    }

    /// Records the actor that last triggered this actor's scripts.
    #[must_use]
    pub fn with_last_trigger(mut self, id: ActorId) -> Self {
        self.last_trigger = Some(id);
        self
    }

    /// Returns the actor's global identity.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// Returns the value of a stat.
    #[must_use]
    pub const fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    /// Sets the value of a stat.
    pub fn set_stat(&mut self, stat: Stat, value: i32) {
        self.stats.set(stat, value);
    }

    /// Returns the class level table.
    #[must_use]
    pub const fn levels(&self) -> &ClassLevels {
        &self.levels
    }

    /// Returns the class level table mutably.
    pub fn levels_mut(&mut self) -> &mut ClassLevels {
        &mut self.levels
    }

    /// Returns the effective level in one base class.
    #[must_use]
    pub fn class_level(&self, class: BaseClass) -> u32 {
        self.levels.level(class)
    }

    /// Returns the mask of every class the actor currently detects as.
    #[must_use]
    pub fn class_mask(&self) -> u32 {
        self.levels.mask()
    }

    /// Returns the identity recorded for a back-reference kind.
    #[must_use]
    pub const fn back_ref(&self, kind: BackRef) -> Option<ActorId> {
        self.refs.get(kind)
    }

    /// Records (or clears) a back-reference.
    pub fn set_back_ref(&mut self, kind: BackRef, id: Option<ActorId>) {
        self.refs.set(kind, id);
    }

    /// Returns the actor that last triggered this actor's scripts.
    #[must_use]
    pub const fn last_trigger(&self) -> Option<ActorId> {
        self.last_trigger
    }

    /// Records (or clears) the last triggering actor.
    pub fn set_last_trigger(&mut self, id: Option<ActorId>) {
        self.last_trigger = id;
    }

    /// Returns the state flags.
    #[must_use]
    pub const fn state(&self) -> ActorState {
        self.state
    }

    /// Sets or clears state flags.
    pub fn set_state(&mut self, state: ActorState, value: bool) {
        self.state.set(state, value);
    }

    /// Moves the actor within its current area.
    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    /// Returns `true` if the actor is dead.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.state.contains(ActorState::DEAD)
    }

    /// Returns `true` if the actor is invisible.
    #[must_use]
    pub const fn is_invisible(&self) -> bool {
        self.state.contains(ActorState::INVISIBLE)
    }

    /// Returns `true` if the player currently has the actor selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.state.contains(ActorState::SELECTED)
    }

    /// Returns `true` if the player could select the actor.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.is_dead() && !self.state.contains(ActorState::UNSELECTABLE)
    }

    /// Returns `true` if the actor is a party member.
    #[must_use]
    pub const fn in_party(&self) -> bool {
        self.party_number.is_some()
    }

    /// Returns the 1-based recruitment number while in the party.
    #[must_use]
    pub const fn party_number(&self) -> Option<u8> {
        self.party_number
    }

    pub(crate) fn set_area(&mut self, area: AreaId) {
        self.area = area;
    }

    pub(crate) fn set_party_number(&mut self, number: Option<u8>) {
        self.party_number = number;
    }
}

impl Located for Actor {
    fn area(&self) -> AreaId {
        self.area
    }

    fn position(&self) -> IVec2 {
        self.position
    }
}
