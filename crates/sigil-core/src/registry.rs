//! By-name dispatch of object functions.
//!
//! A script names an object function as a string such as `"LastHitter"` or
//! `"ThirdNearestEnemyOf"`. [`ObjectFunction`] is the closed table of those
//! names: ordinal families carry their rank as a value instead of being one
//! entry per rank, and `from_name` maps each spelled-out name back to the
//! family and rank.
//!
//! [`ObjectResolver`] owns the session configuration and runs functions,
//! singly or as a chain.
//!
//! # Example
//!
//! ```
//! use census::{Actor, ActorId, AreaId, BackRef, World};
//! use glam::IVec2;
//! use sigil_core::{ObjectResolver, Requester, ResolverConfig, TargetFlags, Targets};
//!
//! let area = AreaId::new(1);
//! let mut world = World::new();
//! let orc = world.spawn(Actor::new(ActorId::new(2), area, IVec2::new(4, 0))).unwrap();
//! let hero = world
//!     .spawn(Actor::new(ActorId::new(1), area, IVec2::ZERO).with_back_ref(BackRef::Hitter, orc))
//!     .unwrap();
//!
//! let resolver = ObjectResolver::new(ResolverConfig::default());
//! let me = world.get(hero).unwrap();
//! let out = resolver
//!     .resolve_named(
//!         &world,
//!         Requester::Actor(me),
//!         "lasthitter",
//!         Targets::new(),
//!         TargetFlags::empty(),
//!     )
//!     .unwrap();
//! assert_eq!(out.actor_ids().collect::<Vec<_>>(), vec![orc]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use census::{BackRef, Directory};
use tracing::trace;

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::flags::TargetFlags;
use crate::requester::Requester;
use crate::resolvers::ordinal::{self, Ordinal};
use crate::resolvers::{backref, group, identity, party, ranking, ResolveContext};
use crate::target::Targets;

/// Spelled-out rank prefixes, nearest first.
const RANK_PREFIXES: [&str; 10] = [
    "", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

/// Highest player slot and recruitment number.
const PLAYER_COUNT: u8 = 8;

// =============================================================================
// Object Functions
// =============================================================================

/// One entry of the object function table.
///
/// Ranks are 0-based (`Nearest(1)` is `SecondNearest`); player numbers are
/// 1-based (`Player(1)` is `Player1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectFunction {
    /// The requester.
    Myself,
    /// Always empty.
    Nothing,
    /// The main character.
    Protagonist,
    /// The dialogue speaker.
    Gabber,
    /// Party slot `n - 1`.
    Player(u8),
    /// Recruitment number `n`.
    PlayerFill(u8),

    /// Subject's last hitter.
    LastHitter,
    /// Same as [`LastHitter`](Self::LastHitter).
    LastAttackerOf,
    /// Subject's last target.
    LastTargetedBy,
    /// Last actor the subject saw.
    LastSeenBy,
    /// Last actor the subject heard.
    LastHeardBy,
    /// Last actor that called the subject for help.
    LastHelp,
    /// Last actor the subject marked.
    LastMarkedObject,
    /// The actor the subject protects.
    ProtectedBy,
    /// Last actor that commanded the subject.
    LastCommandedBy,
    /// The subject's leader.
    LeaderOf,
    /// Last actor the subject talked to.
    LastTalkedToBy,
    /// The subject's summoner.
    LastSummonerOf,
    /// The requester's own last target.
    MyTarget,
    /// The actor that last triggered the requester.
    LastTrigger,

    /// Actors sharing the subject's specific category.
    GroupOf,
    /// Actors protecting what the subject protects.
    ProtectorOf,

    /// Best armor class in the set.
    BestAC,
    /// Worst armor class in the set.
    WorstAC,
    /// Most hit points in the set.
    StrongestOf,
    /// Last male in the set after its first actor entry.
    StrongestOfMale,
    /// Fewest hit points in the set.
    WeakestOf,
    /// Most damaged party member.
    MostDamagedOf,
    /// Largest hit point gap in the set.
    LeastDamagedOf,

    /// Ranked actor of the set.
    Nearest(u8),
    /// Last actor of the set.
    Farthest,
    /// Ranked opponent of the first actor.
    NearestEnemyOf(u8),
    /// Farthest opponent of the first actor.
    FarthestEnemyOf,
    /// Ranked enemy of the requester within the set.
    NearestEnemyOfType(u8),
    /// Ranked member of the requester's group within the set.
    NearestMyGroupOfType(u8),
    /// Nearest summoned enemy within the set.
    NearestEnemySummoned,
    /// Ranked door near the first entry.
    NearestDoor(u8),
    /// Nearest other living party member.
    NearestPC,
    /// Selected actors in the requester's area.
    SelectedCharacter,
}

impl ObjectFunction {
    const FIXED: [ObjectFunction; 32] = [
        Self::Myself,
        Self::Nothing,
        Self::Protagonist,
        Self::Gabber,
        Self::LastHitter,
        Self::LastAttackerOf,
        Self::LastTargetedBy,
        Self::LastSeenBy,
        Self::LastHeardBy,
        Self::LastHelp,
        Self::LastMarkedObject,
        Self::ProtectedBy,
        Self::LastCommandedBy,
        Self::LeaderOf,
        Self::LastTalkedToBy,
        Self::LastSummonerOf,
        Self::MyTarget,
        Self::LastTrigger,
        Self::GroupOf,
        Self::ProtectorOf,
        Self::BestAC,
        Self::WorstAC,
        Self::StrongestOf,
        Self::StrongestOfMale,
        Self::WeakestOf,
        Self::MostDamagedOf,
        Self::LeastDamagedOf,
        Self::Farthest,
        Self::FarthestEnemyOf,
        Self::NearestEnemySummoned,
        Self::NearestPC,
        Self::SelectedCharacter,
    ];

    /// Every named entry: fixed functions, eight player slots of each kind
    /// and ten ranks of each ordinal family.
    #[must_use]
    pub fn all() -> Vec<ObjectFunction> {
        let mut table = Self::FIXED.to_vec();
        for n in 1..=PLAYER_COUNT {
            table.push(Self::Player(n));
            table.push(Self::PlayerFill(n));
        }
        for (rank, _) in (0u8..).zip(RANK_PREFIXES) {
            table.push(Self::Nearest(rank));
            table.push(Self::NearestEnemyOf(rank));
            table.push(Self::NearestEnemyOfType(rank));
            table.push(Self::NearestMyGroupOfType(rank));
            table.push(Self::NearestDoor(rank));
        }
        table
    }

    /// Looks up a function by its script name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownObjectFunction`] if no entry has this name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|function| function.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ResolveError::UnknownObjectFunction(name.to_string()))
    }

    /// The stored back-reference this function reads, if it is one of the
    /// subject-based back-reference lookups.
    #[must_use]
    pub const fn back_ref(self) -> Option<BackRef> {
        let kind = match self {
            Self::LastHitter | Self::LastAttackerOf => BackRef::Hitter,
            Self::LastTargetedBy => BackRef::Target,
            Self::LastSeenBy => BackRef::Seen,
            Self::LastHeardBy => BackRef::Heard,
            Self::LastHelp => BackRef::Help,
            Self::LastMarkedObject => BackRef::Marked,
            Self::ProtectedBy => BackRef::Protected,
            Self::LastCommandedBy => BackRef::Commander,
            Self::LeaderOf => BackRef::Followed,
            Self::LastTalkedToBy => BackRef::TalkedTo,
            Self::LastSummonerOf => BackRef::Summoner,
            _ => return None,
        };
        Some(kind)
    }

    /// Runs the function.
    #[must_use]
    pub fn apply(self, ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
        match self {
            Self::Myself => identity::myself(ctx, targets, flags),
            Self::Nothing => identity::nothing(ctx, targets, flags),
            Self::Gabber => identity::gabber(ctx, targets, flags),
            Self::Protagonist => party::protagonist(ctx, targets, flags),
            Self::Player(n) => party::player(ctx, targets, n, flags),
            Self::PlayerFill(n) => party::player_fill(ctx, targets, n, flags),
            Self::NearestPC => party::nearest_pc(ctx, targets, flags),
            Self::SelectedCharacter => party::selected_character(ctx, targets, flags),

            Self::MyTarget => backref::my_target(ctx, targets, flags),
            Self::LastTrigger => backref::last_trigger(ctx, targets, flags),

            Self::GroupOf => group::group_of(ctx, targets, flags),
            Self::ProtectorOf => group::protector_of(ctx, targets, flags),

            Self::BestAC => ranking::best_ac(ctx, targets, flags),
            Self::WorstAC => ranking::worst_ac(ctx, targets, flags),
            Self::StrongestOf => ranking::strongest_of(ctx, targets, flags),
            Self::StrongestOfMale => ranking::strongest_of_male(ctx, targets, flags),
            Self::WeakestOf => ranking::weakest_of(ctx, targets, flags),
            Self::MostDamagedOf => ranking::most_damaged_of(ctx, targets, flags),
            Self::LeastDamagedOf => ranking::least_damaged_of(ctx, targets, flags),

            Self::Nearest(k) => ordinal::xth_nearest_of(ctx, targets, nth(k), flags),
            Self::Farthest => ordinal::farthest(ctx, targets, flags),
            Self::NearestEnemyOf(k) => ordinal::xth_nearest_enemy_of(ctx, targets, nth(k), flags),
            Self::FarthestEnemyOf => {
                ordinal::xth_nearest_enemy_of(ctx, targets, Ordinal::Last, flags)
            }
            Self::NearestEnemyOfType(k) => {
                ordinal::xth_nearest_enemy_of_type(ctx, targets, nth(k), flags)
            }
            Self::NearestMyGroupOfType(k) => {
                ordinal::xth_nearest_my_group_of_type(ctx, targets, nth(k), flags)
            }
            Self::NearestEnemySummoned => ordinal::nearest_enemy_summoned(ctx, targets, flags),
            Self::NearestDoor(k) => ordinal::xth_nearest_door(ctx, targets, usize::from(k), flags),

            Self::LastHitter
            | Self::LastAttackerOf
            | Self::LastTargetedBy
            | Self::LastSeenBy
            | Self::LastHeardBy
            | Self::LastHelp
            | Self::LastMarkedObject
            | Self::ProtectedBy
            | Self::LastCommandedBy
            | Self::LeaderOf
            | Self::LastTalkedToBy
            | Self::LastSummonerOf => match self.back_ref() {
                Some(kind) => backref::back_reference(ctx, targets, kind, flags),
                None => targets,
            },
        }
    }
}

fn nth(rank: u8) -> Ordinal {
    Ordinal::Nth(usize::from(rank))
}

fn write_ranked(f: &mut fmt::Formatter<'_>, rank: u8, family: &str) -> fmt::Result {
    match RANK_PREFIXES.get(usize::from(rank)) {
        Some(prefix) => write!(f, "{prefix}{family}"),
        None => write!(f, "{family}[{rank}]"),
    }
}

impl fmt::Display for ObjectFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Player(n) => return write!(f, "Player{n}"),
            Self::PlayerFill(n) => return write!(f, "Player{n}Fill"),
            Self::Nearest(k) => return write_ranked(f, k, "Nearest"),
            Self::NearestEnemyOf(k) => return write_ranked(f, k, "NearestEnemyOf"),
            Self::NearestEnemyOfType(k) => return write_ranked(f, k, "NearestEnemyOfType"),
            Self::NearestMyGroupOfType(k) => return write_ranked(f, k, "NearestMyGroupOfType"),
            Self::NearestDoor(k) => return write_ranked(f, k, "NearestDoor"),
            Self::Myself => "Myself",
            Self::Nothing => "Nothing",
            Self::Protagonist => "Protagonist",
            Self::Gabber => "Gabber",
            Self::LastHitter => "LastHitter",
            Self::LastAttackerOf => "LastAttackerOf",
            Self::LastTargetedBy => "LastTargetedBy",
            Self::LastSeenBy => "LastSeenBy",
            Self::LastHeardBy => "LastHeardBy",
            Self::LastHelp => "LastHelp",
            Self::LastMarkedObject => "LastMarkedObject",
            Self::ProtectedBy => "ProtectedBy",
            Self::LastCommandedBy => "LastCommandedBy",
            Self::LeaderOf => "LeaderOf",
            Self::LastTalkedToBy => "LastTalkedToBy",
            Self::LastSummonerOf => "LastSummonerOf",
            Self::MyTarget => "MyTarget",
            Self::LastTrigger => "LastTrigger",
            Self::GroupOf => "GroupOf",
            Self::ProtectorOf => "ProtectorOf",
            Self::BestAC => "BestAC",
            Self::WorstAC => "WorstAC",
            Self::StrongestOf => "StrongestOf",
            Self::StrongestOfMale => "StrongestOfMale",
            Self::WeakestOf => "WeakestOf",
            Self::MostDamagedOf => "MostDamagedOf",
            Self::LeastDamagedOf => "LeastDamagedOf",
            Self::Farthest => "Farthest",
            Self::FarthestEnemyOf => "FarthestEnemyOf",
            Self::NearestEnemySummoned => "NearestEnemySummoned",
            Self::NearestPC => "NearestPC",
            Self::SelectedCharacter => "SelectedCharacter",
        };
        f.write_str(name)
    }
}

impl FromStr for ObjectFunction {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Runs object functions against a directory with a fixed configuration.
///
/// Configuration is resolved once, when the resolver is built, and passed
/// into every resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectResolver {
    config: ResolverConfig,
}

impl ObjectResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Runs one function.
    #[must_use]
    pub fn resolve<'a>(
        &self,
        directory: &'a dyn Directory,
        requester: Requester<'a>,
        function: ObjectFunction,
        targets: Targets,
        flags: TargetFlags,
    ) -> Targets {
        let ctx = ResolveContext::new(directory, requester, self.config);
        let incoming = targets.len();
        let out = function.apply(&ctx, targets, flags);
        trace!(%function, incoming, outgoing = out.len(), "resolved object function");
        out
    }

    /// Runs one function by script name.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownObjectFunction`] if no entry has this name.
    pub fn resolve_named<'a>(
        &self,
        directory: &'a dyn Directory,
        requester: Requester<'a>,
        name: &str,
        targets: Targets,
        flags: TargetFlags,
    ) -> Result<Targets> {
        let function = ObjectFunction::from_name(name)?;
        Ok(self.resolve(directory, requester, function, targets, flags))
    }

    /// Runs functions in application order, starting from an empty set.
    ///
    /// The script expression `LastHitter(NearestEnemyOf(Myself))` is the
    /// chain `[Myself, NearestEnemyOf(0), LastHitter]`.
    #[must_use]
    pub fn resolve_chain<'a>(
        &self,
        directory: &'a dyn Directory,
        requester: Requester<'a>,
        chain: &[ObjectFunction],
        flags: TargetFlags,
    ) -> Targets {
        chain.iter().fold(Targets::new(), |targets, &function| {
            self.resolve(directory, requester, function, targets, flags)
        })
    }
}
