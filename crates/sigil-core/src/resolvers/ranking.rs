//! Ranking resolvers: pick one actor by a running extremum.
//!
//! Each scans the actors of the incoming set once, in set order, and keeps
//! the best so far under a strict comparison, so ties go to the first
//! candidate seen. A set without actors is returned unchanged.
//!
//! `MostDamagedOf` is the exception: it ignores the incoming set and scans
//! the party in the requester's area.

use std::cmp::Ordering;

use census::stats::gender;
use census::{Actor, Located, Stat};

use crate::flags::TargetFlags;
use crate::target::Targets;

use super::ResolveContext;

/// Starting value of the `MostDamagedOf` scan.
const MOST_DAMAGED_SENTINEL: i32 = 0xffff;

/// `BestAC`: highest armor class value.
#[must_use]
pub fn best_ac(ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
    pick_extreme(ctx, targets, flags, |a| a.stat(Stat::ArmorClass), Ordering::Greater)
}

/// `WorstAC`: lowest armor class value.
#[must_use]
pub fn worst_ac(ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
    pick_extreme(ctx, targets, flags, |a| a.stat(Stat::ArmorClass), Ordering::Less)
}

/// `StrongestOf`: most current hit points.
#[must_use]
pub fn strongest_of(ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
    pick_extreme(ctx, targets, flags, |a| a.stat(Stat::HitPoints), Ordering::Greater)
}

/// `WeakestOf`: fewest current hit points.
#[must_use]
pub fn weakest_of(ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
    pick_extreme(ctx, targets, flags, |a| a.stat(Stat::HitPoints), Ordering::Less)
}

/// `LeastDamagedOf`: largest gap between maximum and current hit points.
#[must_use]
pub fn least_damaged_of(ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
    pick_extreme(ctx, targets, flags, missing_hit_points, Ordering::Greater)
}

/// `StrongestOfMale`: the last male actor of the set after its first actor.
///
/// Despite the name, hit points play no part: every male past the first
/// actor entry replaces the pick. The first actor entry is never a
/// candidate, so a set whose only male comes first gives an empty set.
#[must_use]
pub fn strongest_of_male(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    flags: TargetFlags,
) -> Targets {
    let actors = ctx.actors(&targets);
    if actors.is_empty() {
        return targets;
    }
    let picked = actors
        .into_iter()
        .skip(1)
        .filter(|actor| actor.stat(Stat::Gender) == gender::MALE)
        .last();
    targets.clear();
    if let Some(actor) = picked {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `MostDamagedOf`: the party member in the requester's area with the
/// smallest hit point gap, scanning slots from last to first.
///
/// The scan starts from a sentinel gap of `0xffff`, so a member must be
/// strictly below it to be picked. Dead members are scanned too.
#[must_use]
pub fn most_damaged_of(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    flags: TargetFlags,
) -> Targets {
    let area = ctx.requester().area();
    let mut worst = MOST_DAMAGED_SENTINEL;
    let mut picked: Option<&Actor> = None;
    for actor in ctx.directory().party(false).into_iter().rev() {
        if actor.area() != area {
            continue;
        }
        let missing = missing_hit_points(actor);
        if worst > missing {
            worst = missing;
            picked = Some(actor);
        }
    }

    targets.clear();
    if let Some(actor) = picked {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

fn missing_hit_points(actor: &Actor) -> i32 {
    actor.stat(Stat::MaxHitPoints) - actor.stat(Stat::HitPoints)
}

fn pick_extreme<F>(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    flags: TargetFlags,
    key: F,
    prefer: Ordering,
) -> Targets
where
    F: Fn(&Actor) -> i32,
{
    let Some(winner) = extreme(ctx.actors(&targets).into_iter(), key, prefer) else {
        return targets;
    };
    targets.clear();
    targets.add_actor(winner, 0, flags);
    targets
}

/// Replaces the running best only when `key` compares as `prefer`.
fn extreme<'a, I, F>(candidates: I, key: F, prefer: Ordering) -> Option<&'a Actor>
where
    I: Iterator<Item = &'a Actor>,
    F: Fn(&Actor) -> i32,
{
    let mut best: Option<(&Actor, i32)> = None;
    for actor in candidates {
        let value = key(actor);
        if best.map_or(true, |(_, best_value)| value.cmp(&best_value) == prefer) {
            best = Some((actor, value));
        }
    }
    best.map(|(actor, _)| actor)
}
