//! Party-based resolvers.
//!
//! Party slots are 0-based positions that compact when members leave;
//! recruitment numbers are 1-based and stable. `PlayerN` reads slots,
//! `PlayerNFill` reads recruitment numbers.

use census::{Actor, Located};

use crate::flags::TargetFlags;
use crate::target::Targets;

use super::ResolveContext;

/// `Player1`..`Player8`: the party member in slot `number - 1`.
#[must_use]
pub fn player(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    number: u8,
    flags: TargetFlags,
) -> Targets {
    targets.clear();
    let member = number
        .checked_sub(1)
        .and_then(|slot| ctx.directory().party_member(usize::from(slot)));
    if let Some(actor) = member {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `Player1Fill`..`Player8Fill`: the party member with recruitment number
/// `number`.
#[must_use]
pub fn player_fill(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    number: u8,
    flags: TargetFlags,
) -> Targets {
    targets.clear();
    if let Some(actor) = ctx.directory().party_member_by_number(number) {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `Protagonist`: the main character.
///
/// With [`charname_is_gabber`](crate::ResolverConfig::charname_is_gabber)
/// this is the dialogue speaker, or failing that the living party member
/// nearest the requester. Otherwise it is the member in slot 0.
#[must_use]
pub fn protagonist(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    targets.clear();
    let directory = ctx.directory();

    if !ctx.config().charname_is_gabber {
        if let Some(actor) = directory.party_member(0) {
            targets.add_actor(actor, 0, flags);
        }
        return targets;
    }

    if let Some(speaker) = directory.dialogue_speaker().and_then(|id| ctx.actor(id)) {
        targets.add_actor(speaker, 0, flags);
    }
    if !targets.is_empty() {
        return targets;
    }

    let nearest = nearest_by_distance(
        directory.party(true).into_iter(),
        |actor| ctx.distance_from_requester(actor),
    );
    if let Some(actor) = nearest {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `NearestPC`: the living party member nearest the requester, in the
/// requester's area.
///
/// The requester never finds itself.
#[must_use]
pub fn nearest_pc(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    targets.clear();
    let requester = ctx.requester();
    let area = requester.area();

    let candidates = ctx
        .directory()
        .party(true)
        .into_iter()
        .rev()
        .filter(|actor| !requester.is_actor(actor))
        .filter(|actor| actor.area() == area);
    if let Some(actor) =
        nearest_by_distance(candidates, |actor| ctx.distance_from_requester(actor))
    {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `SelectedCharacter`: every actor the player has selected in the
/// requester's area, at its distance from the requester.
#[must_use]
pub fn selected_character(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    flags: TargetFlags,
) -> Targets {
    targets.clear();
    let area = ctx.requester().area();
    for actor in ctx.directory().area_actors(area, false) {
        if actor.area() == area && actor.is_selected() {
            targets.add_actor(actor, ctx.distance_from_requester(actor), flags);
        }
    }
    targets
}

/// Strict minimum: the first candidate at the smallest distance wins.
fn nearest_by_distance<'a, I, F>(candidates: I, distance: F) -> Option<&'a Actor>
where
    I: Iterator<Item = &'a Actor>,
    F: Fn(&Actor) -> u32,
{
    let mut best: Option<(&Actor, u32)> = None;
    for actor in candidates {
        let d = distance(actor);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((actor, d));
        }
    }
    best.map(|(actor, _)| actor)
}
