//! Back-reference resolvers.
//!
//! An actor records the identity of its last attacker, last target, last
//! summoner and so on. These resolvers read one such identity off the
//! subject and look it up again in the subject's current area. The stored
//! identity is never trusted: if the referent left the area or the world,
//! the result is empty.

use census::{ActorId, AreaId, BackRef, Located};
use tracing::debug;

use crate::flags::TargetFlags;
use crate::target::Targets;

use super::ResolveContext;

/// Reads `kind` off the subject and resolves it.
///
/// Backs `LastHitter`, `LastAttackerOf`, `LastTargetedBy`, `LastSeenBy`,
/// `LastHeardBy`, `LastHelp`, `LastMarkedObject`, `ProtectedBy`,
/// `LastCommandedBy`, `LeaderOf`, `LastTalkedToBy` and `LastSummonerOf`.
#[must_use]
pub fn back_reference(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    kind: BackRef,
    flags: TargetFlags,
) -> Targets {
    let subject = ctx.subject(&targets);
    targets.clear();
    if let Some(subject) = subject {
        add_resolved(ctx, &mut targets, subject.area(), subject.back_ref(kind), flags);
    }
    targets
}

/// `MyTarget`: the requester's own last target.
///
/// Unlike `LastTargetedBy` the incoming set is ignored.
#[must_use]
pub fn my_target(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    targets.clear();
    if let Some(me) = ctx.requester().as_actor() {
        add_resolved(ctx, &mut targets, me.area(), me.back_ref(BackRef::Target), flags);
    }
    targets
}

/// `LastTrigger`: the actor that last triggered the requester's script.
///
/// Works for every requester kind; doors and regions are triggered too.
#[must_use]
pub fn last_trigger(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    targets.clear();
    let requester = ctx.requester();
    add_resolved(ctx, &mut targets, requester.area(), requester.last_trigger(), flags);
    targets
}

fn add_resolved(
    ctx: &ResolveContext<'_>,
    targets: &mut Targets,
    area: AreaId,
    stored: Option<ActorId>,
    flags: TargetFlags,
) {
    let Some(id) = stored else {
        return;
    };
    match ctx.directory().actor_in_area(area, id) {
        Some(actor) => {
            targets.add_actor(actor, 0, flags);
        }
        None => debug!(actor = %id, area = %area, "stale back-reference"),
    }
}
