//! Category resolvers: everyone in the subject's area sharing a value with it.

use census::{BackRef, Located, Stat};

use crate::flags::TargetFlags;
use crate::target::Targets;

use super::ResolveContext;

/// `GroupOf`: every actor in the subject's area with the subject's specific
/// category, the subject included.
///
/// Results are in area order at distance 0.
#[must_use]
pub fn group_of(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    let subject = ctx.subject(&targets);
    targets.clear();
    let Some(subject) = subject else {
        return targets;
    };

    let specific = subject.stat(Stat::Specific);
    for actor in ctx.directory().area_actors(subject.area(), false) {
        if actor.stat(Stat::Specific) == specific {
            targets.add_actor(actor, 0, flags);
        }
    }
    targets
}

/// `ProtectorOf`: every actor in the subject's area protecting the same
/// actor the subject protects.
///
/// An absent reference compares equal to another absent reference, so a
/// subject protecting nobody groups with everyone else protecting nobody.
#[must_use]
pub fn protector_of(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    let subject = ctx.subject(&targets);
    targets.clear();
    let Some(subject) = subject else {
        return targets;
    };

    let protected = subject.back_ref(BackRef::Protected);
    for actor in ctx.directory().area_actors(subject.area(), false) {
        if actor.back_ref(BackRef::Protected) == protected {
            targets.add_actor(actor, 0, flags);
        }
    }
    targets
}
