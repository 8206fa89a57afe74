//! Fixed substitutions: the requester itself, nothing, the dialogue speaker.

use crate::flags::TargetFlags;
use crate::requester::Requester;
use crate::target::Targets;

use super::ResolveContext;

/// `Myself`: the requester, at distance 0.
///
/// The incoming set is discarded. An actor requester rejected by `flags`
/// yields an empty set.
#[must_use]
pub fn myself(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    targets.clear();
    match ctx.requester() {
        Requester::Actor(actor) => {
            targets.add_actor(actor, 0, flags);
        }
        Requester::Object(object) => {
            targets.add_object(object, 0, flags);
        }
    }
    targets
}

/// `Nothing`: always empty.
#[must_use]
pub fn nothing(_ctx: &ResolveContext<'_>, mut targets: Targets, _flags: TargetFlags) -> Targets {
    targets.clear();
    targets
}

/// `Gabber`: the actor currently speaking in dialogue, or nothing.
#[must_use]
pub fn gabber(ctx: &ResolveContext<'_>, mut targets: Targets, flags: TargetFlags) -> Targets {
    targets.clear();
    if let Some(speaker) = ctx.directory().dialogue_speaker().and_then(|id| ctx.actor(id)) {
        targets.add_actor(speaker, 0, flags);
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::target::{KindFilter, TargetRef};
    use census::{Actor, ActorId, ActorState, AreaId, ObjectId, ScriptObject, World};
    use glam::IVec2;

    const AREA: AreaId = AreaId::new(1);

    fn world() -> World {
        let mut world = World::new();
        world
            .spawn(Actor::new(ActorId::new(1), AREA, IVec2::ZERO))
            .unwrap();
        world
            .spawn(Actor::new(ActorId::new(2), AREA, IVec2::new(5, 0)))
            .unwrap();
        world
    }

    fn prior() -> Targets {
        let mut set = Targets::new();
        set.add(TargetRef::Actor(ActorId::new(2)), 5, TargetFlags::empty());
        set.add(TargetRef::Object(ObjectId::new(9)), 1, TargetFlags::empty());
        set
    }

    #[test]
    fn myself_discards_prior_contents() {
        let world = world();
        let me = world.get(ActorId::new(1)).unwrap();
        let ctx = ResolveContext::new(&world, Requester::Actor(me), ResolverConfig::default());

        let out = myself(&ctx, prior(), TargetFlags::empty());
        assert_eq!(out.len(), 1);
        assert_eq!(
            out.first(KindFilter::Any).map(|e| (e.target, e.distance)),
            Some((TargetRef::Actor(ActorId::new(1)), 0))
        );
    }

    #[test]
    fn myself_for_object_requester() {
        let world = world();
        let door = ScriptObject::door(ObjectId::new(4), AREA, IVec2::ZERO);
        let ctx = ResolveContext::new(&world, Requester::Object(&door), ResolverConfig::default());

        let out = myself(&ctx, prior(), TargetFlags::all());
        assert_eq!(out.actor_ids().count(), 0);
        assert!(out.contains(TargetRef::Object(ObjectId::new(4))));
    }

    #[test]
    fn myself_rejected_by_flags_is_empty() {
        let mut world = world();
        world
            .get_mut(ActorId::new(1))
            .unwrap()
            .set_state(ActorState::DEAD, true);
        let me = world.get(ActorId::new(1)).unwrap();
        let ctx = ResolveContext::new(&world, Requester::Actor(me), ResolverConfig::default());

        assert!(myself(&ctx, prior(), TargetFlags::NO_DEAD).is_empty());
    }

    #[test]
    fn nothing_is_empty() {
        let world = world();
        let me = world.get(ActorId::new(1)).unwrap();
        let ctx = ResolveContext::new(&world, Requester::Actor(me), ResolverConfig::default());

        assert!(nothing(&ctx, prior(), TargetFlags::empty()).is_empty());
    }

    #[test]
    fn gabber_follows_speaker() {
        let mut world = world();
        {
            let me = world.get(ActorId::new(1)).unwrap();
            let ctx = ResolveContext::new(&world, Requester::Actor(me), ResolverConfig::default());
            assert!(gabber(&ctx, prior(), TargetFlags::empty()).is_empty());
        }

        world.set_speaker(Some(ActorId::new(2)));
        let me = world.get(ActorId::new(1)).unwrap();
        let ctx = ResolveContext::new(&world, Requester::Actor(me), ResolverConfig::default());
        let out = gabber(&ctx, Targets::new(), TargetFlags::empty());
        assert_eq!(out.actor_ids().collect::<Vec<_>>(), vec![ActorId::new(2)]);
    }
}
