//! Ordinal resolvers: the k-th nearest of some candidate sequence.
//!
//! Every family reduces to [`xth_nearest_of`], which picks the k-th actor of
//! a Target Set that is already in distance order. The families differ only
//! in how the candidates are built:
//!
//! | Family                   | Candidates                                        |
//! |--------------------------|---------------------------------------------------|
//! | `Nearest`                | the incoming set                                  |
//! | `NearestEnemyOf`         | visible opponents of the first actor in the set   |
//! | `NearestEnemyOfType`     | the incoming set minus the requester's own side   |
//! | `NearestMyGroupOfType`   | the incoming set sharing the requester's specific |
//! | `NearestDoor`            | doors in the area of the first entry              |
//!
//! A rank past the end of the candidates gives an empty set.

use serde::{Deserialize, Serialize};
use std::fmt;

use census::stats::{ea, gender};
use census::{Actor, Located, ObjectKind, Stat};

use crate::distance::{distance, distance_between};
use crate::flags::TargetFlags;
use crate::matching::Side;
use crate::target::{KindFilter, Targets};

use super::ResolveContext;

/// Which candidate to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ordinal {
    /// 0-based rank from the nearest.
    Nth(usize),
    /// The last candidate.
    Last,
}

impl Ordinal {
    /// The nearest candidate.
    pub const NEAREST: Ordinal = Ordinal::Nth(0);
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nth(k) => write!(f, "#{k}"),
            Self::Last => write!(f, "last"),
        }
    }
}

/// `Nearest` family: the ranked actor of the incoming set, at distance 0.
///
/// The set is expected in distance order, as [`Targets::add`] keeps it.
/// Entries that are not actors do not count towards the rank.
#[must_use]
pub fn xth_nearest_of(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    ordinal: Ordinal,
    flags: TargetFlags,
) -> Targets {
    let actors = ctx.actors(&targets);
    let picked = match ordinal {
        Ordinal::Nth(k) => actors.get(k).copied(),
        Ordinal::Last => actors.last().copied(),
    };
    targets.clear();
    if let Some(actor) = picked {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `Farthest`: the last actor of the incoming set.
#[must_use]
pub fn farthest(ctx: &ResolveContext<'_>, targets: Targets, flags: TargetFlags) -> Targets {
    xth_nearest_of(ctx, targets, Ordinal::Last, flags)
}

/// `NearestEnemyOf` family and `FarthestEnemyOf`.
///
/// The origin is the first actor of the incoming set. Candidates are the
/// visible actors in the origin's area on the opposite side of the allegiance
/// scale, ranked by distance from the origin. A neutral origin has no
/// enemies.
#[must_use]
pub fn xth_nearest_enemy_of(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    ordinal: Ordinal,
    flags: TargetFlags,
) -> Targets {
    let origin = ctx.first_actor(&targets);
    targets.clear();
    let Some(origin) = origin else {
        return targets;
    };
    let Some(opponent) = Side::of(origin).opponent() else {
        return targets;
    };

    for actor in ctx.directory().area_actors(origin.area(), true) {
        if actor.id() == origin.id() || Side::of(actor) != opponent {
            continue;
        }
        targets.add_actor(actor, distance_between(origin, actor), flags);
    }
    xth_nearest_of(ctx, targets, ordinal, flags)
}

/// `NearestEnemyOfType` family: the ranked enemy of the requester within the
/// incoming set.
///
/// Only the requester's own side is removed, so neutrals count as enemies
/// here. A neutral requester has no enemies.
#[must_use]
pub fn xth_nearest_enemy_of_type(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    ordinal: Ordinal,
    flags: TargetFlags,
) -> Targets {
    let Some(me) = typed_requester(ctx, &mut targets) else {
        return targets;
    };
    let side = Side::of(me);
    if side == Side::Neutral {
        targets.clear();
        return targets;
    }

    retain_actors(ctx, &mut targets, |actor| hostile_to(side, actor));
    xth_nearest_of(ctx, targets, ordinal, flags)
}

/// `NearestMyGroupOfType` family: the ranked actor of the incoming set
/// sharing the requester's specific category.
#[must_use]
pub fn xth_nearest_my_group_of_type(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    ordinal: Ordinal,
    flags: TargetFlags,
) -> Targets {
    let Some(me) = typed_requester(ctx, &mut targets) else {
        return targets;
    };
    let specific = me.stat(Stat::Specific);

    retain_actors(ctx, &mut targets, |actor| actor.stat(Stat::Specific) == specific);
    xth_nearest_of(ctx, targets, ordinal, flags)
}

/// `NearestEnemySummoned`: the nearest summoned creature of the incoming set
/// hostile to the requester, under the same side rule as
/// [`xth_nearest_enemy_of_type`].
#[must_use]
pub fn nearest_enemy_summoned(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    flags: TargetFlags,
) -> Targets {
    let Some(me) = typed_requester(ctx, &mut targets) else {
        return targets;
    };
    let side = Side::of(me);
    if side == Side::Neutral {
        targets.clear();
        return targets;
    }

    let picked = ctx
        .actors(&targets)
        .into_iter()
        .find(|actor| actor.stat(Stat::Gender) == gender::SUMMONED && hostile_to(side, actor));
    targets.clear();
    if let Some(actor) = picked {
        targets.add_actor(actor, 0, flags);
    }
    targets
}

/// `NearestDoor` family: the ranked door of the area the first entry of the
/// incoming set stands in, by distance from that entry.
///
/// Doors are never filtered, so `flags` is ignored.
#[must_use]
pub fn xth_nearest_door(
    ctx: &ResolveContext<'_>,
    mut targets: Targets,
    rank: usize,
    _flags: TargetFlags,
) -> Targets {
    let origin = targets
        .first(KindFilter::Any)
        .and_then(|entry| ctx.locate(entry.target));
    targets.clear();
    let Some((area, position)) = origin else {
        return targets;
    };

    let doors = ctx.directory().area_objects(area, ObjectKind::Door);
    if rank >= doors.len() {
        return targets;
    }

    let mut ranked = Targets::new();
    for door in doors {
        ranked.add_object(door, distance(position, door.position()), TargetFlags::empty());
    }
    if let Some(entry) = ranked.get(rank, KindFilter::Object) {
        targets.add(entry.target, 0, TargetFlags::empty());
    }
    targets
}

/// Shared guard of the "of type" families.
///
/// Returns the requester actor to continue with. Otherwise `targets` already
/// holds the result: cleared for a non-actor requester, untouched when it has
/// no actors to filter.
fn typed_requester<'a>(ctx: &ResolveContext<'a>, targets: &mut Targets) -> Option<&'a Actor> {
    let Some(me) = ctx.requester().as_actor() else {
        targets.clear();
        return None;
    };
    ctx.first_actor(targets)?;
    Some(me)
}

/// Keeps non-actor entries and the actors passing `keep`.
fn retain_actors<F>(ctx: &ResolveContext<'_>, targets: &mut Targets, keep: F)
where
    F: Fn(&Actor) -> bool,
{
    targets.retain(|entry| match entry.target.actor() {
        Some(id) => ctx.actor(id).is_some_and(&keep),
        None => true,
    });
}

/// Anyone not on `side` of the scale counts as hostile to it.
fn hostile_to(side: Side, actor: &Actor) -> bool {
    let value = actor.stat(Stat::Ea);
    match side {
        Side::Party => value > ea::GOODCUTOFF,
        Side::Enemy => value < ea::EVILCUTOFF,
        Side::Neutral => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::*;
    use census::{ActorId, ActorState, AreaId, ObjectId, ScriptObject, World};
    use glam::IVec2;

    use crate::config::ResolverConfig;
    use crate::requester::Requester;
    use crate::target::TargetRef;

    mod nearest_tests {
        use super::*;

        #[test]
        fn party_scenario_ranking() {
            let mut world = World::new();
            let (me, [a, b, c]) = setup_party_scenario(&mut world);
            let ctx = ctx(&world, me);
            let candidates = set_from(&world, me, &[a, b, c]);

            let nearest = xth_nearest_of(
                &ctx,
                candidates.clone(),
                Ordinal::Nth(0),
                TargetFlags::empty(),
            );
            let second = xth_nearest_of(
                &ctx,
                candidates.clone(),
                Ordinal::Nth(1),
                TargetFlags::empty(),
            );
            let last = farthest(&ctx, candidates, TargetFlags::empty());

            assert_eq!(ids(&nearest), vec![a.as_u32()]);
            assert_eq!(ids(&second), vec![c.as_u32()]);
            assert_eq!(ids(&last), vec![b.as_u32()]);
        }

        #[test]
        fn rank_past_end_is_empty() {
            let mut world = World::new();
            let (me, members) = setup_party_scenario(&mut world);
            let ctx = ctx(&world, me);

            for k in 3..10 {
                let out = xth_nearest_of(
                    &ctx,
                    set_from(&world, me, &members),
                    Ordinal::Nth(k),
                    TargetFlags::empty(),
                );
                assert!(out.is_empty(), "rank {k}");
            }
        }

        #[test]
        fn non_actor_entries_do_not_count() {
            let mut world = World::new();
            let me = spawn(&mut world, actor_at(100, 0, 0));
            let a = spawn(&mut world, actor_at(1, 5, 0));
            let ctx = ctx(&world, me);

            let mut set = Targets::new();
            set.add(TargetRef::Object(ObjectId::new(1)), 1, TargetFlags::empty());
            set.add(TargetRef::Actor(a), 5, TargetFlags::empty());

            assert_eq!(
                ids(&xth_nearest_of(&ctx, set, Ordinal::NEAREST, TargetFlags::empty())),
                vec![a.as_u32()]
            );
        }

        #[test]
        fn result_is_at_distance_zero() {
            let mut world = World::new();
            let (me, members) = setup_party_scenario(&mut world);
            let ctx = ctx(&world, me);

            let out = farthest(&ctx, set_from(&world, me, &members), TargetFlags::empty());
            assert_eq!(out.iter().map(|e| e.distance).collect::<Vec<_>>(), vec![0]);
        }
    }

    mod enemy_of_tests {
        use super::*;

        fn battlefield() -> (World, ActorId, [ActorId; 4]) {
            let mut world = World::new();
            let hero = spawn_ea(&mut world, 1, 0, 0, ea::PC);
            let far_orc = spawn_ea(&mut world, 2, 30, 0, ea::ENEMY);
            let near_orc = spawn_ea(&mut world, 3, 10, 0, ea::ENEMY);
            let farmer = spawn_ea(&mut world, 4, 5, 0, ea::NEUTRAL);
            let ally = spawn_ea(&mut world, 5, 2, 0, ea::ALLY);
            (world, hero, [far_orc, near_orc, farmer, ally])
        }

        #[test]
        fn ranks_opponents_by_distance_from_origin() {
            let (world, hero, [far_orc, near_orc, _, _]) = battlefield();
            let ctx = ctx(&world, hero);

            let first = xth_nearest_enemy_of(
                &ctx,
                set_of(&[hero]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            let second = xth_nearest_enemy_of(
                &ctx,
                set_of(&[hero]),
                Ordinal::Nth(1),
                TargetFlags::empty(),
            );
            let last = xth_nearest_enemy_of(
                &ctx,
                set_of(&[hero]),
                Ordinal::Last,
                TargetFlags::empty(),
            );
            let third = xth_nearest_enemy_of(
                &ctx,
                set_of(&[hero]),
                Ordinal::Nth(2),
                TargetFlags::empty(),
            );

            assert_eq!(ids(&first), vec![near_orc.as_u32()]);
            assert_eq!(ids(&second), vec![far_orc.as_u32()]);
            assert_eq!(ids(&last), vec![far_orc.as_u32()]);
            assert!(third.is_empty());
        }

        #[test]
        fn enemy_origin_finds_party_side() {
            let (world, hero, [_, near_orc, _, ally]) = battlefield();
            let ctx = ctx(&world, hero);

            let out = xth_nearest_enemy_of(
                &ctx,
                set_of(&[near_orc]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            // ally at 8, hero at 10 from the orc
            assert_eq!(ids(&out), vec![ally.as_u32()]);
        }

        #[test]
        fn neutral_origin_has_no_enemies() {
            let (world, hero, [_, _, farmer, _]) = battlefield();
            let ctx = ctx(&world, hero);

            let out = xth_nearest_enemy_of(
                &ctx,
                set_of(&[farmer]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert!(out.is_empty());
        }

        #[test]
        fn empty_set_has_no_origin() {
            let (world, hero, _) = battlefield();
            let ctx = ctx(&world, hero);

            let out = xth_nearest_enemy_of(
                &ctx,
                Targets::new(),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert!(out.is_empty());
        }

        #[test]
        fn invisible_and_dead_enemies_are_skipped() {
            let mut world = World::new();
            let hero = spawn_ea(&mut world, 1, 0, 0, ea::PC);
            spawn(
                &mut world,
                actor_at(2, 1, 0).with_stat(Stat::Ea, ea::ENEMY).with_state(ActorState::INVISIBLE),
            );
            spawn(
                &mut world,
                actor_at(3, 2, 0).with_stat(Stat::Ea, ea::ENEMY).with_state(ActorState::DEAD),
            );
            let seen = spawn_ea(&mut world, 4, 50, 0, ea::ENEMY);
            let ctx = ctx(&world, hero);

            let out = xth_nearest_enemy_of(
                &ctx,
                set_of(&[hero]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert_eq!(ids(&out), vec![seen.as_u32()]);
        }
    }

    mod of_type_tests {
        use super::*;

        #[test]
        fn party_requester_keeps_neutrals_and_enemies() {
            let mut world = World::new();
            let hero = spawn_ea(&mut world, 1, 0, 0, ea::PC);
            let ally = spawn_ea(&mut world, 2, 1, 0, ea::ALLY);
            let farmer = spawn_ea(&mut world, 3, 2, 0, ea::NEUTRAL);
            let orc = spawn_ea(&mut world, 4, 3, 0, ea::ENEMY);
            let ctx = ctx(&world, hero);
            let set = set_from(&world, hero, &[ally, farmer, orc]);

            let first = xth_nearest_enemy_of_type(
                &ctx,
                set.clone(),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            let second = xth_nearest_enemy_of_type(
                &ctx,
                set,
                Ordinal::Nth(1),
                TargetFlags::empty(),
            );
            assert_eq!(ids(&first), vec![farmer.as_u32()]);
            assert_eq!(ids(&second), vec![orc.as_u32()]);
        }

        #[test]
        fn enemy_requester_removes_enemies() {
            let mut world = World::new();
            let orc = spawn_ea(&mut world, 1, 0, 0, ea::ENEMY);
            let goblin = spawn_ea(&mut world, 2, 1, 0, ea::EVILBUTGREEN);
            let hero = spawn_ea(&mut world, 3, 9, 0, ea::PC);
            let ctx = ctx(&world, orc);

            let out = xth_nearest_enemy_of_type(
                &ctx,
                set_from(&world, orc, &[goblin, hero]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert_eq!(ids(&out), vec![hero.as_u32()]);
        }

        #[test]
        fn neutral_requester_is_empty() {
            let mut world = World::new();
            let farmer = spawn_ea(&mut world, 1, 0, 0, ea::NEUTRAL);
            let orc = spawn_ea(&mut world, 2, 1, 0, ea::ENEMY);
            let ctx = ctx(&world, farmer);

            let out = xth_nearest_enemy_of_type(
                &ctx,
                set_of(&[orc]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert!(out.is_empty());
        }

        #[test]
        fn set_without_actors_is_unchanged() {
            let mut world = World::new();
            let hero = spawn_ea(&mut world, 1, 0, 0, ea::PC);
            let ctx = ctx(&world, hero);

            let mut doors = Targets::new();
            doors.add(TargetRef::Object(ObjectId::new(3)), 2, TargetFlags::empty());

            assert_eq!(
                xth_nearest_enemy_of_type(
                    &ctx,
                    doors.clone(),
                    Ordinal::NEAREST,
                    TargetFlags::empty(),
                ),
                doors
            );
            assert_eq!(
                xth_nearest_my_group_of_type(
                    &ctx,
                    doors.clone(),
                    Ordinal::NEAREST,
                    TargetFlags::empty(),
                ),
                doors
            );
            assert_eq!(nearest_enemy_summoned(&ctx, doors.clone(), TargetFlags::empty()), doors);
        }

        #[test]
        fn object_requester_clears() {
            let mut world = World::new();
            let orc = spawn_ea(&mut world, 1, 0, 0, ea::ENEMY);
            let door = ScriptObject::door(ObjectId::new(1), AREA, IVec2::ZERO);
            let ctx = ResolveContext::new(
                &world,
                Requester::Object(&door),
                ResolverConfig::default(),
            );

            let out = xth_nearest_enemy_of_type(
                &ctx,
                set_of(&[orc]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert!(out.is_empty());
            let out = xth_nearest_my_group_of_type(
                &ctx,
                set_of(&[orc]),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            assert!(out.is_empty());
            assert!(nearest_enemy_summoned(&ctx, set_of(&[orc]), TargetFlags::empty()).is_empty());
        }

        #[test]
        fn my_group_filters_by_specific() {
            let mut world = World::new();
            let me = spawn(&mut world, actor_at(1, 0, 0).with_stat(Stat::Specific, 5));
            let kin_far = spawn(&mut world, actor_at(2, 20, 0).with_stat(Stat::Specific, 5));
            let stranger = spawn(&mut world, actor_at(3, 1, 0).with_stat(Stat::Specific, 6));
            let kin_near = spawn(&mut world, actor_at(4, 10, 0).with_stat(Stat::Specific, 5));
            let ctx = ctx(&world, me);
            let set = set_from(&world, me, &[kin_far, stranger, kin_near]);

            let nearest = xth_nearest_my_group_of_type(
                &ctx,
                set.clone(),
                Ordinal::NEAREST,
                TargetFlags::empty(),
            );
            let second = xth_nearest_my_group_of_type(
                &ctx,
                set,
                Ordinal::Nth(1),
                TargetFlags::empty(),
            );
            assert_eq!(ids(&nearest), vec![kin_near.as_u32()]);
            assert_eq!(ids(&second), vec![kin_far.as_u32()]);
        }

        #[test]
        fn summoned_enemy() {
            let mut world = World::new();
            let hero = spawn_ea(&mut world, 1, 0, 0, ea::PC);
            let orc = spawn_ea(&mut world, 2, 1, 0, ea::ENEMY);
            let my_summon = spawn(
                &mut world,
                actor_at(3, 2, 0)
                    .with_stat(Stat::Ea, ea::ALLY)
                    .with_stat(Stat::Gender, gender::SUMMONED),
            );
            let their_summon = spawn(
                &mut world,
                actor_at(4, 4, 0)
                    .with_stat(Stat::Ea, ea::ENEMY)
                    .with_stat(Stat::Gender, gender::SUMMONED),
            );
            let ctx = ctx(&world, hero);

            let out = nearest_enemy_summoned(
                &ctx,
                set_from(&world, hero, &[orc, my_summon, their_summon]),
                TargetFlags::empty(),
            );
            assert_eq!(ids(&out), vec![their_summon.as_u32()]);
        }
    }

    mod door_tests {
        use super::*;

        fn world_with_doors() -> (World, ActorId) {
            let mut world = World::new();
            let me = spawn(&mut world, actor_at(1, 0, 0));
            for (id, x) in [(10, 30), (11, 5), (12, 15)] {
                world
                    .spawn_object(ScriptObject::door(ObjectId::new(id), AREA, IVec2::new(x, 0)))
                    .unwrap();
            }
            world
                .spawn_object(ScriptObject::door(ObjectId::new(20), AreaId::new(9), IVec2::ZERO))
                .unwrap();
            (world, me)
        }

        #[test]
        fn ranks_doors_from_first_entry() {
            let (world, me) = world_with_doors();
            let ctx = ctx(&world, me);

            let nearest = xth_nearest_door(&ctx, set_of(&[me]), 0, TargetFlags::empty());
            let third = xth_nearest_door(&ctx, set_of(&[me]), 2, TargetFlags::empty());
            assert_eq!(
                nearest.first(KindFilter::Any).map(|e| e.target),
                Some(TargetRef::Object(ObjectId::new(11)))
            );
            assert_eq!(
                third.first(KindFilter::Any).map(|e| e.target),
                Some(TargetRef::Object(ObjectId::new(10)))
            );
        }

        #[test]
        fn rank_past_door_count_is_empty() {
            let (world, me) = world_with_doors();
            let ctx = ctx(&world, me);

            assert!(xth_nearest_door(&ctx, set_of(&[me]), 3, TargetFlags::empty()).is_empty());
        }

        #[test]
        fn empty_set_has_no_origin() {
            let (world, me) = world_with_doors();
            let ctx = ctx(&world, me);

            assert!(xth_nearest_door(&ctx, Targets::new(), 0, TargetFlags::empty()).is_empty());
        }

        #[test]
        fn door_origin_works() {
            let (world, me) = world_with_doors();
            let ctx = ctx(&world, me);

            let mut set = Targets::new();
            set.add(TargetRef::Object(ObjectId::new(10)), 0, TargetFlags::empty());
            // From (30, 0): door 10 itself, then 12 at 15, then 11 at 25.
            let second = xth_nearest_door(&ctx, set, 1, TargetFlags::all());
            assert_eq!(
                second.first(KindFilter::Any).map(|e| e.target),
                Some(TargetRef::Object(ObjectId::new(12)))
            );
        }
    }
}
