//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the survivor, companion, hostiles, and salvage nodes with
//! appropriate component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ruinsong_core::components::*;
use ruinsong_core::constants::*;
use ruinsong_core::enums::{BehaviorState, EnemyVariant, ResourceKind};
use ruinsong_core::types::Transform;

use ruinsong_enemy_ai::profiles::get_profile;

/// Set up a fresh episode: survivor at the landing pad, companion at
/// its orbit point, and a few seeded salvage nodes. Hostiles arrive
/// later through the spawn director. Returns the survivor entity.
pub fn setup_episode(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let survivor = spawn_survivor(world);
    spawn_companion(world);
    for _ in 0..INITIAL_SALVAGE_NODES {
        spawn_salvage_node(world, rng);
    }
    survivor
}

/// Spawn the survivor at the origin with full vitals and gauges.
pub fn spawn_survivor(world: &mut World) -> hecs::Entity {
    world.spawn((
        Survivor,
        Transform::new(Vec3::ZERO, 0.0),
        MoveState::default(),
        CombatTimers::default(),
        Health::full(PLAYER_MAX_HEALTH),
        Shield::full(PLAYER_MAX_SHIELD),
        ruinsong_survival::stats::SurvivalLedger::default(),
        ruinsong_survival::inventory::Inventory::default(),
    ))
}

/// Spawn the companion drone at its orbit point beside the survivor.
pub fn spawn_companion(world: &mut World) -> hecs::Entity {
    let start = Vec3::new(COMPANION_ORBIT_DISTANCE, COMPANION_VERTICAL_OFFSET, 0.0);
    world.spawn((
        Companion,
        Transform::new(start, 0.0),
        CompanionRig {
            attack_timer: COMPANION_ATTACK_INTERVAL,
            support_timer: COMPANION_SUPPORT_INTERVAL,
        },
    ))
}

/// Spawn one hostile at a random arena edge. Light variants start on
/// patrol toward a random interior waypoint; the heavy variant is
/// permanently engaged.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    variant: EnemyVariant,
) -> hecs::Entity {
    let profile = get_profile(variant);
    let state = if profile.always_engaged {
        BehaviorState::Engage
    } else {
        BehaviorState::Patrol
    };
    world.spawn((
        Hostile,
        Transform::new(random_edge_point(rng), 0.0),
        EnemyMind {
            variant,
            state,
            waypoint: random_interior_point(rng),
            attack_timer: 0.0,
        },
        Health::full(profile.max_health),
    ))
}

/// Spawn a salvage node of a random field kind at a random interior
/// point.
pub fn spawn_salvage_node(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let kind = ResourceKind::SPAWNABLE[rng.gen_range(0..ResourceKind::SPAWNABLE.len())];
    world.spawn((
        SalvageNode { kind },
        Transform::new(random_interior_point(rng), 0.0),
    ))
}

/// Sample a random point inside the arena.
pub fn random_interior_point(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-ARENA_HALF_EXTENT..ARENA_HALF_EXTENT),
        0.0,
        rng.gen_range(-ARENA_HALF_EXTENT..ARENA_HALF_EXTENT),
    )
}

/// Sample a random point on the arena boundary.
pub fn random_edge_point(rng: &mut ChaCha8Rng) -> Vec3 {
    let edge = if rng.gen_bool(0.5) {
        ARENA_HALF_EXTENT
    } else {
        -ARENA_HALF_EXTENT
    };
    let along = rng.gen_range(-ARENA_HALF_EXTENT..ARENA_HALF_EXTENT);
    if rng.gen_bool(0.5) {
        Vec3::new(edge, 0.0, along)
    } else {
        Vec3::new(along, 0.0, edge)
    }
}
