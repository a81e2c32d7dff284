//! Spawn director: time-budgeted population control for hostiles and
//! salvage nodes.
//!
//! Two independent countdown timers. On expiry with the population
//! below its cap, one unit spawns and the timer resets; at the cap
//! the timer keeps running negative and the spawn happens as soon as
//! room opens up. Missed intervals are not accumulated.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ruinsong_core::components::{EnemyMind, Hostile, SalvageNode};
use ruinsong_core::constants::*;
use ruinsong_core::enums::EnemyVariant;
use ruinsong_core::events::NoticeLog;

use crate::world_setup;

/// Countdown state owned by the engine.
#[derive(Debug, Clone, Copy)]
pub struct SpawnDirector {
    pub enemy_timer: f32,
    pub resource_timer: f32,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self {
            enemy_timer: ENEMY_SPAWN_INTERVAL,
            resource_timer: RESOURCE_SPAWN_INTERVAL,
        }
    }
}

/// Run both spawn budgets for one frame.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut SpawnDirector,
    notices: &mut NoticeLog,
    dt: f32,
) {
    director.enemy_timer -= dt;
    if director.enemy_timer <= 0.0 {
        let population = world.query::<&Hostile>().iter().count();
        if population < MAX_HOSTILES {
            let variant = roll_variant(world, rng);
            world_setup::spawn_hostile(world, rng, variant);
            notices.push(match variant {
                EnemyVariant::Stinger => "Alert: purge drone inbound",
                EnemyVariant::Goliath => "Warning: purge warden deployed",
            });
            director.enemy_timer = ENEMY_SPAWN_INTERVAL;
        }
    }

    director.resource_timer -= dt;
    if director.resource_timer <= 0.0 {
        let population = world.query::<&SalvageNode>().iter().count();
        if population < MAX_SALVAGE_NODES {
            world_setup::spawn_salvage_node(world, rng);
            notices.push("Scan: salvage signature detected");
            director.resource_timer = RESOURCE_SPAWN_INTERVAL;
        }
    }
}

/// Weighted variant roll: a low chance of the heavy warden, subject
/// to at most one alive at a time.
fn roll_variant(world: &World, rng: &mut ChaCha8Rng) -> EnemyVariant {
    let goliath_alive = world
        .query::<&EnemyMind>()
        .iter()
        .any(|(_, mind)| mind.variant == EnemyVariant::Goliath);
    if !goliath_alive && rng.gen_bool(HEAVY_SPAWN_CHANCE) {
        EnemyVariant::Goliath
    } else {
        EnemyVariant::Stinger
    }
}
