//! Hostile update system.
//!
//! Calls the behavior FSM from ruinsong-enemy-ai for each hostile,
//! applies its movement and state decisions, samples fresh patrol
//! waypoints where requested, and routes attack damage to the
//! survivor through the shield.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use ruinsong_core::components::{EnemyMind, Hostile};
use ruinsong_core::types::{yaw_toward, ArenaBounds, Transform};

use ruinsong_enemy_ai::fsm::{evaluate, EnemyContext};

use crate::systems::damage;
use crate::world_setup;

/// Run the hostile update for one frame.
pub fn run(
    world: &mut World,
    survivor: Entity,
    rng: &mut ChaCha8Rng,
    bounds: ArenaBounds,
    dt: f32,
) {
    let survivor_position = match world.get::<&Transform>(survivor) {
        Ok(tf) => tf.position,
        Err(_) => return,
    };

    let mut total_damage = 0.0;

    for (_entity, (_hostile, tf, mind)) in
        world.query_mut::<(&Hostile, &mut Transform, &mut EnemyMind)>()
    {
        let ctx = EnemyContext {
            variant: mind.variant,
            state: mind.state,
            position: tf.position,
            waypoint: mind.waypoint,
            survivor_position,
            attack_timer: mind.attack_timer,
            dt,
        };
        let update = evaluate(&ctx);

        mind.state = update.new_state;
        mind.attack_timer = update.attack_timer;
        if update.needs_waypoint {
            mind.waypoint = world_setup::random_interior_point(rng);
        }
        tf.position = bounds.clamp(tf.position + update.displacement);
        if let Some(target) = update.face_toward {
            tf.yaw_degrees = yaw_toward(tf.position, target);
        }
        if let Some(amount) = update.attack_damage {
            total_damage += amount;
        }
    }

    if total_damage > 0.0 {
        damage::inflict(world, survivor, total_damage);
    }
}
