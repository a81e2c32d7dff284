//! Companion drone update.
//!
//! Glides toward an orbit point beside the survivor, periodically
//! fires at the nearest hostile in range, and periodically restores
//! the survivor's Energy gauge. Both timers reset to their configured
//! interval on expiry even when the shot found no target; a wasted
//! volley is not retried.

use glam::Vec3;
use hecs::{Entity, World};

use ruinsong_core::components::{Companion, CompanionRig, Hostile};
use ruinsong_core::constants::*;
use ruinsong_core::enums::SurvivalStat;
use ruinsong_core::types::{yaw_toward, Transform};

use ruinsong_survival::stats::SurvivalLedger;

use crate::systems::damage;

/// Run the companion update for one frame.
pub fn run(world: &mut World, survivor: Entity, dt: f32) {
    let (orbit_target, survivor_pos) = match world.get::<&Transform>(survivor) {
        Ok(tf) => (
            tf.position + tf.right() * COMPANION_ORBIT_DISTANCE
                + Vec3::Y * COMPANION_VERTICAL_OFFSET,
            tf.position,
        ),
        Err(_) => return,
    };

    let mut fire_from: Option<Vec3> = None;
    let mut support = false;

    for (_entity, (_companion, tf, rig)) in
        world.query_mut::<(&Companion, &mut Transform, &mut CompanionRig)>()
    {
        tf.position = tf.position.lerp(orbit_target, (COMPANION_GLIDE_RATE * dt).min(1.0));
        tf.yaw_degrees = yaw_toward(tf.position, survivor_pos);

        rig.attack_timer -= dt;
        if rig.attack_timer <= 0.0 {
            fire_from = Some(tf.position);
            rig.attack_timer = COMPANION_ATTACK_INTERVAL;
        }

        rig.support_timer -= dt;
        if rig.support_timer <= 0.0 {
            support = true;
            rig.support_timer = COMPANION_SUPPORT_INTERVAL;
        }
    }

    if let Some(origin) = fire_from {
        if let Some(target) = closest_hostile(world, origin, COMPANION_ATTACK_RANGE) {
            damage::inflict(world, target, COMPANION_SHOT_DAMAGE);
        }
    }

    if support {
        if let Ok(mut ledger) = world.get::<&mut SurvivalLedger>(survivor) {
            ledger.restore(SurvivalStat::Energy, COMPANION_SUPPORT_AMOUNT);
        }
    }
}

/// Nearest hostile within `max_range` of a point, if any.
pub fn closest_hostile(world: &World, origin: Vec3, max_range: f32) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, (tf, _hostile)) in world.query::<(&Transform, &Hostile)>().iter() {
        let delta = tf.position - origin;
        let distance = Vec3::new(delta.x, 0.0, delta.z).length();
        if distance > max_range {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }
    best.map(|(entity, _)| entity)
}
