//! Survivor update: movement, gauge decay, cooldowns, and attack
//! attempts.
//!
//! Attack and dash triggers are edge latches set by the command
//! handler. Every attempt consumes its latch whether or not it found
//! a target, so a held button cannot repeat faster than the cooldown.

use glam::Vec3;
use hecs::{Entity, World};

use ruinsong_core::components::{CombatTimers, Hostile, MoveState};
use ruinsong_core::constants::*;
use ruinsong_core::enums::{ModifierKey, SurvivalStat};
use ruinsong_core::types::{ArenaBounds, Transform};

use ruinsong_survival::skills::SkillTree;
use ruinsong_survival::stats::SurvivalLedger;

use crate::engine::InputState;
use crate::systems::damage;

/// Run the survivor update for one frame.
pub fn run(
    world: &mut World,
    survivor: Entity,
    input: &mut InputState,
    skills: &SkillTree,
    bounds: ArenaBounds,
    dt: f32,
) {
    integrate(world, survivor, input, bounds, dt);

    if input.take_melee() {
        try_melee(world, survivor, skills);
    }
    if input.take_ranged() {
        try_ranged(world, survivor);
    }
    if input.take_dash() {
        try_dash(world, survivor, skills, bounds);
    }
}

/// Movement, aim, sprint drain, gauge decay, and cooldown countdown.
fn integrate(
    world: &mut World,
    survivor: Entity,
    input: &mut InputState,
    bounds: ArenaBounds,
    dt: f32,
) {
    let Ok((tf, mv, timers, ledger)) = world.query_one_mut::<(
        &mut Transform,
        &mut MoveState,
        &mut CombatTimers,
        &mut SurvivalLedger,
    )>(survivor) else {
        return;
    };

    tf.yaw_degrees = (tf.yaw_degrees + input.aim_delta).rem_euclid(360.0);
    input.aim_delta = 0.0;

    let x = input.move_x.clamp(-1.0, 1.0);
    let z = input.move_z.clamp(-1.0, 1.0);
    let direction = (tf.forward() * z + tf.right() * x).normalize_or_zero();

    let mut target_speed = PLAYER_SPEED;
    if input.sprint && direction != Vec3::ZERO && ledger.value(SurvivalStat::Energy) > 0.0 {
        target_speed *= SPRINT_MULTIPLIER;
        ledger.consume(SurvivalStat::Energy, SPRINT_ENERGY_DRAIN_PER_SEC * dt);
    }
    let desired = direction * target_speed;

    // Asymmetric exponential blend: snappier when accelerating into
    // input, softer when coasting to a stop.
    let rate = if desired != Vec3::ZERO {
        PLAYER_ACCEL_RATE
    } else {
        PLAYER_DECEL_RATE
    };
    mv.velocity = mv.velocity.lerp(desired, (rate * dt).min(1.0));
    tf.position = bounds.clamp(tf.position + mv.velocity * dt);

    ledger.tick(dt);

    timers.melee = (timers.melee - dt).max(0.0);
    timers.ranged = (timers.ranged - dt).max(0.0);
    timers.dash = (timers.dash - dt).max(0.0);
}

/// Melee swing: nearest hostile within reach and inside the forward
/// cone. The cooldown resets on every attempt, hit or miss.
fn try_melee(world: &mut World, survivor: Entity, skills: &SkillTree) {
    let Some((origin, forward)) = arm_attack(world, survivor, |t| &mut t.melee, PLAYER_ATTACK_COOLDOWN)
    else {
        return;
    };

    let mut best: Option<(Entity, f32)> = None;
    for (entity, (tf, _hostile)) in world.query::<(&Transform, &Hostile)>().iter() {
        let to_target = flatten(tf.position - origin);
        let distance = to_target.length();
        if distance <= 0.0 || distance > PLAYER_ATTACK_RANGE {
            continue;
        }
        if forward.dot(to_target / distance) < PLAYER_ATTACK_ARC {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }

    if let Some((target, _)) = best {
        let damage = PLAYER_MELEE_DAMAGE * (1.0 + skills.modifier(ModifierKey::MeleeBonus));
        damage::inflict(world, target, damage);
    }
}

/// Ranged shot: nearest hostile within the longer reach, no facing
/// restriction.
fn try_ranged(world: &mut World, survivor: Entity) {
    let Some((origin, _forward)) =
        arm_attack(world, survivor, |t| &mut t.ranged, PLAYER_RANGED_COOLDOWN)
    else {
        return;
    };

    let mut best: Option<(Entity, f32)> = None;
    for (entity, (tf, _hostile)) in world.query::<(&Transform, &Hostile)>().iter() {
        let distance = flatten(tf.position - origin).length();
        if distance > PLAYER_RANGED_RANGE {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }

    if let Some((target, _)) = best {
        damage::inflict(world, target, PLAYER_RANGED_DAMAGE);
    }
}

/// Dash: instant forward translation, re-clamped to the arena.
fn try_dash(world: &mut World, survivor: Entity, skills: &SkillTree, bounds: ArenaBounds) {
    let cooldown = effective_dash_cooldown(skills);
    let Ok((tf, timers)) = world.query_one_mut::<(&mut Transform, &mut CombatTimers)>(survivor)
    else {
        return;
    };
    if timers.dash > 0.0 {
        return;
    }
    timers.dash = cooldown;
    tf.position = bounds.clamp(tf.position + tf.forward() * DASH_DISTANCE);
}

/// Dash cooldown after the recovery modifier, never below the floor.
pub fn effective_dash_cooldown(skills: &SkillTree) -> f32 {
    (DASH_COOLDOWN - skills.modifier(ModifierKey::DashRecovery)).max(DASH_COOLDOWN_MIN)
}

/// Check the given cooldown and, if ready, reset it and return the
/// survivor's position and forward vector. Returns None while the
/// cooldown is still running.
fn arm_attack(
    world: &mut World,
    survivor: Entity,
    timer: fn(&mut CombatTimers) -> &mut f32,
    cooldown: f32,
) -> Option<(Vec3, Vec3)> {
    let (tf, timers) = world
        .query_one_mut::<(&Transform, &mut CombatTimers)>(survivor)
        .ok()?;
    let slot = timer(timers);
    if *slot > 0.0 {
        return None;
    }
    *slot = cooldown;
    Some((tf.position, tf.forward()))
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
