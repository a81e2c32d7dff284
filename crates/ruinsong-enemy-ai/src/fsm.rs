//! Hostile behavior finite state machine.
//!
//! Pure functions that compute state transitions, movement, and attack
//! decisions for hostile entities. No ECS dependency and no randomness:
//! when a patroller needs a fresh waypoint it asks for one via
//! `needs_waypoint` and the caller samples it.

use glam::Vec3;

use ruinsong_core::constants::{
    CONTACT_TOLERANCE, DISENGAGE_RADIUS, ENGAGE_RADIUS, PATROL_SPEED_FACTOR, WAYPOINT_TOLERANCE,
};
use ruinsong_core::enums::{BehaviorState, EnemyVariant};

use crate::profiles::get_profile;

/// Input to the hostile FSM for a single entity and frame.
pub struct EnemyContext {
    pub variant: EnemyVariant,
    pub state: BehaviorState,
    pub position: Vec3,
    pub waypoint: Vec3,
    pub survivor_position: Vec3,
    /// Seconds until the next attack is allowed, before this frame.
    pub attack_timer: f32,
    pub dt: f32,
}

/// Output from the hostile FSM.
pub struct EnemyUpdate {
    pub new_state: BehaviorState,
    /// Displacement to apply this frame.
    pub displacement: Vec3,
    /// Point to turn toward, if the entity should re-face.
    pub face_toward: Option<Vec3>,
    /// The patroller arrived at its waypoint and needs a new one.
    pub needs_waypoint: bool,
    /// Damage to apply to the survivor this frame, if an attack fired.
    pub attack_damage: Option<f32>,
    /// Attack timer after this frame.
    pub attack_timer: f32,
}

/// Evaluate the FSM for one hostile over one frame.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.variant);
    let distance = ground_distance(ctx.position, ctx.survivor_position);

    let new_state = next_state(ctx.state, distance, profile.always_engaged);

    // Cooldown counts down linearly and clamps at zero; an attack can
    // only fire in a frame where it sits at zero.
    let timer = (ctx.attack_timer - ctx.dt).max(0.0);

    match new_state {
        BehaviorState::Patrol => evaluate_patrol(ctx, profile.speed, timer),
        BehaviorState::Engage => evaluate_engage(ctx, &profile, distance, timer),
    }
}

/// State transition with hysteresis: engage inside the engage radius,
/// give up only beyond the strictly larger disengage radius. Inside
/// the band the prior state persists.
fn next_state(state: BehaviorState, distance: f32, always_engaged: bool) -> BehaviorState {
    if always_engaged {
        return BehaviorState::Engage;
    }
    match state {
        BehaviorState::Patrol if distance < ENGAGE_RADIUS => BehaviorState::Engage,
        BehaviorState::Engage if distance > DISENGAGE_RADIUS => BehaviorState::Patrol,
        _ => state,
    }
}

fn evaluate_patrol(ctx: &EnemyContext, speed: f32, timer: f32) -> EnemyUpdate {
    let to_waypoint = flatten(ctx.waypoint - ctx.position);
    let remaining = to_waypoint.length();

    if remaining <= WAYPOINT_TOLERANCE {
        return EnemyUpdate {
            new_state: BehaviorState::Patrol,
            displacement: Vec3::ZERO,
            face_toward: None,
            needs_waypoint: true,
            attack_damage: None,
            attack_timer: timer,
        };
    }

    let step = (speed * PATROL_SPEED_FACTOR * ctx.dt).min(remaining);
    EnemyUpdate {
        new_state: BehaviorState::Patrol,
        displacement: to_waypoint / remaining * step,
        face_toward: Some(ctx.waypoint),
        needs_waypoint: false,
        attack_damage: None,
        attack_timer: timer,
    }
}

fn evaluate_engage(
    ctx: &EnemyContext,
    profile: &crate::profiles::VariantProfile,
    distance: f32,
    timer: f32,
) -> EnemyUpdate {
    let to_survivor = flatten(ctx.survivor_position - ctx.position);

    // Close until within contact tolerance, never overshooting.
    let displacement = if distance > CONTACT_TOLERANCE {
        let step = (profile.speed * ctx.dt).min(distance - CONTACT_TOLERANCE);
        to_survivor / distance * step
    } else {
        Vec3::ZERO
    };

    let (attack_damage, attack_timer) = if distance <= profile.attack_range && timer == 0.0 {
        (Some(profile.attack_damage), profile.attack_cooldown)
    } else {
        (None, timer)
    };

    EnemyUpdate {
        new_state: BehaviorState::Engage,
        displacement,
        face_toward: Some(ctx.survivor_position),
        needs_waypoint: false,
        attack_damage,
        attack_timer,
    }
}

fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    flatten(b - a).length()
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
