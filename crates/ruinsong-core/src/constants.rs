//! Simulation constants and tuning parameters.

use crate::enums::SurvivalStat;

// --- Arena ---

/// Half the side length of the square arena (meters).
pub const ARENA_HALF_EXTENT: f32 = 32.0;

// --- Survival gauges ---

/// Maximum value of every survival gauge.
pub const STAT_MAX: f32 = 100.0;

/// A gauge at or below this value is flagged critical on the HUD.
pub const STAT_CRITICAL_THRESHOLD: f32 = 20.0;

/// Damage per second inflicted by each fully depleted gauge.
/// Multiple depleted gauges each apply their own damage.
pub const STAT_DAMAGE_PER_SECOND: f32 = 6.0;

/// Passive decay rate of a gauge, in points per minute.
pub const fn decay_per_minute(stat: SurvivalStat) -> f32 {
    match stat {
        SurvivalStat::Oxygen => 8.0,
        SurvivalStat::Energy => 5.0,
        SurvivalStat::Temperature => 4.0,
        SurvivalStat::Nutrition => 3.5,
    }
}

// --- Survivor ---

/// Survivor maximum health.
pub const PLAYER_MAX_HEALTH: f32 = 120.0;

/// Survivor maximum shield. Shields absorb damage before health.
pub const PLAYER_MAX_SHIELD: f32 = 40.0;

/// Base movement speed (m/s).
pub const PLAYER_SPEED: f32 = 6.0;

/// Speed multiplier while sprinting with non-zero Energy.
pub const SPRINT_MULTIPLIER: f32 = 1.6;

/// Energy drained per second of sprinting.
pub const SPRINT_ENERGY_DRAIN_PER_SEC: f32 = 12.0;

/// Velocity blend rate while accelerating toward the input direction.
/// Applied as `min(1, rate * dt)` per frame.
pub const PLAYER_ACCEL_RATE: f32 = 9.0;

/// Velocity blend rate while coasting to a stop. Lower than the
/// acceleration rate, so stopping has some glide.
pub const PLAYER_DECEL_RATE: f32 = 5.0;

// --- Melee ---

/// Seconds between melee swings.
pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.8;

/// Maximum melee reach (meters).
pub const PLAYER_ATTACK_RANGE: f32 = 3.0;

/// Cosine threshold of the forward attack cone. Targets outside the
/// cone cannot be hit by melee.
pub const PLAYER_ATTACK_ARC: f32 = 0.75;

/// Base melee damage before skill modifiers.
pub const PLAYER_MELEE_DAMAGE: f32 = 18.0;

// --- Ranged ---

/// Seconds between ranged shots.
pub const PLAYER_RANGED_COOLDOWN: f32 = 2.5;

/// Maximum ranged reach (meters). No facing cone applies.
pub const PLAYER_RANGED_RANGE: f32 = 9.0;

/// Flat ranged damage.
pub const PLAYER_RANGED_DAMAGE: f32 = 10.0;

// --- Dash ---

/// Base dash cooldown before skill modifiers.
pub const DASH_COOLDOWN: f32 = 6.0;

/// Hard floor on the dash cooldown after modifiers.
pub const DASH_COOLDOWN_MIN: f32 = 2.0;

/// Forward translation applied by a dash (meters).
pub const DASH_DISTANCE: f32 = 4.5;

// --- Companion ---

/// Orbit offset along the survivor's right vector (meters).
pub const COMPANION_ORBIT_DISTANCE: f32 = 3.5;

/// Orbit hover height above the survivor (meters).
pub const COMPANION_VERTICAL_OFFSET: f32 = 1.6;

/// Position blend rate toward the orbit point, `min(1, rate * dt)`.
pub const COMPANION_GLIDE_RATE: f32 = 2.5;

/// Seconds between companion shots. The timer resets on expiry even
/// when no target was in range.
pub const COMPANION_ATTACK_INTERVAL: f32 = 4.0;

/// Companion weapon reach (meters).
pub const COMPANION_ATTACK_RANGE: f32 = 12.0;

/// Flat companion shot damage.
pub const COMPANION_SHOT_DAMAGE: f32 = 12.0;

/// Seconds between companion support pulses.
pub const COMPANION_SUPPORT_INTERVAL: f32 = 10.0;

/// Energy restored to the survivor per support pulse.
pub const COMPANION_SUPPORT_AMOUNT: f32 = 12.0;

// --- Hostiles ---

/// Distance at which a patrolling hostile locks onto the survivor.
pub const ENGAGE_RADIUS: f32 = 10.0;

/// Distance beyond which an engaged hostile gives up the chase.
/// Strictly larger than the engage radius so the transition has a
/// hysteresis band and cannot oscillate at a single threshold.
pub const DISENGAGE_RADIUS: f32 = 14.0;

/// Fraction of full speed used while patrolling.
pub const PATROL_SPEED_FACTOR: f32 = 0.45;

/// A patrolling hostile within this distance of its waypoint picks a
/// new one.
pub const WAYPOINT_TOLERANCE: f32 = 0.75;

/// An engaged hostile stops closing once within this distance.
pub const CONTACT_TOLERANCE: f32 = 0.1;

/// Experience granted to the survivor per hostile destroyed.
pub const EXPERIENCE_PER_KILL: f32 = 25.0;

// --- Spawning ---

/// Seconds between hostile spawn attempts.
pub const ENEMY_SPAWN_INTERVAL: f32 = 12.0;

/// Seconds between salvage node spawn attempts.
pub const RESOURCE_SPAWN_INTERVAL: f32 = 8.0;

/// Hostile population cap. At the cap the spawn timer goes negative
/// and the spawn is deferred, not accumulated.
pub const MAX_HOSTILES: usize = 6;

/// Salvage node population cap.
pub const MAX_SALVAGE_NODES: usize = 10;

/// Salvage nodes seeded when an episode starts.
pub const INITIAL_SALVAGE_NODES: usize = 3;

/// Probability that a hostile spawn rolls the heavy variant. At most
/// one heavy may be alive at a time.
pub const HEAVY_SPAWN_CHANCE: f64 = 0.15;

// --- Salvage ---

/// Gather reach around the survivor (meters).
pub const GATHER_RADIUS: f32 = 2.0;

/// Scrap granted per gathered scrap node.
pub const SCRAP_PICKUP_AMOUNT: u32 = 2;

/// Gauge points restored by a gathered canister, before the item-heal
/// skill modifier.
pub const CANISTER_RESTORE_AMOUNT: f32 = 25.0;

// --- Progression ---

/// Experience required per level.
pub const EXPERIENCE_PER_LEVEL: f32 = 100.0;

/// Skill points granted per level-up.
pub const SKILL_POINTS_PER_LEVEL: u32 = 1;

// --- Notices ---

/// Seconds a notice stays on the HUD.
pub const NOTICE_DURATION_SECS: f32 = 5.0;

/// Maximum notices retained in the rolling log.
pub const NOTICE_LOG_CAP: usize = 5;
