//! ECS components for hecs entities.
//!
//! Components are plain data structs; game logic lives in systems.
//! `Transform` (defined in types.rs) is used as a component too.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorState, EnemyVariant, ResourceKind};

/// Marks the player-controlled survivor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Survivor;

/// Marks a hostile purge unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks the survivor's companion drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Companion;

/// Hit points. Entities are evicted by the engine once current
/// reaches zero, never by themselves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Regenless shield layer that absorbs damage before health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shield {
    pub current: f32,
    pub max: f32,
}

impl Shield {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Survivor movement state carried between frames for the
/// acceleration/deceleration blend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveState {
    pub velocity: Vec3,
}

/// Survivor attack and dash cooldown timers, counting down to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatTimers {
    pub melee: f32,
    pub ranged: f32,
    pub dash: f32,
}

/// Behavior state of one hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyMind {
    pub variant: EnemyVariant,
    pub state: BehaviorState,
    /// Current patrol destination.
    pub waypoint: Vec3,
    /// Seconds until the next attack is allowed.
    pub attack_timer: f32,
}

/// Companion cooldown pair. Both timers reset to their configured
/// interval on expiry whether or not they found a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompanionRig {
    pub attack_timer: f32,
    pub support_timer: f32,
}

/// A gatherable field node. Destroyed on gather.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalvageNode {
    pub kind: ResourceKind,
}
