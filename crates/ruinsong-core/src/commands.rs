//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are validated and queued for processing at the next frame
//! boundary. Movement and sprint are level state; attacks, dash, and
//! gather are edge-triggered and latch until consumed.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Set the movement axes. Values are clamped to [-1, 1].
    Move { x: f32, z: f32 },
    /// Turn by a yaw delta in degrees.
    Aim { delta_degrees: f32 },
    /// Set whether the sprint key is held.
    SetSprint { active: bool },
    /// Dash forward (edge-triggered).
    Dash,

    // --- Combat ---
    /// Swing melee (edge-triggered; a held button does not repeat).
    MeleeAttack,
    /// Fire the ranged weapon (edge-triggered).
    RangedAttack,

    // --- Economy ---
    /// Gather the nearest salvage node in reach.
    Gather,
    /// Open or close the crafting menu.
    ToggleCrafting,
    /// Craft the indexed option from the open crafting menu.
    CraftSelect { index: usize },
    /// Spend a skill point on the indexed skill.
    UnlockSkill { index: usize },

    // --- Episode control ---
    /// Discard the episode and start fresh.
    Reset,
}
