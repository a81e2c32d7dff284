//! Game snapshot — the complete visible state handed to the
//! presentation layer after each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::SimTime;

/// Complete render-friendly state built after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: EpisodePhase,
    pub survivor: SurvivorView,
    pub gauges: Vec<GaugeView>,
    pub progression: ProgressionView,
    pub skills: Vec<SkillView>,
    /// Inventory summary lines, sorted by label for stable display.
    pub inventory: Vec<String>,
    /// Rolling notice log, oldest first.
    pub notices: Vec<String>,
    /// Active mission title, description, and per-requirement progress.
    pub missions: Vec<String>,
    pub crafting: CraftingView,
    pub companion: CompanionView,
    pub hostiles: Vec<HostileView>,
    pub salvage: Vec<SalvageView>,
    pub stats: RunStatsView,
}

/// Survivor pose and vitals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivorView {
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub health: f32,
    pub max_health: f32,
    pub shield: f32,
    pub max_shield: f32,
    pub asset_key: String,
}

impl Default for SurvivorView {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_degrees: 0.0,
            health: 0.0,
            max_health: 0.0,
            shield: 0.0,
            max_shield: 0.0,
            asset_key: "survivor_rig".to_string(),
        }
    }
}

/// One survival gauge reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaugeView {
    pub stat: SurvivalStat,
    pub value: f32,
    pub critical: bool,
}

/// Level, experience, and unspent skill points.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProgressionView {
    pub level: u32,
    pub experience: f32,
    pub experience_per_level: f32,
    pub points: u32,
}

/// One skill row for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillView {
    pub name: String,
    pub description: String,
    pub unlocked: bool,
}

/// Crafting menu state. Options list only the currently affordable
/// recipes, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftingView {
    pub open: bool,
    pub options: Vec<CraftOptionView>,
}

/// One affordable recipe line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftOptionView {
    pub name: String,
    pub scrap_cost: u32,
    pub description: String,
}

/// Companion drone pose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionView {
    pub position: Vec3,
    pub asset_key: String,
}

impl Default for CompanionView {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            asset_key: "companion_drone".to_string(),
        }
    }
}

/// One hostile for the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub variant: EnemyVariant,
    pub state: BehaviorState,
    pub health: f32,
    pub max_health: f32,
    pub asset_key: String,
}

/// One salvage node for the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalvageView {
    pub position: Vec3,
    pub kind: ResourceKind,
    pub asset_key: String,
}

/// Running episode statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStatsView {
    pub enemies_defeated: u32,
    pub elapsed_secs: f32,
}
