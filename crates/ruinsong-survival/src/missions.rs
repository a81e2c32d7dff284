//! Mission log: a fixed ordered list of objectives with requirement
//! thresholds and one-time reward payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ruinsong_core::enums::{MissionMetric, ResourceKind};

/// Aggregate statistics a mission is evaluated against: current
/// resource stocks plus cumulative counters.
pub type MissionProgress = HashMap<MissionMetric, u32>;

/// Static definition of one mission.
#[derive(Debug, Clone, Copy)]
pub struct MissionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static [(MissionMetric, u32)],
    pub reward_experience: f32,
    pub reward_resources: &'static [(ResourceKind, u32)],
}

/// The standard mission chain, in completion order.
pub const STANDARD_MISSIONS: &[MissionDef] = &[
    MissionDef {
        id: "stockpile",
        title: "Build a Stockpile",
        description: "Hoard scrap for hull repairs",
        requirements: &[(MissionMetric::ScrapHeld, 10)],
        reward_experience: 40.0,
        reward_resources: &[],
    },
    MissionDef {
        id: "thin-the-swarm",
        title: "Thin the Swarm",
        description: "Destroy purge drones",
        requirements: &[(MissionMetric::EnemiesDefeated, 8)],
        reward_experience: 60.0,
        reward_resources: &[(ResourceKind::Scrap, 6)],
    },
    MissionDef {
        id: "core-salvage",
        title: "Core Salvage",
        description: "Recover alloy cores from purge wardens",
        requirements: &[(MissionMetric::AlloyCoresHeld, 2)],
        reward_experience: 90.0,
        reward_resources: &[(ResourceKind::Scrap, 12)],
    },
];

/// Reward payload granted exactly once when a mission completes. The
/// caller routes each part to the right subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionReward {
    pub experience: f32,
    pub resources: Vec<(ResourceKind, u32)>,
}

/// One mission with its completion state. `completed` is monotonic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requirements: Vec<(MissionMetric, u32)>,
    pub reward: MissionReward,
    pub completed: bool,
}

impl Mission {
    /// True iff every requirement threshold is met (AND semantics).
    pub fn is_ready(&self, progress: &MissionProgress) -> bool {
        self.requirements
            .iter()
            .all(|(metric, target)| progress.get(metric).copied().unwrap_or(0) >= *target)
    }

    /// Fraction of requirements currently satisfied.
    pub fn progress(&self, progress: &MissionProgress) -> f32 {
        if self.requirements.is_empty() {
            return 1.0;
        }
        let met = self
            .requirements
            .iter()
            .filter(|(metric, target)| progress.get(metric).copied().unwrap_or(0) >= *target)
            .count();
        met as f32 / self.requirements.len() as f32
    }
}

/// Ordered mission list with a single active entry: the first mission
/// not yet completed, or none once all are done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionLog {
    pub missions: Vec<Mission>,
    active: Option<usize>,
}

impl MissionLog {
    /// Build the log from the standard mission chain.
    pub fn standard() -> Self {
        Self::from_defs(STANDARD_MISSIONS)
    }

    pub fn from_defs(defs: &[MissionDef]) -> Self {
        let missions: Vec<Mission> = defs
            .iter()
            .map(|def| Mission {
                id: def.id.to_string(),
                title: def.title.to_string(),
                description: def.description.to_string(),
                requirements: def.requirements.to_vec(),
                reward: MissionReward {
                    experience: def.reward_experience,
                    resources: def.reward_resources.to_vec(),
                },
                completed: false,
            })
            .collect();
        let active = if missions.is_empty() { None } else { Some(0) };
        Self { missions, active }
    }

    pub fn active_mission(&self) -> Option<&Mission> {
        self.active.and_then(|i| self.missions.get(i))
    }

    /// Complete the active mission if its requirements are met.
    /// Marks it completed, advances the active pointer to the next
    /// incomplete mission, and returns the reward payload exactly
    /// once. Repeated calls with unchanged state return nothing.
    pub fn complete_active(&mut self, progress: &MissionProgress) -> Option<MissionReward> {
        let index = self.active?;
        let mission = self.missions.get_mut(index)?;
        if mission.completed || !mission.is_ready(progress) {
            return None;
        }
        mission.completed = true;
        let reward = mission.reward.clone();
        self.active = self.missions.iter().position(|m| !m.completed);
        Some(reward)
    }

    /// HUD lines for the active mission: title with percent progress,
    /// description, then one `current/target` line per requirement.
    pub fn lines(&self, progress: &MissionProgress) -> Vec<String> {
        let Some(mission) = self.active_mission() else {
            return vec!["All missions complete".to_string()];
        };
        let mut lines = vec![
            format!(
                "{} ({:.0}%)",
                mission.title,
                mission.progress(progress) * 100.0
            ),
            mission.description.clone(),
        ];
        for (metric, target) in &mission.requirements {
            let current = progress.get(metric).copied().unwrap_or(0);
            lines.push(format!("- {}: {}/{}", metric.label(), current, target));
        }
        lines
    }
}
