//! Snapshot system: queries the world and builds a complete
//! GameSnapshot for the presentation layer.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use ruinsong_core::components::*;
use ruinsong_core::constants::EXPERIENCE_PER_LEVEL;
use ruinsong_core::enums::{EpisodePhase, SurvivalStat};
use ruinsong_core::events::NoticeLog;
use ruinsong_core::state::*;
use ruinsong_core::types::{SimTime, Transform};

use ruinsong_survival::crafting::{affordable, STANDARD_RECIPES};
use ruinsong_survival::inventory::Inventory;
use ruinsong_survival::missions::{MissionLog, MissionProgress};
use ruinsong_survival::skills::SkillTree;
use ruinsong_survival::stats::SurvivalLedger;

use crate::engine::RunStats;

/// Build a complete GameSnapshot from the current world state.
pub fn build(
    world: &World,
    survivor: Entity,
    time: &SimTime,
    phase: EpisodePhase,
    notices: &NoticeLog,
    skills: &SkillTree,
    missions: &MissionLog,
    progress: &MissionProgress,
    crafting_open: bool,
    stats: &RunStats,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        survivor: build_survivor(world, survivor),
        gauges: build_gauges(world, survivor),
        progression: ProgressionView {
            level: skills.level,
            experience: skills.experience,
            experience_per_level: EXPERIENCE_PER_LEVEL,
            points: skills.points,
        },
        skills: skills
            .skills
            .iter()
            .map(|s| SkillView {
                name: s.name.clone(),
                description: s.description.clone(),
                unlocked: s.unlocked,
            })
            .collect(),
        inventory: world
            .get::<&Inventory>(survivor)
            .map(|inv| inv.as_lines())
            .unwrap_or_default(),
        notices: notices.lines(),
        missions: missions.lines(progress),
        crafting: build_crafting(world, survivor, crafting_open),
        companion: build_companion(world),
        hostiles: build_hostiles(world),
        salvage: build_salvage(world),
        stats: RunStatsView {
            enemies_defeated: stats.enemies_defeated,
            elapsed_secs: stats.elapsed_secs,
        },
    }
}

fn build_survivor(world: &World, survivor: Entity) -> SurvivorView {
    let mut view = SurvivorView::default();
    if let Ok(tf) = world.get::<&Transform>(survivor) {
        view.position = tf.position;
        view.yaw_degrees = tf.yaw_degrees;
    }
    if let Ok(health) = world.get::<&Health>(survivor) {
        view.health = health.current;
        view.max_health = health.max;
    }
    if let Ok(shield) = world.get::<&Shield>(survivor) {
        view.shield = shield.current;
        view.max_shield = shield.max;
    }
    view
}

fn build_gauges(world: &World, survivor: Entity) -> Vec<GaugeView> {
    let Ok(ledger) = world.get::<&SurvivalLedger>(survivor) else {
        return Vec::new();
    };
    SurvivalStat::ALL
        .iter()
        .map(|&stat| GaugeView {
            stat,
            value: ledger.value(stat),
            critical: ledger.is_critical(stat),
        })
        .collect()
}

fn build_crafting(world: &World, survivor: Entity, open: bool) -> CraftingView {
    if !open {
        return CraftingView::default();
    }
    let options = world
        .get::<&Inventory>(survivor)
        .map(|inv| {
            affordable(STANDARD_RECIPES, &inv)
                .into_iter()
                .map(|recipe| CraftOptionView {
                    name: recipe.name.to_string(),
                    scrap_cost: recipe.scrap_cost,
                    description: recipe.description.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    CraftingView { open, options }
}

fn build_companion(world: &World) -> CompanionView {
    world
        .query::<(&Companion, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, tf))| CompanionView {
            position: tf.position,
            ..CompanionView::default()
        })
        .unwrap_or_default()
}

fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut rows: Vec<(u32, HostileView)> = world
        .query::<(&Hostile, &Transform, &EnemyMind, &Health)>()
        .iter()
        .map(|(entity, (_, tf, mind, health))| {
            (
                entity.id(),
                HostileView {
                    position: tf.position,
                    yaw_degrees: tf.yaw_degrees,
                    variant: mind.variant,
                    state: mind.state,
                    health: health.current,
                    max_health: health.max,
                    asset_key: mind.variant.asset_key().to_string(),
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}

fn build_salvage(world: &World) -> Vec<SalvageView> {
    let mut rows: Vec<(u32, SalvageView)> = world
        .query::<(&SalvageNode, &Transform)>()
        .iter()
        .map(|(entity, (node, tf))| {
            (
                entity.id(),
                SalvageView {
                    position: tf.position,
                    kind: node.kind,
                    asset_key: node.kind.asset_key().to_string(),
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}
