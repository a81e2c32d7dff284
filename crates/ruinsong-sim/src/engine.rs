//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands at each frame boundary, runs all systems in fixed order,
//! and produces `GameSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ruinsong_core::commands::PlayerCommand;
use ruinsong_core::components::{EnemyMind, Health, Hostile, SalvageNode};
use ruinsong_core::constants::*;
use ruinsong_core::enums::{
    EnemyVariant, EpisodePhase, MissionMetric, ModifierKey, ResourceKind, SurvivalStat,
};
use ruinsong_core::events::NoticeLog;
use ruinsong_core::state::GameSnapshot;
use ruinsong_core::types::{ArenaBounds, SimTime, Transform};

use ruinsong_enemy_ai::loot;
use ruinsong_survival::crafting::{self, CraftOutcome, Recipe, STANDARD_RECIPES};
use ruinsong_survival::inventory::Inventory;
use ruinsong_survival::missions::{MissionLog, MissionProgress};
use ruinsong_survival::skills::{SkillTree, UnlockOutcome};
use ruinsong_survival::stats::SurvivalLedger;

use crate::systems;
use crate::systems::spawner::SpawnDirector;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Per-frame input assembled from queued commands. Movement and
/// sprint are level state; the attack fields are edge latches that
/// stay set until an attempt consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_x: f32,
    pub move_z: f32,
    pub aim_delta: f32,
    pub sprint: bool,
    pub melee: bool,
    pub ranged: bool,
    pub dash: bool,
}

impl InputState {
    pub fn take_melee(&mut self) -> bool {
        std::mem::take(&mut self.melee)
    }

    pub fn take_ranged(&mut self) -> bool {
        std::mem::take(&mut self.ranged)
    }

    pub fn take_dash(&mut self) -> bool {
        std::mem::take(&mut self.dash)
    }
}

/// Running episode statistics fed into mission evaluation and the
/// snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub enemies_defeated: u32,
    pub elapsed_secs: f32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: EpisodePhase,
    bounds: ArenaBounds,
    seed: u64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    notices: NoticeLog,
    skills: SkillTree,
    missions: MissionLog,
    crafting_open: bool,
    spawner: SpawnDirector,
    stats: RunStats,
    survivor: Entity,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let survivor = world_setup::setup_episode(&mut world, &mut rng);
        Self {
            world,
            time: SimTime::default(),
            phase: EpisodePhase::default(),
            bounds: ArenaBounds::default(),
            seed: config.seed,
            rng,
            command_queue: VecDeque::new(),
            input: InputState::default(),
            notices: NoticeLog::default(),
            skills: SkillTree::standard(),
            missions: MissionLog::standard(),
            crafting_open: false,
            spawner: SpawnDirector::default(),
            stats: RunStats::default(),
            survivor,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return
    /// the resulting snapshot.
    pub fn step(&mut self, dt: f32) -> GameSnapshot {
        self.process_commands();

        if self.phase == EpisodePhase::Running {
            if self.survivor_alive() {
                self.advance(dt);
            } else {
                self.phase = EpisodePhase::Defeated;
                self.notices.push("Survivor down. Reset to redeploy.");
            }
        }

        let progress = self.mission_progress();
        systems::snapshot::build(
            &self.world,
            self.survivor,
            &self.time,
            self.phase,
            &self.notices,
            &self.skills,
            &self.missions,
            &progress,
            self.crafting_open,
            &self.stats,
        )
    }

    /// Get the current episode phase.
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run one frame of the fixed system order.
    fn advance(&mut self, dt: f32) {
        self.time.advance(dt);
        self.stats.elapsed_secs += dt;
        self.notices.tick(dt);

        systems::player::run(
            &mut self.world,
            self.survivor,
            &mut self.input,
            &self.skills,
            self.bounds,
            dt,
        );
        systems::companion::run(&mut self.world, self.survivor, dt);
        systems::hostile::run(
            &mut self.world,
            self.survivor,
            &mut self.rng,
            self.bounds,
            dt,
        );
        self.evict_defeated();
        self.apply_survival_damage(dt);
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &mut self.notices,
            dt,
        );
        self.check_missions();
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. While defeated, only Reset is
    /// honored.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == EpisodePhase::Defeated && !matches!(command, PlayerCommand::Reset) {
            return;
        }
        match command {
            PlayerCommand::Move { x, z } => {
                self.input.move_x = x.clamp(-1.0, 1.0);
                self.input.move_z = z.clamp(-1.0, 1.0);
            }
            PlayerCommand::Aim { delta_degrees } => {
                self.input.aim_delta += delta_degrees;
            }
            PlayerCommand::SetSprint { active } => {
                self.input.sprint = active;
            }
            PlayerCommand::MeleeAttack => {
                self.input.melee = true;
            }
            PlayerCommand::RangedAttack => {
                self.input.ranged = true;
            }
            PlayerCommand::Dash => {
                self.input.dash = true;
            }
            PlayerCommand::Gather => self.gather(),
            PlayerCommand::ToggleCrafting => {
                self.crafting_open = !self.crafting_open;
            }
            PlayerCommand::CraftSelect { index } => self.craft_selected(index),
            PlayerCommand::UnlockSkill { index } => self.unlock_skill(index),
            PlayerCommand::Reset => self.reset_episode(),
        }
    }

    /// Gather the nearest salvage node within reach. Scrap and cores
    /// stack in the inventory; canisters restore their gauge on the
    /// spot, boosted by the item-heal modifier.
    fn gather(&mut self) {
        let origin = match self.world.get::<&Transform>(self.survivor) {
            Ok(tf) => tf.position,
            Err(_) => return,
        };

        let mut best: Option<(Entity, ResourceKind, f32)> = None;
        for (entity, (node, tf)) in self.world.query::<(&SalvageNode, &Transform)>().iter() {
            let delta = tf.position - origin;
            let distance = (delta.x * delta.x + delta.z * delta.z).sqrt();
            if distance > GATHER_RADIUS {
                continue;
            }
            if best.map_or(true, |(_, _, d)| distance < d) {
                best = Some((entity, node.kind, distance));
            }
        }

        let Some((entity, kind, _)) = best else {
            self.notices.push("No salvage in reach");
            return;
        };
        let _ = self.world.despawn(entity);

        match kind.restores() {
            Some(stat) => {
                let amount = CANISTER_RESTORE_AMOUNT + self.skills.modifier(ModifierKey::ItemHeal);
                if let Ok(mut ledger) = self.world.get::<&mut SurvivalLedger>(self.survivor) {
                    let applied = ledger.restore(stat, amount);
                    self.notices
                        .push(format!("{} used (+{:.0} {})", kind.label(), applied, stat.label()));
                }
            }
            None => {
                let amount = match kind {
                    ResourceKind::Scrap => SCRAP_PICKUP_AMOUNT,
                    _ => 1,
                };
                if let Ok(mut inventory) = self.world.get::<&mut Inventory>(self.survivor) {
                    inventory.add(kind, amount);
                }
                self.notices.push(format!("{} +{}", kind.label(), amount));
            }
        }
    }

    /// Craft the indexed option from the open crafting menu. The menu
    /// lists only affordable recipes, in catalog order.
    fn craft_selected(&mut self, index: usize) {
        if !self.crafting_open {
            self.notices.push("Crafting menu is closed");
            return;
        }
        let recipe: Option<Recipe> = self
            .world
            .get::<&Inventory>(self.survivor)
            .ok()
            .and_then(|inv| {
                crafting::affordable(STANDARD_RECIPES, &inv)
                    .get(index)
                    .map(|r| **r)
            });
        let Some(recipe) = recipe else {
            self.notices.push("Invalid selection");
            return;
        };

        let outcome = {
            let Ok(mut inventory) = self.world.get::<&mut Inventory>(self.survivor) else {
                return;
            };
            let Ok(mut ledger) = self.world.get::<&mut SurvivalLedger>(self.survivor) else {
                return;
            };
            crafting::craft(&recipe, &mut inventory, &mut ledger)
        };
        match outcome {
            CraftOutcome::Crafted(summary) => self.notices.push(summary),
            CraftOutcome::InsufficientScrap => self.notices.push("Not enough scrap"),
        }
    }

    /// Spend a skill point on the indexed skill.
    fn unlock_skill(&mut self, index: usize) {
        let name = self.skills.skills.get(index).map(|s| s.name.clone());
        match self.skills.unlock_by_index(index) {
            UnlockOutcome::Unlocked => {
                self.notices
                    .push(format!("{} unlocked", name.unwrap_or_default()));
            }
            UnlockOutcome::NotFound => self.notices.push("No such skill"),
            UnlockOutcome::AlreadyUnlocked => self.notices.push("Already unlocked"),
            UnlockOutcome::InsufficientPoints => self.notices.push("Skill point required"),
        }
    }

    /// Discard the episode and rebuild everything from the seed.
    fn reset_episode(&mut self) {
        self.world = World::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.survivor = world_setup::setup_episode(&mut self.world, &mut self.rng);
        self.time = SimTime::default();
        self.phase = EpisodePhase::Running;
        self.input = InputState::default();
        self.notices.clear();
        self.skills = SkillTree::standard();
        self.missions = MissionLog::standard();
        self.crafting_open = false;
        self.spawner = SpawnDirector::default();
        self.stats = RunStats::default();
    }

    fn survivor_alive(&self) -> bool {
        self.world
            .get::<&Health>(self.survivor)
            .map(|h| h.current > 0.0)
            .unwrap_or(false)
    }

    /// Evict hostiles at zero health: roll loot into the inventory,
    /// count the kill, and grant experience (which may cascade into
    /// level-ups). Loot is computed before the entity is removed.
    fn evict_defeated(&mut self) {
        let mut defeated: Vec<(Entity, EnemyVariant)> = Vec::new();
        for (entity, (_hostile, mind, health)) in
            self.world.query_mut::<(&Hostile, &EnemyMind, &Health)>()
        {
            if health.current <= 0.0 {
                defeated.push((entity, mind.variant));
            }
        }

        for (entity, variant) in defeated {
            let drop = loot::roll_loot(variant, &mut self.rng);
            let _ = self.world.despawn(entity);

            if let Ok(mut inventory) = self.world.get::<&mut Inventory>(self.survivor) {
                inventory.add(ResourceKind::Scrap, drop.scrap);
                if let Some((kind, count)) = drop.bonus {
                    inventory.add(kind, count);
                }
            }
            match drop.bonus {
                Some((kind, count)) => self.notices.push(format!(
                    "Hostile destroyed: scrap +{}, {} +{}",
                    drop.scrap,
                    kind.label(),
                    count
                )),
                None => self
                    .notices
                    .push(format!("Hostile destroyed: scrap +{}", drop.scrap)),
            }

            self.stats.enemies_defeated += 1;
            for notice in self.skills.add_experience(EXPERIENCE_PER_KILL) {
                self.notices.push(notice);
            }
        }
    }

    /// Each fully depleted gauge independently applies its own damage
    /// per second; simultaneous depletions stack.
    fn apply_survival_damage(&mut self, dt: f32) {
        let depleted: Vec<SurvivalStat> = match self.world.get::<&SurvivalLedger>(self.survivor) {
            Ok(ledger) => SurvivalStat::ALL
                .iter()
                .copied()
                .filter(|&stat| ledger.is_depleted(stat))
                .collect(),
            Err(_) => Vec::new(),
        };
        for _stat in depleted {
            systems::damage::inflict(&mut self.world, self.survivor, STAT_DAMAGE_PER_SECOND * dt);
        }
    }

    /// Evaluate mission completion against this frame's aggregate
    /// statistics and route any reward.
    fn check_missions(&mut self) {
        let progress = self.mission_progress();
        let title = self.missions.active_mission().map(|m| m.title.clone());
        let Some(reward) = self.missions.complete_active(&progress) else {
            return;
        };
        if let Some(title) = title {
            self.notices.push(format!("Mission complete: {title}"));
        }
        if reward.experience > 0.0 {
            for notice in self.skills.add_experience(reward.experience) {
                self.notices.push(notice);
            }
        }
        if !reward.resources.is_empty() {
            if let Ok(mut inventory) = self.world.get::<&mut Inventory>(self.survivor) {
                for (kind, count) in &reward.resources {
                    inventory.add(*kind, *count);
                }
            }
        }
    }

    /// Aggregate statistics snapshot for mission evaluation: current
    /// stocks plus the cumulative kill counter.
    fn mission_progress(&self) -> MissionProgress {
        let mut progress = MissionProgress::new();
        if let Ok(inventory) = self.world.get::<&Inventory>(self.survivor) {
            progress.insert(
                MissionMetric::ScrapHeld,
                inventory.stack_count(ResourceKind::Scrap),
            );
            progress.insert(
                MissionMetric::AlloyCoresHeld,
                inventory.stack_count(ResourceKind::AlloyCore),
            );
        }
        progress.insert(MissionMetric::EnemiesDefeated, self.stats.enemies_defeated);
        progress
    }
}

#[cfg(test)]
impl SimulationEngine {
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn survivor(&self) -> Entity {
        self.survivor
    }

    pub fn skills(&self) -> &SkillTree {
        &self.skills
    }

    pub fn skills_mut(&mut self) -> &mut SkillTree {
        &mut self.skills
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Spawn a stinger with the given health at an exact position
    /// (for tests needing controlled placement).
    pub fn spawn_test_hostile(&mut self, position: glam::Vec3, health: f32) -> Entity {
        self.world.spawn((
            Hostile,
            Transform::new(position, 0.0),
            EnemyMind {
                variant: EnemyVariant::Stinger,
                state: ruinsong_core::enums::BehaviorState::Engage,
                waypoint: position,
                attack_timer: 0.0,
            },
            Health {
                current: health,
                max: health,
            },
        ))
    }

    /// Spawn a salvage node at an exact position.
    pub fn spawn_test_salvage(&mut self, kind: ResourceKind, position: glam::Vec3) -> Entity {
        self.world
            .spawn((SalvageNode { kind }, Transform::new(position, 0.0)))
    }
}
