#[cfg(test)]
mod tests {
    use ruinsong_core::constants::*;
    use ruinsong_core::enums::{MissionMetric, ModifierKey, ResourceKind, SurvivalStat};

    use crate::crafting::{affordable, craft, CraftOutcome, STANDARD_RECIPES};
    use crate::inventory::Inventory;
    use crate::missions::{MissionLog, MissionProgress};
    use crate::skills::{SkillDef, SkillTree, UnlockOutcome};
    use crate::stats::SurvivalLedger;

    // ---- Gauge ledger ----

    #[test]
    fn test_gauges_start_full() {
        let ledger = SurvivalLedger::default();
        for stat in SurvivalStat::ALL {
            assert_eq!(ledger.value(stat), STAT_MAX);
            assert!(!ledger.is_critical(stat));
        }
    }

    #[test]
    fn test_gauge_values_stay_clamped() {
        let mut ledger = SurvivalLedger::default();
        // Arbitrary interleaving of tick/restore/consume must never
        // push any gauge outside [0, STAT_MAX].
        for round in 0..200 {
            ledger.tick(7.0);
            ledger.consume(SurvivalStat::Oxygen, 30.0);
            ledger.restore(SurvivalStat::Energy, 55.0);
            if round % 3 == 0 {
                ledger.restore(SurvivalStat::Oxygen, 500.0);
            }
            for stat in SurvivalStat::ALL {
                let value = ledger.value(stat);
                assert!(
                    (0.0..=STAT_MAX).contains(&value),
                    "{} out of range: {value}",
                    stat.label()
                );
            }
        }
    }

    #[test]
    fn test_tick_scales_decay_to_dt() {
        let mut ledger = SurvivalLedger::default();
        let drained = ledger.tick(60.0);
        for stat in SurvivalStat::ALL {
            let expected = decay_per_minute(stat);
            assert!(
                (drained[stat as usize] - expected).abs() < 1e-4,
                "{} drained {} over one minute, expected {expected}",
                stat.label(),
                drained[stat as usize]
            );
        }
    }

    #[test]
    fn test_restore_returns_actual_delta_at_cap() {
        let mut ledger = SurvivalLedger::default();
        ledger.consume(SurvivalStat::Oxygen, 10.0);
        // Only 10 points of headroom; the rest is clipped.
        let applied = ledger.restore(SurvivalStat::Oxygen, 25.0);
        assert!((applied - 10.0).abs() < 1e-4);
        assert_eq!(ledger.value(SurvivalStat::Oxygen), STAT_MAX);
    }

    #[test]
    fn test_consume_partial_at_floor() {
        let mut ledger = SurvivalLedger::default();
        ledger.consume(SurvivalStat::Nutrition, STAT_MAX - 5.0);
        let drained = ledger.consume(SurvivalStat::Nutrition, 20.0);
        assert!((drained - 5.0).abs() < 1e-4, "only 5 points remained");
        assert_eq!(ledger.value(SurvivalStat::Nutrition), 0.0);
        assert!(ledger.is_depleted(SurvivalStat::Nutrition));
    }

    #[test]
    fn test_critical_threshold() {
        let mut ledger = SurvivalLedger::default();
        ledger.consume(SurvivalStat::Energy, STAT_MAX - STAT_CRITICAL_THRESHOLD - 0.1);
        assert!(!ledger.is_critical(SurvivalStat::Energy));
        ledger.consume(SurvivalStat::Energy, 0.2);
        assert!(ledger.is_critical(SurvivalStat::Energy));
    }

    #[test]
    fn test_refill_all() {
        let mut ledger = SurvivalLedger::default();
        for stat in SurvivalStat::ALL {
            ledger.consume(stat, 80.0);
        }
        ledger.refill_all();
        for stat in SurvivalStat::ALL {
            assert_eq!(ledger.value(stat), STAT_MAX);
        }
    }

    // ---- Inventory ----

    #[test]
    fn test_inventory_add_and_count() {
        let mut inv = Inventory::default();
        assert_eq!(inv.stack_count(ResourceKind::Scrap), 0);
        inv.add(ResourceKind::Scrap, 3);
        inv.add(ResourceKind::Scrap, 2);
        assert_eq!(inv.stack_count(ResourceKind::Scrap), 5);
        assert!(inv.has(ResourceKind::Scrap, 5));
        assert!(!inv.has(ResourceKind::Scrap, 6));
    }

    #[test]
    fn test_inventory_remove_atomic_on_failure() {
        let mut inv = Inventory::default();
        inv.add(ResourceKind::Scrap, 4);
        assert!(!inv.remove(ResourceKind::Scrap, 5), "short stack must fail");
        assert_eq!(
            inv.stack_count(ResourceKind::Scrap),
            4,
            "failed remove must not mutate"
        );
        assert!(inv.remove(ResourceKind::Scrap, 4));
        assert_eq!(inv.stack_count(ResourceKind::Scrap), 0);
    }

    #[test]
    fn test_inventory_zero_count_pruned() {
        let mut inv = Inventory::default();
        inv.add(ResourceKind::AlloyCore, 1);
        assert!(inv.remove(ResourceKind::AlloyCore, 1));
        assert!(inv.as_lines().is_empty(), "empty stacks leave no lines");
    }

    #[test]
    fn test_inventory_clear() {
        let mut inv = Inventory::default();
        inv.add(ResourceKind::Scrap, 9);
        inv.add(ResourceKind::AlloyCore, 2);
        inv.clear();
        assert_eq!(inv.stack_count(ResourceKind::Scrap), 0);
        assert!(inv.as_lines().is_empty());
    }

    #[test]
    fn test_inventory_lines_sorted() {
        let mut inv = Inventory::default();
        inv.add(ResourceKind::Scrap, 7);
        inv.add(ResourceKind::AlloyCore, 1);
        let lines = inv.as_lines();
        assert_eq!(lines, vec!["alloy core x1", "scrap x7"]);
    }

    // ---- Skill progression ----

    #[test]
    fn test_add_experience_single_level() {
        let mut tree = SkillTree::standard();
        let notices = tree.add_experience(EXPERIENCE_PER_LEVEL + 10.0);
        assert_eq!(notices.len(), 1);
        assert_eq!(tree.level, 2);
        assert_eq!(tree.points, SKILL_POINTS_PER_LEVEL);
        assert!((tree.experience - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_add_experience_multi_level_carry() {
        let mut tree = SkillTree::standard();
        tree.add_experience(30.0);
        // 30 carried + 250 = 280: two level-ups with 80 left over.
        let notices = tree.add_experience(2.5 * EXPERIENCE_PER_LEVEL);
        assert_eq!(notices.len(), 2, "one notice per level gained");
        assert_eq!(tree.level, 3);
        assert_eq!(tree.points, 2 * SKILL_POINTS_PER_LEVEL);
        assert!((tree.experience - 80.0).abs() < 1e-3);
        assert!(
            tree.experience < EXPERIENCE_PER_LEVEL,
            "experience must be normalized below the threshold"
        );
    }

    #[test]
    fn test_unlock_outcomes() {
        let mut tree = SkillTree::standard();
        assert_eq!(tree.unlock_by_index(99), UnlockOutcome::NotFound);
        assert_eq!(
            tree.unlock_by_index(0),
            UnlockOutcome::InsufficientPoints,
            "no points at level 1"
        );

        tree.add_experience(EXPERIENCE_PER_LEVEL);
        assert_eq!(tree.unlock_by_index(0), UnlockOutcome::Unlocked);
        assert_eq!(tree.points, 0, "unlock costs exactly one point");
        assert_eq!(tree.unlock_by_index(0), UnlockOutcome::AlreadyUnlocked);
    }

    #[test]
    fn test_unlock_by_name() {
        let mut tree = SkillTree::standard();
        tree.add_experience(EXPERIENCE_PER_LEVEL);
        assert_eq!(tree.unlock("No Such Skill"), UnlockOutcome::NotFound);
        assert_eq!(tree.unlock("Serrated Edge"), UnlockOutcome::Unlocked);
        assert_eq!(tree.unlock("Serrated Edge"), UnlockOutcome::AlreadyUnlocked);
    }

    #[test]
    fn test_active_modifiers_sum_by_key() {
        const DEFS: &[SkillDef] = &[
            SkillDef {
                name: "First Edge",
                description: "",
                key: ModifierKey::MeleeBonus,
                magnitude: 0.2,
            },
            SkillDef {
                name: "Second Edge",
                description: "",
                key: ModifierKey::MeleeBonus,
                magnitude: 0.15,
            },
            SkillDef {
                name: "Brewer",
                description: "",
                key: ModifierKey::ItemHeal,
                magnitude: 8.0,
            },
        ];
        let mut tree = SkillTree::from_defs(DEFS);
        tree.add_experience(3.0 * EXPERIENCE_PER_LEVEL);
        for index in 0..3 {
            assert_eq!(tree.unlock_by_index(index), UnlockOutcome::Unlocked);
        }
        let modifiers = tree.active_modifiers();
        assert!((modifiers[&ModifierKey::MeleeBonus] - 0.35).abs() < 1e-5);
        assert!((modifiers[&ModifierKey::ItemHeal] - 8.0).abs() < 1e-5);
        assert!((tree.modifier(ModifierKey::MeleeBonus) - 0.35).abs() < 1e-5);
        assert_eq!(tree.modifier(ModifierKey::DashRecovery), 0.0);
    }

    // ---- Missions ----

    fn progress(scrap: u32, cores: u32, kills: u32) -> MissionProgress {
        let mut p = MissionProgress::new();
        p.insert(MissionMetric::ScrapHeld, scrap);
        p.insert(MissionMetric::AlloyCoresHeld, cores);
        p.insert(MissionMetric::EnemiesDefeated, kills);
        p
    }

    #[test]
    fn test_mission_not_ready_below_threshold() {
        let mut log = MissionLog::standard();
        // First mission wants 10 scrap; 9 is not enough.
        assert!(log.complete_active(&progress(9, 0, 0)).is_none());
        assert_eq!(log.active_mission().unwrap().id, "stockpile");
    }

    #[test]
    fn test_mission_completes_exactly_once() {
        let mut log = MissionLog::standard();
        // Jump to the kill mission by finishing the first.
        log.complete_active(&progress(10, 0, 0)).unwrap();
        assert_eq!(log.active_mission().unwrap().id, "thin-the-swarm");

        // 7 kills: not ready. 8 kills: completes once, second call
        // with the same state grants nothing.
        assert!(log.complete_active(&progress(0, 0, 7)).is_none());
        let reward = log.complete_active(&progress(0, 0, 8));
        assert!(reward.is_some());
        assert!((reward.unwrap().experience - 60.0).abs() < 1e-5);
        assert!(
            log.complete_active(&progress(0, 0, 8)).is_none(),
            "reward must be granted exactly once"
        );
    }

    #[test]
    fn test_mission_chain_advances_to_terminal_state() {
        let mut log = MissionLog::standard();
        assert!(log.complete_active(&progress(10, 0, 0)).is_some());
        assert!(log.complete_active(&progress(0, 0, 8)).is_some());
        assert!(log.complete_active(&progress(0, 2, 0)).is_some());
        assert!(log.active_mission().is_none(), "all missions complete");
        assert_eq!(log.lines(&progress(0, 0, 0)), vec!["All missions complete"]);
        // Terminal state stays terminal.
        assert!(log.complete_active(&progress(99, 99, 99)).is_none());
    }

    #[test]
    fn test_mission_lines_show_progress() {
        let log = MissionLog::standard();
        let lines = log.lines(&progress(4, 0, 0));
        assert_eq!(lines[0], "Build a Stockpile (0%)");
        assert_eq!(lines[2], "- scrap: 4/10");

        let lines = log.lines(&progress(12, 0, 0));
        assert_eq!(lines[0], "Build a Stockpile (100%)");
    }

    // ---- Crafting ----

    #[test]
    fn test_affordable_filters_by_scrap() {
        let mut inv = Inventory::default();
        inv.add(ResourceKind::Scrap, 3);
        let options = affordable(STANDARD_RECIPES, &inv);
        let names: Vec<&str> = options.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Oxygen Tank", "Nutrient Pack"]);
    }

    #[test]
    fn test_craft_spends_scrap_and_restores() {
        let mut inv = Inventory::default();
        let mut ledger = SurvivalLedger::default();
        inv.add(ResourceKind::Scrap, 6);
        ledger.consume(SurvivalStat::Oxygen, 50.0);

        let outcome = craft(&STANDARD_RECIPES[0], &mut inv, &mut ledger);
        assert!(matches!(outcome, CraftOutcome::Crafted(_)));
        assert_eq!(inv.stack_count(ResourceKind::Scrap), 3);
        assert!((ledger.value(SurvivalStat::Oxygen) - 85.0).abs() < 1e-4);
    }

    #[test]
    fn test_craft_insufficient_scrap_leaves_stack() {
        let mut inv = Inventory::default();
        let mut ledger = SurvivalLedger::default();
        inv.add(ResourceKind::Scrap, 4);
        ledger.consume(SurvivalStat::Temperature, 50.0);

        // Thermal Weave costs 5 scrap.
        let outcome = craft(&STANDARD_RECIPES[2], &mut inv, &mut ledger);
        assert_eq!(outcome, CraftOutcome::InsufficientScrap);
        assert_eq!(
            inv.stack_count(ResourceKind::Scrap),
            4,
            "declined craft must not touch the stack"
        );
        assert!((ledger.value(SurvivalStat::Temperature) - 50.0).abs() < 1e-4);
    }
}
