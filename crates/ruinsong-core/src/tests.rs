#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::NoticeLog;
    use crate::state::GameSnapshot;
    use crate::types::{ArenaBounds, SimTime, Transform};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_survival_stat_serde() {
        for v in SurvivalStat::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: SurvivalStat = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_resource_kind_serde() {
        let variants = vec![
            ResourceKind::Scrap,
            ResourceKind::AlloyCore,
            ResourceKind::OxygenCanister,
            ResourceKind::EnergyCanister,
            ResourceKind::ThermalCanister,
            ResourceKind::NutrientCanister,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ResourceKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_variant_serde() {
        for v in [EnemyVariant::Stinger, EnemyVariant::Goliath] {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyVariant = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_modifier_key_serde() {
        let variants = vec![
            ModifierKey::MeleeBonus,
            ModifierKey::DashRecovery,
            ModifierKey::ItemHeal,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ModifierKey = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move { x: 1.0, z: -0.5 },
            PlayerCommand::Aim {
                delta_degrees: 45.0,
            },
            PlayerCommand::SetSprint { active: true },
            PlayerCommand::Dash,
            PlayerCommand::MeleeAttack,
            PlayerCommand::RangedAttack,
            PlayerCommand::Gather,
            PlayerCommand::ToggleCrafting,
            PlayerCommand::CraftSelect { index: 2 },
            PlayerCommand::UnlockSkill { index: 0 },
            PlayerCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Transform direction vectors.
    #[test]
    fn test_transform_forward_right() {
        let tf = Transform::new(Vec3::ZERO, 0.0);
        assert!((tf.forward() - Vec3::Z).length() < 1e-5, "yaw 0 faces +Z");
        assert!((tf.right() - Vec3::X).length() < 1e-5, "yaw 0 right is +X");

        let turned = Transform::new(Vec3::ZERO, 90.0);
        assert!(
            (turned.forward() - Vec3::X).length() < 1e-5,
            "yaw 90 faces +X, got {:?}",
            turned.forward()
        );
    }

    #[test]
    fn test_transform_ground_distance_ignores_height() {
        let tf = Transform::new(Vec3::new(0.0, 0.0, 0.0), 0.0);
        let point = Vec3::new(3.0, 10.0, 4.0);
        assert!((tf.ground_distance_to(point) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_arena_clamp() {
        let bounds = ArenaBounds::default();
        let outside = Vec3::new(ARENA_HALF_EXTENT + 5.0, 1.0, -ARENA_HALF_EXTENT - 9.0);
        let clamped = bounds.clamp(outside);
        assert_eq!(clamped.x, ARENA_HALF_EXTENT);
        assert_eq!(clamped.z, -ARENA_HALF_EXTENT);
        assert_eq!(clamped.y, 1.0, "clamp should not touch height");
        assert!(bounds.contains(clamped));
        assert!(!bounds.contains(outside));
    }

    /// Verify SimTime advancement with a variable time-step.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.frame, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance(1.0 / 30.0);
        }
        assert_eq!(time.frame, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_notice_log_cap() {
        let mut log = NoticeLog::default();
        for i in 0..NOTICE_LOG_CAP + 3 {
            log.push(format!("notice {i}"));
        }
        assert_eq!(log.len(), NOTICE_LOG_CAP);
        let lines = log.lines();
        // Oldest entries fell off the front.
        assert_eq!(lines[0], "notice 3");
        assert_eq!(lines[lines.len() - 1], format!("notice {}", NOTICE_LOG_CAP + 2));
    }

    #[test]
    fn test_notice_log_expiry() {
        let mut log = NoticeLog::default();
        log.push("short lived");
        log.tick(NOTICE_DURATION_SECS - 0.1);
        assert_eq!(log.len(), 1, "not yet expired");
        log.tick(0.2);
        assert!(log.is_empty(), "expired notices are dropped");
    }

    #[test]
    fn test_canister_restore_mapping() {
        assert_eq!(
            ResourceKind::OxygenCanister.restores(),
            Some(SurvivalStat::Oxygen)
        );
        assert_eq!(ResourceKind::Scrap.restores(), None);
        assert_eq!(ResourceKind::AlloyCore.restores(), None);
    }

    #[test]
    fn test_hysteresis_band_exists() {
        assert!(
            DISENGAGE_RADIUS > ENGAGE_RADIUS,
            "disengage radius must exceed engage radius"
        );
    }
}
