//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the survivor's clamped survival gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurvivalStat {
    Oxygen,
    Energy,
    Temperature,
    Nutrition,
}

impl SurvivalStat {
    /// All gauges, in fixed display order.
    pub const ALL: [SurvivalStat; 4] = [
        SurvivalStat::Oxygen,
        SurvivalStat::Energy,
        SurvivalStat::Temperature,
        SurvivalStat::Nutrition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SurvivalStat::Oxygen => "oxygen",
            SurvivalStat::Energy => "energy",
            SurvivalStat::Temperature => "temperature",
            SurvivalStat::Nutrition => "nutrition",
        }
    }
}

/// A stackable or gatherable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Common crafting currency, dropped by hostiles and found in the field.
    Scrap,
    /// Rare component dropped only by heavy hostiles.
    AlloyCore,
    /// Field canisters, consumed on gather to restore their gauge.
    OxygenCanister,
    EnergyCanister,
    ThermalCanister,
    NutrientCanister,
}

impl ResourceKind {
    /// Kinds the spawn director may place as field nodes. Alloy cores
    /// come only from heavy hostile loot.
    pub const SPAWNABLE: [ResourceKind; 5] = [
        ResourceKind::Scrap,
        ResourceKind::OxygenCanister,
        ResourceKind::EnergyCanister,
        ResourceKind::ThermalCanister,
        ResourceKind::NutrientCanister,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Scrap => "scrap",
            ResourceKind::AlloyCore => "alloy core",
            ResourceKind::OxygenCanister => "oxygen canister",
            ResourceKind::EnergyCanister => "energy canister",
            ResourceKind::ThermalCanister => "thermal canister",
            ResourceKind::NutrientCanister => "nutrient canister",
        }
    }

    /// The gauge a canister restores on gather, if any.
    pub fn restores(&self) -> Option<SurvivalStat> {
        match self {
            ResourceKind::OxygenCanister => Some(SurvivalStat::Oxygen),
            ResourceKind::EnergyCanister => Some(SurvivalStat::Energy),
            ResourceKind::ThermalCanister => Some(SurvivalStat::Temperature),
            ResourceKind::NutrientCanister => Some(SurvivalStat::Nutrition),
            ResourceKind::Scrap | ResourceKind::AlloyCore => None,
        }
    }

    /// Symbolic handle for the asset layer. The simulation never
    /// depends on what this resolves to.
    pub fn asset_key(&self) -> &'static str {
        match self {
            ResourceKind::Scrap => "salvage_scrap",
            ResourceKind::AlloyCore => "salvage_core",
            _ => "salvage_canister",
        }
    }
}

/// Hostile variant. Variants share one behavior interface and differ
/// only in data tables and loot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyVariant {
    /// Light purge drone: patrols, then chases when close.
    Stinger,
    /// Heavy purge warden: slow, durable, permanently engaged.
    Goliath,
}

impl EnemyVariant {
    pub fn label(&self) -> &'static str {
        match self {
            EnemyVariant::Stinger => "stinger",
            EnemyVariant::Goliath => "goliath",
        }
    }

    pub fn asset_key(&self) -> &'static str {
        match self {
            EnemyVariant::Stinger => "hostile_stinger",
            EnemyVariant::Goliath => "hostile_goliath",
        }
    }
}

/// Hostile behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Wandering between random waypoints at reduced speed.
    #[default]
    Patrol,
    /// Chasing and attacking the survivor.
    Engage,
}

/// Key grouping summable skill bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    /// Multiplicative melee damage bonus: damage * (1 + bonus).
    MeleeBonus,
    /// Seconds subtracted from the dash cooldown, floored.
    DashRecovery,
    /// Flat extra restoration from gathered canisters.
    ItemHeal,
}

/// Top-level episode state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    #[default]
    Running,
    /// Survivor health reached zero. The simulation is frozen until an
    /// explicit reset.
    Defeated,
}

/// Counter a mission requirement is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionMetric {
    /// Scrap currently held in the inventory.
    ScrapHeld,
    /// Alloy cores currently held in the inventory.
    AlloyCoresHeld,
    /// Cumulative hostiles destroyed this episode.
    EnemiesDefeated,
}

impl MissionMetric {
    pub fn label(&self) -> &'static str {
        match self {
            MissionMetric::ScrapHeld => "scrap",
            MissionMetric::AlloyCoresHeld => "alloy cores",
            MissionMetric::EnemiesDefeated => "drones destroyed",
        }
    }
}
