//! Loot tables for defeated hostiles.
//!
//! Each kill rolls independently. The light variant drops a small
//! random amount of scrap; the heavy variant guarantees more scrap
//! and has a chance of dropping an alloy core on top.

use rand::Rng;

use ruinsong_core::enums::{EnemyVariant, ResourceKind};

/// Guaranteed scrap from a heavy kill before the random extra.
const GOLIATH_BASE_SCRAP: u32 = 4;

/// Chance that a heavy kill also drops an alloy core.
const GOLIATH_CORE_CHANCE: f64 = 0.6;

/// Resources granted by one defeated hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootDrop {
    pub scrap: u32,
    pub bonus: Option<(ResourceKind, u32)>,
}

/// Roll the loot table for a defeated hostile.
pub fn roll_loot(variant: EnemyVariant, rng: &mut impl Rng) -> LootDrop {
    match variant {
        EnemyVariant::Stinger => LootDrop {
            scrap: rng.gen_range(1..=3),
            bonus: None,
        },
        EnemyVariant::Goliath => LootDrop {
            scrap: GOLIATH_BASE_SCRAP + rng.gen_range(0..=2),
            bonus: rng
                .gen_bool(GOLIATH_CORE_CHANCE)
                .then_some((ResourceKind::AlloyCore, 1)),
        },
    }
}
