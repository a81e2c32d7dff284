//! Crafting catalog: scrap-funded recipes that restore a gauge.

use ruinsong_core::enums::{ResourceKind, SurvivalStat};

use crate::inventory::Inventory;
use crate::stats::SurvivalLedger;

/// One craftable recipe.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub name: &'static str,
    pub scrap_cost: u32,
    pub restores: SurvivalStat,
    pub amount: f32,
    pub description: &'static str,
}

/// The standard recipe catalog, in menu order.
pub const STANDARD_RECIPES: &[Recipe] = &[
    Recipe {
        name: "Oxygen Tank",
        scrap_cost: 3,
        restores: SurvivalStat::Oxygen,
        amount: 35.0,
        description: "Emergency oxygen top-up",
    },
    Recipe {
        name: "Energy Cell",
        scrap_cost: 4,
        restores: SurvivalStat::Energy,
        amount: 35.0,
        description: "Recharges suit power",
    },
    Recipe {
        name: "Thermal Weave",
        scrap_cost: 5,
        restores: SurvivalStat::Temperature,
        amount: 40.0,
        description: "Stabilizes body heat",
    },
    Recipe {
        name: "Nutrient Pack",
        scrap_cost: 2,
        restores: SurvivalStat::Nutrition,
        amount: 30.0,
        description: "Compact ration",
    },
];

/// Outcome of a craft attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CraftOutcome {
    /// Crafted; the summary line is ready for the notice log.
    Crafted(String),
    /// Not enough scrap; nothing was consumed.
    InsufficientScrap,
}

/// Recipes currently affordable with the held scrap, in catalog order.
pub fn affordable<'a>(recipes: &'a [Recipe], inventory: &Inventory) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| inventory.has(ResourceKind::Scrap, r.scrap_cost))
        .collect()
}

/// Attempt to craft a recipe: spend the scrap atomically, then apply
/// the restoration. On a short stack nothing changes.
pub fn craft(
    recipe: &Recipe,
    inventory: &mut Inventory,
    stats: &mut SurvivalLedger,
) -> CraftOutcome {
    if !inventory.remove(ResourceKind::Scrap, recipe.scrap_cost) {
        return CraftOutcome::InsufficientScrap;
    }
    let applied = stats.restore(recipe.restores, recipe.amount);
    CraftOutcome::Crafted(format!(
        "{} assembled (+{:.0} {})",
        recipe.name,
        applied,
        recipe.restores.label()
    ))
}
