//! Variant-specific behavioral profiles.
//!
//! Consolidates per-variant parameters for the hostile FSM. Variants
//! share one behavior interface; everything that differs is data.

use ruinsong_core::enums::EnemyVariant;

/// Behavioral profile for a hostile variant.
pub struct VariantProfile {
    /// Hit points at spawn.
    pub max_health: f32,
    /// Full chase speed (m/s).
    pub speed: f32,
    /// Attack reach (m).
    pub attack_range: f32,
    /// Damage per attack.
    pub attack_damage: f32,
    /// Seconds between attacks.
    pub attack_cooldown: f32,
    /// Whether this variant skips patrol and is always engaged.
    pub always_engaged: bool,
}

/// Get the behavioral profile for a given variant.
pub fn get_profile(variant: EnemyVariant) -> VariantProfile {
    match variant {
        EnemyVariant::Stinger => VariantProfile {
            max_health: 50.0,
            speed: 3.5,
            attack_range: 1.8,
            attack_damage: 7.0,
            attack_cooldown: 1.4,
            always_engaged: false,
        },
        EnemyVariant::Goliath => VariantProfile {
            max_health: 140.0,
            speed: 2.6,
            attack_range: 2.4,
            attack_damage: 16.0,
            attack_cooldown: 2.2,
            always_engaged: true,
        },
    }
}
