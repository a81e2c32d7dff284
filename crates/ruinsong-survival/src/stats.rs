//! Survival gauge ledger.
//!
//! Four clamped gauges that decay over time and are restored by
//! canisters, crafted items, and the companion. Values never leave
//! `[0, STAT_MAX]`; restore/consume report the delta actually applied
//! so callers can handle partial application at the clamp boundary.

use serde::{Deserialize, Serialize};

use ruinsong_core::constants::{decay_per_minute, STAT_CRITICAL_THRESHOLD, STAT_MAX};
use ruinsong_core::enums::SurvivalStat;

/// The survivor's gauge values, indexed by `SurvivalStat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalLedger {
    values: [f32; 4],
}

impl Default for SurvivalLedger {
    fn default() -> Self {
        Self {
            values: [STAT_MAX; 4],
        }
    }
}

impl SurvivalLedger {
    pub fn value(&self, stat: SurvivalStat) -> f32 {
        self.values[stat as usize]
    }

    /// Decay every gauge by its per-minute rate scaled to `dt`.
    /// Returns the magnitude actually drained from each gauge.
    pub fn tick(&mut self, dt: f32) -> [f32; 4] {
        let mut drained = [0.0; 4];
        for stat in SurvivalStat::ALL {
            let change = decay_per_minute(stat) * dt / 60.0;
            drained[stat as usize] = self.consume(stat, change);
        }
        drained
    }

    /// Add to a gauge, clamped at STAT_MAX. Returns the delta applied.
    pub fn restore(&mut self, stat: SurvivalStat, amount: f32) -> f32 {
        self.apply(stat, amount)
    }

    /// Drain a gauge, clamped at zero. Returns the magnitude drained.
    pub fn consume(&mut self, stat: SurvivalStat, amount: f32) -> f32 {
        -self.apply(stat, -amount)
    }

    fn apply(&mut self, stat: SurvivalStat, delta: f32) -> f32 {
        let current = self.values[stat as usize];
        let next = (current + delta).clamp(0.0, STAT_MAX);
        self.values[stat as usize] = next;
        next - current
    }

    pub fn is_critical(&self, stat: SurvivalStat) -> bool {
        self.value(stat) <= STAT_CRITICAL_THRESHOLD
    }

    pub fn is_depleted(&self, stat: SurvivalStat) -> bool {
        self.value(stat) <= 0.0
    }

    /// Reset every gauge to maximum. Used by episode reset.
    pub fn refill_all(&mut self) {
        self.values = [STAT_MAX; 4];
    }
}
