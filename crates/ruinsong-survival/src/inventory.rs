//! Named-stack resource counters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ruinsong_core::enums::ResourceKind;

/// Resource stacks held by the survivor. Counts are never negative
/// and zero-count stacks are pruned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    stacks: HashMap<ResourceKind, u32>,
}

impl Inventory {
    /// Add to a stack, creating it if absent. Always succeeds.
    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.stacks.entry(kind).or_insert(0) += amount;
    }

    /// Remove from a stack. Atomic: if the stack is short the call
    /// returns false and nothing changes. This is the sole gate for
    /// "can afford" checks.
    pub fn remove(&mut self, kind: ResourceKind, amount: u32) -> bool {
        let Some(count) = self.stacks.get_mut(&kind) else {
            return amount == 0;
        };
        if *count < amount {
            return false;
        }
        *count -= amount;
        if *count == 0 {
            self.stacks.remove(&kind);
        }
        true
    }

    pub fn has(&self, kind: ResourceKind, amount: u32) -> bool {
        self.stack_count(kind) >= amount
    }

    /// Current count for a kind; zero for absent kinds.
    pub fn stack_count(&self, kind: ResourceKind) -> u32 {
        self.stacks.get(&kind).copied().unwrap_or(0)
    }

    /// HUD summary lines, sorted by label for stable output.
    pub fn as_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .stacks
            .iter()
            .map(|(kind, count)| format!("{} x{}", kind.label(), count))
            .collect();
        lines.sort();
        lines
    }

    pub fn clear(&mut self) {
        self.stacks.clear();
    }
}
