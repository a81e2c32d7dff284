//! Skill progression: experience, levels, and unlockable combat
//! modifiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ruinsong_core::constants::{EXPERIENCE_PER_LEVEL, SKILL_POINTS_PER_LEVEL};
use ruinsong_core::enums::ModifierKey;

/// Static definition of one unlockable skill.
#[derive(Debug, Clone, Copy)]
pub struct SkillDef {
    pub name: &'static str,
    pub description: &'static str,
    pub key: ModifierKey,
    pub magnitude: f32,
}

/// The standard skill table. Unlock order is the player's choice;
/// indices match the HUD rows.
pub const STANDARD_SKILLS: &[SkillDef] = &[
    SkillDef {
        name: "Serrated Edge",
        description: "Melee strikes deal 25% more damage",
        key: ModifierKey::MeleeBonus,
        magnitude: 0.25,
    },
    SkillDef {
        name: "Coiled Servos",
        description: "Dash recovers 1.5s faster",
        key: ModifierKey::DashRecovery,
        magnitude: 1.5,
    },
    SkillDef {
        name: "Field Chemistry",
        description: "Canisters restore 10 extra points",
        key: ModifierKey::ItemHeal,
        magnitude: 10.0,
    },
];

/// One skill with its unlock state. `unlocked` is monotonic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub key: ModifierKey,
    pub magnitude: f32,
    pub unlocked: bool,
}

/// Outcome of a skill unlock attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    NotFound,
    AlreadyUnlocked,
    InsufficientPoints,
}

/// Experience, level, and skill state for one survivor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTree {
    pub skills: Vec<Skill>,
    pub points: u32,
    pub level: u32,
    pub experience: f32,
}

impl SkillTree {
    /// Build the tree from the standard skill table, all locked.
    pub fn standard() -> Self {
        Self::from_defs(STANDARD_SKILLS)
    }

    pub fn from_defs(defs: &[SkillDef]) -> Self {
        Self {
            skills: defs
                .iter()
                .map(|def| Skill {
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    key: def.key,
                    magnitude: def.magnitude,
                    unlocked: false,
                })
                .collect(),
            points: 0,
            level: 1,
            experience: 0.0,
        }
    }

    /// Accumulate experience, resolving every level-up it pays for.
    /// Returns one notice line per level gained, in order; a single
    /// large award can produce several.
    pub fn add_experience(&mut self, amount: f32) -> Vec<String> {
        self.experience += amount;
        let mut notices = Vec::new();
        while self.experience >= EXPERIENCE_PER_LEVEL {
            self.experience -= EXPERIENCE_PER_LEVEL;
            self.level += 1;
            self.points += SKILL_POINTS_PER_LEVEL;
            notices.push(format!("Reached level {}", self.level));
        }
        notices
    }

    /// Spend one point to unlock the named skill.
    pub fn unlock(&mut self, name: &str) -> UnlockOutcome {
        match self.skills.iter().position(|s| s.name == name) {
            Some(index) => self.unlock_by_index(index),
            None => UnlockOutcome::NotFound,
        }
    }

    /// Spend one point to unlock the skill at a HUD row index.
    pub fn unlock_by_index(&mut self, index: usize) -> UnlockOutcome {
        if index >= self.skills.len() {
            return UnlockOutcome::NotFound;
        }
        if self.skills[index].unlocked {
            return UnlockOutcome::AlreadyUnlocked;
        }
        if self.points == 0 {
            return UnlockOutcome::InsufficientPoints;
        }
        self.skills[index].unlocked = true;
        self.points -= 1;
        UnlockOutcome::Unlocked
    }

    /// Summed magnitudes of unlocked skills, grouped by modifier key.
    pub fn active_modifiers(&self) -> HashMap<ModifierKey, f32> {
        let mut modifiers = HashMap::new();
        for skill in self.skills.iter().filter(|s| s.unlocked) {
            *modifiers.entry(skill.key).or_insert(0.0) += skill.magnitude;
        }
        modifiers
    }

    /// Summed magnitude for a single key; zero when nothing relevant
    /// is unlocked.
    pub fn modifier(&self, key: ModifierKey) -> f32 {
        self.skills
            .iter()
            .filter(|s| s.unlocked && s.key == key)
            .map(|s| s.magnitude)
            .sum()
    }
}
