//! Damage application with shield absorption.

use hecs::{Entity, World};

use ruinsong_core::components::{Health, Shield};

/// Apply damage to an entity. A shield, if present, absorbs first;
/// any remainder reduces health. Both clamp at zero.
pub fn inflict(world: &mut World, target: Entity, amount: f32) {
    let mut remainder = amount;
    if let Ok(mut shield) = world.get::<&mut Shield>(target) {
        let absorbed = shield.current.min(remainder);
        shield.current -= absorbed;
        remainder -= absorbed;
    }
    if remainder <= 0.0 {
        return;
    }
    if let Ok(mut health) = world.get::<&mut Health>(target) {
        health.current = (health.current - remainder).max(0.0);
    }
}
