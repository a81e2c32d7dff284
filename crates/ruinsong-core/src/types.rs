//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::ARENA_HALF_EXTENT;

/// World-space placement of an entity: position plus facing.
/// x = East, y = Up, z = North; yaw in degrees, 0 = facing +Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub yaw_degrees: f32,
}

/// Simulation time tracking. Frames advance by a variable `dt`
/// supplied by the caller each step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each step).
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

/// Square play area centered on the origin. The simulation only needs
/// a bounding extent; terrain detail is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    /// Half the side length, in meters.
    pub half_extent: f32,
}

impl Transform {
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }

    /// Unit forward vector on the ground plane.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }

    /// Unit right vector on the ground plane.
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(yaw.cos(), 0.0, -yaw.sin())
    }

    /// Ground-plane distance to a point (vertical offsets ignored).
    pub fn ground_distance_to(&self, point: Vec3) -> f32 {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Yaw in degrees that faces `from` toward `to` on the ground plane.
pub fn yaw_toward(from: Vec3, to: Vec3) -> f32 {
    let delta = to - from;
    delta.x.atan2(delta.z).to_degrees()
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
        }
    }
}

impl ArenaBounds {
    /// Clamp a point's horizontal components into the arena.
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(-self.half_extent, self.half_extent),
            point.y,
            point.z.clamp(-self.half_extent, self.half_extent),
        )
    }

    /// Whether a point lies within the arena horizontally.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x.abs() <= self.half_extent && point.z.abs() <= self.half_extent
    }
}
