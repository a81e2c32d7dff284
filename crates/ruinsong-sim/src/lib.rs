//! Simulation engine for RUINSONG.
//!
//! Owns the hecs ECS world, processes player commands, advances every
//! subsystem in fixed order each frame, and produces `GameSnapshot`s
//! for the presentation layer. Completely headless.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use ruinsong_core as core;
