//! Systems that operate on the simulation world each frame.
//!
//! Systems are functions over `&mut World` plus whatever engine state
//! they need. They do not own state; persistent state lives in
//! components or on the engine.

pub mod companion;
pub mod damage;
pub mod hostile;
pub mod player;
pub mod snapshot;
pub mod spawner;
