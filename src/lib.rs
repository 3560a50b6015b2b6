//! Mob Spawner — biome-specific mob factories and a spawning coordinator.
//!
//! Decouples which mob a biome produces from how that mob behaves once it
//! exists: factories pick the variant, spawners request and announce it, and
//! the mobs themselves only answer for their own text and sound.

pub mod audio;
pub mod config;
pub mod core;
pub mod schema;
