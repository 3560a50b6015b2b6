//! Factories, the registry that indexes them by biome, the spawner, and the
//! encounters drivers run through it.

pub mod encounter;
pub mod factory;
pub mod registry;
pub mod spawner;
