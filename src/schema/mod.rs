//! Mob contract and the concrete mob variants.

pub mod mob;
pub mod variants;
