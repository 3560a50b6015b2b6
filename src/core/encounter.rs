//! Encounters — the ordered spawn requests a driver run makes.

use rustc_hash::FxHashMap;
use std::rc::Rc;
use thiserror::Error;

use crate::core::factory::{ForestMobFactory, MeadowMobFactory};
use crate::core::registry::FactoryRegistry;
use crate::core::spawner::{SpawnObserver, Spawner};
use crate::schema::mob::{Disposition, Mob};

#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("unknown biome '{name}' (available: {available})")]
    UnknownBiome { name: String, available: String },
}

/// One mob to request from one biome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub biome: String,
    pub disposition: Disposition,
}

impl SpawnRequest {
    pub fn new(biome: impl Into<String>, disposition: Disposition) -> Self {
        Self {
            biome: biome.into(),
            disposition,
        }
    }
}

/// Four mobs over both built-in biomes: forest hostile, meadow neutral,
/// meadow hostile, forest neutral.
pub fn scripted() -> Vec<SpawnRequest> {
    vec![
        SpawnRequest::new(ForestMobFactory::BIOME, Disposition::Hostile),
        SpawnRequest::new(MeadowMobFactory::BIOME, Disposition::Neutral),
        SpawnRequest::new(MeadowMobFactory::BIOME, Disposition::Hostile),
        SpawnRequest::new(ForestMobFactory::BIOME, Disposition::Neutral),
    ]
}

/// Hostile then neutral from a single biome, looked up by name.
pub fn biome_pair(
    registry: &FactoryRegistry,
    name: &str,
) -> Result<Vec<SpawnRequest>, EncounterError> {
    let factory = registry
        .get(name)
        .ok_or_else(|| unknown_biome(registry, name))?;
    let label = factory.biome_label();
    Ok(vec![
        SpawnRequest::new(label, Disposition::Hostile),
        SpawnRequest::new(label, Disposition::Neutral),
    ])
}

/// Spawn every request in order, one spawner per biome, handing each mob to
/// `visit` as soon as it exists.
///
/// All biomes are resolved first; an unknown one fails the run before any
/// mob is spawned. Returns the number of mobs spawned.
pub fn run(
    registry: &FactoryRegistry,
    requests: &[SpawnRequest],
    observer: Rc<dyn SpawnObserver>,
    mut visit: impl FnMut(&SpawnRequest, Box<dyn Mob>),
) -> Result<usize, EncounterError> {
    let mut spawners: FxHashMap<&str, Spawner<'_>> = FxHashMap::default();
    for request in requests {
        if spawners.contains_key(request.biome.as_str()) {
            continue;
        }
        let factory = registry
            .get(&request.biome)
            .ok_or_else(|| unknown_biome(registry, &request.biome))?;
        spawners.insert(
            request.biome.as_str(),
            Spawner::with_observer(factory, Rc::clone(&observer)),
        );
    }

    for request in requests {
        let spawner = &spawners[request.biome.as_str()];
        let mob = match request.disposition {
            Disposition::Hostile => spawner.spawn_hostile(),
            Disposition::Neutral => spawner.spawn_neutral(),
        };
        visit(request, mob);
    }
    Ok(requests.len())
}

fn unknown_biome(registry: &FactoryRegistry, name: &str) -> EncounterError {
    EncounterError::UnknownBiome {
        name: name.to_string(),
        available: registry.labels().join(", "),
    }
}
