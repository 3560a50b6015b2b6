//! Factory registry keyed by biome label.

use rustc_hash::FxHashMap;
use std::path::Path;
use std::rc::Rc;

use crate::audio::Soundboard;
use crate::core::factory::{ForestMobFactory, MeadowMobFactory, MobFactory};

/// Owns factories and hands them out by biome name.
///
/// Lookups ignore ASCII case, so "forest" finds the "Forest" factory.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: FxHashMap<String, Box<dyn MobFactory>>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forest and Meadow, both voicing their neutral mob through `soundboard`.
    pub fn with_defaults(soundboard: Rc<Soundboard>, cue: &Path) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(
            ForestMobFactory::new()
                .with_soundboard(Rc::clone(&soundboard))
                .with_cue(cue),
        ));
        registry.register(Box::new(
            MeadowMobFactory::new()
                .with_soundboard(soundboard)
                .with_cue(cue),
        ));
        registry
    }

    /// Add a factory under its own biome label, replacing any previous one.
    pub fn register(&mut self, factory: Box<dyn MobFactory>) {
        let key = factory.biome_label().to_ascii_lowercase();
        self.factories.insert(key, factory);
    }

    pub fn get(&self, biome: &str) -> Option<&dyn MobFactory> {
        self.factories
            .get(&biome.to_ascii_lowercase())
            .map(|factory| &**factory)
    }

    /// Biome labels as the factories spell them, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .factories
            .values()
            .map(|factory| factory.biome_label())
            .collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::mob::{Mob, MobKind};
    use crate::schema::variants::Skeleton;

    struct SwampMobFactory;

    impl MobFactory for SwampMobFactory {
        fn biome_label(&self) -> &str {
            "Swamp"
        }

        fn create_hostile(&self) -> Box<dyn Mob> {
            Box::new(Skeleton)
        }

        fn create_neutral(&self) -> Box<dyn Mob> {
            Box::new(Skeleton)
        }
    }

    fn defaults() -> FactoryRegistry {
        FactoryRegistry::with_defaults(Rc::new(Soundboard::muted()), Path::new("cue.mp3"))
    }

    #[test]
    fn defaults_cover_both_biomes() {
        let registry = defaults();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.labels(), vec!["Forest", "Meadow"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = defaults();
        let forest = registry.get("forest").unwrap();
        assert_eq!(forest.biome_label(), "Forest");
        assert_eq!(forest.create_hostile().kind(), MobKind::Skeleton);
        assert!(registry.get("MEADOW").is_some());
        assert!(registry.get("tundra").is_none());
    }

    #[test]
    fn register_new_biome() {
        let mut registry = defaults();
        registry.register(Box::new(SwampMobFactory));
        assert_eq!(registry.labels(), vec!["Forest", "Meadow", "Swamp"]);
        assert_eq!(registry.get("swamp").unwrap().biome_label(), "Swamp");
    }

    #[test]
    fn empty_registry() {
        let registry = FactoryRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.labels().is_empty());
    }
}
