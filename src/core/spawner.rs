//! Spawner — requests mobs from a borrowed factory and announces each request.

use rand::Rng;
use std::rc::Rc;

use crate::core::factory::MobFactory;
use crate::schema::mob::{Disposition, Mob};

/// Notice emitted before a spawner asks its factory for a mob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnEvent {
    pub biome: String,
    pub disposition: Disposition,
}

impl SpawnEvent {
    /// Human-readable form of the notice.
    pub fn message(&self) -> String {
        format!(
            "Spawning a {} mob in the {} biome...",
            self.disposition, self.biome
        )
    }
}

/// Receives spawn notices. The spawner never prints on its own.
pub trait SpawnObserver {
    fn on_spawn(&self, event: &SpawnEvent);
}

/// Forwards spawn notices to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SpawnObserver for LogObserver {
    fn on_spawn(&self, event: &SpawnEvent) {
        log::info!("{}", event.message());
    }
}

/// Dispatches spawn requests to one factory.
///
/// The factory stays owned by the caller and can back any number of
/// spawners. The biome label is read once, at construction.
pub struct Spawner<'f> {
    factory: &'f dyn MobFactory,
    biome: String,
    observer: Rc<dyn SpawnObserver>,
}

impl<'f> Spawner<'f> {
    /// A spawner that reports through [`LogObserver`].
    pub fn new(factory: &'f dyn MobFactory) -> Self {
        Self::with_observer(factory, Rc::new(LogObserver))
    }

    pub fn with_observer(factory: &'f dyn MobFactory, observer: Rc<dyn SpawnObserver>) -> Self {
        Self {
            biome: factory.biome_label().to_string(),
            factory,
            observer,
        }
    }

    pub fn biome_label(&self) -> &str {
        &self.biome
    }

    pub fn spawn_hostile(&self) -> Box<dyn Mob> {
        self.announce(Disposition::Hostile);
        self.factory.create_hostile()
    }

    pub fn spawn_neutral(&self) -> Box<dyn Mob> {
        self.announce(Disposition::Neutral);
        self.factory.create_neutral()
    }

    /// Spawn whichever disposition `rng` rolls. `hostile_chance` is clamped
    /// to `0.0..=1.0`; NaN counts as zero.
    pub fn spawn_roll<R: Rng + ?Sized>(&self, rng: &mut R, hostile_chance: f32) -> Box<dyn Mob> {
        let chance = if hostile_chance.is_nan() {
            0.0
        } else {
            hostile_chance.clamp(0.0, 1.0)
        };
        if rng.gen_bool(chance as f64) {
            self.spawn_hostile()
        } else {
            self.spawn_neutral()
        }
    }

    fn announce(&self, disposition: Disposition) {
        self.observer.on_spawn(&SpawnEvent {
            biome: self.biome.clone(),
            disposition,
        });
    }
}

impl std::fmt::Debug for Spawner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spawner")
            .field("biome", &self.biome)
            .finish_non_exhaustive()
    }
}
