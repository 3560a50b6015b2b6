//! Biome factories — which mob a biome produces for each disposition.
//!
//! A new biome is a new type implementing [`MobFactory`]; nothing else in the
//! crate needs to change.

use std::path::PathBuf;
use std::rc::Rc;

use crate::audio::Soundboard;
use crate::schema::mob::Mob;
use crate::schema::variants::{Creeper, Mellstroy, Skeleton};

/// Default location of the neutral mob's audio cue.
pub const DEFAULT_CUE: &str = "assets/mellstroy.mp3";

/// Produces one hostile and one neutral variant for a single biome.
///
/// Both creators are total and side-effect free apart from allocation.
pub trait MobFactory {
    /// Name of the biome this factory serves, e.g. "Forest".
    fn biome_label(&self) -> &str;

    fn create_hostile(&self) -> Box<dyn Mob>;

    fn create_neutral(&self) -> Box<dyn Mob>;
}

/// Audio wiring shared by the built-in factories.
#[derive(Debug, Clone)]
struct NeutralVoice {
    soundboard: Rc<Soundboard>,
    cue: PathBuf,
}

impl Default for NeutralVoice {
    fn default() -> Self {
        Self {
            soundboard: Rc::new(Soundboard::muted()),
            cue: PathBuf::from(DEFAULT_CUE),
        }
    }
}

impl NeutralVoice {
    fn mellstroy(&self, biome: &str) -> Box<dyn Mob> {
        Box::new(Mellstroy::new(
            biome,
            Rc::clone(&self.soundboard),
            self.cue.clone(),
        ))
    }
}

/// Forest: skeletons and a forest-tagged Mellstroy.
#[derive(Debug, Clone, Default)]
pub struct ForestMobFactory {
    voice: NeutralVoice,
}

impl ForestMobFactory {
    pub const BIOME: &'static str = "Forest";

    /// A factory whose neutral mob is muted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_soundboard(mut self, soundboard: Rc<Soundboard>) -> Self {
        self.voice.soundboard = soundboard;
        self
    }

    pub fn with_cue(mut self, cue: impl Into<PathBuf>) -> Self {
        self.voice.cue = cue.into();
        self
    }
}

impl MobFactory for ForestMobFactory {
    fn biome_label(&self) -> &str {
        Self::BIOME
    }

    fn create_hostile(&self) -> Box<dyn Mob> {
        Box::new(Skeleton)
    }

    fn create_neutral(&self) -> Box<dyn Mob> {
        self.voice.mellstroy(Self::BIOME)
    }
}

/// Meadow: creepers and a meadow-tagged Mellstroy.
#[derive(Debug, Clone, Default)]
pub struct MeadowMobFactory {
    voice: NeutralVoice,
}

impl MeadowMobFactory {
    pub const BIOME: &'static str = "Meadow";

    /// A factory whose neutral mob is muted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_soundboard(mut self, soundboard: Rc<Soundboard>) -> Self {
        self.voice.soundboard = soundboard;
        self
    }

    pub fn with_cue(mut self, cue: impl Into<PathBuf>) -> Self {
        self.voice.cue = cue.into();
        self
    }
}

impl MobFactory for MeadowMobFactory {
    fn biome_label(&self) -> &str {
        Self::BIOME
    }

    fn create_hostile(&self) -> Box<dyn Mob> {
        Box::new(Creeper)
    }

    fn create_neutral(&self) -> Box<dyn Mob> {
        self.voice.mellstroy(Self::BIOME)
    }
}
