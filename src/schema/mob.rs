//! The capability set every mob exposes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::audio::AudioError;

/// Whether a mob attacks on sight or leaves the player alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Hostile,
    Neutral,
}

impl Disposition {
    /// Lowercase adjective used in spawn notices: "hostile", "neutral".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hostile => "hostile",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The concrete variant behind a `dyn Mob`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobKind {
    Creeper,
    Skeleton,
    Mellstroy,
}

impl MobKind {
    /// Display name shared by every instance of the variant.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Creeper => "Creeper",
            Self::Skeleton => "Skeleton",
            Self::Mellstroy => "Mellstroy",
        }
    }

    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Creeper | Self::Skeleton => Disposition::Hostile,
            Self::Mellstroy => Disposition::Neutral,
        }
    }
}

/// A spawned mob.
///
/// Variants share no implementation, only this contract. Every method is
/// deterministic given the construction arguments; `vocalize` is the single
/// place a variant may reach outside itself (to play its audio cue).
pub trait Mob: fmt::Debug {
    fn kind(&self) -> MobKind;

    fn name(&self) -> &str {
        self.kind().display_name()
    }

    fn disposition(&self) -> Disposition {
        self.kind().disposition()
    }

    /// Biome the mob was produced for. Only neutral mobs carry one.
    fn biome(&self) -> Option<&str> {
        None
    }

    /// Static textual summary of the mob.
    fn describe(&self) -> String;

    /// The mob's signature action.
    fn attack(&self) -> String;

    /// The text of the mob's characteristic sound, without playing anything.
    fn sound_line(&self) -> String;

    /// Make the characteristic sound.
    ///
    /// Variants with an audio cue play it to completion before returning the
    /// text; the rest return `sound_line` untouched.
    fn vocalize(&self) -> Result<String, AudioError> {
        Ok(self.sound_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_dispositions() {
        assert_eq!(MobKind::Creeper.disposition(), Disposition::Hostile);
        assert_eq!(MobKind::Skeleton.disposition(), Disposition::Hostile);
        assert_eq!(MobKind::Mellstroy.disposition(), Disposition::Neutral);
    }

    #[test]
    fn disposition_display() {
        assert_eq!(Disposition::Hostile.to_string(), "hostile");
        assert_eq!(format!("{}", Disposition::Neutral), "neutral");
    }

    #[test]
    fn kind_round_trips_through_ron() {
        let text = ron::to_string(&MobKind::Mellstroy).unwrap();
        assert_eq!(text, "Mellstroy");
        let back: MobKind = ron::from_str(&text).unwrap();
        assert_eq!(back, MobKind::Mellstroy);
    }
}
