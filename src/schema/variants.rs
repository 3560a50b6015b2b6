//! The three mob variants.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::mob::{Mob, MobKind};
use crate::audio::{AudioError, Soundboard};

/// Green four-legged hostile that hisses and blows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Creeper;

impl Mob for Creeper {
    fn kind(&self) -> MobKind {
        MobKind::Creeper
    }

    fn describe(&self) -> String {
        format!("[{}] A green creature on four legs, hissing", self.name())
    }

    fn attack(&self) -> String {
        format!("{}: Starts hissing and explodes after 1.5 seconds!", self.name())
    }

    fn sound_line(&self) -> String {
        "Tsssss... (hissing before the blast)".to_string()
    }
}

/// Bone archer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Skeleton;

impl Mob for Skeleton {
    fn kind(&self) -> MobKind {
        MobKind::Skeleton
    }

    fn describe(&self) -> String {
        format!("[{}] A bone archer with a bow and arrows", self.name())
    }

    fn attack(&self) -> String {
        format!("{}: Fires an arrow from its bow!", self.name())
    }

    fn sound_line(&self) -> String {
        "*bones grinding* ... Clack-clack!".to_string()
    }
}

/// Peaceful mob that loves the casino and shouts its catchphrase out loud.
///
/// Tagged with the biome that produced it. Every `vocalize` plays `cue`
/// through the soundboard before the text comes back.
#[derive(Debug, Clone)]
pub struct Mellstroy {
    biome: String,
    soundboard: Rc<Soundboard>,
    cue: PathBuf,
}

impl Mellstroy {
    pub fn new(
        biome: impl Into<String>,
        soundboard: Rc<Soundboard>,
        cue: impl Into<PathBuf>,
    ) -> Self {
        Self {
            biome: biome.into(),
            soundboard,
            cue: cue.into(),
        }
    }

    pub fn cue(&self) -> &Path {
        &self.cue
    }
}

impl Mob for Mellstroy {
    fn kind(&self) -> MobKind {
        MobKind::Mellstroy
    }

    fn biome(&self) -> Option<&str> {
        if self.biome.is_empty() {
            None
        } else {
            Some(&self.biome)
        }
    }

    fn describe(&self) -> String {
        let origin = match self.biome() {
            Some(biome) => format!(" from the {} biome", biome),
            None => String::new(),
        };
        format!("[{}{}] A peaceful mob who loves the casino", self.name(), origin)
    }

    fn attack(&self) -> String {
        format!("{}: I'm already in the red, can't keep it civil", self.name())
    }

    fn sound_line(&self) -> String {
        "Faster! Faster!".to_string()
    }

    fn vocalize(&self) -> Result<String, AudioError> {
        self.soundboard.play_cue(&self.cue)?;
        Ok(self.sound_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::mob::Disposition;

    fn mellstroy(biome: &str) -> Mellstroy {
        Mellstroy::new(biome, Rc::new(Soundboard::muted()), "cue.mp3")
    }

    #[test]
    fn creeper_text() {
        let creeper = Creeper;
        assert_eq!(creeper.name(), "Creeper");
        assert!(creeper.describe().contains("four legs"));
        assert!(creeper.describe().contains("hissing"));
        assert!(creeper.attack().contains("explodes after 1.5 seconds"));
        assert!(creeper.vocalize().unwrap().contains("hissing"));
        assert_eq!(creeper.biome(), None);
    }

    #[test]
    fn skeleton_text() {
        let skeleton = Skeleton;
        assert_eq!(skeleton.disposition(), Disposition::Hostile);
        assert!(skeleton.describe().contains("bone archer"));
        assert!(skeleton.attack().contains("arrow"));
        assert!(skeleton.vocalize().unwrap().contains("Clack-clack"));
    }

    #[test]
    fn hostile_text_is_repeatable() {
        let mobs: [&dyn Mob; 2] = [&Creeper, &Skeleton];
        for mob in mobs {
            assert_eq!(mob.describe(), mob.describe());
            assert_eq!(mob.attack(), mob.attack());
            assert_eq!(mob.vocalize().unwrap(), mob.vocalize().unwrap());
        }
    }

    #[test]
    fn mellstroy_carries_biome() {
        let mob = mellstroy("Forest");
        assert_eq!(mob.biome(), Some("Forest"));
        assert_eq!(mob.disposition(), Disposition::Neutral);
        assert_eq!(
            mob.describe(),
            "[Mellstroy from the Forest biome] A peaceful mob who loves the casino"
        );
    }

    #[test]
    fn mellstroy_without_biome() {
        let mob = mellstroy("");
        assert_eq!(mob.biome(), None);
        assert_eq!(mob.describe(), "[Mellstroy] A peaceful mob who loves the casino");
    }

    #[test]
    fn muted_mellstroy_still_speaks() {
        let mob = mellstroy("Meadow");
        assert_eq!(mob.vocalize().unwrap(), "Faster! Faster!");
        assert_eq!(mob.cue(), Path::new("cue.mp3"));
    }
}
