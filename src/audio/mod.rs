//! Audio seam — clip loading and synchronous playback behind narrow traits.
//!
//! Mobs never touch a decoder or a device directly. They hold a
//! [`Soundboard`], which the composition root builds from a [`ClipLoader`]
//! and a [`ClipPlayer`] and hands to the factories.

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub mod decode;
pub mod output;

pub use decode::SymphoniaLoader;
pub use output::SilentPlayer;
#[cfg(feature = "playback")]
pub use output::RodioPlayer;

#[derive(Debug, Error)]
pub enum AudioError {
    /// The cue could not be read or decoded.
    #[error("failed to load {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    /// The output device refused the clip.
    #[error("playback failed: {0}")]
    Playback(String),
}

impl AudioError {
    pub fn load(path: &Path, reason: impl ToString) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Decoded mono samples at their native rate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoundClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SoundClip {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Wall-clock length of the clip. Zero for an empty or rateless clip.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }
}

/// Turns an audio source into a playable sample buffer.
pub trait ClipLoader {
    fn load(&self, path: &Path) -> Result<SoundClip, AudioError>;
}

/// Renders a sample buffer, blocking until playback has finished.
pub trait ClipPlayer {
    fn play(&self, clip: &SoundClip) -> Result<(), AudioError>;
}

/// Loader and player that do nothing. Backs [`Soundboard::muted`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl ClipLoader for NullAudio {
    fn load(&self, _path: &Path) -> Result<SoundClip, AudioError> {
        Ok(SoundClip::default())
    }
}

impl ClipPlayer for NullAudio {
    fn play(&self, _clip: &SoundClip) -> Result<(), AudioError> {
        Ok(())
    }
}

/// A loader/player pair shared by every mob that makes real noise.
pub struct Soundboard {
    loader: Box<dyn ClipLoader>,
    player: Box<dyn ClipPlayer>,
    muted: bool,
}

impl Soundboard {
    pub fn new(loader: impl ClipLoader + 'static, player: impl ClipPlayer + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            player: Box::new(player),
            muted: false,
        }
    }

    /// A soundboard that never reads a file or opens a device.
    pub fn muted() -> Self {
        Self {
            loader: Box::new(NullAudio),
            player: Box::new(NullAudio),
            muted: true,
        }
    }

    /// Symphonia decoding into the default output device.
    #[cfg(feature = "playback")]
    pub fn system() -> Self {
        Self::new(SymphoniaLoader, RodioPlayer)
    }

    /// Symphonia decoding into a silent wait. Build with the `playback`
    /// feature for real output.
    #[cfg(not(feature = "playback"))]
    pub fn system() -> Self {
        Self::new(SymphoniaLoader, SilentPlayer)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Load the cue at `path` and play it to completion.
    ///
    /// Exactly one load and, if it succeeded, one play per call. A failed
    /// load never reaches the player.
    pub fn play_cue(&self, path: &Path) -> Result<(), AudioError> {
        let clip = self.loader.load(path)?;
        log::debug!(
            "playing '{}' ({} samples at {} Hz)",
            path.display(),
            clip.samples.len(),
            clip.sample_rate
        );
        self.player.play(&clip)
    }
}

impl Default for Soundboard {
    fn default() -> Self {
        Self::muted()
    }
}

impl std::fmt::Debug for Soundboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Soundboard")
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type CallLog = Rc<RefCell<Vec<String>>>;

    struct FakeLoader {
        calls: CallLog,
        fail: bool,
    }

    impl ClipLoader for FakeLoader {
        fn load(&self, path: &Path) -> Result<SoundClip, AudioError> {
            self.calls.borrow_mut().push(format!("load {}", path.display()));
            if self.fail {
                return Err(AudioError::load(path, "missing"));
            }
            Ok(SoundClip::new(vec![0.0; 4], 8_000))
        }
    }

    struct FakePlayer {
        calls: CallLog,
    }

    impl ClipPlayer for FakePlayer {
        fn play(&self, clip: &SoundClip) -> Result<(), AudioError> {
            self.calls
                .borrow_mut()
                .push(format!("play {}", clip.samples.len()));
            Ok(())
        }
    }

    fn board(fail: bool) -> (Soundboard, CallLog) {
        let calls: CallLog = Rc::default();
        let board = Soundboard::new(
            FakeLoader {
                calls: calls.clone(),
                fail,
            },
            FakePlayer {
                calls: calls.clone(),
            },
        );
        (board, calls)
    }

    #[test]
    fn play_cue_loads_then_plays() {
        let (board, calls) = board(false);
        board.play_cue(Path::new("cue.mp3")).unwrap();
        assert_eq!(*calls.borrow(), vec!["load cue.mp3", "play 4"]);
    }

    #[test]
    fn failed_load_skips_player() {
        let (board, calls) = board(true);
        let err = board.play_cue(Path::new("gone.mp3")).unwrap_err();
        assert!(matches!(err, AudioError::Load { .. }));
        assert_eq!(calls.borrow().len(), 1);
        assert!(err.to_string().contains("gone.mp3"));
    }

    #[test]
    fn muted_board_never_fails() {
        let board = Soundboard::muted();
        assert!(board.is_muted());
        assert!(board.play_cue(Path::new("does/not/exist.mp3")).is_ok());
    }

    #[test]
    fn clip_duration() {
        let clip = SoundClip::new(vec![0.0; 22_050], 44_100);
        assert_eq!(clip.duration(), Duration::from_millis(500));
        assert_eq!(SoundClip::default().duration(), Duration::ZERO);
    }
}
