//! Players: a silent stand-in and, behind the `playback` feature, rodio.

use std::thread;

use super::{AudioError, ClipPlayer, SoundClip};

/// Blocks for the clip's duration without opening a device.
///
/// Keeps the timing of a real playback on machines without audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl ClipPlayer for SilentPlayer {
    fn play(&self, clip: &SoundClip) -> Result<(), AudioError> {
        let duration = clip.duration();
        log::debug!("silent playback for {:?}", duration);
        thread::sleep(duration);
        Ok(())
    }
}

/// Plays clips on the default output device.
#[cfg(feature = "playback")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RodioPlayer;

#[cfg(feature = "playback")]
impl ClipPlayer for RodioPlayer {
    fn play(&self, clip: &SoundClip) -> Result<(), AudioError> {
        if clip.is_empty() {
            return Ok(());
        }
        // The stream has to outlive the sink or playback stops immediately.
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| AudioError::Playback(e.to_string()))?;
        let sink = rodio::Sink::try_new(&handle).map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.append(rodio::buffer::SamplesBuffer::new(
            1,
            clip.sample_rate,
            clip.samples.clone(),
        ));
        sink.sleep_until_end();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn silent_player_waits_for_clip_length() {
        let clip = SoundClip::new(vec![0.0; 40], 1_000);
        let started = Instant::now();
        SilentPlayer.play(&clip).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn silent_player_accepts_empty_clip() {
        assert!(SilentPlayer.play(&SoundClip::default()).is_ok());
    }
}
