//! File decoding via symphonia.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::{AudioError, ClipLoader, SoundClip};

/// Decodes any format symphonia was built with (mp3 included) into a mono
/// clip at the file's native sample rate. Multi-channel frames are averaged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaLoader;

impl ClipLoader for SymphoniaLoader {
    fn load(&self, path: &Path) -> Result<SoundClip, AudioError> {
        let file = File::open(path).map_err(|e| AudioError::load(path, e))?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                stream,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::load(path, e))?;
        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| AudioError::load(path, "no decodable audio track"))?;
        let track_id = track.id;
        let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::load(path, e))?;

        let mut samples = Vec::new();
        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(e) => return Err(AudioError::load(path, e)),
            };
            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                // A corrupt frame is skipped, the rest of the stream still plays.
                Err(SymphoniaError::DecodeError(reason)) => {
                    log::debug!("skipping bad frame in '{}': {}", path.display(), reason);
                    continue;
                }
                Err(e) => return Err(AudioError::load(path, e)),
            };

            let spec = *decoded.spec();
            sample_rate = spec.rate;
            let channels = spec.channels.count().max(1);

            let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
            buffer.copy_interleaved_ref(decoded);
            samples.extend(downmix(buffer.samples(), channels));
        }

        if samples.is_empty() {
            return Err(AudioError::load(path, "stream contained no samples"));
        }

        Ok(SoundClip::new(samples, sample_rate))
    }
}

/// Average interleaved frames down to one channel.
fn downmix(interleaved: &[f32], channels: usize) -> impl Iterator<Item = f32> + '_ {
    interleaved
        .chunks(channels)
        .map(move |frame| frame.iter().sum::<f32>() / frame.len() as f32)
}
