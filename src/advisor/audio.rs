//! Speech audio decoding and output
//!
//! Synthesized speech arrives as base64 encoded 16-bit little-endian PCM,
//! mono, 24 kHz. Samples are normalized to `f32` by dividing by 32768.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{CashflowError, CashflowResult};

/// Sample rate of synthesized speech
pub const SAMPLE_RATE: u32 = 24_000;

/// Channel count of synthesized speech
pub const CHANNELS: u16 = 1;

/// Decode a base64 PCM payload into normalized samples
pub fn decode_pcm16_base64(payload: &str) -> CashflowResult<Vec<f32>> {
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(decode_pcm16(&bytes))
}

/// Decode little-endian 16-bit PCM into samples in `[-1.0, 1.0]`
///
/// A trailing odd byte is ignored.
pub fn decode_pcm16(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

/// Where decoded speech goes
pub trait AudioOutput {
    fn play(&self, samples: &[f32]) -> CashflowResult<()>;
}

/// Writes speech to a 16-bit mono WAV file
#[derive(Debug, Clone)]
pub struct WavFileOutput {
    path: PathBuf,
}

impl WavFileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioOutput for WavFileOutput {
    fn play(&self, samples: &[f32]) -> CashflowResult<()> {
        let spec = hound::WavSpec {
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let audio_err = |e: hound::Error| {
            CashflowError::Audio(format!("Failed to write {}: {}", self.path.display(), e))
        };

        let mut writer = hound::WavWriter::create(&self.path, spec).map_err(audio_err)?;
        for sample in samples {
            let value = (sample * 32768.0).clamp(i16::MIN as f32, i16::MAX as f32) as i16;
            writer.write_sample(value).map_err(audio_err)?;
        }
        writer.finalize().map_err(audio_err)?;

        Ok(())
    }
}

/// Plays speech on the default output device, blocking until it ends
#[cfg(feature = "playback")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeakerOutput;

#[cfg(feature = "playback")]
impl AudioOutput for SpeakerOutput {
    fn play(&self, samples: &[f32]) -> CashflowResult<()> {
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| CashflowError::Audio(format!("No audio output device: {}", e)))?;
        let sink = rodio::Sink::try_new(&handle)
            .map_err(|e| CashflowError::Audio(format!("Failed to open audio sink: {}", e)))?;

        sink.append(rodio::buffer::SamplesBuffer::new(
            CHANNELS,
            SAMPLE_RATE,
            samples.to_vec(),
        ));
        sink.sleep_until_end();

        Ok(())
    }
}
