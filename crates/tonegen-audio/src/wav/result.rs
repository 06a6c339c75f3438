//! In-memory tone rendering.

use super::format::WavFormat;
use super::pcm::quantize_pcm16;
use super::writer::write_wav_to_vec;

/// A tone rendered to WAV bytes.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Quantizes mono samples and wraps them in a WAV container.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = quantize_pcm16(samples).to_le_bytes();
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Length of the PCM data section in bytes.
    pub fn data_len(&self) -> usize {
        self.num_samples * 2
    }
}
