//! Validated tone parameters.

use serde::Serialize;

use crate::error::{AudioError, AudioResult};
use crate::wav::MAX_PCM16_SAMPLES;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 3.0;
/// Default tone frequency in Hz (A4).
pub const DEFAULT_FREQUENCY_HZ: f64 = 440.0;

/// Highest sample rate whose 16-bit mono byte rate fits the `fmt ` chunk.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / 2;

/// Parameters of a single sine tone.
///
/// A `ToneSpec` can only be obtained through [`ToneSpec::new`], so every
/// instance has a positive sample rate, a finite non-negative duration, a
/// finite positive frequency, and a sample count that fits a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneSpec {
    sample_rate: u32,
    duration_seconds: f64,
    frequency_hz: f64,
}

impl ToneSpec {
    /// Validates and builds a tone spec.
    ///
    /// The sample rate is taken as a signed integer so that values such as
    /// `-1` coming from configuration surface as
    /// [`AudioError::InvalidSampleRate`] rather than a parse failure.
    ///
    /// A duration of zero is accepted and yields an empty tone. Frequencies
    /// above Nyquist are accepted; the result aliases.
    pub fn new(sample_rate: i64, duration_seconds: f64, frequency_hz: f64) -> AudioResult<Self> {
        let sample_rate = u32::try_from(sample_rate)
            .ok()
            .filter(|&rate| rate > 0 && rate <= MAX_SAMPLE_RATE)
            .ok_or(AudioError::InvalidSampleRate { rate: sample_rate })?;

        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: duration_seconds,
            });
        }

        if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
            return Err(AudioError::InvalidFrequency { freq: frequency_hz });
        }

        let spec = Self {
            sample_rate,
            duration_seconds,
            frequency_hz,
        };

        let samples = spec.sample_count_f64();
        if samples > MAX_PCM16_SAMPLES as f64 {
            return Err(AudioError::TooManySamples {
                samples: samples as u64,
            });
        }

        Ok(spec)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Tone frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Number of samples, `floor(sample_rate * duration_seconds)`.
    pub fn num_samples(&self) -> usize {
        self.sample_count_f64() as usize
    }

    /// Returns true if the tone frequency is at or above half the sample rate.
    pub fn is_above_nyquist(&self) -> bool {
        self.frequency_hz >= self.sample_rate as f64 / 2.0
    }

    fn sample_count_f64(&self) -> f64 {
        (self.sample_rate as f64 * self.duration_seconds).floor()
    }
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
        }
    }
}
