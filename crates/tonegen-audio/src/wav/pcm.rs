//! 16-bit PCM quantization.

/// Scale applied to unit-range samples before rounding.
pub const PCM16_SCALE: f64 = 32767.0;

/// Quantized mono samples, one `i16` per sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i16>,
}

impl PcmBuffer {
    #[cfg(test)]
    pub(crate) fn from_samples(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The quantized samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Serializes the samples as little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }
}

/// Quantizes samples in `[-1.0, 1.0]` to 16-bit PCM.
///
/// Each value becomes `round(sample * 32767)`. There is no clamp: the input
/// range is expected to be that of `sin`, and out-of-range values saturate
/// at the `i16` bounds through the float-to-int cast.
pub fn quantize_pcm16(samples: &[f64]) -> PcmBuffer {
    let samples = samples
        .iter()
        .map(|&sample| (sample * PCM16_SCALE).round() as i16)
        .collect();
    PcmBuffer { samples }
}
