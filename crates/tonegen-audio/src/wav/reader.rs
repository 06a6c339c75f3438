//! Minimal RIFF/WAVE reading, used to check written files.

/// Header fields decoded from a PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second, as stored.
    pub byte_rate: u32,
    /// Bytes per sample frame, as stored.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Length of the `data` chunk payload in bytes.
    pub data_len: usize,
}

impl WavInfo {
    /// Number of sample frames in the data chunk.
    pub fn num_samples(&self) -> usize {
        if self.block_align == 0 {
            0
        } else {
            self.data_len / self.block_align as usize
        }
    }
}

struct Chunk<'a> {
    id: &'a [u8],
    body: &'a [u8],
}

/// Iterates the chunks after the `WAVE` tag, stopping at the first truncated one.
fn chunks(wav_data: &[u8]) -> Option<impl Iterator<Item = Chunk<'_>>> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    Some(std::iter::from_fn(move || {
        let header = wav_data.get(pos..pos + 8)?;
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
        let start = pos + 8;
        let body = wav_data.get(start..start.checked_add(size)?)?;

        pos = start + size;
        // Chunks are word-aligned
        if size % 2 != 0 {
            pos += 1;
        }

        Some(Chunk {
            id: &header[0..4],
            body,
        })
    }))
}

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Decodes the format and data length of a PCM WAV file.
///
/// Returns `None` unless the buffer is a RIFF/WAVE file whose `fmt ` chunk
/// declares integer PCM and which contains a complete `data` chunk.
pub fn read_wav_info(wav_data: &[u8]) -> Option<WavInfo> {
    let mut fmt: Option<&[u8]> = None;
    let mut data_len = None;

    for chunk in chunks(wav_data)? {
        match chunk.id {
            b"fmt " => fmt = Some(chunk.body),
            b"data" => {
                data_len = Some(chunk.body.len());
                break;
            }
            _ => {}
        }
    }

    let fmt = fmt.filter(|body| body.len() >= 16)?;
    if u16_at(fmt, 0) != 1 {
        return None;
    }

    Some(WavInfo {
        channels: u16_at(fmt, 2),
        sample_rate: u32_at(fmt, 4),
        byte_rate: u32_at(fmt, 8),
        block_align: u16_at(fmt, 12),
        bits_per_sample: u16_at(fmt, 14),
        data_len: data_len?,
    })
}

/// Extracts the `data` chunk payload from a WAV file buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    chunks(wav_data)?
        .find(|chunk| chunk.id == b"data")
        .map(|chunk| chunk.body)
}

/// BLAKE3 hash of the PCM payload of a WAV file, as hex.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
