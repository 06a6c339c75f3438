//! RIFF/WAVE serialization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Length of the canonical header written by [`write_wav`].
pub const WAV_HEADER_LEN: usize = 44;

/// Writes a complete WAV file: header followed by `pcm_data`.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Little-endian PCM bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "PCM data exceeds 4 GiB"))?;
    let riff_size = 36 + data_size; // file size minus the 8-byte RIFF preamble

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Panics
/// If `pcm_data` is too large for a RIFF size field. Callers holding a
/// validated [`ToneSpec`](crate::ToneSpec) never reach that bound.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("PCM data within RIFF size limits");
    buffer
}
