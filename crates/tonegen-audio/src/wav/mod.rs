//! Deterministic mono 16-bit PCM WAV encoding.
//!
//! Files are written with the canonical 44-byte RIFF/WAVE header and no
//! optional chunks, so identical samples always produce identical bytes.
//! The reader side understands just enough RIFF to check what was written.

mod format;
mod pcm;
mod reader;
mod result;
mod writer;


pub use format::WavFormat;
pub use pcm::{quantize_pcm16, PcmBuffer, PCM16_SCALE};
pub use reader::{compute_pcm_hash, extract_pcm_data, read_wav_info, WavInfo};
pub use result::WavResult;
pub use writer::{write_wav, write_wav_to_vec, WAV_HEADER_LEN};

/// Largest sample count whose 16-bit data chunk still fits the RIFF size field.
pub const MAX_PCM16_SAMPLES: u64 = (u32::MAX as u64 - 36) / 2;
