//! tonegen audio
//!
//! Synthesizes a fixed-frequency sine tone and writes it as a mono 16-bit
//! PCM WAV file, for use as audio fixture data.
//!
//! # Determinism
//!
//! Output depends only on the [`ToneSpec`]. Writing the same spec twice
//! produces byte-identical files; the header carries no timestamps or
//! optional chunks.
//!
//! # Example
//!
//! ```ignore
//! use tonegen_audio::{ToneFileWriter, ToneSpec};
//!
//! let spec = ToneSpec::new(44100, 3.0, 440.0)?;
//! let report = ToneFileWriter::new(spec).write_to("storage/app/audio/input.wav")?;
//! println!("{} bytes at {}", report.file_size, report.path.display());
//! ```
//!
//! # Crate Structure
//!
//! - [`spec`] - Validated tone parameters
//! - [`synthesis`] - Sine sample generation
//! - [`wav`] - PCM quantization and the RIFF/WAVE writer and reader
//! - [`tone`] - [`ToneFileWriter`], which ties the above to the filesystem
//! - [`error`] - Error type and classification

pub mod error;
pub mod spec;
pub mod synthesis;
pub mod tone;
pub mod wav;

pub use error::{AudioError, AudioResult, ErrorKind};
pub use spec::ToneSpec;
pub use tone::{ToneFileWriter, ToneReport};
pub use wav::{WavInfo, WavResult};
