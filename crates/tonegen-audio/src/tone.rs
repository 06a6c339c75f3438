//! Writing tones to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{AudioError, AudioResult};
use crate::spec::ToneSpec;
use crate::synthesis::synthesize_sine;
use crate::wav::WavResult;

/// Outcome of writing a tone file.
#[derive(Debug, Clone, Serialize)]
pub struct ToneReport {
    /// Path the file was written to, as given by the caller.
    pub requested_path: PathBuf,
    /// Absolute path of the written file.
    pub path: PathBuf,
    /// Size of the file on disk in bytes.
    pub file_size: u64,
    /// Number of samples in the data chunk.
    pub num_samples: usize,
    /// Length of the data chunk in bytes.
    pub data_len: usize,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
    /// Parameters the tone was generated from.
    pub spec: ToneSpec,
}

/// Synthesizes a sine tone and writes it as a mono 16-bit PCM WAV file.
///
/// # Example
///
/// ```no_run
/// use tonegen_audio::{ToneFileWriter, ToneSpec};
///
/// let spec = ToneSpec::new(44100, 3.0, 440.0)?;
/// let report = ToneFileWriter::new(spec).write_to("storage/app/audio/input.wav")?;
/// assert_eq!(report.num_samples, 132300);
/// # Ok::<(), tonegen_audio::AudioError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToneFileWriter {
    spec: ToneSpec,
}

impl ToneFileWriter {
    /// Creates a writer for the given tone.
    pub fn new(spec: ToneSpec) -> Self {
        Self { spec }
    }

    /// The tone this writer produces.
    pub fn spec(&self) -> &ToneSpec {
        &self.spec
    }

    /// Renders the tone into WAV bytes without touching the filesystem.
    pub fn render(&self) -> WavResult {
        let samples = synthesize_sine(&self.spec);
        WavResult::from_mono(&samples, self.spec.sample_rate())
    }

    /// Writes the tone to `path`, creating parent directories as needed.
    ///
    /// An existing file at `path` is truncated. The file handle is closed
    /// before this returns, on success and on error.
    pub fn write_to(&self, path: impl AsRef<Path>) -> AudioResult<ToneReport> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| AudioError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let wav = self.render();

        let file = File::create(path).map_err(|e| AudioError::write(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&wav.wav_data)
            .map_err(|e| AudioError::write(path, e))?;
        writer.flush().map_err(|e| AudioError::write(path, e))?;
        drop(writer);

        let file_size = fs::metadata(path)
            .map_err(|e| AudioError::write(path, e))?
            .len();
        let absolute = fs::canonicalize(path).map_err(|e| AudioError::write(path, e))?;

        Ok(ToneReport {
            requested_path: path.to_path_buf(),
            path: absolute,
            file_size,
            num_samples: wav.num_samples,
            data_len: wav.data_len(),
            pcm_hash: wav.pcm_hash,
            spec: self.spec,
        })
    }
}
