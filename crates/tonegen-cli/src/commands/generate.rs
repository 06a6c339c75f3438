//! Generate command implementation
//!
//! Resolves the tone configuration, writes the WAV file, and reports it.

use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tonegen_audio::wav::{compute_pcm_hash, read_wav_info};
use tonegen_audio::{AudioError, ToneFileWriter, ToneReport, ToneSpec, WavInfo};

use super::json_output::{
    error_codes, warning_codes, GenerateOutput, GenerateResult, JsonError, JsonWarning,
};
use crate::config::{ConfigError, ConfigOverrides, ToneConfig};

/// Inputs to a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Optional JSON config file.
    pub config_path: Option<PathBuf>,
    /// Values that take precedence over the config file.
    pub overrides: ConfigOverrides,
    /// Re-read the written file and check its header and PCM hash.
    pub verify: bool,
}

/// A generation failure, kept structured for JSON output.
#[derive(Debug)]
pub enum GenerateError {
    /// Config file could not be loaded.
    Config(ConfigError),
    /// Tone parameters were rejected or the file could not be written.
    Audio(AudioError),
    /// The written file did not match what was requested.
    Verify { path: PathBuf, message: String },
}

impl GenerateError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Config(e) => e.code(),
            GenerateError::Audio(e) => e.code(),
            GenerateError::Verify { .. } => error_codes::VERIFY_MISMATCH,
        }
    }

    fn to_json(&self) -> JsonError {
        let err = JsonError::new(self.code(), self.to_string());
        match self {
            GenerateError::Config(ConfigError::FileRead { path, .. })
            | GenerateError::Config(ConfigError::JsonParse { path, .. })
            | GenerateError::Audio(AudioError::CreateDir { path, .. })
            | GenerateError::Audio(AudioError::Write { path, .. })
            | GenerateError::Verify { path, .. } => err.with_file(path.display().to_string()),
            _ => err,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Config(e) => write!(f, "{}", e),
            GenerateError::Audio(e) => write!(f, "{}", e),
            GenerateError::Verify { path, message } => {
                write!(f, "verification of '{}' failed: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Config(e) => Some(e),
            GenerateError::Audio(e) => Some(e),
            GenerateError::Verify { .. } => None,
        }
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

impl From<AudioError> for GenerateError {
    fn from(e: AudioError) -> Self {
        GenerateError::Audio(e)
    }
}

/// Human-readable format line, e.g. `WAV, Mono, 16-bit, 44100 Hz`.
pub fn format_description(sample_rate: u32) -> String {
    format!("WAV, Mono, 16-bit, {} Hz", sample_rate)
}

/// Merges the config file (if any) with the overrides.
pub fn resolve_config(options: &GenerateOptions) -> Result<ToneConfig, ConfigError> {
    let base = match &options.config_path {
        Some(path) => ToneConfig::load(path)?,
        None => ToneConfig::default(),
    };
    Ok(base.with_overrides(options.overrides.clone()))
}

/// Resolves the config, writes the tone, and optionally verifies it.
///
/// Argument validation happens before any filesystem access, so a rejected
/// spec never creates directories or files.
pub fn generate(options: &GenerateOptions) -> Result<ToneReport, GenerateError> {
    let config = resolve_config(options)?;
    let spec = config.to_spec()?;
    let report = ToneFileWriter::new(spec).write_to(&config.output_path)?;

    if options.verify {
        verify_file(&report)?;
    }

    Ok(report)
}

/// Reads the reported file back and checks its header and PCM hash.
pub fn verify_file(report: &ToneReport) -> Result<WavInfo, GenerateError> {
    let path = report.path.as_path();
    let spec = &report.spec;
    let mismatch = |message: String| GenerateError::Verify {
        path: path.to_path_buf(),
        message,
    };

    let bytes = std::fs::read(path).map_err(|e| AudioError::write(path, e))?;
    let info = read_wav_info(&bytes).ok_or_else(|| mismatch("not a PCM WAV file".into()))?;

    let expected = (1u16, 16u16, spec.sample_rate(), spec.num_samples());
    let actual = (
        info.channels,
        info.bits_per_sample,
        info.sample_rate,
        info.num_samples(),
    );
    if actual != expected {
        return Err(mismatch(format!(
            "expected channels/bits/rate/samples {:?}, found {:?}",
            expected, actual
        )));
    }

    let pcm_hash =
        compute_pcm_hash(&bytes).ok_or_else(|| mismatch("missing data chunk".into()))?;
    if pcm_hash != report.pcm_hash {
        return Err(mismatch(format!(
            "PCM hash {} does not match generated {}",
            pcm_hash, report.pcm_hash
        )));
    }

    Ok(info)
}

fn nyquist_warning(spec: &ToneSpec) -> Option<String> {
    spec.is_above_nyquist().then(|| {
        format!(
            "{} Hz is at or above Nyquist ({} Hz); the tone will alias",
            spec.frequency_hz(),
            spec.sample_rate() as f64 / 2.0
        )
    })
}

/// Run the generate command
///
/// # Arguments
/// * `options` - Config file, overrides, and verification flag
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let report = generate(options)?;
    let spec = &report.spec;

    println!(
        "{} {}",
        "Test audio file created:".green().bold(),
        report.requested_path.display()
    );
    println!("  {} {} bytes", "File size:".dimmed(), report.file_size);
    println!(
        "  {} {} Hz sine wave, {} seconds",
        "Audio:".dimmed(),
        spec.frequency_hz(),
        spec.duration_seconds()
    );
    println!(
        "  {} {}",
        "Format:".dimmed(),
        format_description(spec.sample_rate())
    );
    println!("  {} {} samples", "Length:".dimmed(), report.num_samples);
    println!("  {} {}", "Location:".dimmed(), report.path.display());
    println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
    if options.verify {
        println!("  {} header and PCM hash match", "ok".green());
    }
    if let Some(warning) = nyquist_warning(spec) {
        println!("  {} {}", "!".yellow(), warning);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let (output, code) = match generate(options) {
        Ok(report) => {
            let warnings = nyquist_warning(&report.spec)
                .map(|w| JsonWarning::new(warning_codes::ABOVE_NYQUIST, w))
                .into_iter()
                .collect();
            let result = GenerateResult::from_report(&report, options.verify);
            (GenerateOutput::success(result, warnings), ExitCode::SUCCESS)
        }
        Err(e) => (GenerateOutput::failure(vec![e.to_json()]), ExitCode::from(1)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonegen_audio::wav::WAV_HEADER_LEN;

    fn options_in(dir: &Path) -> GenerateOptions {
        GenerateOptions {
            overrides: ConfigOverrides {
                duration_seconds: Some(0.01),
                output_path: Some(dir.join("audio/input.wav")),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_format_description() {
        assert_eq!(format_description(44100), "WAV, Mono, 16-bit, 44100 Hz");
    }

    #[test]
    fn test_generate_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(&options_in(dir.path())).unwrap();

        assert_eq!(report.num_samples, 441);
        assert!(dir.path().join("audio/input.wav").is_file());
    }

    #[test]
    fn test_generate_verifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = options_in(dir.path());
        options.verify = true;

        assert!(generate(&options).is_ok());
    }

    #[test]
    fn test_invalid_rate_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = options_in(dir.path());
        options.overrides.sample_rate = Some(-1);

        let err = generate(&options).unwrap_err();

        assert_eq!(err.code(), "TONE_001");
        assert!(!dir.path().join("audio").exists());
    }

    #[test]
    fn test_config_file_then_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tone.json");
        std::fs::write(
            &config_path,
            r#"{"sampleRate": 8000, "frequencyHz": 1000, "durationSeconds": 5}"#,
        )
        .unwrap();

        let options = GenerateOptions {
            config_path: Some(config_path),
            overrides: ConfigOverrides {
                duration_seconds: Some(0.5),
                ..Default::default()
            },
            verify: false,
        };
        let config = resolve_config(&options).unwrap();

        assert_eq!(config.sample_rate, 8000);
        assert_eq!(config.frequency_hz, 1000.0);
        assert_eq!(config.duration_seconds, 0.5);
    }

    fn write_report(dir: &Path, spec: ToneSpec) -> ToneReport {
        ToneFileWriter::new(spec)
            .write_to(dir.join("tone.wav"))
            .unwrap()
    }

    #[test]
    fn test_verify_detects_header_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = write_report(dir.path(), ToneSpec::new(8000, 0.1, 440.0).unwrap());
        assert!(verify_file(&report).is_ok());

        report.spec = ToneSpec::new(16000, 0.1, 440.0).unwrap();
        let err = verify_file(&report).unwrap_err();

        assert_eq!(err.code(), "CLI_003");
    }

    #[test]
    fn test_verify_detects_corrupted_pcm_byte() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(dir.path(), ToneSpec::new(8000, 0.1, 440.0).unwrap());

        let mut bytes = std::fs::read(&report.path).unwrap();
        bytes[WAV_HEADER_LEN + 5] ^= 0x01;
        std::fs::write(&report.path, &bytes).unwrap();

        let err = verify_file(&report).unwrap_err();
        assert_eq!(err.code(), "CLI_003");
        assert!(err.to_string().contains("PCM hash"));
    }

    #[test]
    fn test_verify_rejects_non_wav() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(dir.path(), ToneSpec::default());
        std::fs::write(&report.path, b"hello").unwrap();

        let err = verify_file(&report).unwrap_err();
        assert!(err.to_string().contains("not a PCM WAV file"));
    }

    #[test]
    fn test_create_dir_error_json_carries_file() {
        let err = GenerateError::Audio(AudioError::CreateDir {
            path: PathBuf::from("storage/app/audio"),
            source: std::io::Error::other("not a directory"),
        });
        let json = err.to_json();

        assert_eq!(json.code, "TONE_101");
        assert_eq!(json.file.as_deref(), Some("storage/app/audio"));
    }

    #[test]
    fn test_error_json_carries_file() {
        let err = GenerateError::Config(ConfigError::JsonParse {
            path: PathBuf::from("tone.json"),
            message: "oops".into(),
        });
        let json = err.to_json();

        assert_eq!(json.code, "CLI_002");
        assert_eq!(json.file.as_deref(), Some("tone.json"));
    }

    #[test]
    fn test_nyquist_warning() {
        assert!(nyquist_warning(&ToneSpec::default()).is_none());
        let spec = ToneSpec::new(8000, 0.1, 4000.0).unwrap();
        assert!(nyquist_warning(&spec).unwrap().contains("Nyquist"));
    }
}
