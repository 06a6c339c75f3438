//! Tone configuration: defaults, JSON config files, and flag overrides.
//!
//! Recognized keys are `sampleRate`, `durationSeconds`, `frequencyHz` and
//! `outputPath`. Their snake_case spellings are accepted as aliases and any
//! key left out keeps its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tonegen_audio::spec::{DEFAULT_DURATION_SECONDS, DEFAULT_FREQUENCY_HZ, DEFAULT_SAMPLE_RATE};
use tonegen_audio::{AudioResult, ToneSpec};

/// Default output location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "storage/app/audio/input.wav";

/// Everything needed to produce one tone file.
///
/// Values are kept as given; range checks happen in [`ToneConfig::to_spec`]
/// so that a config file with `"sampleRate": -1` loads and is then rejected
/// with the same error a flag would produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ToneConfig {
    /// Sample rate in Hz.
    #[serde(alias = "sample_rate")]
    pub sample_rate: i64,
    /// Duration in seconds.
    #[serde(alias = "duration_seconds")]
    pub duration_seconds: f64,
    /// Tone frequency in Hz.
    #[serde(alias = "frequency_hz")]
    pub frequency_hz: f64,
    /// Where to write the WAV file.
    #[serde(alias = "output_path")]
    pub output_path: PathBuf,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: i64::from(DEFAULT_SAMPLE_RATE),
            duration_seconds: DEFAULT_DURATION_SECONDS,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Per-field overrides, typically from command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub sample_rate: Option<i64>,
    pub duration_seconds: Option<f64>,
    pub frequency_hz: Option<f64>,
    pub output_path: Option<PathBuf>,
}

/// Errors that can occur while loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File is not a valid config document.
    JsonParse { path: PathBuf, message: String },
}

impl ConfigError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::FileRead { .. } => crate::commands::json_output::error_codes::CONFIG_READ,
            ConfigError::JsonParse { .. } => {
                crate::commands::json_output::error_codes::CONFIG_PARSE
            }
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::JsonParse { path, message } => {
                write!(f, "invalid config '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileRead { source, .. } => Some(source),
            ConfigError::JsonParse { .. } => None,
        }
    }
}

impl ToneConfig {
    /// Parses a config document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content).map_err(|e| ConfigError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Returns this config with every `Some` override applied.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(rate) = overrides.sample_rate {
            self.sample_rate = rate;
        }
        if let Some(duration) = overrides.duration_seconds {
            self.duration_seconds = duration;
        }
        if let Some(freq) = overrides.frequency_hz {
            self.frequency_hz = freq;
        }
        if let Some(path) = overrides.output_path {
            self.output_path = path;
        }
        self
    }

    /// Validates the tone parameters.
    pub fn to_spec(&self) -> AudioResult<ToneSpec> {
        ToneSpec::new(self.sample_rate, self.duration_seconds, self.frequency_hz)
    }
}
