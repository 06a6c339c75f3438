//! JSON output types for the `--json` flag.

use serde::{Deserialize, Serialize};
use tonegen_audio::ToneReport;

/// Error codes for CLI-level failures.
///
/// Library failures pass their own `TONE_XXX` codes through unchanged.
pub mod error_codes {
    /// Config file could not be read
    pub const CONFIG_READ: &str = "CLI_001";
    /// Config file could not be parsed
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Written file did not read back as expected
    pub const VERIFY_MISMATCH: &str = "CLI_003";
}

/// Warning codes for CLI output.
pub mod warning_codes {
    /// Tone frequency at or above Nyquist
    pub const ABOVE_NYQUIST: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Details of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Absolute path of the written file
    pub path: String,
    /// File size in bytes
    pub file_size: u64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Tone frequency in Hz
    pub frequency_hz: f64,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Number of samples written
    pub num_samples: usize,
    /// Human-readable format description
    pub format: String,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
    /// Whether the file was read back and checked
    pub verified: bool,
}

impl GenerateResult {
    pub fn from_report(report: &ToneReport, verified: bool) -> Self {
        Self {
            path: report.path.display().to_string(),
            file_size: report.file_size,
            sample_rate: report.spec.sample_rate(),
            frequency_hz: report.spec.frequency_hz(),
            duration_seconds: report.spec.duration_seconds(),
            num_samples: report.num_samples,
            format: super::generate::format_description(report.spec.sample_rate()),
            pcm_hash: report.pcm_hash.clone(),
            verified,
        }
    }
}

/// JSON output for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings about the generated tone
    pub warnings: Vec<JsonWarning>,
    /// Result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful output.
    pub fn success(result: GenerateResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}
