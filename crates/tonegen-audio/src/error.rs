//! Error types for tone generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tone operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Broad classification of an [`AudioError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A tone parameter was rejected before any I/O took place.
    InvalidArgument,
    /// Directory creation or file writing failed.
    Filesystem,
}

/// Errors that can occur while generating or writing a tone.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Sample rate was zero, negative, or too high for the WAV byte-rate field.
    #[error("invalid sample rate: {rate} Hz (must be between 1 and 2147483647)")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: i64,
    },

    /// Duration was negative or not a finite number.
    #[error("invalid duration: {duration} seconds (must be finite and non-negative)")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Frequency was non-positive or not a finite number.
    #[error("invalid frequency: {freq} Hz (must be finite and positive)")]
    InvalidFrequency {
        /// The rejected frequency.
        freq: f64,
    },

    /// The data chunk would not fit the 32-bit RIFF size fields.
    #[error("tone too long: {samples} samples exceed the WAV size limit")]
    TooManySamples {
        /// Requested sample count.
        samples: u64,
    },

    /// Output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be opened, written, or inspected.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AudioError {
    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AudioError::InvalidSampleRate { .. }
            | AudioError::InvalidDuration { .. }
            | AudioError::InvalidFrequency { .. }
            | AudioError::TooManySamples { .. } => ErrorKind::InvalidArgument,
            AudioError::CreateDir { .. } | AudioError::Write { .. } => ErrorKind::Filesystem,
        }
    }

    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "TONE_001",
            AudioError::InvalidDuration { .. } => "TONE_002",
            AudioError::InvalidFrequency { .. } => "TONE_003",
            AudioError::TooManySamples { .. } => "TONE_004",
            AudioError::CreateDir { .. } => "TONE_101",
            AudioError::Write { .. } => "TONE_102",
        }
    }
}
