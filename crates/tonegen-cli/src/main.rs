//! tonegen CLI - writes a sine-tone WAV fixture
//!
//! Run with no arguments to write a 3 second, 440 Hz, 44.1 kHz mono tone to
//! `storage/app/audio/input.wav`.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use tonegen_cli::commands::generate::{self, GenerateOptions};
use tonegen_cli::config::ConfigOverrides;

/// tonegen - Sine tone WAV fixture generator
#[derive(Parser, Debug)]
#[command(name = "tonegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file (keys: sampleRate, durationSeconds, frequencyHz, outputPath)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample rate in Hz (default: 44100)
    #[arg(long, allow_negative_numbers = true)]
    sample_rate: Option<i64>,

    /// Duration in seconds (default: 3)
    #[arg(short, long, allow_negative_numbers = true)]
    duration: Option<f64>,

    /// Tone frequency in Hz (default: 440)
    #[arg(short, long, allow_negative_numbers = true)]
    frequency: Option<f64>,

    /// Output WAV path (default: storage/app/audio/input.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read the written file back and check its header and PCM hash
    #[arg(long)]
    verify: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            config_path: self.config.clone(),
            overrides: ConfigOverrides {
                sample_rate: self.sample_rate,
                duration_seconds: self.duration,
                frequency_hz: self.frequency,
                output_path: self.output.clone(),
            },
            verify: self.verify,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match generate::run(&cli.options(), cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
