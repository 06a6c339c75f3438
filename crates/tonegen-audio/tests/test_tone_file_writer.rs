//! End-to-end tests for writing tone files.

use std::fs;

use pretty_assertions::assert_eq;
use tonegen_audio::wav::{read_wav_info, WAV_HEADER_LEN};
use tonegen_audio::{AudioError, ErrorKind, ToneFileWriter, ToneSpec};

#[test]
fn test_default_tone_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.wav");
    let spec = ToneSpec::new(44100, 3.0, 440.0).unwrap();

    let report = ToneFileWriter::new(spec).write_to(&path).unwrap();

    assert_eq!(report.num_samples, 132300);
    assert_eq!(report.data_len, 264600);
    assert_eq!(report.file_size, 264644);

    let info = read_wav_info(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(info.data_len, 264600);
    assert_eq!(info.num_samples(), 132300);
}

#[test]
fn test_hound_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let spec = ToneSpec::new(22050, 0.5, 440.0).unwrap();

    ToneFileWriter::new(spec).write_to(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let wav_spec = reader.spec();
    assert_eq!(wav_spec.channels, 1);
    assert_eq!(wav_spec.bits_per_sample, 16);
    assert_eq!(wav_spec.sample_rate, 22050);
    assert_eq!(wav_spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len() as usize, spec.num_samples());

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), 11025);
    assert_eq!(samples[0], 0);
    assert_eq!(samples.iter().copied().max(), Some(32767));
    assert_eq!(samples.iter().copied().min(), Some(-32767));
}

#[test]
fn test_samples_follow_closed_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let spec = ToneSpec::new(44100, 0.05, 440.0).unwrap();

    ToneFileWriter::new(spec).write_to(&path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    for (i, sample) in reader.samples::<i16>().enumerate() {
        let expected =
            ((2.0 * std::f64::consts::PI * 440.0 * i as f64 / 44100.0).sin() * 32767.0).round();
        assert_eq!(sample.unwrap(), expected as i16, "sample {}", i);
    }
}

#[test]
fn test_idempotent_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let writer = ToneFileWriter::new(ToneSpec::new(16000, 1.0, 440.0).unwrap());

    let first_report = writer.write_to(&path).unwrap();
    let first = fs::read(&path).unwrap();
    let second_report = writer.write_to(&path).unwrap();
    let second = fs::read(&path).unwrap();

    assert!(first == second, "repeated writes differ");
    assert_eq!(first_report.pcm_hash, second_report.pcm_hash);
}

#[test]
fn test_zero_duration_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");
    let spec = ToneSpec::new(44100, 0.0, 440.0).unwrap();

    let report = ToneFileWriter::new(spec).write_to(&path).unwrap();

    assert_eq!(report.num_samples, 0);
    assert_eq!(report.file_size, WAV_HEADER_LEN as u64);

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.len(), 0);
    assert_eq!(reader.spec().sample_rate, 44100);
}

#[test]
fn test_above_nyquist_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alias.wav");
    let spec = ToneSpec::new(8000, 0.5, 6000.0).unwrap();

    let report = ToneFileWriter::new(spec).write_to(&path).unwrap();

    assert_eq!(report.num_samples, 4000);
    assert!(path.is_file());
}

#[test]
fn test_negative_sample_rate_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.wav");

    let result = ToneSpec::new(-1, 3.0, 440.0).map(|spec| ToneFileWriter::new(spec).write_to(&path));

    let err = result.unwrap_err();
    assert!(matches!(err, AudioError::InvalidSampleRate { rate: -1 }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_is_filesystem_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits do not bind root
    let probe = locked.join(".probe");
    if fs::write(&probe, b"").is_ok() {
        fs::remove_file(&probe).unwrap();
        return;
    }

    let err = ToneFileWriter::new(ToneSpec::default())
        .write_to(locked.join("tone.wav"))
        .unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(err, AudioError::Write { .. }));
    assert_eq!(err.kind(), ErrorKind::Filesystem);
}
