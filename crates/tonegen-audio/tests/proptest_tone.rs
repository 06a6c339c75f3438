//! Property tests for tone synthesis and encoding.

use proptest::prelude::*;

use tonegen_audio::synthesis::synthesize_sine;
use tonegen_audio::wav::{quantize_pcm16, read_wav_info};
use tonegen_audio::{ToneFileWriter, ToneSpec};

/// Sample rates and durations kept small so each case renders quickly.
fn valid_spec() -> impl Strategy<Value = ToneSpec> {
    (1i64..=96_000, 0.0f64..0.25, 0.01f64..50_000.0)
        .prop_map(|(rate, duration, freq)| ToneSpec::new(rate, duration, freq).unwrap())
}

proptest! {
    #[test]
    fn sample_count_is_floor(spec in valid_spec()) {
        let expected = (spec.sample_rate() as f64 * spec.duration_seconds()).floor() as usize;
        prop_assert_eq!(synthesize_sine(&spec).len(), expected);
        prop_assert_eq!(spec.num_samples(), expected);
    }

    #[test]
    fn quantized_samples_stay_in_range(spec in valid_spec()) {
        let pcm = quantize_pcm16(&synthesize_sine(&spec));
        prop_assert!(pcm.samples().iter().all(|&s| (-32767..=32767).contains(&s)));
    }

    #[test]
    fn rendered_header_round_trips(spec in valid_spec()) {
        let result = ToneFileWriter::new(spec).render();
        let info = read_wav_info(&result.wav_data).unwrap();

        prop_assert_eq!(info.channels, 1);
        prop_assert_eq!(info.bits_per_sample, 16);
        prop_assert_eq!(info.sample_rate, spec.sample_rate());
        prop_assert_eq!(info.byte_rate, spec.sample_rate() * 2);
        prop_assert_eq!(info.block_align, 2);
        prop_assert_eq!(info.num_samples(), spec.num_samples());
    }

    #[test]
    fn non_positive_rates_are_rejected(rate in i64::MIN..=0) {
        prop_assert!(ToneSpec::new(rate, 1.0, 440.0).is_err());
    }

    #[test]
    fn negative_durations_are_rejected(duration in f64::MIN..-f64::MIN_POSITIVE) {
        prop_assert!(ToneSpec::new(44100, duration, 440.0).is_err());
    }
}
