//! Sine wave synthesis.

use std::f64::consts::PI;

use crate::spec::ToneSpec;

/// 2 * PI
pub const TWO_PI: f64 = 2.0 * PI;

/// Computes the sine samples for a tone.
///
/// Each sample is evaluated in closed form as
/// `sin(2π * frequency * i / sample_rate)`, so sample `i` does not depend on
/// rounding error accumulated over earlier samples. Output values lie in
/// `[-1.0, 1.0]` and there are exactly [`ToneSpec::num_samples`] of them.
pub fn synthesize_sine(spec: &ToneSpec) -> Vec<f64> {
    let num_samples = spec.num_samples();
    let sample_rate = spec.sample_rate() as f64;
    let freq = spec.frequency_hz();

    (0..num_samples)
        .map(|i| (TWO_PI * freq * i as f64 / sample_rate).sin())
        .collect()
}
