//! ADSR envelope shaping.
//!
//! Envelopes are expressed as percentages of the signal length rather
//! than absolute times, so the same parameters shape a tone of any
//! duration. The shaper is pure computation; it returns sample vectors
//! and never draws or plays anything.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// ADSR envelope parameters as fractions of the signal length.
///
/// Attack, decay, and release each claim a fraction of the total sample
/// count; whatever remains is the sustain segment. The three fractions
/// must not sum past 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdsrParams {
    /// Fraction of the signal spent ramping 0 to 1.
    pub attack_percent: f64,
    /// Fraction spent ramping 1 down to the sustain amplitude.
    pub decay_percent: f64,
    /// Amplitude held through the sustain segment (0.0 to 1.0).
    pub sustain_amplitude: f64,
    /// Fraction spent ramping the sustain amplitude down to 0.
    pub release_percent: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack_percent: 0.05,
            decay_percent: 0.1,
            sustain_amplitude: 0.7,
            release_percent: 0.2,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack_percent: attack,
            decay_percent: decay,
            sustain_amplitude: sustain,
            release_percent: release,
        }
    }

    /// The lightsaber hum: near-instant attack and decay, long release.
    pub fn lightsaber() -> Self {
        Self {
            attack_percent: 0.005,
            decay_percent: 0.005,
            sustain_amplitude: 0.7,
            release_percent: 0.7,
        }
    }

    /// A percussive shape: sharp attack, no sustain tail.
    pub fn percussive() -> Self {
        Self {
            attack_percent: 0.01,
            decay_percent: 0.29,
            sustain_amplitude: 0.0,
            release_percent: 0.7,
        }
    }

    /// Sum of the attack, decay, and release fractions.
    pub fn total_percent(&self) -> f64 {
        self.attack_percent + self.decay_percent + self.release_percent
    }
}

/// Builds an ADSR envelope of exactly `num_samples` values.
///
/// Segment lengths are integer truncations of the percentage splits; the
/// sustain segment absorbs the truncation remainder so the four segments
/// always sum to `num_samples`.
///
/// # Errors
/// [`CoreError::InvalidEnvelope`] if any of the attack, decay, or
/// release fractions is negative, or their sum exceeds 1.0 (the
/// sustain segment would be negative).
///
/// # Examples
/// ```
/// use chromanote_core::{adsr_envelope, AdsrParams};
///
/// let env = adsr_envelope(1000, &AdsrParams::lightsaber())?;
/// assert_eq!(env.len(), 1000);
/// # Ok::<(), chromanote_core::CoreError>(())
/// ```
pub fn adsr_envelope(num_samples: usize, params: &AdsrParams) -> CoreResult<Vec<f64>> {
    let total = params.total_percent();
    if params.attack_percent < 0.0
        || params.decay_percent < 0.0
        || params.release_percent < 0.0
        || total > 1.0
    {
        return Err(CoreError::InvalidEnvelope { total });
    }

    let attack_samples = (params.attack_percent * num_samples as f64) as usize;
    let decay_samples = (params.decay_percent * num_samples as f64) as usize;
    let release_samples = (params.release_percent * num_samples as f64) as usize;
    let sustain_samples = num_samples - attack_samples - decay_samples - release_samples;

    let mut envelope = Vec::with_capacity(num_samples);
    envelope.extend(linspace(0.0, 1.0, attack_samples));
    envelope.extend(linspace(1.0, params.sustain_amplitude, decay_samples));
    envelope.extend(std::iter::repeat(params.sustain_amplitude).take(sustain_samples));
    envelope.extend(linspace(params.sustain_amplitude, 0.0, release_samples));

    debug_assert_eq!(envelope.len(), num_samples);
    Ok(envelope)
}

/// Applies an ADSR envelope to a signal, returning the shaped samples.
pub fn shape(signal: &[f64], params: &AdsrParams) -> CoreResult<Vec<f64>> {
    let envelope = adsr_envelope(signal.len(), params)?;
    Ok(signal
        .iter()
        .zip(&envelope)
        .map(|(sample, env)| sample * env)
        .collect())
}

/// `n` evenly spaced values from `start` to `end`, endpoints included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_length_matches_for_any_valid_split() {
        let splits = [
            AdsrParams::new(0.0, 0.0, 1.0, 0.0),
            AdsrParams::new(0.25, 0.25, 0.5, 0.5),
            AdsrParams::new(0.1, 0.2, 0.6, 0.3),
            AdsrParams::lightsaber(),
            AdsrParams::percussive(),
            AdsrParams::default(),
        ];
        for params in splits {
            for n in [0, 1, 7, 100, 44_100] {
                let env = adsr_envelope(n, &params).unwrap();
                assert_eq!(env.len(), n, "length mismatch for {params:?} at {n}");
            }
        }
    }

    #[test]
    fn test_envelope_segments() {
        let params = AdsrParams::new(0.1, 0.1, 0.5, 0.2);
        let env = adsr_envelope(100, &params).unwrap();

        // Attack ramps 0 to 1 over 10 samples.
        assert_eq!(env[0], 0.0);
        assert!((env[9] - 1.0).abs() < 1e-12);

        // Decay lands on the sustain amplitude.
        assert!((env[19] - 0.5).abs() < 1e-12);

        // Sustain holds flat through the remainder.
        for &v in &env[20..80] {
            assert_eq!(v, 0.5);
        }

        // Release ends at zero.
        assert!((env[80] - 0.5).abs() < 1e-12);
        assert_eq!(*env.last().unwrap(), 0.0);
    }

    #[test]
    fn test_truncation_remainder_goes_to_sustain() {
        // 0.33 * 10 truncates to 3; sustain picks up the slack.
        let params = AdsrParams::new(0.33, 0.33, 0.7, 0.33);
        let env = adsr_envelope(10, &params).unwrap();
        assert_eq!(env.len(), 10);

        let sustain_count = env.iter().filter(|&&v| v == 0.7).count();
        // Decay and release touch 0.7 at their endpoints too, so at
        // least the 1-sample remainder is held.
        assert!(sustain_count >= 1);
    }

    #[test]
    fn test_oversubscribed_percentages_are_rejected() {
        let params = AdsrParams::new(0.5, 0.4, 0.7, 0.2);
        let err = adsr_envelope(100, &params).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnvelope { .. }));

        // Exactly 1.0 is allowed: sustain is simply empty.
        let params = AdsrParams::new(0.5, 0.3, 0.7, 0.2);
        assert!(adsr_envelope(100, &params).is_ok());
    }

    #[test]
    fn test_negative_percentages_are_rejected() {
        // A negative attack can cancel an oversized release in the sum;
        // each fraction has to be checked on its own.
        let params = AdsrParams::new(-1.0, 0.0, 0.5, 1.5);
        let err = adsr_envelope(100, &params).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnvelope { .. }));

        let params = AdsrParams::new(0.1, -0.2, 0.5, 0.1);
        assert!(adsr_envelope(100, &params).is_err());

        let params = AdsrParams::new(0.1, 0.1, 0.5, -0.1);
        assert!(adsr_envelope(100, &params).is_err());
    }

    #[test]
    fn test_shape_multiplies_signal() {
        let signal = vec![1.0; 100];
        let params = AdsrParams::new(0.1, 0.1, 0.5, 0.2);
        let shaped = shape(&signal, &params).unwrap();
        let env = adsr_envelope(100, &params).unwrap();
        assert_eq!(shaped, env);

        let signal = vec![0.5; 100];
        let shaped = shape(&signal, &params).unwrap();
        for (s, e) in shaped.iter().zip(&env) {
            assert!((s - 0.5 * e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_lightsaber_preset() {
        let params = AdsrParams::lightsaber();
        assert_eq!(params.attack_percent, 0.005);
        assert_eq!(params.decay_percent, 0.005);
        assert_eq!(params.sustain_amplitude, 0.7);
        assert_eq!(params.release_percent, 0.7);
        assert!(params.total_percent() <= 1.0);
    }

    #[test]
    fn test_linspace_matches_inclusive_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(1.0, 0.5, 2), vec![1.0, 0.5]);
    }
}
