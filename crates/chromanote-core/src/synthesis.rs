//! Tone and harmonic signal generation.
//!
//! All synthesis here is deterministic: the same frequency, duration, and
//! sample rate always produce bit-identical sample vectors. Signals are
//! plain `(time, amplitude)` pairs; playback and plotting belong to the
//! consumers.

use std::f64::consts::PI;

use crate::error::{CoreError, CoreResult};
use crate::note::Note;

/// Default sample rate assumed throughout the front end, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Amplitudes of the octave overtones stacked by [`harmonics`], from one
/// octave up to three octaves up.
pub const HARMONIC_AMPLITUDES: [f64; 3] = [0.6, 0.4, 0.2];

/// A synthesized waveform: evenly spaced time samples and their
/// amplitudes.
///
/// Derived on demand, never persisted. The time axis is half-open:
/// `[0, duration)` with one sample every `1 / sample_rate` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSignal {
    /// Sample times in seconds.
    pub time: Vec<f64>,
    /// Amplitude at each sample time.
    pub samples: Vec<f64>,
}

impl ToneSignal {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute amplitude in the signal.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |a, s| a.max(s.abs()))
    }
}

/// Generates a sine tone at `frequency` Hz.
///
/// Produces `duration * sample_rate` samples with `t_i = i / sample_rate`
/// and amplitude `sin(2π f t)`.
///
/// # Errors
/// [`CoreError::InvalidSampleRate`] if `sample_rate` is zero.
///
/// # Examples
/// ```
/// use chromanote_core::tone;
///
/// let signal = tone(440.0, 1.0, 44_100)?;
/// assert_eq!(signal.len(), 44_100);
/// assert_eq!(signal.samples[0], 0.0);
/// # Ok::<(), chromanote_core::CoreError>(())
/// ```
pub fn tone(frequency: f64, duration: f64, sample_rate: u32) -> CoreResult<ToneSignal> {
    let time = time_axis(duration, sample_rate)?;
    let two_pi = 2.0 * PI;
    let samples = time
        .iter()
        .map(|&t| (two_pi * frequency * t).sin())
        .collect();

    Ok(ToneSignal { time, samples })
}

/// Generates a note's tone with its first three octave overtones stacked
/// on top, weighted by [`HARMONIC_AMPLITUDES`].
///
/// The overtones are the same note name one, two, and three octaves up;
/// their frequencies are resolved without keyboard bounds (the top of the
/// keyboard still has well-defined overtone pitches).
pub fn harmonics(note: Note, duration: f64, sample_rate: u32) -> CoreResult<ToneSignal> {
    let mut signal = tone(note.frequency(), duration, sample_rate)?;

    for (i, &amplitude) in HARMONIC_AMPLITUDES.iter().enumerate() {
        let overtone = note.transposed_octaves(i as u8 + 1);
        let partial = tone(overtone.frequency(), duration, sample_rate)?;
        for (sample, p) in signal.samples.iter_mut().zip(&partial.samples) {
            *sample += p * amplitude;
        }
    }

    Ok(signal)
}

/// Sums the tones of a set of notes into one signal, e.g. the notes of a
/// chord. The result is a raw sum; amplitudes can exceed [-1, 1].
pub fn chord_signal(notes: &[Note], duration: f64, sample_rate: u32) -> CoreResult<ToneSignal> {
    let time = time_axis(duration, sample_rate)?;
    let mut samples = vec![0.0; time.len()];

    for note in notes {
        let partial = tone(note.frequency(), duration, sample_rate)?;
        for (sample, p) in samples.iter_mut().zip(&partial.samples) {
            *sample += p;
        }
    }

    Ok(ToneSignal { time, samples })
}

/// `duration * sample_rate` points spaced `1 / sample_rate` apart,
/// starting at zero and stopping short of `duration`.
fn time_axis(duration: f64, sample_rate: u32) -> CoreResult<Vec<f64>> {
    if sample_rate == 0 {
        return Err(CoreError::InvalidSampleRate { rate: sample_rate });
    }

    let num_samples = (duration * sample_rate as f64) as usize;
    let dt = 1.0 / sample_rate as f64;
    Ok((0..num_samples).map(|i| i as f64 * dt).collect())
}
