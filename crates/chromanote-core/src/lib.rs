//! Chromanote Core - Note/Color/Chord Domain Model
//!
//! This crate implements the deterministic mapping from musical notes to
//! frequencies, colors, and synthesized tones that drives the chromanote
//! terminal front end.
//!
//! # Overview
//!
//! Everything is a pure function over immutable value types:
//!
//! - **Notes** - the 12 chromatic note names and the 88-key piano keyboard
//!   (A0..C8), with equal-tempered frequency resolution (A4 = 440 Hz)
//! - **Colors** - a deterministic note-to-HLS mapping (hue from the note
//!   name, lightness from the octave) and HLS/RGB conversion
//! - **Chords and scales** - interval patterns applied to a root note's
//!   position on the keyboard
//! - **Synthesis** - sine tones, harmonic stacking, and chord signals as
//!   `(time, amplitude)` sample pairs
//! - **Envelopes** - percentage-based ADSR amplitude shaping
//!
//! # Determinism
//!
//! All operations are deterministic. The same inputs always produce
//! bit-identical outputs; the only shared state is the keyboard table,
//! built once on first access and read-only thereafter.
//!
//! # Example
//!
//! ```
//! use chromanote_core::{chord, harmonics, ChordType, Note, NoteName};
//!
//! let root = Note::new(NoteName::C, 4);
//! assert!((root.frequency() - 261.63).abs() < 0.01);
//!
//! let triad = chord(root, ChordType::Major)?;
//! assert_eq!(triad.len(), 3);
//!
//! let signal = harmonics(root, 1.0, 44_100)?;
//! assert_eq!(signal.len(), 44_100);
//! # Ok::<(), chromanote_core::CoreError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Note names, the piano keyboard, frequency resolution
//! - [`color`]: HLS color mapping and RGB conversion
//! - [`chord`]: Chord and scale construction
//! - [`synthesis`]: Tone and harmonic signal generation
//! - [`envelope`]: ADSR envelope shaping
//! - [`error`]: Error types

pub mod chord;
pub mod color;
pub mod envelope;
pub mod error;
pub mod note;
pub mod synthesis;

// Re-export main types at crate root
pub use chord::{chord, scale, ChordType, ScaleType};
pub use color::{octave_to_lightness, Color, Hls};
pub use envelope::{adsr_envelope, shape, AdsrParams};
pub use error::{CoreError, CoreResult};
pub use note::{
    keyboard, keyboard_position, midi_to_freq, Note, NoteName, KEYBOARD_LEN,
};
pub use synthesis::{
    chord_signal, harmonics, tone, ToneSignal, DEFAULT_SAMPLE_RATE,
};

/// Crate version for front-end identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
