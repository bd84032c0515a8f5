//! The (name, octave) note value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{octave_to_lightness, Color, Hls, SATURATION};
use crate::error::CoreError;

use super::frequency::midi_to_freq;
use super::name::NoteName;

/// A single pitch: a chromatic note name in a specific octave.
///
/// Two notes are equal iff name and octave match; there is no other
/// identity. Octaves 0..=8 cover the piano keyboard, but frequency and
/// color are well-defined for any octave the `u8` can express, so no
/// bounds are enforced here. Validation belongs to the keyboard lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Chromatic note name.
    pub name: NoteName,
    /// Octave in scientific pitch notation (C4 is middle C).
    pub octave: u8,
}

impl Note {
    /// Creates a new note.
    pub const fn new(name: NoteName, octave: u8) -> Self {
        Self { name, octave }
    }

    /// MIDI-equivalent note number (A4 = 69, C4 = 60).
    ///
    /// The arithmetic is done in `u32` so high octaves past the MIDI
    /// range still yield a well-defined number instead of wrapping.
    pub fn midi(&self) -> u32 {
        self.name.index() as u32 + 12 * (self.octave as u32 + 1)
    }

    /// Fundamental frequency in Hz, equal-tempered with A4 = 440 Hz.
    ///
    /// # Examples
    /// ```
    /// use chromanote_core::{Note, NoteName};
    ///
    /// let a4 = Note::new(NoteName::A, 4);
    /// assert!((a4.frequency() - 440.0).abs() < 1e-6);
    /// ```
    pub fn frequency(&self) -> f64 {
        midi_to_freq(self.midi())
    }

    /// Period of the fundamental, in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency()
    }

    /// The note's HLS color: hue from the name, lightness from the
    /// octave, saturation fixed at 1.0.
    pub fn hls(&self) -> Hls {
        Hls {
            h: self.name.hue(),
            l: octave_to_lightness(self.octave),
            s: SATURATION,
        }
    }

    /// The note's color converted to RGB.
    pub fn color(&self) -> Color {
        Color::from_hls(self.hls())
    }

    /// The same note name `d` octaves up.
    pub fn transposed_octaves(&self, d: u8) -> Note {
        Note::new(self.name, self.octave + d)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

impl FromStr for Note {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| CoreError::InvalidNoteName {
                input: s.to_string(),
            })?;

        let (name_part, octave_part) = trimmed.split_at(split);
        let name: NoteName = name_part.parse()?;
        let octave: u8 = octave_part
            .parse()
            .map_err(|_| CoreError::InvalidNoteName {
                input: s.to_string(),
            })?;

        Ok(Note::new(name, octave))
    }
}
