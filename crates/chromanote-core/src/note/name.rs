//! The 12 chromatic note names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Fraction of the hue circle the 12 note names are spread over.
///
/// The top 10% is left unused so the darkest and brightest notes stay
/// visually distinct.
const HUE_SPAN: f64 = 0.9;

/// One of the 12 chromatic note names, C through B.
///
/// Names are totally ordered by chromatic index (C = 0 .. B = 11) and
/// carry a fixed hue on the color wheel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    /// All 12 note names in chromatic order.
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Chromatic index within the octave (C = 0 .. B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Hue on the color wheel, in [0, 0.9).
    ///
    /// Computed as `((index + 1) mod 12) / 12 * 0.9`, so hues step evenly
    /// through the chromatic scale and B wraps back to 0.
    pub fn hue(self) -> f64 {
        (((self.index() + 1) % 12) as f64 / 12.0) * HUE_SPAN
    }

    /// The display spelling, sharps only (e.g. "C#", never "Db").
    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        NoteName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == normalized)
            .ok_or_else(|| CoreError::InvalidNoteName {
                input: s.to_string(),
            })
    }
}
