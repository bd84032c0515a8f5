//! Chord and scale construction.
//!
//! A chord type is a fixed pattern of semitone offsets from a root note;
//! a scale type is a fixed pattern of steps walked from the root. Both
//! are applied by indexing into the 88-key keyboard, so a root outside
//! the keyboard or an interval past its top is an explicit error, never
//! a silent wrap or truncation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::note::{keyboard, keyboard_position, Note};

/// A named interval pattern for building chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl ChordType {
    /// All chord types.
    pub const ALL: [ChordType; 4] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
    ];

    /// Semitone offsets from the root, root included.
    pub fn intervals(self) -> &'static [usize] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
        }
    }

    /// Capitalized display name.
    pub fn as_str(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ChordType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().to_lowercase() == normalized)
            .ok_or_else(|| CoreError::UnknownChordType {
                input: s.to_string(),
            })
    }
}

/// A named step pattern for building scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    Major,
    Minor,
}

impl ScaleType {
    /// All scale types.
    pub const ALL: [ScaleType; 2] = [ScaleType::Major, ScaleType::Minor];

    /// Semitone steps between consecutive scale degrees.
    pub fn steps(self) -> &'static [usize] {
        match self {
            ScaleType::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleType::Minor => &[2, 1, 2, 2, 1, 2, 2],
        }
    }

    /// Capitalized display name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ScaleType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().to_lowercase() == normalized)
            .ok_or_else(|| CoreError::UnknownChordType {
                input: s.to_string(),
            })
    }
}

/// Builds the chord of `chord_type` rooted at `root`.
///
/// The root must be one of the 88 piano keys; each interval is resolved
/// by offsetting the root's keyboard index.
///
/// # Errors
/// - [`CoreError::NoteNotFound`] if the root is outside A0..C8
/// - [`CoreError::KeyboardOutOfRange`] if an interval lands past C8
///
/// # Examples
/// ```
/// use chromanote_core::{chord, ChordType, Note, NoteName};
///
/// let triad = chord(Note::new(NoteName::C, 4), ChordType::Major)?;
/// let names: Vec<String> = triad.iter().map(|n| n.to_string()).collect();
/// assert_eq!(names, ["C4", "E4", "G4"]);
/// # Ok::<(), chromanote_core::CoreError>(())
/// ```
pub fn chord(root: Note, chord_type: ChordType) -> CoreResult<Vec<Note>> {
    notes_at_offsets(root, chord_type.intervals().iter().copied())
}

/// Builds one octave of the scale of `scale_type` starting at `root`.
///
/// Returns the 8 notes of the scale degree walk, octave note included.
/// Fails the same way [`chord`] does.
pub fn scale(root: Note, scale_type: ScaleType) -> CoreResult<Vec<Note>> {
    let offsets = scale_type.steps().iter().scan(0usize, |offset, step| {
        *offset += step;
        Some(*offset)
    });
    notes_at_offsets(root, std::iter::once(0).chain(offsets))
}

fn notes_at_offsets(
    root: Note,
    offsets: impl Iterator<Item = usize>,
) -> CoreResult<Vec<Note>> {
    let root_index = keyboard_position(root)?;
    let keys = keyboard();

    offsets
        .map(|offset| {
            let index = root_index + offset;
            keys.get(index)
                .copied()
                .ok_or(CoreError::KeyboardOutOfRange { root, index })
        })
        .collect()
}
