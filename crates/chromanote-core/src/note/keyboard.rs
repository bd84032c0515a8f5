//! The 88-key piano keyboard table.

use std::sync::OnceLock;

use crate::error::{CoreError, CoreResult};

use super::name::NoteName;
use super::pitch::Note;

/// Number of keys on the piano keyboard.
pub const KEYBOARD_LEN: usize = 88;

static KEYBOARD: OnceLock<Vec<Note>> = OnceLock::new();

/// Returns the 88 piano keys from A0 to C8, in strictly increasing pitch.
///
/// The table is built once on first access and is read-only thereafter.
///
/// # Examples
/// ```
/// use chromanote_core::note::keyboard;
///
/// let keys = keyboard();
/// assert_eq!(keys.len(), 88);
/// assert_eq!(keys[0].to_string(), "A0");
/// assert_eq!(keys[87].to_string(), "C8");
/// ```
pub fn keyboard() -> &'static [Note] {
    KEYBOARD.get_or_init(build_keyboard).as_slice()
}

/// Returns the keyboard index of a note, or [`CoreError::NoteNotFound`]
/// if the note is outside the A0..C8 range.
pub fn keyboard_position(note: Note) -> CoreResult<usize> {
    keyboard()
        .iter()
        .position(|key| *key == note)
        .ok_or(CoreError::NoteNotFound { note })
}

fn build_keyboard() -> Vec<Note> {
    let mut keys = Vec::with_capacity(KEYBOARD_LEN);

    // The bottom of the keyboard is a partial octave: A0, A#0, B0.
    for name in [NoteName::A, NoteName::ASharp, NoteName::B] {
        keys.push(Note::new(name, 0));
    }

    for octave in 1..8 {
        for name in NoteName::ALL {
            keys.push(Note::new(name, octave));
        }
    }

    // The top is a single key: C8.
    keys.push(Note::new(NoteName::C, 8));

    debug_assert_eq!(keys.len(), KEYBOARD_LEN);
    keys
}
