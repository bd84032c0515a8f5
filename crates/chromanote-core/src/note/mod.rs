//! Note identity, enumeration, and frequency resolution.
//!
//! This module defines the 12 chromatic note names, the (name, octave)
//! note value type, the 88-key piano keyboard table, and equal-tempered
//! frequency conversion.

mod frequency;
mod keyboard;
mod name;
mod pitch;

#[cfg(test)]
mod tests;

// Flatten the submodules into one `note` namespace
pub use frequency::{freq_to_midi, midi_to_freq, CONCERT_PITCH_HZ};
pub use keyboard::{keyboard, keyboard_position, KEYBOARD_LEN};
pub use name::NoteName;
pub use pitch::Note;
