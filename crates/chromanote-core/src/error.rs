//! Error types for the chromanote domain model.

use thiserror::Error;

use crate::note::Note;

/// Result type for domain model operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building chords or synthesizing signals.
///
/// Every operation in this crate is pure and deterministic, so none of
/// these are retryable; they report a violated precondition directly to
/// the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The root note is not one of the 88 piano keys.
    #[error("note {note} is not on the 88-key keyboard")]
    NoteNotFound {
        /// The note that was looked up.
        note: Note,
    },

    /// A chord or scale interval points past the top of the keyboard.
    #[error("interval from root {root} lands on key {index}, past the end of the keyboard")]
    KeyboardOutOfRange {
        /// The root the chord or scale was built from.
        root: Note,
        /// The keyboard index the interval landed on.
        index: usize,
    },

    /// Sample rate must be positive.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Envelope percentages are negative or leave no room for a
    /// sustain segment.
    #[error("envelope percentages must be non-negative and sum to at most 1.0 (got {total})")]
    InvalidEnvelope {
        /// Sum of attack, decay, and release percentages.
        total: f64,
    },

    /// A note or note name string could not be parsed.
    #[error("invalid note name: '{input}'")]
    InvalidNoteName {
        /// The rejected input.
        input: String,
    },

    /// A chord or scale type string could not be parsed.
    #[error("unknown chord or scale type: '{input}'")]
    UnknownChordType {
        /// The rejected input.
        input: String,
    },
}
