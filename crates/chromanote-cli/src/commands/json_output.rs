//! Serializable output structs for `--json` mode.

use serde::Serialize;

use chromanote_core::Note;

/// JSON description of a single note.
#[derive(Debug, Serialize)]
pub struct NoteInfo {
    /// Note name with octave, e.g. "C#4".
    pub note: String,
    /// MIDI-equivalent note number.
    pub midi: u32,
    /// Fundamental frequency in Hz.
    pub frequency_hz: f64,
    /// Period in seconds.
    pub period_s: f64,
    /// HLS triple.
    pub hls: [f64; 3],
    /// 8-bit RGB triple.
    pub rgb: [u8; 3],
}

impl NoteInfo {
    pub fn from_note(note: Note) -> Self {
        let hls = note.hls();
        Self {
            note: note.to_string(),
            midi: note.midi(),
            frequency_hz: note.frequency(),
            period_s: note.period(),
            hls: [hls.h, hls.l, hls.s],
            rgb: note.color().to_rgb8(),
        }
    }
}

/// JSON description of a chord or scale.
#[derive(Debug, Serialize)]
pub struct NoteSetInfo {
    /// The root note, e.g. "C4".
    pub root: String,
    /// Chord or scale type name.
    pub kind: String,
    /// Constituent notes in ascending order.
    pub notes: Vec<NoteInfo>,
}

impl NoteSetInfo {
    pub fn new(root: Note, kind: impl ToString, notes: &[Note]) -> Self {
        Self {
            root: root.to_string(),
            kind: kind.to_string(),
            notes: notes.iter().map(|&n| NoteInfo::from_note(n)).collect(),
        }
    }
}
