//! Command implementations for the chromanote CLI.

pub mod chart;
pub mod chord;
pub mod chords;
pub mod json_output;
pub mod note;
pub mod render;
pub mod scale;

use colored::{ColoredString, Colorize};

use chromanote_core::Note;

/// A two-character color patch in the note's color.
pub(crate) fn patch(note: Note) -> ColoredString {
    let [r, g, b] = note.color().to_rgb8();
    "▒▒".truecolor(r, g, b)
}

/// Parse a note argument, mapping the domain error into anyhow context.
pub(crate) fn parse_note(input: &str) -> anyhow::Result<Note> {
    input
        .parse()
        .map_err(|e| anyhow::anyhow!("{e} (expected a note like \"C#4\")"))
}
