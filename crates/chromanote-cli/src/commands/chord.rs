//! Chord command implementation
//!
//! Shows the constituent notes of a chord with frequencies and patches.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use chromanote_core::{chord, ChordType};

use super::json_output::NoteSetInfo;
use super::{parse_note, patch};

/// Run the chord command.
pub fn run(root_arg: &str, kind_arg: &str, json: bool) -> Result<ExitCode> {
    let root = parse_note(root_arg)?;
    let kind: ChordType = kind_arg.parse()?;

    let notes = chord(root, kind)
        .with_context(|| format!("cannot build {kind} chord on {root}"))?;

    if json {
        let info = NoteSetInfo::new(root, kind, &notes);
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} {}", "Chord:".cyan().bold(), root, kind);
    for note in &notes {
        println!(
            "  {} {:<4} {:>8.2} Hz",
            patch(*note),
            note.to_string(),
            note.frequency()
        );
    }

    Ok(ExitCode::SUCCESS)
}
