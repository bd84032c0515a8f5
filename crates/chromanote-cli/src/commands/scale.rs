//! Scale command implementation
//!
//! Shows one octave of a scale from a root note.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use chromanote_core::{scale, ScaleType};

use super::json_output::NoteSetInfo;
use super::{parse_note, patch};

/// Run the scale command.
pub fn run(root_arg: &str, kind_arg: &str, json: bool) -> Result<ExitCode> {
    let root = parse_note(root_arg)?;
    let kind: ScaleType = kind_arg.parse()?;

    let notes = scale(root, kind)
        .with_context(|| format!("cannot build {kind} scale on {root}"))?;

    if json {
        let info = NoteSetInfo::new(root, kind, &notes);
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} {}", "Scale:".cyan().bold(), root, kind);
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
