//! Note command implementation
//!
//! Shows frequency, MIDI number, and color for a single note.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::NoteInfo;
use super::{parse_note, patch};

/// Run the note command.
pub fn run(note_arg: &str, json: bool) -> Result<ExitCode> {
    let note = parse_note(note_arg)?;

    if json {
        let info = NoteInfo::from_note(note);
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(ExitCode::SUCCESS);
    }

    let hls = note.hls();
    let [r, g, b] = note.color().to_rgb8();

    println!("{} {} {}", "Note:".cyan().bold(), note, patch(note));
    println!("{} {}", "MIDI:".dimmed(), note.midi());
    println!("{} {:.2} Hz", "Frequency:".dimmed(), note.frequency());
    println!("{} {:.6} s", "Period:".dimmed(), note.period());
    println!(
        "{} h={:.3} l={:.3} s={:.1}",
        "HLS:".dimmed(),
        hls.h,
        hls.l,
        hls.s
    );
    println!("{} #{r:02x}{g:02x}{b:02x}", "RGB:".dimmed());

    Ok(ExitCode::SUCCESS)
}
