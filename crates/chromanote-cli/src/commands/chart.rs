//! Chart command implementation
//!
//! Prints the 12x9 note/octave color chart for the whole keyboard.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use chromanote_core::{keyboard_position, Note, NoteName};

use super::patch;

/// Run the chart command.
///
/// Rows are the 12 note names, columns are octaves 0..=8. Octave slots
/// with no piano key (below A0 or above C8) are marked `~~`.
pub fn run() -> Result<ExitCode> {
    print!("{:>3}", "");
    for octave in 0..=8u8 {
        print!(" {octave:>2}");
    }
    println!();

    for name in NoteName::ALL {
        print!("{:>3}", name.to_string());
        for octave in 0..=8u8 {
            let note = Note::new(name, octave);
            if keyboard_position(note).is_ok() {
                print!(" {}", patch(note));
            } else {
                print!(" {}", "~~".dimmed());
            }
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}
