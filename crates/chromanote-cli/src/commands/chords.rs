//! Chords command implementation
//!
//! Prints chord color patches for every root in the requested octaves.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use chromanote_core::{chord, keyboard_position, ChordType, Note, NoteName};

use super::patch;

/// Run the chords command.
///
/// For each root note in the given octaves, prints one line per chord
/// type with a color patch per chord tone. Chords that would run past
/// the top of the keyboard are marked instead of truncated.
pub fn run(octaves: &[u8]) -> Result<ExitCode> {
    for &octave in octaves {
        println!("{}", format!("Octave {octave}").cyan().bold());

        for name in NoteName::ALL {
            let root = Note::new(name, octave);
            if keyboard_position(root).is_err() {
                continue;
            }

            print!("  {:<4}", root.to_string());
            for kind in ChordType::ALL {
                match chord(root, kind) {
                    Ok(notes) => {
                        let patches: Vec<String> =
                            notes.iter().map(|&n| patch(n).to_string()).collect();
                        print!("  {:<11}{}", kind.to_string(), patches.join(" "));
                    }
                    Err(_) => {
                        print!("  {:<11}{}", kind.to_string(), "off keyboard".dimmed());
                    }
                }
            }
            println!();
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}
