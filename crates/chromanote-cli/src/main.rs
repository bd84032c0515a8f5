//! Chromanote CLI - Explore notes, chords, and their colors
//!
//! This binary renders the note/color mapping as terminal color charts,
//! inspects single notes and chords, and synthesizes tones to WAV files.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod commands;

/// Chromanote - Musical Note and Color Explorer
#[derive(Parser, Debug)]
#[command(name = "chromanote")]
#[command(author, version = chromanote_core::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the note/octave color chart for the whole keyboard
    Chart,

    /// Print chord color patches for roots in the middle octaves
    Chords {
        /// Octaves to chart (default: the middle of the keyboard)
        #[arg(long, value_delimiter = ',', default_values_t = vec![3, 4, 5])]
        octaves: Vec<u8>,
    },

    /// Show frequency, MIDI number, and color for a single note
    Note {
        /// The note, e.g. "C#4"
        note: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the constituent notes of a chord
    Chord {
        /// The root note, e.g. "C4"
        root: String,

        /// Chord type
        #[arg(long, default_value = "major", value_parser = ["major", "minor", "diminished", "augmented"])]
        kind: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show one octave of a scale
    Scale {
        /// The root note, e.g. "A3"
        root: String,

        /// Scale type
        #[arg(long, default_value = "major", value_parser = ["major", "minor"])]
        kind: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Synthesize a note to a WAV file
    Render {
        /// The note, e.g. "E4"
        note: String,

        /// Output WAV file path
        #[arg(short, long)]
        out: String,

        /// Duration in seconds
        #[arg(long, default_value_t = 1.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44_100)]
        sample_rate: u32,

        /// Render a chord of this type instead of a single tone
        #[arg(long, value_parser = ["major", "minor", "diminished", "augmented"])]
        chord: Option<String>,

        /// Render the lightsaber hum: harmonics plus the fixed envelope
        #[arg(long, conflicts_with = "chord")]
        lightsaber: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chart => commands::chart::run(),
        Commands::Chords { octaves } => commands::chords::run(&octaves),
        Commands::Note { note, json } => commands::note::run(&note, json),
        Commands::Chord { root, kind, json } => commands::chord::run(&root, &kind, json),
        Commands::Scale { root, kind, json } => commands::scale::run(&root, &kind, json),
        Commands::Render {
            note,
            out,
            duration,
            sample_rate,
            chord,
            lightsaber,
        } => commands::render::run(
            &note,
            &out,
            duration,
            sample_rate,
            chord.as_deref(),
            lightsaber,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
