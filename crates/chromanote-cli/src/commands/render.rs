//! Render command implementation
//!
//! Synthesizes a tone, chord, or lightsaber hum and writes it to a WAV
//! file for the audio-output side to play.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use chromanote_core::{
    chord, chord_signal, harmonics, shape, tone, AdsrParams, ChordType,
};

use super::parse_note;

/// Run the render command.
pub fn run(
    note_arg: &str,
    out: &str,
    duration: f64,
    sample_rate: u32,
    chord_kind: Option<&str>,
    lightsaber: bool,
) -> Result<ExitCode> {
    let note = parse_note(note_arg)?;

    let (label, samples) = if let Some(kind_arg) = chord_kind {
        let kind: ChordType = kind_arg.parse()?;
        let notes = chord(note, kind)
            .with_context(|| format!("cannot build {kind} chord on {note}"))?;
        let signal = chord_signal(&notes, duration, sample_rate)?;
        (format!("{note} {kind} chord"), signal.samples)
    } else if lightsaber {
        let signal = harmonics(note, duration, sample_rate)?;
        let shaped = shape(&signal.samples, &AdsrParams::lightsaber())?;
        (format!("{note} lightsaber"), shaped)
    } else {
        let signal = tone(note.frequency(), duration, sample_rate)?;
        (format!("{note} tone"), signal.samples)
    };

    write_wav(out, &samples, sample_rate)
        .with_context(|| format!("failed to write {out}"))?;

    println!(
        "{} {} ({} samples at {} Hz) -> {}",
        "Rendered:".green().bold(),
        label,
        samples.len(),
        sample_rate,
        out
    );

    Ok(ExitCode::SUCCESS)
}

/// Write samples as mono 16-bit PCM, clamped to [-1, 1].
fn write_wav(path: &str, samples: &[f64], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * 32767.0) as i16)?;
    }
    writer.finalize()?;

    Ok(())
}
