use pretty_assertions::assert_eq;

use super::*;
use crate::error::CoreError;

#[test]
fn test_note_names_are_chromatic_order() {
    assert_eq!(NoteName::ALL.len(), 12);
    for (i, name) in NoteName::ALL.iter().enumerate() {
        assert_eq!(name.index(), i);
    }
    assert!(NoteName::C < NoteName::CSharp);
    assert!(NoteName::ASharp < NoteName::B);
}

#[test]
fn test_hue_in_range_and_increasing_until_wraparound() {
    for name in NoteName::ALL {
        let hue = name.hue();
        assert!((0.0..0.9).contains(&hue), "{name} hue {hue} out of range");
    }

    // Strictly increasing with chromatic index, except the wrap at B
    // (hue of B is ((11+1) % 12) / 12 * 0.9 = 0).
    for pair in NoteName::ALL.windows(2) {
        if pair[1] == NoteName::B {
            assert_eq!(pair[1].hue(), 0.0);
        } else {
            assert!(pair[0].hue() < pair[1].hue());
        }
    }
}

#[test]
fn test_midi_numbers() {
    assert_eq!(Note::new(NoteName::A, 4).midi(), 69);
    assert_eq!(Note::new(NoteName::C, 4).midi(), 60);
    assert_eq!(Note::new(NoteName::A, 0).midi(), 21);
    assert_eq!(Note::new(NoteName::C, 8).midi(), 108);
}

#[test]
fn test_reference_frequencies() {
    let a4 = Note::new(NoteName::A, 4);
    assert!((a4.frequency() - 440.0).abs() < 1e-6);

    let c4 = Note::new(NoteName::C, 4);
    assert!((c4.frequency() - 261.63).abs() < 0.01);

    // Octave doubling
    let a5 = Note::new(NoteName::A, 5);
    assert!((a5.frequency() - 880.0).abs() < 1e-6);
}

#[test]
fn test_period_is_reciprocal_of_frequency() {
    let a4 = Note::new(NoteName::A, 4);
    assert!((a4.period() - 1.0 / 440.0).abs() < 1e-12);
}

#[test]
fn test_freq_to_midi_round_trips() {
    for midi in 21..=108 {
        assert_eq!(freq_to_midi(midi_to_freq(midi)), midi);
    }
}

#[test]
fn test_keyboard_has_88_increasing_keys() {
    let keys = keyboard();
    assert_eq!(keys.len(), KEYBOARD_LEN);
    assert_eq!(keys[0], Note::new(NoteName::A, 0));
    assert_eq!(keys[87], Note::new(NoteName::C, 8));

    for pair in keys.windows(2) {
        assert!(
            pair[0].frequency() < pair[1].frequency(),
            "{} is not below {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_keyboard_has_no_duplicates() {
    let keys = keyboard();
    let unique: std::collections::HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), KEYBOARD_LEN);
}

#[test]
fn test_keyboard_position() {
    assert_eq!(keyboard_position(Note::new(NoteName::A, 0)).unwrap(), 0);
    assert_eq!(keyboard_position(Note::new(NoteName::C, 4)).unwrap(), 39);
    assert_eq!(keyboard_position(Note::new(NoteName::C, 8)).unwrap(), 87);

    let err = keyboard_position(Note::new(NoteName::D, 8)).unwrap_err();
    assert!(matches!(err, CoreError::NoteNotFound { .. }));

    // Octave 0 only has A, A#, B
    let err = keyboard_position(Note::new(NoteName::C, 0)).unwrap_err();
    assert!(matches!(err, CoreError::NoteNotFound { .. }));
}

#[test]
fn test_display_and_parse() {
    let cs4 = Note::new(NoteName::CSharp, 4);
    assert_eq!(cs4.to_string(), "C#4");
    assert_eq!("C#4".parse::<Note>().unwrap(), cs4);
    assert_eq!("a0".parse::<Note>().unwrap(), Note::new(NoteName::A, 0));

    assert!("H4".parse::<Note>().is_err());
    assert!("C".parse::<Note>().is_err());
    assert!("4".parse::<Note>().is_err());
}

#[test]
fn test_high_octaves_stay_well_defined() {
    // Octave 20 is far past the keyboard and the MIDI range, but the
    // note number and frequency are still plain arithmetic.
    let note = "A20".parse::<Note>().unwrap();
    assert_eq!(note.midi(), 261);

    // 16 octaves above A4: exactly 440 * 2^16 Hz.
    let expected = 440.0 * f64::powi(2.0, 16);
    assert!((note.frequency() - expected).abs() < 1.0);
    assert!(note.frequency().is_finite());
}

#[test]
fn test_transposed_octaves() {
    let c4 = Note::new(NoteName::C, 4);
    assert_eq!(c4.transposed_octaves(1), Note::new(NoteName::C, 5));
    assert!((c4.transposed_octaves(1).frequency() - 2.0 * c4.frequency()).abs() < 1e-9);
}
