//! Integration tests for octave placement and chord selections.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tonewheel::{
    chord_named, Chord, ChordSet, IntervalSet, Note, NoteSet, Pitch, PitchSet, OCTAVE_DIVISIONS,
};

const MAJOR_TRIAD: u32 = 0b000010010001;
const MAJOR_SCALE: u32 = 0b101010110101;

fn set(binary: u32) -> IntervalSet {
    IntervalSet::from_binary(binary).expect("test pattern in range")
}

fn chord(name: &str) -> Chord {
    Chord::from_entry(chord_named(name).expect("in catalog")).expect("in range")
}

fn selected_names(chord_set: &ChordSet) -> Vec<&'static str> {
    chord_set.chords().iter().map(|chord| chord.name()).collect()
}

#[test]
fn test_pitches_ascend_from_the_starting_octave() {
    let triad = NoteSet::from_interval_set(set(MAJOR_TRIAD), 0);
    let pitches = PitchSet::from_note_set(&triad, 4);
    let midis: Vec<i32> = pitches.pitches().iter().map(|pitch| pitch.midi()).collect();
    assert_eq!(midis, [60, 64, 67]);
    assert_eq!(pitches.count(), 3);
}

#[test]
fn test_pitches_wrap_upward_past_the_octave_break() {
    // G B D: the D lands above the octave break, one octave up.
    let g_triad = NoteSet::from_interval_set(set(MAJOR_TRIAD), -7);
    let pitches = PitchSet::from_note_set(&g_triad, 3);
    let midis: Vec<i32> = pitches.pitches().iter().map(|pitch| pitch.midi()).collect();
    assert_eq!(midis, [55, 59, 62]);
}

#[test]
fn test_chromatic_fills_one_octave() {
    let pitches = PitchSet::from_note_set(&NoteSet::chromatic(), 4);
    let midis: Vec<i32> = pitches.pitches().iter().map(|pitch| pitch.midi()).collect();
    assert_eq!(midis, (60..=71).collect::<Vec<i32>>());
}

#[test]
fn test_midi_octave_and_frequency() {
    let a4 = Pitch::new(Note::new(9), 4);
    assert_eq!(a4.midi(), 69);
    assert_eq!(a4.octave(), 4);
    assert_eq!(a4.frequency(), 440.0);

    let c4 = Pitch::new(Note::new(0), 4);
    assert_eq!(c4.midi(), 60);
    assert!((c4.frequency() - 261.625_565_300_598_6).abs() < 1e-9);

    let b3 = Pitch::new(Note::new(11), 3);
    assert_eq!(b3.midi(), 59);
    assert_eq!(b3.octave(), 3);

    assert_eq!(Pitch::new(Note::new(0), -1).midi(), 0);
}

#[test]
fn test_pitches_keep_their_spellings() {
    let named = NoteSet::from_interval_set(set(MAJOR_TRIAD), 0).named();
    let pitches = PitchSet::from_note_set(&named, 4);
    assert!(pitches.pitches().iter().all(|pitch| pitch.note().name().is_some()));

    let empty = PitchSet::from_note_set(&NoteSet::from_interval_set(IntervalSet::EMPTY, 0), 4);
    assert!(empty.is_empty());
    assert_eq!(empty.count(), 0);
}

#[test]
fn test_every_note_set_lays_out_strictly_ascending() {
    (0u32..1u32 << OCTAVE_DIVISIONS)
        .into_par_iter()
        .for_each(|binary| {
            let note_set = NoteSet::from_interval_set(set(binary), 0);
            let pitches = PitchSet::from_note_set(&note_set, 4);
            assert_eq!(pitches.count(), note_set.count());
            for (pitch, note) in pitches.pitches().iter().zip(note_set.notes()) {
                assert_eq!(pitch.midi().rem_euclid(12) as usize, note.pitch_class());
            }
            for window in pitches.pitches().windows(2) {
                let gap = window[1].midi() - window[0].midi();
                assert!((1..=12).contains(&gap), "gap {gap} in {binary:b}");
            }
            if let Some(first) = pitches.pitches().first() {
                assert_eq!(first.octave(), 4);
            }
        });
}

#[test]
fn test_default_chord_selection() {
    let selection = ChordSet::from_default_chords();
    assert_eq!(
        selected_names(&selection),
        ["major", "minor", "diminished", "dominant 7"]
    );
    assert_eq!(selection.count(), 4);
    assert!((selection.total_emblem_size() - 3.2).abs() < 1e-6);
}

#[test]
fn test_selection_sorts_by_weight_and_dedups() {
    let selection = ChordSet::new(vec![chord("dominant 7"), chord("major")]);
    assert_eq!(selected_names(&selection), ["major", "dominant 7"]);

    let duplicated = ChordSet::new(vec![chord("major"), chord("major"), chord("diminished")]);
    assert_eq!(selected_names(&duplicated), ["major", "diminished"]);
}

#[test]
fn test_selection_add_remove_toggle() {
    let selection = ChordSet::from_default_chords();

    assert!(selection.contains_chord(&chord("major")));
    assert!(!selection.contains_chord(&chord("augmented")));

    let unchanged = selection.add_chord(chord("major"));
    assert_eq!(unchanged, selection);

    let grown = selection.add_chord(chord("augmented"));
    assert_eq!(
        selected_names(&grown),
        ["major", "minor", "augmented", "diminished", "dominant 7"]
    );

    let shrunk = grown.remove_chord(&chord("augmented"));
    assert_eq!(shrunk, selection);
    assert_eq!(selection.remove_chord(&chord("augmented")), selection);

    let toggled_off = selection.toggle_chord(chord("minor"));
    assert!(!toggled_off.contains_chord(&chord("minor")));
    let toggled_back = toggled_off.toggle_chord(chord("minor"));
    assert_eq!(toggled_back, selection);

    let empty = ChordSet::default();
    assert!(empty.is_empty());
    assert_eq!(empty.total_emblem_size(), 0.0);
    assert_eq!(empty.toggle_chord(chord("major")).count(), 1);
}

#[test]
fn test_chords_available_at_each_scale_ordinal() {
    let scale = set(MAJOR_SCALE);
    let candidates = ChordSet::from_default_chords();

    let tonic = ChordSet::at_ordinal(scale, 0, &candidates);
    assert_eq!(selected_names(&tonic), ["major"]);

    let supertonic = ChordSet::at_ordinal(scale, 2, &candidates);
    assert_eq!(selected_names(&supertonic), ["minor"]);

    let dominant = ChordSet::at_ordinal(scale, 7, &candidates);
    assert_eq!(selected_names(&dominant), ["major", "dominant 7"]);

    let leading = ChordSet::at_ordinal(scale, 11, &candidates);
    assert_eq!(selected_names(&leading), ["diminished"]);

    // Ordinals off the scale grow no chords at all.
    assert!(ChordSet::at_ordinal(scale, 1, &candidates).is_empty());
    // Negative ordinals wrap like every other rotation.
    assert_eq!(
        ChordSet::at_ordinal(scale, -5, &candidates),
        ChordSet::at_ordinal(scale, 7, &candidates)
    );

    assert!(ChordSet::at_ordinal(scale, 0, &ChordSet::default()).is_empty());
}
