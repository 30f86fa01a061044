//! Pitches
//!
//! A pitch is a note placed in a specific octave, carrying a MIDI note
//! number and an equal-temperament frequency. A pitch set lays a note
//! set into ascending pitches starting from a given octave.

use crate::note::Note;
use crate::note_set::NoteSet;
use crate::OCTAVE_DIVISIONS;

const MIDI_A4: i32 = 69;
const A4_HZ: f64 = 440.0;

/// A note in a specific octave.
///
/// MIDI numbering follows the convention where C4 (middle C) is 60 and
/// A4 is 69.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    note: Note,
    midi: i32,
}

impl Pitch {
    /// Place a note in an octave.
    pub fn new(note: Note, octave: i32) -> Pitch {
        let midi = (octave + 1) * OCTAVE_DIVISIONS as i32 + note.pitch_class() as i32;
        Pitch { note, midi }
    }

    /// The note, including any spelling it carries.
    pub fn note(&self) -> Note {
        self.note
    }

    /// The MIDI note number.
    pub fn midi(&self) -> i32 {
        self.midi
    }

    /// The octave this pitch sits in; middle C sits in octave 4.
    pub fn octave(&self) -> i32 {
        self.midi.div_euclid(OCTAVE_DIVISIONS as i32) - 1
    }

    /// The equal-temperament frequency in hertz, tuned to A4 = 440 Hz.
    pub fn frequency(&self) -> f64 {
        A4_HZ * 2f64.powf(f64::from(self.midi - MIDI_A4) / OCTAVE_DIVISIONS as f64)
    }
}

/// A note set laid into ascending pitches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchSet {
    pitches: Vec<Pitch>,
}

impl PitchSet {
    /// Place each note of a set into a concrete octave, in order. The
    /// first note lands in `octave`; every later note takes the nearest
    /// pitch strictly above the one before it, so the whole set ascends.
    pub fn from_note_set(note_set: &NoteSet, octave: i32) -> PitchSet {
        let mut pitches: Vec<Pitch> = Vec::with_capacity(note_set.count());
        for note in note_set.notes() {
            let pitch = match pitches.last() {
                None => Pitch::new(*note, octave),
                Some(previous) => {
                    let span = OCTAVE_DIVISIONS as i32;
                    let step = (note.pitch_class() as i32 - previous.midi()).rem_euclid(span);
                    let step = if step == 0 { span } else { step };
                    Pitch {
                        note: *note,
                        midi: previous.midi() + step,
                    }
                }
            };
            pitches.push(pitch);
        }
        PitchSet { pitches }
    }

    /// The pitches, ascending.
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// How many pitches are in the set.
    pub fn count(&self) -> usize {
        self.pitches.len()
    }

    /// Whether the set has no pitches.
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }
}
