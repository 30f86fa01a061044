//! Chord sets
//!
//! A chord set is a selection of chords, kept sorted by catalog weight
//! and free of duplicates. Selections drive two things: which emblems a
//! UI offers for toggling, and which chords light up at each ordinal of
//! a scale.

use crate::catalog;
use crate::identify::Chord;
use crate::interval_set::IntervalSet;
use std::collections::HashSet;

/// The chords selected when nothing has been chosen yet.
const DEFAULT_CHORD_NAMES: [&str; 4] = ["major", "minor", "dominant 7", "diminished"];

/// An ordered, duplicate-free selection of chords.
///
/// All operations return new sets; an existing set is never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChordSet {
    chords: Vec<Chord>,
}

impl ChordSet {
    /// Build a set from any chords: sorts them by catalog weight and
    /// drops duplicates of the same pattern, keeping the first.
    pub fn new(mut chords: Vec<Chord>) -> ChordSet {
        chords.sort_by_key(|chord| chord.entry().weight);
        let mut seen = HashSet::new();
        chords.retain(|chord| seen.insert(chord.entry().binary));
        ChordSet { chords }
    }

    /// The out-of-the-box selection: major, minor, dominant 7, and
    /// diminished.
    pub fn from_default_chords() -> ChordSet {
        let chords = DEFAULT_CHORD_NAMES
            .iter()
            .filter_map(|name| catalog::chord_named(name))
            .filter_map(|entry| Chord::from_entry(entry).ok())
            .collect();
        ChordSet::new(chords)
    }

    /// The candidate chords that can be built on one ordinal of an
    /// interval set: those whose pattern, shifted up to the ordinal,
    /// fits entirely inside the set.
    pub fn at_ordinal(interval_set: IntervalSet, ordinal: i32, candidates: &ChordSet) -> ChordSet {
        let chords = candidates
            .chords
            .iter()
            .filter(|chord| interval_set.contains(chord.interval_set().shift(f64::from(ordinal))))
            .copied()
            .collect();
        ChordSet::new(chords)
    }

    /// How many chords are selected.
    pub fn count(&self) -> usize {
        self.chords.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// The selected chords, sorted by catalog weight.
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Whether the selection holds a chord with the same pattern.
    pub fn contains_chord(&self, chord: &Chord) -> bool {
        self.chords
            .iter()
            .any(|selected| selected.entry().binary == chord.entry().binary)
    }

    /// A new selection with the chord added; unchanged if its pattern
    /// was already selected.
    pub fn add_chord(&self, chord: Chord) -> ChordSet {
        if self.contains_chord(&chord) {
            return self.clone();
        }
        let mut chords = self.chords.clone();
        chords.push(chord);
        ChordSet::new(chords)
    }

    /// A new selection with any chord of the same pattern removed.
    pub fn remove_chord(&self, chord: &Chord) -> ChordSet {
        let chords = self
            .chords
            .iter()
            .filter(|selected| selected.entry().binary != chord.entry().binary)
            .copied()
            .collect();
        ChordSet { chords }
    }

    /// A new selection with the chord removed when present, added when
    /// absent.
    pub fn toggle_chord(&self, chord: Chord) -> ChordSet {
        if self.contains_chord(&chord) {
            self.remove_chord(&chord)
        } else {
            self.add_chord(chord)
        }
    }

    /// The summed emblem sizes of the selection, for laying emblems out
    /// end to end.
    pub fn total_emblem_size(&self) -> f32 {
        self.chords
            .iter()
            .map(|chord| chord.entry().emblem_size)
            .sum()
    }
}
