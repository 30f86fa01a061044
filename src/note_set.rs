//! Note sets
//!
//! A note set is an interval set laid onto concrete pitch classes. Where
//! an interval set knows only "these ordinals above an unnamed center",
//! a note set knows the center's pitch class and can therefore be
//! spelled, complemented against the actual keyboard, and placed into
//! octaves.

use crate::interval_set::IntervalSet;
use crate::math;
use crate::naming::{NoteNameSet, MAX_NAMEABLE_SIZE};
use crate::note::{Modifier, Note, NoteName};

/// An ordered set of notes, optionally spelled.
///
/// Notes appear in the ordinal order of the interval set they came from,
/// so the first note is the tonal center whenever the interval set has
/// its ordinal-zero bit on. All operations return new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSet {
    notes: Vec<Note>,
    name_set: Option<NoteNameSet>,
}

impl NoteSet {
    /// All twelve notes, unspelled, anchored at pitch class 0.
    pub fn chromatic() -> NoteSet {
        NoteSet::from_interval_set(IntervalSet::CHROMATIC, 0)
    }

    /// Lay an interval set onto pitch classes.
    ///
    /// `tonal_center_offset` is subtracted from each ordinal, so an
    /// interval set whose tonal center sits at pitch class `t` is
    /// converted with an offset of `-t`.
    pub fn from_interval_set(interval_set: IntervalSet, tonal_center_offset: i32) -> NoteSet {
        let notes = interval_set
            .to_ordinals()
            .into_iter()
            .map(|ordinal| Note::new(math::wrap_to_octave(ordinal as i32 - tonal_center_offset)))
            .collect();
        NoteSet {
            notes,
            name_set: None,
        }
    }

    /// How many notes are in the set.
    pub fn count(&self) -> usize {
        self.notes.len()
    }

    /// Whether the set has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The notes, in ordinal order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The first note, which is the tonal center when present.
    pub fn first_note(&self) -> Option<&Note> {
        self.notes.first()
    }

    /// The spelling attached by [`NoteSet::named`], if any.
    pub fn name_set(&self) -> Option<&NoteNameSet> {
        self.name_set.as_ref()
    }

    /// The pitch class of the tonal center.
    pub fn tonal_center_id(&self) -> Option<usize> {
        self.first_note().map(|note| note.pitch_class())
    }

    /// A printable spelling of the tonal center, e.g. "E♭".
    pub fn tonal_center_name(&self) -> Option<String> {
        self.first_note().map(|note| note.name_for_labels().unicode())
    }

    /// Convert back to an interval set, then shift it. Passing the
    /// tonal-center offset this set was created with recovers the
    /// original pattern.
    pub fn to_interval_set(&self, shift: f64) -> IntervalSet {
        let ordinals: Vec<usize> = self.notes.iter().map(|note| note.pitch_class()).collect();
        IntervalSet::from_ordinals(&ordinals).shift(shift)
    }

    /// The candidate modifiers of each note, in note order.
    pub fn possible_modifiers_per_note(&self) -> Vec<Vec<Modifier>> {
        self.notes
            .iter()
            .map(|note| note.candidate_modifiers())
            .collect()
    }

    /// Every complete spelling of the set: the cartesian product of each
    /// note's candidate spellings, in product order (the first note's
    /// candidates vary slowest). A set of 7 white-key notes yields
    /// 3^7 = 2187 spellings.
    pub fn possible_name_sets(&self) -> Vec<NoteNameSet> {
        let rows: Vec<&[NoteName]> = self.notes.iter().map(|note| note.possible_names()).collect();
        math::cartesian_product(&rows)
            .into_iter()
            .map(NoteNameSet::new)
            .collect()
    }

    /// All spellings that tie for the fewest demerits, in product order.
    pub fn best_name_sets(&self) -> Vec<NoteNameSet> {
        let candidates = self.possible_name_sets();
        let lowest = match candidates.iter().map(NoteNameSet::demerits).min() {
            Some(demerits) => demerits,
            None => return Vec::new(),
        };
        candidates
            .into_iter()
            .filter(|name_set| name_set.demerits() == lowest)
            .collect()
    }

    /// One winning spelling. When several tie, the one generated first
    /// wins, which favors sharps over flats.
    pub fn best_name_set(&self) -> NoteNameSet {
        self.best_name_sets()
            .into_iter()
            .next()
            .unwrap_or_else(NoteNameSet::empty)
    }

    /// A copy of this set with the winning spelling committed to each
    /// note and attached as the set's name set. This runs the exhaustive
    /// search; see [`NoteSet::named_if_feasible`] for the guarded form.
    pub fn named(&self) -> NoteSet {
        let name_set = self.best_name_set();
        let notes = self
            .notes
            .iter()
            .zip(name_set.names())
            .map(|(note, name)| note.with_name(*name))
            .collect();
        NoteSet {
            notes,
            name_set: Some(name_set),
        }
    }

    /// Spell the set only when it has at most [`MAX_NAMEABLE_SIZE`]
    /// notes; larger sets are returned unchanged.
    pub fn named_if_feasible(&self) -> NoteSet {
        self.named_if_feasible_with(MAX_NAMEABLE_SIZE)
    }

    /// Spell the set only when it has at most `max_size` notes.
    pub fn named_if_feasible_with(&self, max_size: usize) -> NoteSet {
        if self.count() <= max_size {
            self.named()
        } else {
            self.clone()
        }
    }

    /// Spell each note independently toward a direction, without the
    /// exhaustive search and without attaching a name set. Each note
    /// takes the candidate matching `direction` when it has one, else
    /// `fallback`, else its natural, else its first candidate.
    pub fn directionally_named(
        &self,
        direction: Option<Modifier>,
        fallback: Option<Modifier>,
    ) -> NoteSet {
        let notes = self
            .notes
            .iter()
            .map(|note| note.named_to_match(direction, fallback))
            .collect();
        NoteSet {
            notes,
            name_set: None,
        }
    }

    /// All the notes this set lacks, spelled to look good alongside this
    /// set: the complement leans the way this set's spelling leans, and
    /// leans flat when this set is unspelled.
    pub fn complement(&self) -> NoteSet {
        let direction = self.name_set.as_ref().map(NoteNameSet::direction);
        NoteSet::from_interval_set(self.to_interval_set(0.0).complement(), 0)
            .directionally_named(direction, Some(Modifier::Flat))
    }

    /// The root of a chord heard at this set, given the inversion the
    /// matcher reported. Counts backward from the first note.
    pub fn root_note(&self, inversion: usize) -> Option<&Note> {
        if self.notes.is_empty() {
            return None;
        }
        let index = (-(inversion as i32)).rem_euclid(self.notes.len() as i32) as usize;
        self.notes.get(index)
    }
}
