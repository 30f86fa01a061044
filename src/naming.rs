//! Spelling
//!
//! Scores complete spellings of a note set. A spelling earns demerits
//! for accidentals (1 per single, 3 per double), for mixing sharps with
//! flats (2 per note on the smaller side), and for giving two notes the
//! same base letter (7 per repeat). The best spelling of a set is the
//! one with the fewest demerits; ties go to the spelling generated
//! first, which favors sharps over flats.

use crate::math;
use crate::note::{Modifier, NoteName};
use crate::note_set::NoteSet;
use std::cmp::Ordering;

/// Sets larger than this are not worth spelling exhaustively: the
/// candidate space grows as 3^n and the result reads badly anyway.
pub const MAX_NAMEABLE_SIZE: usize = 8;

const MIXED_DIRECTION_COST: u32 = 2;
const REPEATED_LETTER_COST: u32 = 7;

/// A complete spelling of a note set, one name per note, with its
/// demerit score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNameSet {
    names: Vec<NoteName>,
    demerits: u32,
}

impl NoteNameSet {
    /// The spelling of the empty set: no names, no demerits.
    pub fn empty() -> NoteNameSet {
        NoteNameSet {
            names: Vec::new(),
            demerits: 0,
        }
    }

    pub(crate) fn new(names: Vec<NoteName>) -> NoteNameSet {
        let demerits = demerits_for(&names);
        NoteNameSet { names, demerits }
    }

    /// Spell a note set by picking one modifier per note, in note order.
    /// Returns `None` when the modifier list has the wrong length or
    /// asks a note for a spelling it does not have.
    pub fn from_modifiers(note_set: &NoteSet, modifiers: &[Modifier]) -> Option<NoteNameSet> {
        if note_set.count() != modifiers.len() {
            return None;
        }
        let names = note_set
            .notes()
            .iter()
            .zip(modifiers)
            .map(|(note, modifier)| note.named_with(*modifier).and_then(|named| named.name()))
            .collect::<Option<Vec<NoteName>>>()?;
        Some(NoteNameSet::new(names))
    }

    /// The names, in the note order of the set they spell.
    pub fn names(&self) -> &[NoteName] {
        &self.names
    }

    /// The demerit score. Lower reads better.
    pub fn demerits(&self) -> u32 {
        self.demerits
    }

    /// Which way the spelling leans: [`Modifier::Sharp`] when sharps
    /// outnumber flats, [`Modifier::Flat`] when flats outnumber sharps,
    /// [`Modifier::Natural`] on a tie.
    pub fn direction(&self) -> Modifier {
        let sharps = self
            .names
            .iter()
            .filter(|name| name.modifier().is_sharp_family())
            .count();
        let flats = self
            .names
            .iter()
            .filter(|name| name.modifier().is_flat_family())
            .count();
        match sharps.cmp(&flats) {
            Ordering::Greater => Modifier::Sharp,
            Ordering::Less => Modifier::Flat,
            Ordering::Equal => Modifier::Natural,
        }
    }
}

fn demerits_for(names: &[NoteName]) -> u32 {
    let accidentals: u32 = names
        .iter()
        .map(|name| name.modifier().accidental_cost())
        .sum();
    let sharps = names
        .iter()
        .filter(|name| name.modifier().is_sharp_family())
        .count() as u32;
    let flats = names
        .iter()
        .filter(|name| name.modifier().is_flat_family())
        .count() as u32;
    let letters: Vec<char> = names.iter().map(|name| name.letter()).collect();
    let repeats: u32 = math::value_frequency(&letters)
        .values()
        .map(|&count| (count - 1) as u32)
        .sum();
    accidentals + MIXED_DIRECTION_COST * sharps.min(flats) + REPEATED_LETTER_COST * repeats
}
