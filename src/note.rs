//! Notes
//!
//! A note is a pitch class plus an optional spelling. Every pitch class
//! has a fixed list of candidate spellings (two for black keys, three
//! for white keys); naming a note means committing to one of them.

use crate::OCTAVE_DIVISIONS;
use std::fmt;

/// How a note letter is altered to reach a pitch class.
///
/// The declaration order is meaningful: candidate spellings for each
/// pitch class are listed in this order, which makes sharps win ties
/// when spellings are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// The letter unaltered.
    Natural,
    /// One semitone above the letter.
    Sharp,
    /// One semitone below the letter.
    Flat,
    /// Two semitones above the letter.
    DoubleSharp,
    /// Two semitones below the letter.
    DoubleFlat,
}

impl Modifier {
    /// The unicode accidental glyph, empty for natural.
    pub fn glyph(&self) -> &'static str {
        match self {
            Modifier::Natural => "",
            Modifier::Sharp => "\u{266f}",
            Modifier::Flat => "\u{266d}",
            Modifier::DoubleSharp => "\u{1d12a}",
            Modifier::DoubleFlat => "\u{1d12b}",
        }
    }

    /// An ASCII rendition of the accidental, empty for natural.
    pub fn ascii(&self) -> &'static str {
        match self {
            Modifier::Natural => "",
            Modifier::Sharp => "#",
            Modifier::Flat => "b",
            Modifier::DoubleSharp => "##",
            Modifier::DoubleFlat => "bb",
        }
    }

    /// Reading cost of the accidental: naturals are free, single
    /// accidentals cheap, double accidentals expensive.
    pub fn accidental_cost(&self) -> u32 {
        match self {
            Modifier::Natural => 0,
            Modifier::Sharp | Modifier::Flat => 1,
            Modifier::DoubleSharp | Modifier::DoubleFlat => 3,
        }
    }

    /// Whether this modifier raises the letter.
    pub fn is_sharp_family(&self) -> bool {
        matches!(self, Modifier::Sharp | Modifier::DoubleSharp)
    }

    /// Whether this modifier lowers the letter.
    pub fn is_flat_family(&self) -> bool {
        matches!(self, Modifier::Flat | Modifier::DoubleFlat)
    }
}

/// One concrete spelling of a pitch class: a letter and a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pitch_class: usize,
    modifier: Modifier,
    letter: char,
}

impl NoteName {
    /// The pitch class this spelling refers to.
    pub fn pitch_class(&self) -> usize {
        self.pitch_class
    }

    /// The modifier applied to the letter.
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// The base letter, `'A'` through `'G'`.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The spelling with unicode accidentals, e.g. "E♭".
    pub fn unicode(&self) -> String {
        format!("{}{}", self.letter, self.modifier.glyph())
    }

    /// The spelling with ASCII accidentals, e.g. "Eb".
    pub fn ascii(&self) -> String {
        format!("{}{}", self.letter, self.modifier.ascii())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.modifier.glyph())
    }
}

const fn nn(pitch_class: usize, letter: char, modifier: Modifier) -> NoteName {
    NoteName {
        pitch_class,
        modifier,
        letter,
    }
}

/// Candidate spellings per pitch class. Within each row the candidates
/// appear in [`Modifier`] declaration order; rows for black keys hold
/// exactly the sharp and flat spellings, rows for white keys add the
/// double-accidental neighbors around the natural.
const NAME_CANDIDATES: [&[NoteName]; OCTAVE_DIVISIONS] = [
    &[
        nn(0, 'C', Modifier::Natural),
        nn(0, 'B', Modifier::Sharp),
        nn(0, 'D', Modifier::DoubleFlat),
    ],
    &[nn(1, 'C', Modifier::Sharp), nn(1, 'D', Modifier::Flat)],
    &[
        nn(2, 'D', Modifier::Natural),
        nn(2, 'C', Modifier::DoubleSharp),
        nn(2, 'E', Modifier::DoubleFlat),
    ],
    &[nn(3, 'D', Modifier::Sharp), nn(3, 'E', Modifier::Flat)],
    &[
        nn(4, 'E', Modifier::Natural),
        nn(4, 'F', Modifier::Flat),
        nn(4, 'D', Modifier::DoubleSharp),
    ],
    &[
        nn(5, 'F', Modifier::Natural),
        nn(5, 'E', Modifier::Sharp),
        nn(5, 'G', Modifier::DoubleFlat),
    ],
    &[nn(6, 'F', Modifier::Sharp), nn(6, 'G', Modifier::Flat)],
    &[
        nn(7, 'G', Modifier::Natural),
        nn(7, 'F', Modifier::DoubleSharp),
        nn(7, 'A', Modifier::DoubleFlat),
    ],
    &[nn(8, 'G', Modifier::Sharp), nn(8, 'A', Modifier::Flat)],
    &[
        nn(9, 'A', Modifier::Natural),
        nn(9, 'G', Modifier::DoubleSharp),
        nn(9, 'B', Modifier::DoubleFlat),
    ],
    &[nn(10, 'A', Modifier::Sharp), nn(10, 'B', Modifier::Flat)],
    &[
        nn(11, 'B', Modifier::Natural),
        nn(11, 'C', Modifier::Flat),
        nn(11, 'A', Modifier::DoubleSharp),
    ],
];

/// The color of the corresponding key on a conventional keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColor {
    /// A key with a natural spelling.
    White,
    /// One of the five keys without a natural spelling.
    Black,
}

/// A pitch class, optionally committed to one spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pitch_class: usize,
    name: Option<NoteName>,
}

impl Note {
    /// Create an unnamed note, wrapping the pitch class into the octave.
    pub fn new(pitch_class: usize) -> Note {
        Note {
            pitch_class: pitch_class % OCTAVE_DIVISIONS,
            name: None,
        }
    }

    /// The pitch class, 0 through 11.
    pub fn pitch_class(&self) -> usize {
        self.pitch_class
    }

    /// The committed spelling, if one has been chosen.
    pub fn name(&self) -> Option<NoteName> {
        self.name
    }

    /// All candidate spellings for this pitch class.
    pub fn possible_names(&self) -> &'static [NoteName] {
        NAME_CANDIDATES[self.pitch_class]
    }

    /// The modifiers of the candidate spellings, in candidate order.
    pub fn candidate_modifiers(&self) -> Vec<Modifier> {
        self.possible_names()
            .iter()
            .map(|name| name.modifier())
            .collect()
    }

    /// Commit to the candidate spelling with the given modifier, or
    /// `None` when this pitch class has no such candidate.
    pub fn named_with(&self, modifier: Modifier) -> Option<Note> {
        find_modifier(self.possible_names(), modifier).map(|name| self.with_name(name))
    }

    pub(crate) fn with_name(&self, name: NoteName) -> Note {
        Note {
            pitch_class: self.pitch_class,
            name: Some(name),
        }
    }

    /// White for the seven natural pitch classes, black for the rest.
    pub fn color(&self) -> KeyColor {
        match self.natural_name() {
            Some(_) => KeyColor::White,
            None => KeyColor::Black,
        }
    }

    fn natural_name(&self) -> Option<NoteName> {
        find_modifier(self.possible_names(), Modifier::Natural)
    }

    /// Commit to a spelling that leans the given direction, falling back
    /// in order: direction, fallback, natural, first candidate. Used to
    /// spell a set quickly when a full scored search is not warranted.
    pub fn named_to_match(&self, direction: Option<Modifier>, fallback: Option<Modifier>) -> Note {
        let candidates = self.possible_names();
        let name = direction
            .and_then(|modifier| find_modifier(candidates, modifier))
            .or_else(|| fallback.and_then(|modifier| find_modifier(candidates, modifier)))
            .or_else(|| find_modifier(candidates, Modifier::Natural))
            .or_else(|| candidates.first().copied());
        match name {
            Some(name) => self.with_name(name),
            None => *self,
        }
    }

    /// The spellings a key label should show. A note named with an
    /// accidental also shows its natural spelling when it has one; an
    /// unnamed black key shows both of its single-accidental spellings.
    pub fn label_names(&self) -> Vec<NoteName> {
        match (self.name, self.natural_name()) {
            (Some(chosen), Some(natural)) if chosen.modifier() != Modifier::Natural => {
                vec![chosen, natural]
            }
            (Some(chosen), _) => vec![chosen],
            (None, Some(natural)) => vec![natural],
            (None, None) => self.possible_names().to_vec(),
        }
    }

    /// The single spelling to print when exactly one is needed: the
    /// committed name, else the natural, else the flat.
    pub fn name_for_labels(&self) -> NoteName {
        self.name
            .or_else(|| self.natural_name())
            .or_else(|| find_modifier(self.possible_names(), Modifier::Flat))
            .unwrap_or_else(|| self.possible_names()[0])
    }
}

fn find_modifier(candidates: &'static [NoteName], modifier: Modifier) -> Option<NoteName> {
    candidates
        .iter()
        .find(|name| name.modifier() == modifier)
        .copied()
}
