//! Interval Set
//!
//! Pitch-class sets packed into a binary word: one bit per octave division,
//! bit `i` set when pitch class `i` is active. Bit 0 marks the tonal center
//! by convention, though nothing here depends on it being set.

use std::fmt::Display;

use crate::math::{self, DomainError};
use crate::OCTAVE_DIVISIONS;

/// An immutable set of pitch classes packed into the low bits of a `u32`.
///
/// Every operation returns a new set; the binary is always masked to the
/// octave, so `binary() < 2^OCTAVE_DIVISIONS` holds for every value that
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalSet {
    binary: u32,
}

impl IntervalSet {
    /// The set with no active pitch classes.
    pub const EMPTY: IntervalSet = IntervalSet { binary: 0 };

    /// The set with every pitch class active.
    pub const CHROMATIC: IntervalSet = IntervalSet {
        binary: (1 << OCTAVE_DIVISIONS) - 1,
    };

    /// Build a set from its packed binary pattern.
    ///
    /// Fails when the pattern has bits set at or above `OCTAVE_DIVISIONS`.
    pub fn from_binary(binary: u32) -> Result<IntervalSet, DomainError> {
        if binary > Self::CHROMATIC.binary {
            return Err(DomainError::BinaryOutOfRange {
                binary,
                max: Self::CHROMATIC.binary,
            });
        }
        Ok(IntervalSet { binary })
    }

    /// Build a set by activating the given ordinals. Each ordinal is
    /// wrapped into the octave, so 12 activates the same bit as 0.
    pub fn from_ordinals(ordinals: &[usize]) -> IntervalSet {
        let mut binary = 0;
        for &ordinal in ordinals {
            binary |= 1 << (ordinal % OCTAVE_DIVISIONS);
        }
        IntervalSet { binary }
    }

    /// The packed binary pattern.
    pub fn binary(self) -> u32 {
        self.binary
    }

    /// Ascending ordinals of the active pitch classes, e.g. `[0, 4, 7]`
    /// for a major triad.
    pub fn to_ordinals(self) -> Vec<usize> {
        (0..OCTAVE_DIVISIONS)
            .filter(|&ordinal| (self.binary & (1 << ordinal)) != 0)
            .collect()
    }

    /// How many pitch classes are active.
    pub fn count(self) -> usize {
        self.binary.count_ones() as usize
    }

    /// True when no pitch class is active.
    pub fn is_empty(self) -> bool {
        self.binary == 0
    }

    /// True when the pitch class at `ordinal` (wrapped into the octave) is
    /// active.
    pub fn is_active(self, ordinal: i32) -> bool {
        (self.binary & (1 << math::wrap_to_octave(ordinal))) != 0
    }

    /// Rotate the set clockwise by `amount` pitch classes, wrapping bits
    /// around the top of the octave.
    ///
    /// The amount is rounded to the nearest integer first (halves away
    /// from zero), so fractional amounts from interactive rotation snap to
    /// the nearest key. For integral amounts,
    /// `x.shift(a).shift(b) == x.shift(a + b)`.
    pub fn shift(self, amount: f64) -> IntervalSet {
        let by = math::wrap_to_octave(amount.round() as i32);
        let rotated = (self.binary << by) | (self.binary >> (OCTAVE_DIVISIONS - by));
        IntervalSet {
            binary: rotated & Self::CHROMATIC.binary,
        }
    }

    /// Rotate the set so that its `amount`-th active ordinal becomes the
    /// new tonal center: `mode_shift(1)` on a major scale produces dorian.
    /// The index wraps around the active count; the empty set is returned
    /// unchanged.
    pub fn mode_shift(self, amount: i32) -> IntervalSet {
        let ordinals = self.to_ordinals();
        if ordinals.is_empty() {
            return self;
        }
        let index = amount.rem_euclid(ordinals.len() as i32) as usize;
        self.shift(-(ordinals[index] as f64))
    }

    /// Flip one pitch class on or off. The ordinal is wrapped into the
    /// octave.
    pub fn toggle_ordinal(self, ordinal: i32) -> IntervalSet {
        IntervalSet {
            binary: self.binary ^ (1 << math::wrap_to_octave(ordinal)),
        }
    }

    /// True when every pitch class active in `other` is also active here.
    pub fn contains(self, other: IntervalSet) -> bool {
        (self.binary & other.binary) == other.binary
    }

    /// The set of pitch classes this set leaves inactive.
    pub fn complement(self) -> IntervalSet {
        IntervalSet {
            binary: !self.binary & Self::CHROMATIC.binary,
        }
    }

    /// This set with the tonal center (bit 0) forced on.
    pub fn with_tonal_center(self) -> IntervalSet {
        IntervalSet {
            binary: self.binary | 1,
        }
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.binary, width = OCTAVE_DIVISIONS)
    }
}
