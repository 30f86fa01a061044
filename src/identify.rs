//! Identification
//!
//! Matches an interval set against the chord and scale catalogs by
//! rotation. A pattern matches an entry when some upward shift of the
//! entry's canonical binary reproduces it exactly; the shift amount is
//! reported as the inversion. Catalogs are scanned in order and the
//! first match wins, so rotation-symmetric patterns such as diminished 7
//! always report inversion 0.

use crate::catalog::{self, CatalogEntry};
use crate::interval_set::IntervalSet;
use crate::math::DomainError;
use crate::OCTAVE_DIVISIONS;

/// An interval set recognized as a rotation of a chord catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    interval_set: IntervalSet,
    entry: &'static CatalogEntry,
    inversion: usize,
}

impl Chord {
    /// Construct a chord in root position straight from a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BinaryOutOfRange`] when the entry's binary
    /// uses bits above the octave.
    pub fn from_entry(entry: &'static CatalogEntry) -> Result<Chord, DomainError> {
        Ok(Chord {
            interval_set: IntervalSet::from_binary(entry.binary)?,
            entry,
            inversion: 0,
        })
    }

    /// The interval set that was matched, as given (not the canonical
    /// pattern).
    pub fn interval_set(&self) -> IntervalSet {
        self.interval_set
    }

    /// The catalog entry this chord matched.
    pub fn entry(&self) -> &'static CatalogEntry {
        self.entry
    }

    /// How many ordinals the canonical pattern was shifted up to produce
    /// the matched set. 0 means root position.
    pub fn inversion(&self) -> usize {
        self.inversion
    }

    /// The catalog name, e.g. "major".
    pub fn name(&self) -> &'static str {
        self.entry.name
    }
}

/// An interval set recognized as a rotation of a scale catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    interval_set: IntervalSet,
    entry: &'static CatalogEntry,
    inversion: usize,
}

impl Scale {
    /// Construct a scale in root position straight from a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BinaryOutOfRange`] when the entry's binary
    /// uses bits above the octave.
    pub fn from_entry(entry: &'static CatalogEntry) -> Result<Scale, DomainError> {
        Ok(Scale {
            interval_set: IntervalSet::from_binary(entry.binary)?,
            entry,
            inversion: 0,
        })
    }

    /// The interval set that was matched, as given.
    pub fn interval_set(&self) -> IntervalSet {
        self.interval_set
    }

    /// The catalog entry this scale matched.
    pub fn entry(&self) -> &'static CatalogEntry {
        self.entry
    }

    /// How many ordinals the canonical pattern was shifted up to produce
    /// the matched set. A mode of a catalog scale reports the rotation
    /// that maps the parent scale onto it.
    pub fn inversion(&self) -> usize {
        self.inversion
    }

    /// The catalog name, e.g. "harmonic minor".
    pub fn name(&self) -> &'static str {
        self.entry.name
    }
}

/// The outcome of identifying an interval set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Identity {
    /// No catalog entry matched; the set is carried through unchanged.
    Plain(IntervalSet),
    /// The set is a rotation of a chord catalog entry.
    Chord(Chord),
    /// The set is a rotation of a scale catalog entry.
    Scale(Scale),
}

impl Identity {
    /// The identified interval set, whatever the outcome.
    pub fn interval_set(&self) -> IntervalSet {
        match self {
            Identity::Plain(interval_set) => *interval_set,
            Identity::Chord(chord) => chord.interval_set(),
            Identity::Scale(scale) => scale.interval_set(),
        }
    }

    /// The matched catalog entry, if any.
    pub fn entry(&self) -> Option<&'static CatalogEntry> {
        match self {
            Identity::Plain(_) => None,
            Identity::Chord(chord) => Some(chord.entry()),
            Identity::Scale(scale) => Some(scale.entry()),
        }
    }

    /// The matched catalog name, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.name)
    }

    /// A name that is always printable: the catalog name when matched,
    /// otherwise a count like "5-note set".
    pub fn display_name(&self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("{}-note set", self.interval_set().count()),
        }
    }

    /// The matched entry's emblem symbol, if any.
    pub fn symbol(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.symbol)
    }

    /// The matched entry's emblem color, if any.
    pub fn color(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.color)
    }

    /// The rotation that produced the match, if any.
    pub fn inversion(&self) -> Option<usize> {
        match self {
            Identity::Plain(_) => None,
            Identity::Chord(chord) => Some(chord.inversion()),
            Identity::Scale(scale) => Some(scale.inversion()),
        }
    }

    /// Whether a catalog entry matched.
    pub fn is_named(&self) -> bool {
        !matches!(self, Identity::Plain(_))
    }
}

/// Identifies interval sets against a chord catalog and a scale catalog.
///
/// The default matcher uses [`catalog::CHORDS`] and [`catalog::SCALES`];
/// use [`MatcherBuilder`] to substitute custom catalogs.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    chords: &'static [CatalogEntry],
    scales: &'static [CatalogEntry],
}

impl Matcher {
    /// Create a matcher over the built-in catalogs.
    pub fn new() -> Matcher {
        MatcherBuilder::new().build()
    }

    /// Create a builder for a matcher with custom catalogs.
    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::new()
    }

    /// Identify an interval set, trying the chord catalog first, then
    /// the scale catalog.
    pub fn identify(&self, target: IntervalSet) -> Identity {
        if let Some((entry, inversion)) = match_in(self.chords, target) {
            return Identity::Chord(Chord {
                interval_set: target,
                entry,
                inversion,
            });
        }
        if let Some((entry, inversion)) = match_in(self.scales, target) {
            return Identity::Scale(Scale {
                interval_set: target,
                entry,
                inversion,
            });
        }
        Identity::Plain(target)
    }

    /// Match against the chord catalog only.
    pub fn match_chord(&self, target: IntervalSet) -> Option<Chord> {
        match_in(self.chords, target).map(|(entry, inversion)| Chord {
            interval_set: target,
            entry,
            inversion,
        })
    }

    /// Match against the scale catalog only.
    pub fn match_scale(&self, target: IntervalSet) -> Option<Scale> {
        match_in(self.scales, target).map(|(entry, inversion)| Scale {
            interval_set: target,
            entry,
            inversion,
        })
    }
}

impl Default for Matcher {
    fn default() -> Matcher {
        Matcher::new()
    }
}

/// Builds a [`Matcher`], defaulting both catalogs to the built-in tables.
#[derive(Debug, Clone, Copy)]
pub struct MatcherBuilder {
    chords: &'static [CatalogEntry],
    scales: &'static [CatalogEntry],
}

impl MatcherBuilder {
    /// Start from the built-in catalogs.
    pub fn new() -> MatcherBuilder {
        MatcherBuilder {
            chords: catalog::CHORDS,
            scales: catalog::SCALES,
        }
    }

    /// Substitute the chord catalog.
    pub fn chords(mut self, chords: &'static [CatalogEntry]) -> MatcherBuilder {
        self.chords = chords;
        self
    }

    /// Substitute the scale catalog.
    pub fn scales(mut self, scales: &'static [CatalogEntry]) -> MatcherBuilder {
        self.scales = scales;
        self
    }

    /// Finish the build.
    pub fn build(self) -> Matcher {
        Matcher {
            chords: self.chords,
            scales: self.scales,
        }
    }
}

impl Default for MatcherBuilder {
    fn default() -> MatcherBuilder {
        MatcherBuilder::new()
    }
}

/// Scan a catalog in order, trying every rotation of each entry.
/// Entries whose binary is out of range are skipped rather than failing
/// the whole scan.
fn match_in(
    catalog: &'static [CatalogEntry],
    target: IntervalSet,
) -> Option<(&'static CatalogEntry, usize)> {
    for entry in catalog {
        let canonical = match IntervalSet::from_binary(entry.binary) {
            Ok(interval_set) => interval_set,
            Err(_) => continue,
        };
        for rotation in 0..OCTAVE_DIVISIONS {
            if canonical.shift(rotation as f64) == target {
                return Some((entry, rotation));
            }
        }
    }
    None
}
