//! # tonewheel
//!
//! Pitch‐class set arithmetic, chord and scale identification, and
//! enharmonic note spelling, built for driving radial keyboard
//! visualizations.
//!
//! ## Example
//! ```rust
//! use tonewheel::{IntervalSet, Matcher, NoteSet};
//!
//! fn run() -> Result<(), tonewheel::DomainError> {
//!     // 1) Describe the sounding pitch classes as a bit pattern
//!     let intervals = IntervalSet::from_binary(0b000010010001)?;
//!
//!     // 2) Ask the catalogs what it is
//!     let identity = Matcher::new().identify(intervals);
//!     assert_eq!(identity.name(), Some("major"));
//!     assert_eq!(identity.inversion(), Some(0));
//!
//!     // 3) Spell it for display
//!     let notes = NoteSet::from_interval_set(intervals, 0).named();
//!     let spelled: Vec<String> = notes
//!         .notes()
//!         .iter()
//!         .map(|note| note.name_for_labels().unicode())
//!         .collect();
//!     assert_eq!(spelled, ["C", "E", "G"]);
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// How many equal divisions of the octave the whole crate assumes.
pub const OCTAVE_DIVISIONS: usize = 12;

/// Pitch‐class sets as bit patterns.
pub use interval_set::IntervalSet;

/// Catalog tables and lookups.
pub use catalog::{chord_named, scale_named, CatalogEntry, CHORDS, SCALES};

/// Chord and scale identification API.
pub use identify::{Chord, Identity, Matcher, MatcherBuilder, Scale};

/// Notes and their candidate spellings.
pub use note::{KeyColor, Modifier, Note, NoteName};

/// Spelling search results.
pub use naming::{NoteNameSet, MAX_NAMEABLE_SIZE};

/// Notes laid onto pitch classes.
pub use note_set::NoteSet;

/// Octave placement and frequencies.
pub use pitch::{Pitch, PitchSet};

/// Chord selections.
pub use chord_set::ChordSet;

/// Scalar helpers and the crate error type.
pub use math::{cartesian_product, value_frequency, wrap, wrap_to_octave, DomainError};

/// Modular arithmetic module.
pub mod math;

/// Interval set module.
pub mod interval_set;

/// Chord and scale catalog module.
pub mod catalog;

/// Catalog matching module.
pub mod identify;

/// Note and spelling module.
pub mod note;

/// Spelling scorer module.
pub mod naming;

/// Note set module.
pub mod note_set;

/// Pitch module.
pub mod pitch;

/// Chord selection module.
pub mod chord_set;
