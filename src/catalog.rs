//! Catalog
//!
//! Static chord and scale patterns with their display metadata. Catalog
//! order is part of the matching contract: earlier entries win, so a
//! pattern that is a rotation of an earlier pattern (suspended 4 is a
//! rotation of suspended 2) can never be reached by the matcher, even
//! though selection UIs still address its entry directly.

/// One named pattern in a chord or scale catalog.
///
/// `symbol` may contain SVG `<tspan>` markup; it is passed through to the
/// rendering layer verbatim.
#[derive(Debug, PartialEq)]
pub struct CatalogEntry {
    /// Canonical binary pattern; bit `i` set when pitch class `i` sounds.
    pub binary: u32,
    /// Display name, e.g. "major".
    pub name: &'static str,
    /// Sort weight when several entries are shown together, ascending.
    pub weight: u16,
    /// Emblem label, possibly containing SVG markup.
    pub symbol: &'static str,
    /// CSS color of the emblem.
    pub color: &'static str,
    /// Relative radius of the emblem.
    pub emblem_size: f32,
    /// Relative scale of the symbol text inside the emblem.
    pub text_size_factor: f32,
}

/// The chord catalog, in matching priority order.
pub const CHORDS: &[CatalogEntry] = &[
    CatalogEntry {
        binary: 0b000010010001,
        name: "major",
        weight: 1,
        emblem_size: 1.0,
        text_size_factor: 1.0,
        color: "#46ba19",
        symbol: "<tspan class=\"bold\">M</tspan>",
    },
    CatalogEntry {
        binary: 0b000010001001,
        name: "minor",
        weight: 2,
        emblem_size: 0.9,
        text_size_factor: 1.0,
        color: "#2d5da6",
        symbol: "<tspan class=\"italic\">m</tspan>",
    },
    CatalogEntry {
        binary: 0b000010000101,
        name: "suspended 2",
        weight: 3,
        emblem_size: 0.7,
        text_size_factor: 0.9,
        color: "#18c0ce",
        symbol: "sus2",
    },
    CatalogEntry {
        binary: 0b000010100001,
        name: "suspended 4",
        weight: 4,
        emblem_size: 0.7,
        text_size_factor: 0.9,
        color: "#1bceb1",
        symbol: "sus4",
    },
    CatalogEntry {
        binary: 0b000100010001,
        name: "augmented",
        weight: 5,
        emblem_size: 0.7,
        text_size_factor: 2.0,
        color: "#b7a18d",
        symbol: "<tspan class=\"bold\">+</tspan>",
    },
    CatalogEntry {
        binary: 0b000001001001,
        name: "diminished",
        weight: 6,
        emblem_size: 0.6,
        text_size_factor: 1.7,
        color: "#ba5319",
        symbol: "<tspan dy=\"-0.4em\" font-size=\"70%\">o</tspan>",
    },
    CatalogEntry {
        binary: 0b010010010001,
        name: "dominant 7",
        weight: 7,
        emblem_size: 0.7,
        text_size_factor: 1.5,
        color: "#551654",
        symbol: "<tspan dy=\"-0.2em\" font-size=\"70%\">7</tspan>",
    },
    CatalogEntry {
        binary: 0b100010010001,
        name: "major 7",
        weight: 8,
        emblem_size: 0.6,
        text_size_factor: 1.0,
        color: "#9149aa",
        symbol: "M<tspan dy=\"-0.5em\" font-size=\"70%\">7</tspan>",
    },
    CatalogEntry {
        binary: 0b010010001001,
        name: "minor 7",
        weight: 9,
        emblem_size: 0.6,
        text_size_factor: 1.0,
        color: "#9a6b2b",
        symbol: "<tspan class=\"italic\">m</tspan><tspan dy=\"-0.5em\" font-size=\"70%\">7</tspan>",
    },
    CatalogEntry {
        binary: 0b100010001001,
        name: "minor-major 7",
        weight: 10,
        emblem_size: 0.6,
        text_size_factor: 0.85,
        color: "#85800c",
        symbol: "<tspan class=\"italic\">m</tspan><tspan dy=\"-0.5em\" font-size=\"70%\">M7</tspan>",
    },
    CatalogEntry {
        binary: 0b001010001001,
        name: "minor 6",
        weight: 11,
        emblem_size: 0.6,
        text_size_factor: 1.15,
        color: "#9a225c",
        symbol: "<tspan class=\"italic\">m</tspan><tspan dy=\"-0.5em\" font-size=\"70%\">6</tspan>",
    },
    CatalogEntry {
        binary: 0b010100010001,
        name: "augmented 7",
        weight: 12,
        emblem_size: 0.6,
        text_size_factor: 1.2,
        color: "#8d786a",
        symbol: "<tspan class=\"bold\">+</tspan><tspan dy=\"-0.5em\" font-size=\"70%\">7</tspan>",
    },
    CatalogEntry {
        binary: 0b100100010001,
        name: "augmented major 7",
        weight: 13,
        emblem_size: 0.6,
        text_size_factor: 1.0,
        color: "#748d64",
        symbol: "<tspan class=\"bold\">+</tspan><tspan dy=\"-0.5em\" font-size=\"70%\">M7</tspan>",
    },
    CatalogEntry {
        binary: 0b001001001001,
        name: "diminished 7",
        weight: 14,
        emblem_size: 0.5,
        text_size_factor: 1.5,
        color: "#5f4f46",
        symbol: "<tspan dy=\"-0.3em\" font-size=\"70%\">o7</tspan>",
    },
];

/// The scale catalog, in matching priority order. One entry per rotation
/// class: modes (dorian, minor pentatonic, ...) identify as rotations of
/// the entry they descend from.
pub const SCALES: &[CatalogEntry] = &[
    CatalogEntry {
        binary: 0b101010110101,
        name: "major",
        weight: 1,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#3d8f2f",
        symbol: "maj",
    },
    CatalogEntry {
        binary: 0b101010101101,
        name: "melodic minor",
        weight: 2,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#2f6d8f",
        symbol: "mel",
    },
    CatalogEntry {
        binary: 0b100110101101,
        name: "harmonic minor",
        weight: 3,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#4f3d8f",
        symbol: "hmin",
    },
    CatalogEntry {
        binary: 0b100110110101,
        name: "harmonic major",
        weight: 4,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#8f3d7a",
        symbol: "hmaj",
    },
    CatalogEntry {
        binary: 0b100110110011,
        name: "double harmonic",
        weight: 5,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#8f2f2f",
        symbol: "dhar",
    },
    CatalogEntry {
        binary: 0b101010101011,
        name: "neapolitan major",
        weight: 6,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#2f8f7a",
        symbol: "nmaj",
    },
    CatalogEntry {
        binary: 0b100110101011,
        name: "neapolitan minor",
        weight: 7,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#46628f",
        symbol: "nmin",
    },
    CatalogEntry {
        binary: 0b011011011001,
        name: "hungarian major",
        weight: 8,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#8f6d2f",
        symbol: "hung",
    },
    CatalogEntry {
        binary: 0b001010010101,
        name: "major pentatonic",
        weight: 9,
        emblem_size: 1.0,
        text_size_factor: 0.85,
        color: "#5a8f2f",
        symbol: "pent",
    },
    CatalogEntry {
        binary: 0b010011101001,
        name: "blues",
        weight: 10,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#2f4f8f",
        symbol: "blu",
    },
    CatalogEntry {
        binary: 0b010101010101,
        name: "whole tone",
        weight: 11,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#6d6d6d",
        symbol: "whl",
    },
    CatalogEntry {
        binary: 0b100110011001,
        name: "augmented",
        weight: 12,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#8f7a3d",
        symbol: "aug",
    },
    CatalogEntry {
        binary: 0b101101101101,
        name: "diminished",
        weight: 13,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#6d3d2f",
        symbol: "dim",
    },
    CatalogEntry {
        binary: 0b111111111111,
        name: "chromatic",
        weight: 14,
        emblem_size: 1.0,
        text_size_factor: 0.9,
        color: "#3d3d3d",
        symbol: "chr",
    },
];

/// Look up a chord catalog entry by name.
pub fn chord_named(name: &str) -> Option<&'static CatalogEntry> {
    CHORDS.iter().find(|entry| entry.name == name)
}

/// Look up a scale catalog entry by name.
pub fn scale_named(name: &str) -> Option<&'static CatalogEntry> {
    SCALES.iter().find(|entry| entry.name == name)
}
