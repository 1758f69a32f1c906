//! Canonical layer ordering.
//!
//! Node models name their layers from a fixed vocabulary. The table below
//! orders that vocabulary from the centre of the Earth outwards and is the
//! key used to align the stacks of neighbouring nodes.

/// Total canonical layer names.
pub const CANONICAL_LAYER_COUNT: usize = 165;

/// Trailing canonical entries kept by the shallow-only profile filter.
pub const SHALLOW_LAYER_COUNT: usize = 18;

/// Innermost layer; every valid node model contains it.
pub const INNERMOST_LAYER: &str = "IC0";

#[rustfmt::skip]
static NAMES: [&str; CANONICAL_LAYER_COUNT] = [
    // Inner core
    "IC0", "IC1", "IC2", "IC3", "IC4", "IC5", "IC6", "IC7", "IC8", "IC9",
    "IC10", "IC11", "IC12", "IC13", "IC14", "IC15", "IC16", "IC17", "IC18", "IC19",
    "IC20", "IC21", "IC22", "IC23", "IC24",
    // Outer core
    "OC0", "OC1", "OC2", "OC3", "OC4", "OC5", "OC6", "OC7", "OC8", "OC9",
    "OC10", "OC11", "OC12", "OC13", "OC14", "OC15", "OC16", "OC17", "OC18", "OC19",
    "OC20", "OC21", "OC22", "OC23", "OC24", "OC25", "OC26", "OC27", "OC28", "OC29",
    "OC30", "OC31", "OC32", "OC33", "OC34", "OC35", "OC36", "OC37", "OC38", "OC39",
    "OC40", "OC41", "OC42", "OC43", "OC44", "OC45",
    // Mantle
    "M0", "M1", "M2", "M3", "M4", "M5", "M6", "M7", "M8", "M9",
    "M10", "M11", "M12", "M13", "M14", "M15", "M16", "M17", "M18", "M19",
    "M20", "M21", "M22", "M23", "M24", "M25", "M26", "M27", "M28", "M29",
    "M30", "M31", "M32", "M33", "M34", "M35", "M36", "M37", "M38", "M39",
    "M40", "M41", "M42", "M43", "M44", "M45", "M46", "M47", "M48", "M49",
    "M50", "M51", "M52", "M53", "M54", "M55", "M56", "M57", "M58", "M59",
    "M60", "M61", "M62", "M63", "M64", "M65", "M66", "M67", "M68", "M69",
    "M70", "M71",
    // Upper mantle, crust, sediments, ice and water boundaries
    "A-BOTTOM", "A-TOP",
    "ASTHENO-BOTTOM", "ASTHENO-TOP",
    "LID-BOTTOM", "LID-TOP",
    "CRUST3-BOTTOM", "CRUST3-TOP",
    "CRUST2-BOTTOM", "CRUST2-TOP",
    "CRUST1-BOTTOM", "CRUST1-TOP",
    "SEDS3-BOTTOM", "SEDS3-TOP",
    "SEDS2-BOTTOM", "SEDS2-TOP",
    "SEDS1-BOTTOM", "SEDS1-TOP",
    "ICE-BOTTOM", "ICE-TOP",
    "WATER-BOTTOM", "WATER-TOP",
];

/// Accessor for the canonical layer table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalLayers;

impl CanonicalLayers {
    /// All names, innermost first.
    pub fn names() -> &'static [&'static str] {
        &NAMES
    }

    /// Position of `name` in the table.
    pub fn index_of(name: &str) -> Option<usize> {
        NAMES.iter().position(|n| *n == name)
    }

    pub fn contains(name: &str) -> bool {
        Self::index_of(name).is_some()
    }

    /// First index included by the shallow-only profile filter.
    pub fn shallow_start() -> usize {
        CANONICAL_LAYER_COUNT - SHALLOW_LAYER_COUNT
    }

    /// Whether `index` falls in the shallow window.
    pub fn is_shallow(index: usize) -> bool {
        (Self::shallow_start()..CANONICAL_LAYER_COUNT).contains(&index)
    }
}
