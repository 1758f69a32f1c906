//! Subdivision level and candidate counts.

use thiserror::Error;

/// Level used when none is requested.
pub const DEFAULT_LEVEL: u8 = 7;

/// Coarsest subdivision (the bare icosahedron).
pub const MIN_LEVEL: u8 = 1;

/// Finest subdivision present in the registry.
pub const MAX_LEVEL: u8 = 7;

/// Nodes of the bare icosahedron.
const ICOSAHEDRON_VERTICES: usize = 12;

/// Requested subdivision level is outside the registry's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid subdivision level: {0} (must be between {min} and {max})", min = MIN_LEVEL, max = MAX_LEVEL)]
pub struct InvalidLevel(pub u8);

/// Validated icosahedral subdivision level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubdivisionLevel(u8);

impl SubdivisionLevel {
    pub fn new(level: u8) -> Result<Self, InvalidLevel> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of leading registry rows that belong to this level.
    ///
    /// Each refinement quadruples the faces, so `n(1) = 12` and
    /// `n(k) = 4 * n(k - 1) - 6`.
    pub fn candidate_count(self) -> usize {
        (MIN_LEVEL + 1..=self.0).fold(ICOSAHEDRON_VERTICES, |n, _| 4 * n - 6)
    }
}

impl Default for SubdivisionLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}
