//! Tessellation node types

use std::fmt;

use crate::coord::GeoPoint;

/// 1-based index of a node in the tessellation registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the raw 1-based index.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vertex of the tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationNode {
    /// Registry index
    pub id: NodeId,
    /// Node position in degrees
    pub position: GeoPoint,
}

impl TessellationNode {
    pub fn new(id: u32, lat: f64, lon: f64) -> Self {
        Self {
            id: NodeId(id),
            position: GeoPoint::new(lat, lon),
        }
    }
}
