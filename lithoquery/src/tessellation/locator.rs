//! Nearest-node search over the tessellation.

use crate::coord::{haversine_km, GeoPoint};

use super::level::SubdivisionLevel;
use super::registry::RegistryError;
use super::types::TessellationNode;

/// Number of nodes used for interpolation.
pub const NEAREST_COUNT: usize = 3;

/// A node paired with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDistance {
    pub node: TessellationNode,
    pub distance_km: f64,
}

/// Bounded ascending top-3 by distance.
///
/// Insertion uses strict `<`, so among equal distances the node offered
/// first keeps the better slot.
#[derive(Debug, Clone, Default)]
pub struct NearestTracker {
    slots: [Option<NodeDistance>; NEAREST_COUNT],
}

impl NearestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate, shifting farther entries down when it displaces one.
    pub fn offer(&mut self, candidate: NodeDistance) {
        if !candidate.distance_km.is_finite() {
            return;
        }

        let Some(pos) = self.slots.iter().position(|slot| match slot {
            Some(held) => candidate.distance_km < held.distance_km,
            None => true,
        }) else {
            return;
        };

        for i in (pos + 1..NEAREST_COUNT).rev() {
            self.slots[i] = self.slots[i - 1];
        }
        self.slots[pos] = Some(candidate);
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    /// Returns the three nearest nodes, or `None` if fewer were offered.
    pub fn finish(self) -> Option<NearestNodes> {
        match self.slots {
            [Some(a), Some(b), Some(c)] => Some(NearestNodes { nodes: [a, b, c] }),
            _ => None,
        }
    }
}

/// The three nodes nearest a query point, ascending by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNodes {
    nodes: [NodeDistance; NEAREST_COUNT],
}

impl NearestNodes {
    pub fn nodes(&self) -> &[NodeDistance; NEAREST_COUNT] {
        &self.nodes
    }

    pub fn positions(&self) -> [GeoPoint; NEAREST_COUNT] {
        self.nodes.map(|n| n.node.position)
    }
}

/// Find the three candidates closest to `query` by great-circle distance.
///
/// Only nodes whose index lies within the level's candidate count are
/// considered.
pub fn locate_nearest<I>(
    query: &GeoPoint,
    nodes: I,
    level: SubdivisionLevel,
) -> Result<NearestNodes, RegistryError>
where
    I: IntoIterator<Item = TessellationNode>,
{
    let limit = level.candidate_count();
    let mut tracker = NearestTracker::new();

    for node in nodes {
        if node.id.get() as usize > limit {
            continue;
        }
        tracker.offer(NodeDistance {
            node,
            distance_km: haversine_km(query, &node.position),
        });
    }

    let found = tracker.len();
    tracker
        .finish()
        .ok_or(RegistryError::InsufficientNodes { found })
}
