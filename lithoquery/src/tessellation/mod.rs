//! Icosahedral tessellation of the model.
//!
//! The registry lists every node of the level-7 icosahedron in subdivision
//! order, so the first `n1(level)` rows are exactly the nodes of a coarser
//! level. This module reads those rows and picks the three nodes closest to
//! a query point.

mod level;
mod locator;
mod registry;
mod types;

pub use level::{InvalidLevel, SubdivisionLevel, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
pub use locator::{locate_nearest, NearestNodes, NearestTracker, NodeDistance, NEAREST_COUNT};
pub use registry::{read_candidates, RegistryError, RegistryReader};
pub use types::{NodeId, TessellationNode};
