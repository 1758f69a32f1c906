//! Per-node layer stacks.
//!
//! Each tessellation node owns a `node<N>.model` file describing its
//! vertical column. Layers are named from a fixed vocabulary
//! ([`CanonicalLayers`]) so stacks of different nodes can be aligned.

mod canonical;
mod layer;
mod parser;

pub use canonical::{CanonicalLayers, CANONICAL_LAYER_COUNT, INNERMOST_LAYER, SHALLOW_LAYER_COUNT};
pub use layer::{EarthLayer, LayerProperties, NodeModel, MAX_LAYERS};
pub use parser::{parse_node_model, ModelParseError};
