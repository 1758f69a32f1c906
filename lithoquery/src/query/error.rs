//! Query error types.

use thiserror::Error;

use crate::barycentric::DegenerateTriangle;
use crate::coord::CoordError;
use crate::interpolate::CorruptModel;
use crate::model::ModelParseError;
use crate::source::SourceError;
use crate::tessellation::{InvalidLevel, NodeId, RegistryError};

/// Errors that abort a query. None of them yield a partial result.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A registry or node model file could not be opened
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),

    /// The registry is malformed or too small
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A node model file is malformed
    #[error("Invalid model for node {node}: {source}")]
    ModelParse {
        node: NodeId,
        #[source]
        source: ModelParseError,
    },

    /// A nearest node lacks the innermost layer
    #[error(transparent)]
    CorruptModel(#[from] CorruptModel),

    /// The nearest nodes do not form a triangle
    #[error(transparent)]
    DegenerateTriangle(#[from] DegenerateTriangle),

    #[error(transparent)]
    InvalidLevel(#[from] InvalidLevel),

    #[error(transparent)]
    Coord(#[from] CoordError),
}
