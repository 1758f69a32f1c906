//! End-to-end query execution.
//!
//! [`QueryEngine`] runs the full pipeline for one query against a
//! [`ModelSource`]:
//!
//! 1. read the registry candidates for the subdivision level
//! 2. pick the three nearest nodes
//! 3. solve barycentric weights
//! 4. load the three node models
//! 5. align and blend the layer stacks
//! 6. emit a profile or a point sample
//!
//! Every stage runs to completion before the next starts; any failure
//! aborts the query.
//!
//! # Example
//!
//! ```
//! use lithoquery::query::{Query, QueryEngine, QueryOutcome};
//! use lithoquery::source::MemoryModelSource;
//!
//! let layer = |d: f64| format!("{} 13000 11000 3600 1300 85 11000 3600 1 IC0\n", d);
//! let source = MemoryModelSource::new()
//!     .with_registry("0 0 0\n10 10 0\n0 0 10\n")
//!     .with_node(1, format!("node1 x 1\n{}", layer(6371000.0)))
//!     .with_node(2, format!("node2 x 1\n{}", layer(6371000.0)))
//!     .with_node(3, format!("node3 x 1\n{}", layer(6371000.0)));
//!
//! let engine = QueryEngine::new(source);
//! let query = Query::profile(2.0, 3.0).unwrap();
//! match engine.run(&query).unwrap() {
//!     QueryOutcome::Profile(layers) => assert_eq!(layers[0].name, "IC0"),
//!     QueryOutcome::Point(_) => unreachable!(),
//! }
//! ```

mod error;

pub use error::QueryError;

use crate::barycentric::Weights;
use crate::coord::{CoordError, GeoPoint};
use crate::interpolate::{
    align_layers, sample_at_depth, InterpolatedLayer, PointSample, ProfileFilter,
};
use crate::model::{parse_node_model, NodeModel};
use crate::source::ModelSource;
use crate::tessellation::{
    locate_nearest, read_candidates, NearestNodes, NodeId, SubdivisionLevel,
};

/// What a query returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryMode {
    /// Blended layer stack at the location
    Profile(ProfileFilter),
    /// Single sample at a depth in kilometres
    Point { depth_km: f64 },
}

/// One validated query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub point: GeoPoint,
    pub level: SubdivisionLevel,
    pub mode: QueryMode,
}

impl Query {
    /// Full profile query at the default level.
    pub fn profile(lat: f64, lon: f64) -> Result<Self, QueryError> {
        Ok(Self {
            point: GeoPoint::validated(lat, lon)?,
            level: SubdivisionLevel::default(),
            mode: QueryMode::Profile(ProfileFilter::Full),
        })
    }

    /// Point query at `depth_km` at the default level.
    pub fn point(lat: f64, lon: f64, depth_km: f64) -> Result<Self, QueryError> {
        if !depth_km.is_finite() {
            return Err(CoordError::InvalidDepth(depth_km).into());
        }
        Ok(Self {
            point: GeoPoint::validated(lat, lon)?,
            level: SubdivisionLevel::default(),
            mode: QueryMode::Point { depth_km },
        })
    }

    pub fn with_level(mut self, level: u8) -> Result<Self, QueryError> {
        self.level = SubdivisionLevel::new(level)?;
        Ok(self)
    }

    /// Restrict a profile query to the shallow window. No effect in point mode.
    pub fn shallow(mut self, shallow: bool) -> Self {
        if let QueryMode::Profile(_) = self.mode {
            self.mode = QueryMode::Profile(ProfileFilter::from_shallow_flag(shallow));
        }
        self
    }
}

/// Result of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Profile(Vec<InterpolatedLayer>),
    /// Empty when the depth is not bracketed by any pair of layers
    Point(Vec<PointSample>),
}

/// Nearest nodes and their weights for a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbourhood {
    pub nearest: NearestNodes,
    pub weights: Weights,
}

/// Runs queries against a model source.
pub struct QueryEngine<S: ModelSource> {
    source: S,
}

impl<S: ModelSource> QueryEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Find the three nearest nodes and their interpolation weights.
    pub fn locate(
        &self,
        point: &GeoPoint,
        level: SubdivisionLevel,
    ) -> Result<Neighbourhood, QueryError> {
        let registry = self.source.open_registry()?;
        let candidates = read_candidates(registry, level)?;
        let nearest = locate_nearest(point, candidates, level)?;
        let weights = Weights::solve(&nearest.positions(), point)?;

        for n in nearest.nodes() {
            tracing::debug!(
                node = n.node.id.get(),
                lat = n.node.position.lat,
                lon = n.node.position.lon,
                distance_km = n.distance_km,
                "Nearest node"
            );
        }
        tracing::debug!(lambda = ?weights.lambda, "Barycentric weights");

        Ok(Neighbourhood { nearest, weights })
    }

    /// Load the layer stacks of the three nearest nodes.
    fn load_stacks(
        &self,
        nearest: &NearestNodes,
    ) -> Result<[(NodeId, NodeModel); 3], QueryError> {
        let [a, b, c] = nearest.nodes().map(|n| n.node.id);
        Ok([
            (a, self.load_model(a)?),
            (b, self.load_model(b)?),
            (c, self.load_model(c)?),
        ])
    }

    fn load_model(&self, node: NodeId) -> Result<NodeModel, QueryError> {
        let reader = self.source.open_node(node)?;
        let model =
            parse_node_model(reader).map_err(|source| QueryError::ModelParse { node, source })?;
        tracing::debug!(node = node.get(), layers = model.len(), "Loaded node model");
        Ok(model)
    }

    /// Blended stack at a location, before profile filtering or depth sampling.
    pub fn blend(
        &self,
        point: &GeoPoint,
        level: SubdivisionLevel,
    ) -> Result<Vec<InterpolatedLayer>, QueryError> {
        let Neighbourhood { nearest, weights } = self.locate(point, level)?;
        let stacks = self.load_stacks(&nearest)?;
        Ok(align_layers(&stacks, &weights)?)
    }

    /// Run a query end to end.
    pub fn run(&self, query: &Query) -> Result<QueryOutcome, QueryError> {
        tracing::info!(
            lat = query.point.lat,
            lon = query.point.lon,
            level = query.level.get(),
            mode = ?query.mode,
            "Running model query"
        );

        let layers = self.blend(&query.point, query.level)?;
        let outcome = match query.mode {
            QueryMode::Profile(filter) => QueryOutcome::Profile(filter.apply(layers)),
            QueryMode::Point { depth_km } => {
                let samples = sample_at_depth(&layers, depth_km);
                if samples.is_empty() {
                    tracing::warn!(depth_km, "Requested depth is outside the model column");
                }
                QueryOutcome::Point(samples)
            }
        };
        Ok(outcome)
    }
}
