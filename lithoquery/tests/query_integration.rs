//! Integration tests for end-to-end model queries.
//!
//! Each test writes a small synthetic model (registry plus node files) to a
//! temporary directory and queries it through `DirectoryModelSource`.

use std::fs;
use std::path::Path;

use lithoquery::coord::GeoPoint;
use lithoquery::model::{CanonicalLayers, SHALLOW_LAYER_COUNT};
use lithoquery::query::{Query, QueryEngine, QueryError, QueryOutcome};
use lithoquery::source::{DirectoryModelSource, DEFAULT_REGISTRY_FILE};
use lithoquery::tessellation::{NodeId, SubdivisionLevel};
use tempfile::TempDir;

/// Registry rows: node 1 (0,0), node 2 (10,0), node 3 (0,10), plus two far nodes.
const REGISTRY: &str = "\
0.0 0.0 0.0
10.0 10.0 0.0
0.0 0.0 10.0
60.0 60.0 60.0
-50.0 -50.0 120.0
";

/// One layer record.
#[derive(Clone)]
struct Row {
    depth: f64,
    density: f64,
    name: String,
}

fn row(depth: f64, density: f64, name: &str) -> Row {
    Row {
        depth,
        density,
        name: name.to_string(),
    }
}

/// Builds a model directory on disk.
struct ModelBuilder {
    dir: TempDir,
}

impl ModelBuilder {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join(DEFAULT_REGISTRY_FILE), REGISTRY).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `node<N>.model` with the given rows.
    fn node(self, node: u32, rows: &[Row]) -> Self {
        let mut text = format!("node{} LITHO1.0 {}\n", node, rows.len());
        for r in rows {
            text.push_str(&format!(
                "{:.1} {:.3} 8100.0 4600.0 {} 600.0 8200.0 4700.0 1.0 {}\n",
                r.depth,
                r.density,
                57822.5 + node as f64,
                r.name
            ));
        }
        fs::write(self.path().join(format!("node{}.model", node)), text).unwrap();
        self
    }

    fn engine(&self) -> QueryEngine<DirectoryModelSource> {
        QueryEngine::new(DirectoryModelSource::new(self.path()))
    }
}

fn basic_stack() -> Vec<Row> {
    vec![
        row(6371000.0, 13088.5, "IC0"),
        row(50000.0, 4.0, "LID-BOTTOM"),
        row(10000.0, 3.0, "LID-TOP"),
    ]
}

/// Every canonical layer, depth decreasing outward.
fn full_stack() -> Vec<Row> {
    CanonicalLayers::names()
        .iter()
        .enumerate()
        .map(|(i, name)| row(6371000.0 - i as f64 * 38000.0, 13000.0 - i as f64, name))
        .collect()
}

fn model_with_basic_nodes() -> ModelBuilder {
    ModelBuilder::new()
        .node(1, &basic_stack())
        .node(2, &basic_stack())
        .node(3, &basic_stack())
}

fn profile(outcome: QueryOutcome) -> Vec<lithoquery::interpolate::InterpolatedLayer> {
    match outcome {
        QueryOutcome::Profile(layers) => layers,
        QueryOutcome::Point(_) => panic!("expected profile outcome"),
    }
}

#[test]
fn test_weights_inside_triangle_sum_to_one() {
    let model = model_with_basic_nodes();
    let engine = model.engine();

    for (lat, lon) in [(2.0, 3.0), (1.0, 1.0), (4.0, 4.5), (0.5, 8.0)] {
        let hood = engine
            .locate(&GeoPoint::new(lat, lon), SubdivisionLevel::default())
            .unwrap();
        let sum: f64 = hood.weights.lambda.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "weights at ({}, {}) sum to {}", lat, lon, sum);
        for lambda in hood.weights.lambda {
            assert!((0.0..=1.0).contains(&lambda), "lambda {} out of range", lambda);
        }
    }
}

#[test]
fn test_query_on_node_reproduces_node_values() {
    let own = vec![
        row(6371000.0, 13088.5, "IC0"),
        row(35000.0, 2900.0, "CRUST1-BOTTOM"),
        row(0.0, 1020.0, "WATER-TOP"),
    ];
    let model = ModelBuilder::new()
        .node(1, &own)
        .node(2, &basic_stack())
        .node(3, &basic_stack());
    let engine = model.engine();

    let hood = engine
        .locate(&GeoPoint::new(0.0, 0.0), SubdivisionLevel::default())
        .unwrap();
    let nearest = hood.nearest.nodes()[0];
    assert_eq!(nearest.node.id, NodeId(1));
    assert_eq!(nearest.distance_km, 0.0);
    assert_eq!(hood.weights.lambda, [1.0, 0.0, 0.0]);

    let layers = profile(engine.run(&Query::profile(0.0, 0.0).unwrap()).unwrap());
    let names: Vec<_> = layers.iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["IC0", "CRUST1-BOTTOM", "WATER-TOP"]);

    for (layer, expected) in layers.iter().zip(&own) {
        assert_eq!(layer.properties.depth, expected.depth);
        assert_eq!(layer.properties.density, expected.density);
        assert_eq!(layer.properties.qkappa, 57823.5);
    }
}

#[test]
fn test_nearest_selection_is_deterministic() {
    let model = model_with_basic_nodes();
    let engine = model.engine();
    let point = GeoPoint::new(3.3, 2.2);

    let first = engine.locate(&point, SubdivisionLevel::default()).unwrap();
    for _ in 0..5 {
        let again = engine.locate(&point, SubdivisionLevel::default()).unwrap();
        assert_eq!(again, first);
    }

    let ids: Vec<_> = first.nearest.nodes().iter().map(|n| n.node.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_layer_present_in_one_node_is_copied_exactly() {
    let mut with_ice = basic_stack();
    with_ice.push(row(0.0, 917.25, "ICE-TOP"));

    let model = ModelBuilder::new()
        .node(1, &basic_stack())
        .node(2, &with_ice)
        .node(3, &basic_stack());
    let engine = model.engine();

    let layers = profile(engine.run(&Query::profile(2.0, 3.0).unwrap()).unwrap());
    let ice = layers
        .iter()
        .find(|l| l.name == "ICE-TOP")
        .expect("ICE-TOP should be present");
    assert_eq!(ice.properties.density, 917.25);
    assert_eq!(ice.properties.qkappa, 57824.5);
}

#[test]
fn test_missing_ic0_names_the_node() {
    let model = ModelBuilder::new()
        .node(1, &basic_stack())
        .node(2, &basic_stack())
        .node(3, &basic_stack()[1..]);
    let engine = model.engine();

    let err = engine.run(&Query::profile(2.0, 3.0).unwrap()).unwrap_err();
    match &err {
        QueryError::CorruptModel(corrupt) => assert_eq!(corrupt.missing, vec![NodeId(3)]),
        other => panic!("Expected CorruptModel, got {:?}", other),
    }
    assert!(err.to_string().contains("IC0"));
    assert!(err.to_string().contains('3'));
}

#[test]
fn test_point_query_interpolates_between_brackets() {
    let model = model_with_basic_nodes();
    let engine = model.engine();

    let outcome = engine.run(&Query::point(2.0, 3.0, 30.0).unwrap()).unwrap();
    let QueryOutcome::Point(samples) = outcome else {
        panic!("expected point outcome");
    };
    assert_eq!(samples.len(), 1);
    let sample = samples[0];
    assert!((sample.properties.density - 3.5).abs() < 1e-9);
    assert_eq!(sample.properties.depth, 30000.0);
    assert_eq!(sample.upper, "LID-BOTTOM");
    assert_eq!(sample.lower, "LID-TOP");
}

#[test]
fn test_point_query_outside_column_is_empty() {
    let model = model_with_basic_nodes();
    let engine = model.engine();

    let outcome = engine.run(&Query::point(2.0, 3.0, 5.0).unwrap()).unwrap();
    assert_eq!(outcome, QueryOutcome::Point(Vec::new()));
}

#[test]
fn test_shallow_filter_limits_rows() {
    let model = ModelBuilder::new()
        .node(1, &full_stack())
        .node(2, &full_stack())
        .node(3, &full_stack());
    let engine = model.engine();

    let full = profile(engine.run(&Query::profile(2.0, 3.0).unwrap()).unwrap());
    assert_eq!(full.len(), CanonicalLayers::names().len());

    let shallow = profile(
        engine
            .run(&Query::profile(2.0, 3.0).unwrap().shallow(true))
            .unwrap(),
    );
    assert_eq!(shallow.len(), SHALLOW_LAYER_COUNT);
    assert_eq!(shallow[0].name, "LID-BOTTOM");
    assert_eq!(shallow[SHALLOW_LAYER_COUNT - 1].name, "WATER-TOP");
}

#[test]
fn test_missing_node_file_is_source_unavailable() {
    let model = ModelBuilder::new().node(1, &basic_stack()).node(2, &basic_stack());
    let engine = model.engine();

    let err = engine.run(&Query::profile(2.0, 3.0).unwrap()).unwrap_err();
    match err {
        QueryError::SourceUnavailable(e) => assert!(e.location.ends_with("node3.model")),
        other => panic!("Expected SourceUnavailable, got {:?}", other),
    }
}

#[test]
fn test_missing_registry_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let engine = QueryEngine::new(DirectoryModelSource::new(dir.path()));

    let err = engine.run(&Query::profile(0.0, 0.0).unwrap()).unwrap_err();
    assert!(matches!(err, QueryError::SourceUnavailable(_)));
}

#[test]
fn test_lower_level_restricts_candidates() {
    // Level 1 admits the first 12 registry rows, all five here
    let model = model_with_basic_nodes();
    let engine = model.engine();
    let query = Query::profile(2.0, 3.0).unwrap().with_level(1).unwrap();
    assert!(engine.run(&query).is_ok());
}
