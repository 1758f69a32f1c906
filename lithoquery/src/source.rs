//! Access to the model files.
//!
//! A LITHO1.0 distribution is a flat directory holding the tessellation
//! registry and one `node<N>.model` file per node. [`ModelSource`] abstracts
//! opening those files so queries can run against an in-memory model in
//! tests and embeddings.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::tessellation::NodeId;

/// Registry file name shipped with the level-7 model.
pub const DEFAULT_REGISTRY_FILE: &str = "Icosahedron_Level7_LatLon_mod.txt";

/// A model file could not be opened.
#[derive(Debug, Error)]
#[error("Could not open {location}: {source}")]
pub struct SourceError {
    /// Path or other identifier of the missing source
    pub location: String,
    #[source]
    pub source: std::io::Error,
}

/// Opens the registry and node model files.
pub trait ModelSource {
    /// Open the tessellation registry.
    fn open_registry(&self) -> Result<Box<dyn BufRead + '_>, SourceError>;

    /// Open the layer stack of `node`.
    fn open_node(&self, node: NodeId) -> Result<Box<dyn BufRead + '_>, SourceError>;
}

impl<S: ModelSource + ?Sized> ModelSource for &S {
    fn open_registry(&self) -> Result<Box<dyn BufRead + '_>, SourceError> {
        (**self).open_registry()
    }

    fn open_node(&self, node: NodeId) -> Result<Box<dyn BufRead + '_>, SourceError> {
        (**self).open_node(node)
    }
}

/// Model files laid out in a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryModelSource {
    root: PathBuf,
    registry_file: String,
}

impl DirectoryModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry_file: DEFAULT_REGISTRY_FILE.to_string(),
        }
    }

    /// Use a registry file name other than the level-7 default.
    pub fn with_registry_file(mut self, name: impl Into<String>) -> Self {
        self.registry_file = name.into();
        self
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join(&self.registry_file)
    }

    pub fn node_path(&self, node: NodeId) -> PathBuf {
        self.root.join(format!("node{}.model", node))
    }

    fn open(path: &Path) -> Result<Box<dyn BufRead>, SourceError> {
        tracing::debug!(path = %path.display(), "Opening model file");
        File::open(path)
            .map(|f| Box::new(BufReader::new(f)) as Box<dyn BufRead>)
            .map_err(|source| SourceError {
                location: path.display().to_string(),
                source,
            })
    }
}

impl ModelSource for DirectoryModelSource {
    fn open_registry(&self) -> Result<Box<dyn BufRead + '_>, SourceError> {
        Self::open(&self.registry_path())
    }

    fn open_node(&self, node: NodeId) -> Result<Box<dyn BufRead + '_>, SourceError> {
        Self::open(&self.node_path(node))
    }
}

/// Model held in memory as file text.
#[derive(Debug, Clone, Default)]
pub struct MemoryModelSource {
    registry: Option<String>,
    nodes: HashMap<NodeId, String>,
}

impl MemoryModelSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, text: impl Into<String>) -> Self {
        self.registry = Some(text.into());
        self
    }

    pub fn with_node(mut self, node: u32, text: impl Into<String>) -> Self {
        self.nodes.insert(NodeId(node), text.into());
        self
    }

    fn not_found(location: String) -> SourceError {
        SourceError {
            location,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not present in memory"),
        }
    }
}

impl ModelSource for MemoryModelSource {
    fn open_registry(&self) -> Result<Box<dyn BufRead + '_>, SourceError> {
        self.registry
            .as_deref()
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or_else(|| Self::not_found("memory:registry".to_string()))
    }

    fn open_node(&self, node: NodeId) -> Result<Box<dyn BufRead + '_>, SourceError> {
        self.nodes
            .get(&node)
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or_else(|| Self::not_found(format!("memory:node{}", node)))
    }
}
