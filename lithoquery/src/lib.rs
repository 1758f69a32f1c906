//! lithoquery - point and profile queries against the LITHO1.0 earth model
//!
//! The model is an icosahedral tessellation of the globe. Each node owns a
//! vertical stack of named geologic layers. A query locates the three nodes
//! nearest a latitude/longitude, weights them barycentrically and blends
//! their layer stacks into one profile, optionally sampled at a depth.
//!
//! # High-Level API
//!
//! For most use cases, the [`query`] module provides a simplified facade:
//!
//! ```no_run
//! use lithoquery::query::{Query, QueryEngine, QueryOutcome};
//! use lithoquery::source::DirectoryModelSource;
//!
//! let engine = QueryEngine::new(DirectoryModelSource::new("/data/LITHO1.0"));
//! let query = Query::point(45.0, -120.0, 30.0)?;
//! if let QueryOutcome::Point(samples) = engine.run(&query)? {
//!     for sample in samples {
//!         println!("{}", sample);
//!     }
//! }
//! # Ok::<(), lithoquery::query::QueryError>(())
//! ```

pub mod barycentric;
pub mod config;
pub mod coord;
pub mod interpolate;
pub mod logging;
pub mod model;
pub mod query;
pub mod report;
pub mod source;
pub mod tessellation;

/// Version of the lithoquery library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
