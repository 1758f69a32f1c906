//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`nodes`] - Nearest tessellation nodes and weights for a location
//! - [`query`] - Profile and point queries against the model

pub mod common;
pub mod config;
pub mod nodes;
pub mod query;
