//! Layer-stack interpolation.
//!
//! [`align_layers`] walks the canonical table and blends the three nearest
//! node models into one weighted stack. The result is then either filtered
//! into a profile ([`ProfileFilter`]) or sampled at a single depth
//! ([`sample_at_depth`]).

mod aligner;
mod point;
mod profile;

pub use aligner::{align_layers, CorruptModel, InterpolatedLayer};
pub use point::{sample_at_depth, PointSample};
pub use profile::ProfileFilter;
