//! Fixed-width text rendering of query results.
//!
//! Columns: depth (m), density, pvel, svel, qkappa, qshear, pvel2, svel2,
//! eta, then the layer name(s).

use std::fmt;

use crate::barycentric::Weights;
use crate::interpolate::{InterpolatedLayer, PointSample};
use crate::model::LayerProperties;
use crate::tessellation::NearestNodes;

struct Columns<'a>(&'a LayerProperties);

impl fmt::Display for Columns<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(
            f,
            "{:7.0}. {:8.2} {:8.2} {:8.2} {:7.2} {:7.2} {:8.2} {:8.2} {:7.5}",
            p.depth, p.density, p.pvel, p.svel, p.qkappa, p.qshear, p.pvel2, p.svel2, p.eta
        )
    }
}

impl fmt::Display for InterpolatedLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Columns(&self.properties), self.name)
    }
}

impl fmt::Display for PointSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            Columns(&self.properties),
            self.upper,
            self.lower
        )
    }
}

/// Nearest nodes and weights, as printed by `lithoquery nodes`.
pub struct NodeReport<'a> {
    pub nearest: &'a NearestNodes,
    pub weights: &'a Weights,
}

impl fmt::Display for NodeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10} {:>10} {:>11} {:>7} {:>10}", "DIST_KM", "LAT", "LON", "NODE", "WEIGHT")?;
        for (n, lambda) in self.nearest.nodes().iter().zip(self.weights.lambda) {
            writeln!(
                f,
                "{:10.3} {:10.4} {:11.4} {:>7} {:10.6}",
                n.distance_km, n.node.position.lat, n.node.position.lon, n.node.id.get(), lambda
            )?;
        }
        Ok(())
    }
}
