//! Planar barycentric weights on latitude/longitude degrees.
//!
//! The triangle formed by the three nearest nodes is treated as flat in
//! (lat, lon) space. This is an approximation that degrades near the poles
//! and across the antimeridian.

use thiserror::Error;

use crate::coord::GeoPoint;

/// The three node positions do not span a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Nearest nodes are collinear in lat/lon space (determinant {determinant})")]
pub struct DegenerateTriangle {
    pub determinant: f64,
}

/// Interpolation weights for the three nearest nodes.
///
/// `lambda[0] + lambda[1] + lambda[2] == 1` by construction. A weight is
/// negative when the query point lies outside the triangle; such weights are
/// used as-is for extrapolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub lambda: [f64; 3],
}

impl Weights {
    /// Solve for the weights of `point` relative to `vertices`.
    pub fn solve(vertices: &[GeoPoint; 3], point: &GeoPoint) -> Result<Self, DegenerateTriangle> {
        let [p1, p2, p3] = vertices;

        let determinant = (p2.lon - p3.lon) * (p1.lat - p3.lat) + (p3.lat - p2.lat) * (p1.lon - p3.lon);
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(DegenerateTriangle { determinant });
        }

        let l1 = ((p2.lon - p3.lon) * (point.lat - p3.lat) + (p3.lat - p2.lat) * (point.lon - p3.lon))
            / determinant;
        let l2 = ((p3.lon - p1.lon) * (point.lat - p3.lat) + (p1.lat - p3.lat) * (point.lon - p3.lon))
            / determinant;

        Ok(Self {
            lambda: [l1, l2, 1.0 - l1 - l2],
        })
    }

    /// Whether every weight lies in `[0, 1]`.
    pub fn is_inside(&self) -> bool {
        self.lambda.iter().all(|l| (0.0..=1.0).contains(l))
    }

    pub fn sum(&self) -> f64 {
        self.lambda.iter().sum()
    }
}
