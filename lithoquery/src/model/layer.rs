//! Layer record types.

use std::ops::{Add, Mul, Sub};

/// Maximum layers a single node model may declare.
pub const MAX_LAYERS: usize = 250;

/// The nine numeric fields of a layer, in file column order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerProperties {
    /// Depth in metres
    pub depth: f64,
    /// Density (kg/m³)
    pub density: f64,
    /// P-wave velocity, vertical (m/s)
    pub pvel: f64,
    /// S-wave velocity, vertical (m/s)
    pub svel: f64,
    /// Bulk attenuation
    pub qkappa: f64,
    /// Shear attenuation
    pub qshear: f64,
    /// P-wave velocity, horizontal (m/s)
    pub pvel2: f64,
    /// S-wave velocity, horizontal (m/s)
    pub svel2: f64,
    /// Anisotropy parameter
    pub eta: f64,
}

impl LayerProperties {
    /// Build from the nine file columns.
    pub fn from_columns(c: [f64; 9]) -> Self {
        Self {
            depth: c[0],
            density: c[1],
            pvel: c[2],
            svel: c[3],
            qkappa: c[4],
            qshear: c[5],
            pvel2: c[6],
            svel2: c[7],
            eta: c[8],
        }
    }

    /// Apply `f` to every field except depth, which is copied from `self`.
    pub fn map_values(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            depth: self.depth,
            density: f(self.density),
            pvel: f(self.pvel),
            svel: f(self.svel),
            qkappa: f(self.qkappa),
            qshear: f(self.qshear),
            pvel2: f(self.pvel2),
            svel2: f(self.svel2),
            eta: f(self.eta),
        }
    }

    /// Linear interpolation of every field, `t = 0` at `self`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Add for LayerProperties {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            depth: self.depth + rhs.depth,
            density: self.density + rhs.density,
            pvel: self.pvel + rhs.pvel,
            svel: self.svel + rhs.svel,
            qkappa: self.qkappa + rhs.qkappa,
            qshear: self.qshear + rhs.qshear,
            pvel2: self.pvel2 + rhs.pvel2,
            svel2: self.svel2 + rhs.svel2,
            eta: self.eta + rhs.eta,
        }
    }
}

impl Sub for LayerProperties {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + rhs * -1.0
    }
}

impl Mul<f64> for LayerProperties {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self {
            depth: self.depth * k,
            ..self.map_values(|v| v * k)
        }
    }
}

/// One named layer of a node's column.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthLayer {
    pub properties: LayerProperties,
    /// Layer type name, e.g. `IC0`, `M12`, `CRUST1-TOP`
    pub name: String,
}

/// A node's full layer stack in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeModel {
    pub layers: Vec<EarthLayer>,
}

impl NodeModel {
    pub fn new(layers: Vec<EarthLayer>) -> Self {
        Self { layers }
    }

    /// The last layer carrying `name`, if any.
    ///
    /// Later entries win when a name repeats.
    pub fn find_last(&self, name: &str) -> Option<&EarthLayer> {
        self.layers.iter().rev().find(|layer| layer.name == name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
