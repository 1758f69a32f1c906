//! Profile mode output selection.

use crate::model::CanonicalLayers;

use super::aligner::InterpolatedLayer;

/// Which part of the blended stack a profile query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileFilter {
    /// Every layer present at the query point
    #[default]
    Full,
    /// Only layers within the trailing shallow window of the canonical table
    /// (lithosphere, crust, sediments, ice, water)
    Shallow,
}

impl ProfileFilter {
    pub fn from_shallow_flag(shallow: bool) -> Self {
        if shallow {
            Self::Shallow
        } else {
            Self::Full
        }
    }

    pub fn includes(self, layer: &InterpolatedLayer) -> bool {
        match self {
            Self::Full => true,
            Self::Shallow => CanonicalLayers::is_shallow(layer.index),
        }
    }

    /// Keep the layers this filter selects, preserving order.
    pub fn apply(self, layers: Vec<InterpolatedLayer>) -> Vec<InterpolatedLayer> {
        layers.into_iter().filter(|l| self.includes(l)).collect()
    }
}
