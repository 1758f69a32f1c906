//! Canonical alignment and weighted averaging of node stacks.

use std::fmt;

use thiserror::Error;

use crate::barycentric::Weights;
use crate::model::{CanonicalLayers, LayerProperties, NodeModel, INNERMOST_LAYER};
use crate::tessellation::NodeId;

/// One layer of the blended stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedLayer {
    /// Position in the canonical table
    pub index: usize,
    pub name: &'static str,
    pub properties: LayerProperties,
}

/// One or more nearest nodes lack the innermost layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing {} layer in model of node(s) {}", INNERMOST_LAYER, NodeList(.missing))]
pub struct CorruptModel {
    pub missing: Vec<NodeId>,
}

struct NodeList<'a>(&'a [NodeId]);

impl fmt::Display for NodeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Blend three node stacks into one, layer by canonical layer.
///
/// For each canonical name the last matching layer of every node is taken.
/// Non-depth fields are averaged over the nodes that have the layer, with
/// weights renormalized by their sum. Depth is the plain weighted sum of
/// each node's most recent depth, including nodes that lack the layer, so
/// it is not renormalized. Layers whose participating weights do not sum
/// to a positive value are absent at the query point and skipped.
pub fn align_layers(
    stacks: &[(NodeId, NodeModel); 3],
    weights: &Weights,
) -> Result<Vec<InterpolatedLayer>, CorruptModel> {
    let lambda = weights.lambda;
    let mut last_depth = [0.0_f64; 3];
    let mut blended = Vec::new();

    for (index, &name) in CanonicalLayers::names().iter().enumerate() {
        let found: [Option<LayerProperties>; 3] =
            std::array::from_fn(|i| stacks[i].1.find_last(name).map(|l| l.properties));

        if name == INNERMOST_LAYER {
            let missing: Vec<NodeId> = stacks
                .iter()
                .zip(&found)
                .filter(|(_, f)| f.is_none())
                .map(|((id, _), _)| *id)
                .collect();
            if !missing.is_empty() {
                tracing::error!(nodes = ?missing, "Node model missing {} layer", INNERMOST_LAYER);
                return Err(CorruptModel { missing });
            }
        }

        for (depth, props) in last_depth.iter_mut().zip(&found) {
            if let Some(p) = props {
                *depth = p.depth;
            }
        }

        let sum: f64 = found
            .iter()
            .zip(lambda)
            .filter(|(f, _)| f.is_some())
            .map(|(_, l)| l)
            .sum();
        if sum <= 0.0 || sum.is_nan() {
            continue;
        }

        let contributors: Vec<(LayerProperties, f64)> = found
            .iter()
            .zip(lambda)
            .filter_map(|(f, l)| f.map(|p| (p, l)))
            .collect();

        let values = match contributors.as_slice() {
            [(only, _)] => *only,
            _ => contributors
                .iter()
                .map(|(p, l)| *p * *l)
                .fold(LayerProperties::default(), |acc, p| acc + p)
                .map_values(|v| v / sum),
        };

        let depth = lambda[0] * last_depth[0] + lambda[1] * last_depth[1] + lambda[2] * last_depth[2];

        blended.push(InterpolatedLayer {
            index,
            name,
            properties: LayerProperties { depth, ..values },
        });
    }

    tracing::debug!(layers = blended.len(), "Aligned node stacks");
    Ok(blended)
}
