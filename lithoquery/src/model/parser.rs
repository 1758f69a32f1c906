//! Parser for per-node model files.
//!
//! The first line is a header whose last token is the declared layer count,
//! e.g. `node1234 LITHO1.0 167`. Each following line is one layer:
//!
//! ```text
//! depth density pvel svel qkappa qshear pvel2 svel2 eta NAME
//! ```
//!
//! Lines past the declared count are ignored.

use std::io::BufRead;

use thiserror::Error;

use super::canonical::CanonicalLayers;
use super::layer::{EarthLayer, LayerProperties, NodeModel, MAX_LAYERS};

/// Numeric columns per layer record.
const NUMERIC_FIELDS: usize = 9;

/// Error type for node model parsing.
#[derive(Debug, Error)]
pub enum ModelParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model file is empty (missing header line)")]
    MissingHeader,

    #[error("Invalid header '{header}': last field must be the layer count")]
    InvalidHeader { header: String },

    #[error("Model declares {declared} layers, maximum is {max}", max = MAX_LAYERS)]
    TooManyLayers { declared: usize },

    #[error("Invalid layer record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("Model declares {declared} layers but only {found} were present")]
    Truncated { declared: usize, found: usize },
}

/// Parse one node's layer stack.
pub fn parse_node_model<R: BufRead>(reader: R) -> Result<NodeModel, ModelParseError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)));

    let declared = loop {
        match lines.next() {
            None => return Err(ModelParseError::MissingHeader),
            Some(line) => {
                let (_, header) = line?;
                if header.trim().is_empty() {
                    continue;
                }
                break parse_header(&header)?;
            }
        }
    };

    let mut layers = Vec::with_capacity(declared);
    while layers.len() < declared {
        let Some(line) = lines.next() else {
            return Err(ModelParseError::Truncated {
                declared,
                found: layers.len(),
            });
        };
        let (number, text) = line?;
        if text.trim().is_empty() {
            continue;
        }
        layers.push(parse_record(&text, number)?);
    }

    let unknown: Vec<&str> = layers
        .iter()
        .map(|l| l.name.as_str())
        .filter(|name| !CanonicalLayers::contains(name))
        .collect();
    if !unknown.is_empty() {
        tracing::warn!(
            count = unknown.len(),
            names = ?unknown,
            "Model contains layer names outside the canonical table; they will be ignored"
        );
    }

    Ok(NodeModel::new(layers))
}

fn parse_header(header: &str) -> Result<usize, ModelParseError> {
    let declared: usize = header
        .split_whitespace()
        .last()
        .and_then(|count| count.parse().ok())
        .ok_or_else(|| ModelParseError::InvalidHeader {
            header: header.trim().to_string(),
        })?;

    if declared > MAX_LAYERS {
        return Err(ModelParseError::TooManyLayers { declared });
    }
    Ok(declared)
}

fn parse_record(line: &str, number: usize) -> Result<EarthLayer, ModelParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < NUMERIC_FIELDS + 1 {
        return Err(ModelParseError::InvalidRecord {
            line: number,
            message: format!(
                "expected {} fields, found {}",
                NUMERIC_FIELDS + 1,
                fields.len()
            ),
        });
    }

    let mut columns = [0.0_f64; NUMERIC_FIELDS];
    for (column, field) in columns.iter_mut().zip(&fields) {
        *column = field.parse().map_err(|_| ModelParseError::InvalidRecord {
            line: number,
            message: format!("'{}' is not a number", field),
        })?;
    }

    Ok(EarthLayer {
        properties: LayerProperties::from_columns(columns),
        name: fields[NUMERIC_FIELDS].to_string(),
    })
}
