//! Reader for the tessellation node registry.
//!
//! The registry is a whitespace-delimited text file with one row per node:
//!
//! ```text
//! <latitude> <alternate latitude> <longitude>
//! ```
//!
//! All values are degrees. Row order defines the 1-based node index.
//! The alternate latitude is validated but otherwise unused.

use std::io::BufRead;

use thiserror::Error;

use super::level::SubdivisionLevel;
use super::types::TessellationNode;

/// Errors raised while reading the node registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error reading node registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid registry row at line {line}: {message}")]
    InvalidRow { line: usize, message: String },

    #[error("Node registry holds {found} eligible nodes, at least 3 are required")]
    InsufficientNodes { found: usize },
}

/// Streaming iterator over registry rows.
pub struct RegistryReader<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    next_index: u32,
}

impl<R: BufRead> RegistryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
            line_number: 0,
            next_index: 1,
        }
    }

    fn parse_row(&self, line: &str) -> Result<TessellationNode, RegistryError> {
        let fields: Vec<&str> = line.split_whitespace().take(3).collect();
        if fields.len() < 3 {
            return Err(RegistryError::InvalidRow {
                line: self.line_number,
                message: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        let mut values = [0.0_f64; 3];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.parse().map_err(|_| RegistryError::InvalidRow {
                line: self.line_number,
                message: format!("'{}' is not a number", field),
            })?;
        }

        let [lat, _alt_lat, lon] = values;
        Ok(TessellationNode::new(self.next_index, lat, lon))
    }
}

impl<R: BufRead> Iterator for RegistryReader<R> {
    type Item = Result<TessellationNode, RegistryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let node = self.parse_row(line);
                    if node.is_ok() {
                        self.next_index += 1;
                    }
                    return Some(node);
                }
                Err(e) => return Some(Err(RegistryError::Io(e))),
            }
        }
    }
}

/// Read the registry rows eligible at `level`.
///
/// Stops after `level.candidate_count()` nodes; rows past that belong to
/// finer subdivisions.
pub fn read_candidates<R: BufRead>(
    reader: R,
    level: SubdivisionLevel,
) -> Result<Vec<TessellationNode>, RegistryError> {
    let nodes = RegistryReader::new(reader)
        .take(level.candidate_count())
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        level = level.get(),
        candidates = nodes.len(),
        "Read tessellation registry"
    );
    Ok(nodes)
}
