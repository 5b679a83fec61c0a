use std::io;

use thiserror::Error;

/// Errors raised while decoding or validating a simplicial complex.
#[derive(Debug, Error)]
pub enum ComplexError {
    /// An underlying I/O error other than running out of input.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a well-formed `TTKSimplicialComplex` file.
    #[error("format error: {0}")]
    Format(String),

    /// Fewer bytes were available than the field being read requires.
    #[error(
        "truncated input: {field} needs {needed} bytes at offset {offset}, only {available} available"
    )]
    Truncated {
        field: &'static str,
        offset: u64,
        needed: u64,
        available: u64,
    },

    /// An incidence array references a vertex outside `[0, vertex_count)`.
    #[error("{dim}-cell {cell} references vertex {vertex}, outside [0, {vertex_count})")]
    OutOfRangeIndex {
        dim: usize,
        cell: usize,
        vertex: i64,
        vertex_count: usize,
    },

    /// A diagnostic header field disagrees with what the cell counts imply.
    #[error("header field {field} declares {declared} but the complex implies {derived}")]
    HeaderMismatch {
        field: &'static str,
        declared: i64,
        derived: i64,
    },
}

impl ComplexError {
    /// Returns `true` for [`ComplexError::Truncated`].
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, ComplexError::Truncated { .. })
    }
}
