use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ComplexError;
use crate::format::{vertices_per_cell, CELL_DIMENSIONS, MAGIC, MAGIC_BYTES};
use crate::model::{Header, SimplicialComplex};
use crate::reader::BinaryReader;

/// Decodes one `TTKSimplicialComplex` file into a [`SimplicialComplex`].
///
/// Fields are read strictly in file order and each read consumes exactly the
/// bytes of its field. Decoding stops at the first failure; no partially
/// decoded complex is ever returned.
///
/// Vertex indices are **not** range-checked here; that is done by
/// [`SimplicialComplex::validate_indices`] before a stream is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexParser {
    /// Fail on header fields that disagree with the cell counts instead of
    /// only logging them.
    strict: bool,
}

impl ComplexParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict header checking.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Opens `path` and decodes it.
    ///
    /// The file handle lives only for the duration of this call and is
    /// closed on every exit path.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse); opening the file may also fail with
    /// [`ComplexError::Io`].
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<SimplicialComplex, ComplexError> {
        let file = File::open(path.as_ref())?;
        self.parse(BufReader::new(file))
    }

    /// Decodes a complex from `source`.
    ///
    /// # Errors
    ///
    /// - [`ComplexError::Format`] if the magic tag is wrong (detected after
    ///   reading exactly 20 bytes) or a per-dimension count is negative.
    /// - [`ComplexError::Truncated`] if the input ends inside any field.
    /// - [`ComplexError::HeaderMismatch`] in strict mode when a diagnostic
    ///   header field disagrees with the cell counts.
    pub fn parse<R: Read>(&self, source: R) -> Result<SimplicialComplex, ComplexError> {
        let mut r = BinaryReader::new(source);

        let magic: [u8; MAGIC_BYTES] = r.read_tag("magic")?;
        if &magic != MAGIC {
            return Err(ComplexError::Format(format!(
                "bad magic: expected {:?}, found {:?}",
                String::from_utf8_lossy(MAGIC),
                String::from_utf8_lossy(&magic)
            )));
        }

        let total_cells = r.read_i32("total_cells")?;
        let global_dimension = r.read_i32("global_dimension")?;

        let mut cell_counts = [0usize; CELL_DIMENSIONS];
        for (dim, count) in cell_counts.iter_mut().enumerate() {
            let raw = r.read_i32("cell_count")?;
            *count = usize::try_from(raw).map_err(|_| {
                ComplexError::Format(format!("negative cell count {} for dimension {}", raw, dim))
            })?;
        }
        debug!(
            total_cells,
            global_dimension,
            ?cell_counts,
            "read complex header"
        );

        let num_values: usize = cell_counts.iter().sum();
        let filtration = r.read_f64_array("filtration_values", num_values)?;

        let boundary_entries = r.read_i32("boundary_entries")?;

        let edges = r.read_i32_array("edges", cell_counts[1] * vertices_per_cell(1))?;
        let triangles = r.read_i32_array("triangles", cell_counts[2] * vertices_per_cell(2))?;
        let tetras = r.read_i32_array("tetras", cell_counts[3] * vertices_per_cell(3))?;
        debug!(bytes = r.position(), "decoded complex body");

        let header = Header {
            total_cells,
            global_dimension,
            boundary_entries,
        };
        let cpx = SimplicialComplex::from_parts(header, cell_counts, filtration, edges, triangles, tetras);

        let mismatches = cpx.check_header();
        if self.strict {
            if let Some(first) = mismatches.into_iter().next() {
                return Err(first);
            }
        } else {
            for m in &mismatches {
                warn!("{}", m);
            }
        }

        Ok(cpx)
    }
}
