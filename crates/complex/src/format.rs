//! `TTKSimplicialComplex` binary format constants and header helpers.
//!
//! ## Header (44 bytes)
//!
//! ```text
//! [magic: 20 B "TTKSimplicialComplex"][total_cells: i32 LE][global_dim: i32 LE]
//! [n0: i32 LE][n1: i32 LE][n2: i32 LE][n3: i32 LE]
//! ```
//!
//! The filtration section starts right after the header, at [`HEADER_BYTES`].

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Result as IoResult, Write};

use crate::model::Header;

/// Literal tag every file starts with (no terminator, no padding).
pub const MAGIC: &[u8; MAGIC_BYTES] = b"TTKSimplicialComplex";

/// Length of [`MAGIC`] in bytes.
pub const MAGIC_BYTES: usize = 20;

/// Highest cell dimension the format can describe (tetrahedra).
pub const MAX_CELL_DIMENSION: usize = 3;

/// Number of distinct cell dimensions (vertices, edges, triangles, tetrahedra).
pub const CELL_DIMENSIONS: usize = MAX_CELL_DIMENSION + 1;

/// Size of the fixed header: magic + total_cells + global_dim + 4 counts.
pub const HEADER_BYTES: u64 = MAGIC_BYTES as u64 + 4 + 4 + 4 * CELL_DIMENSIONS as u64;

/// Size in bytes of one filtration value.
pub(crate) const VALUE_BYTES: usize = 8;

/// Size in bytes of one vertex index.
pub(crate) const INDEX_BYTES: usize = 4;

/// Number of vertex indices stored per cell of dimension `dim`.
#[inline]
pub(crate) const fn vertices_per_cell(dim: usize) -> usize {
    dim + 1
}

/// Writes the 44-byte header to `w`.
pub(crate) fn write_header<W: Write>(
    w: &mut W,
    header: &Header,
    counts: &[i32; CELL_DIMENSIONS],
) -> IoResult<()> {
    w.write_all(MAGIC)?;
    w.write_i32::<LittleEndian>(header.total_cells)?;
    w.write_i32::<LittleEndian>(header.global_dimension)?;
    for &count in counts {
        w.write_i32::<LittleEndian>(count)?;
    }
    Ok(())
}

/// Total encoded size of a file with the given per-dimension counts.
#[must_use]
pub(crate) fn encoded_len(counts: &[usize; CELL_DIMENSIONS]) -> u64 {
    let values: u64 = counts.iter().map(|&n| n as u64).sum();
    let indices: u64 = (1..CELL_DIMENSIONS)
        .map(|d| (counts[d] * vertices_per_cell(d)) as u64)
        .sum();
    HEADER_BYTES + values * VALUE_BYTES as u64 + 4 + indices * INDEX_BYTES as u64
}
