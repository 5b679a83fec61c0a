//! # Complex - TTK simplicial complex files
//!
//! Decoding (and encoding) of the binary `TTKSimplicialComplex` format: a
//! fixed header followed by one filtration value per cell and the vertex
//! incidence of every edge, triangle and tetrahedron.
//!
//! ## File layout
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ HEADER (44 bytes)                                             │
//! │                                                               │
//! │ magic (20 B ASCII) "TTKSimplicialComplex"                     │
//! │ total_cells (i32) | global_dim (i32)                          │
//! │ n0 (i32) | n1 (i32) | n2 (i32) | n3 (i32)                     │
//! ├───────────────────────────────────────────────────────────────┤
//! │ FILTRATION SECTION                                            │
//! │                                                               │
//! │ value (f64) x (n0 + n1 + n2 + n3)                             │
//! │ all vertices, then all edges, triangles, tetrahedra           │
//! ├───────────────────────────────────────────────────────────────┤
//! │ INCIDENCE SECTION                                             │
//! │                                                               │
//! │ boundary_entries (i32)                                        │
//! │ edges (i32 x 2*n1) | triangles (i32 x 3*n2)                   │
//! │ tetras (i32 x 4*n3)                                           │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers and doubles are little-endian. `total_cells`, `global_dim`
//! and `boundary_entries` are informational: the section sizes are derived
//! from the four per-dimension counts only.
//!
//! ## Example
//!
//! ```rust,no_run
//! use complex::ComplexParser;
//!
//! let cpx = ComplexParser::new().parse_file("fuel.tsc").unwrap();
//! println!("{} cells, {} vertices", cpx.num_cells(), cpx.num_vertices());
//! ```

mod error;
mod format;
mod model;
mod parser;
mod reader;
mod writer;

pub use error::ComplexError;
pub use format::{CELL_DIMENSIONS, HEADER_BYTES, MAGIC, MAGIC_BYTES, MAX_CELL_DIMENSION};
pub use model::{Header, SimplicialComplex};
pub use parser::ComplexParser;
pub use reader::BinaryReader;
pub use writer::ComplexWriter;

#[cfg(test)]
mod tests;
