//! # Filtration - filtered simplex streams
//!
//! Turns a [`complex::SimplicialComplex`] into the input a persistence
//! algorithm consumes: every cell as a [`Simplex`] (a sorted vertex set) paired
//! with its filtration value, ordered by that value.
//!
//! A stream has two states:
//!
//! ```text
//!   FilteredStream ──finalize()──> FinalizedStream
//!   (open: add / add_vertex)        (frozen: sorted by (value, dim), read-only)
//! ```
//!
//! [`StreamBuilder`] walks a complex in dimension order (vertices, edges,
//! triangles, tetrahedra) and produces the finalized stream in one call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use complex::ComplexParser;
//! use filtration::StreamBuilder;
//!
//! let cpx = ComplexParser::new().parse_file("fuel.tsc").unwrap();
//! let stream = StreamBuilder::build(&cpx).unwrap();
//! for entry in stream.iter() {
//!     println!("{:?} @ {}", entry.simplex.vertices(), entry.value);
//! }
//! ```

mod builder;
mod error;
mod simplex;
mod stream;

pub use builder::StreamBuilder;
pub use error::FiltrationError;
pub use simplex::Simplex;
pub use stream::{FilteredEntry, FilteredStream, FinalizedStream};
