//! # Persistence - barcodes of filtered streams
//!
//! The [`PersistenceAlgorithm`] trait is the seam between stream construction
//! and barcode output: it takes a face-closed [`FinalizedStream`] and returns
//! a [`BarcodeCollection`]. [`StandardReduction`] is the bundled
//! implementation, a left-to-right column reduction of the boundary matrix
//! over Z/2.
//!
//! ## Example
//!
//! ```rust,no_run
//! use filtration::FilteredStream;
//! use persistence::{PersistenceAlgorithm, StandardReduction};
//!
//! let mut st = FilteredStream::new();
//! st.add_vertex(0, 0.0).unwrap();
//! st.add_vertex(1, 0.5).unwrap();
//! st.add_element([0, 1], 1.0).unwrap();
//!
//! let algo = StandardReduction::new(3).unwrap();
//! let barcodes = algo.compute_intervals(&st.finalize()).unwrap();
//! assert_eq!(barcodes.intervals_at(0).len(), 2);
//! ```

mod barcode;
mod error;
mod standard;

pub use barcode::{BarcodeCollection, Interval};
pub use error::PersistenceError;
pub use standard::StandardReduction;

use filtration::FinalizedStream;

/// Computes persistence intervals from a filtered stream.
///
/// Implementations may assume nothing beyond what [`FinalizedStream`]
/// guarantees (non-decreasing values); face closure must be checked, not
/// assumed.
pub trait PersistenceAlgorithm {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Exclusive upper bound on the homology dimensions reported.
    fn max_dimension(&self) -> usize;

    /// Computes the barcode of `stream`.
    fn compute_intervals(&self, stream: &FinalizedStream) -> Result<BarcodeCollection, PersistenceError>;
}
