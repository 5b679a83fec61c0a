use complex::{SimplicialComplex, MAX_CELL_DIMENSION};
use tracing::debug;

use crate::error::FiltrationError;
use crate::stream::{FilteredStream, FinalizedStream};

/// Projects a [`SimplicialComplex`] onto a filtered stream.
///
/// Stateless, like the SSTable writer it is modelled on: everything happens
/// in [`build`](StreamBuilder::build).
pub struct StreamBuilder {}

impl StreamBuilder {
    /// Builds and finalizes the stream for `cpx`.
    ///
    /// # Errors
    ///
    /// See [`fill`](StreamBuilder::fill).
    pub fn build(cpx: &SimplicialComplex) -> Result<FinalizedStream, FiltrationError> {
        Ok(Self::fill(cpx)?.finalize())
    }

    /// Adds every cell of `cpx` to a new open stream, in dimension order and
    /// then cell order.
    ///
    /// The `i`-th cell of dimension `d` gets the value at offset
    /// `n0 + .. + n(d-1) + i` of the complex's filtration array.
    ///
    /// # Errors
    ///
    /// - [`FiltrationError::Complex`] wrapping
    ///   [`ComplexError::OutOfRangeIndex`](complex::ComplexError::OutOfRangeIndex)
    ///   if any incidence index names a non-existent vertex. Checked before
    ///   anything is added.
    /// - Any insertion error of [`FilteredStream::add`] (repeated vertex in a
    ///   cell, duplicate cell, NaN value).
    pub fn fill(cpx: &SimplicialComplex) -> Result<FilteredStream, FiltrationError> {
        cpx.validate_indices()?;

        let mut stream = FilteredStream::with_capacity(cpx.num_cells());

        for (v, &value) in cpx.values(0).iter().enumerate() {
            stream.add_vertex(v as u32, value)?;
        }

        for dim in 1..=MAX_CELL_DIMENSION {
            let cells = cpx.incidence(dim).chunks_exact(dim + 1);
            for (verts, &value) in cells.zip(cpx.values(dim)) {
                // indices were validated as 0 <= v < n0 above
                stream.add_element(verts.iter().map(|&v| v as u32), value)?;
            }
        }

        debug!(entries = stream.len(), "filled filtered stream");
        Ok(stream)
    }
}
