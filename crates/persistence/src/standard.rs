//! Standard persistence algorithm.
//!
//! 1. Column `j` of the boundary matrix holds the filtration positions of the
//!    facets of entry `j`.
//! 2. Columns are reduced left to right: while the lowest row of column `j`
//!    is already the pivot of an earlier column, add that column (Z/2).
//! 3. A reduced column `j` with pivot `i` pairs `i` (birth) with `j` (death).
//!    Zero columns that never become a pivot are essential classes.
//!
//! Reference: Edelsbrunner, Letscher, Zomorodian (2002), "Topological
//! Persistence and Simplification".

use filtration::FinalizedStream;
use tracing::debug;

use crate::barcode::{BarcodeCollection, Interval};
use crate::error::PersistenceError;
use crate::PersistenceAlgorithm;

/// Largest accepted dimension bound: simplices go up to dimension 3, so
/// homology is reported for dimensions 0, 1 and 2 at most.
const MAX_DIMENSION_BOUND: usize = 3;

/// Boundary-matrix reduction over Z/2 without optimizations.
#[derive(Debug, Clone, Copy)]
pub struct StandardReduction {
    /// Intervals are reported for homology dimensions `< max_dimension`;
    /// simplices above `max_dimension` are ignored.
    max_dimension: usize,
    /// Report pairs whose birth and death values coincide.
    keep_zero_persistence: bool,
}

impl StandardReduction {
    /// Creates the algorithm for homology dimensions `0..max_dimension`.
    ///
    /// # Errors
    ///
    /// [`PersistenceError::InvalidDimensionBound`] unless `1 <= max_dimension <= 3`.
    pub fn new(max_dimension: usize) -> Result<Self, PersistenceError> {
        if max_dimension == 0 || max_dimension > MAX_DIMENSION_BOUND {
            return Err(PersistenceError::InvalidDimensionBound {
                bound: max_dimension,
            });
        }
        Ok(Self {
            max_dimension,
            keep_zero_persistence: false,
        })
    }

    /// Keeps or drops intervals with `birth == death` (dropped by default).
    #[must_use]
    pub fn keep_zero_persistence(mut self, keep: bool) -> Self {
        self.keep_zero_persistence = keep;
        self
    }
}

impl PersistenceAlgorithm for StandardReduction {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// # Errors
    ///
    /// [`PersistenceError::Filtration`] if the stream is not face-closed.
    fn compute_intervals(&self, stream: &FinalizedStream) -> Result<BarcodeCollection, PersistenceError> {
        stream.check_face_closure()?;

        let n = stream.len();
        let dim_of = |pos: usize| stream.entries()[pos].simplex.dimension();
        let value_of = |pos: usize| stream.entries()[pos].value;

        // Reduced columns (ascending row positions) and row -> pivot column.
        let mut columns: Vec<Vec<usize>> = Vec::with_capacity(n);
        let mut pivot_col: Vec<Option<usize>> = vec![None; n];
        let mut additions: u64 = 0;

        for j in 0..n {
            if dim_of(j) > self.max_dimension {
                columns.push(Vec::new());
                continue;
            }
            let mut col = stream.boundary(j)?;
            while let Some(&low) = col.last() {
                match pivot_col[low] {
                    Some(k) => {
                        col = add_columns(&col, &columns[k]);
                        additions += 1;
                    }
                    None => break,
                }
            }
            if let Some(&low) = col.last() {
                pivot_col[low] = Some(j);
            }
            columns.push(col);
        }

        let mut barcodes = BarcodeCollection::new();
        let mut paired = 0usize;

        for (j, col) in columns.iter().enumerate() {
            let Some(&birth_pos) = col.last() else {
                continue;
            };
            paired += 1;
            let (birth, death) = (value_of(birth_pos), value_of(j));
            if birth == death && !self.keep_zero_persistence {
                continue;
            }
            barcodes.push(dim_of(birth_pos), Interval::finite(birth, death));
        }

        let mut essential = 0usize;
        for (i, col) in columns.iter().enumerate() {
            let dim = dim_of(i);
            if dim < self.max_dimension && col.is_empty() && pivot_col[i].is_none() {
                essential += 1;
                barcodes.push(dim, Interval::essential(value_of(i)));
            }
        }

        debug!(
            algorithm = self.name(),
            columns = n,
            additions,
            pairs = paired,
            essential,
            reported = barcodes.len(),
            "reduced boundary matrix"
        );
        Ok(barcodes)
    }
}

/// Z/2 sum of two sorted columns (symmetric difference), kept sorted.
fn add_columns(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
