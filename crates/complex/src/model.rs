use crate::error::ComplexError;
use crate::format::{vertices_per_cell, CELL_DIMENSIONS, MAX_CELL_DIMENSION};

/// The three informational header fields of a `TTKSimplicialComplex` file.
///
/// None of them drive decoding; they are kept for diagnostics and for the
/// optional consistency check in [`SimplicialComplex::check_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Declared total number of cells.
    pub total_cells: i32,
    /// Declared dimension of the dataset the complex was extracted from.
    pub global_dimension: i32,
    /// Declared number of non-zero entries of the boundary matrix.
    pub boundary_entries: i32,
}

/// A filtered simplicial complex of dimension at most 3, stored flat.
///
/// Filtration values are laid out in canonical order: all vertices, then all
/// edges, triangles and tetrahedra. The `k`-th cell of dimension `d` has its
/// value at [`value_offset(d)`](Self::value_offset) `+ k`, and for `d > 0`
/// its vertices at `incidence(d)[(d + 1) * k .. (d + 1) * (k + 1)]`.
///
/// Values are immutable once constructed. Vertex indices are kept exactly as
/// decoded (`i32`); [`validate_indices`](Self::validate_indices) checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplicialComplex {
    header: Header,
    cell_counts: [usize; CELL_DIMENSIONS],
    filtration: Vec<f64>,
    edges: Vec<i32>,
    triangles: Vec<i32>,
    tetras: Vec<i32>,
}

impl SimplicialComplex {
    /// Builds a complex from its arrays, deriving a consistent header.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::Format`] if an array length disagrees with
    /// `cell_counts`.
    pub fn new(
        cell_counts: [usize; CELL_DIMENSIONS],
        filtration: Vec<f64>,
        edges: Vec<i32>,
        triangles: Vec<i32>,
        tetras: Vec<i32>,
    ) -> Result<Self, ComplexError> {
        let total: usize = cell_counts.iter().sum();
        if filtration.len() != total {
            return Err(ComplexError::Format(format!(
                "expected {} filtration values, got {}",
                total,
                filtration.len()
            )));
        }
        for (dim, arr) in [(1, &edges), (2, &triangles), (3, &tetras)] {
            let expected = cell_counts[dim] * vertices_per_cell(dim);
            if arr.len() != expected {
                return Err(ComplexError::Format(format!(
                    "expected {} vertex indices for {} {}-cells, got {}",
                    expected,
                    cell_counts[dim],
                    dim,
                    arr.len()
                )));
            }
        }

        let mut cpx = Self {
            header: Header::default(),
            cell_counts,
            filtration,
            edges,
            triangles,
            tetras,
        };
        cpx.header = cpx.derived_header();
        Ok(cpx)
    }

    /// Assembles a decoded complex. The parser guarantees the array lengths.
    pub(crate) fn from_parts(
        header: Header,
        cell_counts: [usize; CELL_DIMENSIONS],
        filtration: Vec<f64>,
        edges: Vec<i32>,
        triangles: Vec<i32>,
        tetras: Vec<i32>,
    ) -> Self {
        Self {
            header,
            cell_counts,
            filtration,
            edges,
            triangles,
            tetras,
        }
    }

    /// Replaces the informational header fields.
    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    /// Header fields as declared (decoded from the file, or derived by [`new`](Self::new)).
    #[must_use]
    pub fn header(&self) -> Header {
        self.header
    }

    /// Header fields implied by the cell counts.
    ///
    /// An empty complex reports a global dimension of 0.
    #[must_use]
    pub fn derived_header(&self) -> Header {
        Header {
            total_cells: clamp_i32(self.num_cells()),
            global_dimension: self.dimension().unwrap_or(0) as i32,
            boundary_entries: clamp_i32(self.boundary_entries()),
        }
    }

    #[must_use]
    pub fn cell_counts(&self) -> [usize; CELL_DIMENSIONS] {
        self.cell_counts
    }

    /// Number of cells of dimension `dim` (0 for `dim > 3`).
    #[must_use]
    pub fn cell_count(&self, dim: usize) -> usize {
        self.cell_counts.get(dim).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.cell_counts[0]
    }

    /// Total number of cells over all dimensions.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.filtration.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtration.is_empty()
    }

    /// Highest dimension with at least one cell, `None` for an empty complex.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        (0..CELL_DIMENSIONS).rev().find(|&d| self.cell_counts[d] > 0)
    }

    /// Number of facets over all cells: `2*n1 + 3*n2 + 4*n3`.
    #[must_use]
    pub fn boundary_entries(&self) -> usize {
        (1..CELL_DIMENSIONS)
            .map(|d| self.cell_counts[d] * vertices_per_cell(d))
            .sum()
    }

    /// Filtration values in canonical (dimension, index) order.
    #[must_use]
    pub fn filtration_values(&self) -> &[f64] {
        &self.filtration
    }

    /// Index of the first value of dimension `dim`: `sum(cell_counts[0..dim])`.
    #[must_use]
    pub fn value_offset(&self, dim: usize) -> usize {
        self.cell_counts[..dim.min(CELL_DIMENSIONS)].iter().sum()
    }

    /// Filtration values of the cells of dimension `dim`.
    #[must_use]
    pub fn values(&self, dim: usize) -> &[f64] {
        let start = self.value_offset(dim);
        &self.filtration[start..start + self.cell_count(dim)]
    }

    /// Flat vertex-incidence array for dimension `dim` (empty for vertices).
    #[must_use]
    pub fn incidence(&self, dim: usize) -> &[i32] {
        match dim {
            1 => &self.edges,
            2 => &self.triangles,
            3 => &self.tetras,
            _ => &[],
        }
    }

    /// Checks that every index in the incidence arrays names an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::OutOfRangeIndex`] for the first offending index,
    /// scanning edges, then triangles, then tetrahedra.
    pub fn validate_indices(&self) -> Result<(), ComplexError> {
        let vertex_count = self.num_vertices();
        for dim in 1..=MAX_CELL_DIMENSION {
            let width = vertices_per_cell(dim);
            for (cell, verts) in self.incidence(dim).chunks_exact(width).enumerate() {
                if let Some(&bad) = verts
                    .iter()
                    .find(|&&v| v < 0 || v as usize >= vertex_count)
                {
                    return Err(ComplexError::OutOfRangeIndex {
                        dim,
                        cell,
                        vertex: bad as i64,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Compares the declared header against [`derived_header`](Self::derived_header).
    ///
    /// Returns one [`ComplexError::HeaderMismatch`] per disagreeing field, in
    /// file order; an empty vector means the header is consistent.
    #[must_use]
    pub fn check_header(&self) -> Vec<ComplexError> {
        let declared = self.header;
        let derived = self.derived_header();
        let mut mismatches = Vec::new();

        let fields = [
            ("total_cells", declared.total_cells, derived.total_cells),
            ("global_dimension", declared.global_dimension, derived.global_dimension),
            ("boundary_entries", declared.boundary_entries, derived.boundary_entries),
        ];
        for (field, declared, derived) in fields {
            if declared != derived {
                mismatches.push(ComplexError::HeaderMismatch {
                    field,
                    declared: declared as i64,
                    derived: derived as i64,
                });
            }
        }
        mismatches
    }
}

fn clamp_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
