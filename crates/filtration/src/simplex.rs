use std::fmt;

use complex::MAX_CELL_DIMENSION;

use crate::error::FiltrationError;

/// An unoriented simplex: a non-empty set of distinct vertex indices,
/// stored in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Simplex {
    vertices: Vec<u32>,
}

impl Simplex {
    /// Builds a simplex from vertices given in any order.
    ///
    /// # Errors
    ///
    /// - [`FiltrationError::DegenerateSimplex`] if `vertices` is empty or
    ///   repeats a vertex.
    /// - [`FiltrationError::UnsupportedDimension`] above dimension 3.
    pub fn new<I: IntoIterator<Item = u32>>(vertices: I) -> Result<Self, FiltrationError> {
        let mut vertices: Vec<u32> = vertices.into_iter().collect();
        vertices.sort_unstable();

        let repeated = vertices.windows(2).any(|w| w[0] == w[1]);
        if vertices.is_empty() || repeated {
            return Err(FiltrationError::DegenerateSimplex { vertices });
        }
        let dim = vertices.len() - 1;
        if dim > MAX_CELL_DIMENSION {
            return Err(FiltrationError::UnsupportedDimension { vertices, dim });
        }
        Ok(Self { vertices })
    }

    /// The 0-simplex `{v}`.
    pub fn vertex(v: u32) -> Self {
        Self { vertices: vec![v] }
    }

    /// Vertices in ascending order.
    #[must_use]
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Number of vertices minus one.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The codimension-1 faces, each obtained by dropping one vertex.
    ///
    /// Faces are yielded dropping the last vertex first, so for `{a, b, c}`
    /// the order is `{a, b}`, `{a, c}`, `{b, c}`. A vertex has no facets.
    pub fn facets(&self) -> impl Iterator<Item = Simplex> + '_ {
        let n = if self.vertices.len() > 1 { self.vertices.len() } else { 0 };
        (0..n).rev().map(move |skip| Simplex {
            vertices: self
                .vertices
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &v)| v)
                .collect(),
        })
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
