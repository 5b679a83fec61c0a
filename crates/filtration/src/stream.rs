use std::collections::HashMap;

use complex::CELL_DIMENSIONS;
use tracing::debug;

use crate::error::FiltrationError;
use crate::simplex::Simplex;

/// A simplex together with the filtration value at which it enters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredEntry {
    pub simplex: Simplex,
    pub value: f64,
}

/// An open stream that still accepts entries.
///
/// Entries are kept in insertion order. Each vertex set may be added once.
/// Faces are not required to be present while the stream is open; closure is
/// a precondition of the persistence algorithm and is checked by
/// [`FinalizedStream::check_face_closure`].
#[derive(Debug, Default)]
pub struct FilteredStream {
    entries: Vec<FilteredEntry>,
    /// Simplex -> position in `entries`.
    index: HashMap<Simplex, usize>,
}

impl FilteredStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds `simplex` entering at `value`.
    ///
    /// # Errors
    ///
    /// [`FiltrationError::NanValue`] for a NaN value and
    /// [`FiltrationError::DuplicateSimplex`] if the simplex is already present.
    pub fn add(&mut self, simplex: Simplex, value: f64) -> Result<(), FiltrationError> {
        if value.is_nan() {
            return Err(FiltrationError::NanValue {
                vertices: simplex.vertices().to_vec(),
            });
        }
        if self.index.contains_key(&simplex) {
            return Err(FiltrationError::DuplicateSimplex {
                vertices: simplex.vertices().to_vec(),
            });
        }
        self.index.insert(simplex.clone(), self.entries.len());
        self.entries.push(FilteredEntry { simplex, value });
        Ok(())
    }

    /// Adds the vertex `{v}`.
    pub fn add_vertex(&mut self, v: u32, value: f64) -> Result<(), FiltrationError> {
        self.add(Simplex::vertex(v), value)
    }

    /// Adds the simplex spanned by `vertices` (any order).
    pub fn add_element<I: IntoIterator<Item = u32>>(
        &mut self,
        vertices: I,
        value: f64,
    ) -> Result<(), FiltrationError> {
        self.add(Simplex::new(vertices)?, value)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[FilteredEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freezes the stream and orders it for consumption.
    ///
    /// Entries are sorted by value, then by dimension, with a stable sort:
    /// entries that tie on both keep their insertion order. A face entering
    /// at the same value as its coface therefore always comes first.
    pub fn finalize(self) -> FinalizedStream {
        let mut entries = self.entries;
        entries.sort_by(|a, b| {
            a.value
                .total_cmp(&b.value)
                .then(a.simplex.dimension().cmp(&b.simplex.dimension()))
        });

        let index: HashMap<Simplex, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.simplex.clone(), i))
            .collect();

        let stream = FinalizedStream { entries, index };
        debug!(
            entries = stream.len(),
            by_dimension = ?stream.count_by_dimension(),
            "finalized filtered stream"
        );
        stream
    }
}

/// A frozen stream, ordered by non-decreasing filtration value.
///
/// Has no mutating API; it is handed by reference to a persistence algorithm.
#[derive(Debug)]
pub struct FinalizedStream {
    entries: Vec<FilteredEntry>,
    /// Simplex -> filtration position.
    index: HashMap<Simplex, usize>,
}

impl FinalizedStream {
    /// Entries in filtration order.
    #[must_use]
    pub fn entries(&self) -> &[FilteredEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilteredEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&FilteredEntry> {
        self.entries.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filtration position of `simplex`, if present.
    #[must_use]
    pub fn position(&self, simplex: &Simplex) -> Option<usize> {
        self.index.get(simplex).copied()
    }

    /// Filtration value of `simplex`, if present.
    #[must_use]
    pub fn value_of(&self, simplex: &Simplex) -> Option<f64> {
        self.position(simplex).map(|i| self.entries[i].value)
    }

    /// Highest simplex dimension in the stream.
    #[must_use]
    pub fn max_dimension(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.simplex.dimension()).max()
    }

    /// Number of entries per dimension 0..=3.
    #[must_use]
    pub fn count_by_dimension(&self) -> [usize; CELL_DIMENSIONS] {
        let mut counts = [0usize; CELL_DIMENSIONS];
        for e in &self.entries {
            counts[e.simplex.dimension()] += 1;
        }
        counts
    }

    /// Positions of the facets of the entry at `position`, ascending.
    ///
    /// # Errors
    ///
    /// [`FiltrationError::MissingFace`] if a facet is not in the stream.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn boundary(&self, position: usize) -> Result<Vec<usize>, FiltrationError> {
        let simplex = &self.entries[position].simplex;
        let mut rows = Vec::with_capacity(simplex.dimension() + 1);
        for face in simplex.facets() {
            match self.position(&face) {
                Some(row) => rows.push(row),
                None => {
                    return Err(FiltrationError::MissingFace {
                        simplex: simplex.vertices().to_vec(),
                        face: face.vertices().to_vec(),
                    })
                }
            }
        }
        rows.sort_unstable();
        Ok(rows)
    }

    /// Checks that every facet of every entry is present and enters no later
    /// than the entry itself.
    ///
    /// # Errors
    ///
    /// The first [`FiltrationError::MissingFace`] or
    /// [`FiltrationError::FaceAfterCoface`] found, in filtration order.
    pub fn check_face_closure(&self) -> Result<(), FiltrationError> {
        for entry in &self.entries {
            for face in entry.simplex.facets() {
                let face_value = self.value_of(&face).ok_or_else(|| FiltrationError::MissingFace {
                    simplex: entry.simplex.vertices().to_vec(),
                    face: face.vertices().to_vec(),
                })?;
                if face_value > entry.value {
                    return Err(FiltrationError::FaceAfterCoface {
                        simplex: entry.simplex.vertices().to_vec(),
                        face: face.vertices().to_vec(),
                        face_value,
                        value: entry.value,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FinalizedStream {
    type Item = &'a FilteredEntry;
    type IntoIter = std::slice::Iter<'a, FilteredEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
