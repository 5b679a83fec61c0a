use std::collections::BTreeMap;

/// A persistence interval `[birth, death)`.
///
/// An essential interval never dies; its `death` is `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub birth: f64,
    pub death: f64,
}

impl Interval {
    pub fn finite(birth: f64, death: f64) -> Self {
        debug_assert!(birth <= death, "interval dies before it is born");
        Self { birth, death }
    }

    pub fn essential(birth: f64) -> Self {
        Self {
            birth,
            death: f64::INFINITY,
        }
    }

    /// `true` if the interval is right-infinite.
    #[must_use]
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }

    /// Lifetime `death - birth` (infinite for essential intervals).
    #[must_use]
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }
}

/// Intervals grouped by homology dimension.
///
/// Within a dimension, intervals keep the order in which they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarcodeCollection {
    by_dimension: BTreeMap<usize, Vec<Interval>>,
}

impl BarcodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dim: usize, interval: Interval) {
        self.by_dimension.entry(dim).or_default().push(interval);
    }

    /// Intervals of dimension `dim`, empty if none were recorded.
    #[must_use]
    pub fn intervals_at(&self, dim: usize) -> &[Interval] {
        self.by_dimension.get(&dim).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dimensions holding at least one interval, ascending.
    pub fn dimensions(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_dimension
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(&d, _)| d)
    }

    /// All `(dimension, interval)` pairs, by dimension then push order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Interval)> + '_ {
        self.by_dimension
            .iter()
            .flat_map(|(&d, v)| v.iter().map(move |i| (d, i)))
    }

    /// Total number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_dimension.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of essential intervals in dimension `dim` (the Betti number of
    /// the whole complex).
    #[must_use]
    pub fn essential_count(&self, dim: usize) -> usize {
        self.intervals_at(dim).iter().filter(|i| i.is_essential()).count()
    }
}
