use anyhow::{Context, Result};
use persistence::{BarcodeCollection, Interval};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Homology dimensions written to a diagram: 0, 1 and 2.
pub const DIAGRAM_DIMENSIONS: usize = 3;

/// Serializes a [`BarcodeCollection`] in the text diagram format.
///
/// Intervals of dimension 3 and above are never written.
pub struct PairWriter {}

impl PairWriter {
    /// Writes `barcodes` to `path`, truncating any existing content.
    ///
    /// Returns the number of lines written. The file is closed on every exit
    /// path; a failure part-way may leave a truncated prefix behind.
    pub fn write_file(path: &Path, barcodes: &BarcodeCollection) -> Result<usize> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut w = BufWriter::new(file);

        let written = Self::write_to(&mut w, barcodes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        w.flush()
            .with_context(|| format!("failed to flush {}", path.display()))?;
        Ok(written)
    }

    /// Streams the diagram into `w`; returns the number of lines written.
    pub fn write_to<W: Write>(w: &mut W, barcodes: &BarcodeCollection) -> std::io::Result<usize> {
        let mut written = 0;
        for dim in 0..DIAGRAM_DIMENSIONS {
            for interval in barcodes.intervals_at(dim) {
                writeln!(w, "{}", format_pair(dim, interval))?;
                written += 1;
            }
        }
        Ok(written)
    }
}

/// Formats one line (without the newline).
fn format_pair(dim: usize, interval: &Interval) -> String {
    if interval.is_essential() {
        format!("{} {:?} inf", dim, interval.birth)
    } else {
        format!("{} {:?} {:?}", dim, interval.birth, interval.death)
    }
}
