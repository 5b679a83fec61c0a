use anyhow::{Context, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::{rename, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::format::{write_header, CELL_DIMENSIONS};
use crate::model::SimplicialComplex;

/// Encodes a [`SimplicialComplex`] in the `TTKSimplicialComplex` format.
///
/// The header fields written are the complex's declared [`Header`](crate::Header),
/// so a complex decoded from a file is written back byte for byte.
pub struct ComplexWriter {}

impl ComplexWriter {
    /// Writes `cpx` to a new file at `path`.
    ///
    /// The bytes go to `<path>.tmp` first, which is fsynced and then renamed
    /// over `path`; a crash mid-write leaves the previous file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell count does not fit the format's `i32`
    /// fields or on any I/O failure.
    pub fn write_file(path: &Path, cpx: &SimplicialComplex) -> Result<()> {
        let tmp_path = path.with_extension("tsc.tmp");
        let raw_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .with_context(|| format!("failed to create {}", tmp_path.display()))?;
        let mut file = BufWriter::new(raw_file);

        if let Err(e) = Self::write_to(&mut file, cpx) {
            drop(file);
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("failed to encode {}", path.display()));
        }

        file.flush()?;
        file.into_inner()?.sync_all()?;
        rename(&tmp_path, path)
            .with_context(|| format!("failed to move {} into place", tmp_path.display()))?;
        Ok(())
    }

    /// Streams the encoded complex into `w`.
    pub fn write_to<W: Write>(w: &mut W, cpx: &SimplicialComplex) -> io::Result<()> {
        let mut counts = [0i32; CELL_DIMENSIONS];
        for (dim, count) in counts.iter_mut().enumerate() {
            *count = i32::try_from(cpx.cell_count(dim)).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} cells of dimension {} exceed the format limit", cpx.cell_count(dim), dim),
                )
            })?;
        }

        let header = cpx.header();
        write_header(w, &header, &counts)?;

        for &v in cpx.filtration_values() {
            w.write_f64::<LittleEndian>(v)?;
        }

        w.write_i32::<LittleEndian>(header.boundary_entries)?;

        for dim in 1..CELL_DIMENSIONS {
            for &v in cpx.incidence(dim) {
                w.write_i32::<LittleEndian>(v)?;
            }
        }
        Ok(())
    }

    /// Encodes `cpx` into an in-memory buffer.
    pub fn to_bytes(cpx: &SimplicialComplex) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(crate::format::encoded_len(&cpx.cell_counts()) as usize);
        Self::write_to(&mut buf, cpx)?;
        Ok(buf)
    }
}
