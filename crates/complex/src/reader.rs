use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, Read};

use crate::error::ComplexError;
use crate::format::{INDEX_BYTES, VALUE_BYTES};

/// Arrays are pulled from the source at most this many bytes at a time, so a
/// header that declares a huge count on a short file fails with
/// [`ComplexError::Truncated`] instead of allocating the declared size up front.
const READ_CHUNK_BYTES: usize = 1024 * 1024;

/// Little-endian primitive decoder over any [`Read`] source.
///
/// The reader does no buffering of its own: every call consumes exactly the
/// bytes of the requested field, so the cursor of the wrapped source always
/// sits right after the last decoded field. Wrap files in a `BufReader`
/// before handing them over.
///
/// Every read either returns the full value or fails with
/// [`ComplexError::Truncated`]; short arrays are never returned.
pub struct BinaryReader<R: Read> {
    inner: R,
    /// Bytes consumed so far (used for error reporting).
    offset: u64,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Number of bytes consumed since construction.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads a fixed-size byte tag such as the file magic.
    pub fn read_tag<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], ComplexError> {
        let mut buf = [0u8; N];
        self.fill(field, &mut buf)?;
        Ok(buf)
    }

    /// Reads one little-endian `i32` (4 bytes).
    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, ComplexError> {
        let buf: [u8; 4] = self.read_tag(field)?;
        Ok(LittleEndian::read_i32(&buf))
    }

    /// Reads `count` little-endian IEEE-754 doubles (`8 * count` bytes).
    pub fn read_f64_array(&mut self, field: &'static str, count: usize) -> Result<Vec<f64>, ComplexError> {
        let bytes = self.read_array_bytes(field, count, VALUE_BYTES)?;
        let mut out = vec![0f64; count];
        LittleEndian::read_f64_into(&bytes, &mut out);
        Ok(out)
    }

    /// Reads `count` little-endian `i32` values (`4 * count` bytes).
    pub fn read_i32_array(&mut self, field: &'static str, count: usize) -> Result<Vec<i32>, ComplexError> {
        let bytes = self.read_array_bytes(field, count, INDEX_BYTES)?;
        let mut out = vec![0i32; count];
        LittleEndian::read_i32_into(&bytes, &mut out);
        Ok(out)
    }

    fn read_array_bytes(
        &mut self,
        field: &'static str,
        count: usize,
        width: usize,
    ) -> Result<Vec<u8>, ComplexError> {
        let needed = count.checked_mul(width).ok_or_else(|| {
            ComplexError::Format(format!("{} of {} elements overflows the address space", field, count))
        })?;

        let start = self.offset;
        let mut bytes = Vec::with_capacity(needed.min(READ_CHUNK_BYTES));
        while bytes.len() < needed {
            let chunk = (needed - bytes.len()).min(READ_CHUNK_BYTES);
            let got = (&mut self.inner).take(chunk as u64).read_to_end(&mut bytes)?;
            self.offset += got as u64;
            if got < chunk {
                return Err(ComplexError::Truncated {
                    field,
                    offset: start,
                    needed: needed as u64,
                    available: bytes.len() as u64,
                });
            }
        }
        Ok(bytes)
    }

    /// Fills `buf` completely or fails with `Truncated`.
    fn fill(&mut self, field: &'static str, buf: &mut [u8]) -> Result<(), ComplexError> {
        let start = self.offset;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(ComplexError::Truncated {
                        field,
                        offset: start,
                        needed: buf.len() as u64,
                        available: filled as u64,
                    })
                }
                Ok(n) => {
                    filled += n;
                    self.offset += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(ComplexError::Io(e)),
            }
        }
        Ok(())
    }
}
