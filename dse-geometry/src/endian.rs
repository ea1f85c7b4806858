//! Byte-order aware reading of geometry payloads.
//!
//! Stored values carry a one-byte marker saying which byte order the rest of
//! the value uses. The marker is inspected once; afterwards every read goes
//! through the extraction functions picked at construction time.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::fmt;
use std::io;

use crate::errors::GeometryResult;

/// Marker byte announcing a big-endian payload. Any other value means little-endian.
pub const BIG_ENDIAN_MARKER: u8 = 0x00;

type ReadU32 = fn(&mut &[u8]) -> io::Result<u32>;
type ReadF64 = fn(&mut &[u8]) -> io::Result<f64>;

fn read_u32_be(buf: &mut &[u8]) -> io::Result<u32> {
    buf.read_u32::<BigEndian>()
}

fn read_u32_le(buf: &mut &[u8]) -> io::Result<u32> {
    buf.read_u32::<LittleEndian>()
}

fn read_f64_be(buf: &mut &[u8]) -> io::Result<f64> {
    buf.read_f64::<BigEndian>()
}

fn read_f64_le(buf: &mut &[u8]) -> io::Result<f64> {
    buf.read_f64::<LittleEndian>()
}

/// A cursor over a byte buffer that reads 32-bit integers and doubles in a
/// byte order fixed at construction.
///
/// # Example
///
/// ```rust
/// use dse_geometry::EndianAwareReader;
///
/// let bytes = [0x01, 0x00, 0x00, 0x00];
/// let mut reader = EndianAwareReader::new(&bytes, true);
/// assert_eq!(reader.read_u32().unwrap(), 1);
/// ```
pub struct EndianAwareReader<'a> {
    buf: &'a [u8],
    little_endian: bool,
    read_u32: ReadU32,
    read_f64: ReadF64,
}

impl<'a> EndianAwareReader<'a> {
    /// Creates a reader over `buf` using the given byte order.
    pub fn new(buf: &'a [u8], little_endian: bool) -> Self {
        let (read_u32, read_f64): (ReadU32, ReadF64) = if little_endian {
            (read_u32_le, read_f64_le)
        } else {
            (read_u32_be, read_f64_be)
        };
        Self {
            buf,
            little_endian,
            read_u32,
            read_f64,
        }
    }

    /// Consumes the leading marker byte of `buf` and returns a reader over
    /// the remaining bytes in the announced byte order.
    ///
    /// # Errors
    /// Returns a decoding error if `buf` is empty.
    pub fn from_marker(buf: &'a [u8]) -> GeometryResult<Self> {
        let mut buf = buf;
        let marker = buf.read_u8()?;
        Ok(Self::new(buf, marker != BIG_ENDIAN_MARKER))
    }

    /// Whether this reader extracts little-endian values.
    pub fn is_little_endian(&self) -> bool {
        self.little_endian
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Reads an unsigned 32-bit integer and advances past it.
    pub fn read_u32(&mut self) -> GeometryResult<u32> {
        Ok((self.read_u32)(&mut self.buf)?)
    }

    /// Reads an IEEE-754 double and advances past it.
    pub fn read_f64(&mut self) -> GeometryResult<f64> {
        Ok((self.read_f64)(&mut self.buf)?)
    }
}

impl fmt::Debug for EndianAwareReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndianAwareReader")
            .field("little_endian", &self.little_endian)
            .field("remaining", &self.buf.len())
            .finish()
    }
}
