//! The typed, endian-marked binary envelope shared by all geometry columns.
//!
//! ```text
//! +--------+-------------+----------------------+
//! | marker | type code   | payload              |
//! | 1 byte | 4 bytes     | type specific        |
//! +--------+-------------+----------------------+
//! ```
//!
//! The marker is `0x00` for big-endian and anything else for little-endian;
//! the type code and payload follow in that byte order. Values are always
//! written big-endian. Nested values (points of a line, rings of a polygon)
//! are written as bare payloads without a header of their own.

use byteorder::{BigEndian, WriteBytesExt};
use log::{trace, warn};
use std::io::{self, Write};

use crate::endian::{EndianAwareReader, BIG_ENDIAN_MARKER};
use crate::errors::{GeometryError, GeometryResult};

/// Type code of a point value.
pub const POINT_TYPE_CODE: u32 = 1;
/// Type code of a line-string value.
pub const LINE_STRING_TYPE_CODE: u32 = 2;
/// Type code of a polygon value.
pub const POLYGON_TYPE_CODE: u32 = 3;

/// Server-side marshal class backing point columns.
pub const POINT_CLASS_NAME: &str = "org.apache.cassandra.db.marshal.PointType";
/// Server-side marshal class backing line-string columns.
pub const LINE_STRING_CLASS_NAME: &str = "org.apache.cassandra.db.marshal.LineStringType";
/// Server-side marshal class backing polygon columns.
pub const POLYGON_CLASS_NAME: &str = "org.apache.cassandra.db.marshal.PolygonType";

/// Encoded size of one point payload.
pub(crate) const POINT_PAYLOAD_SIZE: usize = 16;
/// Encoded size of an element count.
pub(crate) const COUNT_SIZE: usize = 4;

/// A geometry stored in a custom-typed column.
///
/// Implementors only describe their bare payload; the envelope is applied by
/// [`encode`] and [`decode`] so that it appears exactly once per stored value.
pub trait CustomType: Sized {
    /// Type code written after the marker byte.
    const TYPE_CODE: u32;
    /// Fully qualified name of the server-side marshal class.
    const CLASS_NAME: &'static str;
    /// Short name used in error messages.
    const NAME: &'static str;

    /// Writes the headerless payload, always big-endian.
    fn write_payload<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Reads a headerless payload in the reader's byte order.
    fn read_payload(reader: &mut EndianAwareReader<'_>) -> GeometryResult<Self>;
}

/// Writes the big-endian marker and the given type code.
pub(crate) fn write_header<W: Write>(out: &mut W, type_code: u32) -> io::Result<()> {
    out.write_u8(BIG_ENDIAN_MARKER)?;
    out.write_u32::<BigEndian>(type_code)
}

/// Reads the marker and type code, returning the reader positioned at the payload.
pub(crate) fn read_header(data: &[u8]) -> GeometryResult<(EndianAwareReader<'_>, u32)> {
    let mut reader = EndianAwareReader::from_marker(data)?;
    let type_code = reader.read_u32()?;
    trace!(
        "Read geometry header: type code {}, little endian {}",
        type_code,
        reader.is_little_endian()
    );
    Ok((reader, type_code))
}

/// Writes an element count into the 32-bit count field.
///
/// Constructors guarantee that every count fits, see [`check_count`].
pub(crate) fn write_count<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    let count = u32::try_from(count)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "count exceeds u32 range"))?;
    out.write_u32::<BigEndian>(count)
}

/// Reads an element count and returns it with a safe pre-allocation size.
///
/// A corrupt count is capped by what the remaining bytes could hold, so it
/// cannot trigger an oversized allocation before the under-read is detected.
pub(crate) fn read_count(
    reader: &mut EndianAwareReader<'_>,
    min_element_size: usize,
) -> GeometryResult<(usize, usize)> {
    let count = reader.read_u32()? as usize;
    let capacity = count.min(reader.remaining() / min_element_size.max(1));
    Ok((count, capacity))
}

/// Rejects collections whose length cannot be written into a count field.
pub(crate) fn check_count(count: usize, what: &str) -> GeometryResult<()> {
    if u32::try_from(count).is_err() {
        return Err(GeometryError::invalid_argument(format!(
            "{} count {} exceeds the 32-bit wire limit",
            what, count
        )));
    }
    Ok(())
}

pub(crate) fn warn_trailing_bytes(reader: &EndianAwareReader<'_>, name: &str) {
    if reader.remaining() > 0 {
        warn!(
            "Ignoring {} trailing byte(s) after {} value",
            reader.remaining(),
            name
        );
    }
}

/// Serializes `value` with the envelope into `out`.
pub fn encode<T: CustomType, W: Write>(value: &T, out: &mut W) -> GeometryResult<()> {
    write_header(out, T::TYPE_CODE)?;
    value.write_payload(out)?;
    Ok(())
}

/// Serializes `value` with the envelope into a new buffer.
pub fn encode_to_vec<T: CustomType>(value: &T) -> GeometryResult<Vec<u8>> {
    let mut out = Vec::new();
    encode(value, &mut out)?;
    trace!("Encoded {} into {} bytes", T::NAME, out.len());
    Ok(out)
}

/// Deserializes an enveloped value of type `T`.
///
/// # Errors
/// Returns a decoding error if the type code is not `T::TYPE_CODE`, if the
/// buffer ends early, or if the decoded content is not a valid `T`.
pub fn decode<T: CustomType>(data: &[u8]) -> GeometryResult<T> {
    let (mut reader, type_code) = read_header(data)?;
    if type_code != T::TYPE_CODE {
        return Err(GeometryError::decoding(format!(
            "{} data-type value should be {}, but was {}",
            T::NAME,
            T::TYPE_CODE,
            type_code
        )));
    }
    let value = T::read_payload(&mut reader)?;
    warn_trailing_bytes(&reader, T::NAME);
    Ok(value)
}
