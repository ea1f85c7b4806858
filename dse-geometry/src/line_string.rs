//! The line-string geometry.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::str::FromStr;

use crate::codec::{
    self, CustomType, LINE_STRING_CLASS_NAME, LINE_STRING_TYPE_CODE, POINT_PAYLOAD_SIZE,
};
use crate::endian::EndianAwareReader;
use crate::errors::{GeometryError, GeometryResult};
use crate::point::Point;
use crate::wkt::{self, WktBody, EMPTY_KEYWORD, LINE_STRING_KEYWORD};

/// A set of lines characterized by a sequence of [`Point`]s in the xy-plane.
///
/// Corresponds to the `org.apache.cassandra.db.marshal.LineStringType`
/// column type. A line string is either empty or has at least two points.
/// A closed line string (first point equals last) is a *linear ring* and is
/// how polygons describe their boundaries.
///
/// # Example
///
/// ```rust
/// use dse_geometry::{LineString, Point};
///
/// let line = LineString::new(vec![
///     Point::new(37.5, 21.1).unwrap(),
///     Point::new(12.5, 22.1).unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(line.wkt(), "LINESTRING (37.5 21.1, 12.5 22.1)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Creates a line string from an ordered sequence of points.
    ///
    /// # Errors
    /// Returns an invalid-argument error for a single point; a line needs
    /// none or at least two.
    pub fn new(points: Vec<Point>) -> GeometryResult<Self> {
        if points.len() == 1 {
            return Err(GeometryError::invalid_argument(format!(
                "LineString requires zero or at least 2 points, got 1: {}",
                points[0]
            )));
        }
        codec::check_count(points.len(), "LineString point")?;
        Ok(Self { points })
    }

    /// Creates a line string without points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `LINESTRING EMPTY` or `LINESTRING (x1 y1, x2 y2, ...)`.
    pub fn parse(wkt: &str) -> GeometryResult<Self> {
        match wkt::parse_body(wkt, LINE_STRING_KEYWORD)? {
            WktBody::Empty => Ok(Self::empty()),
            WktBody::Parenthesized(body) => LineString::new(wkt::parse_point_list(body)?),
        }
    }

    /// Points that make up this line string.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Human-readable description, e.g. `1.0,2.0 to 3.0,4.0`.
    pub fn summary(&self) -> String {
        let points: Vec<String> = self.points.iter().map(Point::summary).collect();
        points.join(" to ")
    }

    /// Whether this is a linear ring, i.e. non-empty with its first point
    /// equal to its last.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Well-known-text representation of this line string.
    pub fn wkt(&self) -> String {
        self.to_string()
    }

    /// Writes the bare coordinate list, as embedded in a polygon ring.
    pub(crate) fn write_coordinates<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        wkt::write_point_list(out, &self.points)
    }

    /// Serializes this line string into its stored column form.
    pub fn serialize(&self) -> GeometryResult<Vec<u8>> {
        codec::encode_to_vec(self)
    }

    /// Serializes this line string into `out`.
    pub fn serialize_into<W: Write>(&self, out: &mut W) -> GeometryResult<()> {
        codec::encode(self, out)
    }

    /// Deserializes a stored line-string column value.
    ///
    /// # Errors
    /// Returns a decoding error if the value is not tagged as a line string,
    /// is truncated, or holds exactly one point.
    pub fn deserialize(data: &[u8]) -> GeometryResult<Self> {
        codec::decode(data)
    }
}

impl CustomType for LineString {
    const TYPE_CODE: u32 = LINE_STRING_TYPE_CODE;
    const CLASS_NAME: &'static str = LINE_STRING_CLASS_NAME;
    const NAME: &'static str = "LineString";

    fn write_payload<W: Write>(&self, out: &mut W) -> io::Result<()> {
        codec::write_count(out, self.points.len())?;
        for point in &self.points {
            point.write_payload(out)?;
        }
        Ok(())
    }

    fn read_payload(reader: &mut EndianAwareReader<'_>) -> GeometryResult<Self> {
        let (count, capacity) = codec::read_count(reader, POINT_PAYLOAD_SIZE)?;
        let mut points = Vec::with_capacity(capacity);
        for _ in 0..count {
            points.push(Point::read_payload(reader)?);
        }
        LineString::new(points).map_err(GeometryError::into_decoding)
    }
}

impl Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.points.is_empty() {
            return write!(f, "{} {}", LINE_STRING_KEYWORD, EMPTY_KEYWORD);
        }
        write!(f, "{} (", LINE_STRING_KEYWORD)?;
        self.write_coordinates(f)?;
        write!(f, ")")
    }
}

impl FromStr for LineString {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineString::parse(s)
    }
}

impl TryFrom<Vec<Point>> for LineString {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        LineString::new(points)
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
