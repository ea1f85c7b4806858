//! The point geometry.

use byteorder::{BigEndian, WriteBytesExt};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::io::{self, Write};
use std::str::FromStr;

use crate::codec::{self, CustomType, POINT_CLASS_NAME, POINT_TYPE_CODE};
use crate::endian::EndianAwareReader;
use crate::errors::{GeometryError, GeometryResult};
use crate::wkt::{self, WktBody, POINT_KEYWORD};

/// A 2D point with x,y coordinates.
///
/// Corresponds to the `org.apache.cassandra.db.marshal.PointType` column
/// type. Coordinates are never NaN, which makes `Point` a proper `Eq` value.
///
/// # Example
///
/// ```rust
/// use dse_geometry::Point;
///
/// let point = Point::new(37.5, 21.1).unwrap();
/// assert_eq!(point.wkt(), "POINT (37.5 21.1)");
/// assert_eq!(Point::parse("POINT (37.5 21.1)").unwrap(), point);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from two coordinates.
    ///
    /// # Errors
    /// Returns an invalid-argument error if either coordinate is NaN.
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> GeometryResult<Self> {
        let (x, y) = (x.into(), y.into());
        if x.is_nan() || y.is_nan() {
            return Err(GeometryError::invalid_argument(format!(
                "Point coordinates must not be NaN, got ({}, {})",
                x, y
            )));
        }
        Ok(Self { x, y })
    }

    /// Parses `POINT (x y)`.
    pub fn parse(wkt: &str) -> GeometryResult<Self> {
        match wkt::parse_body(wkt, POINT_KEYWORD)? {
            WktBody::Parenthesized(body) => {
                let (x, y) = wkt::parse_coordinate_pair(body)?;
                Point::new(x, y)
            }
            WktBody::Empty => Err(GeometryError::invalid_argument(format!(
                "POINT EMPTY is not supported: '{}'",
                wkt
            ))),
        }
    }

    /// Gets the x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Gets the y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Human-readable `x,y` form.
    pub fn summary(&self) -> String {
        format!("{:?},{:?}", self.x, self.y)
    }

    /// Well-known-text representation of this point.
    pub fn wkt(&self) -> String {
        self.to_string()
    }

    /// Writes the bare `x y` pair used inside line strings and polygons.
    pub(crate) fn write_coordinates<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        wkt::write_coordinate(out, self.x)?;
        out.write_char(' ')?;
        wkt::write_coordinate(out, self.y)
    }

    /// Serializes this point into its stored column form.
    pub fn serialize(&self) -> GeometryResult<Vec<u8>> {
        codec::encode_to_vec(self)
    }

    /// Serializes this point into `out`.
    pub fn serialize_into<W: Write>(&self, out: &mut W) -> GeometryResult<()> {
        codec::encode(self, out)
    }

    /// Deserializes a stored point column value.
    ///
    /// # Errors
    /// Returns a decoding error if the value is not tagged as a point or is truncated.
    pub fn deserialize(data: &[u8]) -> GeometryResult<Self> {
        codec::decode(data)
    }
}

impl CustomType for Point {
    const TYPE_CODE: u32 = POINT_TYPE_CODE;
    const CLASS_NAME: &'static str = POINT_CLASS_NAME;
    const NAME: &'static str = "Point";

    fn write_payload<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_f64::<BigEndian>(self.x)?;
        out.write_f64::<BigEndian>(self.y)
    }

    fn read_payload(reader: &mut EndianAwareReader<'_>) -> GeometryResult<Self> {
        let x = reader.read_f64()?;
        let y = reader.read_f64()?;
        Point::new(x, y).map_err(GeometryError::into_decoding)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

// 0.0 and -0.0 compare equal, so they must hash alike.
fn hash_coordinate<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0f64 } else { value };
    value.to_bits().hash(state);
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", POINT_KEYWORD)?;
        self.write_coordinates(f)?;
        write!(f, ")")
    }
}

impl FromStr for Point {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Point::parse(s)
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = GeometryError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Point::new(x, y)
    }
}
