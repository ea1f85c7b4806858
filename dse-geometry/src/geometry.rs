//! A sum type over all supported geometries.
//!
//! Used where the kind of a value is only known at runtime: decoding a
//! stored value by its type code, or parsing WKT by its leading keyword.

use log::debug;
use std::fmt::{self, Display};
use std::io::Write;
use std::str::FromStr;

use crate::codec::{self, CustomType, LINE_STRING_TYPE_CODE, POINT_TYPE_CODE, POLYGON_TYPE_CODE};
use crate::errors::{GeometryError, GeometryResult};
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::wkt::{LINE_STRING_KEYWORD, POINT_KEYWORD, POLYGON_KEYWORD};

/// Any geometry value that can be stored in a custom-typed column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
}

impl Geometry {
    /// Parses WKT of any supported kind, dispatching on the leading keyword.
    pub fn parse(wkt: &str) -> GeometryResult<Self> {
        let trimmed = wkt.trim_start();
        // No keyword is a prefix of another.
        if trimmed.starts_with(POINT_KEYWORD) {
            Point::parse(wkt).map(Geometry::Point)
        } else if trimmed.starts_with(LINE_STRING_KEYWORD) {
            LineString::parse(wkt).map(Geometry::LineString)
        } else if trimmed.starts_with(POLYGON_KEYWORD) {
            Polygon::parse(wkt).map(Geometry::Polygon)
        } else {
            debug!("Rejected WKT with unknown geometry type: {}", wkt);
            Err(GeometryError::invalid_argument(format!(
                "Unknown WKT geometry type: '{}'",
                wkt
            )))
        }
    }

    /// Deserializes a stored value of any supported kind.
    ///
    /// # Errors
    /// Returns a decoding error for an unknown type code or a malformed payload.
    pub fn deserialize(data: &[u8]) -> GeometryResult<Self> {
        let (mut reader, type_code) = codec::read_header(data)?;
        let geometry = match type_code {
            POINT_TYPE_CODE => Geometry::Point(Point::read_payload(&mut reader)?),
            LINE_STRING_TYPE_CODE => Geometry::LineString(LineString::read_payload(&mut reader)?),
            POLYGON_TYPE_CODE => Geometry::Polygon(Polygon::read_payload(&mut reader)?),
            other => {
                return Err(GeometryError::decoding(format!(
                    "Unknown geometry data-type value {}",
                    other
                )))
            }
        };
        codec::warn_trailing_bytes(&reader, geometry.name());
        Ok(geometry)
    }

    /// Serializes this geometry into its stored column form.
    pub fn serialize(&self) -> GeometryResult<Vec<u8>> {
        match self {
            Geometry::Point(point) => point.serialize(),
            Geometry::LineString(line) => line.serialize(),
            Geometry::Polygon(polygon) => polygon.serialize(),
        }
    }

    /// Serializes this geometry into `out`.
    pub fn serialize_into<W: Write>(&self, out: &mut W) -> GeometryResult<()> {
        match self {
            Geometry::Point(point) => point.serialize_into(out),
            Geometry::LineString(line) => line.serialize_into(out),
            Geometry::Polygon(polygon) => polygon.serialize_into(out),
        }
    }

    /// Well-known-text representation of this geometry.
    pub fn wkt(&self) -> String {
        self.to_string()
    }

    /// Type code written into the binary envelope.
    pub fn type_code(&self) -> u32 {
        match self {
            Geometry::Point(_) => Point::TYPE_CODE,
            Geometry::LineString(_) => LineString::TYPE_CODE,
            Geometry::Polygon(_) => Polygon::TYPE_CODE,
        }
    }

    /// Server-side marshal class of the column type for this geometry.
    pub fn class_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => Point::CLASS_NAME,
            Geometry::LineString(_) => LineString::CLASS_NAME,
            Geometry::Polygon(_) => Polygon::CLASS_NAME,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => Point::NAME,
            Geometry::LineString(_) => LineString::NAME,
            Geometry::Polygon(_) => Polygon::NAME,
        }
    }
}

impl Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Point(point) => Display::fmt(point, f),
            Geometry::LineString(line) => Display::fmt(line, f),
            Geometry::Polygon(polygon) => Display::fmt(polygon, f),
        }
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geometry::parse(s)
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

fn kind_mismatch(expected: &str, actual: &Geometry) -> GeometryError {
    GeometryError::invalid_argument(format!("expected a {}, got {}", expected, actual.name()))
}

impl TryFrom<Geometry> for Point {
    type Error = GeometryError;

    fn try_from(geometry: Geometry) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Point(point) => Ok(point),
            other => Err(kind_mismatch(Point::NAME, &other)),
        }
    }
}

impl TryFrom<Geometry> for LineString {
    type Error = GeometryError;

    fn try_from(geometry: Geometry) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::LineString(line) => Ok(line),
            other => Err(kind_mismatch(LineString::NAME, &other)),
        }
    }
}

impl TryFrom<Geometry> for Polygon {
    type Error = GeometryError;

    fn try_from(geometry: Geometry) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(polygon),
            other => Err(kind_mismatch(Polygon::NAME, &other)),
        }
    }
}
