//! The polygon geometry.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::str::FromStr;

use crate::codec::{self, CustomType, COUNT_SIZE, POLYGON_CLASS_NAME, POLYGON_TYPE_CODE};
use crate::endian::EndianAwareReader;
use crate::errors::{GeometryError, GeometryResult};
use crate::line_string::LineString;
use crate::wkt::{self, WktBody, EMPTY_KEYWORD, POLYGON_KEYWORD};

/// A polygon consisting of a set of linear rings in the xy-plane.
///
/// Corresponds to the `org.apache.cassandra.db.marshal.PolygonType` column
/// type. The first ring is the *exterior ring* and defines the outer edge.
/// Any further rings are *interior rings*: holes in the polygon, which may in
/// turn contain rings describing islands. Ring closure is expected but not
/// checked; see [`LineString::is_closed`].
///
/// # Example
///
/// ```rust
/// use dse_geometry::Polygon;
///
/// let polygon = Polygon::parse(
///     "POLYGON ((0 0, 20 0, 26 26, 0 26, 0 0), (1 1, 1 5, 5 5, 5 1, 1 1))",
/// )
/// .unwrap();
/// assert_eq!(polygon.exterior_ring().unwrap().len(), 5);
/// assert_eq!(polygon.interior_rings().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Creates a polygon from its ordered rings, exterior ring first.
    ///
    /// # Errors
    /// Returns an invalid-argument error if any ring has no points; such a
    /// ring has no WKT form.
    pub fn new(rings: Vec<LineString>) -> GeometryResult<Self> {
        if let Some(index) = rings.iter().position(LineString::is_empty) {
            return Err(GeometryError::invalid_argument(format!(
                "Polygon ring {} has no points",
                index
            )));
        }
        codec::check_count(rings.len(), "Polygon ring")?;
        Ok(Self { rings })
    }

    /// Creates a polygon without rings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses `POLYGON EMPTY` or `POLYGON ((x y, ...), (x y, ...), ...)`.
    pub fn parse(wkt: &str) -> GeometryResult<Self> {
        match wkt::parse_body(wkt, POLYGON_KEYWORD)? {
            WktBody::Empty => Ok(Self::empty()),
            WktBody::Parenthesized(body) => {
                let rings = wkt::split_ring_list(body)?
                    .into_iter()
                    .map(|ring| LineString::new(wkt::parse_point_list(ring)?))
                    .collect::<GeometryResult<Vec<_>>>()?;
                Polygon::new(rings)
            }
        }
    }

    /// The ring characterizing the exterior of the polygon, if any.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// Rings that make up the interior of the polygon.
    pub fn interior_rings(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// All rings, exterior ring first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Human-readable description listing the exterior ring, then each
    /// interior ring on its own indented line.
    pub fn summary(&self) -> String {
        let exterior = self
            .exterior_ring()
            .map(LineString::summary)
            .unwrap_or_default();
        let interior: Vec<String> = self
            .interior_rings()
            .iter()
            .map(LineString::summary)
            .collect();
        format!(
            "Exterior ring: {}\nInterior rings:\n    {}",
            exterior,
            interior.join("\n    ")
        )
    }

    /// Well-known-text representation of this polygon.
    pub fn wkt(&self) -> String {
        self.to_string()
    }

    /// Serializes this polygon into its stored column form.
    pub fn serialize(&self) -> GeometryResult<Vec<u8>> {
        codec::encode_to_vec(self)
    }

    /// Serializes this polygon into `out`.
    pub fn serialize_into<W: Write>(&self, out: &mut W) -> GeometryResult<()> {
        codec::encode(self, out)
    }

    /// Deserializes a stored polygon column value.
    pub fn deserialize(data: &[u8]) -> GeometryResult<Self> {
        codec::decode(data)
    }
}

impl CustomType for Polygon {
    const TYPE_CODE: u32 = POLYGON_TYPE_CODE;
    const CLASS_NAME: &'static str = POLYGON_CLASS_NAME;
    const NAME: &'static str = "Polygon";

    fn write_payload<W: Write>(&self, out: &mut W) -> io::Result<()> {
        codec::write_count(out, self.rings.len())?;
        for ring in &self.rings {
            ring.write_payload(out)?;
        }
        Ok(())
    }

    fn read_payload(reader: &mut EndianAwareReader<'_>) -> GeometryResult<Self> {
        let (count, capacity) = codec::read_count(reader, COUNT_SIZE)?;
        let mut rings = Vec::with_capacity(capacity);
        for _ in 0..count {
            rings.push(LineString::read_payload(reader)?);
        }
        Polygon::new(rings).map_err(GeometryError::into_decoding)
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rings.is_empty() {
            return write!(f, "{} {}", POLYGON_KEYWORD, EMPTY_KEYWORD);
        }
        write!(f, "{} (", POLYGON_KEYWORD)?;
        for (i, ring) in self.rings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            ring.write_coordinates(f)?;
            write!(f, ")")?;
        }
        write!(f, ")")
    }
}

impl FromStr for Polygon {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polygon::parse(s)
    }
}

impl TryFrom<Vec<LineString>> for Polygon {
    type Error = GeometryError;

    fn try_from(rings: Vec<LineString>) -> Result<Self, Self::Error> {
        Polygon::new(rings)
    }
}
