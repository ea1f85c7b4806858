//! # DSE Geometry - Geospatial Column Values
//!
//! This crate provides the `Point`, `LineString` and `Polygon` value types
//! stored in DSE geospatial custom-typed columns, together with their two
//! encodings:
//!
//! - **Well-Known Text**: `POINT (1.0 2.0)`, `LINESTRING (0.0 0.0, 1.0 1.0)`,
//!   `POLYGON ((0.0 0.0, 1.0 0.0, 1.0 1.0, 0.0 0.0))`
//! - **Binary column form**: an endianness marker byte, a type code and the
//!   coordinate payload. Values are written big-endian; both byte orders are read.
//!
//! All geometries are immutable values with structural equality and hashing.
//!
//! ## Quick Start
//!
//! ```rust
//! use dse_geometry::{Geometry, LineString, Point, Polygon};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let line = LineString::new(vec![Point::new(1.0, 2.0)?, Point::new(3.0, 4.0)?])?;
//!
//! // Binary round trip
//! let bytes = line.serialize()?;
//! assert_eq!(LineString::deserialize(&bytes)?, line);
//!
//! // WKT round trip
//! assert_eq!(line.wkt(), "LINESTRING (1.0 2.0, 3.0 4.0)");
//! assert_eq!(LineString::parse(&line.wkt())?, line);
//!
//! // Values whose kind is only known at runtime
//! let polygon: Geometry = "POLYGON ((0 0, 4 0, 4 4, 0 0))".parse()?;
//! assert_eq!(Geometry::deserialize(&polygon.serialize()?)?, polygon);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every geometry type,
//!   using the WKT string as representation.

pub mod codec;
pub mod endian;
pub mod errors;
pub mod geometry;
pub mod line_string;
pub mod point;
pub mod polygon;
#[cfg(feature = "serde")]
mod serde_impl;
mod wkt;

pub use codec::{
    CustomType, LINE_STRING_CLASS_NAME, LINE_STRING_TYPE_CODE, POINT_CLASS_NAME,
    POINT_TYPE_CODE, POLYGON_CLASS_NAME, POLYGON_TYPE_CODE,
};
pub use endian::EndianAwareReader;
pub use errors::{ErrorKind, GeometryError, GeometryResult};
pub use geometry::Geometry;
pub use line_string::LineString;
pub use point::Point;
pub use polygon::Polygon;
