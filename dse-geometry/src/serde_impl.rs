//! Serde support, enabled by the `serde` feature.
//!
//! Geometries are represented by their WKT string, so deserializing goes
//! through the same validating parser as [`std::str::FromStr`].

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::errors::GeometryError;
use crate::{Geometry, LineString, Point, Polygon};

struct WktVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for WktVisitor<T>
where
    T: FromStr<Err = GeometryError>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        T::from_str(value).map_err(E::custom)
    }
}

macro_rules! impl_wkt_serde {
    ($ty:ty, $expecting:expr) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(WktVisitor {
                    expecting: $expecting,
                    marker: PhantomData,
                })
            }
        }
    };
}

impl_wkt_serde!(Point, "a POINT WKT string");
impl_wkt_serde!(LineString, "a LINESTRING WKT string");
impl_wkt_serde!(Polygon, "a POLYGON WKT string");
impl_wkt_serde!(Geometry, "a POINT, LINESTRING or POLYGON WKT string");
