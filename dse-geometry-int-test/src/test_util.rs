//! Builders for hand-written column payloads.
//!
//! Stored values written by other drivers may use either byte order, so the
//! fixtures are assembled byte by byte instead of going through the encoder
//! under test.

use dse_geometry::{LineString, Point, Polygon};

/// Byte order of a hand-built payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Big,
    Little,
}

impl Order {
    pub fn marker(self) -> u8 {
        match self {
            Order::Big => 0x00,
            Order::Little => 0x01,
        }
    }
}

/// Assembles a column payload in a chosen byte order.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    order: Order,
    bytes: Vec<u8>,
}

impl PayloadBuilder {
    /// Starts a payload with the marker byte and type code.
    pub fn new(order: Order, type_code: u32) -> Self {
        let mut builder = Self {
            order,
            bytes: vec![order.marker()],
        };
        builder.int32(type_code);
        builder
    }

    /// Starts a payload with an arbitrary non-zero marker byte.
    pub fn with_marker(marker: u8, order: Order, type_code: u32) -> Self {
        let mut builder = Self::new(order, type_code);
        builder.bytes[0] = marker;
        builder
    }

    pub fn int32(&mut self, value: u32) -> &mut Self {
        match self.order {
            Order::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
            Order::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
        }
        self
    }

    pub fn float(&mut self, value: f64) -> &mut Self {
        match self.order {
            Order::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
            Order::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
        }
        self
    }

    pub fn coords(&mut self, coords: &[(f64, f64)]) -> &mut Self {
        self.int32(coords.len() as u32);
        for &(x, y) in coords {
            self.float(x).float(y);
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y).expect("valid point")
}

pub fn line(coords: &[(f64, f64)]) -> LineString {
    LineString::new(coords.iter().map(|&(x, y)| point(x, y)).collect()).expect("valid line")
}

pub fn polygon(rings: &[&[(f64, f64)]]) -> Polygon {
    Polygon::new(rings.iter().map(|ring| line(ring)).collect()).expect("valid polygon")
}

/// Exterior ring of the capitol layout.
pub const CAPITOL_EXTERIOR: &[(f64, f64)] = &[
    (0.0, 0.0),
    (20.0, 0.0),
    (26.0, 26.0),
    (0.0, 26.0),
    (0.0, 0.0),
];

/// Courtyard hole inside the capitol layout.
pub const CAPITOL_COURTYARD: &[(f64, f64)] = &[
    (1.0, 1.0),
    (1.0, 5.0),
    (5.0, 5.0),
    (5.0, 1.0),
    (1.0, 1.0),
];
