//! Well-Known Text scanning and formatting helpers shared by the geometry types.
//!
//! ```text
//! POINT        ::= "POINT" "(" NUM NUM ")"
//! LINESTRING   ::= "LINESTRING" "EMPTY" | "LINESTRING" "(" POINTLIST ")"
//! POLYGON      ::= "POLYGON" "EMPTY" | "POLYGON" "(" RINGLIST ")"
//! POINTLIST    ::= NUM NUM ("," NUM NUM)*
//! RINGLIST     ::= "(" POINTLIST ")" ("," "(" POINTLIST ")")*
//! ```
//!
//! Keywords are case-sensitive; whitespace is allowed around every token.

use log::debug;
use std::fmt;

use crate::errors::{GeometryError, GeometryResult};
use crate::point::Point;

pub(crate) const POINT_KEYWORD: &str = "POINT";
pub(crate) const LINE_STRING_KEYWORD: &str = "LINESTRING";
pub(crate) const POLYGON_KEYWORD: &str = "POLYGON";
pub(crate) const EMPTY_KEYWORD: &str = "EMPTY";

/// Body of a WKT value after its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WktBody<'a> {
    /// The `EMPTY` literal.
    Empty,
    /// The text between the outermost parentheses.
    Parenthesized(&'a str),
}

fn invalid(message: String) -> GeometryError {
    debug!("Rejected WKT input: {}", message);
    GeometryError::invalid_argument(message)
}

/// Strips `keyword` from the start of `wkt` and classifies what follows.
pub(crate) fn parse_body<'a>(wkt: &'a str, keyword: &str) -> GeometryResult<WktBody<'a>> {
    let rest = wkt
        .trim()
        .strip_prefix(keyword)
        .ok_or_else(|| invalid(format!("expected {} WKT, got '{}'", keyword, wkt)))?;

    let trimmed = rest.trim_start();
    if trimmed.starts_with('(') {
        return strip_parens(trimmed).map(WktBody::Parenthesized);
    }
    // EMPTY must be separated from the keyword, e.g. "LINESTRINGEMPTY" is rejected.
    if trimmed.len() < rest.len() && trimmed.trim_end() == EMPTY_KEYWORD {
        return Ok(WktBody::Empty);
    }
    Err(invalid(format!("malformed {} WKT '{}'", keyword, wkt)))
}

/// Returns the text between a leading `(` and a trailing `)`.
pub(crate) fn strip_parens(s: &str) -> GeometryResult<&str> {
    let s = s.trim();
    s.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| invalid(format!("expected a parenthesized list, got '{}'", s)))
}

fn parse_number(token: &str) -> GeometryResult<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| invalid(format!("invalid coordinate '{}'", token)))?;
    if value.is_nan() {
        return Err(invalid(format!("coordinate '{}' is not a number", token)));
    }
    Ok(value)
}

/// Parses `NUM NUM`.
pub(crate) fn parse_coordinate_pair(s: &str) -> GeometryResult<(f64, f64)> {
    let mut tokens = s.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Ok((parse_number(x)?, parse_number(y)?)),
        _ => Err(invalid(format!("invalid coordinate pair '{}'", s.trim()))),
    }
}

/// Parses `NUM NUM ("," NUM NUM)*` into points.
pub(crate) fn parse_point_list(s: &str) -> GeometryResult<Vec<Point>> {
    s.split(',')
        .map(|pair| {
            let (x, y) = parse_coordinate_pair(pair)?;
            Point::new(x, y)
        })
        .collect()
}

/// Splits `"(" POINTLIST ")" ("," "(" POINTLIST ")")*` into the inner point lists.
pub(crate) fn split_ring_list(s: &str) -> GeometryResult<Vec<&str>> {
    let malformed = || invalid(format!("malformed ring list '{}'", s.trim()));

    let mut rings = vec![];
    let mut ring_start = None;
    let mut expect_ring = true;

    for (i, ch) in s.char_indices() {
        match (ch, ring_start) {
            ('(', None) if expect_ring => {
                ring_start = Some(i + ch.len_utf8());
                expect_ring = false;
            }
            (')', Some(start)) => {
                rings.push(&s[start..i]);
                ring_start = None;
            }
            (',', None) if !expect_ring => expect_ring = true,
            ('(', _) | (')', None) | (',', None) => return Err(malformed()),
            (c, None) if !c.is_whitespace() => return Err(malformed()),
            _ => {}
        }
    }

    if ring_start.is_some() || expect_ring {
        return Err(malformed());
    }
    Ok(rings)
}

/// Formats a coordinate using the shortest representation that parses back
/// to the same value; integral values keep a trailing `.0`.
pub(crate) fn write_coordinate<W: fmt::Write>(out: &mut W, value: f64) -> fmt::Result {
    write!(out, "{:?}", value)
}

/// Writes `x1 y1, x2 y2, ...`.
pub(crate) fn write_point_list<W: fmt::Write>(out: &mut W, points: &[Point]) -> fmt::Result {
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        point.write_coordinates(out)?;
    }
    Ok(())
}
