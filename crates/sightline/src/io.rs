//! Text formats for obstacle lists and visibility boundaries.
//!
//! Input: one segment per line, two `x,y` points separated by whitespace,
//! coordinates as decimal literals. Parsing is available in floating point
//! and in exact rational arithmetic; malformed input surfaces a
//! [`ParseError`] and produces no partial result.
//!
//! Output: either reconstructed visible edges (`x0,y0 x1,y1`, three
//! decimals, one per line) or the raw view-ray dump consumed by renderers
//! and diff tooling.

use std::fmt::{self, Write as _};

use nalgebra::Vector2;

use crate::exact::{self, RatPoint, RatSegment};
use crate::geom::{Real, Segment};
use crate::region::Boundary;

/// Errors raised while parsing a segment list.
#[derive(Debug)]
pub enum ParseError {
    /// Line does not hold exactly two points.
    BadPointCount { line: usize, count: usize },
    /// Point token is not `x,y`.
    MalformedPoint { line: usize, token: String },
    /// Coordinate is not a decimal number.
    InvalidNumber { line: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadPointCount { line, count } => {
                write!(f, "line {line}: expected 2 points, found {count}")
            }
            ParseError::MalformedPoint { line, token } => {
                write!(f, "line {line}: malformed point {token:?} (expected x,y)")
            }
            ParseError::InvalidNumber { line, token } => {
                write!(f, "line {line}: invalid number {token:?}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn split_points(input: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l.split_whitespace().collect()))
}

fn coords<'a>(line: usize, token: &'a str) -> Result<(&'a str, &'a str), ParseError> {
    token.split_once(',').ok_or_else(|| ParseError::MalformedPoint {
        line,
        token: token.to_string(),
    })
}

/// Parse a segment list in floating point.
pub fn parse_segments<T: Real>(input: &str) -> Result<Vec<Segment<T>>, ParseError> {
    let number = |line: usize, token: &str| -> Result<T, ParseError> {
        token
            .parse::<f64>()
            .map(nalgebra::convert)
            .map_err(|_| ParseError::InvalidNumber {
                line,
                token: token.to_string(),
            })
    };

    let mut out = Vec::new();
    for (line, tokens) in split_points(input) {
        if tokens.len() != 2 {
            return Err(ParseError::BadPointCount {
                line,
                count: tokens.len(),
            });
        }
        let (ax, ay) = coords(line, tokens[0])?;
        let (bx, by) = coords(line, tokens[1])?;
        out.push(Segment::new(
            Vector2::new(number(line, ax)?, number(line, ay)?),
            Vector2::new(number(line, bx)?, number(line, by)?),
        ));
    }
    Ok(out)
}

/// Parse a segment list into exact rationals.
pub fn parse_segments_exact(input: &str) -> Result<Vec<RatSegment>, ParseError> {
    let number = |line: usize, token: &str| {
        exact::parse_decimal(token).ok_or_else(|| ParseError::InvalidNumber {
            line,
            token: token.to_string(),
        })
    };

    let mut out = Vec::new();
    for (line, tokens) in split_points(input) {
        if tokens.len() != 2 {
            return Err(ParseError::BadPointCount {
                line,
                count: tokens.len(),
            });
        }
        let (ax, ay) = coords(line, tokens[0])?;
        let (bx, by) = coords(line, tokens[1])?;
        out.push(RatSegment::new(
            RatPoint::new(number(line, ax)?, number(line, ay)?),
            RatPoint::new(number(line, bx)?, number(line, by)?),
        ));
    }
    Ok(out)
}

/// Render the retained visible edges, one `x0,y0 x1,y1` line per edge.
pub fn format_edges<T: Real>(boundary: &Boundary<T>) -> String {
    let mut out = String::new();
    for e in boundary.edges() {
        let _ = writeln!(
            out,
            "{:.3},{:.3} {:.3},{:.3}",
            e.a.x, e.a.y, e.b.x, e.b.y
        );
    }
    out
}

/// Render raw view rays as `theta vx vy inner outer` lines.
///
/// Absent bounds print as `-1`, matching the wire format downstream tools
/// expect; in memory the sentinel never exists.
pub fn format_rays<T: Real>(boundary: &Boundary<T>) -> String {
    let minus_one = -T::one();
    let mut out = String::new();
    for r in &boundary.rays {
        let _ = writeln!(
            out,
            "{:.5} {:.5} {:.5} {:.5} {:.5}",
            r.theta,
            r.dir.x,
            r.dir.y,
            r.inner.unwrap_or(minus_one),
            r.outer.unwrap_or(minus_one),
        );
    }
    out
}
