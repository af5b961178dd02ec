//! Reading segments from text, and writing intersections back out.
//!
//! The input format has one segment per line: an integer id followed by the
//! coordinates of the two endpoints, `id x0 y0 x1 y1`, separated by
//! whitespace. Blank lines and lines starting with `#` are ignored.
//!
//! The output format has one intersection per line: `id1 id2 x y`.

use std::io::Write;

use crate::{Intersection, SegmentRecord};

/// What was wrong with a line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line ended early.
    MissingField {
        /// The number of fields that we found.
        found: usize,
    },
    /// There was something after the last coordinate.
    TrailingField(String),
    /// The id wasn't an integer.
    InvalidId(String),
    /// One of the coordinates wasn't a number.
    InvalidCoordinate(String),
}

/// A line of input that couldn't be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// The line number, starting from 1.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.line;
        match &self.kind {
            ParseErrorKind::MissingField { found } => {
                write!(f, "line {line}: expected 5 fields, found {found}")
            }
            ParseErrorKind::TrailingField(s) => write!(f, "line {line}: unexpected {s:?}"),
            ParseErrorKind::InvalidId(s) => write!(f, "line {line}: invalid id {s:?}"),
            ParseErrorKind::InvalidCoordinate(s) => {
                write!(f, "line {line}: invalid coordinate {s:?}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parsing stopped at a bad line.
///
/// The records from the lines before it aren't lost.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialParse {
    /// Everything that was parsed before the error.
    pub parsed: Vec<SegmentRecord>,
    /// The error.
    pub error: ParseError,
}

impl std::fmt::Display for PartialParse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (after {} valid segments)",
            self.error,
            self.parsed.len()
        )
    }
}

impl std::error::Error for PartialParse {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

fn parse_line(line: &str) -> Result<SegmentRecord, ParseErrorKind> {
    let mut fields = line.split_whitespace();
    let mut found = 0;
    let mut next = || {
        let field = fields.next().ok_or(ParseErrorKind::MissingField { found })?;
        found += 1;
        Ok::<_, ParseErrorKind>(field)
    };

    let id = next()?;
    let id: i64 = id
        .parse()
        .map_err(|_| ParseErrorKind::InvalidId(id.to_owned()))?;

    let mut coords = [0.0f64; 4];
    for c in &mut coords {
        let field = next()?;
        *c = field
            .parse()
            .map_err(|_| ParseErrorKind::InvalidCoordinate(field.to_owned()))?;
    }

    if let Some(extra) = fields.next() {
        return Err(ParseErrorKind::TrailingField(extra.to_owned()));
    }

    let [x0, y0, x1, y1] = coords;
    Ok(SegmentRecord::new(id, (x0, y0), (x1, y1)))
}

/// Iterates over the records in `input`, one result per non-empty line.
///
/// Unlike [`parse_segments`], this keeps going after a bad line.
pub fn records(input: &str) -> impl Iterator<Item = Result<SegmentRecord, ParseError>> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            parse_line(line).map_err(|kind| ParseError {
                line: line_no,
                kind,
            })
        })
}

/// Parses all the records in `input`, stopping at the first bad line.
pub fn parse_segments(input: &str) -> Result<Vec<SegmentRecord>, PartialParse> {
    let mut parsed = Vec::new();
    for r in records(input) {
        match r {
            Ok(r) => parsed.push(r),
            Err(error) => return Err(PartialParse { parsed, error }),
        }
    }
    Ok(parsed)
}

/// Writes intersections, one `id1 id2 x y` line each.
pub fn write_intersections<W: Write>(
    mut out: W,
    intersections: impl IntoIterator<Item = Intersection>,
) -> std::io::Result<()> {
    for int in intersections {
        writeln!(
            out,
            "{} {} {} {}",
            int.id1, int.id2, int.point.x, int.point.y
        )?;
    }
    out.flush()
}
