//! Parsing for the SimpleIcon text image format.
//!
//! An icon file is one `;;` separated record: a name, a layout version, a
//! `<width>x<height>` dimension spec and a flat run of pixel characters.
//! Call [`IconDocument::parse`] on the raw text, or
//! [`IconDocument::from_file`] to read and parse in one go.
//!
//! ```rust
//! # use icon_parser::parser::icon::IconDocument;
//! let icon = IconDocument::parse("dot;;1;;3x2;;010000").unwrap();
//!
//! assert_eq!(icon.name(), "dot");
//! assert_eq!(icon.dimensions(), (3, 2));
//! assert!(icon.is_set(0, 1));
//! ```

use std::{fmt, fs::read_to_string, io, path::Path};

use nom::{
    character::complete::{char, u32},
    combinator::all_consuming,
    sequence::separated_pair,
    Finish, IResult,
};
use thiserror::Error;

/// Separator between the fields of an icon record.
pub const DELIMITER: &str = ";;";

/// Column width of one vertical band in the [`FormatVersion::Banded`] layout.
pub const BAND_WIDTH: usize = 8;

/// The cell value that marks a pixel as set. Every other value is unset.
pub const FILLED_PIXEL: char = '1';

/// A parsed icon: the header fields plus the rectangular pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDocument {
    name: String,
    version: FormatVersion,
    width: usize,
    height: usize,
    pixels: Vec<Vec<char>>,
}

impl Default for IconDocument {
    /// The placeholder document: named `EMPTY`, 8x8, no pixel data.
    fn default() -> Self {
        Self {
            name: "EMPTY".to_string(),
            version: FormatVersion::default(),
            width: 8,
            height: 8,
            pixels: Vec::new(),
        }
    }
}

impl IconDocument {
    pub fn parse(input: &str) -> Result<Self, ParserError> {
        if input.trim().is_empty() {
            return Err(ParserError::MalformedDocument { found: 0 });
        }

        let fields: Vec<&str> = input.split(DELIMITER).collect();
        let &[name, version, dimensions, body] = fields.as_slice() else {
            return Err(ParserError::MalformedDocument {
                found: fields.len(),
            });
        };

        let version = FormatVersion::try_from(
            version
                .parse::<u16>()
                .map_err(|_| ParserError::InvalidVersion(version.to_string()))?,
        )?;

        let (width, height) = parse_dimensions(dimensions)?;

        debug!("header: {name:?} version {version}, {width}x{height}");

        let pixels = match version {
            FormatVersion::Linear => decode_linear(body, width, height)?,
            FormatVersion::Banded => decode_banded(body, width, height)?,
        };

        Ok(Self {
            name: name.to_string(),
            version,
            width,
            height,
            pixels,
        })
    }

    /// Reads `path` and parses its content as an icon document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::parse(&read_to_string(path)?)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> FormatVersion {
        self.version
    }

    /// Grid size as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Grid width (line length)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of lines)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raw cell value, or [`None`] outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> Option<char> {
        self.pixels.get(row)?.get(col).copied()
    }

    /// Whether the cell holds a set pixel. Cells outside the grid are unset.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.pixel(row, col) == Some(FILLED_PIXEL)
    }
}

/// Data layout of the pixel body, selected by the version header field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormatVersion {
    /// Version 1: one row after another, left to right.
    #[default]
    Linear,
    /// Version 2: vertical bands of up to [`BAND_WIDTH`] columns, each band
    /// written row by row before the next band starts.
    Banded,
}

impl TryFrom<u16> for FormatVersion {
    type Error = ParserError;

    /// Converts the wire tag into a known layout version.
    fn try_from(tag: u16) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Linear),
            2 => Ok(Self::Banded),
            other => Err(ParserError::UnsupportedVersion(other)),
        }
    }
}

impl From<FormatVersion> for u16 {
    fn from(version: FormatVersion) -> Self {
        match version {
            FormatVersion::Linear => 1,
            FormatVersion::Banded => 2,
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u16::from(*self))
    }
}

/// The `<width>x<height>` grammar of the dimension field.
fn dimension_spec(input: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(separated_pair(u32, char('x'), u32))(input)
}

fn parse_dimensions(input: &str) -> Result<(usize, usize), ParserError> {
    let (_, (width, height)) = dimension_spec(input)
        .finish()
        .map_err(|_| ParserError::InvalidDimensions(input.to_string()))?;

    Ok((width as usize, height as usize))
}

fn decode_linear(body: &str, width: usize, height: usize) -> Result<Vec<Vec<char>>, ParserError> {
    let mut cells = body.chars();
    let mut rows = Vec::with_capacity(height);

    for _ in 0..height {
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            row.push(cells.next().ok_or_else(|| truncated(body, width, height))?);
        }
        rows.push(row);
    }

    if cells.next().is_some() {
        debug!("body holds more than {width}x{height} cells, rest ignored");
    }

    Ok(rows)
}

/// The banded layout stores up to [`BAND_WIDTH`] columns of every row before
/// moving right to the next band. Band segments of the same row are
/// concatenated here, so the result is a plain `height` by `width` grid.
fn decode_banded(body: &str, width: usize, height: usize) -> Result<Vec<Vec<char>>, ParserError> {
    let mut cells = body.chars();
    let mut rows: Vec<Vec<char>> = (0..height).map(|_| Vec::with_capacity(width)).collect();

    for band in (0..width).step_by(BAND_WIDTH) {
        let band_end = (band + BAND_WIDTH).min(width);

        for row in rows.iter_mut() {
            for _ in band..band_end {
                row.push(cells.next().ok_or_else(|| truncated(body, width, height))?);
            }
        }
    }

    if cells.next().is_some() {
        debug!("body holds more than {width}x{height} cells, rest ignored");
    }

    Ok(rows)
}

fn truncated(body: &str, width: usize, height: usize) -> ParserError {
    ParserError::TruncatedBody {
        expected: width * height,
        found: body.chars().count(),
    }
}

/// Failures while parsing icon text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Expected 4 `;;` separated fields, found {found}")]
    MalformedDocument { found: usize },

    #[error("Version field is not a number: {0:?}")]
    InvalidVersion(String),

    #[error("Dimension field is not `<width>x<height>`: {0:?}")]
    InvalidDimensions(String),

    #[error("Version {0} is not a known icon layout")]
    UnsupportedVersion(u16),

    #[error("Pixel body ends after {found} of {expected} cells")]
    TruncatedBody { expected: usize, found: usize },
}

/// Failures while loading an icon document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read icon file: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParserError),
}
