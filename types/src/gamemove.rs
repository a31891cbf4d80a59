use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{column_value, Cell, Color, MoveError, Point};

/// A decoded move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a stone of `color` on `point`.
    Place { color: Color, point: Point },
    /// Take back whatever is on `point`.
    Clear { point: Point },
}

impl Move {
    #[must_use]
    pub const fn point(&self) -> Point {
        match self {
            Move::Place { point, .. } | Move::Clear { point } => *point,
        }
    }

    #[must_use]
    pub const fn is_clear(&self) -> bool {
        matches!(self, Move::Clear { .. })
    }

    /// State the target cell is left in once this move is applied.
    #[must_use]
    pub fn cell(&self) -> Cell {
        match self {
            Move::Place { color, .. } => Cell::from(*color),
            Move::Clear { .. } => Cell::Empty,
        }
    }

    /// Decodes a token of the form `+b:c4`, `+w:c4` or `-:c4`.
    ///
    /// `ordinal` is the 1-based position of the token in the record and is
    /// only used to label errors. Coordinates are checked against `size`.
    pub fn decode(token: &str, ordinal: usize, size: u8) -> Result<Self, MoveError> {
        let token = token.trim();
        let mut chars = token.chars();
        let color = match chars.next() {
            Some('+') => Some(
                chars
                    .next()
                    .and_then(Color::from_letter)
                    .ok_or(MoveError::InvalidColor { ordinal })?,
            ),
            // Anything between '-' and ':' is ignored
            Some('-') => None,
            _ => return Err(MoveError::InvalidMarker { ordinal }),
        };
        let (_, coordinate) = token
            .split_once(':')
            .ok_or(MoveError::MissingCoordinate { ordinal })?;
        let point = decode_point(coordinate, ordinal, size)?;
        Ok(match color {
            Some(color) => Move::Place { color, point },
            None => Move::Clear { point },
        })
    }
}

fn decode_point(coordinate: &str, ordinal: usize, size: u8) -> Result<Point, MoveError> {
    let mut chars = coordinate.chars();
    let x = chars
        .next()
        .and_then(column_value)
        .ok_or(MoveError::InvalidColumn { ordinal })?;
    let rest = chars.as_str();
    // Anything after the leading digit run is ignored
    let digits = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return Err(MoveError::InvalidRow { ordinal });
    }
    // Only overflow can fail here, which is off the board anyway
    let y = digits.parse::<u32>().unwrap_or(u32::MAX);
    u8::try_from(y)
        .ok()
        .map(|y| Point::new(x, y))
        .filter(|point| point.is_on_board(size))
        .ok_or(MoveError::OutOfBounds {
            ordinal,
            x,
            y,
            size,
        })
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { color, point } => write!(f, "+{}:{point}", color.letter()),
            Move::Clear { point } => write!(f, "-:{point}"),
        }
    }
}
