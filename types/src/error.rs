use crate::column_letter;

/// Reasons a single move token can be rejected. `ordinal` is the 1-based
/// position of the token among the moves of the record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("missing + or - at move {ordinal}")]
    InvalidMarker { ordinal: usize },

    #[error("invalid color at move {ordinal}")]
    InvalidColor { ordinal: usize },

    #[error("missing ':' before the coordinate at move {ordinal}")]
    MissingCoordinate { ordinal: usize },

    #[error("invalid column letter at move {ordinal}")]
    InvalidColumn { ordinal: usize },

    #[error("invalid row number at move {ordinal}")]
    InvalidRow { ordinal: usize },

    #[error("move {ordinal} at {} is outside the {size}x{size} board", board_name(.x, .y))]
    OutOfBounds {
        ordinal: usize,
        x: u8,
        y: u32,
        size: u8,
    },
}

/// `c4` style name; columns past the last letter fall back to the number.
fn board_name(x: &u8, y: &u32) -> String {
    match column_letter(*x) {
        Some(letter) => format!("{}{y}", letter.to_ascii_lowercase()),
        None => format!("{x}:{y}"),
    }
}

impl MoveError {
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        match self {
            MoveError::InvalidMarker { ordinal }
            | MoveError::InvalidColor { ordinal }
            | MoveError::MissingCoordinate { ordinal }
            | MoveError::InvalidColumn { ordinal }
            | MoveError::InvalidRow { ordinal }
            | MoveError::OutOfBounds { ordinal, .. } => *ordinal,
        }
    }
}
