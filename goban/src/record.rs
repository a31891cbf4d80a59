use goban_types::{Color, Move, MoveError, MAX_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const FIELD_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    #[error("invalid size {0:?}")]
    NotANumber(String),

    #[error("the size must be more than 0, got {0}")]
    NotPositive(i64),

    #[error("the size must be at most {MAX_BOARD_SIZE}, got {0}")]
    TooLarge(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{0}")]
    InvalidSize(SizeError),

    #[error("the {0} player has no name")]
    MissingPlayerName(Color),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A parsed game record: `<size>;<black>;<white>;<move>;...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: u8,
    pub black_name: String,
    pub white_name: String,
    pub moves: Vec<Move>,
}

impl GameRecord {
    /// Parses a whole record, stopping at the first invalid field.
    #[instrument(level = "debug", skip_all, fields(len = raw.len()))]
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        let mut fields = raw.split(FIELD_SEPARATOR).map(str::trim);
        let size = parse_size(fields.next().unwrap_or_default())?;
        let black_name = parse_name(fields.next(), Color::Black)?;
        let white_name = parse_name(fields.next(), Color::White)?;

        let tokens: Vec<&str> = fields.collect();
        // A terminating ';' or newline leaves one empty field behind
        let tokens = match tokens.split_last() {
            Some((last, rest)) if last.is_empty() => rest,
            _ => &tokens[..],
        };
        let moves = tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| Move::decode(token, idx + 1, size))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(size, moves = moves.len(), "parsed record");
        Ok(Self {
            size,
            black_name,
            white_name,
            moves,
        })
    }

    #[must_use]
    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::Black => &self.black_name,
            Color::White => &self.white_name,
        }
    }
}

fn parse_size(field: &str) -> Result<u8, RecordError> {
    let size = field
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidSize(SizeError::NotANumber(field.to_owned())))?;
    if size < 1 {
        return Err(RecordError::InvalidSize(SizeError::NotPositive(size)));
    }
    u8::try_from(size)
        .ok()
        .filter(|size| *size <= MAX_BOARD_SIZE)
        .ok_or(RecordError::InvalidSize(SizeError::TooLarge(size)))
}

fn parse_name(field: Option<&str>, color: Color) -> Result<String, RecordError> {
    match field {
        Some(name) if !name.is_empty() => Ok(name.to_owned()),
        _ => Err(RecordError::MissingPlayerName(color)),
    }
}

#[cfg(test)]
mod tests {
    use goban_types::Point;

    use super::*;

    #[test]
    fn parse_full_record() {
        let record = GameRecord::parse("3;Ann;Bob;+b:a1;+w:c3").unwrap();
        assert_eq!(record.size, 3);
        assert_eq!(record.name(Color::Black), "Ann");
        assert_eq!(record.name(Color::White), "Bob");
        assert_eq!(
            record.moves,
            vec![
                Move::Place {
                    color: Color::Black,
                    point: Point::new(1, 1)
                },
                Move::Place {
                    color: Color::White,
                    point: Point::new(3, 3)
                },
            ]
        );
    }

    #[test]
    fn record_without_moves() {
        let record = GameRecord::parse("9;Ann;Bob").unwrap();
        assert!(record.moves.is_empty());
        let record = GameRecord::parse("9;Ann;Bob;\n").unwrap();
        assert!(record.moves.is_empty());
    }

    #[test]
    fn trailing_newline_is_ignored() {
        let record = GameRecord::parse("5;Ann;Bob;+b:e5;-:e5\n").unwrap();
        assert_eq!(record.moves.len(), 2);
        assert!(record.moves[1].is_clear());
    }

    #[test]
    fn size_errors() {
        assert_eq!(
            GameRecord::parse("0;Ann;Bob"),
            Err(RecordError::InvalidSize(SizeError::NotPositive(0)))
        );
        assert_eq!(
            GameRecord::parse("-4;Ann;Bob"),
            Err(RecordError::InvalidSize(SizeError::NotPositive(-4)))
        );
        assert_eq!(
            GameRecord::parse("nine;Ann;Bob"),
            Err(RecordError::InvalidSize(SizeError::NotANumber(
                "nine".to_owned()
            )))
        );
        assert_eq!(
            GameRecord::parse(""),
            Err(RecordError::InvalidSize(SizeError::NotANumber(String::new())))
        );
        assert_eq!(
            GameRecord::parse("26;Ann;Bob"),
            Err(RecordError::InvalidSize(SizeError::TooLarge(26)))
        );
    }

    #[test]
    fn size_is_checked_before_moves() {
        assert!(matches!(
            GameRecord::parse("0;Ann;Bob;garbage"),
            Err(RecordError::InvalidSize(_))
        ));
    }

    #[test]
    fn missing_names() {
        assert_eq!(
            GameRecord::parse("3"),
            Err(RecordError::MissingPlayerName(Color::Black))
        );
        assert_eq!(
            GameRecord::parse("3;Ann"),
            Err(RecordError::MissingPlayerName(Color::White))
        );
        assert_eq!(
            GameRecord::parse("3;;Bob"),
            Err(RecordError::MissingPlayerName(Color::Black))
        );
    }

    #[test]
    fn first_bad_move_wins() {
        let err = GameRecord::parse("2;Ann;Bob;+b:a1;+b:c1;x:a1").unwrap_err();
        assert_eq!(
            err,
            RecordError::Move(MoveError::OutOfBounds {
                ordinal: 2,
                x: 3,
                y: 1,
                size: 2
            })
        );
        assert_eq!(err.to_string(), "move 2 at c1 is outside the 2x2 board");
    }

    #[test]
    fn inner_empty_field_is_a_bad_move() {
        assert_eq!(
            GameRecord::parse("3;Ann;Bob;+b:a1;;+w:c3"),
            Err(RecordError::Move(MoveError::InvalidMarker { ordinal: 2 }))
        );
    }
}
