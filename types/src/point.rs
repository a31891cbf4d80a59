use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Largest board whose columns can still be named with a single letter.
pub const MAX_BOARD_SIZE: u8 = 25;

/// A 1-indexed board coordinate. `x` is the column, `y` the row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Row-major offset into a `size * size` grid.
    #[must_use]
    #[inline(always)]
    pub const fn index(self, size: u8) -> usize {
        (self.y as usize - 1) * size as usize + (self.x as usize - 1)
    }

    #[must_use]
    pub const fn is_on_board(self, size: u8) -> bool {
        self.x >= 1 && self.y >= 1 && self.x <= size && self.y <= size
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match column_letter(self.x) {
            Some(letter) => write!(f, "{}{}", letter.to_ascii_lowercase(), self.y),
            None => write!(f, "?{}", self.y),
        }
    }
}

/// Column number of a board letter. The letter `i` is skipped so that it is
/// never confused with `1`: `h` is 8 and `j` is 9.
#[must_use]
pub const fn column_value(letter: char) -> Option<u8> {
    let lower = letter.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() || lower == 'i' {
        return None;
    }
    let ordinal = lower as u8 - b'a' + 1;
    if lower < 'i' {
        Some(ordinal)
    } else {
        Some(ordinal - 1)
    }
}

/// Upper-case letter naming column `x`, the inverse of [`column_value`].
#[must_use]
pub const fn column_letter(x: u8) -> Option<char> {
    match x {
        1..=8 => Some((b'A' + x - 1) as char),
        9..=MAX_BOARD_SIZE => Some((b'A' + x) as char),
        _ => None,
    }
}
