use std::fmt::Display;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

pub const ALL_COLORS: [Color; 2] = [Color::Black, Color::White];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Letter used for this color in move tokens and in the status line.
    pub const fn letter(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'b' => Some(Color::Black),
            'w' => Some(Color::White),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}
