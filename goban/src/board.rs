use std::fmt::Display;

use goban_types::{Cell, Move, Point};
use serde::{Deserialize, Serialize};

/// The live board a record is replayed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; usize::from(size) * usize::from(size)],
        }
    }

    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn cell(&self, point: Point) -> Cell {
        self.cells[point.index(self.size)]
    }

    /// Writes the cell targeted by `mv`.
    /// Coordinates are trusted, they were checked when the move was decoded.
    pub fn apply(&mut self, mv: &Move) {
        self.cells[mv.point().index(self.size)] = mv.cell();
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            cells: self.cells.clone().into_boxed_slice(),
        }
    }
}

/// Frozen copy of a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    size: u8,
    cells: Box<[Cell]>,
}

impl Snapshot {
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn cell(&self, point: Point) -> Cell {
        self.cells[point.index(self.size)]
    }

    /// Rows from row 1 downwards, each ordered by column.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(usize::from(self.size.max(1)))
    }

    #[must_use]
    pub fn stones(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
