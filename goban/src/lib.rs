#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
//! Record parsing and board-history reconstruction for replaying a game
//! move by move.

pub mod board;
pub mod history;
pub mod navigation;
pub mod record;

pub use board::{Board, Snapshot};
pub use history::{History, Turn};
pub use navigation::{BoundaryPolicy, EmptyHistory, NavEvent, Navigator, Transition};
pub use record::{GameRecord, RecordError, SizeError};
