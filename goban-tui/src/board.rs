use goban::{GameRecord, Navigator, Snapshot};
use goban_types::column_letter;
use itertools::Itertools;
use ratatui::{
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget},
};

use crate::config::Glyphs;

const MARGIN: &str = "   ";
const SEGMENT: &str = "────";

/// Lays out the board, its labels and the status line as plain text.
///
/// Rows are listed from row 1 downwards, each prefixed by its number;
/// columns are labelled with the same letters the move tokens use.
#[must_use]
pub fn render_lines(
    snapshot: &Snapshot,
    turn_index: usize,
    total_turns: usize,
    black_name: &str,
    white_name: &str,
    glyphs: &Glyphs,
) -> Vec<String> {
    let size = snapshot.size();
    let glyphs = glyphs.by_cell();
    let border = |left: char, mid: char, right: char| {
        let inner = std::iter::repeat(SEGMENT)
            .take(usize::from(size))
            .join(&mid.to_string());
        format!("{MARGIN}{left}{inner}{right}")
    };

    let mut lines = Vec::with_capacity(2 * usize::from(size) + 4);
    lines.push(format!(
        " {MARGIN}{}",
        (1..=size)
            .map(|x| format!("  {}  ", column_letter(x).unwrap_or('?')))
            .join("")
    ));
    lines.push(border('┌', '┬', '┐'));
    for (idx, row) in snapshot.rows().enumerate() {
        if idx > 0 {
            lines.push(border('├', '┼', '┤'));
        }
        let cells = row.iter().map(|cell| format!("{}│", glyphs[*cell])).join("");
        lines.push(format!("{:>2} │{cells}", idx + 1));
    }
    lines.push(border('└', '┴', '┘'));
    lines.push(String::new());
    lines.push(format!(
        "Turn: {}/{total_turns} │ Size: {size}x{size} │ {black_name}(b) vs {white_name}(w)",
        turn_index + 1
    ));
    lines
}

#[derive(Default)]
pub struct BoardView {
    lines: Vec<String>,
    title: String,
}

impl BoardView {
    pub fn on_state_change(&mut self, navigator: &Navigator, record: &GameRecord, glyphs: &Glyphs) {
        let turn = navigator.current();
        self.lines = render_lines(
            &turn.snapshot,
            navigator.cursor(),
            navigator.len(),
            &record.black_name,
            &record.white_name,
            glyphs,
        );
        self.title = format!(
            "Turn {}/{} · move {} {}",
            navigator.cursor() + 1,
            navigator.len(),
            turn.ordinal,
            turn.last_move
        );
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let text: Text = self.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        Paragraph::new(text)
            .style(Style::new().fg(Color::Black).bg(Color::White))
            .block(Block::bordered().title(self.title.as_str()))
    }
}
