//! Framework-independent snapshot of what the game renders.

use super::history::GameHistory;
use super::rules::winning_line;
use super::Position;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Everything a frontend draws for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Cell labels in row-major order: blank, `X` or `O`.
    cells: [&'static str; 9],
    /// `"Winner: X"` or `"Next player: O"`.
    status: String,
    /// Completed line on the viewed board, if any.
    winning_line: Option<[Position; 3]>,
    /// One label per history entry.
    history: Vec<String>,
    /// Index of the viewed history entry.
    viewed: usize,
}

impl GameView {
    /// Captures the view of `history`'s viewed snapshot.
    #[instrument(skip(history), fields(viewed = history.viewed_index()))]
    pub fn from_history(history: &GameHistory) -> Self {
        let board = history.current_board();
        Self {
            cells: Position::ALL.map(|pos| board.get(pos).label()),
            status: history.status().to_string(),
            winning_line: winning_line(board),
            history: history.move_labels(),
            viewed: history.viewed_index(),
        }
    }

    /// Plain-text rendering: grid, status line, then the history list
    /// with the viewed entry marked.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let label = self.cells[row * 3 + col];
                    format!(" {} ", if label.is_empty() { " " } else { label })
                })
                .collect();
            out.push_str(&cells.join("|"));
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }
        out.push('\n');
        out.push_str(&self.status);
        out.push('\n');
        out.push('\n');
        for (index, label) in self.history.iter().enumerate() {
            let marker = if index == self.viewed { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}. {label}\n", index + 1));
        }
        out
    }
}
