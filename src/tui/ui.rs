//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::Position;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Screen regions for one frame.
///
/// Shared by drawing and mouse hit-testing so both agree on where
/// each cell and history entry sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title bar.
    pub title: Rect,
    /// Bordered panel around the board.
    pub board_panel: Rect,
    /// One rectangle per cell, row-major.
    pub cells: [Rect; 9],
    /// Bordered panel around the history list.
    pub history_panel: Rect,
    /// Rows of history entries, one entry per row.
    pub history_list: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits `area` into the frame's regions.
pub fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Min(BOARD_HEIGHT + 2),    // Board + history
            Constraint::Length(3),                // Status
            Constraint::Length(1),                // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 6), Constraint::Min(20)])
        .split(chunks[1]);

    let board_panel = body[0];
    let history_panel = body[1];
    let board_area = center_rect(panel_block("").inner(board_panel), BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }

    Areas {
        title: chunks[0],
        board_panel,
        cells,
        history_panel,
        history_list: panel_block("").inner(history_panel),
        status: chunks[2],
        help: chunks[3],
    }
}

/// Renders the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout(frame.area());
    let view = app.view();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, areas.title);

    draw_board(frame, &areas, app);
    draw_history(frame, &areas, app);

    let status_style = if view.winning_line().is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);

    let help = Paragraph::new("Arrows: move | Enter/1-9: play | Tab: history | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, areas.help);
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_board(frame: &mut Frame, areas: &Areas, app: &App) {
    let focused = *app.focus() == Focus::Board;
    frame.render_widget(
        panel_block("Board").border_style(focus_style(focused)),
        areas.board_panel,
    );

    let view = app.view();
    for pos in Position::ALL {
        let label = view.cells()[pos.to_index()];
        let winning = view
            .winning_line()
            .as_ref()
            .is_some_and(|line| line.contains(&pos));

        let mark_style = match label {
            "X" => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            "O" => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::DarkGray),
        };
        let mark_style = if winning {
            mark_style.bg(Color::Green)
        } else {
            mark_style
        };

        let border_style = if focused && pos == *app.cursor() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let cell = Paragraph::new(Line::from(Span::styled(format!(" {label:1} "), mark_style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(cell, areas.cells[pos.to_index()]);
    }
}

fn draw_history(frame: &mut Frame, areas: &Areas, app: &App) {
    let focused = *app.focus() == Focus::History;
    let view = app.view();

    let items: Vec<ListItem> = view
        .history()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if index == *view.viewed() {
                ListItem::new(format!("{label} *"))
                    .style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(label.as_str())
            }
        })
        .collect();

    let list = List::new(items)
        .block(panel_block("History").border_style(focus_style(focused)))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED));

    let offset = history_offset(app, areas.history_list.height);
    let mut state = ListState::default().with_offset(offset);
    if focused {
        state.select(Some(*app.selected()));
    }
    frame.render_stateful_widget(list, areas.history_panel, &mut state);
}

/// First history entry shown when the list has `rows` visible rows.
///
/// Keeps the selected entry (or the viewed one when the list is not
/// focused) on the last visible row once the list overflows.
pub fn history_offset(app: &App, rows: u16) -> usize {
    let anchor = match app.focus() {
        Focus::History => *app.selected(),
        Focus::Board => app.history().viewed_index(),
    };
    anchor.saturating_sub(usize::from(rows.max(1)) - 1)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
