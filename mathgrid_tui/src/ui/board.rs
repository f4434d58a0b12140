//! Board rendering: a 5x5 grid of numbered cells.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use mathgrid::{Coord, Session, BOARD_SIZE};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the board with selection and cursor highlights.
pub fn render_board(frame: &mut Frame, area: Rect, session: &Session, cursor: Coord) {
    let board_area = center_rect(
        area,
        CELL_WIDTH * BOARD_SIZE as u16,
        CELL_HEIGHT * BOARD_SIZE as u16,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); BOARD_SIZE])
        .split(board_area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); BOARD_SIZE])
            .split(*row_area);

        for (col_idx, cell_area) in cols.iter().enumerate() {
            let coord = Coord {
                row: row_idx,
                col: col_idx,
            };
            render_cell(frame, *cell_area, session, coord, coord == cursor);
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, session: &Session, coord: Coord, at_cursor: bool) {
    let Some(cell) = session.board().get(coord) else {
        return;
    };
    let selected = session.selection().contains(&coord);

    let text_style = if cell.disabled {
        Style::default().fg(Color::DarkGray)
    } else if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if at_cursor {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(cell.value.to_string())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
