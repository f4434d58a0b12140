//! Stateless UI rendering.

mod board;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use mathgrid::Operation;

/// Renders the full frame: title, board, operations, score, status.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title
            Constraint::Min(15),    // Board
            Constraint::Length(3),  // Operations
            Constraint::Length(1),  // Score
            Constraint::Length(3),  // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Mathgrid")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    board::render_board(frame, chunks[1], app.session(), app.cursor());
    render_operations(frame, chunks[2], app);
    render_score(frame, chunks[3], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[4]);
}

fn render_operations(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let session = app.session();
    let mut spans = Vec::new();

    for op in Operation::ALL {
        let used = !session.pool().contains(op);
        let candidate = session.candidate() == Some(op);
        let style = if used {
            Style::default().fg(Color::DarkGray)
        } else if candidate {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("  {}  ", op.symbol()), style));
        spans.push(Span::raw(" "));
    }

    let ops = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Operations"));
    frame.render_widget(ops, area);
}

fn render_score(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let session = app.session();
    let text = if session.is_over() {
        format!(
            "Final score: {:.2}   Estimated max: {:.2}",
            session.score(),
            session.max_score()
        )
    } else {
        format!("Score: {:.2}", session.score())
    };
    let score = Paragraph::new(text)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(score, area);
}
