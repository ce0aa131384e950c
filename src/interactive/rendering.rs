//! TUI rendering with ratatui
//!
//! Draws the guess grid, the on-screen keyboard with hint colors, and the
//! status areas from a read-only session snapshot.

use super::app::App;
use crate::core::LetterScore;
use crate::game::{GameStatus, KEYBOARD_ROWS, MAX_ATTEMPTS, MessageStyle, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Guess grid
            Constraint::Length(3),                   // Message
            Constraint::Length(5),                   // Keyboard
            Constraint::Length(3),                   // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn score_style(score: LetterScore) -> Style {
    match score {
        LetterScore::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterScore::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterScore::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let history = session.history();
    let pending_row = history.len();

    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS);
    for row in 0..MAX_ATTEMPTS {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let cell = if row < history.len() {
                let record = &history[row];
                let letter = (record.word.char_at(col) as char).to_ascii_uppercase();
                if col < session.revealed_count(row) {
                    Span::styled(
                        format!(" {letter} "),
                        score_style(record.feedback.score_at(col)),
                    )
                } else {
                    // Submitted but not yet revealed by the staged animation
                    Span::styled(
                        format!(" {letter} "),
                        Style::default().add_modifier(Modifier::BOLD),
                    )
                }
            } else if row == pending_row && session.status() == GameStatus::Playing {
                match session.pending().as_bytes().get(col) {
                    Some(&byte) => Span::styled(
                        format!(" {} ", (byte as char).to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                }
            } else {
                Span::styled(" · ", Style::default().fg(Color::DarkGray))
            };

            spans.push(cell);
            if col + 1 < WORD_LENGTH {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.session.message() {
        Some(message) => {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (
                message.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            format!("Guesses remaining: {}", app.session.remaining_attempts()),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.hints();

    let mut lines: Vec<Line> = Vec::with_capacity(KEYBOARD_ROWS.len());
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();

        // The bottom row carries the action keys, mirroring the on-screen layout
        if i == KEYBOARD_ROWS.len() - 1 {
            spans.push(Span::styled(" ENTER ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" "));
        }

        for letter in row.bytes() {
            let style = match hints.get(letter) {
                Some(score) => score_style(score),
                None => Style::default().fg(Color::White).bg(Color::Black),
            };
            spans.push(Span::styled(
                format!(" {} ", (letter as char).to_ascii_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        if i == KEYBOARD_ROWS.len() - 1 {
            spans.push(Span::styled(" ⌫ ", Style::default().fg(Color::Cyan)));
        }

        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status_text = match app.session.status() {
        GameStatus::Playing => "Status: Playing",
        GameStatus::Won => "Status: Won",
        GameStatus::Lost => "Status: Lost",
    };
    let status = Paragraph::new(status_text).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let attempts = Paragraph::new(format!(
        "Attempts: {}/{}",
        app.session.history().len(),
        MAX_ATTEMPTS
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let help_text = if app.session.status() == GameStatus::Playing {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    } else {
        "n: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
