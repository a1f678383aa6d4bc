//! TUI rendering with ratatui
//!
//! The whole screen is redrawn from `App` state every frame, so the gallows is
//! always a direct function of the remaining attempts.

use super::app::{App, Focus, KEYBOARD_ROWS, MessageStyle};
use crate::core::gallows::{self, CANVAS_SIZE, Stroke};
use crate::core::{CategoryFilter, MAX_ATTEMPTS};
use crate::output::formatters::{attempts_label, guessed_list, masked_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Category selector
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Guess entry
            Constraint::Length(5), // Virtual keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_categories(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Gallows
            Constraint::Percentage(55), // Round info
        ])
        .split(chunks[2]);

    render_gallows(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    render_entry(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_status(f, app, chunks[5]);

    if let Some(notice) = app.notices.front() {
        render_notice(f, &notice.title, &notice.text);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let music = if app.audio.music_enabled() {
        "♪ on"
    } else {
        "♪ off"
    };
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title_top(Line::from(format!(" {music} ")).right_aligned())
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_categories(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for choice in CategoryFilter::CHOICES {
        let style = if choice == app.filter {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", choice.name()), style));
        spans.push(Span::raw(" "));
    }

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Category ([ / ] to change, F2 to start) ")
            .borders(Borders::ALL),
    );
    f.render_widget(selector, area);
}

/// Convert drawing coordinates (origin top left) to canvas coordinates (origin bottom left)
fn flip(y: f64) -> f64 {
    CANVAS_SIZE - y
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let strokes = gallows::strokes(app.round.attempts_remaining());
    let color = if app.round.attempts_remaining() <= 1 {
        Color::Red
    } else {
        Color::White
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_SIZE])
        .y_bounds([0.0, CANVAS_SIZE])
        .paint(move |ctx| {
            for stroke in &strokes {
                match *stroke {
                    Stroke::Line { x1, y1, x2, y2 } => {
                        ctx.draw(&CanvasLine::new(x1, flip(y1), x2, flip(y2), color));
                    }
                    Stroke::Circle { x, y, radius } => ctx.draw(&Circle {
                        x,
                        y: flip(y),
                        radius,
                        color,
                    }),
                }
            }
        });

    f.render_widget(canvas, area);
}

/// Hint affordance state, shown in the round panel title
fn hint_span(available: bool) -> Span<'static> {
    if available {
        Span::styled(
            " F3: Hint available ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" Hint unavailable ", Style::default().fg(Color::DarkGray))
    }
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let round = &app.round;
    let attempts_style = if round.attempts_remaining() <= 2 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Category: "),
            Span::styled(
                round.category().to_string(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            masked_word(round),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            attempts_label(round.attempts_remaining()),
            attempts_style,
        )),
        Line::from(vec![
            Span::raw("Guessed letters: "),
            Span::styled(guessed_list(round.guessed()), Style::default().fg(Color::Blue)),
        ]),
    ];

    // Borders plus two spare rows for a wrapped guessed-letters line
    let panel_height = content.len() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(panel_height), // Round state
            Constraint::Length(5),         // Messages
        ])
        .split(area);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .title_top(Line::from(hint_span(round.hint_available())).right_aligned())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn focus_color(app: &App, focus: Focus) -> Color {
    if app.focus == focus {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

fn render_entry(f: &mut Frame, app: &App, area: Rect) {
    let color = focus_color(app, Focus::Entry);
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Guess a letter | Enter to submit | TAB for keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, keys)| {
            let spans: Vec<Span> = keys
                .chars()
                .enumerate()
                .map(|(col, letter)| {
                    let mut style = if app.key_enabled(letter) {
                        Style::default().fg(Color::White)
                    } else {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    if app.focus == Focus::Keyboard && app.key_cursor == (row, col) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard | arrows + Enter ")
            .borders(Borders::ALL)
            .style(Style::default().fg(focus_color(app, Focus::Keyboard))),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Won: {} | Misses: {}/{}",
        app.stats.rounds_played,
        app.stats.rounds_won,
        app.round.misses(),
        MAX_ATTEMPTS
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("F2: Start | F3: Hint | F4: Music | F5: Reset | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// Centered rectangle taking the given percentage of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_notice(f: &mut Frame, title: &str, text: &str) {
    let area = centered_rect(60, 25, f.area());
    let content = vec![
        Line::from(""),
        Line::from(text.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().add_modifier(Modifier::REVERSED),
        )),
    ];
    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
