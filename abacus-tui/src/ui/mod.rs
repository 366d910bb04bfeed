//! UI rendering
//!
//! Rendering functions that transform state into terminal frames.
//! They read `AppState` and draw; they never change it.

use crate::app::keypad::{self, KeyRole};
use crate::app::AppState;
use libabacus::engine::format_number;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let [display_area, keypad_area, status_area] = screen_layout(area);

    render_display(frame, display_area, state);
    render_keypad(frame, keypad_area, state);
    render_status_bar(frame, status_area, state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Split the screen into display, keypad, and status bar
fn screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Display
            Constraint::Min(10),    // Keypad
            Constraint::Length(4),  // Status bar
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Rectangles of every keypad cell, indexed `[row][col]`
fn keypad_cells(area: Rect) -> Vec<Vec<Rect>> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, keypad::ROWS as u32); keypad::ROWS])
        .split(area);

    rows.iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, keypad::COLS as u32); keypad::COLS])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Keypad cell under a terminal position, for mouse clicks
pub fn keypad_cell_at(area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let [_, keypad_area, _] = screen_layout(area);

    keypad_cells(keypad_area)
        .iter()
        .enumerate()
        .find_map(|(r, cells)| {
            cells
                .iter()
                .position(|cell| contains(cell, column, row))
                .map(|c| (r, c))
        })
}

fn contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Render the numeric display
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut text_style = Style::default().add_modifier(Modifier::BOLD);
    let mut block_style = Style::default();
    if state.config.colors_enabled {
        text_style = text_style.fg(Color::White);
        block_style = block_style.bg(Color::Black);
    }
    if state.calculator.is_error() && state.config.colors_enabled {
        text_style = text_style.fg(Color::Red);
    }

    let display = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(state.display(), text_style)),
    ])
    .block(
        Block::default()
            .title(" Abacus ")
            .borders(Borders::ALL)
            .style(block_style),
    )
    .alignment(Alignment::Right);

    frame.render_widget(display, area);
}

/// Render the keypad grid
fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    for (row, cells) in keypad_cells(area).iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let (Some(label), Some(intent)) = (keypad::label_at(row, col), keypad::intent_at(row, col))
            else {
                continue;
            };

            let focused = state.focus == (row, col);
            let mut key_style = Style::default().add_modifier(Modifier::BOLD);
            let mut border_style = Style::default();

            if state.config.colors_enabled {
                key_style = key_style.fg(Color::White).bg(role_color(KeyRole::of(&intent)));
            }
            if focused {
                border_style = border_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                if !state.config.colors_enabled {
                    key_style = key_style.add_modifier(Modifier::REVERSED);
                }
            }

            let key = Paragraph::new(vertically_centered(
                key_label(label, state.config.unicode_enabled),
                cell.height,
            ))
            .style(key_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

            frame.render_widget(key, *cell);
        }
    }
}

fn role_color(role: KeyRole) -> Color {
    match role {
        KeyRole::Clear => Color::Red,
        KeyRole::Edit => Color::Gray,
        KeyRole::Operator => Color::Yellow,
        KeyRole::Equals => Color::Green,
        KeyRole::Digit => Color::DarkGray,
    }
}

/// ASCII fallback for keypad glyphs
fn key_label(label: &'static str, unicode: bool) -> &'static str {
    if unicode {
        return label;
    }
    match label {
        "←" => "<-",
        "±" => "+/-",
        "√" => "sqrt",
        other => other,
    }
}

fn vertically_centered(label: &str, height: u16) -> Vec<Line<'_>> {
    // Borders take two rows.
    let padding = height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(label));
    lines
}

/// Render status bar with the pending operation and hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let calculator = &state.calculator;

    let pending = match calculator.pending_operator() {
        Some(op) if op.is_binary() => format!("{} {}", format_number(calculator.operand1()), op),
        Some(op) => format!("{} {}", op, format_number(calculator.operand1())),
        None => "Ready".to_string(),
    };

    let mut first_line = vec![Span::styled(
        pending,
        if state.config.colors_enabled {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        },
    )];
    if let Some(ref message) = state.status.message {
        first_line.push(Span::raw(" | "));
        first_line.push(Span::raw(message.as_str()));
    }

    let hints = if state.mouse_enabled {
        "F1: Help | Arrows+Space: Press | Click: Press | m: Mouse off | q: Quit"
    } else {
        "F1: Help | Arrows+Space: Press | m: Mouse on | q: Quit"
    };

    let lines = vec![
        Line::from(first_line),
        Line::from(Span::styled(hints, Style::default().fg(Color::Gray))),
    ];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, _state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("  0-9 .        - Digits"),
        Line::from("  + - * /      - Operators"),
        Line::from("  Enter, =     - Equals"),
        Line::from("  r, s         - Square root"),
        Line::from("  n, ~         - Toggle sign"),
        Line::from("  Backspace    - Delete last digit"),
        Line::from("  Delete, c    - Clear"),
        Line::from("  Arrows       - Move focus"),
        Line::from("  Space        - Press focused key"),
        Line::from("  m            - Toggle mouse"),
        Line::from("  q, Ctrl+C    - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(ratatui::widgets::Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
