//! Course results screen rendering
//!
//! Renders the heading for the current topic followed by a grid of course
//! cards, or a message when the search returned nothing.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{CourseItem, SearchBackend};
use crate::fetcher::ResultSource;

/// Minimum width of a course card, borders included
pub const CARD_WIDTH: u16 = 34;

/// Height of a course card, borders included
pub const CARD_HEIGHT: u16 = 7;

/// Number of card columns that fit in the given width (at least one)
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

/// Index of the first grid row to draw so the selected row stays visible
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    (selected_row + 1).saturating_sub(visible_rows.max(1))
}

/// Renders the results view for the current topic
pub fn render<B: SearchBackend>(frame: &mut Frame, app: &App<B>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_heading(frame, chunks[0], &app.topic);

    if app.courses.is_empty() {
        render_empty(frame, chunks[1]);
    } else {
        render_grid(frame, chunks[1], &app.courses, app.selected_index);
    }

    render_footer(frame, chunks[2], app);
}

/// Renders the "Courses Related to {topic}" heading
fn render_heading(frame: &mut Frame, area: Rect, topic: &str) {
    let heading = Paragraph::new(Line::from(Span::styled(
        format!("Courses Related to {}", topic),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(heading, area);
}

/// Renders the message shown when the search returned no courses
fn render_empty(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("No courses available for the selected topic")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let inner = Rect {
        y: area.y + area.height / 3,
        height: area.height.saturating_sub(area.height / 3).min(1),
        ..area
    };
    frame.render_widget(message, inner);
}

/// Renders the visible rows of the card grid
fn render_grid(frame: &mut Frame, area: Rect, courses: &[CourseItem], selected: usize) {
    let columns = grid_columns(area.width);
    let card_width = area.width / columns as u16;
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    if card_width == 0 || visible_rows == 0 {
        return;
    }

    let first_row = first_visible_row(selected / columns, visible_rows);

    for row in 0..visible_rows {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            let Some(course) = courses.get(index) else {
                return;
            };

            let card_area = Rect {
                x: area.x + col as u16 * card_width,
                y: area.y + row as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            render_card(frame, card_area, course, index == selected);
        }
    }
}

/// Renders a single course card
fn render_card(frame: &mut Frame, area: Rect, course: &CourseItem, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if course.title.is_empty() {
        "(untitled)"
    } else {
        course.title.as_str()
    };

    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            course.snippet.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(card, area);
}

/// Renders the footer with result provenance and key hints
fn render_footer<B: SearchBackend>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let source = match app.source {
        Some(ResultSource::Network) => "live results".to_string(),
        Some(ResultSource::Cache { cached_at }) => format!(
            "cached {}",
            cached_at.with_timezone(&Local).format("%H:%M")
        ),
        None => String::new(),
    };

    let mut spans = Vec::new();
    if !app.courses.is_empty() {
        spans.push(Span::styled(
            format!(" {}/{} ", app.selected_index + 1, app.courses.len()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if !source.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", source),
            Style::default().fg(Color::Green),
        ));
    }
    spans.push(Span::styled(
        " ←↑↓→: select  Enter: link  b: AI courses  r: reload  ?: help  q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
