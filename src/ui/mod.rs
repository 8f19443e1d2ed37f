//! UI rendering module for Course Finder CLI
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod course_list;
pub mod help_overlay;
pub mod plain;
pub mod prompt;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};
use crate::data::SearchBackend;
use crate::notification::render_notification;

pub use course_list::{grid_columns, render as render_course_list};
pub use help_overlay::render as render_help_overlay;
pub use plain::format_plain;
pub use prompt::render as render_prompt;

/// Renders the UI based on the current application view
pub fn render<B: SearchBackend>(frame: &mut Frame, app: &App<B>) {
    match app.view() {
        View::Loading => render_loading(frame),
        View::NoTopic => render_prompt(frame),
        View::Results => render_course_list(frame, app),
    }

    if app.show_help {
        render_help_overlay(frame);
    }

    render_notification(frame, &app.notification);
}

/// Renders a loading message while courses are being fetched
pub fn render_loading(frame: &mut Frame) {
    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading courses...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}
