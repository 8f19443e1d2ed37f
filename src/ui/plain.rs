//! Plain-text rendering for non-interactive output
//!
//! Produces the same three views as the terminal UI as plain lines, used by
//! `--print` mode.

use std::fmt::Write;

use crate::app::{App, View};
use crate::data::SearchBackend;

/// Formats the current view as plain text
pub fn format_plain<B: SearchBackend>(app: &App<B>) -> String {
    let mut out = String::new();

    match app.view() {
        View::Loading => out.push_str("Loading courses...\n"),
        View::NoTopic => {
            out.push_str("Please create a Roadmap first to get personalised course suggestions\n");
            out.push_str("Browse Courses: coursefinder ai\n");
        }
        View::Results => {
            let _ = writeln!(out, "Courses Related to {}", app.topic);
            out.push('\n');

            if app.courses.is_empty() {
                out.push_str("No courses available for the selected topic\n");
            }

            for course in &app.courses {
                let _ = writeln!(out, "{}", course.title);
                let _ = writeln!(out, "  {}", course.link);
                if !course.snippet.is_empty() {
                    let _ = writeln!(out, "  {}", course.snippet.replace('\n', " "));
                }
                out.push('\n');
            }
        }
    }

    out
}
