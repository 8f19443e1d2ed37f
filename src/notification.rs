//! Transient notifications
//!
//! Short-lived messages drawn at the top-center of the screen on top of
//! whatever view is active, used to report fetch failures and other events.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Info (gray) - for confirmations such as showing a link
    #[default]
    Info,
    /// Warning (yellow) - for recoverable problems like an invalid config file
    Warning,
    /// Error (red) - for failed fetches
    Error,
}

impl NotificationType {
    /// How long a notification of this type stays on screen
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_secs(4),
            NotificationType::Warning => Duration::from_secs(8),
            NotificationType::Error => Duration::from_secs(5),
        }
    }

    /// Foreground, background and border colors
    fn colors(self) -> (Color, Color, Color) {
        match self {
            NotificationType::Info => (Color::White, Color::DarkGray, Color::Gray),
            NotificationType::Warning => (Color::Black, Color::Yellow, Color::Yellow),
            NotificationType::Error => (Color::White, Color::Red, Color::LightRed),
        }
    }
}

/// A single notification with message and timing
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    /// Create a notification with specified type
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    /// Check if notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Holds the notification currently on screen, if any
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
    }

    /// Show an error notification
    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Error));
    }

    /// Dismiss the current notification
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    /// Get current notification if visible
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Render the notification at the top-center of the frame
///
/// Call after rendering the main view so the notification appears on top.
pub fn render_notification(frame: &mut Frame, notification: &NotificationState) {
    let Some(notif) = notification.current() else {
        return;
    };
    let (fg, bg, border) = notif.notification_type.colors();

    let frame_area = frame.area();
    let margin = 1;
    let max_width = frame_area.width.saturating_sub(margin * 2);
    let message_width = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
    let width = message_width.saturating_add(4).min(max_width);
    let height = 3u16.min(frame_area.height);

    // Don't render if area is too small
    if width < 5 || height < 3 {
        return;
    }

    let area = Rect {
        x: frame_area.x + (frame_area.width - width) / 2,
        y: frame_area.y + margin.min(frame_area.height - height),
        width,
        height,
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(fg).bg(bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
