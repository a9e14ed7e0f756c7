//! Non-blocking toast banner.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::core::Notifier;

const TOAST_COLOR: Color = Color::Rgb(245, 167, 66);

#[derive(Debug, Clone)]
struct Shown {
    message: String,
    since: Instant,
}

/// A message in the top-right corner that expires on its own.
#[derive(Debug, Clone)]
pub struct Toast {
    lifetime: Duration,
    current: Option<Shown>,
}

impl Toast {
    #[must_use]
    pub const fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            current: None,
        }
    }

    /// Message currently on screen.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.message.as_str())
    }

    /// Drop the message once it has been up for its lifetime.
    pub fn expire(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.since) >= self.lifetime)
        {
            tracing::debug!("toast expired");
            self.current = None;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&self, frame: &mut Frame) {
        let Some(shown) = &self.current else {
            return;
        };

        let area = frame.area();
        let text = format!(" {} ", shown.message);
        let width = (text.chars().count().min(u16::MAX as usize - 2) as u16 + 2).min(area.width);
        let height = 3_u16.min(area.height);
        let toast_area = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1_u16.min(area.height.saturating_sub(height)),
            width,
            height,
        );

        frame.render_widget(Clear, toast_area);
        let para = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::White),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TOAST_COLOR)),
        );
        frame.render_widget(para, toast_area);
    }
}

impl Notifier for Toast {
    fn notify(&mut self, message: &str) {
        tracing::debug!(message, "toast shown");
        self.current = Some(Shown {
            message: message.to_string(),
            since: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_lifetime() {
        let mut toast = Toast::new(Duration::from_millis(500));
        toast.notify("Bad input.");
        let shown_at = Instant::now();

        toast.expire(shown_at);
        assert_eq!(toast.message(), Some("Bad input."));

        toast.expire(shown_at + Duration::from_secs(1));
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn renotify_restarts_the_clock() {
        let mut toast = Toast::new(Duration::from_secs(60));
        toast.notify("first");
        toast.notify("second");
        toast.expire(Instant::now());
        assert_eq!(toast.message(), Some("second"));
    }
}
