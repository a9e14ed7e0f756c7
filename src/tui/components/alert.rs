//! Modal alert dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::core::Notifier;

const ALERT_BORDER: Color = Color::Rgb(245, 167, 66);
const ALERT_DIM: Color = Color::Rgb(100, 100, 110);

/// A blocking alert. While a message is pending the app routes every key to
/// the dialog instead of the input field.
#[derive(Debug, Clone, Default)]
pub struct AlertDialog {
    message: Option<String>,
}

impl AlertDialog {
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Whether the dialog is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.message.is_some()
    }

    /// Pending message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Close the dialog. Returns the message that was showing.
    pub fn dismiss(&mut self) -> Option<String> {
        let message = self.message.take();
        if message.is_some() {
            tracing::debug!("alert dismissed");
        }
        message
    }

    /// Draw the dialog centered over `frame` if it is open.
    pub fn render(&self, frame: &mut Frame) {
        let Some(message) = self.message.as_deref() else {
            return;
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::White),
            )),
        ];

        render_dialog(frame, "Alert", content, " OK ", 40, 8);
    }
}

impl Notifier for AlertDialog {
    fn notify(&mut self, message: &str) {
        tracing::debug!(message, "alert shown");
        self.message = Some(message.to_string());
    }
}

/// Render a centered dialog overlay with one button.
fn render_dialog(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    button: &str,
    width_percent: u16,
    height: u16,
) {
    let area = frame.area();

    let dialog_width = (area.width * width_percent / 100)
        .max(24)
        .min(area.width);
    let dialog_height = height.min(area.height);

    let x = area.x + area.width.saturating_sub(dialog_width) / 2;
    let y = area.y + area.height.saturating_sub(dialog_height) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(ALERT_BORDER))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ALERT_BORDER));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let content_para = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(content_para, chunks[0]);

    let button_para = Paragraph::new(Line::from(Span::styled(
        button.to_string(),
        Style::default().fg(Color::Black).bg(ALERT_BORDER),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button_para, chunks[1]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "enter or esc to dismiss",
        Style::default().fg(ALERT_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_opens_and_dismiss_closes() {
        let mut alert = AlertDialog::new();
        assert!(!alert.is_open());

        alert.notify("Bad input.");
        assert!(alert.is_open());
        assert_eq!(alert.message(), Some("Bad input."));

        assert_eq!(alert.dismiss().as_deref(), Some("Bad input."));
        assert!(!alert.is_open());
        assert_eq!(alert.dismiss(), None);
    }
}
