//! Repository panel: the child view of the shell.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const LABEL: Color = Color::Rgb(140, 140, 150);
const ACCENT: Color = Color::Rgb(77, 201, 176);
const LINK: Color = Color::Rgb(100, 150, 230);

/// Renders information about one repository.
///
/// Receives the owner and repository name read-only; it has no way to talk
/// back to the shell.
pub trait RepositoryView {
    fn render(&self, frame: &mut Frame, area: Rect, username: &str, repo: &str);
}

/// Default panel: the identifier split into its parts plus a browse link.
#[derive(Debug, Clone)]
pub struct RepositorySummary {
    base_url: String,
}

impl RepositorySummary {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Browse URL for `username/repo`.
    #[must_use]
    pub fn url(&self, username: &str, repo: &str) -> String {
        format!("{}/{username}/{repo}", self.base_url.trim_end_matches('/'))
    }
}

impl RepositoryView for RepositorySummary {
    fn render(&self, frame: &mut Frame, area: Rect, username: &str, repo: &str) {
        let label = Style::default().fg(LABEL);

        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  owner       ", label),
                Span::styled(
                    username.to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("  repository  ", label),
                Span::styled(
                    repo.to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  browse      ", label),
                Span::styled(self.url(username, repo), Style::default().fg(LINK)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" {username}/{repo} "))
            .title_style(Style::default().fg(ACCENT));

        let para = Paragraph::new(content)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(para, area);
    }
}
