//! TUI application state.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::{InputField, RepositorySummary, RepositoryView, render_input};
use super::notice::Notice;
use crate::config::Config;
use crate::core::{Identifier, Shell};

const TITLE: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);

/// Application state for the TUI.
pub struct App {
    /// Owner of the identifier state.
    pub shell: Shell,
    /// The uncontrolled text field.
    pub input: InputField,
    /// Notification surface.
    pub notice: Notice,
    /// Child view.
    view: Box<dyn RepositoryView>,
    /// Whether the terminal sends real key release events. When it does not,
    /// every press is treated as a press immediately followed by a release.
    reports_release: bool,
}

impl App {
    /// Create the app from configuration, starting at `initial`.
    #[must_use]
    pub fn new(initial: Identifier, config: &Config) -> Self {
        Self::with_view(
            Shell::new(initial),
            Box::new(RepositorySummary::new(config.repository.base_url.clone())),
            Notice::from_config(&config.tui),
        )
    }

    /// Create the app with an explicit child view and notice surface.
    #[must_use]
    pub fn with_view(shell: Shell, view: Box<dyn RepositoryView>, notice: Notice) -> Self {
        Self {
            shell,
            input: InputField::new(),
            notice,
            view,
            reports_release: false,
        }
    }

    /// Tell the app whether key release events will arrive from the terminal.
    pub const fn set_reports_release(&mut self, reports_release: bool) {
        self.reports_release = reports_release;
    }

    /// Handle a key event. Returns true if the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if self.handle_press(key) {
                    return true;
                }
                if !self.reports_release && key.kind == KeyEventKind::Press {
                    self.handle_release(key.code);
                }
            }
            KeyEventKind::Release => {
                if self.reports_release {
                    self.handle_release(key.code);
                }
            }
        }
        false
    }

    /// Insert pasted text into the field.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.notice.is_blocking() {
            self.input.insert_str(text);
        }
    }

    /// Advance time-based state.
    pub fn tick(&mut self, now: Instant) {
        self.notice.tick(now);
    }

    /// Editing and quitting happen on press.
    fn handle_press(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        // Alert is up: presses go nowhere, the release dismisses it.
        if self.notice.is_blocking() {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.input.move_home(),
                KeyCode::Char('e') => self.input.move_end(),
                KeyCode::Char('u') => self.input.delete_to_start(),
                KeyCode::Char('w') => self.input.delete_word(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char(c) => self.input.insert_char(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
        false
    }

    /// Submission and alert dismissal happen on release.
    fn handle_release(&mut self, code: KeyCode) {
        if self.notice.is_blocking() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.notice.dismiss();
            }
            return;
        }

        self.shell
            .handle_key_release(code, self.input.text(), &mut self.notice);
    }

    /// Draw the whole screen.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_header(frame, chunks[0]);
        let (cursor_x, cursor_y) =
            render_input(frame, chunks[1], &self.input, &self.shell.placeholder());
        self.view
            .render(frame, chunks[2], self.shell.username(), self.shell.repo());

        self.notice.render(frame);

        if !self.notice.is_blocking() {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" repo-shell", Style::default().fg(TITLE)),
        Span::styled(
            "  enter to open · esc to quit",
            Style::default().fg(DIMMED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
