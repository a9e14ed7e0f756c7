//! Single-line text field.
//!
//! The field owns its text. The shell never writes into it; it only reads
//! [`InputField::text`] when Enter is released and supplies the placeholder
//! that shows while the field is empty.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BORDER: Color = Color::Rgb(77, 201, 176);
const DIMMED: Color = Color::Rgb(100, 100, 110);

/// Editable text with a cursor.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    text: String,
    cursor: usize, // Byte offset, always on a char boundary
}

impl InputField {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        // Single line: newlines never enter the field.
        if c == '\n' || c == '\r' {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor, dropping line breaks.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Delete everything before the cursor.
    pub fn delete_to_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete the word before the cursor, along with trailing whitespace.
    ///
    /// `/` counts as a word break so `owner/repo` can be edited one segment
    /// at a time.
    pub fn delete_word(&mut self) {
        let before = self.text[..self.cursor].trim_end();
        let start = match before.char_indices().next_back() {
            // Cursor sits right after a separator: remove just that separator.
            Some((i, '/')) => i,
            _ => before
                .char_indices()
                .rev()
                .find(|&(_, c)| c.is_whitespace() || c == '/')
                .map_or(0, |(i, c)| i + c.len_utf8()),
        };
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

/// Render the field with `placeholder` showing while it is empty.
///
/// Text wider than the box scrolls horizontally so the cursor stays visible.
/// Returns the terminal cursor position.
#[allow(clippy::cast_possible_truncation)]
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    field: &InputField,
    placeholder: &str,
) -> (u16, u16) {
    let width = area.width.saturating_sub(2).max(1) as usize;
    let col = field.text()[..field.cursor()].chars().count();
    // Keep one cell free after the cursor for the insertion point.
    let offset = (col + 1).saturating_sub(width);

    let line = if field.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(DIMMED),
        ))
    } else {
        let visible: String = field.text().chars().skip(offset).take(width).collect();
        Line::from(Span::styled(visible, Style::default().fg(Color::White)))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
        .title(" owner/repo ");

    frame.render_widget(Paragraph::new(line).block(block), area);

    let x = (area.x + 1).saturating_add((col - offset).min(u16::MAX as usize) as u16);
    (x, area.y + 1)
}
