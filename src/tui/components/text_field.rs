//! # TextField Component
//!
//! Single-line text input used for the email, search query and notes
//! fields.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop set by the
//! owning screen each frame; only a focused field draws the terminal cursor.
//! Long text scrolls horizontally so the cursor stays in view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Enter pressed with non-blank text. The buffer is kept.
    Submit(String),
    /// Text or cursor changed
    Changed,
}

pub struct TextField {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border title (Prop)
    pub title: String,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            focused: true,
            cursor: 0,
        }
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Display column of the cursor, and how many columns to skip so it fits in `width`.
    fn scroll_for(&self, width: usize) -> (usize, usize) {
        let col = self.buffer[..self.cursor].width();
        let skip = (col + 1).saturating_sub(width);
        (col, skip)
    }

    /// The part of the buffer visible after skipping `skip` columns.
    fn visible_text(&self, skip: usize) -> &str {
        let mut skipped = 0;
        for (idx, ch) in self.buffer.char_indices() {
            if skipped >= skip {
                return &self.buffer[idx..];
            }
            skipped += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        }
        ""
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let (col, skip) = self.scroll_for(inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        let input = Paragraph::new(self.visible_text(skip)).block(block);
        frame.render_widget(input, area);

        if self.focused && area.width > 2 && area.height > 2 {
            let x = area.x + 1 + (col - skip) as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single line: pasted newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed)
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                Some(FieldEvent::Changed)
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Submit if !self.buffer.trim().is_empty() => {
                Some(FieldEvent::Submit(self.buffer.trim().to_string()))
            }
            _ => None,
        }
    }
}
