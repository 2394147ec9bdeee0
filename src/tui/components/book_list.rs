//! # BookList Component
//!
//! Selectable list of books, shared by the home, search and stats screens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookListState` lives in `TuiState`
//! - `BookList` is created each frame with borrowed rows and state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// One book, already formatted for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookRow {
    pub title: String,
    pub subtitle: String,
    pub detail: String,
    /// Short marker drawn after the title (e.g. a thumbs-up)
    pub badge: Option<&'static str>,
}

/// Persistent selection state for a list.
#[derive(Debug, Default)]
pub struct BookListState {
    pub selected: usize,
    /// Number of rows, refreshed on every render and by the owning screen
    len: usize,
    list_state: ListState,
}

/// Events emitted by a book list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Enter on the row at this index
    Open(usize),
    Moved,
}

impl BookListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the row count and keep the selection inside it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    pub fn selected(&self) -> Option<usize> {
        (self.selected < self.len).then_some(self.selected)
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
        self.set_len(self.len);
    }
}

impl EventHandler for BookListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp if self.selected > 0 => {
                self.selected -= 1;
                self.list_state.select(Some(self.selected));
                Some(ListEvent::Moved)
            }
            TuiEvent::CursorDown if self.selected + 1 < self.len => {
                self.selected += 1;
                self.list_state.select(Some(self.selected));
                Some(ListEvent::Moved)
            }
            TuiEvent::CursorHome => {
                self.selected = 0;
                self.list_state.select(Some(0));
                Some(ListEvent::Moved)
            }
            TuiEvent::CursorEnd => {
                self.selected = self.len - 1;
                self.list_state.select(Some(self.selected));
                Some(ListEvent::Moved)
            }
            TuiEvent::Submit => Some(ListEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct BookList<'a> {
    pub title: &'a str,
    pub rows: &'a [BookRow],
    pub empty_text: &'a str,
    /// Draw the selection highlight
    pub focused: bool,
    pub state: &'a mut BookListState,
}

impl Component for BookList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.rows.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ({}) ", self.title, self.rows.len()));

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let badge = row.badge.map(|b| format!(" {b}")).unwrap_or_default();
                let title_width = inner_width.saturating_sub(badge.width());
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        truncate_to_width(&row.title, title_width),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(badge, Style::default().fg(Color::Yellow)),
                ])];
                for extra in [&row.subtitle, &row.detail] {
                    if !extra.is_empty() {
                        lines.push(Line::styled(
                            truncate_to_width(extra, inner_width),
                            Style::default().fg(Color::Gray),
                        ));
                    }
                }
                ListItem::new(lines)
            })
            .collect();

        let highlight = if self.focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(if self.focused { "▌ " } else { "  " });

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate `s` to at most `max_width` display columns, adding "..." if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
