//! Update form: notes, reading dates, rating, and the Update / Delete buttons.
//!
//! Focus moves with Tab / Up / Down. Enter or Space activates the focused
//! row; on the rating row Left/Right or a digit sets the stars. Delete opens
//! a confirm dialog before anything is sent.

use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{format_date, render_failure, render_loading, stars};
use crate::core::action::Action;
use crate::core::resource::Resource;
use crate::core::state::App;
use crate::core::viewmodel::UpdateEdit;
use crate::library::types::MAX_RATING;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::confirm::ConfirmDialog;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFocus {
    Notes,
    Started,
    Finished,
    Rating,
    UpdateButton,
    DeleteButton,
}

const FOCUS_ORDER: [UpdateFocus; 6] = [
    UpdateFocus::Notes,
    UpdateFocus::Started,
    UpdateFocus::Finished,
    UpdateFocus::Rating,
    UpdateFocus::UpdateButton,
    UpdateFocus::DeleteButton,
];

pub struct UpdateFormState {
    pub focus: UpdateFocus,
    pub notes: TextField,
    pub confirm_delete: bool,
    /// Document the form was last opened on
    loaded_id: String,
}

impl Default for UpdateFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateFormState {
    pub fn new() -> Self {
        Self {
            focus: UpdateFocus::Notes,
            notes: TextField::new(" Your thoughts "),
            confirm_delete: false,
            loaded_id: String::new(),
        }
    }

    /// Refill the form when a different book is shown.
    pub fn sync(&mut self, app: &App) {
        let Some(book) = app.update.book.data() else {
            return;
        };
        if book.id != self.loaded_id {
            self.loaded_id = book.id.clone();
            self.focus = UpdateFocus::Notes;
            self.confirm_delete = false;
        }
        // Every keystroke is mirrored into the draft, so a mismatch means
        // the draft was reloaded underneath us
        if self.notes.text() != app.update.draft.notes {
            self.notes.set_text(&app.update.draft.notes);
        }
    }

    fn step_focus(&mut self, forward: bool) {
        let idx = FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        let len = FOCUS_ORDER.len();
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        self.focus = FOCUS_ORDER[next];
    }

    pub fn handle(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        self.sync(app);
        if self.confirm_delete {
            return match event {
                TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') => {
                    self.confirm_delete = false;
                    Some(Action::DeleteBook)
                }
                TuiEvent::InputChar('n') | TuiEvent::InputChar('N') | TuiEvent::Escape => {
                    self.confirm_delete = false;
                    None
                }
                _ => None,
            };
        }

        match event {
            TuiEvent::Escape => return Some(Action::Back),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.step_focus(true);
                return None;
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.step_focus(false);
                return None;
            }
            _ => {}
        }
        // Nothing to edit until the book resolves
        app.update.book.data()?;

        let activate = matches!(event, TuiEvent::Submit | TuiEvent::InputChar(' '));
        match self.focus {
            UpdateFocus::Notes => match self.notes.handle_event(event)? {
                FieldEvent::Changed => Some(Action::EditUpdate(UpdateEdit::Notes(
                    self.notes.text().to_string(),
                ))),
                FieldEvent::Submit(_) => {
                    self.step_focus(true);
                    None
                }
            },
            UpdateFocus::Started if activate => Some(Action::EditUpdate(UpdateEdit::ToggleStarted)),
            UpdateFocus::Finished if activate => {
                Some(Action::EditUpdate(UpdateEdit::ToggleFinished))
            }
            UpdateFocus::Rating => {
                let current = app.update.draft.rating;
                let rating = match event {
                    TuiEvent::CursorLeft => current.saturating_sub(1),
                    TuiEvent::CursorRight => (current + 1).min(MAX_RATING),
                    TuiEvent::InputChar(c) => {
                        let digit = c.to_digit(10)?;
                        u8::try_from(digit).ok()?.min(MAX_RATING)
                    }
                    _ => return None,
                };
                Some(Action::EditUpdate(UpdateEdit::Rating(rating)))
            }
            UpdateFocus::UpdateButton if activate => Some(Action::SubmitUpdate(Utc::now())),
            UpdateFocus::DeleteButton if activate => {
                self.confirm_delete = true;
                None
            }
            _ => None,
        }
    }
}

pub struct UpdateScreen<'a> {
    pub app: &'a App,
    pub state: &'a mut UpdateFormState,
    pub spinner_frame: usize,
}

impl UpdateScreen<'_> {
    fn row_style(&self, focus: UpdateFocus) -> Style {
        if self.state.focus == focus {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

impl Component for UpdateScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.app);
        let vm = &self.app.update;

        let book = match &vm.book {
            Resource::Loading => {
                let [line] = Layout::vertical([Constraint::Length(1)]).areas(area);
                render_loading(frame, line, self.spinner_frame, "Loading book...");
                return;
            }
            Resource::Failure(message) => {
                render_failure(frame, area, message);
                return;
            }
            Resource::Success(book) => book,
        };

        let [header_area, notes_area, rows_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = vec![
            Line::styled(
                book.title.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(book.author.as_str(), Style::default().fg(Color::Gray)),
            Line::styled(
                book.published_date.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(header), header_area);

        self.state.notes.focused = self.state.focus == UpdateFocus::Notes;
        self.state.notes.render(frame, notes_area);

        let checkbox = |checked: bool| if checked { "[x] " } else { "[ ] " };
        let started = match &book.started_reading {
            Some(date) => format!("Started On: {}", format_date(date)),
            None => format!("{}Start Reading", checkbox(vm.draft.mark_started)),
        };
        let finished = match &book.finished_reading {
            Some(date) => format!("Finished On: {}", format_date(date)),
            None => format!("{}Mark as Read", checkbox(vm.draft.mark_finished)),
        };

        let rows = vec![
            Line::styled(started, self.row_style(UpdateFocus::Started)),
            Line::styled(finished, self.row_style(UpdateFocus::Finished)),
            Line::default(),
            Line::from(vec![
                Span::styled("Rating: ", self.row_style(UpdateFocus::Rating)),
                Span::styled(
                    stars(vm.draft.rating),
                    self.row_style(UpdateFocus::Rating).fg(Color::Yellow),
                ),
                Span::styled(
                    format!(" ({}/{})", vm.draft.rating, MAX_RATING),
                    self.row_style(UpdateFocus::Rating),
                ),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("[ Update ]", self.row_style(UpdateFocus::UpdateButton)),
                Span::raw("   "),
                Span::styled(
                    "[ Delete ]",
                    self.row_style(UpdateFocus::DeleteButton).fg(Color::Red),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(rows), rows_area);

        if self.state.confirm_delete {
            ConfirmDialog {
                title: "Delete Book",
                message: "Are you sure you want to delete this book? This action is not reversible.",
            }
            .render(frame, area);
        }
    }
}
