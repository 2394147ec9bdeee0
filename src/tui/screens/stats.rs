use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{format_date, render_failure, render_loading};
use crate::core::action::Action;
use crate::core::resource::Resource;
use crate::core::state::App;
use crate::library::SavedBook;
use crate::library::shelf::is_favourite;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_list::{BookList, BookListState, BookRow};
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct StatsState {
    pub finished: BookListState,
}

impl StatsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, _app: &App, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Escape => Some(Action::Back),
            TuiEvent::InputChar('r') => Some(Action::Refresh),
            // Read-only list, scrolling only
            _ => {
                self.finished.handle_event(event);
                None
            }
        }
    }
}

fn finished_row(book: &SavedBook) -> BookRow {
    let date = |d: &Option<DateTime<Utc>>| d.as_ref().map(format_date).unwrap_or_default();
    BookRow {
        title: book.title.clone(),
        subtitle: format!("Author: {}", book.author),
        detail: format!(
            "Started: {}  Finished: {}",
            date(&book.started_reading),
            date(&book.finished_reading)
        ),
        badge: is_favourite(book).then_some("👍"),
    }
}

pub struct StatsScreen<'a> {
    pub app: &'a App,
    pub state: &'a mut StatsState,
    pub spinner_frame: usize,
}

impl Component for StatsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(user) = self.app.user.as_ref() else {
            return;
        };

        let [summary_area, status_area, list_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let stats = self.app.stats();
        let summary = vec![
            Line::from(vec![
                Span::raw("Hi, "),
                Span::styled(
                    user.display_name.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
            Line::raw(format!("You are reading: {} books", stats.reading)),
            Line::raw(format!("You have read: {} books", stats.finished)),
        ];
        frame.render_widget(Paragraph::new(summary), summary_area);

        match &self.app.home.library {
            Resource::Loading => {
                render_loading(frame, status_area, self.spinner_frame, "Loading your books...")
            }
            Resource::Failure(message) => render_failure(frame, status_area, message),
            Resource::Success(_) => {}
        }

        let shelf = self.app.home.shelf(user);
        let rows: Vec<BookRow> = shelf.finished.iter().map(|b| finished_row(b)).collect();
        BookList {
            title: "Books read",
            rows: &rows,
            empty_text: "No Books found",
            focused: true,
            state: &mut self.state.finished,
        }
        .render(frame, list_area);
    }
}
