use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{format_date, render_failure, render_loading, stars};
use crate::core::action::Action;
use crate::core::resource::Resource;
use crate::core::route::Route;
use crate::core::state::App;
use crate::library::SavedBook;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_list::{BookList, BookListState, BookRow, ListEvent};
use crate::tui::event::TuiEvent;

const EMPTY_SHELF: &str = "No Books found. Add books to read.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HomeSection {
    #[default]
    ReadingNow,
    ReadingList,
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub section: HomeSection,
    pub reading_now: BookListState,
    pub reading_list: BookListState,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::InputChar('/') => return Some(Action::Navigate(Route::Search)),
            TuiEvent::InputChar('t') => return Some(Action::Navigate(Route::Stats)),
            TuiEvent::InputChar('r') => return Some(Action::Refresh),
            TuiEvent::InputChar('l') => return Some(Action::SignOut),
            TuiEvent::InputChar('q') => return Some(Action::Quit),
            TuiEvent::Tab | TuiEvent::BackTab => {
                self.section = match self.section {
                    HomeSection::ReadingNow => HomeSection::ReadingList,
                    HomeSection::ReadingList => HomeSection::ReadingNow,
                };
                return None;
            }
            _ => {}
        }

        let user = app.user.as_ref()?;
        let shelf = app.home.shelf(user);
        let (books, list) = match self.section {
            HomeSection::ReadingNow => (&shelf.reading_now, &mut self.reading_now),
            HomeSection::ReadingList => (&shelf.not_started, &mut self.reading_list),
        };
        list.set_len(books.len());
        match list.handle_event(event)? {
            ListEvent::Open(idx) => books
                .get(idx)
                .map(|book| Action::Navigate(Route::Update(book.google_book_id.clone()))),
            ListEvent::Moved => None,
        }
    }
}

fn saved_row(book: &SavedBook) -> BookRow {
    let progress = match &book.started_reading {
        Some(date) => format!("Started {}", format_date(date)),
        None => "Not started".to_string(),
    };
    BookRow {
        title: book.title.clone(),
        subtitle: book.author.clone(),
        detail: format!("{}  {}", stars(book.stars()), progress),
        badge: None,
    }
}

pub struct HomeScreen<'a> {
    pub app: &'a App,
    pub state: &'a mut HomeState,
    pub spinner_frame: usize,
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(user) = self.app.user.as_ref() else {
            return;
        };

        let [greeting_area, status_area, lists_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let stats = self.app.stats();
        let greeting = vec![
            Line::from(vec![
                Span::raw("Hi, "),
                Span::styled(
                    user.display_name.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("! Your reading activity"),
            ]),
            Line::styled(
                format!(
                    "{} reading now · {} on your list · {} finished",
                    stats.reading, stats.not_started, stats.finished
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(greeting), greeting_area);

        match &self.app.home.library {
            Resource::Loading => {
                render_loading(frame, status_area, self.spinner_frame, "Loading your books...")
            }
            Resource::Failure(message) => render_failure(frame, status_area, message),
            Resource::Success(_) => {}
        }

        let shelf = self.app.home.shelf(user);
        let reading_rows: Vec<BookRow> = shelf.reading_now.iter().map(|b| saved_row(b)).collect();
        let list_rows: Vec<BookRow> = shelf.not_started.iter().map(|b| saved_row(b)).collect();

        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(lists_area);

        BookList {
            title: "Reading now",
            rows: &reading_rows,
            empty_text: EMPTY_SHELF,
            focused: self.state.section == HomeSection::ReadingNow,
            state: &mut self.state.reading_now,
        }
        .render(frame, top);

        BookList {
            title: "Reading list",
            rows: &list_rows,
            empty_text: EMPTY_SHELF,
            focused: self.state.section == HomeSection::ReadingList,
            state: &mut self.state.reading_list,
        }
        .render(frame, bottom);
    }
}
