use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::{render_failure, render_loading};
use crate::catalog::CatalogItem;
use crate::core::action::Action;
use crate::core::resource::Resource;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_list::{BookList, BookListState, BookRow, ListEvent};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchFocus {
    #[default]
    Query,
    Results,
}

pub struct SearchState {
    pub query: TextField,
    pub results: BookListState,
    pub focus: SearchFocus,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: TextField::new(" Search "),
            results: BookListState::new(),
            focus: SearchFocus::Query,
        }
    }

    pub fn handle(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        let items = app.search.results.data().map(Vec::as_slice).unwrap_or(&[]);
        self.results.set_len(items.len());

        match (self.focus, event) {
            (_, TuiEvent::Escape) => Some(Action::Back),
            (_, TuiEvent::Tab | TuiEvent::BackTab) => {
                self.toggle_focus(items.len());
                None
            }
            (SearchFocus::Query, TuiEvent::CursorDown) => {
                if !items.is_empty() {
                    self.focus = SearchFocus::Results;
                }
                None
            }
            (SearchFocus::Query, _) => match self.query.handle_event(event)? {
                FieldEvent::Submit(query) => {
                    self.results.reset();
                    Some(Action::SubmitSearch(query))
                }
                FieldEvent::Changed => None,
            },
            // Typing from the results jumps back to the query
            (
                SearchFocus::Results,
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace,
            ) => {
                self.focus = SearchFocus::Query;
                self.handle(app, event)
            }
            (SearchFocus::Results, _) => match self.results.handle_event(event) {
                Some(ListEvent::Open(idx)) => items
                    .get(idx)
                    .map(|item| Action::Navigate(Route::Detail(item.id.clone()))),
                Some(ListEvent::Moved) => None,
                None => {
                    if matches!(event, TuiEvent::CursorUp) {
                        self.focus = SearchFocus::Query;
                    }
                    None
                }
            },
        }
    }

    fn toggle_focus(&mut self, result_count: usize) {
        self.focus = match self.focus {
            SearchFocus::Query if result_count > 0 => SearchFocus::Results,
            _ => SearchFocus::Query,
        };
    }
}

fn catalog_row(item: &CatalogItem) -> BookRow {
    let categories = item.categories();
    let detail = [item.volume_info.published_date.as_str(), categories.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    BookRow {
        title: item.title().to_string(),
        subtitle: item.authors(),
        detail,
        badge: None,
    }
}

pub struct SearchScreen<'a> {
    pub app: &'a App,
    pub state: &'a mut SearchState,
    pub spinner_frame: usize,
}

impl Component for SearchScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [query_area, results_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        self.state.query.focused = self.state.focus == SearchFocus::Query;
        self.state.query.render(frame, query_area);

        let search = &self.app.search;
        match &search.results {
            Resource::Loading => {
                let text = format!("Searching for \"{}\"...", search.query);
                let [line] = Layout::vertical([Constraint::Length(1)]).areas(results_area);
                render_loading(frame, line, self.spinner_frame, &text);
            }
            Resource::Failure(message) => render_failure(frame, results_area, message),
            Resource::Success(items) if items.is_empty() => {
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(" Results for \"{}\" ", search.query));
                frame.render_widget(
                    Paragraph::new("No Books found")
                        .style(Style::default().fg(Color::DarkGray))
                        .block(block),
                    results_area,
                );
            }
            Resource::Success(items) => {
                let rows: Vec<BookRow> = items.iter().map(catalog_row).collect();
                let title = format!("Results for \"{}\"", search.query);
                BookList {
                    title: &title,
                    rows: &rows,
                    empty_text: "No Books found",
                    focused: self.state.focus == SearchFocus::Results,
                    state: &mut self.state.results,
                }
                .render(frame, results_area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VolumeInfo;
    use crate::test_support::{test_app, test_user};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn search_app() -> App {
        let mut app = test_app();
        app.user = Some(test_user());
        app.navigator.replace(Route::Home);
        app.navigator.navigate(Route::Search);
        app
    }

    fn item(id: &str, title: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            volume_info: VolumeInfo {
                title: title.to_string(),
                authors: vec!["Frank Herbert".to_string()],
                published_date: "1965".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn screen_text(app: &App, state: &mut SearchState) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                SearchScreen {
                    app,
                    state,
                    spinner_frame: 0,
                }
                .render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_then_enter_submits() {
        let app = search_app();
        let mut state = SearchState::new();
        for c in "dune".chars() {
            state.handle(&app, &TuiEvent::InputChar(c));
        }
        assert_eq!(
            state.handle(&app, &TuiEvent::Submit),
            Some(Action::SubmitSearch("dune".to_string()))
        );
    }

    #[test]
    fn test_result_enter_opens_detail() {
        let mut app = search_app();
        app.search
            .on_results(Resource::Success(vec![item("vol-1", "Dune"), item("vol-2", "Emma")]));
        let mut state = SearchState::new();
        state.handle(&app, &TuiEvent::CursorDown);
        assert_eq!(state.focus, SearchFocus::Results);
        state.handle(&app, &TuiEvent::CursorDown);
        assert_eq!(
            state.handle(&app, &TuiEvent::Submit),
            Some(Action::Navigate(Route::Detail("vol-2".to_string())))
        );
    }

    #[test]
    fn test_typing_in_results_returns_to_query() {
        let mut app = search_app();
        app.search.on_results(Resource::Success(vec![item("vol-1", "Dune")]));
        let mut state = SearchState::new();
        state.focus = SearchFocus::Results;
        state.handle(&app, &TuiEvent::InputChar('x'));
        assert_eq!(state.focus, SearchFocus::Query);
        assert_eq!(state.query.text(), "x");
    }

    #[test]
    fn test_escape_goes_back() {
        let app = search_app();
        assert_eq!(SearchState::new().handle(&app, &TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_empty_results_show_no_books_found() {
        let mut app = search_app();
        app.search.search("Android");
        app.search.on_results(Resource::Success(vec![]));
        let text = screen_text(&app, &mut SearchState::new());
        assert!(text.contains("No Books found"));
        assert!(!text.contains("Searching"));
    }

    #[test]
    fn test_loading_and_failure() {
        let mut app = search_app();
        app.search.search("Android");
        let text = screen_text(&app, &mut SearchState::new());
        assert!(text.contains("Searching for \"Android\"..."));

        app.search
            .on_results(Resource::Failure("network error: refused".to_string()));
        let text = screen_text(&app, &mut SearchState::new());
        assert!(text.contains("network error: refused"));
    }

    #[test]
    fn test_results_listed() {
        let mut app = search_app();
        app.search.search("dune");
        app.search.on_results(Resource::Success(vec![item("vol-1", "Dune")]));
        let text = screen_text(&app, &mut SearchState::new());
        assert!(text.contains("Dune"));
        assert!(text.contains("Frank Herbert"));
        assert!(text.contains("1965"));
    }
}
