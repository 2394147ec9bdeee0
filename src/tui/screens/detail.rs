use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::{render_failure, render_loading};
use crate::catalog::CatalogItem;
use crate::core::action::Action;
use crate::core::resource::Resource;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct DetailState {
    pub scroll: ScrollViewState,
    /// Book the scroll offset belongs to
    book_id: String,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, _app: &App, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::InputChar('s') => Some(Action::SaveBook),
            TuiEvent::Escape => Some(Action::Back),
            TuiEvent::CursorUp => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll.scroll_page_down();
                None
            }
            TuiEvent::CursorHome => {
                self.scroll.scroll_to_top();
                None
            }
            _ => None,
        }
    }
}

fn header_lines(item: &CatalogItem) -> Vec<Line<'_>> {
    let label = |name: &'static str| Span::styled(name, Style::default().fg(Color::DarkGray));
    let info = &item.volume_info;

    let mut lines = vec![
        Line::styled(
            item.title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![label("Authors: "), Span::raw(item.authors())]),
    ];
    if let Some(pages) = info.page_count {
        lines.push(Line::from(vec![label("Pages: "), Span::raw(pages.to_string())]));
    }
    lines.push(Line::from(vec![label("Categories: "), Span::raw(item.categories())]));
    lines.push(Line::from(vec![
        label("Published: "),
        Span::raw(info.published_date.as_str()),
    ]));
    if let Some(price) = item.price() {
        lines.push(Line::from(vec![label("Price: "), Span::raw(price)]));
    }
    lines
}

pub struct DetailScreen<'a> {
    pub app: &'a App,
    pub state: &'a mut DetailState,
    pub spinner_frame: usize,
}

impl Component for DetailScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let detail = &self.app.detail;
        if self.state.book_id != detail.book_id {
            self.state.book_id = detail.book_id.clone();
            self.state.scroll = ScrollViewState::default();
        }

        let item = match &detail.book {
            Resource::Loading => {
                let [line] = Layout::vertical([Constraint::Length(1)]).areas(area);
                render_loading(frame, line, self.spinner_frame, "Loading book details...");
                return;
            }
            Resource::Failure(message) => {
                render_failure(frame, area, message);
                return;
            }
            Resource::Success(item) => item,
        };

        let header = header_lines(item);
        let [header_area, description_area] = Layout::vertical([
            Constraint::Length(header.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
            header_area,
        );

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Description ");
        let inner = block.inner(description_area);
        frame.render_widget(block, description_area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        if content_width == 0 {
            return;
        }
        let description = item.plain_description();
        let text = if description.trim().is_empty() {
            "No description available.".to_string()
        } else {
            description
        };
        let lines: Vec<Line> = textwrap::wrap(&text, content_width as usize)
            .into_iter()
            .map(|l| Line::raw(l.into_owned()))
            .collect();
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }
}
