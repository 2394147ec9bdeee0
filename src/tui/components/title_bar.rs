//! # TitleBar Component
//!
//! Top status bar: app name, current screen, who is signed in, and the
//! latest status message.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(route.title(), Some("ada"), "Book saved");
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! Segments are joined with `|` and empty ones are left out:
//!
//! 1. **Signed in with status**: `"Shelf | A.Reader | ada | Book saved"`
//! 2. **Signed out**: `"Shelf | Sign In"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    /// Current screen's title (e.g. "Search Books")
    pub screen_title: &'a str,
    /// Display name of the signed-in user, if any
    pub user_name: Option<&'a str>,
    /// Status message (e.g. "Book Updated Successfully")
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen_title: &'a str, user_name: Option<&'a str>, status_message: &'a str) -> Self {
        Self {
            screen_title,
            user_name,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = || Span::styled(" | ", Style::default().fg(Color::DarkGray));

        let mut spans = vec![
            Span::styled(
                "Shelf",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            separator(),
            Span::raw(self.screen_title),
        ];
        if let Some(name) = self.user_name {
            spans.push(separator());
            spans.push(Span::styled(name, Style::default().fg(Color::Cyan)));
        }
        if !self.status_message.is_empty() {
            spans.push(separator());
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Green),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_signed_in_with_status() {
        let text = rendered(TitleBar::new("A.Reader", Some("ada"), "Book saved"));
        assert!(text.contains("Shelf | A.Reader | ada | Book saved"));
    }

    #[test]
    fn test_title_bar_signed_out_no_status() {
        let text = rendered(TitleBar::new("Sign In", None, ""));
        assert!(text.contains("Shelf | Sign In"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
