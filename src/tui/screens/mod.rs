//! # Screens
//!
//! One module per route. Each screen has a persistent `*State` living in
//! `TuiState` and a transient render wrapper built every frame from `&App`.
//!
//! Screen states translate `TuiEvent`s into `core::Action`s. They need the
//! `App` for that (to turn a selected row into a book id), so they expose a
//! `handle(&mut self, app, event)` method rather than the `EventHandler`
//! trait that self-contained components use.

pub mod detail;
pub mod home;
pub mod login;
pub mod search;
pub mod stats;
pub mod update;

pub use detail::{DetailScreen, DetailState};
pub use home::{HomeScreen, HomeState};
pub use login::{LoginScreen, LoginState};
pub use search::{SearchScreen, SearchState};
pub use stats::{StatsScreen, StatsState};
pub use update::{UpdateFormState, UpdateScreen};

use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::library::types::MAX_RATING;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame_index: usize) -> &'static str {
    SPINNER[frame_index % SPINNER.len()]
}

/// "Sat, May 4, 2024" in local time.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%a, %b %-d, %Y").to_string()
}

/// Filled and empty stars for a 0-5 rating.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

/// Spinner line shown while a screen's data loads.
fn render_loading(frame: &mut Frame, area: Rect, frame_index: usize, text: &str) {
    let line = format!("{} {}", spinner(frame_index), text);
    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_failure(frame: &mut Frame, area: Rect, message: &str) {
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER.len()));
    }
}
