//! # Splash Component
//!
//! Logo and tagline shown while the splash timer runs.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const LOGO: [&str; 5] = [
    r"   _______  _______   ",
    r"  /      / /      /|  ",
    r" /  A.  / / Reader/ | ",
    r"/______/ /______/  /  ",
    r"|______|/|______|_/   ",
];

pub struct SplashScreen {
    frame_index: usize,
}

impl SplashScreen {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Logo fades between two tones while the timer runs
        let logo_color = if (self.frame_index / 6) % 2 == 0 {
            Color::Yellow
        } else {
            Color::LightYellow
        };

        let mut lines: Vec<Line> = LOGO
            .iter()
            .map(|row| Line::styled(*row, Style::default().fg(logo_color)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "A.Reader",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "\"Read. Change. Yourself\"",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_splash_shows_tagline() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                SplashScreen::new(0).render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("A.Reader"));
        assert!(text.contains("Read. Change. Yourself"));
    }
}
