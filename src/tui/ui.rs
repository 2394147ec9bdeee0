use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SplashScreen, TitleBar};
use crate::tui::screens::{
    DetailScreen, HomeScreen, LoginScreen, SearchScreen, StatsScreen, UpdateScreen,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    // Splash takes the whole terminal
    if *app.route() == Route::Splash {
        let area = frame.area();
        SplashScreen::new(spinner_frame).render(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.route().title(),
        app.user.as_ref().map(|u| u.display_name.as_str()),
        &app.status_message,
    )
    .render(frame, title_area);

    match app.route() {
        Route::Splash => {}
        Route::Login | Route::CreateAccount => LoginScreen {
            app,
            state: &mut tui.login,
            spinner_frame,
        }
        .render(frame, main_area),
        Route::Home => HomeScreen {
            app,
            state: &mut tui.home,
            spinner_frame,
        }
        .render(frame, main_area),
        Route::Search => SearchScreen {
            app,
            state: &mut tui.search,
            spinner_frame,
        }
        .render(frame, main_area),
        Route::Detail(_) => DetailScreen {
            app,
            state: &mut tui.detail,
            spinner_frame,
        }
        .render(frame, main_area),
        Route::Update(_) => UpdateScreen {
            app,
            state: &mut tui.update,
            spinner_frame,
        }
        .render(frame, main_area),
        Route::Stats => StatsScreen {
            app,
            state: &mut tui.stats,
            spinner_frame,
        }
        .render(frame, main_area),
    }

    frame.render_widget(
        Paragraph::new(help_text(app.route())).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

/// Key hints for the bottom line.
fn help_text(route: &Route) -> &'static str {
    match route {
        Route::Splash => "",
        Route::Login => "Enter Sign in · Ctrl+N Create account · Ctrl+C Quit",
        Route::CreateAccount => "Enter Create account · Esc Back · Ctrl+C Quit",
        Route::Home => {
            "↑↓ Select · Tab Switch list · Enter Update · / Search · t Stats · r Refresh · l Sign out · q Quit"
        }
        Route::Search => "Enter Search / Open · Tab Results · Esc Back",
        Route::Detail(_) => "s Save to reading list · ↑↓ Scroll · Esc Back",
        Route::Update(_) => "Tab/↑↓ Move · Enter/Space Toggle · ←→ or 0-5 Rating · Esc Back",
        Route::Stats => "↑↓ Scroll · r Refresh · Esc Back",
    }
}

/// True while something on screen animates (spinner, splash).
pub fn is_busy(app: &App) -> bool {
    match app.route() {
        Route::Splash => true,
        Route::Login | Route::CreateAccount => app.login.is_loading(),
        Route::Home | Route::Stats => app.home.library.is_loading(),
        Route::Search => app.search.results.is_loading(),
        Route::Detail(_) => app.detail.book.is_loading(),
        Route::Update(_) => app.update.book.is_loading(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::Resource;
    use crate::test_support::{test_app, test_user};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_splash() {
        let app = test_app();
        let text = screen_text(&app);
        assert!(text.contains("Read. Change. Yourself"));
        assert!(is_busy(&app));
    }

    #[test]
    fn test_draw_home_has_title_and_help() {
        let mut app = test_app();
        app.user = Some(test_user());
        app.navigator.replace(Route::Home);
        app.home.on_library(Resource::Success(vec![]));
        let text = screen_text(&app);
        assert!(text.contains("Shelf"));
        assert!(text.contains("ada"));
        assert!(text.contains("/ Search"));
        assert!(!is_busy(&app));
    }

    #[test]
    fn test_busy_while_searching() {
        let mut app = test_app();
        app.user = Some(test_user());
        app.navigator.replace(Route::Search);
        app.search.search("Android");
        assert!(is_busy(&app));
    }
}
