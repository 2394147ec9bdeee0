use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use super::spinner;
use crate::core::action::Action;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::confirm::centered_rect;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

/// Shared by the sign-in and create-account routes.
pub struct LoginState {
    pub email: TextField,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            email: TextField::new(" Email "),
        }
    }

    pub fn handle(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        let creating = *app.route() == Route::CreateAccount;
        match event {
            TuiEvent::Ctrl('n') if !creating => Some(Action::Navigate(Route::CreateAccount)),
            TuiEvent::Escape if creating => Some(Action::Back),
            // One attempt at a time
            _ if app.login.is_loading() => None,
            _ => match self.email.handle_event(event)? {
                FieldEvent::Submit(email) if creating => Some(Action::CreateAccount(email)),
                FieldEvent::Submit(email) => Some(Action::SignIn(email)),
                FieldEvent::Changed => None,
            },
        }
    }
}

pub struct LoginScreen<'a> {
    pub app: &'a App,
    pub state: &'a mut LoginState,
    pub spinner_frame: usize,
}

impl Component for LoginScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let creating = *self.app.route() == Route::CreateAccount;
        let panel = centered_rect(60, 60, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.app.route().title()))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(2));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [heading_area, _, field_area, message_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(inner);

        let heading = if creating {
            "Create an account with your email"
        } else {
            "A.Reader"
        };
        frame.render_widget(
            Paragraph::new(heading)
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            heading_area,
        );

        self.state.email.focused = !self.app.login.is_loading();
        self.state.email.render(frame, field_area);

        let (message, style) = if self.app.login.is_loading() {
            let verb = if creating { "Creating account" } else { "Signing in" };
            (
                format!("{} {}...", spinner(self.spinner_frame), verb),
                Style::default().fg(Color::Yellow),
            )
        } else if let Some(error) = self.app.login.error() {
            (error.to_string(), Style::default().fg(Color::Red))
        } else if creating {
            (
                "Your display name is the part before the @".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (
                "New user? Press Ctrl+N to create an account".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(style)
                .alignment(Alignment::Center),
            message_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::Resource;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn login_app(route: Route) -> App {
        let mut app = test_app();
        app.navigator.replace(Route::Login);
        if route == Route::CreateAccount {
            app.navigator.navigate(route);
        }
        app
    }

    fn type_str(state: &mut LoginState, app: &App, s: &str) {
        for c in s.chars() {
            state.handle(app, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_enter_signs_in() {
        let app = login_app(Route::Login);
        let mut state = LoginState::new();
        type_str(&mut state, &app, "ada@example.com");
        assert_eq!(
            state.handle(&app, &TuiEvent::Submit),
            Some(Action::SignIn("ada@example.com".to_string()))
        );
    }

    #[test]
    fn test_enter_creates_account_on_create_route() {
        let app = login_app(Route::CreateAccount);
        let mut state = LoginState::new();
        type_str(&mut state, &app, "ada@example.com");
        assert_eq!(
            state.handle(&app, &TuiEvent::Submit),
            Some(Action::CreateAccount("ada@example.com".to_string()))
        );
        assert_eq!(state.handle(&app, &TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_ctrl_n_switches_to_create() {
        let app = login_app(Route::Login);
        let mut state = LoginState::new();
        assert_eq!(
            state.handle(&app, &TuiEvent::Ctrl('n')),
            Some(Action::Navigate(Route::CreateAccount))
        );
    }

    #[test]
    fn test_input_ignored_while_signing_in() {
        let mut app = login_app(Route::Login);
        app.login.on_signed_in(Resource::Loading);
        let mut state = LoginState::new();
        assert_eq!(state.handle(&app, &TuiEvent::InputChar('a')), None);
        assert!(state.email.text().is_empty());
    }

    #[test]
    fn test_render_shows_error() {
        let mut app = login_app(Route::Login);
        app.login
            .on_signed_in(Resource::Failure("no account for x@y.z".to_string()));
        let mut state = LoginState::new();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                LoginScreen {
                    app: &app,
                    state: &mut state,
                    spinner_frame: 0,
                }
                .render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Sign In"));
        assert!(text.contains("no account for x@y.z"));
    }
}
