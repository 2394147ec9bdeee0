//! # TUI Components
//!
//! Reusable building blocks shared by the screens in `tui::screens`.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display-only components that receive all data as fields:
//! - `TitleBar`: top bar with screen title, signed-in user and status
//! - `ConfirmDialog`: yes/no overlay
//! - `SplashScreen`: logo and tagline shown at startup
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: single-line input, emits `FieldEvent`
//! - `BookList`: selectable list of books, emits `ListEvent`
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into `App`. The screens decide what to pass.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar { screen_title, user_name, status_message }.render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! TitleBar::from_app(app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── book_list.rs    (list of books + selection state)
//! ├── confirm.rs      (yes/no overlay, centered_rect helper)
//! ├── splash.rs       (startup screen)
//! ├── text_field.rs   (single-line input)
//! └── title_bar.rs    (top status bar)
//! ```

pub mod book_list;
pub mod confirm;
pub mod splash;
pub mod text_field;
mod title_bar;

pub use splash::SplashScreen;
pub use title_bar::TitleBar;
