//! # Core Application Logic
//!
//! This module contains Shelf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view-models, routes  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Services  │
//!     │  Adapter   │ ◄──────── Action ─────── │ (catalog + │
//!     │ (ratatui)  │                          │   store)   │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` and `Effect` enums and the `update()` reducer
//! - [`route`]: Screen routes and the back stack
//! - [`viewmodel`]: Per-screen state
//! - [`resource`]: Loading / success / failure wrapper for async results
//! - [`config`]: `~/.shelf/config.toml` plus env and CLI overrides
//! - [`session`]: Remembered sign-in

pub mod action;
pub mod config;
pub mod resource;
pub mod route;
pub mod session;
pub mod state;
pub mod viewmodel;

pub use action::{Action, Effect, update};
pub use resource::Resource;
pub use route::Route;
pub use state::App;
