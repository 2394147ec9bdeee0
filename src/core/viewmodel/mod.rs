//! # View-Models
//!
//! Per-screen state. Each action method mutates its own state and hands back
//! at most one [`Effect`](crate::core::action::Effect) for the event loop to
//! run. Results come back through the `on_*` methods.
//!
//! Nothing here tags requests: whichever call completes last wins.

pub mod detail;
pub mod home;
pub mod login;
pub mod search;
pub mod update;

pub use detail::{DetailViewModel, SaveBlocked};
pub use home::HomeViewModel;
pub use login::LoginViewModel;
pub use search::SearchViewModel;
pub use update::{UpdateDraft, UpdateEdit, UpdateViewModel};
