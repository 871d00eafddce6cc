pub mod browse;
pub mod detail;

use iced::Task;

use crate::app;

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state — the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Update the status bar message.
    SetStatus(String),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
}
