//! Global keyboard shortcuts.
//!
//! Maps key presses to semantic `Shortcut` variants that the app router
//! dispatches based on what is currently on screen.

use iced::{event, keyboard, Subscription};

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone)]
pub enum Shortcut {
    /// Enter (while no widget has it) or Ctrl+F — clear and focus the
    /// search input.
    FocusSearch,
    /// Escape — close the open detail pane.
    CloseDetail,
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            map_shortcut(key, modifiers, status)
        }
        _ => None,
    })
}

fn map_shortcut(
    key: keyboard::Key,
    modifiers: keyboard::Modifiers,
    status: event::Status,
) -> Option<Message> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key {
        Key::Named(Named::Escape) => Some(Shortcut::CloseDetail),
        // A focused text input captures Enter; only an ignored press
        // means the user wants to jump back to the search box.
        Key::Named(Named::Enter) if matches!(status, event::Status::Ignored) => {
            Some(Shortcut::FocusSearch)
        }
        Key::Character(ref c) if modifiers.control() && c.as_str() == "f" => {
            Some(Shortcut::FocusSearch)
        }
        _ => None,
    }
    .map(Message::Shortcut)
}
