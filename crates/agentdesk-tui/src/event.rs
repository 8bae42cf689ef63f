//! Terminal event polling

use std::time::Duration;

use agentdesk_app::message::Message;
use agentdesk_app::InputKey;
use agentdesk_core::prelude::*;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Left-button presses become pointer-down messages, tagged with whether
/// they hit the header bar or its open popover.
pub fn mouse_event_to_message(mouse: MouseEvent, header: &[Rect]) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let at = Position::new(mouse.column, mouse.row);
            let in_header = header.iter().any(|r| r.contains(at));
            Some(Message::PointerDown { in_header })
        }
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// `header` holds where the header bar and its popover were last drawn.
pub fn poll(tick_rate: Duration, header: &[Rect]) -> Result<Option<Message>> {
    if !event::poll(tick_rate)? {
        // Generate tick on timeout for animations
        return Ok(Some(Message::Tick));
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, header),
        _ => None,
    };
    Ok(message)
}
