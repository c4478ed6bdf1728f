//! Input processing for the terminal host.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use table_widget_core::Control;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move checklist focus by the given number of rows.
    MoveFocus(isize),
    /// Toggle the focused checklist row.
    ToggleFocused,
    /// Toggle the menu item at this zero-based position.
    ToggleNth(usize),
    /// Activate the current state's main button.
    ActivatePrimary,
    /// Activate a specific control through the view.
    Activate(Control),
    /// Clear the table back to its initial state.
    Reset,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into table commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::MoveFocus(-1),
            KeyCode::Down => KeyAction::MoveFocus(1),
            KeyCode::Enter => KeyAction::ActivatePrimary,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if let Some(digit) = raw.to_digit(10) {
            return match digit {
                1..=9 => KeyAction::ToggleNth(digit as usize - 1),
                _ => KeyAction::None,
            };
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'k' => KeyAction::MoveFocus(-1),
            'j' => KeyAction::MoveFocus(1),
            ' ' => KeyAction::ToggleFocused,
            'm' => KeyAction::Activate(Control::RequestMenu),
            'o' => KeyAction::Activate(Control::PlaceOrder),
            'b' => KeyAction::Activate(Control::RequestBill),
            'p' => KeyAction::Activate(Control::PayBill),
            'r' => KeyAction::Reset,
            _ => KeyAction::None,
        }
    }
}
