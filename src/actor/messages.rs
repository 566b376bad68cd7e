//! Message types for actor communication.
//!
//! The input actor sends [`InputEvent`]s to the session loop, which turns
//! key presses into calculator [`Command`]s.

use super::session::SessionConfig;
use crate::engine::Operator;

/// Key codes the calculator reacts to.
///
/// This is the subset of crossterm's `KeyCode` a desk calculator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control only.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

impl InputEvent {
    /// A key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// A calculator action decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Offer a character to the input buffer.
    Input(char),
    /// `-`: a leading sign on an empty operand, otherwise subtraction.
    Minus,
    /// Press an operator button.
    Press(Operator),
    /// `=` or Enter.
    Evaluate,
    /// Backspace or Delete.
    Clear,
    /// End the session.
    Quit,
}

impl Command {
    /// Decode a key press under the session's key bindings.
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers, config: &SessionConfig) -> Self {
        match code {
            KeyCode::Char('c') if modifiers.control => Self::Quit,
            KeyCode::Char(c) if c == config.quit_key => Self::Quit,
            KeyCode::Char('-') => Self::Minus,
            KeyCode::Char('=') => Self::Evaluate,
            KeyCode::Char(c) => Operator::from_symbol(c).map_or(Self::Input(c), Self::Press),
            KeyCode::Enter => Self::Evaluate,
            KeyCode::Backspace | KeyCode::Delete => Self::Clear,
            KeyCode::Tab | KeyCode::Esc => Self::Quit,
        }
    }
}
