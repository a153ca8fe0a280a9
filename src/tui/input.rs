//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The same key means different things
//! while typing an identifier and while browsing the feed, so mapping is
//! context-aware.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    /// Typing into the identifier input line.
    #[default]
    Editing,
    /// Moving through the review feed.
    Browsing,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyMsg modifier checks prevent const evaluation"
)]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    match context {
        InputContext::Editing => map_editing_key(key.key),
        InputContext::Browsing => map_browsing_key(key.key),
    }
}

const fn map_control_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('c' | 'q') => Some(AppMsg::Quit),
        KeyCode::Char('u') => Some(AppMsg::InputClear),
        KeyCode::Char('s') => Some(AppMsg::Export),
        _ => None,
    }
}

const fn map_editing_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Backspace => Some(AppMsg::InputBackspace),
        KeyCode::Tab | KeyCode::Esc => Some(AppMsg::ToggleFocus),
        KeyCode::Char(character) => Some(AppMsg::InputChar(character)),
        _ => None,
    }
}

const fn map_browsing_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppMsg::ToggleExpand),
        KeyCode::Char('e') => Some(AppMsg::Export),
        KeyCode::Char('r') => Some(AppMsg::Submit),
        KeyCode::Tab | KeyCode::Char('i' | '/') => Some(AppMsg::ToggleFocus),
        _ => None,
    }
}
