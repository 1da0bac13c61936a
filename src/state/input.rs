//! Input Module - Host event feed
//!
//! Plays the part of the platform's text-entry machinery: a keystroke first
//! goes through the element's keypress handlers, and only if nobody prevented
//! it does the character land in the value, followed by an `Input` event.
//! Pasting skips the keypress stage entirely, which is why masks normalize in
//! their `Input` handler and treat the keypress guard as cosmetic.
//!
//! Also bridges crossterm's key events so a terminal front-end can drive the
//! focused field.
//!
//! # API
//!
//! - `type_key(i, event)` - Deliver one keystroke to element i
//! - `type_text(i, text)` - Deliver each char of `text` as a keystroke
//! - `paste(i, text)` - Append text without keypress filtering
//! - `replace(i, text)` - Overwrite the value and fire `Input`
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `route_event` - Deliver a crossterm event to the focused field
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::state::input;
//!
//! input::type_text(phone_index, "11987654321");
//! input::paste(phone_index, "abc");
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    KeyCode, KeyModifiers,
    KeyEvent as CrosstermKeyEvent,
    KeyEventKind,
};

use super::events;
use super::focus;
use super::keyboard::{self, KeyboardEvent, KeyState, Modifiers};
use crate::engine::arrays::field;

// =============================================================================
// TEXT ENTRY
// =============================================================================

/// Deliver a keystroke to element `index`.
///
/// Returns true if the keystroke changed the value. A prevented keystroke,
/// a non-press event, or a key with no editing meaning changes nothing.
pub fn type_key(index: usize, event: &KeyboardEvent) -> bool {
    if keyboard::dispatch_keypress(index, event) || !event.is_press() {
        return false;
    }
    if event.modifiers.ctrl || event.modifiers.alt || event.modifiers.meta {
        return false;
    }

    let mut value = field::get_value(index);
    match (event.char(), event.key.as_str()) {
        (Some(c), _) => value.push(c),
        (None, "Backspace") => {
            if value.pop().is_none() {
                return false;
            }
        }
        _ => return false,
    }

    field::set_value(index, value);
    events::dispatch_input(index);
    true
}

/// Deliver every char of `text` as its own keystroke.
///
/// Returns how many keystrokes were accepted.
pub fn type_text(index: usize, text: &str) -> usize {
    text.chars()
        .filter(|c| type_key(index, &KeyboardEvent::new(c.to_string())))
        .count()
}

/// Append `text` to the value and fire `Input`. No keypress handlers run.
pub fn paste(index: usize, text: &str) {
    let mut value = field::get_value(index);
    value.push_str(text);
    field::set_value(index, value);
    events::dispatch_input(index);
}

/// Overwrite the value and fire `Input`.
pub fn replace(index: usize, text: &str) {
    field::set_value(index, text);
    events::dispatch_input(index);
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META),
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Deliver a crossterm event to the focused field.
///
/// Key events become keystrokes; pastes become [`paste`]. Returns true if the
/// focused field's value changed.
pub fn route_event(event: CrosstermEvent) -> bool {
    let Some(index) = focus::get_focused_index() else {
        return false;
    };
    match event {
        CrosstermEvent::Key(key) => type_key(index, &convert_key_event(key)),
        CrosstermEvent::Paste(text) => {
            paste(index, &text);
            true
        }
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
