//! Keyboard Module - Keypress event state and handler registry
//!
//! State and per-element handler registry for raw keystrokes.
//! Does NOT own the host's input stream (that is the input module).
//! Does NOT handle content-changing input events (that is the events module).
//!
//! A keypress handler returns `true` to prevent the keystroke, i.e. the
//! character is never inserted into the field.
//!
//! # API
//!
//! - `last_event` - Get last keyboard event
//! - `last_key` - Get last key pressed
//! - `on_keypress(i, fn)` - Subscribe to keystrokes aimed at element i
//! - `dispatch_keypress(i, event)` - Run handlers, report whether prevented
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::state::keyboard;
//!
//! // Reject anything that is not a digit
//! let cleanup = keyboard::on_keypress(field_index, |event| {
//!     !event.char().is_some_and(|c| c.is_ascii_digit())
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use spark_signals::{signal, Signal};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "7", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// The character this key produces, if it is a single character.
    ///
    /// Named keys ("Enter", "Backspace") produce none.
    pub fn char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

/// Handler for keypress events. Return true to prevent the keystroke.
pub type KeypressHandler = Rc<dyn Fn(&KeyboardEvent) -> bool>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// Get the last keyboard event
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get the last key pressed
pub fn last_key() -> String {
    last_event().map(|e| e.key).unwrap_or_default()
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    keypress_handlers: HashMap<usize, Vec<(usize, KeypressHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            keypress_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch a keypress aimed at element `index`.
///
/// Every handler runs, in registration order. Returns true if any of them
/// prevented the keystroke. Only press events reach handlers.
pub fn dispatch_keypress(index: usize, event: &KeyboardEvent) -> bool {
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    if !event.is_press() {
        return false;
    }

    // Snapshot so handlers may subscribe/unsubscribe while running
    let handlers: Vec<KeypressHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .keypress_handlers
            .get(&index)
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    });

    let mut prevented = false;
    for handler in handlers {
        if handler(event) {
            prevented = true;
        }
    }
    prevented
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to keystrokes aimed at element `index`.
/// Return true from handler to prevent the keystroke.
/// Returns cleanup function.
pub fn on_keypress<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.keypress_handlers
            .entry(index)
            .or_default()
            .push((id, Rc::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.keypress_handlers.get_mut(&index) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.keypress_handlers.remove(&index);
                }
            }
        });
    }
}

/// Number of keypress handlers registered on an element.
pub fn handler_count(index: usize) -> usize {
    REGISTRY.with(|reg| reg.borrow().keypress_handlers.get(&index).map_or(0, Vec::len))
}

/// Clean up all handlers for an element index.
/// Called when the element is released.
pub fn cleanup_index(index: usize) {
    REGISTRY.with(|reg| {
        reg.borrow_mut().keypress_handlers.remove(&index);
    });
}

/// Reset keyboard state (page unload, tests).
///
/// Handler ids are never reused, so stale cleanups stay harmless.
pub fn reset_keyboard_state() {
    REGISTRY.with(|reg| reg.borrow_mut().keypress_handlers.clear());
    LAST_EVENT.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================
