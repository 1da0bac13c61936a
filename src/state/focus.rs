//! Focus System - Focused element state
//!
//! Tracks which element has focus and fires `Focus`/`Blur` events when it
//! moves. Blur is where the user-form validation rules run.
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::state::focus;
//!
//! focus::focus(username_index);
//! focus::focus(password_index); // username receives Blur
//! focus::blur();                // password receives Blur
//! ```

use spark_signals::{signal, Signal};

use crate::engine::arrays::core;
use crate::engine::is_allocated;
use crate::state::events::{self, EventType};
use crate::types::{ElementFlags, ElementKind};

// =============================================================================
// FOCUSED INDEX SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED_INDEX: Signal<Option<usize>> = signal(None);
}

/// Get the currently focused element index
pub fn get_focused_index() -> Option<usize> {
    FOCUSED_INDEX.with(|s| s.get())
}

/// Check if any element is focused
pub fn has_focus() -> bool {
    get_focused_index().is_some()
}

/// Check if specific element is focused
pub fn is_focused(index: usize) -> bool {
    get_focused_index() == Some(index)
}

/// Focusable elements: allocated, not disabled, and interactive.
pub fn is_focusable(index: usize) -> bool {
    is_allocated(index)
        && !core::has_flag(index, ElementFlags::DISABLED)
        && matches!(
            core::get_element_kind(index),
            ElementKind::Input | ElementKind::Button | ElementKind::Link
        )
}

// =============================================================================
// FOCUS MOVEMENT
// =============================================================================

/// Move focus, blurring the previous element first.
fn set_focus_with_events(new_index: Option<usize>) {
    let old_index = get_focused_index();
    if old_index == new_index {
        return;
    }

    FOCUSED_INDEX.with(|s| s.set(new_index));

    if let Some(old) = old_index {
        events::dispatch(old, EventType::Blur);
    }
    if let Some(new) = new_index {
        events::dispatch(new, EventType::Focus);
    }
}

/// Focus a specific element. Returns false if it cannot take focus.
pub fn focus(index: usize) -> bool {
    if !is_focusable(index) {
        return false;
    }
    set_focus_with_events(Some(index));
    true
}

/// Clear focus (no element focused)
pub fn blur() {
    set_focus_with_events(None);
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Drop focus from a released element, without events.
pub fn forget(index: usize) {
    if is_focused(index) {
        FOCUSED_INDEX.with(|s| s.set(None));
    }
}

/// Reset all focus state without firing events (for testing)
pub fn reset_focus_state() {
    FOCUSED_INDEX.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================
