//! Form Engine - Field Arrays
//!
//! State carried by input elements:
//! - value: Reactive `Signal<String>` holding the field content
//! - inputType: text, password, tel, checkbox, ...
//! - name: Form data key
//! - minLength: Constraint checked by validation (0 = none)
//! - customValidity: Message set by custom validation ("" = valid)
//!
//! Each value cell is a signal so a host can hold the same signal and see
//! masked writes without polling.

use std::cell::RefCell;
use spark_signals::{signal, Signal};

use crate::types::InputType;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static VALUE: RefCell<Vec<Signal<String>>> = RefCell::new(Vec::new());
    static INPUT_TYPE: RefCell<Vec<InputType>> = RefCell::new(Vec::new());
    static NAME: RefCell<Vec<String>> = RefCell::new(Vec::new());
    static MIN_LENGTH: RefCell<Vec<usize>> = RefCell::new(Vec::new());
    static CUSTOM_VALIDITY: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    VALUE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, || signal(String::new()));
        }
    });
    INPUT_TYPE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, InputType::Text);
        }
    });
    NAME.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, String::new());
        }
    });
    MIN_LENGTH.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, 0);
        }
    });
    CUSTOM_VALIDITY.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, String::new());
        }
    });
}

/// Clear values at index.
///
/// The value cell gets a fresh signal so a released element's old signal
/// holders stop being connected to whatever reuses the index.
pub fn clear_at_index(index: usize) {
    VALUE.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            *cell = signal(String::new());
        }
    });
    INPUT_TYPE.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            *cell = InputType::Text;
        }
    });
    NAME.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            cell.clear();
        }
    });
    MIN_LENGTH.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            *cell = 0;
        }
    });
    CUSTOM_VALIDITY.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            cell.clear();
        }
    });
}

/// Reset all field arrays.
pub fn reset() {
    VALUE.with(|arr| arr.borrow_mut().clear());
    INPUT_TYPE.with(|arr| arr.borrow_mut().clear());
    NAME.with(|arr| arr.borrow_mut().clear());
    MIN_LENGTH.with(|arr| arr.borrow_mut().clear());
    CUSTOM_VALIDITY.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Value
// =============================================================================

/// The signal backing the value at `index`.
pub fn value_signal(index: usize) -> Signal<String> {
    ensure_capacity(index);
    VALUE.with(|arr| arr.borrow()[index].clone())
}

/// Replace the value cell with a caller-owned signal (two-way binding).
pub fn set_value_signal(index: usize, value: Signal<String>) {
    ensure_capacity(index);
    VALUE.with(|arr| arr.borrow_mut()[index] = value);
}

pub fn get_value(index: usize) -> String {
    // Clone the signal out so no array borrow is held while it is read
    value_signal(index).get()
}

pub fn set_value(index: usize, value: impl Into<String>) {
    value_signal(index).set(value.into());
}

// =============================================================================
// Input Type
// =============================================================================

pub fn get_input_type(index: usize) -> InputType {
    INPUT_TYPE.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_input_type(index: usize, input_type: InputType) {
    ensure_capacity(index);
    INPUT_TYPE.with(|arr| arr.borrow_mut()[index] = input_type);
}

// =============================================================================
// Name
// =============================================================================

pub fn get_name(index: usize) -> String {
    NAME.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

pub fn set_name(index: usize, name: impl Into<String>) {
    ensure_capacity(index);
    NAME.with(|arr| arr.borrow_mut()[index] = name.into());
}

// =============================================================================
// Constraints
// =============================================================================

pub fn get_min_length(index: usize) -> usize {
    MIN_LENGTH.with(|arr| arr.borrow().get(index).copied().unwrap_or(0))
}

pub fn set_min_length(index: usize, min_length: usize) {
    ensure_capacity(index);
    MIN_LENGTH.with(|arr| arr.borrow_mut()[index] = min_length);
}

pub fn get_custom_validity(index: usize) -> String {
    CUSTOM_VALIDITY.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

pub fn set_custom_validity(index: usize, message: impl Into<String>) {
    ensure_capacity(index);
    CUSTOM_VALIDITY.with(|arr| arr.borrow_mut()[index] = message.into());
}
