//! Form Engine - Core Arrays
//!
//! Structural element state:
//! - elementKind: What the element is
//! - parentIndex: Containing element
//! - flags: Boolean attributes (required, checked, novalidate, ...)

use std::cell::RefCell;

use crate::types::{ElementFlags, ElementKind};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static ELEMENT_KIND: RefCell<Vec<ElementKind>> = RefCell::new(Vec::new());
    static PARENT_INDEX: RefCell<Vec<Option<usize>>> = RefCell::new(Vec::new());
    static FLAGS: RefCell<Vec<ElementFlags>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    ELEMENT_KIND.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, ElementKind::None);
        }
    });
    PARENT_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, None);
        }
    });
    FLAGS.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, ElementFlags::NONE);
        }
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    ELEMENT_KIND.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            *cell = ElementKind::None;
        }
    });
    PARENT_INDEX.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            *cell = None;
        }
    });
    FLAGS.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            *cell = ElementFlags::NONE;
        }
    });
}

/// Reset all core arrays.
pub fn reset() {
    ELEMENT_KIND.with(|arr| arr.borrow_mut().clear());
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear());
    FLAGS.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Element Kind
// =============================================================================

pub fn get_element_kind(index: usize) -> ElementKind {
    ELEMENT_KIND.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_element_kind(index: usize, kind: ElementKind) {
    ensure_capacity(index);
    ELEMENT_KIND.with(|arr| arr.borrow_mut()[index] = kind);
}

// =============================================================================
// Parent Index
// =============================================================================

pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.borrow().get(index).copied().flatten())
}

pub fn set_parent_index(index: usize, parent: Option<usize>) {
    ensure_capacity(index);
    PARENT_INDEX.with(|arr| arr.borrow_mut()[index] = parent);
}

// =============================================================================
// Flags
// =============================================================================

pub fn get_flags(index: usize) -> ElementFlags {
    FLAGS.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_flags(index: usize, flags: ElementFlags) {
    ensure_capacity(index);
    FLAGS.with(|arr| arr.borrow_mut()[index] = flags);
}

/// Check a single flag.
pub fn has_flag(index: usize, flag: ElementFlags) -> bool {
    get_flags(index).contains(flag)
}

/// Set or unset a single flag, leaving the others untouched.
pub fn set_flag(index: usize, flag: ElementFlags, on: bool) {
    let mut flags = get_flags(index);
    flags.set(flag, on);
    set_flags(index, flags);
}
