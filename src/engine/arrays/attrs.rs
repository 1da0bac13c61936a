//! Form Engine - Attribute Arrays
//!
//! Free-form element state:
//! - classList: Ordered, de-duplicated class names
//! - attributes: `href`, `data-confirm`, ...
//! - style: Inline style properties set by page scripts

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    static CLASS_LIST: RefCell<Vec<Vec<String>>> = RefCell::new(Vec::new());
    static ATTRIBUTES: RefCell<Vec<HashMap<String, String>>> = RefCell::new(Vec::new());
    static STYLE: RefCell<Vec<BTreeMap<String, String>>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    CLASS_LIST.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, Vec::new);
        }
    });
    ATTRIBUTES.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, HashMap::new);
        }
    });
    STYLE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize_with(index + 1, BTreeMap::new);
        }
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    CLASS_LIST.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            cell.clear();
        }
    });
    ATTRIBUTES.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            cell.clear();
        }
    });
    STYLE.with(|arr| {
        if let Some(cell) = arr.borrow_mut().get_mut(index) {
            cell.clear();
        }
    });
}

/// Reset all attribute arrays.
pub fn reset() {
    CLASS_LIST.with(|arr| arr.borrow_mut().clear());
    ATTRIBUTES.with(|arr| arr.borrow_mut().clear());
    STYLE.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Class List
// =============================================================================

pub fn get_classes(index: usize) -> Vec<String> {
    CLASS_LIST.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

pub fn has_class(index: usize, class: &str) -> bool {
    CLASS_LIST.with(|arr| {
        arr.borrow()
            .get(index)
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    })
}

/// Add a class. Adding a class that is already present is a no-op.
pub fn add_class(index: usize, class: &str) {
    ensure_capacity(index);
    CLASS_LIST.with(|arr| {
        let mut arr = arr.borrow_mut();
        let classes = &mut arr[index];
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    });
}

pub fn remove_class(index: usize, class: &str) {
    CLASS_LIST.with(|arr| {
        if let Some(classes) = arr.borrow_mut().get_mut(index) {
            classes.retain(|c| c != class);
        }
    });
}

// =============================================================================
// Attributes
// =============================================================================

pub fn get_attribute(index: usize, name: &str) -> Option<String> {
    ATTRIBUTES.with(|arr| arr.borrow().get(index).and_then(|attrs| attrs.get(name).cloned()))
}

pub fn has_attribute(index: usize, name: &str) -> bool {
    ATTRIBUTES.with(|arr| arr.borrow().get(index).is_some_and(|attrs| attrs.contains_key(name)))
}

pub fn set_attribute(index: usize, name: &str, value: impl Into<String>) {
    ensure_capacity(index);
    ATTRIBUTES.with(|arr| {
        arr.borrow_mut()[index].insert(name.to_string(), value.into());
    });
}

// =============================================================================
// Inline Style
// =============================================================================

pub fn get_style(index: usize, property: &str) -> Option<String> {
    STYLE.with(|arr| arr.borrow().get(index).and_then(|style| style.get(property).cloned()))
}

pub fn set_style(index: usize, property: &str, value: impl Into<String>) {
    ensure_capacity(index);
    STYLE.with(|arr| {
        arr.borrow_mut()[index].insert(property.to_string(), value.into());
    });
}
