//! Storage Module - String key-value store
//!
//! The persistence surface autosave writes to. Behaves like a browser's
//! `localStorage`: string keys, string values, survives page resets
//! (it is not cleared by `reset_registry`).
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::state::storage;
//!
//! storage::set_item("user-form", r#"{"username":"ana"}"#);
//! assert!(storage::get_item("user-form").is_some());
//! storage::remove_item("user-form");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

// =============================================================================
// Internal Store
// =============================================================================

thread_local! {
    static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Public API
// =============================================================================

/// Store `value` under `key`, replacing any previous value.
pub fn set_item(key: &str, value: impl Into<String>) {
    STORE.with(|store| {
        store.borrow_mut().insert(key.to_string(), value.into());
    });
}

/// Value stored under `key`, or None.
pub fn get_item(key: &str) -> Option<String> {
    STORE.with(|store| store.borrow().get(key).cloned())
}

/// Remove `key`. Removing a missing key is a no-op.
pub fn remove_item(key: &str) {
    STORE.with(|store| {
        store.borrow_mut().remove(key);
    });
}

/// Number of stored keys.
pub fn len() -> usize {
    STORE.with(|store| store.borrow().len())
}

/// Remove everything.
pub fn clear() {
    STORE.with(|store| store.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        clear();
    }

    #[test]
    fn test_set_get_remove() {
        setup();

        assert!(get_item("draft").is_none());
        set_item("draft", "{}");
        assert_eq!(get_item("draft"), Some("{}".to_string()));
        assert_eq!(len(), 1);

        remove_item("draft");
        assert!(get_item("draft").is_none());
        assert_eq!(len(), 0);
    }

    #[test]
    fn test_set_overwrites() {
        setup();

        set_item("draft", "first");
        set_item("draft", "second");
        assert_eq!(get_item("draft"), Some("second".to_string()));
    }

    #[test]
    fn test_remove_missing() {
        setup();
        remove_item("nothing");
        assert_eq!(len(), 0);
    }
}
