//! Error types.
//!
//! The masking core never fails. These cover the document lookups, config
//! loading and the autosave round-trip through the key-value store.

/// Errors raised by the form helpers.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// No element is registered under the requested id.
    #[error("element `{id}` not found")]
    MissingElement { id: String },

    /// Stored form data under `key` is not a JSON object of field values.
    #[error("stored form data under `{key}` is malformed")]
    MalformedStoredData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid form configuration")]
    Config {
        #[source]
        source: serde_json::Error,
    },

    /// Form data could not be serialized.
    #[error("failed to serialize form data")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type FormResult<T> = Result<T, FormError>;

/// Look up an element index by id, failing with [`FormError::MissingElement`].
pub fn require_element(id: &str) -> FormResult<usize> {
    crate::engine::get_index(id).ok_or_else(|| FormError::MissingElement { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, reset_registry};

    #[test]
    fn test_require_element() {
        reset_registry();
        let index = allocate_index(Some("phone"));
        assert_eq!(require_element("phone").ok(), Some(index));

        let err = require_element("cpf").unwrap_err();
        assert_eq!(err.to_string(), "element `cpf` not found");
    }

    #[test]
    fn test_malformed_source_chain() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = FormError::MalformedStoredData { key: "draft".into(), source };
        assert!(std::error::Error::source(&err).is_some());
    }
}
