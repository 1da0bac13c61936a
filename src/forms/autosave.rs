//! Form autosave to the key-value store.
//!
//! Form data is gathered the way a browser's `FormData` would: named,
//! enabled inputs, with checkboxes and radios included only when checked.
//! It is stored as a JSON object of name to value. Restoring writes the
//! values back into the matching inputs, untouched by any mask.
//!
//! # API
//!
//! - `AutoSave::collect(form)` - Gather form data
//! - `AutoSave::save(form_id, key)` - Gather and store
//! - `AutoSave::restore(form_id, key)` - Write stored values back
//! - `AutoSave::watch(form_id, key)` - Save on every input inside the form
//! - `AutoSave::clear(key)` - Drop stored data
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::forms::AutoSave;
//!
//! AutoSave::restore("user-form", "user-form-draft");
//! let stop = AutoSave::watch("user-form", "user-form-draft");
//! ```

use serde_json::{Map, Value};

use crate::engine::arrays::{core, field};
use crate::engine::{descendants_of, get_index};
use crate::error::{FormError, FormResult};
use crate::primitives::Cleanup;
use crate::state::{events, storage};
use crate::types::ElementFlags;

/// Saves and restores form contents.
pub struct AutoSave;

impl AutoSave {
    /// Form data of the form at `form_index`.
    ///
    /// A repeated name keeps its last value.
    pub fn collect(form_index: usize) -> Map<String, Value> {
        let mut data = Map::new();
        for index in named_inputs(form_index) {
            if core::has_flag(index, ElementFlags::DISABLED) {
                continue;
            }
            if field::get_input_type(index).is_checkable()
                && !core::has_flag(index, ElementFlags::CHECKED)
            {
                continue;
            }
            data.insert(field::get_name(index), Value::String(field::get_value(index)));
        }
        data
    }

    /// Store the data of `form_id` under `key`. A missing form stores nothing.
    pub fn save(form_id: &str, key: &str) -> FormResult<()> {
        let Some(form_index) = get_index(form_id) else {
            return Ok(());
        };
        let json = serde_json::to_string(&Self::collect(form_index))?;
        storage::set_item(key, json);
        tracing::debug!(form_id, key, "form saved");
        Ok(())
    }

    /// Write data stored under `key` back into `form_id`.
    ///
    /// Missing form or key is a no-op. Malformed data is logged and leaves
    /// the form untouched.
    pub fn restore(form_id: &str, key: &str) {
        let Some(form_index) = get_index(form_id) else {
            return;
        };
        let Some(stored) = storage::get_item(key) else {
            return;
        };

        let data = match parse_stored(key, &stored) {
            Ok(data) => data,
            Err(err) => {
                tracing::error!(form_id, error = %err, "stored form data not restored");
                return;
            }
        };

        let inputs = named_inputs(form_index);
        for (name, value) in &data {
            for &index in inputs.iter().filter(|&&i| field::get_name(i) == *name) {
                if field::get_input_type(index).is_checkable() {
                    let checked = is_checked_value(value, &field::get_value(index));
                    core::set_flag(index, ElementFlags::CHECKED, checked);
                } else {
                    field::set_value(index, value_text(value));
                }
            }
        }
        tracing::debug!(form_id, key, fields = data.len(), "form restored");
    }

    /// Save `form_id` under `key` whenever an input inside it changes.
    ///
    /// Returns None if the form is missing.
    pub fn watch(form_id: &str, key: &str) -> Option<Cleanup> {
        let form_index = get_index(form_id)?;
        let form_id = form_id.to_string();
        let key = key.to_string();
        let off = events::on_input(form_index, move |_| {
            if let Err(err) = Self::save(&form_id, &key) {
                tracing::error!(form_id = %form_id, error = %err, "autosave failed");
            }
        });
        Some(Box::new(off))
    }

    /// Drop the data stored under `key`.
    pub fn clear(key: &str) {
        storage::remove_item(key);
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Named inputs inside the form, in document order.
fn named_inputs(form_index: usize) -> Vec<usize> {
    descendants_of(form_index)
        .into_iter()
        .filter(|&i| core::get_element_kind(i).is_field() && !field::get_name(i).is_empty())
        .collect()
}

fn parse_stored(key: &str, stored: &str) -> FormResult<Map<String, Value>> {
    serde_json::from_str(stored).map_err(|source| FormError::MalformedStoredData {
        key: key.to_string(),
        source,
    })
}

/// Stored value to field text: strings as-is, anything else as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a stored value means "checked" for a checkable whose own value
/// is `own_value`.
fn is_checked_value(value: &Value, own_value: &str) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "on" || s == own_value,
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::masks::MaskKind;
    use crate::primitives::{form, input, FormProps, InputProps};
    use crate::state::input as host;
    use crate::types::InputType;
    use pretty_assertions::assert_eq;

    fn setup() -> usize {
        reset_registry();
        storage::clear();
        let _ = form(FormProps {
            id: Some("user-form".into()),
            children: Some(Box::new(|| {
                let _ = input(InputProps {
                    id: Some("username".into()),
                    name: Some("username".into()),
                    ..Default::default()
                });
                let _ = input(InputProps {
                    id: Some("phone".into()),
                    name: Some("phone".into()),
                    input_type: InputType::Tel,
                    mask: Some(MaskKind::Phone),
                    ..Default::default()
                });
                let _ = input(InputProps {
                    id: Some("newsletter".into()),
                    name: Some("newsletter".into()),
                    input_type: InputType::Checkbox,
                    ..Default::default()
                });
                let _ = input(InputProps {
                    id: Some("admin".into()),
                    name: Some("admin".into()),
                    flags: ElementFlags::DISABLED,
                    value: Some("yes".into()),
                    ..Default::default()
                });
                let _ = input(InputProps { id: Some("anon".into()), value: Some("x".into()), ..Default::default() });
            })),
            ..Default::default()
        });
        get_index("user-form").unwrap()
    }

    fn value_of(id: &str) -> String {
        field::get_value(get_index(id).unwrap())
    }

    #[test]
    fn test_collect_skips_unnamed_disabled_and_unchecked() {
        let form_index = setup();
        field::set_value(get_index("username").unwrap(), "ana");

        let data = AutoSave::collect(form_index);
        assert_eq!(data.len(), 2);
        assert_eq!(data["username"], "ana");
        assert_eq!(data["phone"], "");

        core::set_flag(get_index("newsletter").unwrap(), ElementFlags::CHECKED, true);
        assert_eq!(AutoSave::collect(form_index)["newsletter"], "on");
    }

    #[test]
    fn test_save_then_restore() {
        setup();
        field::set_value(get_index("username").unwrap(), "ana");
        host::type_text(get_index("phone").unwrap(), "11987654321");
        core::set_flag(get_index("newsletter").unwrap(), ElementFlags::CHECKED, true);
        AutoSave::save("user-form", "draft").unwrap();

        setup_fields_blank();
        AutoSave::restore("user-form", "draft");

        assert_eq!(value_of("username"), "ana");
        assert_eq!(value_of("phone"), "(11) 98765-4321");
        assert!(core::has_flag(get_index("newsletter").unwrap(), ElementFlags::CHECKED));
    }

    fn setup_fields_blank() {
        field::set_value(get_index("username").unwrap(), "");
        field::set_value(get_index("phone").unwrap(), "");
        core::set_flag(get_index("newsletter").unwrap(), ElementFlags::CHECKED, false);
    }

    #[test]
    fn test_restore_non_string_values() {
        setup();
        storage::set_item("draft", r#"{"username": 42, "newsletter": true}"#);
        AutoSave::restore("user-form", "draft");

        assert_eq!(value_of("username"), "42");
        assert!(core::has_flag(get_index("newsletter").unwrap(), ElementFlags::CHECKED));
    }

    #[test]
    fn test_malformed_data_leaves_form_untouched() {
        setup();
        field::set_value(get_index("username").unwrap(), "keep");
        storage::set_item("draft", "{not json");
        AutoSave::restore("user-form", "draft");
        assert_eq!(value_of("username"), "keep");

        // An array is valid JSON but not form data
        storage::set_item("draft", r#"["a"]"#);
        AutoSave::restore("user-form", "draft");
        assert_eq!(value_of("username"), "keep");
    }

    #[test]
    fn test_missing_form_or_key_is_noop() {
        setup();
        assert!(AutoSave::save("ghost", "draft").is_ok());
        assert_eq!(storage::get_item("draft"), None);

        AutoSave::restore("user-form", "never-saved");
        AutoSave::restore("ghost", "draft");
        assert_eq!(value_of("username"), "");
    }

    #[test]
    fn test_clear() {
        setup();
        AutoSave::save("user-form", "draft").unwrap();
        AutoSave::clear("draft");
        assert_eq!(storage::get_item("draft"), None);
    }

    #[test]
    fn test_watch_saves_on_input() {
        setup();
        let stop = AutoSave::watch("user-form", "draft").unwrap();

        host::type_text(get_index("username").unwrap(), "bo");
        assert_eq!(storage::get_item("draft").unwrap(), r#"{"phone":"","username":"bo"}"#);

        stop();
        host::type_text(get_index("username").unwrap(), "b");
        assert_eq!(storage::get_item("draft").unwrap(), r#"{"phone":"","username":"bo"}"#);
        assert!(AutoSave::watch("ghost", "draft").is_none());
    }

    #[test]
    fn test_radio_group_restores_matching_option() {
        reset_registry();
        storage::clear();
        let _ = form(FormProps {
            id: Some("f".into()),
            children: Some(Box::new(|| {
                for plan in ["free", "pro"] {
                    let _ = input(InputProps {
                        id: Some(plan.into()),
                        name: Some("plan".into()),
                        input_type: InputType::Radio,
                        checked_value: Some(plan.into()),
                        ..Default::default()
                    });
                }
            })),
            ..Default::default()
        });

        storage::set_item("draft", r#"{"plan":"pro"}"#);
        AutoSave::restore("f", "draft");
        assert!(!core::has_flag(get_index("free").unwrap(), ElementFlags::CHECKED));
        assert!(core::has_flag(get_index("pro").unwrap(), ElementFlags::CHECKED));
    }
}
