//! Password visibility toggle.
//!
//! A button next to a password field flips the field between `Password` and
//! `Text`, swapping its icon between the "show" and "hide" glyphs.
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::forms::PasswordToggle;
//!
//! let cleanup = PasswordToggle::init("password", "togglePassword");
//! ```

use crate::config::get_config;
use crate::engine::arrays::{attrs, field};
use crate::engine::{first_child_of_kind, get_index};
use crate::primitives::Cleanup;
use crate::state::events;
use crate::types::{ElementKind, InputType};

/// Show/hide toggle for a password field.
pub struct PasswordToggle;

impl PasswordToggle {
    /// Wire the button registered under `button_id` to toggle `password_id`.
    ///
    /// Returns None (after a warning) if either element is missing.
    pub fn init(password_id: &str, button_id: &str) -> Option<Cleanup> {
        if get_index(password_id).is_none() {
            tracing::warn!(password_id, "password field not found, toggle not applied");
            return None;
        }
        let Some(button_index) = get_index(button_id) else {
            tracing::warn!(button_id, "toggle button not found, toggle not applied");
            return None;
        };

        // Ids are resolved at click time so a re-rendered field still toggles
        let password_id = password_id.to_string();
        let button_id = button_id.to_string();
        let off = events::on_click(button_index, move |_| {
            Self::toggle(&password_id, &button_id);
        });

        Some(Box::new(off))
    }

    /// Flip the field's visibility once.
    ///
    /// Does nothing unless both the field and an icon inside the button exist.
    pub fn toggle(password_id: &str, button_id: &str) {
        let Some(password_index) = get_index(password_id) else {
            return;
        };
        let Some(icon_index) =
            get_index(button_id).and_then(|b| first_child_of_kind(b, ElementKind::Icon))
        else {
            return;
        };

        let config = get_config();
        let (next_type, from_class, to_class) = match field::get_input_type(password_index) {
            InputType::Password => {
                (InputType::Text, &config.icon_show_class, &config.icon_hide_class)
            }
            _ => (InputType::Password, &config.icon_hide_class, &config.icon_show_class),
        };

        field::set_input_type(password_index, next_type);
        attrs::remove_class(icon_index, from_class);
        attrs::add_class(icon_index, to_class);
    }

    /// Whether the field under `password_id` currently shows its text.
    pub fn is_revealed(password_id: &str) -> bool {
        get_index(password_id).is_some_and(|i| field::get_input_type(i) != InputType::Password)
    }
}
