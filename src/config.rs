//! Runtime configuration.
//!
//! Every knob has a default matching the stock page templates, so nothing
//! needs configuring for the common case. A host can load overrides from
//! JSON; missing keys keep their defaults.
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::config::{self, FormConfig};
//!
//! let config = FormConfig::from_json(r#"{ "password_min_length": 8 }"#)?;
//! config::set_config(config);
//! ```

use std::cell::RefCell;
use serde::Deserialize;

use crate::error::{FormError, FormResult};

// =============================================================================
// Config
// =============================================================================

/// Form helper configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Fallback prompt for forms whose `data-confirm` is empty.
    pub confirm_message: String,
    /// Class added to a form once it has been submitted.
    pub validated_class: String,
    /// Icon class while the password is hidden.
    pub icon_show_class: String,
    /// Icon class while the password is visible.
    pub icon_hide_class: String,
    pub username_min_length: usize,
    pub password_min_length: usize,
    /// Class of the container holding navigation links.
    pub nav_links_class: String,
    pub active_link_color: String,
    pub active_link_background: String,
    /// Default level for `logging::try_init_tracing`.
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            confirm_message: "Are you sure?".to_string(),
            validated_class: "was-validated".to_string(),
            icon_show_class: "fa-eye".to_string(),
            icon_hide_class: "fa-eye-slash".to_string(),
            username_min_length: 3,
            password_min_length: 6,
            nav_links_class: "nav-links".to_string(),
            active_link_color: "var(--primary-color)".to_string(),
            active_link_background: "var(--background)".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a JSON object of overrides.
    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str(json).map_err(|source| FormError::Config { source })
    }
}

// =============================================================================
// Active Config
// =============================================================================

thread_local! {
    static ACTIVE: RefCell<FormConfig> = RefCell::new(FormConfig::default());
}

/// Snapshot of the active configuration.
pub fn get_config() -> FormConfig {
    ACTIVE.with(|c| c.borrow().clone())
}

/// Replace the active configuration.
pub fn set_config(config: FormConfig) {
    ACTIVE.with(|c| *c.borrow_mut() = config);
}

/// Restore defaults.
pub fn reset_config() {
    set_config(FormConfig::default());
}
