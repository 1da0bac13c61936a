//! User create/edit form wiring.
//!
//! Composes the helpers for the standard user form: phone mask, password
//! toggle, validation hooks, blur-time rules for username and password,
//! and initial focus. Every piece is optional; whatever the page lacks is
//! skipped.

use crate::config::get_config;
use crate::engine::arrays::{core, field};
use crate::engine::{get_index, query};
use crate::masks::{Mask, PhoneMask};
use crate::primitives::Cleanup;
use crate::state::{events, focus};
use crate::types::{ElementFlags, ElementKind};

use super::{FormValidation, PasswordToggle};

pub const PHONE_ID: &str = "phone";
pub const USERNAME_ID: &str = "username";
pub const PASSWORD_ID: &str = "password";
pub const TOGGLE_PASSWORD_ID: &str = "togglePassword";

// =============================================================================
// Rules
// =============================================================================

/// Error for a username value, if any. Blank is left to `REQUIRED`.
pub fn username_error(value: &str) -> Option<String> {
    let min = get_config().username_min_length;
    let len = value.trim().chars().count();
    (len > 0 && len < min).then(|| format!("Username must have at least {min} characters"))
}

/// Error for a password value, if any.
pub fn password_error(value: &str, required: bool) -> Option<String> {
    let min = get_config().password_min_length;
    let len = value.chars().count();
    if required && len == 0 {
        return Some("Password is required".to_string());
    }
    (len > 0 && len < min).then(|| format!("Password must have at least {min} characters"))
}

// =============================================================================
// Wiring
// =============================================================================

/// Wire up the user form on the current page.
///
/// Returns a cleanup that removes every handler installed here.
pub fn init_user_form() -> Cleanup {
    tracing::info!("initializing user form");
    let mut cleanups: Vec<Cleanup> = Vec::new();

    if get_index(PHONE_ID).is_some() {
        cleanups.extend(PhoneMask::init(PHONE_ID));
        tracing::debug!("phone mask ready");
    }

    if get_index(PASSWORD_ID).is_some() && get_index(TOGGLE_PASSWORD_ID).is_some() {
        cleanups.extend(PasswordToggle::init(PASSWORD_ID, TOGGLE_PASSWORD_ID));
        tracing::debug!("password toggle ready");
    }

    cleanups.push(FormValidation::init());

    if let Some(index) = get_index(USERNAME_ID) {
        cleanups.push(blur_rule(index, USERNAME_ID, |index| {
            username_error(&field::get_value(index))
        }));
    }

    if let Some(index) = get_index(PASSWORD_ID) {
        cleanups.push(blur_rule(index, PASSWORD_ID, |index| {
            password_error(&field::get_value(index), core::has_flag(index, ElementFlags::REQUIRED))
        }));
    }

    if let Some(first) = first_autofocus_field() {
        focus::focus(first);
    }

    tracing::info!("user form ready");

    Box::new(move || {
        for cleanup in cleanups {
            cleanup();
        }
    })
}

/// On blur, set or clear the field's custom error from `rule`.
fn blur_rule(index: usize, field_id: &'static str, rule: fn(usize) -> Option<String>) -> Cleanup {
    let off = events::on_blur(index, move |_| match rule(index) {
        Some(message) => FormValidation::set_custom_error(field_id, &message),
        None => FormValidation::clear_custom_error(field_id),
    });
    Box::new(off)
}

fn first_autofocus_field() -> Option<usize> {
    query(|i| {
        core::get_element_kind(i) == ElementKind::Input
            && core::has_flag(i, ElementFlags::AUTOFOCUS)
    })
    .into_iter()
    .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{reset_config, set_config, FormConfig};
    use crate::engine::reset_registry;
    use crate::primitives::{input, InputProps};
    use crate::types::InputType;
    use pretty_assertions::assert_eq;

    fn setup() {
        reset_registry();
        reset_config();
        focus::reset_focus_state();
    }

    #[test]
    fn test_username_rule() {
        setup();
        assert_eq!(username_error(""), None);
        assert_eq!(username_error("   "), None);
        assert_eq!(
            username_error(" ab "),
            Some("Username must have at least 3 characters".to_string())
        );
        assert_eq!(username_error("abc"), None);
    }

    #[test]
    fn test_password_rule() {
        setup();
        assert_eq!(password_error("", true), Some("Password is required".to_string()));
        assert_eq!(password_error("", false), None);
        assert_eq!(
            password_error("12345", false),
            Some("Password must have at least 6 characters".to_string())
        );
        assert_eq!(password_error("123456", true), None);
    }

    #[test]
    fn test_rules_follow_config() {
        setup();
        set_config(FormConfig { password_min_length: 8, ..FormConfig::default() });
        assert_eq!(
            password_error("1234567", false),
            Some("Password must have at least 8 characters".to_string())
        );
        reset_config();
    }

    #[test]
    fn test_blur_sets_and_clears_error() {
        setup();
        let _ = input(InputProps {
            id: Some(USERNAME_ID.into()),
            flags: ElementFlags::AUTOFOCUS,
            ..Default::default()
        });
        let _ = input(InputProps { id: Some("email".into()), input_type: InputType::Email, ..Default::default() });
        let _off = init_user_form();

        let username = get_index(USERNAME_ID).unwrap();
        let email = get_index("email").unwrap();
        assert!(focus::is_focused(username));

        field::set_value(username, "ab");
        focus::focus(email);
        assert_eq!(field::get_custom_validity(username), "Username must have at least 3 characters");

        field::set_value(username, "abc");
        focus::focus(username);
        focus::focus(email);
        assert_eq!(field::get_custom_validity(username), "");
    }

    #[test]
    fn test_empty_page_is_fine() {
        setup();
        let off = init_user_form();
        off();
    }
}
