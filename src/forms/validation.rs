//! Form validation hooks.
//!
//! Forms flagged `NO_VALIDATE` opt out of implicit validation and get it back
//! through [`FormValidation::init`]: on submit, an invalid form is stopped and
//! every form is marked with the validated class so styling can show field
//! state. Custom errors set on a field make it invalid until cleared.
//!
//! # API
//!
//! - `check_validity(i)` - Validity of one field
//! - `form_is_valid(i)` - Every descendant field valid
//! - `FormValidation::init()` - Hook every `NO_VALIDATE` form
//! - `FormValidation::reset(id)` - Drop the validated class
//! - `FormValidation::validate_field(id)` - Validity by id
//! - `FormValidation::set_custom_error(id, msg)` / `clear_custom_error(id)`

use crate::config::get_config;
use crate::engine::arrays::{attrs, core, field};
use crate::engine::{descendants_of, get_index, query};
use crate::primitives::Cleanup;
use crate::state::events;
use crate::types::{ElementFlags, ElementKind};

// =============================================================================
// Validity
// =============================================================================

/// Whether the field at `index` passes its constraints.
///
/// Non-field elements are always valid.
pub fn check_validity(index: usize) -> bool {
    if !core::get_element_kind(index).is_field() {
        return true;
    }
    if !field::get_custom_validity(index).is_empty() {
        return false;
    }

    if field::get_input_type(index).is_checkable() {
        return !core::has_flag(index, ElementFlags::REQUIRED)
            || core::has_flag(index, ElementFlags::CHECKED);
    }

    let value = field::get_value(index);
    if value.is_empty() {
        return !core::has_flag(index, ElementFlags::REQUIRED);
    }
    value.chars().count() >= field::get_min_length(index)
}

/// Whether every field inside the form at `form_index` is valid.
pub fn form_is_valid(form_index: usize) -> bool {
    descendants_of(form_index).into_iter().all(check_validity)
}

// =============================================================================
// FormValidation
// =============================================================================

/// Submit-time validation for `NO_VALIDATE` forms.
pub struct FormValidation;

impl FormValidation {
    /// Hook every form currently flagged `NO_VALIDATE`.
    ///
    /// Returns a cleanup that removes the submit handlers.
    pub fn init() -> Cleanup {
        let forms = query(|i| {
            core::get_element_kind(i) == ElementKind::Form
                && core::has_flag(i, ElementFlags::NO_VALIDATE)
        });

        let cleanups: Vec<Cleanup> = forms
            .into_iter()
            .map(|form_index| {
                let off = events::on_submit(form_index, move |event| {
                    if event.target != form_index {
                        return;
                    }
                    if !form_is_valid(form_index) {
                        event.prevent_default();
                        event.stop_propagation();
                    }
                    attrs::add_class(form_index, &get_config().validated_class);
                });
                Box::new(off) as Cleanup
            })
            .collect();

        tracing::debug!(forms = cleanups.len(), "form validation hooked");

        Box::new(move || {
            for cleanup in cleanups {
                cleanup();
            }
        })
    }

    /// Remove the validated class from a form. Missing forms are ignored.
    pub fn reset(form_id: &str) {
        if let Some(index) = get_index(form_id) {
            attrs::remove_class(index, &get_config().validated_class);
        }
    }

    /// Validity of the field registered under `field_id`; false if missing.
    pub fn validate_field(field_id: &str) -> bool {
        get_index(field_id).is_some_and(check_validity)
    }

    /// Mark a field invalid with `message`.
    pub fn set_custom_error(field_id: &str, message: &str) {
        let Some(index) = get_index(field_id) else {
            return;
        };
        field::set_custom_validity(index, message);
        tracing::debug!(field_id, message, valid = check_validity(index), "custom error set");
    }

    /// Clear a field's custom error.
    pub fn clear_custom_error(field_id: &str) {
        if let Some(index) = get_index(field_id) {
            field::set_custom_validity(index, "");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
