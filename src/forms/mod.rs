//! Form Helpers - Behaviors attached to forms and their fields.
//!
//! - [`PasswordToggle`] - Show/hide a password field
//! - [`FormValidation`] - Submit-time validation and custom errors
//! - [`ConfirmAction`] - Confirmation prompt before destructive submits
//! - [`AutoSave`] - Save and restore form data through the key-value store
//! - [`init_user_form`] - The user form, wired from all of the above
//!
//! Every `init` returns a cleanup (or None when its elements are missing)
//! so a page can tear its behaviors down.

mod autosave;
mod confirm;
mod password_toggle;
mod user_form;
mod validation;

pub use autosave::AutoSave;
pub use confirm::{ConfirmAction, CONFIRM_ATTRIBUTE};
pub use password_toggle::PasswordToggle;
pub use user_form::{
    init_user_form, password_error, username_error, PASSWORD_ID, PHONE_ID, TOGGLE_PASSWORD_ID,
    USERNAME_ID,
};
pub use validation::{check_validity, form_is_valid, FormValidation};
