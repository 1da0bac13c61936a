//! Input Primitive - Form field.
//!
//! Covers text-like inputs (text, password, tel, email, hidden) and
//! checkable ones (checkbox, radio). A `mask` prop binds a digit mask at
//! creation, the same binding `Mask::init` makes by id.
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::primitives::{input, InputProps};
//! use spark_forms::masks::MaskKind;
//! use spark_forms::types::InputType;
//!
//! let cleanup = input(InputProps {
//!     id: Some("phone".into()),
//!     name: Some("phone".into()),
//!     input_type: InputType::Tel,
//!     mask: Some(MaskKind::Phone),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::{attrs, core, field};
use crate::engine::on_destroy;
use crate::types::ElementKind;
use super::types::{Cleanup, InputProps};
use super::{create_element, release_cleanup};

/// Create an input field.
///
/// Returns a cleanup function that releases the field and any mask bound
/// through the `mask` prop.
pub fn input(props: InputProps) -> Cleanup {
    let index = create_element(props.id.as_deref(), ElementKind::Input, &props.classes);

    field::set_input_type(index, props.input_type);
    core::set_flags(index, props.flags);
    field::set_min_length(index, props.min_length);

    if let Some(name) = props.name {
        field::set_name(index, name);
    }

    // Checkables carry their submitted value; text inputs carry typed text
    if props.input_type.is_checkable() {
        field::set_value(index, props.checked_value.unwrap_or_else(|| "on".to_string()));
    } else if let Some(signal) = props.value_signal {
        field::set_value_signal(index, signal);
    } else if let Some(value) = props.value {
        field::set_value(index, value);
    }

    if let Some(mask) = props.mask {
        attrs::set_attribute(index, "data-mask", format!("{mask:?}").to_lowercase());
        let unbind = mask.bind_at(index);
        on_destroy(index, unbind);
    }

    release_cleanup(index)
}
