//! Form and Container Primitives - Elements that hold other elements.
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::primitives::{form, input, FormProps, InputProps};
//! use spark_forms::types::ElementFlags;
//!
//! let cleanup = form(FormProps {
//!     id: Some("delete-user".into()),
//!     attributes: [("data-confirm".to_string(), "Delete this user?".to_string())].into(),
//!     children: Some(Box::new(|| {
//!         input(InputProps { name: Some("id".into()), value: Some("7".into()), ..Default::default() });
//!     })),
//!     ..Default::default()
//! });
//! ```

use crate::engine::arrays::{attrs, core};
use crate::types::ElementKind;
use super::types::{Cleanup, ContainerProps, FormProps};
use super::{create_element, release_cleanup, render_children};

/// Create a form.
///
/// Returns a cleanup function that releases the form and its fields.
pub fn form(props: FormProps) -> Cleanup {
    let index = create_element(props.id.as_deref(), ElementKind::Form, &props.classes);

    core::set_flags(index, props.flags);
    for (name, value) in props.attributes {
        attrs::set_attribute(index, &name, value);
    }

    render_children(index, props.children);

    release_cleanup(index)
}

/// Create a plain container.
pub fn container(props: ContainerProps) -> Cleanup {
    let index = create_element(props.id.as_deref(), ElementKind::Container, &props.classes);
    render_children(index, props.children);
    release_cleanup(index)
}
