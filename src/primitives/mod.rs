//! Form Primitives - Element building blocks.
//!
//! This module provides the elements form helpers act on:
//! - [`form`] - Form with submit handling, holds fields
//! - [`container`] - Plain grouping element (nav bars, fieldsets)
//! - [`input`] - Text-like, checkbox and radio fields, optionally masked
//! - [`button`] / [`icon`] - Buttons and the glyphs inside them
//! - [`link`] - Anchors with an `href`
//!
//! # Architecture
//!
//! Elements are indices into parallel arrays. Each primitive:
//! 1. Allocates an index from the registry (reusing it if the id is known)
//! 2. Sets kind and parent from the current parent context
//! 3. Writes its props into the arrays
//! 4. Renders children with itself pushed as parent
//! 5. Returns a cleanup function that releases the element

mod types;
mod form;
mod input;
mod button;
mod link;

pub use types::*;
pub use form::{container, form};
pub use input::input;
pub use button::{button, icon};
pub use link::link;

use crate::engine::arrays::{attrs, core};
use crate::engine::{
    allocate_index, get_current_parent_index, pop_parent_context, push_parent_context,
    release_index,
};
use crate::types::ElementKind;

/// Allocate an element and attach it to the current parent.
fn create_element(id: Option<&str>, kind: ElementKind, classes: &[String]) -> usize {
    let index = allocate_index(id);
    core::set_element_kind(index, kind);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(index, Some(parent));
    }
    for class in classes {
        attrs::add_class(index, class);
    }
    index
}

/// Run a children builder with `index` as the parent context.
fn render_children(index: usize, children: Option<Children>) {
    if let Some(children) = children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }
}

/// Cleanup that releases `index` (and its subtree).
fn release_cleanup(index: usize) -> Cleanup {
    Box::new(move || release_index(index))
}
