//! Link Primitive - Anchor with an `href`.

use super::types::{Cleanup, LinkProps};
use super::{create_element, release_cleanup};
use crate::engine::arrays::attrs;
use crate::types::ElementKind;

/// Create a link.
pub fn link(props: LinkProps) -> Cleanup {
    let index = create_element(props.id.as_deref(), ElementKind::Link, &props.classes);
    attrs::set_attribute(index, "href", props.href);
    release_cleanup(index)
}
