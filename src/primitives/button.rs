//! Button and Icon Primitives.
//!
//! Icons are icon-font glyphs identified by their classes
//! (`fa fa-eye`); the password toggle swaps them.

use super::types::{ButtonProps, Cleanup, IconProps};
use super::{create_element, release_cleanup, render_children};
use crate::types::ElementKind;

/// Create a button.
pub fn button(props: ButtonProps) -> Cleanup {
    let index = create_element(props.id.as_deref(), ElementKind::Button, &props.classes);
    render_children(index, props.children);
    release_cleanup(index)
}

/// Create an icon.
pub fn icon(props: IconProps) -> Cleanup {
    let index = create_element(props.id.as_deref(), ElementKind::Icon, &props.classes);
    release_cleanup(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::attrs;
    use crate::engine::{first_child_of_kind, get_index, reset_registry};

    #[test]
    fn test_button_with_icon() {
        reset_registry();

        let _cleanup = button(ButtonProps {
            id: Some("togglePassword".into()),
            children: Some(Box::new(|| {
                let _ = icon(IconProps { classes: vec!["fa".into(), "fa-eye".into()], ..Default::default() });
            })),
            ..Default::default()
        });

        let button_index = get_index("togglePassword").unwrap();
        let icon_index = first_child_of_kind(button_index, ElementKind::Icon).unwrap();
        assert!(attrs::has_class(icon_index, "fa-eye"));
    }
}
