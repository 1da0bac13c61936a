//! Mask Binding - Attach a mask to a field.
//!
//! One generic helper shared by every mask type. It owns the field's value
//! from `init` on: the `Input` handler is the only writer, and it rewrites
//! the whole value from scratch each time. The keypress guard merely keeps
//! obviously wrong characters from flashing in before the rewrite.

use crate::engine::arrays::field;
use crate::engine::get_index;
use crate::primitives::Cleanup;
use crate::state::keyboard::{self, KeyboardEvent};
use crate::state::events;

use super::Mask;

/// Whether the digit-only guard rejects this keystroke.
///
/// Named keys (Backspace, arrows, ...) and shortcuts pass through; any
/// other character that is not an ASCII digit is rejected.
pub fn rejects_keystroke(event: &KeyboardEvent) -> bool {
    if event.modifiers.ctrl || event.modifiers.meta {
        return false;
    }
    event.char().is_some_and(|c| !c.is_ascii_digit())
}

/// Bind mask `M` to the field registered under `field_id`.
///
/// A missing field logs a warning and returns None; nothing else happens.
/// An existing value is formatted once, in place. The returned cleanup
/// removes both listeners; releasing the element removes them too.
pub fn bind_mask<M: Mask>(field_id: &str) -> Option<Cleanup> {
    let Some(index) = get_index(field_id) else {
        tracing::warn!(field_id, mask = M::NAME, "field not found, mask not applied");
        return None;
    };
    Some(bind_mask_at::<M>(index))
}

/// Bind mask `M` to the field at `index`.
pub fn bind_mask_at<M: Mask>(index: usize) -> Cleanup {
    let current = field::get_value(index);
    if !current.is_empty() {
        field::set_value(index, M::format(&current));
    }

    let input_cleanup = events::on_input(index, move |_| {
        let value = field::get_value(index);
        let formatted = M::format(&value);
        if formatted != value {
            field::set_value(index, formatted);
        }
    });

    let key_cleanup = keyboard::on_keypress(index, rejects_keystroke);

    tracing::debug!(index, mask = M::NAME, "mask bound");

    Box::new(move || {
        input_cleanup();
        key_cleanup();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::{CepMask, PhoneMask};
    use crate::state::keyboard::Modifiers;
    use crate::engine::{allocate_index, reset_registry};
    use crate::state::events::EventType;
    use crate::state::input;
    use pretty_assertions::assert_eq;

    fn setup(id: &str) -> usize {
        reset_registry();
        allocate_index(Some(id))
    }

    #[test]
    fn test_missing_field_is_not_fatal() {
        reset_registry();
        assert!(bind_mask::<PhoneMask>("nope").is_none());
        assert!(bind_mask::<PhoneMask>("nope").is_none());
    }

    #[test]
    fn test_existing_value_formatted_once() {
        let index = setup("cep");
        field::set_value(index, "01310100");
        let _cleanup = bind_mask::<CepMask>("cep");
        assert_eq!(field::get_value(index), "01310-100");
    }

    #[test]
    fn test_empty_value_left_alone() {
        let index = setup("cep");
        let _cleanup = bind_mask::<CepMask>("cep");
        assert_eq!(field::get_value(index), "");
    }

    #[test]
    fn test_typing_formats_each_keystroke() {
        let index = setup("phone");
        let _cleanup = bind_mask::<PhoneMask>("phone");

        input::type_text(index, "119");
        assert_eq!(field::get_value(index), "(11) 9");

        input::type_text(index, "a8765-4321");
        assert_eq!(field::get_value(index), "(11) 98765-4321");
    }

    #[test]
    fn test_paste_is_normalized() {
        let index = setup("phone");
        let _cleanup = bind_mask::<PhoneMask>("phone");

        input::paste(index, "tel: +55 (11) 3265-4321");
        // 12 digits, capped at 11
        assert_eq!(field::get_value(index), "(55) 11326-5432");
    }

    #[test]
    fn test_keystroke_guard() {
        assert!(rejects_keystroke(&KeyboardEvent::new("a")));
        assert!(rejects_keystroke(&KeyboardEvent::new("-")));
        assert!(!rejects_keystroke(&KeyboardEvent::new("4")));
        assert!(!rejects_keystroke(&KeyboardEvent::new("Backspace")));
        assert!(!rejects_keystroke(&KeyboardEvent::with_modifiers("v", Modifiers::ctrl())));
    }

    #[test]
    fn test_cleanup_removes_listeners() {
        let index = setup("phone");
        let cleanup = bind_mask::<PhoneMask>("phone").unwrap();
        assert_eq!(events::handler_count(index, EventType::Input), 1);
        assert_eq!(keyboard::handler_count(index), 1);

        cleanup();
        assert_eq!(events::handler_count(index, EventType::Input), 0);
        assert_eq!(keyboard::handler_count(index), 0);

        input::paste(index, "11");
        assert_eq!(field::get_value(index), "11");
    }

    #[test]
    fn test_old_page_cleanup_leaves_new_binding_alone() {
        setup("phone");
        let old_page = bind_mask::<PhoneMask>("phone").unwrap();

        // Page unload, then the next page binds the same field id
        reset_registry();
        let index = allocate_index(Some("phone"));
        let _new_page = bind_mask::<PhoneMask>("phone").unwrap();

        old_page();
        assert_eq!(events::handler_count(index, EventType::Input), 1);
        assert_eq!(keyboard::handler_count(index), 1);

        input::paste(index, "11987654321");
        assert_eq!(field::get_value(index), "(11) 98765-4321");
    }
}
