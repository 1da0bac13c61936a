//! Dialog Module - Confirmation prompts
//!
//! The host installs a responder that shows a confirmation prompt and
//! answers yes or no. Without a responder every confirmation is denied, so
//! destructive submissions never go through silently.

use std::cell::RefCell;
use std::rc::Rc;

/// Answers a confirmation prompt. Return true to confirm.
pub type ConfirmResponder = Rc<dyn Fn(&str) -> bool>;

thread_local! {
    static RESPONDER: RefCell<Option<ConfirmResponder>> = const { RefCell::new(None) };
}

/// Install the confirmation responder, replacing any previous one.
pub fn set_confirm_responder<F>(responder: F)
where
    F: Fn(&str) -> bool + 'static,
{
    RESPONDER.with(|r| *r.borrow_mut() = Some(Rc::new(responder)));
}

/// Remove the responder.
pub fn clear_confirm_responder() {
    RESPONDER.with(|r| *r.borrow_mut() = None);
}

/// Ask the user to confirm `message`.
pub fn confirm(message: &str) -> bool {
    let responder = RESPONDER.with(|r| r.borrow().clone());
    match responder {
        Some(responder) => responder(message),
        None => {
            tracing::warn!(message, "no confirm responder installed, denying");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_no_responder_denies() {
        clear_confirm_responder();
        assert!(!confirm("Delete?"));
    }

    #[test]
    fn test_responder_sees_message() {
        let seen = Rc::new(RefCell::new(String::new()));
        let seen_clone = seen.clone();
        set_confirm_responder(move |message| {
            *seen_clone.borrow_mut() = message.to_string();
            true
        });

        assert!(confirm("Delete user?"));
        assert_eq!(*seen.borrow(), "Delete user?");
        clear_confirm_responder();
    }
}
