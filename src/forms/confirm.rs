//! Confirmation guard for destructive form submissions.
//!
//! Forms carrying a `data-confirm` attribute ask before submitting. The
//! attribute's value is the prompt; an empty value falls back to the default
//! message. A denied prompt prevents the submission.

use crate::config::get_config;
use crate::engine::arrays::{attrs, core};
use crate::engine::{get_index, query};
use crate::primitives::Cleanup;
use crate::state::{dialog, events};
use crate::types::ElementKind;

/// Attribute marking a form that needs confirmation.
pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";

/// Submit-time confirmation prompts.
pub struct ConfirmAction;

impl ConfirmAction {
    /// Guard every form carrying `data-confirm`.
    ///
    /// `default_message` overrides the configured fallback prompt.
    pub fn init(default_message: Option<&str>) -> Cleanup {
        let fallback = default_message
            .map(str::to_string)
            .unwrap_or_else(|| get_config().confirm_message);

        let forms = query(|i| {
            core::get_element_kind(i) == ElementKind::Form
                && attrs::has_attribute(i, CONFIRM_ATTRIBUTE)
        });

        let cleanups: Vec<Cleanup> = forms
            .into_iter()
            .map(|form_index| {
                let fallback = fallback.clone();
                guard(form_index, move || {
                    attrs::get_attribute(form_index, CONFIRM_ATTRIBUTE)
                        .filter(|message| !message.is_empty())
                        .unwrap_or_else(|| fallback.clone())
                })
            })
            .collect();

        tracing::debug!(forms = cleanups.len(), "confirm guards installed");
        run_all(cleanups)
    }

    /// Guard the listed forms with a fixed `message`. Missing ids are skipped.
    pub fn init_for(form_ids: &[&str], message: &str) -> Cleanup {
        let cleanups: Vec<Cleanup> = form_ids
            .iter()
            .filter_map(|&form_id| {
                let Some(form_index) = get_index(form_id) else {
                    tracing::warn!(form_id, "form not found, confirm not applied");
                    return None;
                };
                let message = message.to_string();
                Some(guard(form_index, move || message.clone()))
            })
            .collect();
        run_all(cleanups)
    }
}

/// Prevent submission of `form_index` unless the prompt is confirmed.
fn guard(form_index: usize, message: impl Fn() -> String + 'static) -> Cleanup {
    let off = events::on_submit(form_index, move |event| {
        if event.is_default_prevented() {
            return;
        }
        if !dialog::confirm(&message()) {
            event.prevent_default();
        }
    });
    Box::new(off)
}

fn run_all(cleanups: Vec<Cleanup>) -> Cleanup {
    Box::new(move || {
        for cleanup in cleanups {
            cleanup();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reset_config;
    use crate::engine::reset_registry;
    use crate::primitives::{form, FormProps};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn setup() -> Rc<RefCell<Vec<String>>> {
        reset_registry();
        reset_config();
        dialog::clear_confirm_responder();
        Rc::new(RefCell::new(Vec::new()))
    }

    fn answer(seen: &Rc<RefCell<Vec<String>>>, yes: bool) {
        let seen = seen.clone();
        dialog::set_confirm_responder(move |message| {
            seen.borrow_mut().push(message.to_string());
            yes
        });
    }

    fn confirm_form(id: &str, message: &str) -> usize {
        let _ = form(FormProps {
            id: Some(id.into()),
            attributes: HashMap::from([(CONFIRM_ATTRIBUTE.to_string(), message.to_string())]),
            ..Default::default()
        });
        get_index(id).unwrap()
    }

    #[test]
    fn test_denied_prompt_blocks_submit() {
        let seen = setup();
        let delete = confirm_form("delete-user", "Delete this user?");
        let _off = ConfirmAction::init(None);

        answer(&seen, false);
        assert!(!events::submit(delete));

        answer(&seen, true);
        assert!(events::submit(delete));
        assert_eq!(*seen.borrow(), vec!["Delete this user?", "Delete this user?"]);
    }

    #[test]
    fn test_empty_attribute_uses_default_message() {
        let seen = setup();
        let delete = confirm_form("delete", "");
        let _off = ConfirmAction::init(None);
        answer(&seen, true);

        events::submit(delete);
        assert_eq!(*seen.borrow(), vec!["Are you sure?"]);
    }

    #[test]
    fn test_explicit_default_message() {
        let seen = setup();
        let delete = confirm_form("delete", "");
        let _off = ConfirmAction::init(Some("Really?"));
        answer(&seen, true);

        events::submit(delete);
        assert_eq!(*seen.borrow(), vec!["Really?"]);
    }

    #[test]
    fn test_no_responder_denies() {
        setup();
        let delete = confirm_form("delete", "Sure?");
        let _off = ConfirmAction::init(None);

        assert!(!events::submit(delete));
    }

    #[test]
    fn test_unmarked_forms_are_left_alone() {
        setup();
        let _ = form(FormProps { id: Some("search".into()), ..Default::default() });
        let _off = ConfirmAction::init(None);

        assert!(events::submit(get_index("search").unwrap()));
    }

    #[test]
    fn test_init_for_targets_listed_forms() {
        let seen = setup();
        let _ = form(FormProps { id: Some("a".into()), ..Default::default() });
        let _off = ConfirmAction::init_for(&["a", "missing"], "Proceed?");
        answer(&seen, false);

        assert!(!events::submit(get_index("a").unwrap()));
        assert_eq!(*seen.borrow(), vec!["Proceed?"]);
    }

    #[test]
    fn test_already_prevented_submit_is_not_prompted() {
        let seen = setup();
        let delete = confirm_form("delete", "Sure?");
        let _veto = events::on_submit(delete, |event| event.prevent_default());
        let _off = ConfirmAction::init(None);
        answer(&seen, true);

        assert!(!events::submit(delete));
        assert!(seen.borrow().is_empty());
    }
}
