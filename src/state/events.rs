//! Events Module - DOM-style element events
//!
//! Handler registry and dispatch for the non-keystroke events form helpers
//! listen to: content changes (`Input`), `Click`, `Submit`, `Focus`, `Blur`.
//!
//! Dispatch bubbles from the target up through its parents. Handlers receive
//! a mutable [`Event`] and may prevent the default action or stop the event
//! from reaching ancestors. Every handler on the current element still runs
//! after `stop_propagation`.
//!
//! # API
//!
//! - `on(i, type, fn)` - Subscribe to an event type on element i
//! - `on_input` / `on_click` / `on_submit` / `on_blur` - Shorthands
//! - `dispatch(i, type)` - Fire an event, returns the finished [`Event`]
//!
//! # Example
//!
//! ```ignore
//! use spark_forms::state::events::{self, EventType};
//!
//! let cleanup = events::on_submit(form_index, |event| {
//!     event.prevent_default();
//! });
//!
//! let submitted = events::submit(form_index);
//! assert!(!submitted);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::engine::arrays::core;

// =============================================================================
// TYPES
// =============================================================================

/// Event types an element can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The element's value changed (typing, paste, programmatic edit).
    Input,
    Click,
    Submit,
    Focus,
    Blur,
}

impl EventType {
    /// Focus and blur do not bubble; everything else does.
    pub const fn bubbles(&self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// An event in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    /// Element the event was fired on.
    pub target: usize,
    /// Element whose handlers are currently running.
    pub current_target: usize,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: usize) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Cancel the default action (submission, navigation, ...).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching ancestors of the current element.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event handler. Shared so dispatch can snapshot the list.
pub type EventHandler = Rc<dyn Fn(&mut Event)>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    handlers: HashMap<(usize, EventType), Vec<(usize, EventHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn snapshot(&self, index: usize, event_type: EventType) -> Vec<EventHandler> {
        self.handlers
            .get(&(index, event_type))
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Fire an event on element `index` and bubble it up the parent chain.
///
/// Returns the event after all handlers ran; check
/// [`Event::is_default_prevented`] to decide whether the default action
/// should happen.
pub fn dispatch(index: usize, event_type: EventType) -> Event {
    let mut event = Event::new(event_type, index);
    let mut current = Some(index);

    while let Some(element) = current {
        event.current_target = element;

        let handlers = REGISTRY.with(|reg| reg.borrow().snapshot(element, event_type));
        for handler in handlers {
            handler(&mut event);
        }

        if event.is_propagation_stopped() || !event_type.bubbles() {
            break;
        }
        current = core::get_parent_index(element);
    }

    event.current_target = index;
    event
}

/// Fire an `Input` event: the element's content changed.
pub fn dispatch_input(index: usize) -> Event {
    dispatch(index, EventType::Input)
}

/// Click an element. Returns true if the default action should run.
pub fn click(index: usize) -> bool {
    !dispatch(index, EventType::Click).is_default_prevented()
}

/// Submit a form. Returns true if the submission should proceed.
pub fn submit(form_index: usize) -> bool {
    !dispatch(form_index, EventType::Submit).is_default_prevented()
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to `event_type` on element `index`.
/// Returns cleanup function.
pub fn on<F>(index: usize, event_type: EventType, handler: F) -> impl FnOnce()
where
    F: Fn(&mut Event) + 'static,
{
    let key = (index, event_type);
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.handlers.entry(key).or_default().push((id, Rc::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.handlers.get_mut(&key) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.handlers.remove(&key);
                }
            }
        });
    }
}

pub fn on_input<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&mut Event) + 'static,
{
    on(index, EventType::Input, handler)
}

pub fn on_click<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&mut Event) + 'static,
{
    on(index, EventType::Click, handler)
}

pub fn on_submit<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&mut Event) + 'static,
{
    on(index, EventType::Submit, handler)
}

pub fn on_blur<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&mut Event) + 'static,
{
    on(index, EventType::Blur, handler)
}

/// Number of handlers for one event type on an element.
pub fn handler_count(index: usize, event_type: EventType) -> usize {
    REGISTRY.with(|reg| reg.borrow().handlers.get(&(index, event_type)).map_or(0, Vec::len))
}

/// Clean up all handlers for an element index.
/// Called when the element is released.
pub fn cleanup_index(index: usize) {
    REGISTRY.with(|reg| {
        reg.borrow_mut().handlers.retain(|(i, _), _| *i != index);
    });
}

/// Drop every handler (page unload, tests).
///
/// Handler ids keep counting so a cleanup from before the reset can never
/// match a handler registered after it.
pub fn reset_event_state() {
    REGISTRY.with(|reg| reg.borrow_mut().handlers.clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_event_state();
        core::reset();
    }

    #[test]
    fn test_handler_runs_and_cleans_up() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on_input(0, move |_| count_clone.set(count_clone.get() + 1));

        dispatch_input(0);
        dispatch_input(0);
        assert_eq!(count.get(), 2);

        cleanup();
        dispatch_input(0);
        assert_eq!(count.get(), 2);
        assert_eq!(handler_count(0, EventType::Input), 0);
    }

    #[test]
    fn test_prevent_default_on_submit() {
        setup();

        let _cleanup = on_submit(1, |event| event.prevent_default());
        assert!(!submit(1));
        assert!(submit(2));
    }

    #[test]
    fn test_click_bubbles_to_parent() {
        setup();
        core::set_parent_index(1, Some(0));

        let parent_hits = Rc::new(Cell::new(0));
        let hits = parent_hits.clone();
        let _cleanup = on_click(0, move |event| {
            assert_eq!(event.target, 1);
            assert_eq!(event.current_target, 0);
            hits.set(hits.get() + 1);
        });

        click(1);
        assert_eq!(parent_hits.get(), 1);
    }

    #[test]
    fn test_stop_propagation() {
        setup();
        core::set_parent_index(1, Some(0));

        let parent_hit = Rc::new(Cell::new(false));
        let hit = parent_hit.clone();
        let _c1 = on_click(1, |event| event.stop_propagation());
        let _c2 = on_click(0, move |_| hit.set(true));

        click(1);
        assert!(!parent_hit.get());
    }

    #[test]
    fn test_blur_does_not_bubble() {
        setup();
        core::set_parent_index(1, Some(0));

        let parent_hit = Rc::new(Cell::new(false));
        let hit = parent_hit.clone();
        let _cleanup = on_blur(0, move |_| hit.set(true));

        dispatch(1, EventType::Blur);
        assert!(!parent_hit.get());
    }

    #[test]
    fn test_handler_may_subscribe_during_dispatch() {
        setup();

        let _cleanup = on_click(0, |_| {
            let _inner = on_click(0, |_| {});
        });
        click(0);
        assert_eq!(handler_count(0, EventType::Click), 2);
    }

    #[test]
    fn test_cleanup_index_only_touches_that_element() {
        setup();

        let _c1 = on_click(0, |_| {});
        let _c2 = on_submit(0, |_| {});
        let _c3 = on_click(1, |_| {});

        cleanup_index(0);
        assert_eq!(handler_count(0, EventType::Click), 0);
        assert_eq!(handler_count(0, EventType::Submit), 0);
        assert_eq!(handler_count(1, EventType::Click), 1);
    }

    #[test]
    fn test_stale_cleanup_after_reset_is_harmless() {
        setup();

        let stale = on_input(0, |_| {});
        reset_event_state();
        let _fresh = on_input(0, |_| {});

        stale();
        assert_eq!(handler_count(0, EventType::Input), 1);
    }
}
