//! Scroll State Module
//!
//! Records scroll-into-view requests. There is no viewport here: the host
//! reads the pending request with [`take_scroll_request`] and performs the
//! actual scroll with its own renderer.

use std::cell::RefCell;

use crate::types::{ScrollBehavior, ScrollBlock};

// =============================================================================
// SCROLL REQUESTS
// =============================================================================

/// A request to bring an element into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

thread_local! {
    static PENDING: RefCell<Option<ScrollRequest>> = const { RefCell::new(None) };
}

/// Ask the host to scroll `index` into view. Replaces any pending request.
pub fn scroll_into_view(index: usize, behavior: ScrollBehavior, block: ScrollBlock) {
    PENDING.with(|p| *p.borrow_mut() = Some(ScrollRequest { index, behavior, block }));
}

/// Pending request, without consuming it.
pub fn pending_scroll_request() -> Option<ScrollRequest> {
    PENDING.with(|p| *p.borrow())
}

/// Consume the pending request.
pub fn take_scroll_request() -> Option<ScrollRequest> {
    PENDING.with(|p| p.borrow_mut().take())
}

// =============================================================================
// TESTS
// =============================================================================
