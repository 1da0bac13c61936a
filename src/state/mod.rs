//! State Module - Runtime state management systems
//!
//! This module contains the state systems that form helpers hook into:
//!
//! - **Events** - Input, click, submit, focus, blur dispatch with bubbling
//! - **Keyboard** - Keypress event types and per-element handler registry
//! - **Input** - Host feed: typing, pasting, crossterm conversion
//! - **Focus** - Focused element, blur on focus change
//! - **Storage** - String key-value store used by autosave
//! - **Dialog** - Confirmation prompts
//! - **Scroll** - Scroll-into-view requests

pub mod dialog;
pub mod events;
pub mod focus;
pub mod input;
pub mod keyboard;
pub mod scroll;
pub mod storage;

pub use events::{Event, EventType};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
