//! # spark-forms
//!
//! Field masks, validation hooks and form helpers for server-rendered pages.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): every
//! field value is a `Signal<String>`, so a host can bind it two ways.
//!
//! ## Architecture
//!
//! The document is modelled the way spark components are: elements are
//! indices into columnar arrays, found by string id, with events dispatched
//! synchronously to per-element handler registries.
//!
//! ```text
//! keystroke → keypress handlers → value → Input event → mask reformats
//! ```
//!
//! The masking core ([`masks`]) is pure: `format` and `unmask` never fail.
//! Everything else attaches behavior to elements and returns a cleanup.
//!
//! ## Modules
//!
//! - [`types`] - Element kinds, input types, flags
//! - [`engine`] - Element registry and parallel arrays
//! - [`primitives`] - Element constructors (form, input, button, icon, link)
//! - [`state`] - Events, keyboard, focus, storage, dialogs, scrolling
//! - [`masks`] - Phone, CPF and CEP masks and their field binding
//! - [`forms`] - Password toggle, validation, confirmation, autosave
//! - [`page`] - Active-link highlighting, smooth scroll, startup banner
//! - [`config`] / [`logging`] / [`error`] - Ambient setup

pub mod config;
pub mod engine;
pub mod error;
pub mod forms;
pub mod logging;
pub mod masks;
pub mod page;
pub mod primitives;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{get_config, reset_config, set_config, FormConfig};
pub use error::{require_element, FormError, FormResult};

pub use engine::{
    allocate_index, get_allocated_indices, get_current_parent_index, get_id, get_index,
    is_allocated, on_destroy, pop_parent_context, push_parent_context, release_index,
    reset_registry,
};

pub use primitives::{
    button, container, form, icon, input, link, ButtonProps, Cleanup, ContainerProps, FormProps,
    IconProps, InputProps, LinkProps,
};

pub use masks::{raw_digits, CepMask, CpfMask, Mask, MaskKind, PhoneMask};

pub use forms::{init_user_form, AutoSave, ConfirmAction, FormValidation, PasswordToggle};

pub use page::on_page_ready;

pub use state::{Event, EventType, KeyState, KeyboardEvent, Modifiers};
