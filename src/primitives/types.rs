//! Primitive types - Props and cleanup.
//!
//! These types define the interface for element props. Every primitive
//! returns a [`Cleanup`] that releases the element and everything bound to it.

use std::collections::HashMap;
use spark_signals::Signal;

use crate::masks::MaskKind;
use crate::types::{ElementFlags, InputType};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by primitives and bindings.
///
/// Call this to remove the element (or the binding) and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Children builder. Runs with the parent pushed as the current context.
pub type Children = Box<dyn FnOnce()>;

// =============================================================================
// Form Props
// =============================================================================

/// Properties for the Form element.
///
/// # Example
///
/// ```ignore
/// form(FormProps {
///     id: Some("user-form".into()),
///     flags: ElementFlags::NO_VALIDATE,
///     children: Some(Box::new(|| {
///         input(InputProps { id: Some("phone".into()), ..Default::default() });
///     })),
///     ..Default::default()
/// });
/// ```
#[derive(Default)]
pub struct FormProps {
    /// Optional element ID for lookup.
    pub id: Option<String>,
    /// `NO_VALIDATE` opts the form into custom validation.
    pub flags: ElementFlags,
    pub classes: Vec<String>,
    /// Extra attributes, e.g. `data-confirm`.
    pub attributes: HashMap<String, String>,
    pub children: Option<Children>,
}

// =============================================================================
// Container Props
// =============================================================================

/// Properties for a plain grouping element (nav bars, fieldsets, ...).
#[derive(Default)]
pub struct ContainerProps {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub children: Option<Children>,
}

// =============================================================================
// Input Props
// =============================================================================

/// Properties for the Input element.
#[derive(Default)]
pub struct InputProps {
    // =========================================================================
    // Identity
    // =========================================================================

    /// Optional element ID for lookup.
    pub id: Option<String>,

    /// Form data key. Unnamed inputs are left out of autosave.
    pub name: Option<String>,

    pub input_type: InputType,

    // =========================================================================
    // Value
    // =========================================================================

    /// Initial text value.
    pub value: Option<String>,

    /// Caller-owned value signal (two-way bound). Takes precedence over `value`.
    pub value_signal: Option<Signal<String>>,

    /// Value submitted for a checked checkbox or radio (default: `"on"`).
    pub checked_value: Option<String>,

    // =========================================================================
    // Behavior
    // =========================================================================

    /// `REQUIRED`, `CHECKED`, `AUTOFOCUS`, `DISABLED`.
    pub flags: ElementFlags,

    /// Minimum length in chars checked by validation (0 = none).
    pub min_length: usize,

    /// Mask bound at creation.
    pub mask: Option<MaskKind>,

    pub classes: Vec<String>,
}

// =============================================================================
// Button / Icon / Link Props
// =============================================================================

/// Properties for the Button element.
#[derive(Default)]
pub struct ButtonProps {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub children: Option<Children>,
}

/// Properties for the Icon element (icon-font glyph).
#[derive(Default)]
pub struct IconProps {
    pub id: Option<String>,
    /// e.g. `["fa", "fa-eye"]`
    pub classes: Vec<String>,
}

/// Properties for the Link element.
#[derive(Default)]
pub struct LinkProps {
    pub id: Option<String>,
    /// Absolute URL, path, or `#fragment`.
    pub href: String,
    pub classes: Vec<String>,
}
