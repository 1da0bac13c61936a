//! Core types for spark-forms.
//!
//! These types define what an element is. They are stored in the parallel
//! arrays and read by every helper that acts on the document.

// =============================================================================
// Element Types - For parallel arrays
// =============================================================================

/// Element kinds for the parallel arrays pattern.
///
/// Each element at index i has elementKind[i] set to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ElementKind {
    #[default]
    None = 0,
    Container = 1,
    Form = 2,
    Input = 3,
    Button = 4,
    Icon = 5,
    Link = 6,
}

impl ElementKind {
    /// Elements that carry a value and take part in validation.
    pub const fn is_field(&self) -> bool {
        matches!(self, Self::Input)
    }
}

// =============================================================================
// Input Types
// =============================================================================

/// The `type` of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum InputType {
    #[default]
    Text = 0,
    Password = 1,
    Tel = 2,
    Email = 3,
    Checkbox = 4,
    Radio = 5,
    Hidden = 6,
}

impl InputType {
    /// Checkable inputs submit their value only when checked.
    pub const fn is_checkable(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Hidden => "hidden",
        }
    }
}

// =============================================================================
// Element Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Boolean element attributes packed into one cell.
    ///
    /// Combine with bitwise OR: `ElementFlags::REQUIRED | ElementFlags::AUTOFOCUS`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ElementFlags: u8 {
        const NONE = 0;
        const REQUIRED = 1 << 0;
        const CHECKED = 1 << 1;
        const NO_VALIDATE = 1 << 2;
        const AUTOFOCUS = 1 << 3;
        const DISABLED = 1 << 4;
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// How a scroll into view is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Vertical alignment of the target after scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let flags = ElementFlags::REQUIRED | ElementFlags::AUTOFOCUS;
        assert!(flags.contains(ElementFlags::REQUIRED));
        assert!(!flags.contains(ElementFlags::CHECKED));
    }

    #[test]
    fn test_checkable_inputs() {
        assert!(InputType::Checkbox.is_checkable());
        assert!(InputType::Radio.is_checkable());
        assert!(!InputType::Tel.is_checkable());
        assert_eq!(InputType::Password.as_str(), "password");
    }
}
