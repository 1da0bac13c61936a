//! Field Masks - Brazilian phone, CPF and CEP formatting.
//!
//! Each mask turns arbitrary text into a canonically punctuated string:
//!
//! 1. keep only ASCII digits,
//! 2. drop every digit beyond the mask's cap,
//! 3. insert literal separators according to how many digits remain.
//!
//! Formatting never fails. Empty or digit-free input formats to `""`.
//! `unmask` strips separators and keeps every digit (no cap), so
//! `unmask(format(s))` is `raw_digits(s)` truncated to the cap.
//!
//! # Example
//!
//! ```
//! use spark_forms::masks::{Mask, PhoneMask, CpfMask, CepMask};
//!
//! assert_eq!(PhoneMask::format("11987654321"), "(11) 98765-4321");
//! assert_eq!(CpfMask::format("12345678901"), "123.456.789-01");
//! assert_eq!(CepMask::format("01310100"), "01310-100");
//! assert_eq!(PhoneMask::unmask("(11) 98765-4321"), "11987654321");
//! ```

mod binding;
mod cep;
mod cpf;
mod phone;

pub use binding::{bind_mask, bind_mask_at, rejects_keystroke};
pub use cep::CepMask;
pub use cpf::CpfMask;
pub use phone::PhoneMask;

use crate::primitives::Cleanup;

// =============================================================================
// Digit Extraction
// =============================================================================

/// Every ASCII digit of `input`, in order.
pub fn raw_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// First `max` digits of `input`.
fn capped_digits(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

// =============================================================================
// Mask Trait
// =============================================================================

/// A length-banded digit mask.
///
/// Implementors supply the cap and the template; formatting, unmasking and
/// field binding come for free.
pub trait Mask: Sized + 'static {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Digits kept by `format`. Anything beyond is dropped.
    const MAX_DIGITS: usize;

    /// Punctuate `digits`, which holds only ASCII digits and at most
    /// `MAX_DIGITS` of them.
    fn template(digits: &str) -> String;

    /// Canonical display string for `input`.
    fn format(input: &str) -> String {
        Self::template(&capped_digits(input, Self::MAX_DIGITS))
    }

    /// Digits of `input` with separators stripped. No cap.
    fn unmask(input: &str) -> String {
        raw_digits(input)
    }

    /// Whether `input` holds enough digits for a full value.
    fn is_complete(input: &str) -> bool {
        capped_digits(input, Self::MAX_DIGITS).len() == Self::MAX_DIGITS
    }

    /// Bind this mask to the field registered under `field_id`.
    ///
    /// Missing fields log a warning and return None.
    fn init(field_id: &str) -> Option<Cleanup> {
        bind_mask::<Self>(field_id)
    }

    /// Bind this mask to the field at `index`.
    fn bind_at(index: usize) -> Cleanup {
        bind_mask_at::<Self>(index)
    }
}

// =============================================================================
// Mask Kind - Runtime selection
// =============================================================================

/// The available masks, for callers that pick one at runtime
/// (e.g. from a `data-mask` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    Phone,
    Cpf,
    Cep,
}

impl MaskKind {
    /// Parse a mask name as written in markup (`phone`, `cpf`, `cep`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "phone" | "tel" => Some(Self::Phone),
            "cpf" => Some(Self::Cpf),
            "cep" => Some(Self::Cep),
            _ => None,
        }
    }

    pub fn max_digits(self) -> usize {
        match self {
            Self::Phone => PhoneMask::MAX_DIGITS,
            Self::Cpf => CpfMask::MAX_DIGITS,
            Self::Cep => CepMask::MAX_DIGITS,
        }
    }

    pub fn format(self, input: &str) -> String {
        match self {
            Self::Phone => PhoneMask::format(input),
            Self::Cpf => CpfMask::format(input),
            Self::Cep => CepMask::format(input),
        }
    }

    pub fn unmask(self, input: &str) -> String {
        match self {
            Self::Phone => PhoneMask::unmask(input),
            Self::Cpf => CpfMask::unmask(input),
            Self::Cep => CepMask::unmask(input),
        }
    }

    pub fn is_complete(self, input: &str) -> bool {
        match self {
            Self::Phone => PhoneMask::is_complete(input),
            Self::Cpf => CpfMask::is_complete(input),
            Self::Cep => CepMask::is_complete(input),
        }
    }

    pub fn init(self, field_id: &str) -> Option<Cleanup> {
        match self {
            Self::Phone => PhoneMask::init(field_id),
            Self::Cpf => CpfMask::init(field_id),
            Self::Cep => CepMask::init(field_id),
        }
    }

    pub fn bind_at(self, index: usize) -> Cleanup {
        match self {
            Self::Phone => PhoneMask::bind_at(index),
            Self::Cpf => CpfMask::bind_at(index),
            Self::Cep => CepMask::bind_at(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_digits() {
        assert_eq!(raw_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(raw_digits("abc"), "");
        // Non-ASCII digits are not digits here
        assert_eq!(raw_digits("١٢3"), "3");
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(MaskKind::from_name("phone"), Some(MaskKind::Phone));
        assert_eq!(MaskKind::from_name(" CPF "), Some(MaskKind::Cpf));
        assert_eq!(MaskKind::from_name("cep"), Some(MaskKind::Cep));
        assert_eq!(MaskKind::from_name("zip"), None);
    }

    #[test]
    fn test_kind_dispatch_matches_types() {
        let input = "x0131010099y";
        assert_eq!(MaskKind::Cep.format(input), CepMask::format(input));
        assert_eq!(MaskKind::Cpf.unmask(input), "0131010099");
        assert_eq!(MaskKind::Phone.max_digits(), 11);
        assert!(MaskKind::Cep.is_complete("01310-100"));
        assert!(!MaskKind::Cpf.is_complete("123.456"));
    }

    #[test]
    fn test_unmask_has_no_cap() {
        assert_eq!(CepMask::unmask("013101009999"), "013101009999");
    }
}
