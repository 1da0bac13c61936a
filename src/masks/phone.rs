//! Phone mask: `(DD) NNNN-NNNN` for fixed lines, `(DD) NNNNN-NNNN` for mobiles.

use super::{capped_digits, Mask};

/// Brazilian phone number with area code.
///
/// The template depends only on how many digits there are. Ten digits render
/// as a fixed line and eleven as a mobile, so a mobile number still being
/// typed shows the fixed-line layout until its last digit arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneMask;

impl PhoneMask {
    /// Digits in a fixed-line number (area code included).
    pub const FIXED_LINE_DIGITS: usize = 10;
}

impl Mask for PhoneMask {
    const NAME: &'static str = "phone";
    const MAX_DIGITS: usize = 11;

    fn template(digits: &str) -> String {
        match digits.len() {
            0 => String::new(),
            1..=2 => format!("({digits}"),
            3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
            7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
            _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
        }
    }

    /// Complete at ten (fixed line) or eleven (mobile) digits.
    fn is_complete(input: &str) -> bool {
        capped_digits(input, Self::MAX_DIGITS).len() >= Self::FIXED_LINE_DIGITS
    }
}
