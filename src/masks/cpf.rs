//! CPF mask: `NNN.NNN.NNN-NN`.

use super::Mask;

/// Brazilian individual taxpayer number.
///
/// Only punctuation is applied; check digits are not verified.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfMask;

impl Mask for CpfMask {
    const NAME: &'static str = "cpf";
    const MAX_DIGITS: usize = 11;

    fn template(digits: &str) -> String {
        match digits.len() {
            0..=3 => digits.to_string(),
            4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
            7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
            _ => format!("{}.{}.{}-{}", &digits[..3], &digits[3..6], &digits[6..9], &digits[9..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full() {
        assert_eq!(CpfMask::format("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_bands() {
        assert_eq!(CpfMask::format(""), "");
        assert_eq!(CpfMask::format("123"), "123");
        assert_eq!(CpfMask::format("1234"), "123.4");
        assert_eq!(CpfMask::format("123456"), "123.456");
        assert_eq!(CpfMask::format("1234567"), "123.456.7");
        assert_eq!(CpfMask::format("123456789"), "123.456.789");
        assert_eq!(CpfMask::format("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_extra_digits_dropped() {
        assert_eq!(CpfMask::format("123.456.789-0123"), "123.456.789-01");
    }

    #[test]
    fn test_unmask() {
        assert_eq!(CpfMask::unmask("123.456.789-01"), "12345678901");
    }
}
