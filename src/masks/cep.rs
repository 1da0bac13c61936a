//! CEP mask: `NNNNN-NNN`.

use super::Mask;

/// Brazilian postal code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CepMask;

impl Mask for CepMask {
    const NAME: &'static str = "cep";
    const MAX_DIGITS: usize = 8;

    fn template(digits: &str) -> String {
        match digits.len() {
            0..=5 => digits.to_string(),
            _ => format!("{}-{}", &digits[..5], &digits[5..]),
        }
    }
}
