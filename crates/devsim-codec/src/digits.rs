use std::ops::RangeInclusive;

use crate::CodecError;

/// Parse a decimal string into digit values.
pub fn parse_digits(value: &str) -> Result<Vec<u8>, CodecError> {
    if value.is_empty() {
        return Err(CodecError::Empty);
    }
    value
        .chars()
        .enumerate()
        .map(|(position, found)| {
            found
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(CodecError::NonDigit { position, found })
        })
        .collect()
}

pub fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// True when `value` is exactly `len` ASCII digits.
pub fn is_digits(value: &str, len: usize) -> bool {
    is_digits_in(value, len..=len)
}

/// True when `value` is all ASCII digits and its length falls in `lengths`.
pub fn is_digits_in(value: &str, lengths: RangeInclusive<usize>) -> bool {
    lengths.contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_digits() {
        let digits = parse_digits("0460").unwrap();
        assert_eq!(digits, vec![0, 4, 6, 0]);
        assert_eq!(render_digits(&digits), "0460");
        assert_eq!(parse_digits(""), Err(CodecError::Empty));
    }

    #[test]
    fn digit_length_rules() {
        assert!(is_digits("460", 3));
        assert!(!is_digits("46", 3));
        assert!(is_digits_in("07", 2..=3));
        assert!(is_digits_in("007", 2..=3));
        assert!(!is_digits_in("0007", 2..=3));
        assert!(!is_digits_in("4a0", 2..=3));
    }
}
