use crate::CodecError;
use crate::digits::parse_digits;

/// Luhn check digit for a sequence of digit values (each `0..=9`).
///
/// Walking right to left, digits at even distance from the right (0, 2, 4, ...)
/// are doubled, with 9 subtracted when the double exceeds 9.
pub fn luhn_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &digit)| {
            debug_assert!(digit <= 9, "luhn input must be decimal digits");
            let digit = u32::from(digit);
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Luhn check digit for a decimal string.
pub fn luhn_check_digit_str(digits: &str) -> Result<u8, CodecError> {
    let values = parse_digits(digits)?;
    Ok(luhn_check_digit(&values))
}

/// True when the final digit of `number` is the Luhn check digit of the rest.
pub fn is_luhn_valid(number: &str) -> bool {
    match parse_digits(number) {
        Ok(values) if values.len() >= 2 => {
            let (body, check) = values.split_at(values.len() - 1);
            luhn_check_digit(body) == check[0]
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_imei_check_digits() {
        assert_eq!(luhn_check_digit_str("49015420323751"), Ok(8));
        assert_eq!(luhn_check_digit_str("35050556000000"), Ok(6));
        assert!(is_luhn_valid("490154203237518"));
        assert!(!is_luhn_valid("490154203237519"));
    }

    #[test]
    fn empty_body_has_zero_check_digit() {
        assert_eq!(luhn_check_digit(&[]), 0);
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            luhn_check_digit_str("12a4"),
            Err(CodecError::NonDigit {
                position: 2,
                found: 'a'
            })
        );
        assert!(!is_luhn_valid("12-4"));
        assert!(!is_luhn_valid("7"));
    }
}
