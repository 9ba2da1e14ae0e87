//! Property tests for the identifier codec.

use devsim_codec::{
    format_decimal, is_luhn_valid, luhn_check_digit, luhn_check_digit_str, render_digits,
    round_to,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn appended_check_digit_validates(body in proptest::collection::vec(0u8..=9, 1..20)) {
        let check = luhn_check_digit(&body);
        let mut number = body.clone();
        number.push(check);
        prop_assert!(is_luhn_valid(&render_digits(&number)));
    }

    #[test]
    fn wrong_check_digit_is_rejected(body in proptest::collection::vec(0u8..=9, 1..20), offset in 1u8..=9) {
        let check = (luhn_check_digit(&body) + offset) % 10;
        let mut number = body.clone();
        number.push(check);
        prop_assert!(!is_luhn_valid(&render_digits(&number)));
    }

    #[test]
    fn string_and_slice_forms_agree(body in "[0-9]{1,20}") {
        let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
        prop_assert_eq!(luhn_check_digit_str(&body), Ok(luhn_check_digit(&digits)));
    }

    #[test]
    fn formatted_decimals_parse_back(value in -500.0f64..500.0) {
        let rounded = round_to(value, 2);
        let text = format_decimal(rounded);
        prop_assert!(text.contains('.'));
        prop_assert!(!text.contains('e'));
        prop_assert_eq!(text.parse::<f64>().unwrap(), rounded);
    }
}
