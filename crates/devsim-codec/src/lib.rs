//! Check-digit and numeric formatting primitives for device identifiers.
//!
//! Everything here is a pure function. The generator uses these to build
//! IMEIs and fixed-width numeric fields, and the directive mapper uses
//! [`format_decimal`] to render sensor and coordinate arguments.

#![deny(unsafe_code)]

mod decimal;
mod digits;
mod error;
mod luhn;

pub use decimal::{format_decimal, round_to};
pub use digits::{is_digits, is_digits_in, parse_digits, render_digits};
pub use error::CodecError;
pub use luhn::{is_luhn_valid, luhn_check_digit, luhn_check_digit_str};
