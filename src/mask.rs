//! Input masks for the phone and PIN fields.
//!
//! Both masks are total over arbitrary strings: non-digits are dropped,
//! excess digits are truncated without notice, and the remaining digits are
//! regrouped. Applying a mask to its own output returns the same string.

use crate::form::FieldName;

/// Maximum number of digits kept in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Maximum number of digits kept in a Spidr PIN.
pub const PIN_DIGITS: usize = 16;

const PIN_GROUP: usize = 4;

/// Format a phone number as `DDD`, `DDD-DDD` or `DDD-DDD-DDDD`.
pub fn format_phone(raw: &str) -> String {
    let digits = leading_digits(raw, PHONE_DIGITS);
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Format a PIN as dash-separated groups of four digits.
pub fn format_pin(raw: &str) -> String {
    let digits: Vec<char> = leading_digits(raw, PIN_DIGITS).chars().collect();
    digits
        .chunks(PIN_GROUP)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

/// Apply the mask belonging to `field`, or return `raw` unchanged.
pub fn format_field(field: FieldName, raw: &str) -> String {
    match field {
        FieldName::Phone => format_phone(raw),
        FieldName::SpidrPin => format_pin(raw),
        _ => raw.to_string(),
    }
}

/// First `limit` ASCII digits of `raw`, in order.
fn leading_digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}
