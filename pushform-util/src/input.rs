//! Input filters applied while the user types.

use once_cell::sync::Lazy;
use regex::Regex;

static NOT_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]").expect("valid regex"));
static NOT_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// Country prefix of the phone mask.
pub const PHONE_PREFIX: &str = "+7";

/// Number of subscriber digits after the prefix.
pub const PHONE_DIGITS: usize = 10;

/// Keep only ASCII digits and decimal points.
pub fn filter_number(raw: &str) -> String {
    NOT_NUMERIC.replace_all(raw, "").into_owned()
}

/// Format a phone number with the mask `+7 (000) 000-00-00`.
///
/// Only the typed part of the mask is rendered, so partial input stays
/// editable. A leading `+7` typed by the user is not counted twice.
pub fn mask_phone(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let digits = NOT_DIGIT.replace_all(trimmed, "");
    let digits = if trimmed.starts_with(PHONE_PREFIX) {
        &digits[1..]
    } else {
        &digits[..]
    };

    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(18);
    out.push_str(PHONE_PREFIX);
    for (i, c) in digits.chars().take(PHONE_DIGITS).enumerate() {
        match i {
            0 => out.push_str(" ("),
            3 => out.push_str(") "),
            6 | 8 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}
