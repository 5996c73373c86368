//! Base conversion between integers and their binary/hexadecimal text

use crate::error::{LessonError, Result};
use std::num::IntErrorKind;

/// Binary digits without prefix: `42 -> "101010"`
pub fn to_binary(n: u64) -> String {
    format!("{:b}", n)
}

/// Binary digits with `0b` prefix: `42 -> "0b101010"`
pub fn to_binary_prefixed(n: u64) -> String {
    format!("{:#b}", n)
}

/// Exactly eight binary digits: `5 -> "00000101"`
pub fn to_binary8(n: u8) -> String {
    format!("{:08b}", n)
}

/// Lowercase hex digits without prefix: `42 -> "2a"`
pub fn to_hex(n: u64) -> String {
    format!("{:x}", n)
}

/// Uppercase hex digits without prefix: `42 -> "2A"`
pub fn to_hex_upper(n: u64) -> String {
    format!("{:X}", n)
}

/// Lowercase hex digits with `0x` prefix: `42 -> "0x2a"`
pub fn to_hex_prefixed(n: u64) -> String {
    format!("{:#x}", n)
}

/// Parse binary text (optional `0b` prefix, `_` separators allowed)
pub fn parse_binary(text: &str) -> Result<u64> {
    parse_radix(strip_prefix(text, "0b"), 2)
}

/// Parse hex text, case-insensitive (optional `0x` prefix, `_` separators allowed)
pub fn parse_hex(text: &str) -> Result<u64> {
    parse_radix(strip_prefix(text, "0x"), 16)
}

/// Parse unsigned digits in `radix` (2-36)
pub fn parse_radix(text: &str, radix: u32) -> Result<u64> {
    if !(2..=36).contains(&radix) {
        return Err(LessonError::InvalidRadix(radix));
    }

    let digits: String = text.trim().chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(LessonError::EmptyInput);
    }

    // from_str_radix tolerates a leading '+'; we only take digits
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(LessonError::InvalidDigit { digit: bad, radix });
    }

    u64::from_str_radix(&digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => LessonError::Overflow {
            input: text.to_string(),
        },
        IntErrorKind::Empty => LessonError::EmptyInput,
        _ => LessonError::InvalidDigit {
            digit: digits.chars().next().unwrap_or('?'),
            radix,
        },
    })
}

fn strip_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    let trimmed = text.trim();
    match trimmed.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &trimmed[prefix.len()..],
        _ => trimmed,
    }
}
