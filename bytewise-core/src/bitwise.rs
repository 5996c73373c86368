//! Bitwise operations on fixed lesson operands
//!
//! NOT on a signed integer yields a negative number (`!5 == -6`). To show the
//! flipped bits as a positive quantity the result is masked to a fixed width,
//! [`NOT_MASK_WIDTH`] bits, treating the value as two's complement at that
//! width. Nothing here relies on implicit sign extension.

use crate::error::{LessonError, Result};

/// Width used when displaying NOT as an unsigned value
pub const NOT_MASK_WIDTH: u32 = 8;

/// All-ones mask of [`NOT_MASK_WIDTH`] bits
pub const NOT_MASK: u64 = (1u64 << NOT_MASK_WIDTH) - 1;

/// All-ones mask of `width` bits (1-64)
pub fn mask(width: u32) -> Result<u64> {
    match width {
        1..=63 => Ok((1u64 << width) - 1),
        64 => Ok(u64::MAX),
        _ => Err(LessonError::InvalidWidth(width)),
    }
}

/// `!value` viewed as an unsigned `width`-bit quantity
pub fn not_masked(value: i64, width: u32) -> Result<u64> {
    Ok(flip_within(value, mask(width)?))
}

#[inline]
fn flip_within(value: i64, mask: u64) -> u64 {
    (!value as u64) & mask
}

/// Even numbers have a clear low bit
#[inline]
pub fn is_even(n: i64) -> bool {
    n & 1 == 0
}

/// Results of every bitwise operator applied to `a` (and `b`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitwiseReport {
    pub a: i64,
    pub b: i64,
    pub and: i64,
    pub or: i64,
    pub xor: i64,
    /// `!a`, signed
    pub not_a: i64,
    /// `!a` masked to [`NOT_MASK_WIDTH`] bits
    pub not_a_masked: u64,
    /// `a << 1`
    pub shl: i64,
    /// `a >> 1`
    pub shr: i64,
}

impl BitwiseReport {
    pub fn new(a: i64, b: i64) -> Self {
        let report = Self {
            a,
            b,
            and: a & b,
            or: a | b,
            xor: a ^ b,
            not_a: !a,
            not_a_masked: flip_within(a, NOT_MASK),
            shl: a << 1,
            shr: a >> 1,
        };
        tracing::trace!(a, b, ?report, "computed bitwise report");
        report
    }
}

/// One row of the two-input truth table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRow {
    pub x: bool,
    pub y: bool,
    pub and: bool,
    pub or: bool,
    pub xor: bool,
    pub nand: bool,
}

impl BitRow {
    fn new(x: bool, y: bool) -> Self {
        Self {
            x,
            y,
            and: x & y,
            or: x | y,
            xor: x ^ y,
            nand: !(x & y),
        }
    }
}

/// Truth table for AND, OR, XOR and NAND over both inputs
pub fn truth_table() -> [BitRow; 4] {
    [
        BitRow::new(false, false),
        BitRow::new(false, true),
        BitRow::new(true, false),
        BitRow::new(true, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_operands() {
        let r = BitwiseReport::new(5, 3);
        assert_eq!(r.and, 1);
        assert_eq!(r.or, 7);
        assert_eq!(r.xor, 6);
        assert_eq!(r.not_a, -6);
        assert_eq!(r.not_a_masked, 250);
        assert_eq!(r.shl, 10);
        assert_eq!(r.shr, 2);
    }

    #[test]
    fn test_mask_bounds() {
        assert_eq!(mask(1).unwrap(), 1);
        assert_eq!(mask(8).unwrap(), 0xFF);
        assert_eq!(mask(64).unwrap(), u64::MAX);
        assert!(matches!(mask(0), Err(LessonError::InvalidWidth(0))));
        assert!(matches!(mask(65), Err(LessonError::InvalidWidth(65))));
    }

    #[test]
    fn test_not_masked_widths() {
        assert_eq!(not_masked(5, 8).unwrap(), 250);
        assert_eq!(not_masked(5, 4).unwrap(), 0b1010);
        assert_eq!(not_masked(0, 16).unwrap(), 0xFFFF);
        assert_eq!(not_masked(-1, 64).unwrap(), 0);
        assert!(not_masked(5, 0).is_err());
    }

    #[test]
    fn test_not_mask_constant() {
        assert_eq!(NOT_MASK, mask(NOT_MASK_WIDTH).unwrap());
        assert_eq!(NOT_MASK, 0xFF);
    }

    #[test]
    fn test_report_matches_not_masked() {
        let r = BitwiseReport::new(5, 3);
        assert_eq!(r.not_a_masked, not_masked(5, NOT_MASK_WIDTH).unwrap());
    }

    #[test]
    fn test_is_even() {
        assert!(is_even(42));
        assert!(is_even(0));
        assert!(!is_even(7));
        assert!(!is_even(-3));
    }

    #[test]
    fn test_truth_table() {
        let table = truth_table();
        assert_eq!(table.len(), 4);
        let last = table[3];
        assert!(last.x && last.y);
        assert!(last.and && last.or && !last.xor && !last.nand);
        let first = table[0];
        assert!(!first.and && !first.or && !first.xor && first.nand);
    }
}
