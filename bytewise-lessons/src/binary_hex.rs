//! Lesson 2: binary, hexadecimal and bitwise operations

use crate::error::Result;
use crate::page::Page;
use bytewise_core::bitwise::{is_even, truth_table};
use bytewise_core::radix::{
    parse_binary, parse_hex, to_binary, to_binary8, to_binary_prefixed, to_hex_prefixed,
};
use bytewise_core::{
    BitwiseReport, RenderConfig, Rgb, LESSON_A, LESSON_B, LESSON_COLOR, LESSON_NUMBER,
    NOT_MASK, NOT_MASK_WIDTH,
};

/// Render the binary/hex lesson
pub fn render(config: &RenderConfig) -> Result<String> {
    let mut page = Page::new(config);
    page.banner("BINARY AND HEXADECIMAL CONVERSIONS")?;

    tracing::debug!(number = LESSON_NUMBER, "binary/hex: conversions");
    conversions(&mut page)?;

    tracing::debug!(a = LESSON_A, b = LESSON_B, "binary/hex: bitwise");
    page.section("BITWISE OPERATIONS")?;
    bitwise(&mut page, &BitwiseReport::new(LESSON_A, LESSON_B))?;

    page.section("PRACTICAL EXAMPLES")?;
    practical(&mut page)?;

    tracing::debug!(color = %LESSON_COLOR, "binary/hex: colors");
    page.section("COLORS IN HEXADECIMAL")?;
    colors(&mut page, LESSON_COLOR)?;

    page.closing(&["All done!"], "🎉")?;
    Ok(page.finish())
}

fn conversions(page: &mut Page<'_>) -> Result<()> {
    let number = LESSON_NUMBER;

    page.heading(1, "Decimal to Binary")?;
    page.item(format!("Number: {}", number))?;
    page.item(format!("Binary: {}", to_binary_prefixed(number)))?;
    page.item(format!("Binary (without 0b): {}", to_binary(number)))?;

    let hex = to_hex_prefixed(number);
    page.heading(2, "Decimal to Hexadecimal")?;
    page.item(format!("Number: {}", number))?;
    page.item(format!("Hex: {}", hex))?;
    page.item(format!("Hex (uppercase): {}", hex.to_uppercase()))?;

    let binary_string = "101010";
    page.heading(3, "Binary to Decimal")?;
    page.item(format!("Binary: {}", binary_string))?;
    page.item(format!("Decimal: {}", parse_binary(binary_string)?))?;

    let hex_string = "2A";
    page.heading(4, "Hexadecimal to Decimal")?;
    page.item(format!("Hex: {}", hex_string))?;
    page.item(format!("Decimal: {}", parse_hex(hex_string)?))?;
    Ok(())
}

/// Eight-bit rendering of a (possibly negative) result
fn bits8(value: i64) -> String {
    to_binary8(value as u8)
}

fn bitwise(page: &mut Page<'_>, r: &BitwiseReport) -> Result<()> {
    page.line(format!("\na = {} (binary: {})", r.a, bits8(r.a)))?;
    page.line(format!("b = {} (binary: {})", r.b, bits8(r.b)))?;

    page.line("\nBitwise Operations:")?;
    let rows: [(&str, i64, &str); 5] = [
        ("a & b (AND)", r.and, "Checks if both bits are 1"),
        ("a | b (OR)", r.or, "Checks if either bit is 1"),
        ("a ^ b (XOR)", r.xor, "Checks if bits are different"),
        ("a << 1 (Left shift)", r.shl, "Multiply by 2"),
        ("a >> 1 (Right shift)", r.shr, "Divide by 2"),
    ];
    for &(label, value, usage) in &rows[..3] {
        operator_row(page, label, value, usage)?;
    }
    page.line(format!(
        "  {:21}= {:3} (as {}-bit unsigned: {}, binary: {})",
        "!a (NOT)",
        r.not_a,
        NOT_MASK_WIDTH,
        r.not_a_masked,
        to_binary8(r.not_a_masked as u8)
    ))?;
    page.line("    Use: Flips all bits")?;
    for &(label, value, usage) in &rows[3..] {
        operator_row(page, label, value, usage)?;
    }
    page.line(format!(
        "\nRust's NOT flips every bit of the i64, so !{} is {}.",
        r.a, r.not_a
    ))?;
    page.line(format!(
        "Masking with 0x{:X} keeps the low {} bits: {}.",
        NOT_MASK,
        NOT_MASK_WIDTH,
        r.not_a_masked
    ))?;

    page.line("\nTruth table:")?;
    page.item("x y | AND OR XOR NAND")?;
    for row in truth_table() {
        page.item(format!(
            "{} {} |  {}   {}   {}    {}",
            row.x as u8, row.y as u8, row.and as u8, row.or as u8, row.xor as u8, row.nand as u8
        ))?;
    }
    Ok(())
}

fn operator_row(page: &mut Page<'_>, label: &str, value: i64, usage: &str) -> Result<()> {
    page.line(format!("  {:21}= {:3} (binary: {})", label, value, bits8(value)))?;
    page.line(format!("    Use: {}", usage))?;
    Ok(())
}

fn practical(page: &mut Page<'_>) -> Result<()> {
    let num = LESSON_NUMBER as i64;
    page.line(format!(
        "\nIs {} even? {}",
        num,
        if is_even(num) { "Yes" } else { "No" }
    ))?;
    page.line("(We check the last bit: 0 = even, 1 = odd)")?;

    let packed = LESSON_COLOR.packed();
    let split = Rgb::from_packed(packed);
    page.line(format!("\nColor 0x{:06X} breaks down to:", packed))?;
    page.line(format!("  Red   = {:3} (0x{:02X})", split.red, split.red))?;
    page.line(format!("  Green = {:3} (0x{:02X})", split.green, split.green))?;
    page.line(format!("  Blue  = {:3} (0x{:02X})", split.blue, split.blue))?;
    Ok(())
}

fn colors(page: &mut Page<'_>, color: Rgb) -> Result<()> {
    page.line(format!("\nRGB Color: {}", color))?;
    page.line(format!("Hex Color: {}", color.to_hex()))?;
    Ok(())
}
