//! Lesson 1: data types and their sizes

use crate::error::Result;
use crate::page::Page;
use bytewise_core::survey::{fixed_width_table, student_record, STUDENT_NAME};
use bytewise_core::text::decode_text;
use bytewise_core::{RenderConfig, TypeReport};

/// Render the data types lesson
pub fn render(config: &RenderConfig) -> Result<String> {
    let mut page = Page::new(config);
    page.banner("RUST DATA TYPES")?;

    tracing::debug!("data types: samples");
    let reports = student_record();
    for (i, report) in reports.iter().enumerate() {
        sample(&mut page, i + 1, report)?;
    }

    tracing::debug!("data types: fixed-width table");
    page.section("FIXED-WIDTH TYPES")?;
    page.blank()?;
    for prim in fixed_width_table() {
        page.line(format!(
            "{:6} {:2} {:5}  {} to {}",
            prim.name,
            prim.bytes,
            if prim.bytes == 1 { "byte" } else { "bytes" },
            prim.min,
            prim.max
        ))?;
    }

    tracing::debug!("data types: character codes");
    page.section("HOW TEXT IS STORED")?;
    page.line(format!("\nEach letter of {:?} is a number:", STUDENT_NAME))?;
    for code in decode_text(STUDENT_NAME) {
        page.item(format!(
            "'{}' = {:3} = {} = 0x{}",
            code.ch, code.code, code.binary, code.hex
        ))?;
    }

    page.closing(&["Rust checks every type before the program runs!"], "🎉")?;
    Ok(page.finish())
}

fn sample(page: &mut Page<'_>, number: usize, report: &TypeReport) -> Result<()> {
    page.heading(number, report.label)?;
    page.item(format!("{} = {}", report.binding, report.value))?;
    page.item(format!("Type: {}", report.type_name))?;

    if !report.keys.is_empty() {
        page.item(format!("Keys: {:?}", report.keys))?;
    } else if let Some(length) = report.length {
        page.item(format!("Length: {} {}", length, report.length_unit))?;
    }

    if report.heap_bytes == 0 {
        page.item(format!("Memory size: {} bytes", report.inline_bytes))?;
    } else {
        page.item(format!(
            "Memory size: {} bytes (+{} on the heap, {} total)",
            report.inline_bytes,
            report.heap_bytes,
            report.total_bytes()
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> String {
        render(&RenderConfig::DEFAULT).unwrap()
    }

    #[test]
    fn test_all_six_samples() {
        let out = page();
        for heading in ["1. Integer:", "2. Float:", "3. String:", "4. Boolean:", "5. Vec:", "6. Map:"] {
            assert!(out.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_sample_lines() {
        let out = page();
        assert!(out.contains("   age = 12\n"));
        assert!(out.contains("   Type: i32\n"));
        assert!(out.contains("   Memory size: 4 bytes\n"));
        assert!(out.contains("   name = \"Emma\"\n"));
        assert!(out.contains("   Length: 4 characters\n"));
        assert!(out.contains("   Length: 4 items\n"));
        assert!(out.contains("   Keys: [\"age\", \"grade\", \"name\"]\n"));
    }

    #[test]
    fn test_map_line_shows_plain_values() {
        let out = page();
        assert!(out.contains("   student = {\"age\": 12, \"grade\": \"6th\", \"name\": \"Emma\"}\n"));
        assert!(!out.contains("Int("));
        assert!(!out.contains("Text("));
    }

    #[test]
    fn test_heap_sizes_show_total() {
        let reports = student_record();
        let name = &reports[2];
        let out = page();
        assert!(out.contains(&format!(
            "   Memory size: {} bytes (+{} on the heap, {} total)\n",
            name.inline_bytes,
            name.heap_bytes,
            name.total_bytes()
        )));
    }

    #[test]
    fn test_length_unit_comes_from_report() {
        let report = TypeReport::of("Text", "word", &String::from("hey")).with_length(3, "letters");
        let mut page = Page::new(&RenderConfig::DEFAULT);
        sample(&mut page, 1, &report).unwrap();
        assert!(page.finish().contains("   Length: 3 letters\n"));
    }

    #[test]
    fn test_character_codes() {
        let out = page();
        assert!(out.contains("'E' =  69 = 01000101 = 0x45"));
        assert!(out.contains("'a' =  97 = 01100001 = 0x61"));
        assert!(out.contains("Each letter of \"Emma\" is a number:"));
    }

    #[test]
    fn test_fixed_width_rows() {
        let out = page();
        assert!(out.contains("i32     4 bytes  -2147483648 to 2147483647"));
        assert!(out.contains("bool    1 byte   false to true"));
    }
}
