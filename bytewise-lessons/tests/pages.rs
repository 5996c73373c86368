//! Integration tests for rendered lesson pages
//!
//! Only deterministic lines are compared; address lines vary per run.

use bytewise_core::RenderConfig;
use bytewise_lessons::{render, Lesson};

fn strip_addresses(page: &str) -> Vec<String> {
    page.lines()
        .filter(|l| !l.contains("0x") || l.contains("Color 0x") || l.contains("Masking with 0x"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_pages_are_deterministic_without_addresses() {
    let config = RenderConfig::DEFAULT;
    for lesson in Lesson::ALL {
        let first = render(lesson, &config).unwrap();
        let second = render(lesson, &config).unwrap();
        assert_eq!(strip_addresses(&first), strip_addresses(&second), "{lesson}");
    }
}

#[test]
fn test_rule_width_applies_everywhere() {
    let config = RenderConfig::new(30, false).unwrap();
    let page = render(Lesson::Memory, &config).unwrap();
    let rules: Vec<&str> = page.lines().filter(|l| l.starts_with('=')).collect();
    assert!(!rules.is_empty());
    assert!(rules.iter().all(|r| r.len() == 30));
    assert!(!page.contains('🦀'));
}

#[test]
fn test_not_is_explained_at_fixed_width() {
    let page = render(Lesson::BinaryHex, &RenderConfig::DEFAULT).unwrap();
    assert!(page.contains("Masking with 0xFF keeps the low 8 bits: 250."));
    assert!(page.contains("!5 is -6"));
}

#[test]
fn test_truth_table_rows() {
    let page = render(Lesson::BinaryHex, &RenderConfig::DEFAULT).unwrap();
    assert!(page.contains("   x y | AND OR XOR NAND\n"));
    assert!(page.contains("   1 1 |  1   1   0    0\n"));
    assert!(page.contains("   0 0 |  0   0   0    1\n"));
}
