//! Text measurement tests against the public API.

use quill_glyph::{Glyph, default_spacing, filter_text, glyphs, text_width};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_width_is_glyphs_plus_gaps() {
    let text = "Quill Pen";
    for height in [10.0, 50.0, 72.5] {
        for spacing in [0.0, 4.0, 19.25] {
            let n = glyphs(text).count();
            let sum: f64 = glyphs(text).map(|g| g.width_at(height)).sum();
            let expected = sum + (n - 1) as f64 * spacing;
            assert!(close(text_width(text, height, Some(spacing)), expected));
        }
    }
}

#[test]
fn test_width_ignores_case_and_punctuation() {
    assert_eq!(
        text_width("Hello!", 50.0, None),
        text_width("HELLO", 50.0, None)
    );
    assert_eq!(filter_text("Hello!"), filter_text("HELLO"));
}

#[test]
fn test_space_counts_as_glyph() {
    let h = 50.0;
    let s = default_spacing(h);
    let space = Glyph::new(' ').unwrap().width_at(h);
    let l = Glyph::new('L').unwrap().width_at(h);
    assert!(close(text_width("L L", h, None), l + s + space + s + l));
}

#[test]
fn test_empty_is_zero_for_any_spacing() {
    for spacing in [None, Some(0.0), Some(12.0), Some(-3.0)] {
        assert_eq!(text_width("", 50.0, spacing), 0.0);
    }
}
