//! Text filtering and measurement.
//!
//! Measurement and rendering both go through [`glyphs`], so the width reported
//! for a string always matches what is drawn for it.

use crate::glyph::{Glyph, fold};

/// Text height used when none is configured.
pub const DEFAULT_HEIGHT: f64 = 50.0;

/// Inter-glyph spacing as a fraction of text height.
pub const SPACING_RATIO: f64 = 0.3;

/// Spacing used at `height` when none is configured.
#[inline]
pub fn default_spacing(height: f64) -> f64 {
    height * SPACING_RATIO
}

/// Uppercase `text` and drop every character without a glyph.
///
/// ```
/// assert_eq!(quill_glyph::filter_text("Hello, World!"), "HELLO WORLD");
/// ```
pub fn filter_text(text: &str) -> String {
    text.chars().filter_map(fold).collect()
}

/// The glyphs that will be drawn for `text`, in order.
pub fn glyphs(text: &str) -> impl Iterator<Item = Glyph> + '_ {
    text.chars().filter_map(Glyph::new)
}

/// Rendered width of `text` on a straight baseline.
///
/// `spacing` is placed between glyphs only, never after the last one, and
/// defaults to [`default_spacing`]. Text with no drawable characters has width 0.
pub fn text_width(text: &str, height: f64, spacing: Option<f64>) -> f64 {
    let spacing = spacing.unwrap_or_else(|| default_spacing(height));
    let (count, glyph_width) = glyphs(text).fold((0usize, 0.0), |(count, width), glyph| {
        (count + 1, width + glyph.width_at(height))
    });

    if count == 0 {
        return 0.0;
    }
    glyph_width + spacing * (count - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_drops_unsupported() {
        assert_eq!(filter_text("Hello!"), "HELLO");
        assert_eq!(filter_text("a1b2 c3"), "AB C");
        assert_eq!(filter_text("!?#"), "");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_text("The Great Seal, 1776");
        assert_eq!(filter_text(&once), once);
    }

    #[test]
    fn test_empty_width_is_zero() {
        assert_eq!(text_width("", 50.0, None), 0.0);
        assert_eq!(text_width("123", 50.0, Some(7.0)), 0.0);
    }

    #[test]
    fn test_single_glyph_has_no_spacing() {
        assert_eq!(text_width("L", 50.0, Some(100.0)), 37.5);
    }

    #[test]
    fn test_default_spacing() {
        // M is 1.0 wide, L is 0.75 wide
        assert_eq!(text_width("ML", 10.0, None), 10.0 + 3.0 + 7.5);
    }
}
