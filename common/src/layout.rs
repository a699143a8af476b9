//! Layout constants and row-height estimation
//!
//! Unit conversions the spreadsheet format is exact about, plus a cheap
//! character-count wrap estimator. The estimator is intentionally not a
//! font-metrics simulation: small error is accepted in exchange for a
//! deterministic layout without a rendering engine.

// ============================================
// Conversion constants (exact, format-defined)
// ============================================

/// Pixel -> EMU (English Metric Unit), the image anchoring unit.
pub const PX_TO_EMU: f64 = 9525.0;

/// Pixel -> point, used for row heights.
pub const PX_TO_PT: f64 = 0.75;

/// Assumed pixels per column character-width unit (Calibri 11 digit width).
pub const PX_PER_CHAR: f64 = 7.0;

// ============================================
// Row / image sizing
// ============================================

/// Height of one wrapped text line (pt).
pub const BASE_LINE_HEIGHT_PT: f64 = 15.0;

/// Fixed vertical padding added to every sized row (pt).
pub const ROW_PADDING_PT: f64 = 6.0;

/// Display height of an embedded photo (px).
pub const IMAGE_HEIGHT_PX: f64 = 120.0;

/// Vertical inset of a photo inside its cell (px).
pub const IMAGE_TOP_INSET_PX: u32 = 2;

// ============================================
// Converters
// ============================================

/// px -> EMU
#[inline]
pub fn px_to_emu(px: f64) -> f64 {
    px * PX_TO_EMU
}

/// px -> pt
#[inline]
pub fn px_to_pt(px: f64) -> f64 {
    px * PX_TO_PT
}

/// Column character width -> px
#[inline]
pub fn char_width_to_px(chars: f64) -> f64 {
    chars * PX_PER_CHAR
}

// ============================================
// Estimation
// ============================================

/// Number of visually wrapped lines for `text` in a column
/// `column_char_width` characters wide.
///
/// Explicit newlines are estimated per line and summed; each line wraps
/// every `floor(width) - 2` characters (the `-2` covers cell inset).
/// Minimum one line, even for empty text.
pub fn estimate_lines(text: &str, column_char_width: f64) -> u32 {
    let usable = ((column_char_width.floor() as i64) - 2).max(1) as u32;
    text.split('\n')
        .map(|line| {
            let len = line.chars().count().max(1) as u32;
            len.div_ceil(usable)
        })
        .sum::<u32>()
        .max(1)
}

/// Row height for a wrapped-line count (pt).
pub fn row_height_pt(lines: u32) -> f64 {
    lines as f64 * BASE_LINE_HEIGHT_PT + ROW_PADDING_PT
}

/// Horizontal offset (px) that centers an image of `image_px_width`
/// within a column `column_char_width` characters wide. Images wider
/// than the column are left-anchored, never shifted negative.
pub fn center_offset_px(column_char_width: f64, image_px_width: f64) -> f64 {
    (char_width_to_px(column_char_width) / 2.0 - image_px_width / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_are_exact() {
        assert_eq!(px_to_pt(4.0), 3.0);
        assert_eq!(px_to_emu(1.0), 9525.0);
        assert_eq!(char_width_to_px(10.0), 70.0);
    }

    #[test]
    fn test_estimate_floor_is_one_line() {
        assert_eq!(estimate_lines("", 40.0), 1);
        assert_eq!(estimate_lines("", 0.0), 1);
    }

    #[test]
    fn test_estimate_single_line_fits() {
        // 38 usable chars at width 40
        assert_eq!(estimate_lines("x".repeat(38).as_str(), 40.0), 1);
        assert_eq!(estimate_lines("x".repeat(39).as_str(), 40.0), 2);
    }

    #[test]
    fn test_estimate_counts_chars_not_bytes() {
        // Thai text is multi-byte but wraps by character count
        let text = "ก".repeat(39);
        assert_eq!(estimate_lines(&text, 40.0), 2);
    }

    #[test]
    fn test_estimate_sums_explicit_lines() {
        assert_eq!(estimate_lines("a\nb\nc", 40.0), 3);
        // Empty explicit lines still count as one each
        assert_eq!(estimate_lines("a\n\nb", 40.0), 3);
    }

    #[test]
    fn test_estimate_monotonic_in_length() {
        let mut prev = 0;
        for len in 0..200 {
            let lines = estimate_lines(&"x".repeat(len), 25.0);
            assert!(lines >= prev, "not monotonic at len {}", len);
            prev = lines;
        }
    }

    #[test]
    fn test_narrow_column_clamps_usable_width() {
        // floor(2.5) - 2 = 0 clamps to 1 char per line
        assert_eq!(estimate_lines("abc", 2.5), 3);
    }

    #[test]
    fn test_row_height() {
        assert_eq!(row_height_pt(1), 21.0);
        assert_eq!(row_height_pt(3), 51.0);
    }

    #[test]
    fn test_center_offset() {
        // 20 chars -> 140 px column; 100 px image -> 20 px offset
        assert_eq!(center_offset_px(20.0, 100.0), 20.0);
        // Wider than the column -> clamped to zero
        assert_eq!(center_offset_px(10.0, 200.0), 0.0);
    }
}
