// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display width of codepoints, in terminal columns.
//!
//! A glyph is one base codepoint followed by any zero width codepoints (combining marks,
//! format characters) that attach to it. Cursor motion and deletion in
//! [`crate::LineBuffer`] move by whole glyphs, and the redraw math in
//! [`crate::RedrawPlan`] adds up glyph widths.

use unicode_width::UnicodeWidthChar;

/// Columns occupied by `ch` on screen: `0`, `1` or `2`.
#[must_use]
pub fn glyph_width(ch: char) -> usize {
    if is_zero_width(ch) {
        return 0;
    }
    // ASCII fast path.
    if ch < '\x7f' {
        return 1;
    }
    UnicodeWidthChar::width(ch).map_or(0, |width| width.min(2))
}

/// `true` for codepoints that occupy no column and attach to the preceding glyph:
/// control characters, combining marks, and format characters.
#[must_use]
pub fn is_zero_width(ch: char) -> bool {
    ch.is_control() || (ch >= '\u{300}' && UnicodeWidthChar::width(ch) == Some(0))
}

/// Format characters (general category Cf): soft hyphen, bidi controls, zero width
/// joiners and spaces, tag characters and the like.
const FORMAT_CHARS: &[(char, char)] = &[
    ('\u{ad}', '\u{ad}'),
    ('\u{600}', '\u{605}'),
    ('\u{61c}', '\u{61c}'),
    ('\u{6dd}', '\u{6dd}'),
    ('\u{70f}', '\u{70f}'),
    ('\u{890}', '\u{891}'),
    ('\u{8e2}', '\u{8e2}'),
    ('\u{180e}', '\u{180e}'),
    ('\u{200b}', '\u{200f}'),
    ('\u{202a}', '\u{202e}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206f}'),
    ('\u{feff}', '\u{feff}'),
    ('\u{fff9}', '\u{fffb}'),
    ('\u{110bd}', '\u{110bd}'),
    ('\u{110cd}', '\u{110cd}'),
    ('\u{13430}', '\u{1343f}'),
    ('\u{1bca0}', '\u{1bca3}'),
    ('\u{1d173}', '\u{1d17a}'),
    ('\u{e0001}', '\u{e0001}'),
    ('\u{e0020}', '\u{e007f}'),
];

/// Private use areas (general category Co).
const PRIVATE_USE_CHARS: &[(char, char)] = &[
    ('\u{e000}', '\u{f8ff}'),
    ('\u{f0000}', '\u{ffffd}'),
    ('\u{100000}', '\u{10fffd}'),
];

/// `true` for codepoints in the Unicode "Other" category that can be held in a `char`:
/// controls (Cc), format characters (Cf) and private use (Co). Surrogates (Cs) are not
/// valid `char`s. Unassigned codepoints (Cn) are not tracked.
#[must_use]
pub fn is_other_category(ch: char) -> bool {
    let in_table = |table: &[(char, char)]| {
        table.iter().any(|&(low, high)| (low..=high).contains(&ch))
    };
    ch.is_control() || in_table(FORMAT_CHARS) || in_table(PRIVATE_USE_CHARS)
}

/// Sum of [`glyph_width`] over `chars`.
#[must_use]
pub fn glyphs_width(chars: &[char]) -> usize { chars.iter().copied().map(glyph_width).sum() }

/// Sum of [`glyph_width`] over the codepoints of `text`.
#[must_use]
pub fn str_width(text: &str) -> usize { text.chars().map(glyph_width).sum() }

/// Number of codepoints making up the first glyph of `chars`, including the zero width
/// codepoints attached to it. `0` when `chars` is empty.
#[must_use]
pub fn next_glyph_len(chars: &[char]) -> usize {
    let mut index = 0;
    let mut seen_base = false;
    while let Some(&ch) = chars.get(index) {
        if !is_zero_width(ch) {
            if seen_base {
                break;
            }
            seen_base = true;
        }
        index += 1;
    }
    index
}

/// Number of codepoints making up the last glyph of `chars`: the last codepoint that
/// has a width, plus the zero width codepoints after it. `0` when `chars` is empty.
#[must_use]
pub fn prev_glyph_len(chars: &[char]) -> usize {
    let mut index = chars.len();
    while index > 0 {
        index -= 1;
        if !is_zero_width(chars[index]) {
            break;
        }
    }
    chars.len() - index
}

/// Width of `chars` laid out from column `start` on a terminal `columns` wide that
/// wraps. A double width glyph never straddles a row boundary: when it would start in
/// the last column, that column is skipped. Returns the absolute column after the last
/// glyph, counted from the start of the first row.
#[must_use]
pub fn wrapped_width(chars: &[char], columns: usize, start: usize) -> usize {
    let mut position = start;
    for &ch in chars {
        match glyph_width(ch) {
            0 => {}
            2 => {
                position += 2;
                if columns > 0 && position % columns == 1 {
                    position += 1;
                }
            }
            width => position += width,
        }
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('a', 1 ; "ascii")]
    #[test_case('\t', 0 ; "control")]
    #[test_case('\u{7f}', 0 ; "delete")]
    #[test_case('\u{301}', 0 ; "combining acute")]
    #[test_case('é', 1 ; "latin one")]
    #[test_case('中', 2 ; "cjk")]
    #[test_case('😀', 2 ; "emoji")]
    fn test_glyph_width(ch: char, expected: usize) {
        assert_eq!(glyph_width(ch), expected);
    }

    #[test_case('\t', true ; "tab")]
    #[test_case('\u{1b}', true ; "escape")]
    #[test_case('\u{9b}', true ; "c1 control")]
    #[test_case('\u{ad}', true ; "soft hyphen")]
    #[test_case('\u{200b}', true ; "zero width space")]
    #[test_case('\u{202e}', true ; "right to left override")]
    #[test_case('\u{feff}', true ; "byte order mark")]
    #[test_case('\u{e0041}', true ; "tag letter")]
    #[test_case('\u{e000}', true ; "private use")]
    #[test_case('\u{10fffd}', true ; "supplementary private use")]
    #[test_case('>', false ; "ascii punctuation")]
    #[test_case(' ', false ; "space")]
    #[test_case('é', false ; "latin one")]
    #[test_case('\u{301}', false ; "combining acute")]
    #[test_case('中', false ; "cjk")]
    #[test_case('\u{f900}', false ; "past private use")]
    fn test_is_other_category(ch: char, expected: bool) {
        assert_eq!(is_other_category(ch), expected);
    }

    #[test]
    fn test_glyph_lengths_attach_combining_marks() {
        let chars: Vec<char> = "e\u{301}x".chars().collect();
        assert_eq!(next_glyph_len(&chars), 2);
        assert_eq!(prev_glyph_len(&chars), 1);
        assert_eq!(prev_glyph_len(&chars[..2]), 2);
        assert_eq!(next_glyph_len(&[]), 0);
        assert_eq!(prev_glyph_len(&[]), 0);
    }

    #[test]
    fn test_width_sums() {
        assert_eq!(str_width("a中\u{301}b"), 4);
        let chars: Vec<char> = "中中".chars().collect();
        assert_eq!(glyphs_width(&chars), 4);
    }

    #[test]
    fn test_wrapped_width_skips_last_column_for_wide_glyph() {
        // Prompt takes 4 columns of a 5 column terminal, a wide glyph can't fit in the
        // last column so it starts on the next row.
        let chars: Vec<char> = "中".chars().collect();
        assert_eq!(wrapped_width(&chars, 5, 4), 7);
        assert_eq!(wrapped_width(&chars, 5, 2), 4);
        assert_eq!(wrapped_width(&['a', 'b'], 5, 4), 6);
    }
}
