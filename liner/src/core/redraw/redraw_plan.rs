// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single row redraw with horizontal scrolling.
//!
//! When prompt and line fit, the whole line is drawn. Otherwise a window of the line,
//! centered on the cursor, is drawn after the prompt, with `{` and `}` marking the
//! sides that were cut off:
//!
//! ```text
//! width 20, prompt "", 100 × "x", cursor at 50
//!
//! space  = 20 - 0 - 1         = 19   (one column kept free for the cursor)
//! start  = 50 - 19 / 2        = 41
//! end    = start + 19         = 60
//! markers: start > 0 → "{" and start = 42, end < 100 → "}" and end = 59
//!
//! {xxxxxxxxxxxxxxxxx}
//!          ▲ cursor column 9
//! ```
//!
//! All arithmetic is in screen columns, so double width glyphs and combining marks
//! land where the terminal actually draws them.

use std::io;

use crate::{LinerError, Output, glyphs_width, next_glyph_len, ok, str_width};

pub const LEFT_MARKER: char = '{';
pub const RIGHT_MARKER: char = '}';

/// What to draw for one refresh, and where the cursor goes. Recomputed on every
/// refresh, and a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedrawPlan {
    /// Codepoints of the line that are drawn.
    pub visible: Vec<char>,
    /// Index in the line of the first visible codepoint.
    pub visible_start: usize,
    pub left_marker: bool,
    pub right_marker: bool,
    /// Absolute column, counted from the start of the prompt.
    pub cursor_column: usize,
}

impl RedrawPlan {
    /// # Errors
    ///
    /// [`LinerError::ZeroWidth`] if `width` is `0`.
    pub fn compute(
        prompt: &str,
        buffer: &[char],
        cursor: usize,
        width: usize,
    ) -> Result<Self, LinerError> {
        if width == 0 {
            return Err(LinerError::ZeroWidth);
        }

        let cursor = cursor.min(buffer.len());
        let prompt_width = str_width(prompt);
        let buffer_width = glyphs_width(buffer);

        if prompt_width + buffer_width < width {
            return Ok(Self {
                visible: buffer.to_vec(),
                visible_start: 0,
                left_marker: false,
                right_marker: false,
                cursor_column: prompt_width + glyphs_width(&buffer[..cursor]),
            });
        }

        // Window in columns of the line.
        let space = width.saturating_sub(prompt_width + 1);
        let cursor_glyph = glyphs_width(&buffer[..cursor]);
        let mut start = cursor_glyph.saturating_sub(space / 2);
        let mut end = start + space;
        if end > buffer_width {
            end = buffer_width;
            start = end.saturating_sub(space);
        }

        let left_marker = start > 0;
        let right_marker = end < buffer_width;
        if left_marker {
            start += 1;
        }
        if right_marker {
            end = end.saturating_sub(1).max(start);
        }

        let (first, last) = glyphs_within(buffer, start, end);
        let visible_cursor = cursor.clamp(first, last);
        let cursor_column = prompt_width
            + usize::from(left_marker)
            + glyphs_width(&buffer[first..visible_cursor]);

        Ok(Self {
            visible: buffer[first..last].to_vec(),
            visible_start: first,
            left_marker,
            right_marker,
            cursor_column,
        })
    }

    /// Markers plus visible text, what goes on screen after the prompt.
    #[must_use]
    pub fn line_text(&self) -> String {
        let mut text = String::with_capacity(self.visible.len() + 2);
        if self.left_marker {
            text.push(LEFT_MARKER);
        }
        text.extend(self.visible.iter());
        if self.right_marker {
            text.push(RIGHT_MARKER);
        }
        text
    }

    /// Repaint the current row: prompt, line text, erase the rest, place the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `output` fails.
    pub fn emit(&self, prompt: &str, output: &mut dyn Output) -> io::Result<()> {
        output.move_cursor_to_column(0)?;
        output.write_text(prompt)?;
        output.write_text(&self.line_text())?;
        output.erase_to_end_of_line()?;
        output.move_cursor_to_column(self.cursor_column)?;
        ok!()
    }
}

/// Codepoint range `first..last` covering the whole glyphs of `buffer` that lie in
/// columns `start..end`.
fn glyphs_within(buffer: &[char], start: usize, end: usize) -> (usize, usize) {
    let mut column = 0;
    let mut index = 0;
    let mut first = None;
    let mut last = 0;

    while index < buffer.len() {
        let len = next_glyph_len(&buffer[index..]);
        let width = glyphs_width(&buffer[index..index + len]);
        if column >= start && column + width <= end {
            first.get_or_insert(index);
            last = index + len;
        } else if column >= end {
            break;
        }
        column += width;
        index += len;
    }

    match first {
        Some(first) => (first, last),
        None => {
            let at = index.min(buffer.len());
            (at, at)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::OutputMock;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_line_that_fits_is_drawn_whole() {
        let buffer = chars("hello");
        let plan = RedrawPlan::compute("> ", &buffer, 2, 20).unwrap();
        assert_eq!(plan.line_text(), "hello");
        assert!(!plan.left_marker && !plan.right_marker);
        assert_eq!(plan.cursor_column, 4);
    }

    #[test]
    fn test_exact_fit_boundary_scrolls() {
        // prompt + line == width leaves no column for the cursor.
        let buffer = chars("abcdefgh");
        let plan = RedrawPlan::compute("> ", &buffer, 8, 10).unwrap();
        assert!(plan.left_marker);
        assert!(!plan.right_marker);
        assert_eq!(plan.line_text(), "{cdefgh");
        assert_eq!(plan.cursor_column, 9);

        let plan = RedrawPlan::compute("> ", &buffer, 8, 11).unwrap();
        assert_eq!(plan.line_text(), "abcdefgh");
    }

    #[test]
    fn test_window_centers_on_cursor() {
        let buffer = vec!['x'; 100];
        let plan = RedrawPlan::compute("", &buffer, 50, 20).unwrap();
        assert!(plan.left_marker);
        assert!(plan.right_marker);
        assert_eq!(plan.visible_start, 42);
        assert_eq!(plan.visible.len(), 17);
        assert_eq!(plan.cursor_column, 9);
        let drawn = plan.line_text();
        assert_eq!(str_width(&drawn), 19);
        assert!(plan.cursor_column < str_width(&drawn));
    }

    #[test]
    fn test_window_clamps_at_both_ends() {
        let buffer: Vec<char> = ('a'..='z').collect();

        let plan = RedrawPlan::compute("$ ", &buffer, 0, 12).unwrap();
        assert!(!plan.left_marker);
        assert_eq!(plan.line_text(), "abcdefgh}");
        assert_eq!(plan.cursor_column, 2);

        let plan = RedrawPlan::compute("$ ", &buffer, 26, 12).unwrap();
        assert!(!plan.right_marker);
        assert_eq!(plan.line_text(), "{stuvwxyz");
        assert_eq!(plan.cursor_column, 2 + 1 + 8);
    }

    #[test]
    fn test_wide_glyphs_are_counted_in_columns() {
        let buffer = chars("中文字");
        let plan = RedrawPlan::compute("> ", &buffer, 1, 20).unwrap();
        assert_eq!(plan.cursor_column, 4);

        let buffer: Vec<char> = "中".repeat(20).chars().collect();
        let plan = RedrawPlan::compute("", &buffer, 10, 12).unwrap();
        let drawn = plan.line_text();
        assert!(str_width(&drawn) <= 11);
        assert!(plan.cursor_column <= str_width(&drawn));
    }

    #[test]
    fn test_leading_combining_mark_keeps_row_inside_width() {
        let mut buffer = chars("\u{301} ");
        buffer.extend(std::iter::repeat_n('a', 40));
        let plan = RedrawPlan::compute("> ", &buffer, 0, 20).unwrap();
        assert_eq!(plan.line_text(), format!("\u{301} {}}}", "a".repeat(15)));
        assert_eq!(str_width("> ") + str_width(&plan.line_text()), 19);
        assert_eq!(plan.cursor_column, 2);
    }

    #[test]
    fn test_random_lines_never_fill_the_row() {
        let alphabet = ['a', ' ', '中', '\u{301}', '\u{200d}', 'é'];
        let mut rng = StdRng::seed_from_u64(0x11_4e);
        for _ in 0..2_000 {
            let len = rng.random_range(0..60);
            let buffer: Vec<char> = (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            let cursor = rng.random_range(0..=buffer.len());
            let width = rng.random_range(12..50);

            let plan = RedrawPlan::compute("> ", &buffer, cursor, width).unwrap();
            let drawn = str_width("> ") + str_width(&plan.line_text());
            assert!(drawn < width, "{buffer:?} cursor {cursor} width {width}");
            assert!(plan.cursor_column < width);
        }
    }

    #[test]
    fn test_zero_width_is_an_error() {
        assert!(matches!(
            RedrawPlan::compute("> ", &[], 0, 0),
            Err(LinerError::ZeroWidth)
        ));
    }

    #[test]
    fn test_plan_is_idempotent() {
        let buffer = chars("the quick brown fox jumps over the lazy dog");
        let first = RedrawPlan::compute("prompt> ", &buffer, 17, 24).unwrap();
        let second = RedrawPlan::compute("prompt> ", &buffer, 17, 24).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emit_paints_row_and_places_cursor() {
        let buffer = chars("hello");
        let plan = RedrawPlan::compute("> ", &buffer, 1, 20).unwrap();
        let mut output = OutputMock::new(20);
        output.write_text("stale text here").unwrap();
        plan.emit("> ", &mut output).unwrap();
        assert_eq!(output.current_row_text(), "> hello");
        assert_eq!(output.cursor(), (0, 3));
    }
}
