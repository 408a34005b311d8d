// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line being edited, and a cursor into it.
//!
//! The buffer is a `Vec<char>` in visual order and the cursor is a codepoint index with
//! `0 <= cursor <= len`. Every operation keeps that invariant, and motion steps over
//! whole glyphs (see [`crate::next_glyph_len`]) so the cursor never lands between a
//! base codepoint and a combining mark attached to it.
//!
//! Operations report whether anything changed. A `false` is a no-op at the edge of the
//! buffer, which the prompt loop answers with the bell.

use std::fmt::{self, Display};

use crate::{next_glyph_len, prev_glyph_len};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

/// Emacs style word model: anything that isn't whitespace is part of a word.
fn is_space(ch: char) -> bool { ch.is_whitespace() }

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Buffer holding `text`, cursor at the end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    /// Buffer holding `text`, cursor at `cursor` (clamped to the end).
    #[must_use]
    pub fn from_text_with_cursor(text: &str, cursor: usize) -> Self {
        let mut it = Self::from_text(text);
        it.set_cursor(cursor);
        it
    }

    #[must_use]
    pub fn as_chars(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    #[must_use]
    pub fn is_cursor_at_end(&self) -> bool { self.cursor == self.chars.len() }

    /// Codepoints before the cursor.
    #[must_use]
    pub fn before_cursor(&self) -> &[char] { &self.chars[..self.cursor] }

    /// Codepoints at and after the cursor.
    #[must_use]
    pub fn after_cursor(&self) -> &[char] { &self.chars[self.cursor..] }

    /// Clamped to the end of the buffer.
    pub fn set_cursor(&mut self, cursor: usize) { self.cursor = cursor.min(self.chars.len()); }

    /// Swap in a whole new line, cursor at the end.
    pub fn replace(&mut self, text: &str) { *self = Self::from_text(text); }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor and move past it.
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert a run of codepoints at the cursor and move past them.
    pub fn insert_chars(&mut self, chars: &[char]) {
        self.chars
            .splice(self.cursor..self.cursor, chars.iter().copied());
        self.cursor += chars.len();
    }

    /// Insert `ch` at `pos`. A cursor at or after `pos` shifts right with the text.
    /// Returns `false` if `pos` is past the end.
    pub fn insert_at(&mut self, pos: usize, ch: char) -> bool {
        if pos > self.chars.len() {
            return false;
        }
        self.chars.insert(pos, ch);
        if self.cursor >= pos {
            self.cursor += 1;
        }
        true
    }

    /// Remove `start..end` and return it. A cursor inside the range moves to `start`, a
    /// cursor after it shifts left. Returns `None` for an empty or out of bounds range.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Option<Vec<char>> {
        if start >= end || end > self.chars.len() {
            return None;
        }
        let removed: Vec<char> = self.chars.drain(start..end).collect();
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
        Some(removed)
    }

    /// Move left by up to `n` glyphs. `false` if the cursor was already at the start.
    pub fn move_left(&mut self, n: usize) -> bool {
        let from = self.cursor;
        for _ in 0..n {
            if self.cursor == 0 {
                break;
            }
            self.cursor -= prev_glyph_len(self.before_cursor());
        }
        self.cursor != from
    }

    /// Move right by up to `n` glyphs. `false` if the cursor was already at the end.
    pub fn move_right(&mut self, n: usize) -> bool {
        let from = self.cursor;
        for _ in 0..n {
            if self.is_cursor_at_end() {
                break;
            }
            self.cursor += next_glyph_len(self.after_cursor());
        }
        self.cursor != from
    }

    pub fn move_to_start(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        moved
    }

    pub fn move_to_end(&mut self) -> bool {
        let moved = !self.is_cursor_at_end();
        self.cursor = self.chars.len();
        moved
    }

    /// Move to the start of the word at or before the cursor: the nearest position
    /// left of the cursor where whitespace is followed by non-whitespace, or the start
    /// of the buffer.
    pub fn word_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let mut pos = self.cursor - 1;
        while pos > 0 && !(!is_space(self.chars[pos]) && is_space(self.chars[pos - 1])) {
            pos -= 1;
        }
        self.cursor = pos;
        true
    }

    /// Move to the end of the word at or after the cursor: the nearest position right
    /// of the cursor where non-whitespace is followed by whitespace, or the end of the
    /// buffer.
    pub fn word_right(&mut self) -> bool {
        if self.is_cursor_at_end() {
            return false;
        }
        let len = self.chars.len();
        let mut pos = self.cursor + 1;
        while pos < len && !(is_space(self.chars[pos]) && !is_space(self.chars[pos - 1])) {
            pos += 1;
        }
        self.cursor = pos;
        true
    }

    /// Swap the glyph before the cursor with the glyph at the cursor, then move past
    /// both. At the end of the line the last two glyphs are swapped. Returns `false`
    /// when there are fewer than two glyphs or the cursor is at the start.
    pub fn transpose_glyphs(&mut self) -> bool {
        if self.chars.len() < 2 || self.cursor == 0 {
            return false;
        }
        let mut pos = self.cursor;
        if pos == self.chars.len() {
            pos -= prev_glyph_len(&self.chars);
        }
        let prev_len = prev_glyph_len(&self.chars[..pos]);
        let next_len = next_glyph_len(&self.chars[pos..]);
        if prev_len == 0 || next_len == 0 {
            return false;
        }
        self.chars[pos - prev_len..pos + next_len].rotate_left(prev_len);
        self.cursor = pos + next_len;
        true
    }

    /// Backspace: delete the glyph before the cursor.
    pub fn delete_glyph_before(&mut self) -> bool {
        let len = prev_glyph_len(self.before_cursor());
        self.delete_range(self.cursor - len, self.cursor).is_some()
    }

    /// Delete: remove the glyph at the cursor.
    pub fn delete_glyph_at(&mut self) -> bool {
        let len = next_glyph_len(self.after_cursor());
        self.delete_range(self.cursor, self.cursor + len).is_some()
    }

    /// Delete the whitespace left of the cursor, then the word before it. The removed
    /// text comes back in left to right order.
    pub fn erase_word_left(&mut self) -> Option<Vec<char>> {
        let mut start = self.cursor;
        while start > 0 && is_space(self.chars[start - 1]) {
            start -= 1;
        }
        while start > 0 && !is_space(self.chars[start - 1]) {
            start -= 1;
        }
        self.delete_range(start, self.cursor)
    }

    /// Delete the whitespace right of the cursor, then the word after it.
    pub fn erase_word_right(&mut self) -> Option<Vec<char>> {
        let len = self.chars.len();
        let mut end = self.cursor;
        while end < len && is_space(self.chars[end]) {
            end += 1;
        }
        while end < len && !is_space(self.chars[end]) {
            end += 1;
        }
        self.delete_range(self.cursor, end)
    }

    /// Delete from the cursor to the end of the line.
    pub fn kill_to_end(&mut self) -> Option<Vec<char>> {
        self.delete_range(self.cursor, self.chars.len())
    }

    /// Delete from the start of the line to the cursor.
    pub fn kill_to_start(&mut self) -> Option<Vec<char>> { self.delete_range(0, self.cursor) }
}

impl Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use test_case::test_case;

    fn text(buffer: &LineBuffer) -> String { buffer.to_string() }

    #[test]
    fn test_insert_and_delete_range_keep_cursor_in_place() {
        let mut buffer = LineBuffer::from_text_with_cursor("hello", 2);
        assert!(buffer.insert_at(0, '>'));
        assert_eq!(buffer.cursor(), 3);
        assert!(buffer.insert_at(6, '!'));
        assert_eq!(buffer.cursor(), 3);
        assert!(!buffer.insert_at(99, '?'));
        assert_eq!(text(&buffer), ">hello!");

        assert_eq!(buffer.delete_range(1, 4), Some(vec!['h', 'e', 'l']));
        assert_eq!(buffer.cursor(), 1);
        assert_eq!(buffer.delete_range(2, 2), None);
        assert_eq!(buffer.delete_range(2, 99), None);
    }

    #[test]
    fn test_motion_steps_over_combining_marks() {
        let mut buffer = LineBuffer::from_text("ae\u{301}b");
        assert!(buffer.move_left(1));
        assert_eq!(buffer.cursor(), 3);
        assert!(buffer.move_left(1));
        assert_eq!(buffer.cursor(), 1);
        assert!(buffer.move_right(1));
        assert_eq!(buffer.cursor(), 3);
        assert!(buffer.move_left(10));
        assert_eq!(buffer.cursor(), 0);
        assert!(!buffer.move_left(1));
        assert!(buffer.move_to_end());
        assert!(!buffer.move_right(1));
        assert!(!buffer.move_to_end());
    }

    #[test_case("foo bar baz", 11, 8 ; "from end")]
    #[test_case("foo bar baz", 8, 4 ; "from word start")]
    #[test_case("foo bar baz", 6, 4 ; "from inside word")]
    #[test_case("foo   bar", 6, 0 ; "across spaces")]
    #[test_case("  foo", 2, 0 ; "leading spaces")]
    fn test_word_left(line: &str, cursor: usize, expected: usize) {
        let mut buffer = LineBuffer::from_text_with_cursor(line, cursor);
        assert!(buffer.word_left());
        assert_eq!(buffer.cursor(), expected);
    }

    #[test_case("foo bar baz", 0, 3 ; "from start")]
    #[test_case("foo bar baz", 3, 7 ; "from word end")]
    #[test_case("foo bar baz", 5, 7 ; "from inside word")]
    #[test_case("foo bar", 4, 7 ; "last word")]
    fn test_word_right(line: &str, cursor: usize, expected: usize) {
        let mut buffer = LineBuffer::from_text_with_cursor(line, cursor);
        assert!(buffer.word_right());
        assert_eq!(buffer.cursor(), expected);
    }

    #[test]
    fn test_word_motion_at_edges_fails() {
        let mut buffer = LineBuffer::from_text("abc");
        assert!(!buffer.word_right());
        buffer.move_to_start();
        assert!(!buffer.word_left());
    }

    #[test]
    fn test_transpose() {
        let mut buffer = LineBuffer::from_text_with_cursor("abcd", 2);
        assert!(buffer.transpose_glyphs());
        assert_eq!(text(&buffer), "acbd");
        assert_eq!(buffer.cursor(), 3);

        // At the end of line the last two glyphs swap.
        let mut buffer = LineBuffer::from_text("abcd");
        assert!(buffer.transpose_glyphs());
        assert_eq!(text(&buffer), "abdc");
        assert_eq!(buffer.cursor(), 4);

        // Combining marks travel with their base.
        let mut buffer = LineBuffer::from_text_with_cursor("e\u{301}x", 2);
        assert!(buffer.transpose_glyphs());
        assert_eq!(text(&buffer), "xe\u{301}");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test_case("a", 1 ; "single glyph")]
    #[test_case("ab", 0 ; "cursor at start")]
    #[test_case("", 0 ; "empty")]
    #[test_case("e\u{301}", 2 ; "one glyph two codepoints")]
    fn test_transpose_fails(line: &str, cursor: usize) {
        let mut buffer = LineBuffer::from_text_with_cursor(line, cursor);
        let before = buffer.clone();
        assert!(!buffer.transpose_glyphs());
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_erase_word_left_returns_left_to_right_text() {
        let mut buffer = LineBuffer::from_text("foo bar  ");
        assert_eq!(buffer.erase_word_left(), Some("bar  ".chars().collect()));
        assert_eq!(text(&buffer), "foo ");
        assert_eq!(buffer.erase_word_left(), Some("foo ".chars().collect()));
        assert_eq!(buffer.erase_word_left(), None);
    }

    #[test]
    fn test_erase_word_right() {
        let mut buffer = LineBuffer::from_text_with_cursor("foo bar baz", 3);
        assert_eq!(buffer.erase_word_right(), Some(" bar".chars().collect()));
        assert_eq!(text(&buffer), "foo baz");
        assert_eq!(buffer.cursor(), 3);
        buffer.move_to_end();
        assert_eq!(buffer.erase_word_right(), None);
    }

    #[test]
    fn test_kill_to_end_and_start() {
        let mut buffer = LineBuffer::from_text_with_cursor("hello world", 5);
        assert_eq!(buffer.kill_to_end(), Some(" world".chars().collect()));
        assert_eq!(buffer.kill_to_end(), None);
        buffer.set_cursor(2);
        assert_eq!(buffer.kill_to_start(), Some(vec!['h', 'e']));
        assert_eq!(text(&buffer), "llo");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_delete_glyphs() {
        let mut buffer = LineBuffer::from_text("ae\u{301}");
        assert!(buffer.delete_glyph_before());
        assert_eq!(text(&buffer), "a");
        assert!(!buffer.delete_glyph_at());
        buffer.move_to_start();
        assert!(!buffer.delete_glyph_before());
        assert!(buffer.delete_glyph_at());
        assert!(buffer.is_empty());
    }

    /// Random edit sequences never push the cursor outside the buffer.
    #[test]
    fn test_cursor_invariant_under_random_edits() {
        let alphabet = ['a', ' ', '中', '\u{301}', 'z', '\t'];
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut buffer = LineBuffer::new();
            for _ in 0..100 {
                match rng.random_range(0..14) {
                    0 | 1 | 2 => buffer.insert(alphabet[rng.random_range(0..alphabet.len())]),
                    3 => {
                        let pos = rng.random_range(0..=buffer.len() + 1);
                        buffer.insert_at(pos, 'x');
                    }
                    4 => {
                        let start = rng.random_range(0..=buffer.len());
                        let end = rng.random_range(0..=buffer.len() + 1);
                        buffer.delete_range(start, end);
                    }
                    5 => {
                        buffer.move_left(rng.random_range(1..4));
                    }
                    6 => {
                        buffer.move_right(rng.random_range(1..4));
                    }
                    7 => {
                        buffer.word_left();
                    }
                    8 => {
                        buffer.word_right();
                    }
                    9 => {
                        buffer.transpose_glyphs();
                    }
                    10 => {
                        buffer.delete_glyph_before();
                    }
                    11 => {
                        buffer.delete_glyph_at();
                    }
                    12 => {
                        buffer.erase_word_left();
                    }
                    _ => {
                        buffer.erase_word_right();
                    }
                }
                assert!(buffer.cursor() <= buffer.len());
            }
        }
    }
}
