// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Multi row redraw: the line wraps onto as many rows as it needs instead of
//! scrolling horizontally.
//!
//! The state remembers the tallest the line has been since the last reset
//! (`max_rows`) and which of those rows the cursor is on (`cursor_rows`, 1 based), so
//! the next refresh can walk down to the bottom and clear every row on its way back up.

use crate::{LinerError, Output, ok, wrapped_width};

/// Where prompt and line land when wrapped onto a terminal `width` columns wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiLineLayout {
    /// Absolute column after the last glyph, counted from the start of the prompt.
    pub total_columns: usize,
    /// Absolute column of the cursor.
    pub cursor_columns: usize,
    /// Rows the wrapped text occupies, at least `1`.
    pub total_rows: usize,
    /// Cursor at the end, and the text fills its last row exactly. The terminal
    /// leaves the cursor in the pending wrap state, so a newline is emitted to put it
    /// at the start of the next row.
    pub wraps_at_end: bool,
}

impl MultiLineLayout {
    /// # Errors
    ///
    /// [`LinerError::ZeroWidth`] if `width` is `0`.
    pub fn compute(
        prompt: &[char],
        buffer: &[char],
        cursor: usize,
        width: usize,
    ) -> Result<Self, LinerError> {
        if width == 0 {
            return Err(LinerError::ZeroWidth);
        }
        let cursor = cursor.min(buffer.len());
        let prompt_columns = wrapped_width(prompt, width, 0);
        let total_columns = wrapped_width(buffer, width, prompt_columns);
        let cursor_columns = wrapped_width(&buffer[..cursor], width, prompt_columns);
        Ok(Self {
            total_columns,
            cursor_columns,
            total_rows: total_columns.div_ceil(width).max(1),
            wraps_at_end: cursor_columns == total_columns
                && total_columns > 0
                && total_columns.is_multiple_of(width),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiLineRedraw {
    max_rows: usize,
    cursor_rows: usize,
}

impl MultiLineRedraw {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Forget the previous layout, after the screen was cleared or a fresh prompt
    /// started on a new row.
    pub fn reset(&mut self) {
        self.max_rows = 0;
        self.cursor_rows = 0;
    }

    #[must_use]
    pub fn max_rows(&self) -> usize { self.max_rows }

    #[must_use]
    pub fn cursor_rows(&self) -> usize { self.cursor_rows }

    /// Clear every row used so far and repaint prompt and line, then put the cursor
    /// on its row and column.
    ///
    /// # Errors
    ///
    /// [`LinerError::ZeroWidth`] if `width` is `0`, or an error from `output`.
    pub fn redraw(
        &mut self,
        output: &mut dyn Output,
        prompt: &str,
        buffer: &[char],
        cursor: usize,
        width: usize,
    ) -> Result<(), LinerError> {
        let prompt_chars: Vec<char> = prompt.chars().collect();
        let layout = MultiLineLayout::compute(&prompt_chars, buffer, cursor, width)?;

        let previous_rows = self.max_rows;
        let mut total_rows = layout.total_rows;
        self.max_rows = self.max_rows.max(total_rows);

        // Go to the bottom row, then clear upwards.
        let cursor_rows = self.cursor_rows.max(1);
        if previous_rows > cursor_rows {
            output.move_down(previous_rows - cursor_rows)?;
        }
        for _ in 1..previous_rows {
            output.move_cursor_to_column(0)?;
            output.erase_to_end_of_line()?;
            output.move_up(1)?;
        }
        output.move_cursor_to_column(0)?;
        output.erase_to_end_of_line()?;

        output.write_text(prompt)?;
        output.write_text(&buffer.iter().collect::<String>())?;

        if layout.wraps_at_end {
            output.new_line()?;
            output.move_cursor_to_column(0)?;
            total_rows += 1;
            self.max_rows = self.max_rows.max(total_rows);
        }

        let cursor_row = layout.cursor_columns / width + 1;
        if total_rows > cursor_row {
            output.move_up(total_rows - cursor_row)?;
        }
        output.move_cursor_to_column(layout.cursor_columns % width)?;
        self.cursor_rows = cursor_row;

        ok!()
    }

    /// Move below the last row the line occupies, so whatever is printed next does
    /// not overwrite it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `output` fails.
    pub fn finish(&mut self, output: &mut dyn Output) -> Result<(), LinerError> {
        let cursor_rows = self.cursor_rows.max(1);
        if self.max_rows > cursor_rows {
            output.move_down(self.max_rows - cursor_rows)?;
        }
        self.reset();
        ok!()
    }
}
