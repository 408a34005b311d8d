// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{Output, glyph_width, ok};

/// One call made on an [`OutputMock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputOp {
    Text(String),
    MoveToColumn(usize),
    EraseToEndOfLine,
    EraseScreen,
    Ring,
    MoveUp(usize),
    MoveDown(usize),
    NewLine,
    Flush,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    Blank,
    /// A base codepoint plus any zero width codepoints drawn on top of it.
    Glyph(String),
    /// Right half of a double width glyph.
    WideTail,
}

/// An [`Output`] that records every call and emulates a terminal screen `columns`
/// wide, with autowrap, so tests can assert what the user would see and where the
/// cursor is.
#[derive(Debug)]
pub struct OutputMock {
    ops: Vec<OutputOp>,
    columns: usize,
    rows: Vec<Vec<Cell>>,
    cursor_row: usize,
    cursor_col: usize,
}

impl OutputMock {
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            ops: vec![],
            columns: columns.max(1),
            rows: vec![vec![]],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    #[must_use]
    pub fn ops(&self) -> &[OutputOp] { &self.ops }

    pub fn clear_ops(&mut self) { self.ops.clear(); }

    #[must_use]
    pub fn bell_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == OutputOp::Ring).count()
    }

    /// Concatenation of everything passed to [`Output::write_text`].
    #[must_use]
    pub fn text_written(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                OutputOp::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// `(row, column)`, both zero based.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { (self.cursor_row, self.cursor_col) }

    /// Visible text of `row`, trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        let Some(cells) = self.rows.get(row) else {
            return String::new();
        };
        let text: String = cells
            .iter()
            .map(|cell| match cell {
                Cell::Blank => " ",
                Cell::Glyph(glyph) => glyph.as_str(),
                Cell::WideTail => "",
            })
            .collect();
        text.trim_end().to_string()
    }

    /// Visible text of the row the cursor is on.
    #[must_use]
    pub fn current_row_text(&self) -> String { self.row_text(self.cursor_row) }

    /// Every row, top to bottom.
    #[must_use]
    pub fn screen(&self) -> Vec<String> {
        (0..self.rows.len()).map(|row| self.row_text(row)).collect()
    }

    fn row_mut(&mut self, row: usize) -> &mut Vec<Cell> {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        &mut self.rows[row]
    }

    fn put_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let cells = self.row_mut(row);
        if cells.len() <= col {
            cells.resize(col + 1, Cell::Blank);
        }
        cells[col] = cell;
    }

    fn print_char(&mut self, ch: char) {
        match ch {
            '\r' => self.cursor_col = 0,
            '\n' => {
                self.cursor_row += 1;
                self.cursor_col = 0;
            }
            _ => match glyph_width(ch) {
                0 => self.attach_to_previous(ch),
                width => {
                    if self.cursor_col + width > self.columns {
                        self.cursor_row += 1;
                        self.cursor_col = 0;
                    }
                    let (row, col) = self.cursor();
                    self.put_cell(row, col, Cell::Glyph(ch.to_string()));
                    if width == 2 {
                        self.put_cell(row, col + 1, Cell::WideTail);
                    }
                    self.cursor_col += width;
                }
            },
        }
    }

    fn attach_to_previous(&mut self, ch: char) {
        let (row, col) = self.cursor();
        let cells = self.row_mut(row);
        let end = col.min(cells.len());
        let previous = cells[..end]
            .iter_mut()
            .rev()
            .find(|cell| **cell != Cell::WideTail);
        if let Some(Cell::Glyph(glyph)) = previous {
            glyph.push(ch);
        }
    }
}

impl Output for OutputMock {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(OutputOp::Text(text.to_string()));
        text.chars().for_each(|ch| self.print_char(ch));
        ok!()
    }

    fn move_cursor_to_column(&mut self, column: usize) -> io::Result<()> {
        self.ops.push(OutputOp::MoveToColumn(column));
        self.cursor_col = column.min(self.columns - 1);
        ok!()
    }

    fn erase_to_end_of_line(&mut self) -> io::Result<()> {
        self.ops.push(OutputOp::EraseToEndOfLine);
        let (row, col) = self.cursor();
        self.row_mut(row).truncate(col);
        ok!()
    }

    fn erase_screen(&mut self) -> io::Result<()> {
        self.ops.push(OutputOp::EraseScreen);
        self.rows = vec![vec![]];
        self.cursor_row = 0;
        self.cursor_col = 0;
        ok!()
    }

    fn ring(&mut self) -> io::Result<()> {
        self.ops.push(OutputOp::Ring);
        ok!()
    }

    fn move_up(&mut self, rows: usize) -> io::Result<()> {
        self.ops.push(OutputOp::MoveUp(rows));
        self.cursor_row = self.cursor_row.saturating_sub(rows);
        ok!()
    }

    fn move_down(&mut self, rows: usize) -> io::Result<()> {
        self.ops.push(OutputOp::MoveDown(rows));
        self.cursor_row += rows;
        self.row_mut(self.cursor_row);
        ok!()
    }

    fn new_line(&mut self) -> io::Result<()> {
        self.ops.push(OutputOp::NewLine);
        self.cursor_row += 1;
        self.cursor_col = 0;
        self.row_mut(self.cursor_row);
        ok!()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(OutputOp::Flush);
        ok!()
    }
}
