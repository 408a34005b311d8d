// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words xterm

use std::io::{self, Write};

use crossterm::{QueueableCommand,
                cursor::{MoveDown, MoveRight, MoveTo, MoveToColumn, MoveUp},
                terminal::{Clear, ClearType}};

use crate::ok;

/// Drawing primitives the editor issues. The editor never writes an escape sequence
/// itself, an implementation of this trait picks the encoding.
///
/// Every method fails only if the underlying write fails.
#[allow(clippy::missing_errors_doc)]
pub trait Output {
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Zero based column on the current row.
    fn move_cursor_to_column(&mut self, column: usize) -> io::Result<()>;

    fn erase_to_end_of_line(&mut self) -> io::Result<()>;

    /// Clear the whole screen and home the cursor.
    fn erase_screen(&mut self) -> io::Result<()>;

    /// The bell.
    fn ring(&mut self) -> io::Result<()>;

    fn move_up(&mut self, rows: usize) -> io::Result<()>;

    fn move_down(&mut self, rows: usize) -> io::Result<()>;

    /// Start of the next row.
    fn new_line(&mut self) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// How to put the cursor on a given column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPositioning {
    /// `CSI <n+1> G` (cursor horizontal absolute).
    Absolute,
    /// `\r` then `CSI <n> C` (cursor forward). Works on terminals without `CHA`.
    CarriageReturnForward,
}

impl ColumnPositioning {
    /// [`ColumnPositioning::Absolute`] when `TERM` names an xterm compatible terminal.
    #[must_use]
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        Self::from_term(&term)
    }

    #[must_use]
    pub fn from_term(term: &str) -> Self {
        if term.contains("xterm") {
            ColumnPositioning::Absolute
        } else {
            ColumnPositioning::CarriageReturnForward
        }
    }
}

fn as_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

/// [`Output`] to any [`Write`], encoded as ANSI escape sequences with [`crossterm`]
/// commands. Everything is queued and only reaches the writer's sink on
/// [`Output::flush`].
#[derive(Debug)]
pub struct AnsiOutput<W> {
    writer: W,
    positioning: ColumnPositioning,
}

impl<W: Write> AnsiOutput<W> {
    /// Column positioning is picked from `TERM`.
    pub fn new(writer: W) -> Self {
        Self::with_positioning(writer, ColumnPositioning::detect())
    }

    pub fn with_positioning(writer: W, positioning: ColumnPositioning) -> Self {
        Self {
            writer,
            positioning,
        }
    }

    pub fn get_ref(&self) -> &W { &self.writer }

    pub fn into_inner(self) -> W { self.writer }
}

impl<W: Write> Output for AnsiOutput<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn move_cursor_to_column(&mut self, column: usize) -> io::Result<()> {
        match self.positioning {
            ColumnPositioning::Absolute => {
                self.writer.queue(MoveToColumn(as_u16(column)))?;
            }
            ColumnPositioning::CarriageReturnForward => {
                self.writer.write_all(b"\r")?;
                if column > 0 {
                    self.writer.queue(MoveRight(as_u16(column)))?;
                }
            }
        }
        ok!()
    }

    fn erase_to_end_of_line(&mut self) -> io::Result<()> {
        self.writer.queue(Clear(ClearType::UntilNewLine))?;
        ok!()
    }

    fn erase_screen(&mut self) -> io::Result<()> {
        self.writer.queue(MoveTo(0, 0))?.queue(Clear(ClearType::All))?;
        ok!()
    }

    fn ring(&mut self) -> io::Result<()> { self.writer.write_all(b"\x07") }

    fn move_up(&mut self, rows: usize) -> io::Result<()> {
        if rows > 0 {
            self.writer.queue(MoveUp(as_u16(rows)))?;
        }
        ok!()
    }

    fn move_down(&mut self, rows: usize) -> io::Result<()> {
        if rows > 0 {
            self.writer.queue(MoveDown(as_u16(rows)))?;
        }
        ok!()
    }

    fn new_line(&mut self) -> io::Result<()> { self.writer.write_all(b"\r\n") }

    fn flush(&mut self) -> io::Result<()> { self.writer.flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn written(output: AnsiOutput<Vec<u8>>) -> String {
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_absolute_positioning() {
        let mut output = AnsiOutput::with_positioning(vec![], ColumnPositioning::Absolute);
        output.write_text("> hi").unwrap();
        output.erase_to_end_of_line().unwrap();
        output.move_cursor_to_column(4).unwrap();
        assert_eq!(written(output), "> hi\x1b[K\x1b[5G");
    }

    #[test]
    fn test_carriage_return_forward_positioning() {
        let mut output =
            AnsiOutput::with_positioning(vec![], ColumnPositioning::CarriageReturnForward);
        output.move_cursor_to_column(0).unwrap();
        output.move_cursor_to_column(3).unwrap();
        assert_eq!(written(output), "\r\r\x1b[3C");
    }

    #[test]
    fn test_screen_and_rows() {
        let mut output = AnsiOutput::with_positioning(vec![], ColumnPositioning::Absolute);
        output.erase_screen().unwrap();
        output.ring().unwrap();
        output.move_up(2).unwrap();
        output.move_down(0).unwrap();
        output.new_line().unwrap();
        assert_eq!(written(output), "\x1b[1;1H\x1b[2J\x07\x1b[2A\r\n");
    }

    #[test]
    fn test_positioning_from_term() {
        assert_eq!(
            ColumnPositioning::from_term("xterm-256color"),
            ColumnPositioning::Absolute
        );
        assert_eq!(
            ColumnPositioning::from_term("linux"),
            ColumnPositioning::CarriageReturnForward
        );
    }
}
