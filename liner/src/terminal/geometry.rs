// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Terminal width, asked for at the start of a prompt and again after every resize.
pub trait TerminalGeometry {
    /// # Errors
    ///
    /// Returns an error if the width can't be determined.
    fn columns(&self) -> io::Result<usize>;
}

/// Width from [`crossterm::terminal::size`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermGeometry;

impl TerminalGeometry for CrosstermGeometry {
    fn columns(&self) -> io::Result<usize> {
        let (columns, _rows) = crossterm::terminal::size()?;
        Ok(usize::from(columns))
    }
}

/// A width that never changes. For tests, and for output that isn't a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGeometry(pub usize);

impl TerminalGeometry for FixedGeometry {
    fn columns(&self) -> io::Result<usize> { Ok(self.0) }
}

/// Width read through a shared cell, so a test can "resize" the terminal while a prompt
/// is running.
impl TerminalGeometry for std::cell::Cell<usize> {
    fn columns(&self) -> io::Result<usize> { Ok(self.get()) }
}
