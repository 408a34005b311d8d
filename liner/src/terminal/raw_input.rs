// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InputError;

/// One unit from an input source: a decoded codepoint, or the notification that the
/// terminal was resized. Resizes travel in the same stream as keystrokes so the prompt
/// loop never has to poll for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputUnit {
    Char(char),
    WindowChanged,
}

/// Where keystrokes come from.
pub trait RawInput {
    /// Block until the next unit is available.
    ///
    /// # Errors
    ///
    /// [`InputError::Eof`] once the source is exhausted, [`InputError::IO`] for a failed
    /// read. A read interrupted by a signal is reported as
    /// [`std::io::ErrorKind::Interrupted`], which the prompt loop retries by default.
    fn next_unit(&mut self) -> Result<InputUnit, InputError>;

    /// `true` if [`Self::next_unit`] would return without blocking. Must not block.
    fn has_buffered(&mut self) -> bool;
}
