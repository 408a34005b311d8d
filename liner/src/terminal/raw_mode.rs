// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios ICRNL INPCK ISTRIP IXON ICANON IEXTEN VMIN VTIME

//! Non-canonical terminal mode for the duration of a prompt.
//!
//! The editor needs keystrokes one at a time with no echo and no line buffering, and
//! needs `Ctrl+C` as a key rather than `SIGINT`. Output post-processing (`OPOST`) is
//! left alone so `\n` still returns the carriage.

use std::{fs::File, io};

use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                       SpecialCodeIndex, Termios}};

use crate::{LinerError, ok};

enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Stdin when it is a terminal, otherwise the controlling terminal.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Apply the editor's input settings on top of `termios`.
pub fn make_liner_mode(termios: &mut Termios) {
    termios.input_modes -=
        InputModes::ICRNL | InputModes::INPCK | InputModes::ISTRIP | InputModes::IXON;
    termios.control_modes |= ControlModes::CS8;
    termios.local_modes -=
        LocalModes::ECHO | LocalModes::ICANON | LocalModes::ISIG | LocalModes::IEXTEN;
    termios.special_codes[SpecialCodeIndex::VMIN] = 1;
    termios.special_codes[SpecialCodeIndex::VTIME] = 0;
}

/// Puts the terminal in raw mode on creation and restores the saved settings on drop,
/// so every exit path (early return, `?`, unwinding) leaves the terminal usable.
#[allow(missing_debug_implementations)]
pub struct RawModeGuard {
    fd: TerminalFd,
    original: Termios,
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if no terminal can be found, or its attributes can't be read or
    /// written.
    pub fn try_new() -> Result<Self, LinerError> {
        let fd = get_terminal_fd()?;
        let original = termios::tcgetattr(&fd).map_err(io::Error::from)?;

        let mut raw = original.clone();
        make_liner_mode(&mut raw);
        termios::tcsetattr(&fd, OptionalActions::Now, &raw).map_err(io::Error::from)?;

        Ok(Self { fd, original })
    }

    /// Put the saved settings back.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be written.
    pub fn restore(&self) -> Result<(), LinerError> {
        termios::tcsetattr(&self.fd, OptionalActions::Now, &self.original)
            .map_err(io::Error::from)?;
        ok!()
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(message = "RawModeGuard: failed to restore terminal", ?error);
        }
    }
}
