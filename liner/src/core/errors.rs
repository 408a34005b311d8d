// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Everything a prompt call can fail with. Each variant is a distinct condition so a
/// caller can tell "the user quit" ([`LinerError::Eof`], [`LinerError::Aborted`]) apart
/// from "this terminal can't host an editor" ([`LinerError::NotATerminal`],
/// [`LinerError::TerminalTooNarrow`], [`LinerError::ZeroWidth`]) and fall back to
/// [`crate::Liner::prompt_unsupported`] for the latter.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LinerError {
    /// `Ctrl+C` was pressed and [`crate::LinerConfig::ctrl_c_aborts`] is set.
    #[error("prompt aborted")]
    #[diagnostic(code(r3bl_liner::aborted))]
    Aborted,

    /// End of input: `Ctrl+D` on an empty line, or the input source closed.
    #[error("end of input")]
    #[diagnostic(code(r3bl_liner::eof))]
    Eof,

    /// Output is not a terminal, so there is nowhere to draw the line.
    #[error("standard output is not a terminal")]
    #[diagnostic(
        code(r3bl_liner::not_a_terminal),
        help("read lines directly from stdin when output is redirected")
    )]
    NotATerminal,

    /// The prompt contains a control, format or private use character, which would
    /// corrupt the redraw math.
    #[error("prompt contains a control or format character")]
    #[diagnostic(code(r3bl_liner::invalid_prompt))]
    InvalidPrompt,

    /// The terminal is too narrow to fit the prompt plus a minimal editing area.
    #[error("terminal is {columns} columns wide, at least {required} are needed")]
    #[diagnostic(
        code(r3bl_liner::terminal_too_narrow),
        help("use `Liner::prompt_unsupported` or widen the terminal")
    )]
    TerminalTooNarrow { columns: usize, required: usize },

    /// The terminal reported a width of zero columns. Some environments do this
    /// transiently, so this is reported rather than treated as a crash.
    #[error("terminal reported a width of zero columns")]
    #[diagnostic(code(r3bl_liner::zero_width))]
    ZeroWidth,

    #[error(transparent)]
    #[diagnostic(code(r3bl_liner::io_error))]
    IO(#[from] io::Error),
}

/// Failure reported by a [`crate::RawInput`] source. End of input is distinguished from
/// a read error so that a caller supplied restart predicate can retry the latter.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("end of input")]
    Eof,

    #[error(transparent)]
    IO(#[from] io::Error),
}

impl From<InputError> for LinerError {
    fn from(error: InputError) -> Self {
        match error {
            InputError::Eof => LinerError::Eof,
            InputError::IO(io_error) => LinerError::IO(io_error),
        }
    }
}

/// Decides whether a failed read should be issued again. The default,
/// [`restart_on_interrupted`], retries reads cut short by a signal.
pub type ShouldRestart = fn(&InputError) -> bool;

/// Retry reads that failed with [`io::ErrorKind::Interrupted`].
#[must_use]
pub fn restart_on_interrupted(error: &InputError) -> bool {
    matches!(error, InputError::IO(io_error) if io_error.kind() == io::ErrorKind::Interrupted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_on_interrupted() {
        assert!(restart_on_interrupted(&InputError::IO(io::Error::from(
            io::ErrorKind::Interrupted
        ))));
        assert!(!restart_on_interrupted(&InputError::IO(io::Error::from(
            io::ErrorKind::BrokenPipe
        ))));
        assert!(!restart_on_interrupted(&InputError::Eof));
    }

    #[test]
    fn test_input_error_maps_to_liner_error() {
        assert!(matches!(LinerError::from(InputError::Eof), LinerError::Eof));
        let mapped = LinerError::from(InputError::IO(io::Error::other("boom")));
        assert!(matches!(mapped, LinerError::IO(ref e) if e.to_string() == "boom"));
    }

    #[test]
    fn test_too_narrow_message() {
        let error = LinerError::TerminalTooNarrow {
            columns: 8,
            required: 12,
        };
        assert_eq!(
            error.to_string(),
            "terminal is 8 columns wide, at least 12 are needed"
        );
    }
}
