// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words cons

use std::io::IsTerminal;

/// `TERM` values that can't host the editor. Compared case insensitively.
pub const UNSUPPORTED_TERMS: [&str; 3] = ["", "dumb", "cons25"];

/// What the process is connected to, which decides whether a prompt can edit in place,
/// must fall back to line at a time input, or can't run at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSupport {
    pub input_is_terminal: bool,
    pub output_is_terminal: bool,
    /// `TERM` names a terminal that understands cursor movement.
    pub term_supported: bool,
}

impl TerminalSupport {
    /// Inspect stdin, stdout and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        Self {
            input_is_terminal: std::io::stdin().is_terminal(),
            output_is_terminal: std::io::stdout().is_terminal(),
            term_supported: is_term_supported(&term),
        }
    }

    /// Everything supported. What tests use when driving a prompt with mocks.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            input_is_terminal: true,
            output_is_terminal: true,
            term_supported: true,
        }
    }

    /// `true` when input must be read a line at a time, without editing.
    #[must_use]
    pub fn needs_fallback(&self) -> bool { !self.input_is_terminal || !self.term_supported }
}

#[must_use]
pub fn is_term_supported(term: &str) -> bool {
    let term = term.to_lowercase();
    !UNSUPPORTED_TERMS.contains(&term.as_str())
}
