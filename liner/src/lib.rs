// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words rxvt termios winch

//! # r3bl_liner
//!
//! A synchronous line editor for terminal prompts. Call [`Liner::prompt`] and get back
//! one edited line of text, with the editing behaviors users expect from a shell:
//!
//! - Emacs style motion (`Ctrl+A`, `Ctrl+E`, `Alt+B`, `Alt+F`, arrow keys, Home, End).
//! - Kill ring. Consecutive kills (`Ctrl+K`, `Ctrl+U`, `Ctrl+W`, `Alt+D`) group into
//!   one entry, `Ctrl+Y` yanks it back and `Alt+Y` cycles older entries.
//! - History recall filtered by the text typed so far, and reverse incremental search
//!   with `Ctrl+R`.
//! - Tab completion through a [`Completer`].
//! - Horizontal scrolling with `{` and `}` truncation markers when the line is wider
//!   than the terminal, or wrapped multi-line redraw.
//!
//! ## Architecture
//!
//! ```text
//! RawInput ─▶ KeyDecoder ─▶ LogicalEvent ─▶ PromptSession ─▶ LineBuffer / KillRing /
//!                                                             HistoryNavigator
//!                                                    │
//!                                                    ▼
//!                                       RedrawPlan ─▶ Output
//! ```
//!
//! The [`core`] module is pure: it never touches a file descriptor. Everything that
//! talks to the operating system lives in [`terminal`] behind three traits, [`RawInput`],
//! [`Output`] and [`TerminalGeometry`], which is also how the tests in this crate drive
//! whole prompt calls with [`test_fixtures::ScriptedInput`] and
//! [`test_fixtures::OutputMock`].
//!
//! ## Usage
//!
//! ```no_run
//! # #[cfg(unix)]
//! # fn main() -> miette::Result<()> {
//! use r3bl_liner::{AnsiOutput, CrosstermGeometry, History, Liner, LinerConfig,
//!                  LinerError, RawModeGuard, TerminalDevices, TtyInput};
//!
//! let mut liner = Liner::new(LinerConfig::default());
//! let mut history = History::default();
//!
//! loop {
//!     let result = {
//!         let _raw_mode = RawModeGuard::try_new()?;
//!         let mut input = TtyInput::try_new()?;
//!         let mut output = AnsiOutput::new(std::io::stdout());
//!         let mut devices = TerminalDevices {
//!             input: &mut input,
//!             output: &mut output,
//!             geometry: &CrosstermGeometry,
//!         };
//!         liner.prompt(&mut devices, "> ", history.entries())
//!     };
//!     match result {
//!         Ok(line) => history.append(line),
//!         Err(LinerError::Eof | LinerError::Aborted) => break,
//!         Err(err) => return Err(err.into()),
//!     };
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(unix))]
//! # fn main() {}
//! ```
//!
//! Raw mode is the caller's responsibility. [`RawModeGuard`] restores the saved terminal
//! settings when dropped, on every exit path.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod core;
pub mod decl_macros;
pub mod log;
pub mod prompt;
pub mod terminal;
pub mod test_fixtures;

// Re-export.
pub use core::*;
pub use log::*;
pub use prompt::*;
pub use terminal::*;
