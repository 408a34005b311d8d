// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Collaborators the editing engine consumes: where input units come from, where
//! drawing primitives go, and how wide the terminal is. The traits are what the engine
//! depends on; the structs are the adapters for real terminals and byte streams.

// Attach.
pub mod geometry;
pub mod output;
pub mod raw_input;
pub mod reader_input;
pub mod terminal_support;
pub mod utf8_assembler;
#[cfg(unix)]
pub mod raw_mode;
#[cfg(unix)]
pub mod tty_input;

// Re-export.
pub use geometry::*;
pub use output::*;
pub use raw_input::*;
pub use reader_input::*;
pub use terminal_support::*;
pub use utf8_assembler::*;
#[cfg(unix)]
pub use raw_mode::*;
#[cfg(unix)]
pub use tty_input::*;
