// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editing engine. Nothing in here performs I/O directly: input arrives through
//! [`crate::RawInput`] and drawing goes out through [`crate::Output`].

// Attach.
pub mod errors;
pub mod glyph_width;
pub mod history;
pub mod key_decoder;
pub mod kill_ring;
pub mod line_buffer;
pub mod redraw;

// Re-export.
pub use errors::*;
pub use glyph_width::*;
pub use history::*;
pub use key_decoder::*;
pub use kill_ring::*;
pub use line_buffer::*;
pub use redraw::*;
