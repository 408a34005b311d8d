// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod control_codes;
pub mod decoder;
pub mod escape_sequences;
pub mod logical_event;

// Re-export.
pub use control_codes::*;
pub use decoder::*;
pub use escape_sequences::*;
pub use logical_event::*;
