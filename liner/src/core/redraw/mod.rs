// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod multi_line;
pub mod redraw_plan;

// Re-export.
pub use multi_line::*;
pub use redraw_plan::*;
