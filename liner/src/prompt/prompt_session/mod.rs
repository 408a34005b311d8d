// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One prompt call, from the first draw to the committed line.
//!
//! | Module           | Responsibility                                              |
//! |------------------|-------------------------------------------------------------|
//! | `session_state`  | [`PromptSession`] struct, the main loop, reads with restart |
//! | `event_handlers` | Dispatch of one [`crate::LogicalEvent`] to an edit          |
//! | `composite_ops`  | Yank, reverse search and tab completion, which read more    |
//! |                  | events of their own and hand back the one that ended them   |
//! | `render`         | Single-line and multi-line redraw, fast echo                |

// Attach.
mod composite_ops;
mod event_handlers;
mod render;
mod session_state;


// Re-export.
pub use session_state::*;
