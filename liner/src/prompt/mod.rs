// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The prompt controller: [`Liner`] owns what outlives one prompt call, and
//! [`PromptSession`] runs the read, decode, apply, redraw loop for one call.

// Attach.
pub mod completion;
pub mod liner;
pub mod liner_config;
pub mod prompt_session;
pub mod terminal_devices;

// Re-export.
pub use completion::*;
pub use liner::*;
pub use liner_config::*;
pub use prompt_session::*;
pub use terminal_devices::*;
