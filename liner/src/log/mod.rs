// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Subscriber setup for the `tracing` logs this crate emits. A line editor owns the
//! terminal while a prompt is active, so logs normally go to a file.

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
