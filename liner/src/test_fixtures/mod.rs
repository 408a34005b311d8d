// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mocks for the collaborator traits, used by the unit tests in this crate and by the
//! integration tests in `tests/`.

// Attach.
pub mod input_mock;
pub mod output_mock;

// Re-export.
pub use input_mock::*;
pub use output_mock::*;
