// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Output, RawInput, TerminalGeometry};

/// The collaborators a prompt call talks to. Real terminals use
/// [`crate::TtyInput`], [`crate::AnsiOutput`] and [`crate::CrosstermGeometry`]; tests
/// use [`crate::test_fixtures::ScriptedInput`], [`crate::test_fixtures::OutputMock`]
/// and [`crate::FixedGeometry`].
#[allow(missing_debug_implementations)]
pub struct TerminalDevices<'d> {
    pub input: &'d mut dyn RawInput,
    pub output: &'d mut dyn Output,
    pub geometry: &'d dyn TerminalGeometry,
}
