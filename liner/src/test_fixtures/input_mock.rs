// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, io};

use crate::{InputError, InputUnit, RawInput};

#[derive(Debug)]
pub enum ScriptStep {
    Unit(InputUnit),
    Error(io::Error),
    Eof,
    /// Nothing is buffered here: [`RawInput::has_buffered`] reports `false` until the
    /// next read moves past it. Models the user pausing between keystrokes.
    Pause,
}

/// A [`RawInput`] that replays a script, then reports [`InputError::Eof`].
///
/// ```
/// use r3bl_liner::test_fixtures::ScriptedInput;
///
/// // Type "ab", wait, then press Enter.
/// let input = ScriptedInput::new().text("ab").pause().text("\r");
/// ```
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: VecDeque<ScriptStep>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Every codepoint of `text`, all buffered.
    #[must_use]
    pub fn from_text(text: &str) -> Self { Self::new().text(text) }

    /// Every codepoint of `text`, each as its own keystroke with a pause after it.
    #[must_use]
    pub fn typed(text: &str) -> Self {
        text.chars().fold(Self::new(), |it, ch| {
            it.step(ScriptStep::Unit(InputUnit::Char(ch))).pause()
        })
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self {
        text.chars()
            .fold(self, |it, ch| it.step(ScriptStep::Unit(InputUnit::Char(ch))))
    }

    #[must_use]
    pub fn pause(self) -> Self { self.step(ScriptStep::Pause) }

    #[must_use]
    pub fn resize(self) -> Self { self.step(ScriptStep::Unit(InputUnit::WindowChanged)) }

    #[must_use]
    pub fn step(mut self, step: ScriptStep) -> Self {
        self.steps.push_back(step);
        self
    }

    /// Steps not consumed yet, pauses included.
    #[must_use]
    pub fn remaining(&self) -> usize { self.steps.len() }
}

impl RawInput for ScriptedInput {
    fn next_unit(&mut self) -> Result<InputUnit, InputError> {
        loop {
            match self.steps.pop_front() {
                None | Some(ScriptStep::Eof) => return Err(InputError::Eof),
                Some(ScriptStep::Pause) => {}
                Some(ScriptStep::Unit(unit)) => return Ok(unit),
                Some(ScriptStep::Error(error)) => return Err(InputError::IO(error)),
            }
        }
    }

    fn has_buffered(&mut self) -> bool {
        matches!(
            self.steps.front(),
            Some(ScriptStep::Unit(_) | ScriptStep::Error(_) | ScriptStep::Eof)
        )
    }
}
