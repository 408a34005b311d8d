// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Completer, InputError, InputUnit, KillRing, LineBuffer, LinerConfig,
            LinerError, PromptSession, TerminalDevices, TerminalSupport,
            is_other_category, str_width};

const DEBUG_LINER_PROMPT: bool = false;

/// A line editing session that outlives single prompt calls. It owns the configuration,
/// what the process is connected to, the kill ring (so text killed at one prompt can
/// be yanked at the next) and the optional completer.
///
/// The history is not owned here: each call takes the entries to browse as a slice,
/// usually from a [`crate::History`].
#[allow(missing_debug_implementations)]
pub struct Liner {
    config: LinerConfig,
    support: TerminalSupport,
    kill_ring: KillRing,
    completer: Option<Box<dyn Completer>>,
}

/// How a prompt call proceeds after the entry checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryMode {
    Editor,
    Fallback,
}

impl Liner {
    /// Session for the process's own stdin, stdout and `TERM`.
    #[must_use]
    pub fn new(config: LinerConfig) -> Self {
        Self::with_support(config, TerminalSupport::detect())
    }

    #[must_use]
    pub fn with_support(config: LinerConfig, support: TerminalSupport) -> Self {
        Self {
            config,
            support,
            kill_ring: KillRing::new(config.kill_ring_max),
            completer: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &LinerConfig { &self.config }

    /// Changes take effect at the next prompt call. The kill ring keeps the capacity
    /// it was created with.
    pub fn config_mut(&mut self) -> &mut LinerConfig { &mut self.config }

    #[must_use]
    pub fn support(&self) -> TerminalSupport { self.support }

    #[must_use]
    pub fn kill_ring(&self) -> &KillRing { &self.kill_ring }

    pub fn set_completer(&mut self, completer: impl Completer + 'static) {
        self.completer = Some(Box::new(completer));
    }

    pub fn clear_completer(&mut self) { self.completer = None; }

    /// Read one line, with editing. `history` is browsed with up/down and searched
    /// with `Ctrl+R`; it is never modified.
    ///
    /// # Errors
    ///
    /// - [`LinerError::NotATerminal`] if output is not a terminal.
    /// - [`LinerError::InvalidPrompt`] if `prompt` contains a control, format or
    ///   private use character.
    /// - [`LinerError::ZeroWidth`] or [`LinerError::TerminalTooNarrow`] if the terminal
    ///   can't fit the prompt and an editing area.
    /// - [`LinerError::Eof`] or [`LinerError::Aborted`] when the user quits.
    /// - [`LinerError::IO`] on read or write failures.
    pub fn prompt(
        &mut self,
        devices: &mut TerminalDevices<'_>,
        prompt: &str,
        history: &[String],
    ) -> Result<String, LinerError> {
        self.prompt_with_suggestion(devices, prompt, history, "", None)
    }

    /// Like [`Liner::prompt`], with the line pre-filled with `text` and the cursor at
    /// `pos` (a codepoint index). `None`, or a position past the end, puts the cursor
    /// at the end.
    ///
    /// # Errors
    ///
    /// Same as [`Liner::prompt`].
    pub fn prompt_with_suggestion(
        &mut self,
        devices: &mut TerminalDevices<'_>,
        prompt: &str,
        history: &[String],
        text: &str,
        pos: Option<usize>,
    ) -> Result<String, LinerError> {
        if self.check_entry(devices, prompt)? == EntryMode::Fallback {
            return self.prompt_unsupported(devices, prompt);
        }

        let line = match pos {
            Some(pos) => LineBuffer::from_text_with_cursor(text, pos),
            None => LineBuffer::from_text(text),
        };

        let result = PromptSession::new(
            devices,
            &self.config,
            &mut self.kill_ring,
            self.completer.as_deref(),
            prompt,
            history,
            line,
        )?
        .run();

        DEBUG_LINER_PROMPT.then(|| {
            tracing::debug!(message = "Liner::prompt_with_suggestion", ?result);
        });

        result
    }

    /// Read a line without echoing it, for passwords. Only `Enter`, `Ctrl+C`,
    /// `Ctrl+D`, backspace and typing work; other control keys ring the bell.
    ///
    /// # Errors
    ///
    /// Same as [`Liner::prompt`].
    pub fn prompt_password(
        &mut self,
        devices: &mut TerminalDevices<'_>,
        prompt: &str,
    ) -> Result<String, LinerError> {
        if self.check_entry(devices, prompt)? == EntryMode::Fallback {
            return self.prompt_unsupported(devices, prompt);
        }

        PromptSession::new(
            devices,
            &self.config,
            &mut self.kill_ring,
            None,
            prompt,
            &[],
            LineBuffer::new(),
        )?
        .run_password()
    }

    /// Write `prompt` and read up to a newline with no editing at all, for input that
    /// isn't a terminal or a terminal that can't move the cursor. Carriage returns are
    /// dropped.
    ///
    /// # Errors
    ///
    /// [`LinerError::Eof`] if input ends before anything was read, or an I/O error.
    pub fn prompt_unsupported(
        &self,
        devices: &mut TerminalDevices<'_>,
        prompt: &str,
    ) -> Result<String, LinerError> {
        devices.output.write_text(prompt)?;
        devices.output.flush()?;

        let mut line = String::new();
        loop {
            match devices.input.next_unit() {
                Ok(InputUnit::Char('\n')) => return Ok(line),
                Ok(InputUnit::Char('\r') | InputUnit::WindowChanged) => {}
                Ok(InputUnit::Char(ch)) => line.push(ch),
                Err(InputError::Eof) if line.is_empty() => return Err(LinerError::Eof),
                Err(InputError::Eof) => return Ok(line),
                Err(error) if (self.config.should_restart)(&error) => {}
                Err(error) => return Err(error.into()),
            }
        }
    }

    /// Checks run before anything is drawn, in this order.
    fn check_entry(
        &self,
        devices: &TerminalDevices<'_>,
        prompt: &str,
    ) -> Result<EntryMode, LinerError> {
        if !self.support.output_is_terminal {
            return Err(LinerError::NotATerminal);
        }

        if prompt.chars().any(is_other_category) {
            return Err(LinerError::InvalidPrompt);
        }

        if self.support.needs_fallback() {
            return Ok(EntryMode::Fallback);
        }

        let columns = devices.geometry.columns()?;
        if columns == 0 {
            return Err(LinerError::ZeroWidth);
        }

        let required = str_width(prompt) + self.config.min_working_space;
        if columns < required {
            return Err(LinerError::TerminalTooNarrow { columns, required });
        }

        Ok(EntryMode::Editor)
    }
}
