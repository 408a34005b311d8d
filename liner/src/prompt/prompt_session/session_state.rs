// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::event_handlers::{apply_event, apply_password_event};
use crate::{Completer, HistoryNavigator, KeyDecoder, KillMode, KillRing, LineBuffer,
            LinerConfig, LinerError, LogicalEvent, MultiLineRedraw, TerminalDevices, ok,
            ring_bell};

const DEBUG_LINER_SESSION: bool = false;

/// Value of the kill counter right after a kill. It drops by one per processed event,
/// so only a kill that immediately follows another one sees it above zero.
pub const KILL_ACTION_GRACE: u8 = 2;

/// State of one prompt call. The kill ring and history are borrowed from the longer
/// lived [`crate::Liner`] and caller; everything else starts fresh and is dropped when
/// the call returns.
#[allow(missing_debug_implementations)]
pub struct PromptSession<'s, 'd> {
    pub(super) devices: &'s mut TerminalDevices<'d>,
    pub(super) config: &'s LinerConfig,
    pub(super) kill_ring: &'s mut KillRing,
    pub(super) completer: Option<&'s dyn Completer>,
    pub(super) prompt: &'s str,
    pub(super) decoder: KeyDecoder,
    pub(super) line: LineBuffer,
    pub(super) navigator: HistoryNavigator<'s>,
    /// Terminal width, re-read on resize and after a restarted read.
    pub(super) columns: usize,
    /// `Some` in multi-line mode.
    pub(super) multi_line: Option<MultiLineRedraw>,
    pub(super) kill_action: u8,
    pub(super) need_refresh: bool,
    /// Event read by a composite operation that ended it, to be dispatched next.
    pub(super) redispatch: Option<LogicalEvent>,
}

impl<'s, 'd> PromptSession<'s, 'd> {
    /// # Errors
    ///
    /// Returns an error if the terminal width can't be read.
    pub fn new(
        devices: &'s mut TerminalDevices<'d>,
        config: &'s LinerConfig,
        kill_ring: &'s mut KillRing,
        completer: Option<&'s dyn Completer>,
        prompt: &'s str,
        history: &'s [String],
        line: LineBuffer,
    ) -> Result<Self, LinerError> {
        let columns = devices.geometry.columns()?;
        Ok(Self {
            devices,
            config,
            kill_ring,
            completer,
            prompt,
            decoder: KeyDecoder::new(),
            line,
            navigator: HistoryNavigator::new(history),
            columns,
            multi_line: config.multi_line.then(MultiLineRedraw::new),
            kill_action: 0,
            need_refresh: false,
            redispatch: None,
        })
    }

    /// Edit until a line is committed. Draws the prompt (and any pre-filled text)
    /// before the first read.
    ///
    /// # Errors
    ///
    /// [`LinerError::Eof`] and [`LinerError::Aborted`] when the user quits, or any
    /// read, write or width error.
    pub fn run(mut self) -> Result<String, LinerError> {
        self.refresh()?;

        loop {
            let event = self.take_event()?;

            DEBUG_LINER_SESSION.then(|| {
                tracing::debug!(message = "PromptSession::run", ?event, cursor = self.line.cursor());
            });

            // Only an edit ends history browsing, resizes and cursor motion don't.
            let line_before =
                (!event.is_history_browse()).then(|| self.line.as_chars().to_vec());

            let outcome = apply_event(&mut self, event)?;
            self.kill_action = self.kill_action.saturating_sub(1);

            if line_before.is_some_and(|before| before != self.line.as_chars()) {
                self.navigator.mark_stale();
            }

            if let Some(line) = outcome {
                return Ok(line);
            }

            // Batch redraws while more input is already waiting, so a paste doesn't
            // flicker.
            if self.need_refresh && !self.has_pending_input() {
                self.refresh()?;
            }
        }
    }

    /// Like [`PromptSession::run`] with echo off: the prompt is written once and the
    /// line is never drawn.
    ///
    /// # Errors
    ///
    /// Same as [`PromptSession::run`].
    pub fn run_password(mut self) -> Result<String, LinerError> {
        self.devices.output.write_text(self.prompt)?;
        self.devices.output.flush()?;

        loop {
            let event = self.next_event()?;
            if let Some(line) = apply_password_event(&mut self, event)? {
                return Ok(line);
            }
        }
    }

    /// The line as it stands.
    #[must_use]
    pub fn line(&self) -> &LineBuffer { &self.line }

    /// Next event to dispatch: one handed back by a composite operation, or a fresh
    /// read.
    pub(super) fn take_event(&mut self) -> Result<LogicalEvent, LinerError> {
        match self.redispatch.take() {
            Some(event) => ok!(event),
            None => self.next_event(),
        }
    }

    /// Read and decode one event. Reads that fail with an error the restart predicate
    /// accepts are issued again, after re-reading the terminal width.
    pub(super) fn next_event(&mut self) -> Result<LogicalEvent, LinerError> {
        loop {
            match self.decoder.next_event(self.devices.input) {
                Ok(event) => return ok!(event),
                Err(error) if (self.config.should_restart)(&error) => {
                    tracing::debug!(message = "PromptSession: restarting read", ?error);
                    self.columns = self.devices.geometry.columns()?;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    pub(super) fn has_pending_input(&mut self) -> bool {
        self.redispatch.is_some()
            || self.decoder.has_pending()
            || self.devices.input.has_buffered()
    }

    pub(super) fn beep(&mut self) -> Result<(), LinerError> {
        ring_bell!(self.config, self.devices.output)?;
        ok!()
    }

    /// Record killed text, merging it into the current kill ring entry when the
    /// previous event was also a kill.
    pub(super) fn record_kill(&mut self, text: &[char], merge_mode: KillMode) {
        let mode = if self.kill_action > 0 {
            merge_mode
        } else {
            KillMode::New
        };
        self.kill_ring.kill(text, mode);
        self.kill_action = KILL_ACTION_GRACE;
    }

    pub(super) fn reread_columns(&mut self) -> Result<(), LinerError> {
        self.columns = self.devices.geometry.columns()?;
        ok!()
    }
}
