// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words EINTR winch

//! [`RawInput`] for an interactive terminal on stdin.
//!
//! [`mio`] waits on two sources at once: stdin becoming readable, and a pipe that
//! [`signal_hook_mio`] writes to when `SIGWINCH` arrives. That is how a resize turns
//! into an [`InputUnit::WindowChanged`] in the same stream as keystrokes.
//!
//! Bytes are read straight from the file descriptor with [`rustix::io::read`] rather
//! than through [`std::io::Stdin`], whose internal buffer could hold bytes that [`mio`]
//! no longer reports as readable.

use std::{io::{self, Stdin},
          os::fd::AsRawFd,
          time::Duration};

use miette::Diagnostic;
use mio::{Events, Interest, Poll, Token, unix::SourceFd};
use signal_hook::consts::SIGWINCH;
use signal_hook_mio::v1_0::Signals;

use crate::{InputError, InputUnit, LinerError, RawInput, Utf8Assembler};

const DEBUG_LINER_TTY_INPUT: bool = false;

pub const STDIN_READ_BUFFER_SIZE: usize = 1_024;

const EVENTS_CAPACITY: usize = 8;

const STDIN_TOKEN: Token = Token(0);
const SIGNALS_TOKEN: Token = Token(1);

/// Failed to set up the poll for stdin and `SIGWINCH`.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("failed to register stdin and SIGWINCH with mio")]
#[diagnostic(
    code(r3bl_liner::tty_input::registration),
    help("Ensure stdin is a valid file descriptor")
)]
pub struct TtyInputRegistrationError(#[source] pub io::Error);

impl From<TtyInputRegistrationError> for LinerError {
    fn from(error: TtyInputRegistrationError) -> Self { LinerError::IO(error.0) }
}

#[allow(missing_debug_implementations)]
pub struct TtyInput {
    poll_handle: Poll,
    ready_events_buffer: Events,
    stdin: Stdin,
    signals: Signals,
    assembler: Utf8Assembler,
    pending_resize: bool,
    eof: bool,
}

impl TtyInput {
    /// # Errors
    ///
    /// Returns [`TtyInputRegistrationError`] if the poll can't be created or either
    /// source can't be registered with it.
    pub fn try_new() -> Result<Self, TtyInputRegistrationError> {
        let poll_handle = Poll::new().map_err(TtyInputRegistrationError)?;
        let registry = poll_handle.registry();

        let stdin = io::stdin();
        registry
            .register(
                &mut SourceFd(&stdin.as_raw_fd()),
                STDIN_TOKEN,
                Interest::READABLE,
            )
            .map_err(TtyInputRegistrationError)?;

        let mut signals = Signals::new([SIGWINCH]).map_err(TtyInputRegistrationError)?;
        registry
            .register(&mut signals, SIGNALS_TOKEN, Interest::READABLE)
            .map_err(TtyInputRegistrationError)?;

        Ok(Self {
            poll_handle,
            ready_events_buffer: Events::with_capacity(EVENTS_CAPACITY),
            stdin,
            signals,
            assembler: Utf8Assembler::default(),
            pending_resize: false,
            eof: false,
        })
    }

    fn has_unit(&self) -> bool { self.pending_resize || self.assembler.has_decoded() }

    /// Wait for either source, `None` blocks indefinitely.
    fn poll_sources(&mut self, timeout: Option<Duration>) -> Result<(), InputError> {
        self.poll_handle.poll(&mut self.ready_events_buffer, timeout)?;

        let mut stdin_ready = false;
        let mut signals_ready = false;
        for event in &self.ready_events_buffer {
            match event.token() {
                STDIN_TOKEN => stdin_ready = true,
                SIGNALS_TOKEN => signals_ready = true,
                _ => {}
            }
        }

        if signals_ready && self.signals.pending().any(|signal| signal == SIGWINCH) {
            DEBUG_LINER_TTY_INPUT.then(|| {
                tracing::debug!(message = "TtyInput: SIGWINCH received");
            });
            self.pending_resize = true;
        }

        if stdin_ready {
            self.read_stdin()?;
        }

        Ok(())
    }

    fn read_stdin(&mut self) -> Result<(), InputError> {
        let mut buffer = [0_u8; STDIN_READ_BUFFER_SIZE];
        match rustix::io::read(&self.stdin, &mut buffer[..]) {
            Ok(0) => {
                DEBUG_LINER_TTY_INPUT.then(|| {
                    tracing::debug!(message = "TtyInput: EOF (0 bytes)");
                });
                self.eof = true;
                self.assembler.finish();
            }
            Ok(count) => {
                DEBUG_LINER_TTY_INPUT.then(|| {
                    tracing::debug!(message = "TtyInput: read bytes", bytes_read = count);
                });
                self.assembler.push_bytes(&buffer[..count]);
            }
            // EINTR and spurious wakeups: poll again.
            Err(rustix::io::Errno::INTR | rustix::io::Errno::AGAIN) => {}
            Err(errno) => return Err(InputError::IO(errno.into())),
        }
        Ok(())
    }
}

impl RawInput for TtyInput {
    fn next_unit(&mut self) -> Result<InputUnit, InputError> {
        loop {
            if self.pending_resize {
                self.pending_resize = false;
                return Ok(InputUnit::WindowChanged);
            }
            if let Some(ch) = self.assembler.pop() {
                return Ok(InputUnit::Char(ch));
            }
            if self.eof {
                return Err(InputError::Eof);
            }
            self.poll_sources(None)?;
        }
    }

    fn has_buffered(&mut self) -> bool {
        if self.has_unit() || self.eof {
            return self.has_unit();
        }
        if let Err(error) = self.poll_sources(Some(Duration::ZERO)) {
            tracing::warn!(message = "TtyInput: non-blocking poll failed", ?error);
        }
        self.has_unit()
    }
}
