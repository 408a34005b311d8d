// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the unit stream from a [`RawInput`] into [`LogicalEvent`]s.
//!
//! # ESC disambiguation
//!
//! `ESC` is both a key and the first byte of every escape sequence. Instead of a
//! wall-clock timeout, the decoder asks the input source whether more input is already
//! waiting ([`RawInput::has_buffered`]), the same way crossterm uses its
//! `input_available` flag:
//!
//! | After `ESC`                   | Result                                      |
//! |:------------------------------|:--------------------------------------------|
//! | nothing buffered              | `Control(ESC)` right away                   |
//! | `[` or `O`                    | `CSI` / `SS3` sequence, read to completion  |
//! | `b`, `f`, `d`, `y`, DEL, BS   | Alt combination                             |
//! | another control code          | `Control(ESC)`, the code is decoded next    |
//! | any other printable           | `Action(Unknown)`                           |
//!
//! Once `ESC [` or `ESC O` has been seen the rest of the sequence is read with
//! blocking reads, so a sequence split across reads (common over SSH) still decodes.
//!
//! # Resynchronization
//!
//! A unit that can't belong to the sequence being collected (a control code, or a non
//! ASCII codepoint) ends it with `Action(Unknown)` and is pushed back, so it decodes as
//! its own event next. A resize notification that arrives in the middle of a sequence
//! is held back and delivered right after the sequence's event.

use std::collections::VecDeque;

use super::escape_sequences::{CsiParams, alt_key, csi_key, linux_console_key, ss3_key};
use crate::{ANSI_CSI_BRACKET, ANSI_SS3_O, ActionTag, CTRL_H, DEL_CHAR, ESC, ESC_CHAR,
            InputError, InputUnit, LogicalEvent, RawInput};

const DEBUG_LINER_DECODER: bool = false;

/// Longest run of parameter bytes kept for one `CSI` sequence. Anything longer is still
/// consumed up to its final byte, then reported as `Unknown`.
pub const MAX_CSI_PARAM_LEN: usize = 16;

#[derive(Debug, Default)]
pub struct KeyDecoder {
    /// Units read while disambiguating that belong to the next event.
    pushed_back: VecDeque<InputUnit>,
    /// A resize seen mid-sequence, delivered after the sequence's own event.
    deferred_resize: bool,
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// `true` if the next event can be produced without reading from the source.
    #[must_use]
    pub fn has_pending(&self) -> bool { self.deferred_resize || !self.pushed_back.is_empty() }

    /// Decode exactly one event, reading as many units as it takes.
    ///
    /// # Errors
    ///
    /// Whatever the source returns from [`RawInput::next_unit`]. The decoder holds no
    /// partial state across an error other than units it had already pushed back, so
    /// calling again after a recoverable error resumes cleanly.
    pub fn next_event(&mut self, input: &mut dyn RawInput) -> Result<LogicalEvent, InputError> {
        if self.deferred_resize {
            self.deferred_resize = false;
            return Ok(LogicalEvent::Action(ActionTag::WindowChanged));
        }

        let event = match self.read_unit(input)? {
            InputUnit::WindowChanged => LogicalEvent::Action(ActionTag::WindowChanged),
            InputUnit::Char(ESC_CHAR) => self.decode_escape(input)?,
            InputUnit::Char(ch) => decode_char(ch),
        };

        DEBUG_LINER_DECODER.then(|| {
            tracing::debug!(message = "KeyDecoder::next_event", ?event);
        });

        Ok(event)
    }

    fn read_unit(&mut self, input: &mut dyn RawInput) -> Result<InputUnit, InputError> {
        match self.pushed_back.pop_front() {
            Some(unit) => Ok(unit),
            None => input.next_unit(),
        }
    }

    /// Next codepoint inside an escape sequence. Resizes are deferred, not dropped.
    fn read_sequence_char(&mut self, input: &mut dyn RawInput) -> Result<char, InputError> {
        loop {
            match self.read_unit(input)? {
                InputUnit::Char(ch) => return Ok(ch),
                InputUnit::WindowChanged => self.deferred_resize = true,
            }
        }
    }

    fn push_back(&mut self, ch: char) { self.pushed_back.push_front(InputUnit::Char(ch)); }

    fn decode_escape(&mut self, input: &mut dyn RawInput) -> Result<LogicalEvent, InputError> {
        let lone_esc = LogicalEvent::Control(ESC);

        if self.pushed_back.is_empty() && !input.has_buffered() {
            return Ok(lone_esc);
        }

        let ch = match self.read_unit(input)? {
            InputUnit::Char(ch) => ch,
            InputUnit::WindowChanged => {
                self.deferred_resize = true;
                return Ok(lone_esc);
            }
        };

        if let Some(tag) = alt_key(ch) {
            return Ok(LogicalEvent::Action(tag));
        }

        match ch {
            ANSI_CSI_BRACKET => self.decode_csi(input),
            ANSI_SS3_O => self.decode_ss3(input),
            _ if ch.is_ascii_control() => {
                self.push_back(ch);
                Ok(lone_esc)
            }
            _ => Ok(LogicalEvent::Action(ActionTag::Unknown)),
        }
    }

    /// `ESC [` has been consumed.
    fn decode_csi(&mut self, input: &mut dyn RawInput) -> Result<LogicalEvent, InputError> {
        let mut params = CsiParams::default();
        let mut param_len = 0;

        loop {
            let ch = self.read_sequence_char(input)?;
            match ch {
                // Linux console function keys: `ESC [ [ A`.
                '[' if param_len == 0 => {
                    let ch = self.read_sequence_char(input)?;
                    if !ch.is_ascii_graphic() {
                        self.push_back(ch);
                    }
                    return Ok(LogicalEvent::Action(linux_console_key(ch)));
                }
                // Parameter and intermediate bytes.
                '\x20'..='\x3f' => {
                    param_len += 1;
                    if param_len <= MAX_CSI_PARAM_LEN {
                        params.push(ch);
                    } else {
                        params.push('?');
                    }
                }
                // Final byte.
                '\x40'..='\x7e' => return Ok(LogicalEvent::Action(csi_key(&params, ch))),
                _ => {
                    self.push_back(ch);
                    return Ok(LogicalEvent::Action(ActionTag::Unknown));
                }
            }
        }
    }

    /// `ESC O` has been consumed.
    fn decode_ss3(&mut self, input: &mut dyn RawInput) -> Result<LogicalEvent, InputError> {
        let ch = self.read_sequence_char(input)?;
        if !ch.is_ascii_graphic() {
            self.push_back(ch);
            return Ok(LogicalEvent::Action(ActionTag::Unknown));
        }
        Ok(LogicalEvent::Action(ss3_key(ch)))
    }
}

/// A unit that isn't `ESC`: a control code or a printable.
fn decode_char(ch: char) -> LogicalEvent {
    match ch {
        DEL_CHAR => LogicalEvent::Control(CTRL_H),
        _ => match u8::try_from(u32::from(ch)) {
            Ok(code) if code < 0x20 => LogicalEvent::Control(code),
            _ => LogicalEvent::Printable(ch),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CTRL_A, TAB,
                test_fixtures::{ScriptStep, ScriptedInput}};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn decode_all(input: &mut ScriptedInput) -> Vec<LogicalEvent> {
        let mut decoder = KeyDecoder::new();
        let mut events = vec![];
        while let Ok(event) = decoder.next_event(input) {
            events.push(event);
        }
        events
    }

    fn decode_text(text: &str) -> Vec<LogicalEvent> {
        decode_all(&mut ScriptedInput::from_text(text))
    }

    #[test_case("\x1b[D", ActionTag::Left ; "csi left")]
    #[test_case("\x1b[A", ActionTag::Up ; "csi up")]
    #[test_case("\x1bOH", ActionTag::Home ; "ss3 home")]
    #[test_case("\x1b[3~", ActionTag::Delete ; "delete")]
    #[test_case("\x1b[1;5C", ActionTag::WordRight ; "ctrl right")]
    #[test_case("\x1b[15~", ActionTag::F5 ; "f5")]
    #[test_case("\x1b[[B", ActionTag::F2 ; "linux console f2")]
    #[test_case("\x1bb", ActionTag::AltB ; "alt b")]
    #[test_case("\x1b\x7f", ActionTag::AltBackspace ; "alt backspace")]
    #[test_case("\x1b[Z", ActionTag::ShiftTab ; "shift tab")]
    fn test_known_sequences(text: &str, expected: ActionTag) {
        assert_eq!(decode_text(text), vec![LogicalEvent::Action(expected)]);
    }

    #[test]
    fn test_plain_units() {
        assert_eq!(
            decode_text("a\x01\t中\x7f"),
            vec![
                LogicalEvent::Printable('a'),
                LogicalEvent::Control(CTRL_A),
                LogicalEvent::Control(TAB),
                LogicalEvent::Printable('中'),
                LogicalEvent::Control(CTRL_H),
            ]
        );
    }

    #[test]
    fn test_lone_esc_with_nothing_buffered() {
        let mut input = ScriptedInput::new()
            .text("\x1b")
            .pause()
            .text("[D");
        let mut decoder = KeyDecoder::new();
        assert_eq!(
            decoder.next_event(&mut input).unwrap(),
            LogicalEvent::Control(ESC)
        );
        // The bytes after the pause are plain text, not a sequence.
        assert_eq!(
            decoder.next_event(&mut input).unwrap(),
            LogicalEvent::Printable('[')
        );
        assert_eq!(
            decoder.next_event(&mut input).unwrap(),
            LogicalEvent::Printable('D')
        );
    }

    #[test]
    fn test_unknown_sequences_do_not_desynchronize() {
        assert_eq!(
            decode_text("\x1b[9qa\x1bzb\x1bO\x01c"),
            vec![
                LogicalEvent::Action(ActionTag::Unknown),
                LogicalEvent::Printable('a'),
                LogicalEvent::Action(ActionTag::Unknown),
                LogicalEvent::Printable('b'),
                LogicalEvent::Action(ActionTag::Unknown),
                LogicalEvent::Control(CTRL_A),
                LogicalEvent::Printable('c'),
            ]
        );
    }

    #[test]
    fn test_esc_before_control_code_is_lone_esc() {
        assert_eq!(
            decode_text("\x1b\x01x"),
            vec![
                LogicalEvent::Control(ESC),
                LogicalEvent::Control(CTRL_A),
                LogicalEvent::Printable('x'),
            ]
        );
    }

    #[test]
    fn test_overlong_csi_is_consumed_to_final_byte() {
        let text = format!("\x1b[{}Cz", "1;".repeat(20));
        assert_eq!(
            decode_text(&text),
            vec![
                LogicalEvent::Action(ActionTag::Unknown),
                LogicalEvent::Printable('z'),
            ]
        );
    }

    #[test]
    fn test_resize_mid_sequence_is_deferred() {
        let mut input = ScriptedInput::new()
            .text("\x1b[")
            .step(ScriptStep::Unit(InputUnit::WindowChanged))
            .text("Cx");
        assert_eq!(
            decode_all(&mut input),
            vec![
                LogicalEvent::Action(ActionTag::Right),
                LogicalEvent::Action(ActionTag::WindowChanged),
                LogicalEvent::Printable('x'),
            ]
        );
    }

    #[test]
    fn test_error_propagates_and_decoding_resumes() {
        let mut input = ScriptedInput::new()
            .text("a")
            .step(ScriptStep::Error(std::io::ErrorKind::Interrupted.into()))
            .text("b");
        let mut decoder = KeyDecoder::new();
        assert_eq!(
            decoder.next_event(&mut input).unwrap(),
            LogicalEvent::Printable('a')
        );
        assert!(matches!(
            decoder.next_event(&mut input),
            Err(InputError::IO(_))
        ));
        assert_eq!(
            decoder.next_event(&mut input).unwrap(),
            LogicalEvent::Printable('b')
        );
        assert!(matches!(
            decoder.next_event(&mut input),
            Err(InputError::Eof)
        ));
    }
}
