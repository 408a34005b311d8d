// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::session_state::PromptSession;
use crate::{ActionTag, CR, CTRL_A, CTRL_B, CTRL_C, CTRL_D, CTRL_E, CTRL_F, CTRL_H,
            CTRL_K, CTRL_L, CTRL_N, CTRL_P, CTRL_R, CTRL_T, CTRL_U, CTRL_W, CTRL_Y, ESC,
            KillMode, LF, LineBuffer, LinerError, LogicalEvent, TAB, ok};

/// `Some(line)` ends the prompt call with `line`.
pub type HandlerResult = Result<Option<String>, LinerError>;

/// Apply one event to the session.
pub fn apply_event(session: &mut PromptSession<'_, '_>, event: LogicalEvent) -> HandlerResult {
    match event {
        LogicalEvent::Printable(ch) => handle_printable(session, ch),
        LogicalEvent::Control(code) => handle_control(session, code),
        LogicalEvent::Action(tag) => handle_action(session, tag),
    }
}

/// Echo off: only commit, interrupt, end of input, backspace and typing are honored.
pub fn apply_password_event(
    session: &mut PromptSession<'_, '_>,
    event: LogicalEvent,
) -> HandlerResult {
    match event {
        LogicalEvent::Printable(ch) => {
            session.line.insert(ch);
            ok!(None)
        }
        LogicalEvent::Control(CR | LF) => {
            session.devices.output.new_line()?;
            session.devices.output.flush()?;
            ok!(Some(session.line.to_string()))
        }
        LogicalEvent::Control(CTRL_C) => {
            session.devices.output.write_text("^C")?;
            session.devices.output.new_line()?;
            if session.config.ctrl_c_aborts {
                session.devices.output.flush()?;
                return Err(LinerError::Aborted);
            }
            session.line.clear();
            session.devices.output.write_text(session.prompt)?;
            session.devices.output.flush()?;
            ok!(None)
        }
        LogicalEvent::Control(CTRL_D) => {
            if session.line.is_empty() {
                return Err(LinerError::Eof);
            }
            ok!(None)
        }
        LogicalEvent::Control(CTRL_H) => {
            if !session.line.delete_glyph_before() {
                session.beep()?;
            }
            ok!(None)
        }
        LogicalEvent::Control(_) => {
            session.beep()?;
            ok!(None)
        }
        LogicalEvent::Action(ActionTag::WindowChanged) => {
            session.reread_columns()?;
            ok!(None)
        }
        LogicalEvent::Action(_) => ok!(None),
    }
}

fn handle_printable(session: &mut PromptSession<'_, '_>, ch: char) -> HandlerResult {
    if session.can_fast_echo() {
        session.line.insert(ch);
        let mut utf8 = [0; 4];
        session.devices.output.write_text(ch.encode_utf8(&mut utf8))?;
        session.devices.output.flush()?;
    } else {
        session.line.insert(ch);
        session.need_refresh = true;
    }
    ok!(None)
}

fn handle_control(session: &mut PromptSession<'_, '_>, code: u8) -> HandlerResult {
    match code {
        CR | LF => return handle_enter(session),
        CTRL_A => move_cursor(session, LineBuffer::move_to_start, false)?,
        CTRL_E => move_cursor(session, LineBuffer::move_to_end, false)?,
        CTRL_B => move_cursor(session, |line| line.move_left(1), true)?,
        CTRL_F => move_cursor(session, |line| line.move_right(1), true)?,
        CTRL_P => handle_history_up(session)?,
        CTRL_N => handle_history_down(session)?,
        CTRL_D => return handle_ctrl_d(session),
        CTRL_H => edit(session, LineBuffer::delete_glyph_before)?,
        CTRL_K => kill(session, LineBuffer::kill_to_end, KillMode::Append)?,
        CTRL_U => kill(session, LineBuffer::kill_to_start, KillMode::Prepend)?,
        CTRL_W => kill(session, LineBuffer::erase_word_left, KillMode::Prepend)?,
        CTRL_T => edit(session, LineBuffer::transpose_glyphs)?,
        CTRL_Y => session.yank()?,
        CTRL_R => session.reverse_search()?,
        CTRL_L => handle_ctrl_l(session)?,
        CTRL_C => handle_ctrl_c(session)?,
        TAB => session.tab_complete()?,
        // Swallowed so a stray Escape doesn't beep.
        ESC => {}
        // Unbound: Ctrl+G/O/Q/S/V/X/Z, NUL and 28..=31.
        _ => session.beep()?,
    }
    ok!(None)
}

fn handle_action(session: &mut PromptSession<'_, '_>, tag: ActionTag) -> HandlerResult {
    match tag {
        ActionTag::Left => move_cursor(session, |line| line.move_left(1), true)?,
        ActionTag::Right => move_cursor(session, |line| line.move_right(1), true)?,
        ActionTag::Home => move_cursor(session, LineBuffer::move_to_start, false)?,
        ActionTag::End => move_cursor(session, LineBuffer::move_to_end, false)?,
        ActionTag::WordLeft | ActionTag::AltB => {
            move_cursor(session, LineBuffer::word_left, true)?;
        }
        ActionTag::WordRight | ActionTag::AltF => {
            move_cursor(session, LineBuffer::word_right, true)?;
        }
        ActionTag::Up => handle_history_up(session)?,
        ActionTag::Down => handle_history_down(session)?,
        ActionTag::Delete => edit(session, LineBuffer::delete_glyph_at)?,
        ActionTag::AltD => kill(session, LineBuffer::erase_word_right, KillMode::Append)?,
        ActionTag::AltBackspace => {
            kill(session, LineBuffer::erase_word_left, KillMode::Prepend)?;
        }
        ActionTag::WindowChanged => {
            session.reread_columns()?;
            session.need_refresh = true;
        }
        // Alt+Y and Shift+Tab only mean something while yanking or completing.
        ActionTag::AltY
        | ActionTag::ShiftTab
        | ActionTag::Insert
        | ActionTag::PageUp
        | ActionTag::PageDown
        | ActionTag::F1
        | ActionTag::F2
        | ActionTag::F3
        | ActionTag::F4
        | ActionTag::F5
        | ActionTag::F6
        | ActionTag::F7
        | ActionTag::F8
        | ActionTag::F9
        | ActionTag::F10
        | ActionTag::F11
        | ActionTag::F12
        | ActionTag::Unknown => {}
    }
    ok!(None)
}

/// Cursor motion. `beep_at_edge` rings the bell when the cursor couldn't move.
fn move_cursor(
    session: &mut PromptSession<'_, '_>,
    motion: impl FnOnce(&mut LineBuffer) -> bool,
    beep_at_edge: bool,
) -> Result<(), LinerError> {
    if motion(&mut session.line) {
        session.need_refresh = true;
    } else if beep_at_edge {
        session.beep()?;
    }
    ok!()
}

/// An edit that isn't a kill. Rings the bell when it had nothing to act on.
fn edit(
    session: &mut PromptSession<'_, '_>,
    operation: impl FnOnce(&mut LineBuffer) -> bool,
) -> Result<(), LinerError> {
    if operation(&mut session.line) {
        session.need_refresh = true;
        ok!()
    } else {
        session.beep()
    }
}

/// An edit that removes text into the kill ring. `merge_mode` is used when the
/// previous event was also a kill.
fn kill(
    session: &mut PromptSession<'_, '_>,
    operation: impl FnOnce(&mut LineBuffer) -> Option<Vec<char>>,
    merge_mode: KillMode,
) -> Result<(), LinerError> {
    match operation(&mut session.line) {
        Some(text) => {
            session.record_kill(&text, merge_mode);
            session.need_refresh = true;
            ok!()
        }
        None => session.beep(),
    }
}

fn handle_enter(session: &mut PromptSession<'_, '_>) -> HandlerResult {
    if session.need_refresh {
        session.refresh()?;
    }
    session.finish_line()?;
    ok!(Some(session.line.to_string()))
}

fn handle_ctrl_d(session: &mut PromptSession<'_, '_>) -> HandlerResult {
    if session.line.is_empty() {
        return Err(LinerError::Eof);
    }
    edit(session, LineBuffer::delete_glyph_at)?;
    ok!(None)
}

/// Show `^C` and move to a fresh row. Then either abort, or start over with an empty
/// line.
fn handle_ctrl_c(session: &mut PromptSession<'_, '_>) -> Result<(), LinerError> {
    session.devices.output.write_text("^C")?;
    session.finish_line()?;
    if session.config.ctrl_c_aborts {
        return Err(LinerError::Aborted);
    }
    session.line.clear();
    session.need_refresh = true;
    ok!()
}

fn handle_ctrl_l(session: &mut PromptSession<'_, '_>) -> Result<(), LinerError> {
    session.devices.output.erase_screen()?;
    if let Some(redraw) = session.multi_line.as_mut() {
        redraw.reset();
    }
    session.need_refresh = true;
    ok!()
}

fn handle_history_up(session: &mut PromptSession<'_, '_>) -> Result<(), LinerError> {
    let live_line = session.line.to_string();
    match session.navigator.up(&live_line) {
        Some(text) => {
            session.line.replace(text);
            session.need_refresh = true;
            ok!()
        }
        None => session.beep(),
    }
}

fn handle_history_down(session: &mut PromptSession<'_, '_>) -> Result<(), LinerError> {
    let live_line = session.line.to_string();
    match session.navigator.down(&live_line) {
        Some(text) => {
            session.line.replace(text);
            session.need_refresh = true;
            ok!()
        }
        None => session.beep(),
    }
}
