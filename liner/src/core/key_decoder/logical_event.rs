// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One decoded keystroke (or resize). Produced by [`crate::KeyDecoder::next_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalEvent {
    /// A codepoint to insert.
    Printable(char),
    /// A C0 control code, `0..=31`. See [`crate::control_codes`].
    Control(u8),
    /// A named key decoded from an escape sequence.
    Action(ActionTag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ActionTag {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    AltB,
    AltBackspace,
    AltD,
    AltF,
    AltY,
    ShiftTab,
    WordLeft,
    WordRight,
    /// The terminal was resized.
    WindowChanged,
    /// An escape sequence that isn't in the decoder's table.
    Unknown,
}

impl LogicalEvent {
    /// `true` for the events that browse history (`Up`, `Down`, `Ctrl+P`, `Ctrl+N`).
    /// Every other event marks the history view stale.
    #[must_use]
    pub fn is_history_browse(&self) -> bool {
        matches!(
            self,
            LogicalEvent::Action(ActionTag::Up | ActionTag::Down)
                | LogicalEvent::Control(crate::CTRL_P | crate::CTRL_N)
        )
    }
}
