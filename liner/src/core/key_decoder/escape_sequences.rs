// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words rxvt

//! Lookup tables for the escape sequences terminals send for special keys. These are
//! pure functions over the bytes already collected by [`crate::KeyDecoder`].
//!
//! | Sequence                  | Key                                                  |
//! |:--------------------------|:-----------------------------------------------------|
//! | `ESC b`, `ESC f`          | `AltB`, `AltF`                                       |
//! | `ESC d`, `ESC y`          | `AltD`, `AltY`                                       |
//! | `ESC DEL`, `ESC BS`       | `AltBackspace`                                       |
//! | `CSI A` .. `CSI D`        | Up, Down, Right, Left                                |
//! | `CSI 1;5C`, `CSI 1;3D` .. | Ctrl/Alt + Right/Left → `WordRight`/`WordLeft`       |
//! | `CSI H`, `CSI F`          | Home, End                                            |
//! | `CSI Z`                   | `ShiftTab`                                           |
//! | `CSI n ~`                 | Home, Insert, Delete, End, `PageUp`, `PageDown`, F5+ |
//! | `CSI [ A` .. `CSI [ E`    | F1 .. F5 (Linux console)                             |
//! | `SS3 P` .. `SS3 S`        | F1 .. F4                                             |
//! | `SS3 c`, `SS3 d`          | `WordRight`, `WordLeft` (rxvt)                       |

use smallvec::SmallVec;

use crate::ActionTag;

/// Modifier bits in the second `CSI` parameter, which is sent as `1 + bits`.
pub const MODIFIER_SHIFT: u16 = 1;
pub const MODIFIER_ALT: u16 = 2;
pub const MODIFIER_CTRL: u16 = 4;

/// Key for `ESC <ch>`, when `ch` is one of the Alt combinations the editor binds.
#[must_use]
pub fn alt_key(ch: char) -> Option<ActionTag> {
    match ch {
        'b' => Some(ActionTag::AltB),
        'f' => Some(ActionTag::AltF),
        'd' => Some(ActionTag::AltD),
        'y' => Some(ActionTag::AltY),
        '\x7f' | '\x08' => Some(ActionTag::AltBackspace),
        _ => None,
    }
}

/// Numeric parameters of a `CSI` sequence, e.g. `1;5` in `ESC [ 1 ; 5 C`. Empty
/// parameters are kept as `None` so positions line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsiParams {
    values: SmallVec<[Option<u16>; 4]>,
    current: Option<u16>,
    /// Set when a private marker (`<`, `=`, `>`, `?`, `:`) or an intermediate byte
    /// shows up. No key the editor binds uses them.
    unsupported: bool,
}

impl CsiParams {
    /// Feed one parameter (`0x30..=0x3F`) or intermediate (`0x20..=0x2F`) byte.
    pub fn push(&mut self, ch: char) {
        match ch {
            '0'..='9' => {
                let digit = ch
                    .to_digit(10)
                    .and_then(|it| u16::try_from(it).ok())
                    .unwrap_or_default();
                let value = self.current.unwrap_or(0);
                self.current = Some(value.saturating_mul(10).saturating_add(digit));
            }
            ';' => self.values.push(self.current.take()),
            _ => self.unsupported = true,
        }
    }

    /// Parameter at `index`, once the final byte has been seen.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u16> {
        let pending = self.values.len();
        if index == pending {
            self.current
        } else {
            self.values.get(index).copied().flatten()
        }
    }

    #[must_use]
    pub fn is_unsupported(&self) -> bool { self.unsupported }

    /// Modifier bits from the second parameter, `0` when absent.
    #[must_use]
    pub fn modifier_bits(&self) -> u16 { self.get(1).map_or(0, |it| it.saturating_sub(1)) }
}

/// Key for `ESC [ <params> <final_byte>`.
#[must_use]
pub fn csi_key(params: &CsiParams, final_byte: char) -> ActionTag {
    if params.is_unsupported() {
        return ActionTag::Unknown;
    }
    let is_word_motion = params.modifier_bits() & (MODIFIER_ALT | MODIFIER_CTRL) != 0
        // rxvt sends `CSI 5 C` for Ctrl+Right.
        || (params.get(0) == Some(5) && params.get(1).is_none());
    match final_byte {
        'A' => ActionTag::Up,
        'B' => ActionTag::Down,
        'C' if is_word_motion => ActionTag::WordRight,
        'C' => ActionTag::Right,
        'D' if is_word_motion => ActionTag::WordLeft,
        'D' => ActionTag::Left,
        'H' => ActionTag::Home,
        'F' => ActionTag::End,
        'Z' => ActionTag::ShiftTab,
        '~' => tilde_key(params.get(0)),
        _ => ActionTag::Unknown,
    }
}

/// Key for `ESC [ <code> ~`.
#[must_use]
pub fn tilde_key(code: Option<u16>) -> ActionTag {
    match code {
        Some(1 | 7) => ActionTag::Home,
        Some(2) => ActionTag::Insert,
        Some(3) => ActionTag::Delete,
        Some(4 | 8) => ActionTag::End,
        Some(5) => ActionTag::PageUp,
        Some(6) => ActionTag::PageDown,
        Some(11) => ActionTag::F1,
        Some(12) => ActionTag::F2,
        Some(13) => ActionTag::F3,
        Some(14) => ActionTag::F4,
        Some(15) => ActionTag::F5,
        Some(17) => ActionTag::F6,
        Some(18) => ActionTag::F7,
        Some(19) => ActionTag::F8,
        Some(20) => ActionTag::F9,
        Some(21) => ActionTag::F10,
        Some(23) => ActionTag::F11,
        Some(24) => ActionTag::F12,
        _ => ActionTag::Unknown,
    }
}

/// Key for `ESC O <ch>`.
#[must_use]
pub fn ss3_key(ch: char) -> ActionTag {
    match ch {
        'A' => ActionTag::Up,
        'B' => ActionTag::Down,
        'C' => ActionTag::Right,
        'D' => ActionTag::Left,
        'H' => ActionTag::Home,
        'F' => ActionTag::End,
        'P' => ActionTag::F1,
        'Q' => ActionTag::F2,
        'R' => ActionTag::F3,
        'S' => ActionTag::F4,
        'c' => ActionTag::WordRight,
        'd' => ActionTag::WordLeft,
        _ => ActionTag::Unknown,
    }
}

/// Key for the Linux console's `ESC [ [ <ch>`.
#[must_use]
pub fn linux_console_key(ch: char) -> ActionTag {
    match ch {
        'A' => ActionTag::F1,
        'B' => ActionTag::F2,
        'C' => ActionTag::F3,
        'D' => ActionTag::F4,
        'E' => ActionTag::F5,
        _ => ActionTag::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn params(text: &str) -> CsiParams {
        let mut it = CsiParams::default();
        text.chars().for_each(|ch| it.push(ch));
        it
    }

    #[test_case("", 'A', ActionTag::Up)]
    #[test_case("", 'D', ActionTag::Left)]
    #[test_case("1;5", 'C', ActionTag::WordRight)]
    #[test_case("1;3", 'D', ActionTag::WordLeft)]
    #[test_case("1;2", 'C', ActionTag::Right)]
    #[test_case("5", 'D', ActionTag::WordLeft)]
    #[test_case("", 'Z', ActionTag::ShiftTab)]
    #[test_case("3", '~', ActionTag::Delete)]
    #[test_case("3;5", '~', ActionTag::Delete)]
    #[test_case("7", '~', ActionTag::Home)]
    #[test_case("24", '~', ActionTag::F12)]
    #[test_case("16", '~', ActionTag::Unknown)]
    #[test_case("", '~', ActionTag::Unknown)]
    #[test_case("", 'q', ActionTag::Unknown)]
    #[test_case("?1", 'C', ActionTag::Unknown)]
    fn test_csi_key(text: &str, final_byte: char, expected: ActionTag) {
        assert_eq!(csi_key(&params(text), final_byte), expected);
    }

    #[test]
    fn test_params_keep_positions() {
        let it = params(";5");
        assert_eq!(it.get(0), None);
        assert_eq!(it.get(1), Some(5));
        assert_eq!(it.get(2), None);
        assert_eq!(it.modifier_bits(), MODIFIER_CTRL);
    }

    #[test]
    fn test_small_tables() {
        assert_eq!(alt_key('\x7f'), Some(ActionTag::AltBackspace));
        assert_eq!(alt_key('z'), None);
        assert_eq!(ss3_key('R'), ActionTag::F3);
        assert_eq!(ss3_key('c'), ActionTag::WordRight);
        assert_eq!(linux_console_key('E'), ActionTag::F5);
        assert_eq!(linux_console_key('F'), ActionTag::Unknown);
    }
}
