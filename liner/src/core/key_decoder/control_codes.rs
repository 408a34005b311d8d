// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control codes as they arrive from a terminal in raw mode. `Ctrl+<letter>` is the
//! letter's position in the alphabet.

pub const CTRL_A: u8 = 0x01;
pub const CTRL_B: u8 = 0x02;
pub const CTRL_C: u8 = 0x03;
pub const CTRL_D: u8 = 0x04;
pub const CTRL_E: u8 = 0x05;
pub const CTRL_F: u8 = 0x06;
pub const CTRL_G: u8 = 0x07;
pub const CTRL_H: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const LF: u8 = 0x0A;
pub const CTRL_K: u8 = 0x0B;
pub const CTRL_L: u8 = 0x0C;
pub const CR: u8 = 0x0D;
pub const CTRL_N: u8 = 0x0E;
pub const CTRL_O: u8 = 0x0F;
pub const CTRL_P: u8 = 0x10;
pub const CTRL_Q: u8 = 0x11;
pub const CTRL_R: u8 = 0x12;
pub const CTRL_S: u8 = 0x13;
pub const CTRL_T: u8 = 0x14;
pub const CTRL_U: u8 = 0x15;
pub const CTRL_V: u8 = 0x16;
pub const CTRL_W: u8 = 0x17;
pub const CTRL_X: u8 = 0x18;
pub const CTRL_Y: u8 = 0x19;
pub const CTRL_Z: u8 = 0x1A;
pub const ESC: u8 = 0x1B;

/// Backspace as most terminals send it. Decoded to [`CTRL_H`].
pub const DEL: u8 = 0x7F;

pub const ESC_CHAR: char = '\x1b';
pub const DEL_CHAR: char = '\x7f';

/// Second byte of a `CSI` sequence (`ESC [`).
pub const ANSI_CSI_BRACKET: char = '[';

/// Second byte of an `SS3` sequence (`ESC O`).
pub const ANSI_SS3_O: char = 'O';
