// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{char::REPLACEMENT_CHARACTER, collections::VecDeque};

use smallvec::SmallVec;

/// Turns chunks of bytes into codepoints. A multi-byte sequence split across two chunks
/// is held until the rest arrives. Malformed bytes become U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8Assembler {
    incomplete: SmallVec<[u8; 4]>,
    decoded: VecDeque<char>,
}

impl Utf8Assembler {
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let joined: Vec<u8>;
        let mut rest = if self.incomplete.is_empty() {
            bytes
        } else {
            joined = self.incomplete.drain(..).chain(bytes.iter().copied()).collect();
            &joined[..]
        };

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    self.decoded.extend(valid.chars());
                    break;
                }
                Err(error) => {
                    let (valid, after) = rest.split_at(error.valid_up_to());
                    self.decoded
                        .extend(std::str::from_utf8(valid).unwrap_or_default().chars());
                    match error.error_len() {
                        None => {
                            self.incomplete.extend_from_slice(after);
                            break;
                        }
                        Some(len) => {
                            tracing::warn!(
                                message = "Utf8Assembler: malformed input",
                                bytes = ?&after[..len]
                            );
                            self.decoded.push_back(REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                    }
                }
            }
        }
    }

    /// The source ended; a truncated trailing sequence becomes U+FFFD.
    pub fn finish(&mut self) {
        if !self.incomplete.is_empty() {
            self.incomplete.clear();
            self.decoded.push_back(REPLACEMENT_CHARACTER);
        }
    }

    pub fn pop(&mut self) -> Option<char> { self.decoded.pop_front() }

    #[must_use]
    pub fn has_decoded(&self) -> bool { !self.decoded.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(assembler: &mut Utf8Assembler) -> String {
        std::iter::from_fn(|| assembler.pop()).collect()
    }

    #[test]
    fn test_split_sequence_is_joined() {
        let bytes = "a中b".as_bytes();
        let mut assembler = Utf8Assembler::default();
        assembler.push_bytes(&bytes[..2]);
        assert_eq!(drain(&mut assembler), "a");
        assert!(!assembler.has_decoded());
        assembler.push_bytes(&bytes[2..]);
        assert_eq!(drain(&mut assembler), "中b");
    }

    #[test]
    fn test_malformed_bytes_are_replaced() {
        let mut assembler = Utf8Assembler::default();
        assembler.push_bytes(&[b'x', 0xff, b'y', 0xe4, 0xb8]);
        assembler.finish();
        assert_eq!(drain(&mut assembler), "x\u{fffd}y\u{fffd}");
    }
}
