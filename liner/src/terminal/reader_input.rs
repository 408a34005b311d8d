// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Read;

use crate::{InputError, InputUnit, RawInput, Utf8Assembler};

/// Bytes pulled from the reader per call to [`Read::read`].
pub const READ_BUFFER_SIZE: usize = 1_024;

/// A [`RawInput`] over any byte stream: a pipe, a file, an in-memory buffer. There is no
/// resize notification, and [`RawInput::has_buffered`] only reports what has already
/// been read.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
    assembler: Utf8Assembler,
    eof: bool,
}

impl<R: Read> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            assembler: Utf8Assembler::default(),
            eof: false,
        }
    }

    pub fn into_inner(self) -> R { self.reader }
}

impl<R: Read> RawInput for ReaderInput<R> {
    fn next_unit(&mut self) -> Result<InputUnit, InputError> {
        loop {
            if let Some(ch) = self.assembler.pop() {
                return Ok(InputUnit::Char(ch));
            }
            if self.eof {
                return Err(InputError::Eof);
            }
            let mut buffer = [0_u8; READ_BUFFER_SIZE];
            match self.reader.read(&mut buffer)? {
                0 => {
                    self.eof = true;
                    self.assembler.finish();
                }
                count => self.assembler.push_bytes(&buffer[..count]),
            }
        }
    }

    fn has_buffered(&mut self) -> bool { self.assembler.has_decoded() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn test_reads_codepoints_then_eof() {
        let mut input = ReaderInput::new(Cursor::new("é\n".as_bytes()));
        assert!(!input.has_buffered());
        assert_eq!(input.next_unit().unwrap(), InputUnit::Char('é'));
        assert!(input.has_buffered());
        assert_eq!(input.next_unit().unwrap(), InputUnit::Char('\n'));
        assert!(matches!(input.next_unit(), Err(InputError::Eof)));
        assert!(matches!(input.next_unit(), Err(InputError::Eof)));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::ErrorKind::Interrupted.into())
        }
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut input = ReaderInput::new(FailingReader);
        let error = input.next_unit().unwrap_err();
        assert!(
            matches!(error, InputError::IO(ref e) if e.kind() == io::ErrorKind::Interrupted)
        );
    }
}
