// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const HISTORY_SIZE_MAX: usize = 1_000;

/// In memory history for one session, oldest entry first. A prompt call only reads it,
/// through [`History::entries`]; the caller decides what to [`History::append`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    max_size: usize,
}

impl Default for History {
    fn default() -> Self { Self::new(HISTORY_SIZE_MAX) }
}

impl History {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
        }
    }

    /// Add `line` as the newest entry. Empty lines and a repeat of the newest entry are
    /// skipped. Once over `max_size`, the oldest entries are dropped. Returns whether
    /// the line was added.
    pub fn append(&mut self, line: impl Into<String>) -> bool {
        let line = line.into();

        // Don't add entry if last entry was same, or line was empty.
        if line.is_empty() || self.entries.last() == Some(&line) {
            return false;
        }
        self.entries.push(line);

        // Remove oldest entries.
        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }

        true
    }

    #[must_use]
    pub fn entries(&self) -> &[String] { &self.entries }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear(); }
}
