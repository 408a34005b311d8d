// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Emacs style kill ring: a bounded circular collection of killed text spans.

/// Default number of entries a [`KillRing`] holds before it starts overwriting.
pub const KILL_RING_MAX: usize = 60;

/// How a kill is recorded. The prompt loop picks [`KillMode::Append`] or
/// [`KillMode::Prepend`] when the previous event was also a kill, so a run of kills
/// collapses into one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillMode {
    /// Start a fresh entry after the current one.
    New,
    /// Add the text after the current entry's content (forward kills).
    Append,
    /// Add the text before the current entry's content (backward kills).
    Prepend,
}

/// Entries are stored in ring order. A new entry is linked in right after `current`
/// and becomes current, and once the ring is full the entry after `current` (the
/// oldest) is overwritten instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillRing {
    entries: Vec<Vec<char>>,
    current: usize,
    capacity: usize,
}

impl Default for KillRing {
    fn default() -> Self { Self::new(KILL_RING_MAX) }
}

impl KillRing {
    /// A `capacity` of `0` is treated as `1`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: 0,
            capacity: capacity.max(1),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Record `text` according to `mode`.
    pub fn kill(&mut self, text: &[char], mode: KillMode) {
        match mode {
            KillMode::New => self.push_entry(text.to_vec()),
            KillMode::Append => self.current_entry_mut().extend_from_slice(text),
            KillMode::Prepend => {
                let entry = self.current_entry_mut();
                entry.splice(0..0, text.iter().copied());
            }
        }
    }

    /// Content of the current entry, `None` when nothing was ever killed.
    #[must_use]
    pub fn yank_current(&self) -> Option<&[char]> {
        self.entries.get(self.current).map(Vec::as_slice)
    }

    /// Move "current" to the previous entry, wrapping around. Returns `false` when the
    /// ring is empty.
    pub fn rotate(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.current = (self.current + self.entries.len() - 1) % self.entries.len();
        true
    }

    fn push_entry(&mut self, entry: Vec<char>) {
        if self.entries.is_empty() {
            self.entries.push(entry);
            self.current = 0;
        } else if self.entries.len() >= self.capacity {
            self.current = (self.current + 1) % self.entries.len();
            self.entries[self.current] = entry;
        } else {
            self.current += 1;
            self.entries.insert(self.current, entry);
        }
    }

    /// Append and prepend on an empty ring start from an empty entry.
    fn current_entry_mut(&mut self) -> &mut Vec<char> {
        if self.entries.is_empty() {
            self.push_entry(Vec::new());
        }
        &mut self.entries[self.current]
    }
}
