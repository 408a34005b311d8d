// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Up/Down browsing over the history, filtered by the line as it was when browsing
//! started.
//!
//! ```text
//! history:        ["a", "ab", "b", "abc"]     live line: "a"
//! prefix_matches: ["a", "ab", "abc"]          position: 3 (editing live)
//!
//! up   → position 2, buffer "abc"   (live line saved as pending tail)
//! up   → position 1, buffer "ab"
//! down → position 2, buffer "abc"
//! down → position 3, buffer "a"     (pending tail restored)
//! ```
//!
//! Any event other than up/down marks the view stale, so the next browse filters by
//! whatever the line holds at that moment.

/// Filtered, positioned view over a caller supplied history.
#[derive(Debug, Clone)]
pub struct HistoryNavigator<'h> {
    history: &'h [String],
    prefix_matches: Vec<&'h str>,
    /// Index into `prefix_matches`; `prefix_matches.len()` means "editing the live line".
    position: usize,
    pending_tail: String,
    stale: bool,
}

impl<'h> HistoryNavigator<'h> {
    #[must_use]
    pub fn new(history: &'h [String]) -> Self {
        Self {
            history,
            prefix_matches: Vec::new(),
            position: 0,
            pending_tail: String::new(),
            stale: true,
        }
    }

    #[must_use]
    pub fn is_stale(&self) -> bool { self.stale }

    pub fn mark_stale(&mut self) { self.stale = true; }

    #[must_use]
    pub fn position(&self) -> usize { self.position }

    #[must_use]
    pub fn prefix_matches(&self) -> &[&'h str] { &self.prefix_matches }

    /// The full history this view was built over.
    #[must_use]
    pub fn history(&self) -> &'h [String] { self.history }

    /// Recompute the prefix matches for `live_line` if stale, and start at the live
    /// line. No-op when not stale.
    pub fn begin_browse(&mut self, live_line: &str) {
        if !self.stale {
            return;
        }
        self.prefix_matches = self
            .history
            .iter()
            .filter(|entry| entry.starts_with(live_line))
            .map(String::as_str)
            .collect();
        self.position = self.prefix_matches.len();
        self.pending_tail = live_line.to_string();
        self.stale = false;
    }

    /// Step to the previous (older) match. `live_line` is the buffer as it is now; it is
    /// saved when leaving the live line. Returns the text to load, or `None` at the top.
    pub fn up(&mut self, live_line: &str) -> Option<&'h str> {
        self.begin_browse(live_line);
        if self.position == 0 {
            return None;
        }
        if self.position == self.prefix_matches.len() {
            self.pending_tail = live_line.to_string();
        }
        self.position -= 1;
        Some(self.prefix_matches[self.position])
    }

    /// Step to the next (newer) match, or back to the saved live line. Returns the text
    /// to load, or `None` when already on the live line.
    pub fn down(&mut self, live_line: &str) -> Option<&str> {
        self.begin_browse(live_line);
        if self.position >= self.prefix_matches.len() {
            return None;
        }
        self.position += 1;
        if self.position == self.prefix_matches.len() {
            Some(&self.pending_tail)
        } else {
            Some(self.prefix_matches[self.position])
        }
    }
}
