// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incremental reverse search (`Ctrl+R`) over the history.
//!
//! Matches are entries containing the search term anywhere (not just as a prefix), in
//! history order; the most recent match is the last one. Typing or deleting a
//! character re-runs the query and jumps to the most recent match. `Ctrl+R` then walks
//! to older matches and `Ctrl+S` back to newer ones.

/// A history entry containing the search term, and where the term starts in it
/// (codepoint index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch<'h> {
    pub line: &'h str,
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct ReverseSearch<'h> {
    history: &'h [String],
    term: Vec<char>,
    matches: Vec<SearchMatch<'h>>,
    /// Index into `matches` of the match on display, `None` before the first query.
    selected: Option<usize>,
}

impl<'h> ReverseSearch<'h> {
    #[must_use]
    pub fn new(history: &'h [String]) -> Self {
        Self {
            history,
            term: Vec::new(),
            matches: Vec::new(),
            selected: None,
        }
    }

    #[must_use]
    pub fn term(&self) -> String { self.term.iter().collect() }

    /// Text shown in place of the prompt while searching.
    #[must_use]
    pub fn prompt_text(&self) -> String { format!("(reverse-i-search)`{}': ", self.term()) }

    /// The match on display. `None` before anything was searched for, or when nothing
    /// matches the term.
    #[must_use]
    pub fn current(&self) -> Option<SearchMatch<'h>> {
        self.selected.and_then(|index| self.matches.get(index).copied())
    }

    /// Add a character to the term and jump to the most recent match.
    pub fn push_char(&mut self, ch: char) {
        self.term.push(ch);
        self.query();
    }

    /// Drop the last character of the term. Returns `false` when the term was empty.
    pub fn pop_char(&mut self) -> bool {
        if self.term.pop().is_none() {
            return false;
        }
        self.query();
        true
    }

    /// Step to the next older match. Returns `false` when there is none.
    pub fn older(&mut self) -> bool {
        match self.selected {
            Some(index) if index > 0 => {
                self.selected = Some(index - 1);
                true
            }
            Some(_) => false,
            None => {
                // Nothing typed yet: the empty term matches every entry.
                if self.term.is_empty() {
                    self.query();
                }
                self.selected.is_some()
            }
        }
    }

    /// Step to the next newer match. Returns `false` when there is none.
    pub fn newer(&mut self) -> bool {
        match self.selected {
            Some(index) if index + 1 < self.matches.len() => {
                self.selected = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    fn query(&mut self) {
        let term = self.term();
        self.matches = self
            .history
            .iter()
            .filter_map(|line| {
                line.find(&term).map(|byte_index| SearchMatch {
                    line: line.as_str(),
                    position: line[..byte_index].chars().count(),
                })
            })
            .collect();
        self.selected = self.matches.len().checked_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history() -> Vec<String> {
        ["git status", "cargo build", "git commit", "cargo test"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_typing_selects_most_recent_substring_match() {
        let entries = history();
        let mut search = ReverseSearch::new(&entries);
        assert_eq!(search.current(), None);

        search.push_char('i');
        search.push_char('t');
        assert_eq!(
            search.current(),
            Some(SearchMatch {
                line: "git commit",
                position: 1
            })
        );
        assert_eq!(search.prompt_text(), "(reverse-i-search)`it': ");

        assert!(search.older());
        assert_eq!(search.current().unwrap().line, "git status");
        assert!(!search.older());
        assert!(search.newer());
        assert_eq!(search.current().unwrap().line, "git commit");
        assert!(!search.newer());
    }

    #[test]
    fn test_no_match_then_backspace() {
        let entries = history();
        let mut search = ReverseSearch::new(&entries);
        search.push_char('x');
        assert_eq!(search.current(), None);
        assert!(!search.older());

        assert!(search.pop_char());
        assert_eq!(search.term(), "");
        assert_eq!(search.current().unwrap().line, "cargo test");
        assert!(!search.pop_char());
    }

    #[test]
    fn test_older_before_typing_starts_at_most_recent() {
        let entries = history();
        let mut search = ReverseSearch::new(&entries);
        assert!(search.older());
        assert_eq!(search.current().unwrap().line, "cargo test");
        assert!(search.older());
        assert_eq!(search.current().unwrap().line, "git commit");
    }

    #[test]
    fn test_match_position_counts_codepoints() {
        let entries = vec!["héllo wörld".to_string()];
        let mut search = ReverseSearch::new(&entries);
        search.push_char('w');
        assert_eq!(search.current().unwrap().position, 6);
    }
}
