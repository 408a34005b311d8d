// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Result of asking a [`Completer`] for candidates. Picking `candidates[i]` turns the
/// line into `head + candidates[i] + tail`, with the cursor right after the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub head: String,
    pub candidates: Vec<String>,
    pub tail: String,
}

/// Supplies tab completion candidates for the line being edited. `pos` is the cursor,
/// as a codepoint index into `line`.
///
/// Any `Fn(&str) -> Vec<String>` is a completer that replaces the whole line:
///
/// ```
/// use r3bl_liner::Completer;
///
/// let commands = |line: &str| -> Vec<String> {
///     ["help", "history", "quit"]
///         .iter()
///         .filter(|it| it.starts_with(line))
///         .map(ToString::to_string)
///         .collect()
/// };
/// assert_eq!(commands.complete("h", 1).candidates, ["help", "history"]);
/// ```
pub trait Completer {
    fn complete(&self, line: &str, pos: usize) -> Completion;
}

impl<F> Completer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn complete(&self, line: &str, _pos: usize) -> Completion {
        Completion {
            head: String::new(),
            candidates: self(line),
            tail: String::new(),
        }
    }
}

/// Completes the word under the cursor against a fixed list, keeping the rest of the
/// line. Words are separated by whitespace.
#[derive(Debug, Clone, Default)]
pub struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Completer for WordCompleter {
    fn complete(&self, line: &str, pos: usize) -> Completion {
        let chars: Vec<char> = line.chars().collect();
        let pos = pos.min(chars.len());
        let word_start = chars[..pos]
            .iter()
            .rposition(|ch| ch.is_whitespace())
            .map_or(0, |index| index + 1);
        let prefix: String = chars[word_start..pos].iter().collect();

        Completion {
            head: chars[..word_start].iter().collect(),
            candidates: self
                .words
                .iter()
                .filter(|word| word.starts_with(&prefix))
                .cloned()
                .collect(),
            tail: chars[pos..].iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_closure_completes_whole_line() {
        let completer = |line: &str| vec![format!("{line}!")];
        let completion = completer.complete("hi", 2);
        assert_eq!(completion, Completion {
            head: String::new(),
            candidates: vec!["hi!".to_string()],
            tail: String::new(),
        });
    }

    #[test]
    fn test_word_completer_keeps_head_and_tail() {
        let completer = WordCompleter::new(["status", "stash", "commit"]);
        let completion = completer.complete("git st --all", 6);
        assert_eq!(completion.head, "git ");
        assert_eq!(completion.candidates, ["status", "stash"]);
        assert_eq!(completion.tail, " --all");

        assert!(completer.complete("git x", 5).candidates.is_empty());
        assert_eq!(completer.complete("", 0).candidates.len(), 3);
    }
}
