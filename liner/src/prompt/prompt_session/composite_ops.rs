// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operations that read events of their own. Each one runs until an event it doesn't
//! handle arrives, then parks that event in the session's redispatch slot so the main
//! loop applies it next, exactly as if it had been read there.

use super::session_state::PromptSession;
use crate::{ActionTag, CTRL_G, CTRL_H, CTRL_R, CTRL_S, ESC, LineBuffer, LinerError,
            LogicalEvent, ReverseSearch, TAB, ok};

const DEBUG_LINER_COMPOSITE: bool = false;

impl PromptSession<'_, '_> {
    /// `Ctrl+Y`: insert the current kill ring entry at the cursor. While the next
    /// events are `Alt+Y`, swap the inserted text for the next older entry.
    pub(super) fn yank(&mut self) -> Result<(), LinerError> {
        if self.kill_ring.is_empty() {
            return ok!();
        }

        let before_yank = self.line.clone();
        loop {
            let Some(text) = self.kill_ring.yank_current() else {
                return ok!();
            };
            self.line = before_yank.clone();
            self.line.insert_chars(text);
            self.refresh()?;

            let event = self.next_event()?;
            if event == LogicalEvent::Action(ActionTag::AltY) {
                self.kill_ring.rotate();
                continue;
            }
            self.redispatch = Some(event);
            return ok!();
        }
    }

    /// `Ctrl+R`: search the history for entries containing a typed term, most recent
    /// first.
    ///
    /// | Event              | Effect                                               |
    /// |--------------------|------------------------------------------------------|
    /// | printable          | extend the term, jump to the most recent match       |
    /// | `Ctrl+R`           | next older match                                     |
    /// | `Ctrl+S`           | next newer match                                     |
    /// | backspace          | shorten the term                                     |
    /// | `Ctrl+G`           | cancel, the line is restored                         |
    /// | anything else      | accept the shown line and apply the event to it      |
    ///
    /// The shown line is the selected match. While nothing matches it is the last
    /// match, or the line as it was before the search if there never was one.
    pub(super) fn reverse_search(&mut self) -> Result<(), LinerError> {
        let mut search = ReverseSearch::new(self.navigator.history());
        let mut shown = self.line.clone();

        loop {
            if let Some(found) = search.current() {
                shown = LineBuffer::from_text_with_cursor(found.line, found.position);
            }
            self.draw(&search.prompt_text(), shown.as_chars(), shown.cursor())?;

            let event = self.next_event()?;

            DEBUG_LINER_COMPOSITE.then(|| {
                tracing::debug!(message = "reverse_search", ?event, term = search.term());
            });

            match event {
                LogicalEvent::Printable(ch) => {
                    search.push_char(ch);
                    if search.current().is_none() {
                        self.beep()?;
                    }
                }
                LogicalEvent::Control(CTRL_R) => {
                    if !search.older() {
                        self.beep()?;
                    }
                }
                LogicalEvent::Control(CTRL_S) => {
                    if !search.newer() {
                        self.beep()?;
                    }
                }
                LogicalEvent::Control(CTRL_H) => {
                    if !search.pop_char() {
                        self.beep()?;
                    }
                }
                LogicalEvent::Control(CTRL_G) => {
                    self.need_refresh = true;
                    return ok!();
                }
                LogicalEvent::Action(ActionTag::WindowChanged) => self.reread_columns()?,
                other => {
                    self.line = shown;
                    self.need_refresh = true;
                    self.redispatch = Some(other);
                    return ok!();
                }
            }
        }
    }

    /// `Tab`: ask the completer for candidates. A single candidate is taken at once.
    /// With more, `Tab` and `Shift+Tab` cycle through them on screen, `Esc` restores
    /// the line, and any other event keeps the candidate shown and is applied to it.
    pub(super) fn tab_complete(&mut self) -> Result<(), LinerError> {
        let Some(completer) = self.completer else {
            return self.beep();
        };

        let completion = completer.complete(&self.line.to_string(), self.line.cursor());
        let count = completion.candidates.len();
        if count == 0 {
            return self.beep();
        }

        let original = self.line.clone();
        let line_with = |index: usize| {
            let head_and_candidate =
                format!("{}{}", completion.head, completion.candidates[index]);
            let cursor = head_and_candidate.chars().count();
            LineBuffer::from_text_with_cursor(
                &format!("{head_and_candidate}{}", completion.tail),
                cursor,
            )
        };

        self.line = line_with(0);
        self.need_refresh = true;
        if count == 1 {
            return ok!();
        }

        let mut index = 0;
        loop {
            self.refresh()?;
            match self.next_event()? {
                LogicalEvent::Control(TAB) => index = (index + 1) % count,
                LogicalEvent::Action(ActionTag::ShiftTab) => {
                    index = (index + count - 1) % count;
                }
                LogicalEvent::Control(ESC) => {
                    self.line = original;
                    self.need_refresh = true;
                    return ok!();
                }
                LogicalEvent::Action(ActionTag::WindowChanged) => self.reread_columns()?,
                other => {
                    self.redispatch = Some(other);
                    return ok!();
                }
            }
            self.line = line_with(index);
        }
    }
}
