// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::session_state::PromptSession;
use crate::{LinerError, MultiLineRedraw, Output, RedrawPlan, glyphs_width, ok, str_width};

impl PromptSession<'_, '_> {
    /// Repaint prompt and line.
    pub(super) fn refresh(&mut self) -> Result<(), LinerError> {
        self.need_refresh = false;
        let Self {
            devices,
            line,
            multi_line,
            columns,
            prompt,
            ..
        } = self;
        render_line(
            devices.output,
            multi_line.as_mut(),
            prompt,
            line.as_chars(),
            line.cursor(),
            *columns,
        )?;
        devices.output.flush()?;
        ok!()
    }

    /// Repaint with a different prompt and text than the session's own, as reverse
    /// search does.
    pub(super) fn draw(
        &mut self,
        prompt: &str,
        buffer: &[char],
        cursor: usize,
    ) -> Result<(), LinerError> {
        render_line(
            self.devices.output,
            self.multi_line.as_mut(),
            prompt,
            buffer,
            cursor,
            self.columns,
        )?;
        self.devices.output.flush()?;
        ok!()
    }

    /// Typing at the end of a short line only needs the new glyph written, not a full
    /// redraw.
    pub(super) fn can_fast_echo(&self) -> bool {
        self.line.is_cursor_at_end()
            && self.multi_line.is_none()
            && !self.need_refresh
            && str_width(self.prompt) + glyphs_width(self.line.as_chars()) + 1 < self.columns
    }

    /// Leave the line on screen and put the cursor below it.
    pub(super) fn finish_line(&mut self) -> Result<(), LinerError> {
        if let Some(redraw) = self.multi_line.as_mut() {
            redraw.finish(self.devices.output)?;
        }
        self.devices.output.new_line()?;
        self.devices.output.flush()?;
        ok!()
    }
}

fn render_line(
    output: &mut dyn Output,
    multi_line: Option<&mut MultiLineRedraw>,
    prompt: &str,
    buffer: &[char],
    cursor: usize,
    columns: usize,
) -> Result<(), LinerError> {
    match multi_line {
        Some(redraw) => redraw.redraw(output, prompt, buffer, cursor, columns),
        None => {
            RedrawPlan::compute(prompt, buffer, cursor, columns)?.emit(prompt, output)?;
            ok!()
        }
    }
}
