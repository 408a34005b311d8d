// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KILL_RING_MAX, ShouldRestart, restart_on_interrupted};

/// Columns that must remain after the prompt for the editor to be usable.
pub const MIN_WORKING_SPACE: usize = 10;

/// Behavior switches for a [`crate::Liner`]. Build one with [`Default`] and the
/// `with_*` setters:
///
/// ```
/// use r3bl_liner::LinerConfig;
///
/// let config = LinerConfig::default()
///     .with_ctrl_c_aborts(true)
///     .with_multi_line(true);
/// assert!(config.beep_enabled);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinerConfig {
    /// `Ctrl+C` ends the prompt with [`crate::LinerError::Aborted`] instead of
    /// clearing the line.
    pub ctrl_c_aborts: bool,
    /// Ring the bell on no-op edits.
    pub beep_enabled: bool,
    /// Wrap long lines onto more rows instead of scrolling horizontally.
    pub multi_line: bool,
    pub kill_ring_max: usize,
    pub min_working_space: usize,
    /// Decides whether a failed read is retried.
    pub should_restart: ShouldRestart,
}

impl Default for LinerConfig {
    fn default() -> Self {
        Self {
            ctrl_c_aborts: false,
            beep_enabled: true,
            multi_line: false,
            kill_ring_max: KILL_RING_MAX,
            min_working_space: MIN_WORKING_SPACE,
            should_restart: restart_on_interrupted,
        }
    }
}

impl LinerConfig {
    #[must_use]
    pub fn with_ctrl_c_aborts(mut self, ctrl_c_aborts: bool) -> Self {
        self.ctrl_c_aborts = ctrl_c_aborts;
        self
    }

    #[must_use]
    pub fn with_beep_enabled(mut self, beep_enabled: bool) -> Self {
        self.beep_enabled = beep_enabled;
        self
    }

    #[must_use]
    pub fn with_multi_line(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }

    #[must_use]
    pub fn with_kill_ring_max(mut self, kill_ring_max: usize) -> Self {
        self.kill_ring_max = kill_ring_max;
        self
    }

    #[must_use]
    pub fn with_min_working_space(mut self, min_working_space: usize) -> Self {
        self.min_working_space = min_working_space;
        self
    }

    #[must_use]
    pub fn with_should_restart(mut self, should_restart: ShouldRestart) -> Self {
        self.should_restart = should_restart;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputError;

    #[test]
    fn test_defaults() {
        let config = LinerConfig::default();
        assert!(!config.ctrl_c_aborts);
        assert!(config.beep_enabled);
        assert!(!config.multi_line);
        assert_eq!(config.kill_ring_max, 60);
        assert_eq!(config.min_working_space, 10);
        assert!((config.should_restart)(&InputError::IO(std::io::Error::from(
            std::io::ErrorKind::Interrupted
        ))));
    }

    #[test]
    fn test_setters_chain() {
        let config = LinerConfig::default()
            .with_beep_enabled(false)
            .with_kill_ring_max(3)
            .with_should_restart(|_| false);
        assert!(!config.beep_enabled);
        assert_eq!(config.kill_ring_max, 3);
        assert!(!(config.should_restart)(&InputError::IO(std::io::Error::from(
            std::io::ErrorKind::Interrupted
        ))));
    }
}
