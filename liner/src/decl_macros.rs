// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Syntactic sugar for `Ok(())` or `Ok($value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Ring the bell unless beeping is turned off, propagating any I/O error.
///
/// ```ignore
/// ring_bell!(self.config, self.output)?;
/// ```
#[macro_export]
macro_rules! ring_bell {
    ($config:expr, $output:expr) => {{
        if $config.beep_enabled {
            $output.ring()
        } else {
            Ok(())
        }
    }};
}
