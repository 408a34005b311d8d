// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok,
            try_create_file_appender};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber built from `options`. Does nothing if the level filter
/// is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let config: TracingConfig = options.into();

    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    match try_create_layers(config)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => ok!(),
    }
}

/// Like [`try_initialize_logging_global`], but only for the current thread, until the
/// returned guard is dropped. Returns `None` if the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<tracing::dispatcher::DefaultGuard>> {
    let config: TracingConfig = options.into();

    if matches!(config.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    Ok(try_create_layers(config)?.map(|layers| {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(layers))
    }))
}

/// Returns the layers. This does not install them; see
/// [`try_initialize_logging_global`] for that. `None` when the writer config is
/// [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    if writer_config == WriterConfig::None {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Filter for layers that don't carry their own.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = try_create_display_layer(level_filter, writer_config.clone())? {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, writer_config)? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// # Errors
///
/// Never fails today. Returns `Result` to match [`try_create_file_layer`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _) | WriterConfig::Display(display_pref) => {
            match display_pref {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                )),
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// # Errors
///
/// Returns an error if the log file path has no parent directory or file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = try_create_file_appender(&file_path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
