// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, WriterConfig, try_create_log_file_appender};
use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_names(true)
    };
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, or use [`TracingConfig::install_global()`] or
/// [`TracingConfig::install_thread_local()`] which do it for you.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if matches!(tracing_config.get_writer_config(), WriterConfig::None) {
        return Ok(return_it);
    }

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers which don't have a level filter.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    ) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
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
        },
        _ => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = try_create_log_file_appender(
                log_file_path.as_str(),
            )?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        _ => None,
    })
}

impl TracingConfig {
    /// Global subscriber, for the whole process. This can only be done once.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(&self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Thread local subscriber, active until the returned guard is dropped. This is
    /// great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(&self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// Logging is **DISABLED** by **default**. Call this once from `main()`, before showing
/// any prompt, to turn it on. [`LevelFilter::OFF`] is a no-op.
///
/// # Errors
///
/// See [`TracingConfig::install_global()`].
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }
    it.install_global()
}

impl From<LevelFilter> for TracingConfig {
    /// Log file in the current folder, at the given level.
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn temp_log_file_path(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("r3bl_prompt_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stderr),
            );
        assert!(layer.is_some());
    }

    #[test]
    fn test_writer_config_none_creates_no_layers() {
        let tracing_config = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
        };
        assert!(try_create_layers(&tracing_config).unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_try_create_both_layers() {
        let file_path = temp_log_file_path("both.log");
        let tracing_config = TracingConfig::new_file_and_display(
            Some(file_path),
            DisplayPreference::Stderr,
        );
        let layers = try_create_layers(&tracing_config).unwrap();
        assert_eq!(layers.len(), 3);
    }

    #[test]
    #[serial]
    fn test_install_thread_local_writes_to_file() {
        let file_path = temp_log_file_path("thread_local.log");
        let guard = TracingConfig::new_file(Some(file_path.clone()))
            .install_thread_local()
            .unwrap();

        tracing::info!(message = "hello from a test");
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("hello from a test"));
    }
}
