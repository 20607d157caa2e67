// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "r3bl_prompt_log.log";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `log_file_path`: [`String`] is the file path to use for the log
///   file. Eg: `/tmp/my_app.log` or `my_app.log`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log_file_path */),
    DisplayAndFile(
        DisplayPreference,
        String, /* log_file_path */
    ),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Debug level, written to [`DEFAULT_LOG_FILE_NAME`] in the current folder.
    fn default() -> Self { Self::new_file(None) }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
