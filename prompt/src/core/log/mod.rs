// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt in `tracing` setup. The crate itself only emits `tracing` events (more of them
//! when [`crate::DEVELOPMENT_MODE`] is on). Nothing is printed unless the application
//! installs a subscriber, eg: with [`TracingConfig::install_global()`].
//!
//! A prompt owns the terminal while it runs, so log to a file with
//! [`WriterConfig::File`]. Display output would be painted over by the next frame.

// Attach sources.
pub mod log_file;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_file::*;
pub use tracing_config::*;
pub use tracing_init::*;
