// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::Path;
use tracing_appender::rolling::{self, RollingFileAppender};

/// Appends to the log file at `path` and never rotates it. A bare file name goes in the
/// current folder, and missing parent folders are created.
///
/// Don't wrap the result in `tracing_appender::non_blocking()`: its worker thread is
/// not flushed if the process exits from inside a prompt.
///
/// # Errors
///
/// Returns an error if `path` has no file name, or the parent folder can't be created.
pub fn try_create_log_file_appender(path: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path);

    let Some(file_name) = path.file_name() else {
        miette::bail!("Log file path {} has no file name.", path.display());
    };

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(folder).into_diagnostic()?;

    Ok(rolling::never(folder, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parent_folder() {
        let folder = std::env::temp_dir()
            .join(format!("r3bl_prompt_log_file_{}", std::process::id()))
            .join("nested");
        let path = folder.join("prompt.log");
        try_create_log_file_appender(path.to_str().unwrap()).unwrap();
        assert!(folder.is_dir());
    }

    #[test]
    fn test_path_without_file_name_is_an_error() {
        assert!(try_create_log_file_appender("/").is_err());
        assert!(try_create_log_file_appender("logs/..").is_err());
    }
}
