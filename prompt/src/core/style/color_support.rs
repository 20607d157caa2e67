// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Whether markup tags turn into ANSI colors and attributes, or are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSupport {
    #[default]
    Ansi,
    /// Markup tags are stripped. Cursor movement and the inverse video text cursor are
    /// still emitted, they are not colors.
    NoColor,
}

impl ColorSupport {
    /// Honors the `NO_COLOR` convention, <https://no-color.org/>: when it is set to a
    /// non empty value, no colors are emitted.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_no_color_env(std::env::var_os("NO_COLOR").as_deref())
    }

    fn from_no_color_env(value: Option<&std::ffi::OsStr>) -> Self {
        match value {
            Some(value) if !value.is_empty() => ColorSupport::NoColor,
            _ => ColorSupport::Ansi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_no_color_env() {
        assert_eq!(ColorSupport::from_no_color_env(None), ColorSupport::Ansi);
        assert_eq!(
            ColorSupport::from_no_color_env(Some(OsStr::new(""))),
            ColorSupport::Ansi
        );
        assert_eq!(
            ColorSupport::from_no_color_env(Some(OsStr::new("1"))),
            ColorSupport::NoColor
        );
    }
}
