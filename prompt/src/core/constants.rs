// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Turn this on to get verbose `tracing::debug!` output from the engine and the widgets.
/// Make sure logging goes to a file (see [`crate::TracingConfig`]) since the terminal is
/// busy showing the prompt.
pub const DEVELOPMENT_MODE: bool = false;

/// Number of list rows shown at once by list widgets, unless overridden.
pub const DEFAULT_SCROLL: usize = 5;

/// Size of the buffer used for a single read from stdin. Pasted text arrives in several
/// reads, which can end in the middle of a key; see [`crate::split_complete_keys()`].
pub const READ_BUFFER_SIZE: usize = 32;

/// How long to wait for the rest of a key that a read cut off, before decoding what
/// arrived on its own (eg: a lone `ESC` is the Escape key).
pub const ESCAPE_TIMEOUT: Duration = Duration::from_millis(50);

pub const DEFAULT_CANCEL_MESSAGE: &str = "Cancelled.";
pub const REVERTED_MESSAGE: &str = "Reverted.";
pub const CANNOT_REVERT_MESSAGE: &str = "This cannot be reverted.";
pub const REQUIRED_MESSAGE: &str = "Required.";
pub const SEARCHING_MESSAGE: &str = "Searching…";
pub const DELETING_MESSAGE: &str = "Deleting…";

/// Lines a list widget needs besides its rows: the label, the scroll indicator, the
/// footer, and the line the cursor rests on.
pub const LIST_CHROME_LINES: usize = 4;

/// Used when the terminal size can't be queried.
pub const DEFAULT_COLS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

pub const DELAY_MS: u64 = 85;
/// Tick interval for [`crate::Spinner`] and [`crate::WaitPrompt`].
pub const DELAY_UNIT: Duration = Duration::from_millis(DELAY_MS);

/// More info: <https://www.unicode.org/charts/script/chart_Braille.html>
pub const BRAILLE_DOTS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const BLOCK_DOTS: [&str; 8] = ["█", "▓", "▒", "░", "░", "▒", "▓", "█"];
