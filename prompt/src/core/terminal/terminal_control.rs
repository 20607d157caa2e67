// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_COLS, DEFAULT_ROWS};
use std::{fmt::Debug, io};

/// Terminal dimensions, in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// The boundary between the prompt engine and the terminal device.
///
/// Raw mode is not reference counted here. A prompt that runs inside another prompt
/// (a child prompt) never calls [`Self::enter_raw_mode()`] itself, it borrows its
/// parent's [`crate::TerminalSession`] instead.
pub trait TerminalControl: Send + Sync + Debug {
    /// Returns the terminal size, or a default of 80x24 if it can't be determined.
    fn size(&self) -> Size;

    /// `true` only when a human can answer a prompt: stdin is a terminal, and the
    /// process is not running in CI.
    fn is_interactive(&self) -> bool;

    /// `true` when stdout is a terminal. Output that only animates (and reads no keys)
    /// is skipped when it is piped, so escape codes never end up in a file.
    fn is_output_terminal(&self) -> bool;

    /// Disable canonical input, echo, and signal generating keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be read or written.
    fn enter_raw_mode(&self) -> io::Result<()>;

    /// Restore the mode that was in effect before [`Self::enter_raw_mode()`]. This is a
    /// no-op if raw mode was never entered.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be written.
    fn restore_mode(&self) -> io::Result<()>;
}
