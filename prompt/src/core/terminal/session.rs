// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CsiSequence, OutputDevice, TerminalControl, execute_commands};
use std::{io, sync::Arc};

/// What a [`TerminalSession`] changes about the terminal while it is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Raw mode plus hidden cursor. Used by every prompt that reads keys.
    Raw,
    /// Hidden cursor only. Used by the spinner, which paints but reads nothing.
    HiddenCursor,
}

/// Scoped ownership of the terminal for the duration of a prompt.
///
/// Creating one with [`Self::enter()`] enters raw mode (for [`SessionMode::Raw`]) and
/// hides the cursor. Dropping it shows the cursor and restores the mode, exactly once,
/// also when the stack unwinds from a panic.
///
/// Child prompts don't create their own session, they borrow the parent's, so the
/// terminal is never toggled twice:
///
/// ```no_run
/// use std::sync::Arc;
/// use r3bl_prompt::{OutputDevice, PosixTerminal, SessionMode, TerminalSession};
///
/// # fn main() -> std::io::Result<()> {
/// let session = TerminalSession::enter(
///     Arc::new(PosixTerminal),
///     OutputDevice::new_stdout(),
///     SessionMode::Raw,
/// )?;
/// // ... read keys, paint frames ...
/// session.release()?; // Or just drop it.
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    terminal: Arc<dyn TerminalControl>,
    output_device: OutputDevice,
    mode: SessionMode,
    released: bool,
}

impl TerminalSession {
    /// # Errors
    ///
    /// Returns an error if raw mode can't be entered, or the cursor can't be hidden. In
    /// the second case raw mode has already been restored when this returns.
    pub fn enter(
        terminal: Arc<dyn TerminalControl>,
        output_device: OutputDevice,
        mode: SessionMode,
    ) -> io::Result<Self> {
        if mode == SessionMode::Raw {
            terminal.enter_raw_mode()?;
        }

        // Construct before hiding the cursor, so a failed write still restores the mode
        // when `session` is dropped.
        let session = Self {
            terminal,
            output_device,
            mode,
            released: false,
        };
        execute_commands!(session.output_device, CsiSequence::HideCursor);

        tracing::debug!(message = "terminal session entered", mode = ?session.mode);
        Ok(session)
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode { self.mode }

    /// Restore the terminal now and report failures, instead of waiting for the drop
    /// (which can only log them).
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor can't be shown or the mode can't be restored.
    pub fn release(mut self) -> io::Result<()> { self.restore() }

    fn restore(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        // Attempt both steps even if the first one fails.
        let show_result = show_cursor(&self.output_device);
        let mode_result = match self.mode {
            SessionMode::Raw => self.terminal.restore_mode(),
            SessionMode::HiddenCursor => Ok(()),
        };

        tracing::debug!(message = "terminal session restored", mode = ?self.mode);
        show_result.and(mode_result)
    }
}

fn show_cursor(output_device: &OutputDevice) -> io::Result<()> {
    execute_commands!(output_device, CsiSequence::ShowCursor);
    Ok(())
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::error!(message = "failed to restore terminal", error = ?err);
        }
    }
}
