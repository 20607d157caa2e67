// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty winsize tcgetwinsize tcgetattr tcsetattr IEXTEN VMIN VTIME

//! Unix/Linux/macOS implementation of [`TerminalControl`] using rustix's safe termios
//! API.

use crate::{Size, TerminalControl};
use rustix::termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios};
use std::{io,
          sync::{LazyLock, Mutex, PoisonError}};

/// Stores the original terminal settings to restore later. There is only one
/// controlling terminal per process, so this is global, not per [`PosixTerminal`].
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

fn poisoned_lock_error<T>(_: PoisonError<T>) -> io::Error {
    io::Error::other("terminal settings lock poisoned")
}

/// The real terminal. Stateless, the saved termios lives in a process wide static.
///
/// Raw mode is set on stdin. A prompt only enters raw mode once
/// [`TerminalControl::is_interactive()`] has checked that stdin is a tty, otherwise
/// `tcgetattr` fails with `ENOTTY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixTerminal;

impl PosixTerminal {
    /// Applies the raw mode flags to a copy of the original settings.
    ///
    /// Unlike `cfmakeraw`, output post processing (`OPOST`) is left alone, so that a
    /// `\n` in a frame still returns the cursor to column 1.
    fn make_raw(termios: &mut Termios) {
        termios.local_modes -= LocalModes::ICANON
            | LocalModes::ECHO
            | LocalModes::ISIG
            | LocalModes::IEXTEN;
        termios.special_codes[SpecialCodeIndex::VMIN] = 1;
        termios.special_codes[SpecialCodeIndex::VTIME] = 0;
    }
}

impl TerminalControl for PosixTerminal {
    fn size(&self) -> Size {
        match termios::tcgetwinsize(io::stdout()) {
            Ok(winsize) if winsize.ws_col > 0 && winsize.ws_row > 0 => Size {
                cols: winsize.ws_col,
                rows: winsize.ws_row,
            },
            _ => Size::default(),
        }
    }

    fn is_interactive(&self) -> bool { termios::isatty(io::stdin()) && !is_ci::uncached() }

    fn is_output_terminal(&self) -> bool { termios::isatty(io::stdout()) }

    fn enter_raw_mode(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut termios = termios::tcgetattr(&stdin)?;

        {
            let mut original = ORIGINAL_TERMIOS.lock().map_err(poisoned_lock_error)?;
            if original.is_none() {
                *original = Some(termios.clone());
            }
        }

        Self::make_raw(&mut termios);
        termios::tcsetattr(&stdin, OptionalActions::Now, &termios)?;

        Ok(())
    }

    fn restore_mode(&self) -> io::Result<()> {
        let mut original = ORIGINAL_TERMIOS.lock().map_err(poisoned_lock_error)?;
        if let Some(termios) = original.take() {
            termios::tcsetattr(io::stdin(), OptionalActions::Now, &termios)?;
        }
        Ok(())
    }
}
