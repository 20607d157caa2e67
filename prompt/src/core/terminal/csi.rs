// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Display};

pub const CSI_START: &str = "\x1b[";

/// The closed set of control sequences the engine writes directly. Everything else
/// (colors, weight) goes through the markup formatter, see [`crate::format_markup()`].
///
/// This implements [`crossterm::Command`] so it can be queued on any writer with
/// [`crossterm::QueueableCommand::queue()`], just like crossterm's own commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(u16),
    /// Cursor Down (CUD) - ESC [ n B
    CursorDown(u16),
    /// Cursor Forward (CUF) - ESC [ n C
    CursorForward(u16),
    /// Cursor Backward (CUB) - ESC [ n D
    CursorBackward(u16),
    /// Cursor Position (CUP) - ESC [ row ; col H. Both are 1 based.
    CursorPosition { row: u16, col: u16 },
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G. Columns are 1 based.
    CursorHorizontalAbsolute(u16),
    /// Erase Display (ED) 0 - ESC [ 0 J
    EraseToEndOfScreen,
    /// DECTCEM - ESC [ ? 25 h
    ShowCursor,
    /// DECTCEM - ESC [ ? 25 l
    HideCursor,
    /// SGR 7 - ESC [ 7 m
    InverseOn,
    /// SGR 27 - ESC [ 27 m
    InverseOff,
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsiSequence::CursorUp(n) => write!(f, "{CSI_START}{n}A"),
            CsiSequence::CursorDown(n) => write!(f, "{CSI_START}{n}B"),
            CsiSequence::CursorForward(n) => write!(f, "{CSI_START}{n}C"),
            CsiSequence::CursorBackward(n) => write!(f, "{CSI_START}{n}D"),
            CsiSequence::CursorPosition { row, col } => write!(f, "{CSI_START}{row};{col}H"),
            CsiSequence::CursorHorizontalAbsolute(col) => write!(f, "{CSI_START}{col}G"),
            CsiSequence::EraseToEndOfScreen => write!(f, "{CSI_START}0J"),
            CsiSequence::ShowCursor => write!(f, "{CSI_START}?25h"),
            CsiSequence::HideCursor => write!(f, "{CSI_START}?25l"),
            CsiSequence::InverseOn => write!(f, "{CSI_START}7m"),
            CsiSequence::InverseOff => write!(f, "{CSI_START}27m"),
        }
    }
}

impl crossterm::Command for CsiSequence {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result { write!(f, "{self}") }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> { Ok(()) }
}
