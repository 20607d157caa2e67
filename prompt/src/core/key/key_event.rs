// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A decoded logical key. This is a closed set: bytes that don't map to one of these are
/// ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum KeyEvent {
    /// A printable character, inserted at the cursor by text widgets.
    Char(char),
    Enter,
    Tab,
    ShiftTab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    CtrlA,
    CtrlB,
    CtrlC,
    CtrlD,
    CtrlE,
    CtrlF,
    CtrlH,
    CtrlN,
    CtrlP,
    CtrlU,
}

impl KeyEvent {
    /// Returns the character for [`KeyEvent::Char`], `None` for named keys.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            KeyEvent::Char(ch) => Some(*ch),
            _ => None,
        }
    }

    /// Keys that move a highlight up a list: `Up`, `Left`, vi `k` and `h`, and `Ctrl+P`.
    #[must_use]
    pub fn is_list_previous(&self) -> bool {
        matches!(
            self,
            KeyEvent::Up
                | KeyEvent::Left
                | KeyEvent::CtrlP
                | KeyEvent::Char('k')
                | KeyEvent::Char('h')
        )
    }

    /// Keys that move a highlight down a list: `Down`, `Right`, vi `j` and `l`, and
    /// `Ctrl+N`.
    #[must_use]
    pub fn is_list_next(&self) -> bool {
        matches!(
            self,
            KeyEvent::Down
                | KeyEvent::Right
                | KeyEvent::CtrlN
                | KeyEvent::Char('j')
                | KeyEvent::Char('l')
        )
    }
}
