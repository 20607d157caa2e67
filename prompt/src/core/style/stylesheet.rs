// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::MarkupColor;

/// The colors and glyphs every frame is built from. Pass one to
/// [`crate::PromptIo::style_sheet`] to restyle all prompts at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    /// Marker in front of the label while a prompt is waiting for input.
    pub active_marker: &'static str,
    pub active_color: MarkupColor,
    /// Marker in front of the label once the prompt is answered.
    pub submit_marker: &'static str,
    pub submit_color: MarkupColor,
    /// Marker in front of the label once the prompt is cancelled or reverted.
    pub cancel_marker: &'static str,
    pub cancel_color: MarkupColor,
    pub error_color: MarkupColor,
    pub hint_color: MarkupColor,
    /// Pointer and color of the highlighted row in list prompts.
    pub highlight_marker: &'static str,
    pub highlight_color: MarkupColor,
    pub checked_marker: &'static str,
    pub unchecked_marker: &'static str,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            active_marker: "?",
            active_color: MarkupColor::Cyan,
            submit_marker: "✔",
            submit_color: MarkupColor::Green,
            cancel_marker: "✘",
            cancel_color: MarkupColor::Red,
            error_color: MarkupColor::Red,
            hint_color: MarkupColor::Gray,
            highlight_marker: "›",
            highlight_color: MarkupColor::Cyan,
            checked_marker: "◉",
            unchecked_marker: "◯",
        }
    }
}

impl StyleSheet {
    /// For terminals and fonts without the glyphs used by [`StyleSheet::default()`].
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            active_marker: "?",
            active_color: MarkupColor::Blue,
            submit_marker: "+",
            submit_color: MarkupColor::Green,
            cancel_marker: "x",
            cancel_color: MarkupColor::Yellow,
            error_color: MarkupColor::Red,
            hint_color: MarkupColor::Gray,
            highlight_marker: ">",
            highlight_color: MarkupColor::Blue,
            checked_marker: "[x]",
            unchecked_marker: "[ ]",
        }
    }

    /// `text` (already escaped) wrapped in a foreground color tag.
    #[must_use]
    pub fn paint(color: MarkupColor, text: &str) -> String { format!("<fg={color}>{text}</>") }
}
