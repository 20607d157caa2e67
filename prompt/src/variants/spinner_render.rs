// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BLOCK_DOTS, BRAILLE_DOTS, MarkupColor, StyleSheet, escape_markup,
            truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerTemplate {
    #[default]
    Braille,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerStyle {
    pub template: SpinnerTemplate,
    pub color: MarkupColor,
}

impl Default for SpinnerStyle {
    fn default() -> Self {
        SpinnerStyle {
            template: SpinnerTemplate::Braille,
            color: MarkupColor::Cyan,
        }
    }
}

/// Markup for one animation frame: the glyph for `count`, then the message, truncated to
/// fit `display_width`.
#[must_use]
pub fn render_tick(style: &SpinnerStyle, message: &str, count: usize, display_width: u16) -> String {
    let glyph = get_next_tick_glyph(style, count);
    // 1 for the glyph, 1 for the space, 1 empty for the last display col.
    let text = truncate_to_width(message, usize::from(display_width).saturating_sub(3));
    format!(
        "{} {}",
        StyleSheet::paint(style.color, glyph),
        escape_markup(&text)
    )
}

#[must_use]
pub fn get_next_tick_glyph(style: &SpinnerStyle, count: usize) -> &'static str {
    match style.template {
        SpinnerTemplate::Braille => BRAILLE_DOTS[count % BRAILLE_DOTS.len()],
        SpinnerTemplate::Block => BLOCK_DOTS[count % BLOCK_DOTS.len()],
    }
}
