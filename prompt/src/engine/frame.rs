// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PromptState, Size, StyleSheet, fit_markup_to_width};

/// The full markup a prompt paints for one state. The [`crate::DiffPaintView`] keeps the
/// last one it painted, to erase it before painting the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub state: PromptState,
}

impl Frame {
    /// Number of `\n` separated segments. A trailing `\n` adds an empty last segment,
    /// which is the line the cursor is left on.
    #[must_use]
    pub fn height(&self) -> usize { self.text.split('\n').count() }

    /// The last `rows` segments, or all of them if there are fewer.
    #[must_use]
    pub fn last_lines(&self, rows: usize) -> &str {
        let skip = self.height().saturating_sub(rows);
        if skip == 0 {
            return &self.text;
        }
        self.text
            .match_indices('\n')
            .nth(skip - 1)
            .map_or(self.text.as_str(), |(index, _)| &self.text[index + 1..])
    }
}

/// What a widget needs to know to build a frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub style_sheet: StyleSheet,
    pub size: Size,
}

/// Accumulates markup lines into a [`Frame`].
///
/// A line that is wider than the terminal would wrap onto more rows than the
/// [`Frame::height()`] the view moves back up over, so lines are cut to
/// [`Self::with_max_width()`] as they are pushed.
#[derive(Debug, Clone, Default)]
pub struct FrameBuilder {
    lines: Vec<String>,
    max_width: Option<usize>,
}

impl FrameBuilder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_max_width(cols: u16) -> Self {
        Self {
            lines: vec![],
            max_width: Some(usize::from(cols)),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        let line = line.into();
        let line = match self.max_width {
            Some(max_width) => fit_markup_to_width(&line, max_width),
            None => line,
        };
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Only a [`PromptState::Submit`] or [`PromptState::Cancel`] frame ends with a blank
    /// line, which leaves the cursor below the finished prompt.
    #[must_use]
    pub fn build(self, state: PromptState) -> Frame {
        let mut text = self.lines.join("\n");
        if state.is_terminal() {
            text.push('\n');
        }
        Frame { text, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(lines: &[&str], state: PromptState) -> Frame {
        let mut builder = FrameBuilder::new();
        for line in lines {
            builder.push_line(*line);
        }
        builder.build(state)
    }

    #[test]
    fn test_lines_are_cut_to_max_width() {
        let mut builder = FrameBuilder::with_max_width(6);
        builder.push_line("<b>short</>").push_line("<dim>much too long</>");
        let frame = builder.build(PromptState::Active);
        assert_eq!(frame.text, "<b>short</>\n<dim>much …</>");
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn test_trailing_blank_line_only_when_terminal() {
        assert_eq!(frame(&["a", "b"], PromptState::Active).text, "a\nb");
        assert_eq!(frame(&["a", "b"], PromptState::Error).text, "a\nb");
        assert_eq!(frame(&["a", "b"], PromptState::Submit).text, "a\nb\n");
        assert_eq!(frame(&["a", "b"], PromptState::Cancel).text, "a\nb\n");
    }

    #[test]
    fn test_height() {
        assert_eq!(frame(&["a"], PromptState::Active).height(), 1);
        assert_eq!(frame(&["a", "b"], PromptState::Active).height(), 2);
        assert_eq!(frame(&["a", "b"], PromptState::Submit).height(), 3);
    }

    #[test]
    fn test_last_lines() {
        let it = frame(&["1", "2", "3", "4"], PromptState::Active);
        assert_eq!(it.last_lines(10), "1\n2\n3\n4");
        assert_eq!(it.last_lines(4), "1\n2\n3\n4");
        assert_eq!(it.last_lines(2), "3\n4");
        assert_eq!(it.last_lines(1), "4");
    }
}
