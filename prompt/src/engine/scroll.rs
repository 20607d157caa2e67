// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

/// Tracks which slice of a list is visible, and which row is highlighted.
///
/// Invariant: when `highlighted` is `Some(i)`, then
/// `first_visible <= i < first_visible + window_size`.
///
/// A list that is not `required` can have nothing highlighted. Moving past either end
/// then stops on `None` once, before wrapping around into the list again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    pub highlighted: Option<usize>,
    pub first_visible: usize,
    pub window_size: usize,
    pub required: bool,
}

impl ScrollWindow {
    /// A `window_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(window_size: usize, required: bool) -> Self {
        Self {
            highlighted: None,
            first_visible: 0,
            window_size: window_size.max(1),
            required,
        }
    }

    /// Highlight `index` and scroll the least amount needed to keep it visible.
    pub fn highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
        let Some(index) = index else {
            return;
        };
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + self.window_size {
            self.first_visible = index + 1 - self.window_size;
        }
    }

    pub fn highlight_next(&mut self, total: usize) {
        if total == 0 {
            self.highlight(None);
            return;
        }
        let next = match self.highlighted {
            None => Some(0),
            Some(index) if index + 1 >= total => {
                if self.required {
                    Some(0)
                } else {
                    None
                }
            }
            Some(index) => Some(index + 1),
        };
        self.highlight(next);
    }

    pub fn highlight_previous(&mut self, total: usize) {
        if total == 0 {
            self.highlight(None);
            return;
        }
        let previous = match self.highlighted {
            None => Some(total - 1),
            Some(0) => {
                if self.required {
                    Some(total - 1)
                } else {
                    None
                }
            }
            Some(index) => Some(index.min(total) - 1),
        };
        self.highlight(previous);
    }

    pub fn highlight_first(&mut self, total: usize) {
        self.highlight((total > 0).then_some(0));
    }

    pub fn highlight_last(&mut self, total: usize) {
        self.highlight(total.checked_sub(1));
    }

    /// Cap the window so the list, plus `reserved_lines` of chrome around it, fits in
    /// `terminal_rows`. The window never shrinks below one row.
    pub fn reduce_to_terminal(&mut self, terminal_rows: u16, reserved_lines: usize) {
        let available = usize::from(terminal_rows).saturating_sub(reserved_lines);
        self.window_size = self.window_size.min(available).max(1);
        if let Some(index) = self.highlighted {
            self.highlight(Some(index));
        }
    }

    /// Scroll so the highlighted row is in the middle of the window, as far as the list
    /// allows. Use this after jumping far, eg: to a default value.
    pub fn center(&mut self, total: usize) {
        let Some(index) = self.highlighted else {
            return;
        };
        let max_first_visible = total.saturating_sub(self.window_size);
        self.first_visible = index.saturating_sub(self.window_size / 2).min(max_first_visible);
    }

    /// Indices of the rows to paint.
    #[must_use]
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.first_visible.min(total);
        let end = (self.first_visible + self.window_size).min(total);
        start..end
    }

    /// Nothing highlighted, scrolled to the top. Used when the list is replaced.
    pub fn reset(&mut self) {
        self.highlighted = None;
        self.first_visible = 0;
    }
}
