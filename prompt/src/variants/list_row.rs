// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ELLIPSIS, RenderContext, StyleSheet, display_width, escape_markup,
            truncate_to_width};
use std::ops::Range;

/// One row of a list widget: the highlight pointer (or blank space of the same width),
/// an optional `prefix` (eg: a checkbox), and the `label`, truncated to fit the
/// terminal width.
#[must_use]
pub fn render_list_row(
    context: &RenderContext,
    highlighted: bool,
    prefix: Option<&str>,
    label: &str,
) -> String {
    let sheet = &context.style_sheet;
    let pointer_width = display_width(sheet.highlight_marker);
    let prefix_width = prefix.map_or(0, |it| display_width(it) + 1);
    let label_width = usize::from(context.size.cols)
        .saturating_sub(pointer_width + 1 + prefix_width)
        .max(display_width(ELLIPSIS));
    let label = escape_markup(&truncate_to_width(label, label_width));

    let prefix = prefix.map(|it| format!("{} ", escape_markup(it))).unwrap_or_default();
    if highlighted {
        format!(
            "{} {}",
            StyleSheet::paint(sheet.highlight_color, &escape_markup(sheet.highlight_marker)),
            StyleSheet::paint(sheet.highlight_color, &format!("{prefix}{label}")),
        )
    } else {
        format!("{} {prefix}{label}", " ".repeat(pointer_width))
    }
}

/// A dimmed `↑`/`↓` line when rows are hidden above or below the visible range.
#[must_use]
pub fn render_scroll_indicator(visible: &Range<usize>, total: usize) -> Option<String> {
    let above = visible.start > 0;
    let below = visible.end < total;
    match (above, below) {
        (false, false) => None,
        (true, false) => Some("<dim>↑</>".to_string()),
        (false, true) => Some("<dim>↓</>".to_string()),
        (true, true) => Some("<dim>↑↓</>".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Size, strip_markup};
    use pretty_assertions::assert_eq;

    fn context(cols: u16) -> RenderContext {
        RenderContext {
            style_sheet: StyleSheet::ascii(),
            size: Size { cols, rows: 24 },
        }
    }

    #[test]
    fn test_rows_line_up() {
        let context = context(80);
        assert_eq!(strip_markup(&render_list_row(&context, true, None, "a")), "> a");
        assert_eq!(strip_markup(&render_list_row(&context, false, None, "b")), "  b");
        assert_eq!(
            strip_markup(&render_list_row(&context, false, Some("[x]"), "c")),
            "  [x] c"
        );
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let row = render_list_row(&context(10), false, None, "a very long label");
        assert_eq!(strip_markup(&row), "  a very …");
        assert_eq!(display_width(&row), 10);
    }

    #[test]
    fn test_labels_are_escaped() {
        let row = render_list_row(&context(80), false, None, "<b>");
        assert_eq!(strip_markup(&row), "  <b>");
    }

    #[test]
    fn test_scroll_indicator() {
        assert_eq!(render_scroll_indicator(&(0..3), 3), None);
        assert_eq!(render_scroll_indicator(&(0..3), 5), Some("<dim>↓</>".into()));
        assert_eq!(render_scroll_indicator(&(2..5), 5), Some("<dim>↑</>".into()));
        assert_eq!(render_scroll_indicator(&(1..3), 5), Some("<dim>↑↓</>".into()));
    }
}
