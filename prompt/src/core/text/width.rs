// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MarkupToken, escape_markup, parse_markup, strip_markup};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "…";

/// The number of terminal columns `text` occupies once painted. Markup tags and ANSI
/// escape codes take no room. Wide characters (CJK, most emoji) count as 2.
#[must_use]
pub fn display_width(text: &str) -> usize {
    let plain = strip_ansi_escapes::strip_str(strip_markup(text));
    plain.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Shorten plain (markup free) `text` to at most `max_width` columns, ending in `…` when
/// anything was cut. Never splits a grapheme cluster.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width();
    let mut acc = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        used += grapheme_width;
        acc.push_str(grapheme);
    }
    acc.push_str(ELLIPSIS);
    acc
}

/// Shorten a markup line to at most `max_width` painted columns, ending in `…` when
/// anything was cut. Tags and embedded escape codes are all kept (so every style that
/// is opened is also closed), only visible graphemes are dropped.
#[must_use]
pub fn fit_markup_to_width(markup: &str, max_width: usize) -> String {
    if display_width(markup) <= max_width {
        return markup.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut acc = String::with_capacity(markup.len());
    let mut used = 0;
    let mut cut = false;

    for token in parse_markup(markup) {
        match token {
            MarkupToken::Open(tag) => acc.push_str(&tag.to_string()),
            MarkupToken::Close => acc.push_str("</>"),
            MarkupToken::Text(text) => {
                for (is_escape, piece) in split_escape_codes(&text) {
                    if is_escape {
                        acc.push_str(piece);
                        continue;
                    }
                    for grapheme in piece.graphemes(true) {
                        if cut {
                            break;
                        }
                        let grapheme_width = grapheme.width();
                        if used + grapheme_width > budget {
                            cut = true;
                            if max_width > 0 {
                                acc.push_str(ELLIPSIS);
                            }
                            break;
                        }
                        used += grapheme_width;
                        acc.push_str(&escape_markup(grapheme));
                    }
                }
            }
        }
    }
    acc
}

/// Split text into runs of plain text and CSI escape codes (`ESC [ ... final`), flagging
/// the escape codes.
fn split_escape_codes(text: &str) -> Vec<(bool, &str)> {
    let mut acc = vec![];
    let mut rest = text;
    while let Some(start) = rest.find("\x1b[") {
        if start > 0 {
            acc.push((false, &rest[..start]));
        }
        let after = &rest[start + 2..];
        let end = after
            .bytes()
            .position(|byte| (0x40..=0x7E).contains(&byte))
            .map_or(rest.len(), |final_index| start + 2 + final_index + 1);
        acc.push((true, &rest[start..end]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        acc.push((false, rest));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hello", 5 ; "ascii")]
    #[test_case("<fg=red>hi</>", 2 ; "markup takes no room")]
    #[test_case("\x1b[7m \x1b[27m", 1 ; "escape codes take no room")]
    #[test_case("日本", 4 ; "wide chars")]
    #[test_case("e\u{301}", 1 ; "combining mark")]
    fn test_display_width(text: &str, expected: usize) {
        assert_eq!(display_width(text), expected);
    }

    #[test]
    fn test_fit_markup_keeps_tags_and_escapes() {
        let markup = "<b>hello</> \x1b[7mworld\x1b[27m";
        assert_eq!(fit_markup_to_width(markup, 20), markup);

        let fitted = fit_markup_to_width(markup, 8);
        assert_eq!(fitted, "<b>hello</> \x1b[7mw…\x1b[27m");
        assert_eq!(display_width(&fitted), 8);
    }

    #[test]
    fn test_fit_markup_escapes_user_text_again() {
        let markup = format!("<dim>{}</>", escape_markup("a<b>c\\d and more"));
        let fitted = fit_markup_to_width(&markup, 6);
        assert_eq!(strip_markup(&fitted), "a<b>c…");
    }

    #[test]
    fn test_fit_markup_wide_chars() {
        let fitted = fit_markup_to_width("日本語です", 5);
        assert_eq!(fitted, "日本…");
        assert!(display_width(&fitted) <= 5);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello world", 20), "hello world");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
