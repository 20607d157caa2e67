// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ColorSupport;
use crossterm::{Command,
                style::{Attribute, Color, SetAttribute, SetBackgroundColor,
                        SetForegroundColor}};
use std::str::FromStr;

/// The colors a markup tag can name, eg: `<fg=cyan>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MarkupColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl From<MarkupColor> for Color {
    fn from(color: MarkupColor) -> Self {
        match color {
            MarkupColor::Black => Color::Black,
            MarkupColor::Red => Color::DarkRed,
            MarkupColor::Green => Color::DarkGreen,
            MarkupColor::Yellow => Color::DarkYellow,
            MarkupColor::Blue => Color::DarkBlue,
            MarkupColor::Magenta => Color::DarkMagenta,
            MarkupColor::Cyan => Color::DarkCyan,
            MarkupColor::White => Color::White,
            MarkupColor::Gray => Color::DarkGrey,
        }
    }
}

/// One opening tag. Tags nest, and `</>` closes the innermost open one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupTag {
    Fg(MarkupColor),
    Bg(MarkupColor),
    Bold,
    Dim,
    Italic,
    Underline,
    Strike,
}

impl FromStr for MarkupTag {
    type Err = strum::ParseError;

    /// Parses the inside of a tag, ie: `fg=red` for `<fg=red>`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "b" => Ok(MarkupTag::Bold),
            "dim" => Ok(MarkupTag::Dim),
            "i" => Ok(MarkupTag::Italic),
            "u" => Ok(MarkupTag::Underline),
            "strike" => Ok(MarkupTag::Strike),
            _ => match tag.split_once('=') {
                Some(("fg", color)) => Ok(MarkupTag::Fg(MarkupColor::from_str(color)?)),
                Some(("bg", color)) => Ok(MarkupTag::Bg(MarkupColor::from_str(color)?)),
                _ => Err(strum::ParseError::VariantNotFound),
            },
        }
    }
}

impl std::fmt::Display for MarkupTag {
    /// The tag as markup, eg: `<fg=red>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupTag::Fg(color) => write!(f, "<fg={color}>"),
            MarkupTag::Bg(color) => write!(f, "<bg={color}>"),
            MarkupTag::Bold => write!(f, "<b>"),
            MarkupTag::Dim => write!(f, "<dim>"),
            MarkupTag::Italic => write!(f, "<i>"),
            MarkupTag::Underline => write!(f, "<u>"),
            MarkupTag::Strike => write!(f, "<strike>"),
        }
    }
}

impl MarkupTag {
    fn write_ansi(self, acc: &mut String) {
        // Writing to a String never fails.
        let _unused = match self {
            MarkupTag::Fg(color) => SetForegroundColor(color.into()).write_ansi(acc),
            MarkupTag::Bg(color) => SetBackgroundColor(color.into()).write_ansi(acc),
            MarkupTag::Bold => SetAttribute(Attribute::Bold).write_ansi(acc),
            MarkupTag::Dim => SetAttribute(Attribute::Dim).write_ansi(acc),
            MarkupTag::Italic => SetAttribute(Attribute::Italic).write_ansi(acc),
            MarkupTag::Underline => SetAttribute(Attribute::Underlined).write_ansi(acc),
            MarkupTag::Strike => SetAttribute(Attribute::CrossedOut).write_ansi(acc),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken {
    Text(String),
    Open(MarkupTag),
    Close,
}

/// Tokenize markup. Anything that looks like a tag but isn't a known one stays text, so
/// `a < b` and `<html>` pass through unchanged. `\<` is a literal `<` and `\\` a literal
/// `\`.
#[must_use]
pub fn parse_markup(input: &str) -> Vec<MarkupToken> {
    let mut tokens = vec![];
    let mut text = String::new();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch == '\\' {
            if let Some(escaped @ ('<' | '\\')) = rest[1..].chars().next() {
                text.push(escaped);
                rest = &rest[2..];
                continue;
            }
        }

        if ch == '<' {
            if let Some(end) = rest.find('>') {
                let inner = &rest[1..end];
                let maybe_token = if inner == "/" {
                    Some(MarkupToken::Close)
                } else {
                    MarkupTag::from_str(inner).ok().map(MarkupToken::Open)
                };
                if let Some(token) = maybe_token {
                    if !text.is_empty() {
                        tokens.push(MarkupToken::Text(std::mem::take(&mut text)));
                    }
                    tokens.push(token);
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }

        text.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    if !text.is_empty() {
        tokens.push(MarkupToken::Text(text));
    }
    tokens
}

/// Make user supplied text safe to embed in markup.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    text.replace('\\', "\\\\").replace('<', "\\<")
}

/// Remove all markup tags, resolving escapes.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    parse_markup(input)
        .into_iter()
        .filter_map(|token| match token {
            MarkupToken::Text(text) => Some(text),
            _ => None,
        })
        .collect()
}

/// Translate markup into ANSI SGR escape codes. Closing a tag resets all attributes and
/// re-applies the ones still open. With [`ColorSupport::NoColor`] this is
/// [`strip_markup()`].
#[must_use]
pub fn format_markup(input: &str, color_support: ColorSupport) -> String {
    if color_support == ColorSupport::NoColor {
        return strip_markup(input);
    }

    let mut acc = String::with_capacity(input.len());
    let mut stack: Vec<MarkupTag> = vec![];

    for token in parse_markup(input) {
        match token {
            MarkupToken::Text(text) => acc.push_str(&text),
            MarkupToken::Open(tag) => {
                tag.write_ansi(&mut acc);
                stack.push(tag);
            }
            MarkupToken::Close => {
                if stack.pop().is_some() {
                    write_reset(&mut acc);
                    for tag in &stack {
                        tag.write_ansi(&mut acc);
                    }
                }
            }
        }
    }

    if !stack.is_empty() {
        write_reset(&mut acc);
    }
    acc
}

fn write_reset(acc: &mut String) {
    let _unused = SetAttribute(Attribute::Reset).write_ansi(acc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_markup("<fg=red>err</> ok"),
            vec![
                MarkupToken::Open(MarkupTag::Fg(MarkupColor::Red)),
                MarkupToken::Text("err".into()),
                MarkupToken::Close,
                MarkupToken::Text(" ok".into()),
            ]
        );
    }

    #[test]
    fn test_tag_display_parses_back() {
        for tag in [MarkupTag::Fg(MarkupColor::Gray), MarkupTag::Bold, MarkupTag::Strike] {
            assert_eq!(parse_markup(&tag.to_string()), vec![MarkupToken::Open(tag)]);
        }
    }

    #[test]
    fn test_unknown_tags_are_text() {
        assert_eq!(strip_markup("a < b <html> <fg=pink>"), "a < b <html> <fg=pink>");
    }

    #[test]
    fn test_escape_round_trip() {
        let user_text = "<b>not bold</b> \\";
        let markup = format!("<dim>{}</>", escape_markup(user_text));
        assert_eq!(strip_markup(&markup), user_text);
    }

    #[test]
    fn test_format_nested() {
        let formatted = format_markup("<b><fg=green>ok</> bold</>", ColorSupport::Ansi);
        let expected = format!(
            "{}{}ok{}{} bold{}",
            "\x1b[1m", "\x1b[38;5;2m", "\x1b[0m", "\x1b[1m", "\x1b[0m"
        );
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_unclosed_tag_is_reset_at_end() {
        let formatted = format_markup("<u>open", ColorSupport::Ansi);
        assert!(formatted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_no_color_strips() {
        assert_eq!(format_markup("<fg=red>err</>", ColorSupport::NoColor), "err");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(format_markup("hello", ColorSupport::Ansi), "hello");
    }
}
