// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CsiSequence, KeyEvent, escape_markup};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// What [`LineBuffer::apply_key()`] did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    /// The text changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// Not an editing key, or nothing to do (eg: backspace at the start).
    Ignored,
}

/// The value a user is typing, plus the cursor.
///
/// The cursor is a grapheme cluster index, not a byte offset: `0` is before the first
/// grapheme, [`Self::len()`] is after the last. All editing goes through grapheme
/// boundaries, so multi byte characters and combining marks are never split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Starts with `text`, cursor at the end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut it = Self::new();
        it.replace(text);
        it
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize { self.text.graphemes(true).count() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Byte offset of the grapheme at `grapheme_index`, or the text length when the index
    /// is at (or past) the end.
    fn byte_offset(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Inserts at the cursor and moves the cursor past the inserted text.
    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        // Count again, since the insert might have merged with a neighbor (eg: a
        // combining mark joins the grapheme before it).
        self.cursor = self.text[..at + text.len()].graphemes(true).count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0_u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Removes the grapheme before the cursor. Returns `false` at the start of the line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Removes the grapheme under the cursor. Returns `false` at the end of the line.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn move_left(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

    pub fn move_right(&mut self) { self.cursor = (self.cursor + 1).min(self.len()); }

    pub fn move_home(&mut self) { self.cursor = 0; }

    pub fn move_end(&mut self) { self.cursor = self.len(); }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Replaces the whole value and moves the cursor to the end.
    pub fn replace(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    /// The editing keys shared by every widget that takes text.
    ///
    /// | Key                   | Effect                     |
    /// |-----------------------|----------------------------|
    /// | printable character   | insert at the cursor       |
    /// | Backspace, Ctrl+H     | delete before the cursor   |
    /// | Delete, Ctrl+D        | delete under the cursor    |
    /// | Left, Ctrl+B          | cursor left                |
    /// | Right, Ctrl+F         | cursor right               |
    /// | Home, Ctrl+A          | cursor to start            |
    /// | End, Ctrl+E           | cursor to end              |
    pub fn apply_key(&mut self, key: &KeyEvent) -> LineEdit {
        let edited = |changed: bool| if changed { LineEdit::Edited } else { LineEdit::Ignored };
        match key {
            KeyEvent::Char(ch) => {
                self.insert_char(*ch);
                LineEdit::Edited
            }
            KeyEvent::Backspace | KeyEvent::CtrlH => edited(self.backspace()),
            KeyEvent::Delete | KeyEvent::CtrlD => edited(self.delete()),
            KeyEvent::Left | KeyEvent::CtrlB => {
                self.move_left();
                LineEdit::Moved
            }
            KeyEvent::Right | KeyEvent::CtrlF => {
                self.move_right();
                LineEdit::Moved
            }
            KeyEvent::Home | KeyEvent::CtrlA => {
                self.move_home();
                LineEdit::Moved
            }
            KeyEvent::End | KeyEvent::CtrlE => {
                self.move_end();
                LineEdit::Moved
            }
            _ => LineEdit::Ignored,
        }
    }

    /// Markup for the value with a simulated cursor: the grapheme under the cursor (or a
    /// trailing space, when the cursor is at the end) is shown in inverse video. User text
    /// is escaped.
    ///
    /// At most `max_width` columns are painted. A longer value scrolls horizontally so
    /// the cursor stays visible, with as much of the text before the cursor as fits.
    #[must_use]
    pub fn render_with_cursor(&self, max_width: usize) -> String {
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let widths: Vec<usize> = graphemes.iter().map(|it| it.width()).collect();
        let cursor_width = widths.get(self.cursor).copied().unwrap_or(1);

        let (mut start, mut end) = (self.cursor, (self.cursor + 1).min(graphemes.len()));
        let mut used = cursor_width;
        while start > 0 && used + widths[start - 1] <= max_width {
            start -= 1;
            used += widths[start];
        }
        while end < graphemes.len() && used + widths[end] <= max_width {
            used += widths[end];
            end += 1;
        }

        let mut acc = String::new();
        for (index, grapheme) in graphemes.iter().enumerate().take(end).skip(start) {
            if index == self.cursor {
                push_inverse(&mut acc, &escape_markup(grapheme));
            } else {
                acc.push_str(&escape_markup(grapheme));
            }
        }
        if self.cursor >= graphemes.len() {
            push_inverse(&mut acc, " ");
        }
        acc
    }
}

fn push_inverse(acc: &mut String, text: &str) {
    acc.push_str(&CsiSequence::InverseOn.to_string());
    acc.push_str(text);
    acc.push_str(&CsiSequence::InverseOff.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_width;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_and_cursor() {
        let mut buffer = LineBuffer::new();
        buffer.insert_char('a');
        buffer.insert_char('c');
        buffer.move_left();
        buffer.insert_char('b');
        assert_eq!(buffer.as_str(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn test_multi_byte_editing_respects_graphemes() {
        let mut buffer = LineBuffer::from_text("añ😀z");
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.cursor(), 4);

        buffer.move_left();
        assert!(buffer.backspace());
        assert_eq!(buffer.as_str(), "añz");

        buffer.move_home();
        buffer.move_right();
        assert!(buffer.delete());
        assert_eq!(buffer.as_str(), "az");
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn test_combining_mark_joins_previous_grapheme() {
        let mut buffer = LineBuffer::from_text("e");
        buffer.insert_char('\u{301}');
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.cursor(), 1);
        assert!(buffer.backspace());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_edges_are_noops() {
        let mut buffer = LineBuffer::new();
        assert!(!buffer.backspace());
        assert!(!buffer.delete());
        buffer.move_left();
        buffer.move_right();
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_apply_key() {
        let mut buffer = LineBuffer::new();
        for key in [
            KeyEvent::Char('b'),
            KeyEvent::CtrlA,
            KeyEvent::Char('a'),
            KeyEvent::CtrlE,
            KeyEvent::Char('c'),
            KeyEvent::CtrlB,
        ] {
            buffer.apply_key(&key);
        }
        assert_eq!(buffer.as_str(), "abc");
        assert_eq!(buffer.cursor(), 2);

        assert_eq!(buffer.apply_key(&KeyEvent::CtrlD), LineEdit::Edited);
        assert_eq!(buffer.as_str(), "ab");
        assert_eq!(buffer.apply_key(&KeyEvent::CtrlD), LineEdit::Ignored);
        assert_eq!(buffer.apply_key(&KeyEvent::CtrlH), LineEdit::Edited);
        assert_eq!(buffer.as_str(), "a");
        assert_eq!(buffer.apply_key(&KeyEvent::Home), LineEdit::Moved);
        assert_eq!(buffer.apply_key(&KeyEvent::Backspace), LineEdit::Ignored);
        assert_eq!(buffer.apply_key(&KeyEvent::Enter), LineEdit::Ignored);
    }

    #[test]
    fn test_render_with_cursor() {
        let mut buffer = LineBuffer::from_text("ab");
        assert_eq!(buffer.render_with_cursor(80), "ab\x1b[7m \x1b[27m");
        buffer.move_home();
        assert_eq!(buffer.render_with_cursor(80), "\x1b[7ma\x1b[27mb");
    }

    #[test]
    fn test_render_scrolls_to_keep_cursor_visible() {
        let mut buffer = LineBuffer::from_text(&"x".repeat(40));
        buffer.insert_char('y');
        let painted = buffer.render_with_cursor(10);
        assert_eq!(display_width(&painted), 10);
        assert_eq!(painted, format!("{}y\x1b[7m \x1b[27m", "x".repeat(8)));

        buffer.move_home();
        let painted = buffer.render_with_cursor(10);
        assert_eq!(painted, format!("\x1b[7mx\x1b[27m{}", "x".repeat(9)));
    }

    #[test]
    fn test_render_wide_chars_never_overflow() {
        let buffer = LineBuffer::from_text("日本語日本語");
        let painted = buffer.render_with_cursor(6);
        assert!(display_width(&painted) <= 6);
        assert!(painted.starts_with("本語"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let buffer = LineBuffer::from_text("<b>");
        assert!(buffer.render_with_cursor(80).starts_with("\\<b>"));
    }
}
