// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::KeyEvent;
use smallvec::SmallVec;

pub const ESC: u8 = 0x1B;
pub const CSI_INTRODUCER: u8 = b'[';
pub const SS3_INTRODUCER: u8 = b'O';

/// Decode one key's worth of bytes into a [`KeyEvent`].
///
/// | Bytes                                   | Key                  |
/// |-----------------------------------------|----------------------|
/// | `ESC [ A` / `B` / `C` / `D`             | Up / Down / Right / Left |
/// | `ESC [ 1 ; m A` (any modifier `m`)      | the bare arrow       |
/// | `ESC O A` .. `ESC O D` (SS3)            | the arrow            |
/// | `ESC [ H`, `ESC O H`, `ESC [ 1 ~`, `ESC [ 7 ~` | Home          |
/// | `ESC [ F`, `ESC O F`, `ESC [ 4 ~`, `ESC [ 8 ~` | End           |
/// | `ESC [ Z`                               | Shift+Tab            |
/// | `ESC [ 3 ~`                             | Delete               |
/// | `ESC`                                   | Escape               |
/// | `\x7f`                                  | Backspace            |
/// | `\n`, `\r`                              | Enter                |
/// | `\t`                                    | Tab                  |
/// | `\x01` .. `\x15`                        | Ctrl+A .. Ctrl+U (the supported subset) |
/// | `0x20` .. `0x7E`                        | that character       |
/// | one UTF-8 encoded non control character | that character       |
///
/// Anything else returns `None`, and the engine ignores it.
#[must_use]
pub fn decode(bytes: &[u8]) -> Option<KeyEvent> {
    match bytes {
        [] => None,
        [ESC] => Some(KeyEvent::Escape),
        [ESC, CSI_INTRODUCER, rest @ ..] => decode_csi(rest),
        [ESC, SS3_INTRODUCER, rest @ ..] => decode_ss3(rest),
        [byte] => decode_single_byte(*byte),
        _ => decode_utf8_char(bytes),
    }
}

fn decode_single_byte(byte: u8) -> Option<KeyEvent> {
    let key = match byte {
        b'\n' | b'\r' => KeyEvent::Enter,
        b'\t' => KeyEvent::Tab,
        0x7F => KeyEvent::Backspace,
        0x01 => KeyEvent::CtrlA,
        0x02 => KeyEvent::CtrlB,
        0x03 => KeyEvent::CtrlC,
        0x04 => KeyEvent::CtrlD,
        0x05 => KeyEvent::CtrlE,
        0x06 => KeyEvent::CtrlF,
        0x08 => KeyEvent::CtrlH,
        0x0E => KeyEvent::CtrlN,
        0x10 => KeyEvent::CtrlP,
        0x15 => KeyEvent::CtrlU,
        0x20..=0x7E => KeyEvent::Char(char::from(byte)),
        _ => return None,
    };
    Some(key)
}

/// `rest` is everything after `ESC [`, ie: optional `;` separated numeric parameters
/// followed by one final byte.
fn decode_csi(rest: &[u8]) -> Option<KeyEvent> {
    let (&final_byte, params) = rest.split_last()?;
    let params = parse_csi_parameters(params)?;

    let key = match (final_byte, params.as_slice()) {
        // Arrows, optionally with a modifier: CSI 1 ; m A.
        (b'A', [] | [1, _]) => KeyEvent::Up,
        (b'B', [] | [1, _]) => KeyEvent::Down,
        (b'C', [] | [1, _]) => KeyEvent::Right,
        (b'D', [] | [1, _]) => KeyEvent::Left,
        (b'H', [] | [1, _]) => KeyEvent::Home,
        (b'F', [] | [1, _]) => KeyEvent::End,
        (b'Z', []) => KeyEvent::ShiftTab,
        // VT style: CSI n ~, optionally with a modifier: CSI n ; m ~.
        (b'~', [1 | 7] | [1 | 7, _]) => KeyEvent::Home,
        (b'~', [4 | 8] | [4 | 8, _]) => KeyEvent::End,
        (b'~', [3] | [3, _]) => KeyEvent::Delete,
        _ => return None,
    };
    Some(key)
}

/// Some terminals send SS3 (`ESC O x`) for arrows, Home and End in application cursor
/// mode.
fn decode_ss3(rest: &[u8]) -> Option<KeyEvent> {
    let key = match rest {
        [b'A'] => KeyEvent::Up,
        [b'B'] => KeyEvent::Down,
        [b'C'] => KeyEvent::Right,
        [b'D'] => KeyEvent::Left,
        [b'H'] => KeyEvent::Home,
        [b'F'] => KeyEvent::End,
        _ => return None,
    };
    Some(key)
}

fn parse_csi_parameters(bytes: &[u8]) -> Option<SmallVec<[u16; 4]>> {
    if bytes.is_empty() {
        return Some(SmallVec::new());
    }
    bytes
        .split(|&byte| byte == b';')
        .map(|param| std::str::from_utf8(param).ok()?.parse::<u16>().ok())
        .collect()
}

fn decode_utf8_char(bytes: &[u8]) -> Option<KeyEvent> {
    let text = std::str::from_utf8(bytes).ok()?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_control() => Some(KeyEvent::Char(ch)),
        _ => None,
    }
}

/// Split one read into per key tokens, in order. A single read can carry several keys
/// when the user types fast or pastes text.
///
/// - `ESC [` starts a CSI sequence, which runs up to and including its final byte
///   (`0x40..=0x7E`).
/// - `ESC O` starts an SS3 sequence, three bytes long.
/// - `ESC` followed by anything else is a lone Escape.
/// - Any other byte starts a UTF-8 encoded character, whose length comes from its
///   leading byte.
///
/// A truncated sequence at the end of the chunk becomes its own token, which then fails
/// to [`decode()`] and is ignored. Use [`split_complete_keys()`] to hold it back instead.
#[must_use]
pub fn split_keys(chunk: &[u8]) -> SmallVec<[&[u8]; 8]> {
    let mut tokens = SmallVec::new();
    let mut start = 0;
    while start < chunk.len() {
        let len = token_len(&chunk[start..]);
        tokens.push(&chunk[start..start + len]);
        start += len;
    }
    tokens
}

/// Length of the token at the start of `bytes`. Always `>= 1` and `<= bytes.len()` for a
/// non empty `bytes`.
fn token_len(bytes: &[u8]) -> usize {
    match bytes {
        [ESC, CSI_INTRODUCER, rest @ ..] => {
            match rest.iter().position(|byte| (0x40..=0x7E).contains(byte)) {
                Some(final_index) => 2 + final_index + 1,
                None => bytes.len(),
            }
        }
        [ESC, SS3_INTRODUCER, ..] => bytes.len().min(3),
        [ESC, ..] => 1,
        [leading, ..] => utf8_len(*leading).min(bytes.len()),
        [] => 0,
    }
}

/// Length of the UTF-8 sequence that starts with `leading`. Continuation and invalid
/// bytes stand alone.
fn utf8_len(leading: u8) -> usize {
    match leading {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Longest CSI parameter run that is still waited on. A longer unterminated sequence is
/// garbage, not a key that is still arriving.
const MAX_PENDING_CSI_LEN: usize = 16;

/// Like [`split_keys()`], but a trailing token that is only the start of a key is
/// returned separately, for the caller to put in front of the next read. A read can end
/// anywhere, eg: in the middle of a pasted `é` or of an arrow key's `ESC [ A`.
///
/// A lone `ESC` at the end is held back too, since it may start a sequence. When
/// nothing follows, the caller decodes the held bytes on their own.
#[must_use]
pub fn split_complete_keys(bytes: &[u8]) -> (SmallVec<[&[u8]; 8]>, &[u8]) {
    let mut tokens = split_keys(bytes);
    match tokens.last() {
        Some(last) if is_incomplete(last) => {
            let held = tokens.pop().unwrap_or_default();
            (tokens, held)
        }
        _ => (tokens, &[][..]),
    }
}

fn is_incomplete(token: &[u8]) -> bool {
    match token {
        [] => false,
        [ESC] | [ESC, SS3_INTRODUCER] => true,
        [ESC, CSI_INTRODUCER, rest @ ..] => {
            rest.len() < MAX_PENDING_CSI_LEN
                && !rest.last().is_some_and(|byte| (0x40..=0x7E).contains(byte))
        }
        [ESC, ..] => false,
        [leading, ..] => utf8_len(*leading) > token.len(),
    }
}
