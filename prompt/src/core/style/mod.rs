// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The styled text formatter. Frames are built as markup (`<fg=red>oops</>`) and only
//! turned into ANSI SGR escape codes right before they are written, see
//! [`format_markup()`]. Width measurement works on the markup free text, see
//! [`strip_markup()`].

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod color_support;
mod markup;
mod stylesheet;

// Re-export the public API (flat, ergonomic surface).
pub use color_support::*;
pub use markup::*;
pub use stylesheet::*;
