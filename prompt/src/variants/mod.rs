// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The widgets. Each one is a builder with a `prompt()` method, backed by a value model
//! in [`PromptKind`] that the shared [`crate::Engine`] drives. [`Spinner`] and
//! [`WaitPrompt`] read no keys (other than `Ctrl+C`), so they run their own loops.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod array;
mod confirm;
mod kind;
mod list_row;
mod multi_select;
mod pause;
mod search;
mod select;
mod spinner;
mod spinner_render;
mod text;
mod wait;

// Re-export the public API (flat, ergonomic surface).
pub use array::*;
pub use confirm::*;
pub use kind::*;
pub use list_row::*;
pub use multi_select::*;
pub use pause::*;
pub use search::*;
pub use select::*;
pub use spinner::*;
pub use spinner_render::*;
pub use text::*;
pub use wait::*;
