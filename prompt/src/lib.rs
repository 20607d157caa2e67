// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios rustix unbuffered

//! # r3bl_prompt
//!
//! Interactive prompts for CLI apps that run *inline* in the terminal (no alternate
//! screen). Every widget shares one engine:
//!
//! 1. The terminal is put into raw mode (no line buffering, no echo, no signal keys)
//!    for the duration of the prompt. This is scoped to a [`TerminalSession`] that
//!    restores the terminal when it is dropped, even when unwinding from a panic.
//! 2. Raw bytes are read from stdin and decoded into [`KeyEvent`]s by
//!    [`decode()`], without any terminal library doing the decoding for us.
//! 3. Each key is dispatched to the widget (see [`PromptKind::handle_key()`]), which
//!    mutates its own value model and returns a [`Transition`].
//! 4. A new [`Frame`] is built and painted by the [`DiffPaintView`], which only moves
//!    the cursor up over the previous frame, erases to the end of the screen, and
//!    writes the new frame. Identical frames are never repainted.
//!
//! When stdin is not interactive (piped, or running in CI), no escape codes are written
//! at all, and the prompt's default value is validated and returned right away.
//!
//! ## Widgets
//!
//! | Widget                | Result type        |
//! |-----------------------|--------------------|
//! | [`TextPrompt`]        | `String`           |
//! | [`ArrayPrompt`]       | `Vec<String>`      |
//! | [`ConfirmPrompt`]     | `bool`             |
//! | [`SelectPrompt`]      | `String`           |
//! | [`MultiSelectPrompt`] | `Vec<String>`      |
//! | [`SearchPrompt`]      | [`SearchMatch`]    |
//! | [`PausePrompt`]       | `bool`             |
//! | [`WaitPrompt`]        | `bool`             |
//! | [`Spinner`]           | output of the work |
//!
//! ## Example
//!
//! ```no_run
//! use r3bl_prompt::{ConfirmPrompt, PromptIo, SelectPrompt, TextPrompt};
//!
//! fn main() -> miette::Result<()> {
//!     let mut io = PromptIo::default();
//!
//!     let name = TextPrompt::new("What is your name?")
//!         .placeholder("E.g. Ferris")
//!         .required()
//!         .prompt(&mut io)?;
//!
//!     let color = SelectPrompt::new("Favorite color?", ["red", "green", "blue"])
//!         .default_value("green")
//!         .prompt(&mut io)?;
//!
//!     let ok = ConfirmPrompt::new("Save?").prompt(&mut io)?;
//!
//!     println!("{name} likes {color}, save: {ok}");
//!     Ok(())
//! }
//! ```
//!
//! ## Cancel and revert
//!
//! `Ctrl+C` cancels any prompt and it returns [`PromptError::Cancelled`]. `Ctrl+U`
//! reverts the prompt with [`PromptError::Reverted`] when a revert handler is
//! registered, which is how [`Form`] lets a user step back to the previous question.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod api;
pub mod core;
pub mod engine;
pub mod variants;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
#[allow(ambiguous_glob_reexports)]
pub use api::*;
#[allow(ambiguous_glob_reexports)]
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use engine::*;
#[allow(ambiguous_glob_reexports)]
pub use variants::*;
