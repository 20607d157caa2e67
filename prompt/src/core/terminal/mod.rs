// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal control: the leaf dependency of everything else in this crate.
//!
//! - [`TerminalControl`] is the boundary: size, interactivity, raw mode on/off.
//! - [`PosixTerminal`] implements it with rustix's termios API.
//! - [`TerminalSession`] scopes raw mode and cursor visibility to a value, so that they
//!   are restored exactly once when it is dropped.
//! - [`CsiSequence`] holds the only escape codes the engine writes itself.
//! - [`OutputDevice`] is the clonable, thread safe writer everything paints to.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod crossterm_macros;
mod csi;
mod output_device;
mod raw_mode_unix;
mod session;
mod terminal_control;

// Re-export the public API (flat, ergonomic surface).
pub use csi::*;
pub use output_device::*;
pub use raw_mode_unix::*;
pub use session::*;
pub use terminal_control::*;
