// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures to drive prompts without a terminal: scripted key input, a captured output
//! device, and a terminal that only counts raw mode toggles. These are public so that
//! applications can test their own prompt flows the same way this crate does.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod mock_terminal;
mod output_device_ext;
mod prompt_io_ext;
mod stdout_mock;
mod test_vec_input_source;

// Re-export the public API (flat, ergonomic surface).
pub use mock_terminal::*;
pub use output_device_ext::*;
pub use prompt_io_ext::*;
pub use stdout_mock::*;
pub use test_vec_input_source::*;
