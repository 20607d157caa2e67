// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod input_source;
mod stdin_input_source;

// Re-export the public API (flat, ergonomic surface).
pub use input_source::*;
pub use stdin_input_source::*;
