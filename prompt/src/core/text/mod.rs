// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod line_buffer;
mod width;

// Re-export the public API (flat, ergonomic surface).
pub use line_buffer::*;
pub use width::*;
