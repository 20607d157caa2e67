// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw bytes in, logical keys out. See [`decode()`] for the decoding table and
//! [`split_keys()`] for how a read that carries several keys is tokenized.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod decoder;
mod key_event;

// Re-export the public API (flat, ergonomic surface).
pub use decoder::*;
pub use key_event::*;
