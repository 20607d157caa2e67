// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The shared prompt engine: one state machine, one raw input loop, and one diff based
//! redraw, used by every widget in [`crate::variants`].

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod engine_impl;
mod error;
mod frame;
mod io;
mod options;
mod scroll;
mod state;
mod transition;
mod value;
mod view;

// Re-export the public API (flat, ergonomic surface).
pub use engine_impl::*;
pub use error::*;
pub use frame::*;
pub use io::*;
pub use options::*;
pub use scroll::*;
pub use state::*;
pub use transition::*;
pub use value::*;
pub use view::*;

pub(crate) use options::prompt_builder_methods;
