// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod constants;
pub mod input;
pub mod key;
pub mod log;
pub mod style;
pub mod terminal;
pub mod test_fixtures;
pub mod text;

// Re-export.
pub use constants::*;
pub use input::*;
pub use key::*;
pub use log::*;
pub use style::*;
pub use terminal::*;
pub use test_fixtures::*;
pub use text::*;
