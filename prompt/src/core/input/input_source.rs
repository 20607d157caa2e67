// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::READ_BUFFER_SIZE;
use smallvec::SmallVec;
use std::{io, time::Duration};

/// The bytes returned by a single read. One key press (even a multi byte escape
/// sequence) fits inline, so this rarely allocates.
pub type InputChunk = SmallVec<[u8; READ_BUFFER_SIZE]>;

/// Where raw key bytes come from. The engine never decodes anything itself at this
/// level, see [`crate::decode()`].
pub trait InputSource: Send {
    /// Blocks until at least one byte is available.
    ///
    /// Returns `Ok(None)` when the stream is closed (end of file), after which the
    /// engine stops reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_chunk(&mut self) -> io::Result<Option<InputChunk>>;

    /// Waits up to `timeout` for input to become available, without consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying poll fails.
    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool>;
}
