// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputChunk, InputSource};
use std::{collections::VecDeque, io, time::Duration};

/// Replays scripted reads, one chunk per [`InputSource::read_chunk()`] call, then reports
/// the stream as closed.
#[derive(Debug, Default)]
pub struct TestVecInputSource {
    pub chunks: VecDeque<InputChunk>,
}

impl TestVecInputSource {
    /// Each item is one read, so `["ab", "\n"]` delivers `ab` in one read.
    pub fn new<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self {
            chunks: chunks
                .into_iter()
                .map(|chunk| InputChunk::from_slice(chunk.as_ref()))
                .collect(),
        }
    }
}

impl InputSource for TestVecInputSource {
    fn read_chunk(&mut self) -> io::Result<Option<InputChunk>> { Ok(self.chunks.pop_front()) }

    /// Scripted input is always ready until it runs out. Once it does, this waits out the
    /// timeout, like a real terminal with nobody typing.
    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        if self.chunks.is_empty() {
            std::thread::sleep(timeout);
            Ok(false)
        } else {
            Ok(true)
        }
    }
}
