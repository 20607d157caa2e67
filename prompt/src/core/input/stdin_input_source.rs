// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputChunk, InputSource, READ_BUFFER_SIZE};
use rustix::{event::{PollFd, PollFlags, Timespec, poll},
             io::{Errno, read}};
use std::{io, time::Duration};

/// Reads stdin unbuffered, straight from the file descriptor, so that a key press is
/// seen the moment raw mode delivers it (`std::io::Stdin` would wait to fill its own
/// line buffer).
#[derive(Debug, Default)]
pub struct StdinInputSource;

impl InputSource for StdinInputSource {
    fn read_chunk(&mut self) -> io::Result<Option<InputChunk>> {
        let stdin = io::stdin();
        let mut buffer = [0_u8; READ_BUFFER_SIZE];
        loop {
            match read(&stdin, &mut buffer) {
                Ok(0) => return Ok(None),
                Ok(count) => return Ok(Some(InputChunk::from_slice(&buffer[..count]))),
                Err(Errno::INTR) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        let stdin = io::stdin();
        let mut fds = [PollFd::new(&stdin, PollFlags::IN)];
        let timespec = Timespec {
            tv_sec: timeout.as_secs().try_into().unwrap_or(i64::MAX),
            tv_nsec: timeout.subsec_nanos().try_into().unwrap_or_default(),
        };
        match poll(&mut fds, Some(&timespec)) {
            Ok(ready) => Ok(ready > 0),
            Err(Errno::INTR) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
