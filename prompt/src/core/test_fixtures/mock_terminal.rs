// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Size, TerminalControl};
use std::{io,
          sync::atomic::{AtomicUsize, Ordering}};

/// A [`TerminalControl`] that never touches a real terminal. It records how often raw
/// mode was entered and restored, which is how tests check that child prompts don't
/// toggle the mode a second time.
#[derive(Debug)]
pub struct MockTerminal {
    pub size: Size,
    pub interactive: bool,
    /// Set to `false` to pretend stdout is piped.
    pub output_terminal: bool,
    enter_count: AtomicUsize,
    restore_count: AtomicUsize,
}

impl MockTerminal {
    #[must_use]
    pub fn new(interactive: bool) -> Self { Self::with_size(interactive, Size::default()) }

    #[must_use]
    pub fn with_size(interactive: bool, size: Size) -> Self {
        Self {
            size,
            interactive,
            output_terminal: true,
            enter_count: AtomicUsize::new(0),
            restore_count: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn enter_count(&self) -> usize { self.enter_count.load(Ordering::SeqCst) }

    #[must_use]
    pub fn restore_count(&self) -> usize { self.restore_count.load(Ordering::SeqCst) }
}

impl TerminalControl for MockTerminal {
    fn size(&self) -> Size { self.size }

    fn is_interactive(&self) -> bool { self.interactive }

    fn is_output_terminal(&self) -> bool { self.output_terminal }

    fn enter_raw_mode(&self) -> io::Result<()> {
        self.enter_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore_mode(&self) -> io::Result<()> {
        self.restore_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
