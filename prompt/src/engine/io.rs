// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, InputSource, OutputDevice, PosixTerminal, StdinInputSource,
            StyleSheet, TerminalControl};
use std::{fmt::Debug, sync::Arc};

/// Everything a prompt talks to. Pass the same one to a sequence of prompts.
///
/// - [`PromptIo::default()`] is the real terminal: stdout, stdin, and termios.
/// - [`PromptIo::new_mock()`] scripts the input and captures the output, for tests.
pub struct PromptIo {
    pub output_device: OutputDevice,
    pub input: Box<dyn InputSource>,
    pub terminal: Arc<dyn TerminalControl>,
    pub style_sheet: StyleSheet,
    pub color_support: ColorSupport,
    /// `Ctrl+U` reverts every prompt run with this, even those without their own revert
    /// handler. [`crate::Form`] turns this on for every step after the first.
    pub allow_revert: bool,
}

impl Debug for PromptIo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptIo")
            .field("output_device", &self.output_device)
            .field("terminal", &self.terminal)
            .field("style_sheet", &self.style_sheet)
            .field("color_support", &self.color_support)
            .field("allow_revert", &self.allow_revert)
            .finish_non_exhaustive()
    }
}

impl Default for PromptIo {
    fn default() -> Self {
        Self::new(
            OutputDevice::new_stdout(),
            Box::new(StdinInputSource),
            Arc::new(PosixTerminal),
        )
    }
}

impl PromptIo {
    /// Uses the default [`StyleSheet`], and detects [`ColorSupport`] from the
    /// environment.
    #[must_use]
    pub fn new(
        output_device: OutputDevice,
        input: Box<dyn InputSource>,
        terminal: Arc<dyn TerminalControl>,
    ) -> Self {
        Self {
            output_device,
            input,
            terminal,
            style_sheet: StyleSheet::default(),
            color_support: ColorSupport::detect(),
            allow_revert: false,
        }
    }

    #[must_use]
    pub fn with_style_sheet(mut self, style_sheet: StyleSheet) -> Self {
        self.style_sheet = style_sheet;
        self
    }
}
