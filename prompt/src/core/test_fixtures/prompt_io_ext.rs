// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, MockTerminal, OutputDevice, OutputDeviceExt, PromptIo,
            StdoutMock, StyleSheet, TestVecInputSource};
use std::sync::Arc;

impl PromptIo {
    /// A [`PromptIo`] for tests: each item of `chunks` is delivered as one read, output
    /// is captured in the returned [`StdoutMock`] without colors, and the terminal is an
    /// interactive 80x24 [`MockTerminal`].
    pub fn new_mock<I, B>(chunks: I) -> (PromptIo, StdoutMock)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self::new_mock_with_terminal(chunks, Arc::new(MockTerminal::new(true)))
    }

    /// Same as [`Self::new_mock()`], with a terminal the caller keeps a handle to, eg: to
    /// count raw mode toggles or to pretend stdin is piped.
    pub fn new_mock_with_terminal<I, B>(
        chunks: I,
        terminal: Arc<MockTerminal>,
    ) -> (PromptIo, StdoutMock)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let io = PromptIo {
            output_device,
            input: Box::new(TestVecInputSource::new(chunks)),
            terminal,
            style_sheet: StyleSheet::default(),
            color_support: ColorSupport::NoColor,
            allow_revert: false,
        };
        (io, stdout_mock)
    }
}
