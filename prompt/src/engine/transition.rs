// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PromptKind, PromptOptions};

/// What the engine does after a widget handled a key.
#[derive(Debug)]
pub enum Transition {
    /// Repaint, and wait for the next key.
    Continue,
    /// Validate the current value, and finish if it passes.
    Submit,
    /// Paint a [`crate::PromptState::Searching`] frame, then run the widget's query.
    Requery,
    /// Run another prompt inside this one, on the same terminal session.
    OpenChild(Box<ChildRequest>),
}

/// A prompt to run as a child. Its outcome is handed back to the parent widget.
#[derive(Debug)]
pub struct ChildRequest {
    pub kind: PromptKind,
    pub options: PromptOptions,
}
