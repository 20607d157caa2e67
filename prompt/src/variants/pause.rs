// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Engine, KeyEvent, PromptError, PromptIo, PromptKind, PromptOptions,
            PromptValue, Transition};
use crate::engine::prompt_builder_methods;

pub const PAUSE_DEFAULT_LABEL: &str = "Press Enter to continue";

/// Value model of [`PausePrompt`]. There is nothing to edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseModel;

impl PauseModel {
    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        if *key == KeyEvent::Enter {
            Transition::Submit
        } else {
            Transition::Continue
        }
    }

    #[must_use]
    pub fn value(&self) -> PromptValue { PromptValue::Bool(true) }
}

/// Waits for Enter. Returns `true`, or [`PromptError::Cancelled`] on `Ctrl+C`.
#[derive(Debug)]
pub struct PausePrompt {
    options: PromptOptions,
}

impl Default for PausePrompt {
    fn default() -> Self { Self::new(PAUSE_DEFAULT_LABEL) }
}

impl PausePrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            options: PromptOptions::new(label),
        }
    }

    prompt_builder_methods!();

    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<bool, PromptError> {
        let mut engine = Engine::new(self.options, io);
        engine.run(&mut PromptKind::Pause(PauseModel), io, None)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;
    use std::sync::Arc;

    #[test]
    fn test_enter_continues() {
        let (mut io, _stdout_mock) = PromptIo::new_mock(["abc", "\n"]);
        assert!(PausePrompt::default().prompt(&mut io).unwrap());
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let (mut io, _stdout_mock) = PromptIo::new_mock(["\x03"]);
        assert!(matches!(
            PausePrompt::default().prompt(&mut io),
            Err(PromptError::Cancelled)
        ));
    }

    #[test]
    fn test_non_interactive_continues_silently() {
        let terminal = Arc::new(MockTerminal::new(false));
        let (mut io, stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal);
        assert!(PausePrompt::default().prompt(&mut io).unwrap());
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }
}
