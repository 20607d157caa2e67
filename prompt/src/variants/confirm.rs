// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Engine, KeyEvent, PromptError, PromptIo, PromptKind, PromptOptions,
            PromptValue, RenderContext, StyleSheet, Transition};
use crate::engine::prompt_builder_methods;

pub const YES_LABEL: &str = "Yes";
pub const NO_LABEL: &str = "No";

/// Value model of [`ConfirmPrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmModel {
    pub value: bool,
}

impl Default for ConfirmModel {
    fn default() -> Self { Self { value: true } }
}

impl ConfirmModel {
    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        match key {
            KeyEvent::Enter => return Transition::Submit,
            KeyEvent::Char('y' | 'Y') => self.value = true,
            KeyEvent::Char('n' | 'N') => self.value = false,
            KeyEvent::Tab | KeyEvent::ShiftTab => self.value = !self.value,
            it if it.is_list_previous() || it.is_list_next() => self.value = !self.value,
            _ => {}
        }
        Transition::Continue
    }

    #[must_use]
    pub fn value(&self) -> PromptValue { PromptValue::Bool(self.value) }

    #[must_use]
    pub fn render_body(&self, context: &RenderContext) -> Vec<String> {
        let color = context.style_sheet.highlight_color;
        let option = |label: &str, active: bool| {
            if active {
                StyleSheet::paint(color, &format!("<u>{label}</>"))
            } else {
                format!("<dim>{label}</>")
            }
        };
        vec![format!(
            "  {} / {}",
            option(YES_LABEL, self.value),
            option(NO_LABEL, !self.value)
        )]
    }
}

/// Yes or no. `y` and `n` answer directly, arrows, Tab, and vi keys toggle, Enter
/// submits.
#[derive(Debug)]
pub struct ConfirmPrompt {
    options: PromptOptions,
    default_value: bool,
}

impl ConfirmPrompt {
    /// Defaults to yes.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            options: PromptOptions::new(label),
            default_value: true,
        }
    }

    prompt_builder_methods!();

    #[must_use]
    pub fn default_value(mut self, value: bool) -> Self {
        self.default_value = value;
        self
    }

    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<bool, PromptError> {
        let mut engine = Engine::new(self.options, io);
        let mut kind = PromptKind::Confirm(ConfirmModel {
            value: self.default_value,
        });
        engine.run(&mut kind, io, None)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("\n", true ; "default is yes")]
    #[test_case("n\n", false ; "n")]
    #[test_case("N\n", false ; "upper n")]
    #[test_case("ny\n", true ; "n then y")]
    #[test_case("\x1b[C\n", false ; "arrow toggles")]
    #[test_case("\t\t\n", true ; "tab twice")]
    #[test_case("l\n", false ; "vi key toggles")]
    #[test_case("x\n", true ; "other keys are ignored")]
    fn test_keys(input: &str, expected: bool) {
        let (mut io, _stdout_mock) = PromptIo::new_mock([input]);
        assert_eq!(ConfirmPrompt::new("Sure?").prompt(&mut io).unwrap(), expected);
    }

    #[test]
    fn test_submitted_answer_is_shown() {
        let (mut io, stdout_mock) = PromptIo::new_mock(["n\n"]);
        ConfirmPrompt::new("Sure?").prompt(&mut io).unwrap();
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("✔ Sure? No\n"));
    }
}
