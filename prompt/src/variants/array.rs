// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ChildRequest, Choice, Engine, KeyEvent, PromptError, PromptIo, PromptKind,
            PromptOptions, PromptValue, RenderContext, SelectModel, Transition,
            escape_markup, render_input_line, truncate_to_width};
use crate::engine::prompt_builder_methods;

pub const ARRAY_DEFAULT_HINT: &str = "Enter on an empty line to finish, Shift+Tab to delete an entry";
pub const ARRAY_DELETE_LABEL: &str = "Select an entry to delete";

/// Value model of [`ArrayPrompt`]. Entries are typed into [`Engine::typed_value`] one at
/// a time.
#[derive(Debug, Clone, Default)]
pub struct ArrayModel {
    pub values: Vec<String>,
}

impl ArrayModel {
    pub fn handle_key(&mut self, engine: &mut Engine, key: &KeyEvent) -> Transition {
        match key {
            KeyEvent::Enter if engine.typed_value.as_str().trim().is_empty() => {
                engine.typed_value.clear();
                Transition::Submit
            }
            KeyEvent::Enter => {
                self.values.push(engine.typed_value.as_str().to_string());
                engine.typed_value.clear();
                Transition::Continue
            }
            KeyEvent::ShiftTab if !self.values.is_empty() => {
                Transition::OpenChild(Box::new(self.delete_request()))
            }
            _ => {
                engine.typed_value.apply_key(key);
                Transition::Continue
            }
        }
    }

    /// A child select over the entries, whose values are the entry indices.
    fn delete_request(&self) -> ChildRequest {
        let choices = self
            .values
            .iter()
            .enumerate()
            .map(|(index, entry)| Choice::new(index.to_string(), entry.as_str()))
            .collect();
        ChildRequest {
            kind: PromptKind::Select(SelectModel::new(choices, None, crate::DEFAULT_SCROLL, false)),
            options: PromptOptions::new(ARRAY_DELETE_LABEL),
        }
    }

    /// A cancelled delete, or one with nothing highlighted, deletes nothing.
    ///
    /// # Errors
    ///
    /// Passes on errors other than [`PromptError::Cancelled`] and
    /// [`PromptError::Reverted`].
    pub fn accept_child(
        &mut self,
        _engine: &mut Engine,
        outcome: Result<PromptValue, PromptError>,
    ) -> Result<(), PromptError> {
        match outcome {
            Ok(value) => {
                let index = value.as_text().and_then(|it| it.parse::<usize>().ok());
                if let Some(index) = index.filter(|it| *it < self.values.len()) {
                    self.values.remove(index);
                }
                Ok(())
            }
            Err(err) if err.is_user_initiated() => Ok(()),
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn value(&self) -> PromptValue { PromptValue::List(self.values.clone()) }

    #[must_use]
    pub fn render_body(&self, engine: &Engine, context: &RenderContext) -> Vec<String> {
        let mut lines: Vec<String> = self
            .values
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let number = format!("  {}. ", index + 1);
                let room = usize::from(context.size.cols).saturating_sub(number.len());
                format!(
                    "<dim>{number}</>{}",
                    escape_markup(&truncate_to_width(entry, room))
                )
            })
            .collect();
        lines.push(render_input_line(engine, context));
        lines
    }
}

/// A list of strings, entered one per line.
///
/// Enter adds the typed entry, Enter on an empty line finishes, and Shift+Tab opens a
/// select to delete an entry.
#[derive(Debug)]
pub struct ArrayPrompt {
    options: PromptOptions,
    default_values: Vec<String>,
}

impl ArrayPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        let mut options = PromptOptions::new(label);
        options.hint = Some(ARRAY_DEFAULT_HINT.to_string());
        Self {
            options,
            default_values: vec![],
        }
    }

    prompt_builder_methods!();

    /// Entries the list starts with.
    #[must_use]
    pub fn default_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<Vec<String>, PromptError> {
        let mut engine = Engine::new(self.options, io);
        let mut kind = PromptKind::Array(ArrayModel {
            values: self.default_values,
        });
        engine.run(&mut kind, io, None)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_entries_then_empty_enter() {
        let (mut io, _stdout_mock) = PromptIo::new_mock(["x", "\n", "y", "\n", "\n"]);
        let values = ArrayPrompt::new("Tags").prompt(&mut io).unwrap();
        assert_eq!(values, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_required_needs_one_entry() {
        let (mut io, stdout_mock) = PromptIo::new_mock(["\n", "z\n", "\n"]);
        let values = ArrayPrompt::new("Tags").required().prompt(&mut io).unwrap();
        assert_eq!(values, vec!["z".to_string()]);
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("Required."));
    }

    #[test]
    fn test_shift_tab_deletes_the_selected_entry() {
        let terminal = Arc::new(MockTerminal::new(true));
        let (mut io, _stdout_mock) = PromptIo::new_mock_with_terminal(
            // Open the delete select, move to "b", delete it, then finish.
            ["\x1b[Z", "\x1b[B", "\n", "\n"],
            terminal.clone(),
        );
        let values = ArrayPrompt::new("Tags")
            .default_values(["a", "b", "c"])
            .prompt(&mut io)
            .unwrap();

        assert_eq!(values, vec!["a".to_string(), "c".to_string()]);
        // The child select shares the parent's raw mode session.
        assert_eq!(terminal.enter_count(), 1);
        assert_eq!(terminal.restore_count(), 1);
    }

    #[test]
    fn test_cancelled_delete_keeps_entries() {
        let (mut io, _stdout_mock) = PromptIo::new_mock(["\x1b[Z", "\x03", "\n"]);
        let values = ArrayPrompt::new("Tags")
            .default_values(["a"])
            .prompt(&mut io)
            .unwrap();
        assert_eq!(values, vec!["a".to_string()]);
    }

    #[test]
    fn test_shift_tab_without_entries_does_nothing() {
        let (mut io, _stdout_mock) = PromptIo::new_mock(["\x1b[Z", "q\n", "\n"]);
        let values = ArrayPrompt::new("Tags").prompt(&mut io).unwrap();
        assert_eq!(values, vec!["q".to_string()]);
    }
}
