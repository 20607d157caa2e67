// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEVELOPMENT_MODE, PromptError, PromptIo, PromptValue};
use std::fmt::Debug;

/// One question of a [`Form`]. It gets the answers given so far, so later questions can
/// depend on earlier ones.
pub type FormStep = Box<dyn FnMut(&mut PromptIo, &FormResponses) -> Result<PromptValue, PromptError>>;

/// The answers of a [`Form`], in step order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormResponses {
    entries: Vec<(String, PromptValue)>,
}

impl FormResponses {
    /// The answer of the step called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PromptValue> {
        self.entries
            .iter()
            .find_map(|(it, value)| (it == name).then_some(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PromptValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn into_vec(self) -> Vec<(String, PromptValue)> { self.entries }
}

/// A sequence of prompts where `Ctrl+U` goes back to the previous question.
///
/// Every step after the first runs with [`PromptIo::allow_revert`] turned on. A reverted
/// step re-asks the step before it (forgetting its answer), a cancelled step cancels the
/// whole form.
///
/// ```no_run
/// use r3bl_prompt::{ConfirmPrompt, Form, PromptIo, PromptValue, TextPrompt};
///
/// # fn main() -> miette::Result<()> {
/// let responses = Form::new()
///     .step("name", |io, _| TextPrompt::new("Name?").prompt(io).map(PromptValue::Text))
///     .step("save", |io, responses| {
///         let name = responses.get("name").and_then(|it| it.as_text()).unwrap_or_default();
///         ConfirmPrompt::new(format!("Save {name}?")).prompt(io).map(PromptValue::Bool)
///     })
///     .run(&mut PromptIo::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Form {
    steps: Vec<(String, FormStep)>,
}

impl Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("steps", &self.steps.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}

impl Form {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn step(
        mut self,
        name: impl Into<String>,
        step: impl FnMut(&mut PromptIo, &FormResponses) -> Result<PromptValue, PromptError>
        + 'static,
    ) -> Self {
        self.steps.push((name.into(), Box::new(step)));
        self
    }

    /// Run the steps in order, going back one step on every revert.
    ///
    /// # Errors
    ///
    /// The first error of a step other than a revert of a step after the first. That is
    /// usually [`PromptError::Cancelled`].
    pub fn run(mut self, io: &mut PromptIo) -> Result<FormResponses, PromptError> {
        let mut responses = FormResponses::default();
        let original_allow_revert = io.allow_revert;
        let mut index = 0;

        while let Some((name, step)) = self.steps.get_mut(index) {
            io.allow_revert = original_allow_revert || index > 0;
            let outcome = step(io, &responses);
            io.allow_revert = original_allow_revert;

            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(message = "form step", step = %name, ok = outcome.is_ok());
            });

            match outcome {
                Ok(value) => {
                    responses.entries.push((name.clone(), value));
                    index += 1;
                }
                Err(PromptError::Reverted) if index > 0 => {
                    responses.entries.pop();
                    index -= 1;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(responses)
    }
}
