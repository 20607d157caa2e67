// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_CANCEL_MESSAGE, PromptValue};
use std::fmt::Debug;

/// Returns an error message for an invalid value, `None` for a valid one.
pub type Validator = Box<dyn Fn(&PromptValue) -> Option<String>>;

/// Called when a prompt is cancelled (`Ctrl+C`) or reverted (`Ctrl+U`).
pub type EventHandler = Box<dyn FnMut()>;

/// The configuration every prompt shares. Widgets expose it through builder methods, eg:
/// [`crate::TextPrompt::hint()`].
pub struct PromptOptions {
    pub label: String,
    pub hint: Option<String>,
    pub required: bool,
    pub validator: Option<Validator>,
    pub cancel_message: String,
    /// `Ctrl+U` clears the typed value instead of reverting.
    pub allow_value_clearance: bool,
    /// Runs inside another prompt, and shares its terminal session.
    pub is_child: bool,
    pub on_cancel: Option<EventHandler>,
    pub on_revert: Option<EventHandler>,
}

impl Debug for PromptOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptOptions")
            .field("label", &self.label)
            .field("hint", &self.hint)
            .field("required", &self.required)
            .field("has_validator", &self.validator.is_some())
            .field("cancel_message", &self.cancel_message)
            .field("allow_value_clearance", &self.allow_value_clearance)
            .field("is_child", &self.is_child)
            .field("has_on_cancel", &self.on_cancel.is_some())
            .field("has_on_revert", &self.on_revert.is_some())
            .finish()
    }
}

impl PromptOptions {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: None,
            required: false,
            validator: None,
            cancel_message: DEFAULT_CANCEL_MESSAGE.to_string(),
            allow_value_clearance: false,
            is_child: false,
            on_cancel: None,
            on_revert: None,
        }
    }
}

/// Generates the builder methods shared by all widgets. The widget must have an
/// `options: PromptOptions` field.
macro_rules! prompt_builder_methods {
    () => {
        /// Shown dimmed below the prompt, unless an error is shown instead.
        #[must_use]
        pub fn hint(mut self, hint: impl Into<String>) -> Self {
            self.options.hint = Some(hint.into());
            self
        }

        /// A blank value fails validation with "Required.".
        #[must_use]
        pub fn required(mut self) -> Self {
            self.options.required = true;
            self
        }

        /// A blank value is accepted. For list widgets this also lets the highlight wrap
        /// through "nothing selected".
        #[must_use]
        pub fn optional(mut self) -> Self {
            self.options.required = false;
            self
        }

        /// Runs after the required check passes. Return `Some(message)` to reject.
        #[must_use]
        pub fn validate(
            mut self,
            validator: impl Fn(&$crate::PromptValue) -> Option<String> + 'static,
        ) -> Self {
            self.options.validator = Some(Box::new(validator));
            self
        }

        #[must_use]
        pub fn cancel_message(mut self, message: impl Into<String>) -> Self {
            self.options.cancel_message = message.into();
            self
        }

        /// Runs when `Ctrl+C` is pressed. The prompt still returns
        /// [`crate::PromptError::Cancelled`].
        #[must_use]
        pub fn on_cancel(mut self, handler: impl FnMut() + 'static) -> Self {
            self.options.on_cancel = Some(Box::new(handler));
            self
        }

        /// Enables reverting with `Ctrl+U`, which runs `handler` and returns
        /// [`crate::PromptError::Reverted`].
        #[must_use]
        pub fn on_revert(mut self, handler: impl FnMut() + 'static) -> Self {
            self.options.on_revert = Some(Box::new(handler));
            self
        }

        /// `Ctrl+U` clears the typed value, instead of reverting.
        #[must_use]
        pub fn allow_value_clearance(mut self) -> Self {
            self.options.allow_value_clearance = true;
            self
        }
    };
}

pub(crate) use prompt_builder_methods;
