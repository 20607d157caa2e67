// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Everything that can go wrong with a prompt.
///
/// [`Self::ValidationFailed`] and [`Self::Required`] are shown inline while the user
/// fixes their input, they never end an interactive prompt. The outcomes a caller sees
/// are [`Self::Cancelled`], [`Self::Reverted`], [`Self::NonInteractiveValidationFailed`],
/// and [`Self::Io`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PromptError {
    #[error("{0}")]
    #[diagnostic(code(r3bl_prompt::validation_failed))]
    ValidationFailed(String),

    #[error("Required.")]
    #[diagnostic(code(r3bl_prompt::required))]
    Required,

    #[error("Prompt cancelled by the user")]
    #[diagnostic(
        code(r3bl_prompt::cancelled),
        help("Ctrl+C was pressed, or input closed before the prompt had a valid value")
    )]
    Cancelled,

    #[error("Prompt reverted by the user")]
    #[diagnostic(
        code(r3bl_prompt::reverted),
        help("Ctrl+U was pressed to go back to the previous step")
    )]
    Reverted,

    #[error("Not running in an interactive terminal, and the default value is invalid: {message}")]
    #[diagnostic(
        code(r3bl_prompt::non_interactive_validation_failed),
        help("Provide a valid default value, or run in a terminal where a user can answer")
    )]
    NonInteractiveValidationFailed { message: String },

    #[error("Expected a {expected} value, found {found}")]
    #[diagnostic(code(r3bl_prompt::value_kind_mismatch))]
    ValueKindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Terminal I/O failed")]
    #[diagnostic(code(r3bl_prompt::io))]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// `true` for the two outcomes a user causes on purpose, which a multi step caller
    /// usually handles instead of reporting.
    #[must_use]
    pub fn is_user_initiated(&self) -> bool {
        matches!(self, PromptError::Cancelled | PromptError::Reverted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_messages() {
        assert_eq!(PromptError::Required.to_string(), crate::REQUIRED_MESSAGE);
        assert_eq!(
            PromptError::ValidationFailed("Too short.".into()).to_string(),
            "Too short."
        );
    }

    #[test]
    fn test_user_initiated() {
        assert!(PromptError::Cancelled.is_user_initiated());
        assert!(PromptError::Reverted.is_user_initiated());
        assert!(!PromptError::Required.is_user_initiated());
    }
}
