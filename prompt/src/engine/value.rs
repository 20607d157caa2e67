// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::PromptError;

/// One result of a [`crate::SearchPrompt`]: the `value` to return, and the `label` shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchMatch {
    pub value: String,
    pub label: String,
}

impl SearchMatch {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for SearchMatch {
    /// The label doubles as the value.
    fn from(it: &str) -> Self { Self::new(it, it) }
}

/// The value of any prompt, as seen by the engine and by validators. Each widget's
/// `prompt()` converts it to its own result type with [`TryFrom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
    Labeled(SearchMatch),
}

impl PromptValue {
    /// An empty or whitespace only string, or an empty list. A `bool` is never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            PromptValue::Text(text) => text.trim().is_empty(),
            PromptValue::Bool(_) => false,
            PromptValue::List(items) => items.is_empty(),
            PromptValue::Labeled(search_match) => search_match.value.trim().is_empty(),
        }
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            PromptValue::Text(_) => "text",
            PromptValue::Bool(_) => "bool",
            PromptValue::List(_) => "list",
            PromptValue::Labeled(_) => "labeled",
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PromptValue::Text(text) => Some(text),
            PromptValue::Labeled(search_match) => Some(&search_match.value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PromptValue::Bool(it) => Some(*it),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PromptValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// How the answer is shown next to the label once submitted.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            PromptValue::Text(text) => text.clone(),
            PromptValue::Bool(true) => "Yes".to_string(),
            PromptValue::Bool(false) => "No".to_string(),
            PromptValue::List(items) => items.join(", "),
            PromptValue::Labeled(search_match) => search_match.label.clone(),
        }
    }
}

fn mismatch(expected: &'static str, found: &PromptValue) -> PromptError {
    PromptError::ValueKindMismatch {
        expected,
        found: found.kind_name(),
    }
}

impl TryFrom<PromptValue> for String {
    type Error = PromptError;

    fn try_from(value: PromptValue) -> Result<Self, Self::Error> {
        match value {
            PromptValue::Text(text) => Ok(text),
            other => Err(mismatch("text", &other)),
        }
    }
}

impl TryFrom<PromptValue> for bool {
    type Error = PromptError;

    fn try_from(value: PromptValue) -> Result<Self, Self::Error> {
        match value {
            PromptValue::Bool(it) => Ok(it),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl TryFrom<PromptValue> for Vec<String> {
    type Error = PromptError;

    fn try_from(value: PromptValue) -> Result<Self, Self::Error> {
        match value {
            PromptValue::List(items) => Ok(items),
            other => Err(mismatch("list", &other)),
        }
    }
}

impl TryFrom<PromptValue> for SearchMatch {
    type Error = PromptError;

    fn try_from(value: PromptValue) -> Result<Self, Self::Error> {
        match value {
            PromptValue::Labeled(search_match) => Ok(search_match),
            other => Err(mismatch("labeled", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert!(PromptValue::Text("  ".into()).is_blank());
        assert!(PromptValue::List(vec![]).is_blank());
        assert!(!PromptValue::Bool(false).is_blank());
        assert!(!PromptValue::Text("a".into()).is_blank());
    }

    #[test]
    fn test_try_from_mismatch() {
        let result = String::try_from(PromptValue::Bool(true));
        assert!(matches!(
            result,
            Err(PromptError::ValueKindMismatch {
                expected: "text",
                found: "bool"
            })
        ));
    }

    #[test]
    fn test_display_string() {
        assert_eq!(PromptValue::Bool(false).to_display_string(), "No");
        assert_eq!(
            PromptValue::List(vec!["x".into(), "y".into()]).to_display_string(),
            "x, y"
        );
    }
}
