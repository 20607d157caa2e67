// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Where a prompt is in its lifecycle.
///
/// ```text
/// Initial ──▶ Active ◀──▶ Error
///               │ ▲
///               │ └──▶ Searching, Deleting (transient)
///               ▼
///        Submit | Cancel (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum PromptState {
    /// Before the first frame is painted.
    #[default]
    Initial,
    Active,
    Submit,
    Cancel,
    /// A validation error is shown. The next key press returns to [`Self::Active`].
    Error,
    /// A search query is running.
    Searching,
    /// A child prompt to delete an entry is about to take over.
    Deleting,
}

impl PromptState {
    /// `true` for [`Self::Submit`] and [`Self::Cancel`], the states a prompt ends in.
    #[must_use]
    pub fn is_terminal(self) -> bool { matches!(self, PromptState::Submit | PromptState::Cancel) }
}
