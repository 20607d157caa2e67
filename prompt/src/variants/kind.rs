// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ArrayModel, ConfirmModel, Engine, KeyEvent, MultiSelectModel, PauseModel,
            PromptError, PromptValue, RenderContext, SearchModel, SelectModel, Size,
            TextModel, Transition};

/// The value model of every key driven widget. The engine dispatches to the variant
/// with a `match`, there is no runtime registration of handlers.
#[derive(Debug)]
pub enum PromptKind {
    Text(TextModel),
    Array(ArrayModel),
    Confirm(ConfirmModel),
    Select(SelectModel),
    MultiSelect(MultiSelectModel),
    Search(SearchModel),
    Pause(PauseModel),
}

impl PromptKind {
    /// `Ctrl+C` never gets here. `Ctrl+U` only does when value clearance is allowed, and
    /// then the engine has already cleared [`Engine::typed_value`].
    pub fn handle_key(&mut self, engine: &mut Engine, key: &KeyEvent) -> Transition {
        match self {
            PromptKind::Text(it) => it.handle_key(engine, key),
            PromptKind::Array(it) => it.handle_key(engine, key),
            PromptKind::Confirm(it) => it.handle_key(key),
            PromptKind::Select(it) => it.handle_key(key),
            PromptKind::MultiSelect(it) => it.handle_key(key),
            PromptKind::Search(it) => it.handle_key(engine, key),
            PromptKind::Pause(it) => it.handle_key(key),
        }
    }

    /// The current value, which is what gets validated and returned.
    #[must_use]
    pub fn value(&self, engine: &Engine) -> PromptValue {
        match self {
            PromptKind::Text(_) => PromptValue::Text(engine.typed_value.as_str().to_string()),
            PromptKind::Array(it) => it.value(),
            PromptKind::Confirm(it) => it.value(),
            PromptKind::Select(it) => it.value(),
            PromptKind::MultiSelect(it) => it.value(),
            PromptKind::Search(it) => it.value(),
            PromptKind::Pause(it) => it.value(),
        }
    }

    /// Shown next to the label once submitted.
    #[must_use]
    pub fn summary(&self, engine: &Engine) -> String {
        match self {
            PromptKind::Select(it) => it.summary(),
            PromptKind::MultiSelect(it) => it.summary(),
            PromptKind::Pause(_) => String::new(),
            _ => self.value(engine).to_display_string(),
        }
    }

    /// The lines between the label and the footer, as markup.
    #[must_use]
    pub fn render_body(&self, engine: &Engine, context: &RenderContext) -> Vec<String> {
        match self {
            PromptKind::Text(it) => it.render_body(engine, context),
            PromptKind::Array(it) => it.render_body(engine, context),
            PromptKind::Confirm(it) => it.render_body(context),
            PromptKind::Select(it) => it.render_body(context),
            PromptKind::MultiSelect(it) => it.render_body(context),
            PromptKind::Search(it) => it.render_body(engine, context),
            PromptKind::Pause(_) => vec![],
        }
    }

    /// Called before every paint, so lists shrink (and grow back) with the terminal.
    pub fn fit_to_terminal(&mut self, size: Size) {
        match self {
            PromptKind::Select(it) => it.fit_to_terminal(size),
            PromptKind::MultiSelect(it) => it.fit_to_terminal(size),
            PromptKind::Search(it) => it.fit_to_terminal(size),
            _ => {}
        }
    }

    /// Runs after [`Transition::Requery`].
    pub fn run_query(&mut self, engine: &Engine) {
        if let PromptKind::Search(it) = self {
            it.run_query(engine.typed_value.as_str());
        }
    }

    /// Receives the outcome of the child prompt opened with [`Transition::OpenChild`].
    ///
    /// # Errors
    ///
    /// Errors other than a cancelled or reverted child are passed on.
    pub fn accept_child(
        &mut self,
        engine: &mut Engine,
        outcome: Result<PromptValue, PromptError>,
    ) -> Result<(), PromptError> {
        match self {
            PromptKind::Array(it) => it.accept_child(engine, outcome),
            _ => outcome.map(|_| ()),
        }
    }
}
