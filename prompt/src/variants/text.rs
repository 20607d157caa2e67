// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Engine, KeyEvent, PromptError, PromptIo, PromptKind, PromptOptions,
            RenderContext, StyleSheet, Transition, display_width, escape_markup};
use crate::engine::prompt_builder_methods;

/// Value model of [`TextPrompt`]. The text itself is [`Engine::typed_value`].
#[derive(Debug, Clone, Default)]
pub struct TextModel {
    pub placeholder: Option<String>,
}

impl TextModel {
    pub fn handle_key(&mut self, engine: &mut Engine, key: &KeyEvent) -> Transition {
        if *key == KeyEvent::Enter {
            return Transition::Submit;
        }
        engine.typed_value.apply_key(key);
        Transition::Continue
    }

    #[must_use]
    pub fn render_body(&self, engine: &Engine, context: &RenderContext) -> Vec<String> {
        let mut line = render_input_line(engine, context);
        if let (true, Some(placeholder)) = (engine.typed_value.is_empty(), &self.placeholder) {
            line.push_str(&format!("<dim>{}</>", escape_markup(placeholder)));
        }
        vec![line]
    }
}

/// The pointer followed by the value being typed, scrolled horizontally to fit the
/// terminal width.
#[must_use]
pub fn render_input_line(engine: &Engine, context: &RenderContext) -> String {
    let sheet = &context.style_sheet;
    let pointer = escape_markup(sheet.highlight_marker);
    let room = usize::from(context.size.cols).saturating_sub(display_width(&pointer) + 1);
    format!(
        "{} {}",
        StyleSheet::paint(sheet.highlight_color, &pointer),
        engine.typed_value.render_with_cursor(room)
    )
}

/// A single line of text.
///
/// ```no_run
/// use r3bl_prompt::{PromptIo, TextPrompt};
///
/// # fn main() -> miette::Result<()> {
/// let name = TextPrompt::new("Project name?")
///     .default_value("my-app")
///     .validate(|value| {
///         let text = value.as_text().unwrap_or_default();
///         text.contains(' ').then(|| "No spaces, please.".to_string())
///     })
///     .prompt(&mut PromptIo::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TextPrompt {
    options: PromptOptions,
    default_value: String,
    placeholder: Option<String>,
}

impl TextPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            options: PromptOptions::new(label),
            default_value: String::new(),
            placeholder: None,
        }
    }

    prompt_builder_methods!();

    /// Pre-fills the input, and is what a non interactive run returns.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Shown dimmed while the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<String, PromptError> {
        let mut engine = Engine::new(self.options, io);
        engine.typed_value.replace(&self.default_value);
        let mut kind = PromptKind::Text(TextModel {
            placeholder: self.placeholder,
        });
        engine.run(&mut kind, io, None)?.try_into()
    }
}
