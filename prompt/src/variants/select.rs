// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_SCROLL, Engine, KeyEvent, LIST_CHROME_LINES, PromptError, PromptIo,
            PromptKind, PromptOptions, PromptValue, RenderContext, ScrollWindow, Size,
            Transition, render_list_row, render_scroll_indicator};
use crate::engine::prompt_builder_methods;

pub const NO_OPTIONS_MESSAGE: &str = "No options.";

/// One option of a list widget: the `value` returned when it is picked, and the `label`
/// shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<&str> for Choice {
    fn from(it: &str) -> Self { Self::new(it, it) }
}

impl From<String> for Choice {
    fn from(it: String) -> Self { Self::new(it.clone(), it) }
}

impl From<(&str, &str)> for Choice {
    fn from((value, label): (&str, &str)) -> Self { Self::new(value, label) }
}

/// Value model of [`SelectPrompt`].
#[derive(Debug, Clone)]
pub struct SelectModel {
    pub choices: Vec<Choice>,
    pub scroll: ScrollWindow,
    /// The window size asked for, before it is fitted to the terminal.
    pub scroll_size: usize,
}

impl SelectModel {
    /// Highlights the choice whose value is `default_value`, or the first one.
    #[must_use]
    pub fn new(
        choices: Vec<Choice>,
        default_value: Option<&str>,
        scroll_size: usize,
        required: bool,
    ) -> Self {
        let mut scroll = ScrollWindow::new(scroll_size, required);
        let default_index = default_value
            .and_then(|value| choices.iter().position(|it| it.value == value))
            .or_else(|| (!choices.is_empty()).then_some(0));
        scroll.highlight(default_index);
        scroll.center(choices.len());
        Self {
            choices,
            scroll,
            scroll_size,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        let total = self.choices.len();
        match key {
            KeyEvent::Enter => return Transition::Submit,
            KeyEvent::Home => self.scroll.highlight_first(total),
            KeyEvent::End => self.scroll.highlight_last(total),
            it if it.is_list_previous() => self.scroll.highlight_previous(total),
            it if it.is_list_next() => self.scroll.highlight_next(total),
            _ => {}
        }
        Transition::Continue
    }

    #[must_use]
    pub fn highlighted_choice(&self) -> Option<&Choice> {
        self.scroll.highlighted.and_then(|index| self.choices.get(index))
    }

    /// An empty string when nothing is highlighted.
    #[must_use]
    pub fn value(&self) -> PromptValue {
        PromptValue::Text(
            self.highlighted_choice()
                .map(|it| it.value.clone())
                .unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn summary(&self) -> String {
        self.highlighted_choice()
            .map(|it| it.label.clone())
            .unwrap_or_default()
    }

    pub fn fit_to_terminal(&mut self, size: Size) {
        self.scroll.window_size = self.scroll_size.max(1);
        self.scroll.reduce_to_terminal(size.rows, LIST_CHROME_LINES);
    }

    #[must_use]
    pub fn render_body(&self, context: &RenderContext) -> Vec<String> {
        if self.choices.is_empty() {
            return vec![format!("<dim>{NO_OPTIONS_MESSAGE}</>")];
        }
        let visible = self.scroll.visible_range(self.choices.len());
        let mut lines: Vec<String> = visible
            .clone()
            .map(|index| {
                let highlighted = self.scroll.highlighted == Some(index);
                render_list_row(context, highlighted, None, &self.choices[index].label)
            })
            .collect();
        lines.extend(render_scroll_indicator(&visible, self.choices.len()));
        lines
    }
}

/// Pick one of a list of options. Returns the picked option's value.
///
/// Up/Down (also Left/Right, vi keys `h` `j` `k` `l`, and `Ctrl+P`/`Ctrl+N`) move the
/// highlight, Home/End jump to the ends, Enter picks.
#[derive(Debug)]
pub struct SelectPrompt {
    options: PromptOptions,
    choices: Vec<Choice>,
    default_value: Option<String>,
    scroll_size: usize,
}

impl SelectPrompt {
    /// Required by default. With [`Self::optional()`] moving past either end of the list
    /// highlights nothing, and an empty string is returned.
    pub fn new<I, C>(label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        let mut options = PromptOptions::new(label);
        options.required = true;
        Self {
            options,
            choices: choices.into_iter().map(Into::into).collect(),
            default_value: None,
            scroll_size: DEFAULT_SCROLL,
        }
    }

    prompt_builder_methods!();

    /// The value of the option highlighted at the start, and returned by a non
    /// interactive run.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Rows shown at once. The terminal height caps this.
    #[must_use]
    pub fn scroll(mut self, rows: usize) -> Self {
        self.scroll_size = rows;
        self
    }

    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<String, PromptError> {
        let model = SelectModel::new(
            self.choices,
            self.default_value.as_deref(),
            self.scroll_size,
            self.options.required,
        );
        let mut engine = Engine::new(self.options, io);
        engine.run(&mut PromptKind::Select(model), io, None)?.try_into()
    }
}
