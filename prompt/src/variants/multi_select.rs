// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Choice, DEFAULT_SCROLL, Engine, KeyEvent, LIST_CHROME_LINES,
            NO_OPTIONS_MESSAGE, PromptError, PromptIo, PromptKind, PromptOptions,
            PromptValue, RenderContext, ScrollWindow, Size, Transition,
            render_list_row, render_scroll_indicator};
use crate::engine::prompt_builder_methods;

/// Value model of [`MultiSelectPrompt`]. `selected[i]` is the checkbox of
/// `choices[i]`.
#[derive(Debug, Clone)]
pub struct MultiSelectModel {
    pub choices: Vec<Choice>,
    pub selected: Vec<bool>,
    pub scroll: ScrollWindow,
    pub scroll_size: usize,
}

impl MultiSelectModel {
    /// The highlight always rests on a row, whether or not the prompt is required.
    #[must_use]
    pub fn new(choices: Vec<Choice>, default_values: &[String], scroll_size: usize) -> Self {
        let selected = choices
            .iter()
            .map(|choice| default_values.contains(&choice.value))
            .collect();
        let mut scroll = ScrollWindow::new(scroll_size, true);
        scroll.highlight_first(choices.len());
        Self {
            choices,
            selected,
            scroll,
            scroll_size,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        let total = self.choices.len();
        match key {
            KeyEvent::Enter => return Transition::Submit,
            KeyEvent::Char(' ') => {
                if let Some(index) = self.scroll.highlighted {
                    if let Some(it) = self.selected.get_mut(index) {
                        *it = !*it;
                    }
                }
            }
            KeyEvent::CtrlA => {
                let select_all = !self.selected.iter().all(|it| *it);
                self.selected.iter_mut().for_each(|it| *it = select_all);
            }
            KeyEvent::Home => self.scroll.highlight_first(total),
            KeyEvent::End => self.scroll.highlight_last(total),
            it if it.is_list_previous() => self.scroll.highlight_previous(total),
            it if it.is_list_next() => self.scroll.highlight_next(total),
            _ => {}
        }
        Transition::Continue
    }

    fn selected_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices
            .iter()
            .zip(&self.selected)
            .filter_map(|(choice, selected)| selected.then_some(choice))
    }

    /// Selected values, in the order of the options (not the order they were checked).
    #[must_use]
    pub fn value(&self) -> PromptValue {
        PromptValue::List(self.selected_choices().map(|it| it.value.clone()).collect())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        self.selected_choices()
            .map(|it| it.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
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
        let sheet = &context.style_sheet;
        let visible = self.scroll.visible_range(self.choices.len());
        let mut lines: Vec<String> = visible
            .clone()
            .map(|index| {
                let marker = if self.selected[index] {
                    sheet.checked_marker
                } else {
                    sheet.unchecked_marker
                };
                let highlighted = self.scroll.highlighted == Some(index);
                render_list_row(context, highlighted, Some(marker), &self.choices[index].label)
            })
            .collect();
        lines.extend(render_scroll_indicator(&visible, self.choices.len()));
        lines
    }
}

/// Check any number of options. Space toggles the highlighted one, `Ctrl+A` toggles all
/// of them, Enter submits. Movement keys are those of [`crate::SelectPrompt`].
#[derive(Debug)]
pub struct MultiSelectPrompt {
    options: PromptOptions,
    choices: Vec<Choice>,
    default_values: Vec<String>,
    scroll_size: usize,
}

impl MultiSelectPrompt {
    /// Not required by default: submitting with nothing checked returns an empty list.
    pub fn new<I, C>(label: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self {
            options: PromptOptions::new(label),
            choices: choices.into_iter().map(Into::into).collect(),
            default_values: vec![],
            scroll_size: DEFAULT_SCROLL,
        }
    }

    prompt_builder_methods!();

    /// Values checked at the start.
    #[must_use]
    pub fn default_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn scroll(mut self, rows: usize) -> Self {
        self.scroll_size = rows;
        self
    }

    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<Vec<String>, PromptError> {
        let model = MultiSelectModel::new(self.choices, &self.default_values, self.scroll_size);
        let mut engine = Engine::new(self.options, io);
        engine.run(&mut PromptKind::MultiSelect(model), io, None)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> { items.iter().map(|it| it.to_string()).collect() }

    #[test]
    fn test_output_is_in_option_order() {
        // Check "c" first, then "a".
        let (mut io, _stdout_mock) = PromptIo::new_mock(["\x1b[B\x1b[B \x1b[H ", "\n"]);
        let values = MultiSelectPrompt::new("Pick", ["a", "b", "c"])
            .prompt(&mut io)
            .unwrap();
        assert_eq!(values, strings(&["a", "c"]));
    }

    #[test]
    fn test_ctrl_a_toggles_all() {
        let (mut io, _stdout_mock) = PromptIo::new_mock(["\x01\n"]);
        let values = MultiSelectPrompt::new("Pick", ["a", "b"])
            .default_values(["b"])
            .prompt(&mut io)
            .unwrap();
        assert_eq!(values, strings(&["a", "b"]));

        let (mut io, _stdout_mock) = PromptIo::new_mock(["\x01\n"]);
        let values = MultiSelectPrompt::new("Pick", ["a", "b"])
            .default_values(["a", "b"])
            .prompt(&mut io)
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_required_needs_one_checked() {
        let (mut io, stdout_mock) = PromptIo::new_mock(["\n", " \n"]);
        let values = MultiSelectPrompt::new("Pick", ["a", "b"])
            .required()
            .prompt(&mut io)
            .unwrap();
        assert_eq!(values, strings(&["a"]));
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("Required."));
    }

    #[test]
    fn test_highlight_wraps_without_passing_through_nothing() {
        let mut model = MultiSelectModel::new(
            vec![Choice::from("a"), Choice::from("b")],
            &[],
            5,
        );
        model.handle_key(&KeyEvent::Up);
        assert_eq!(model.scroll.highlighted, Some(1));
    }
}
