// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_SCROLL, Engine, KeyEvent, LIST_CHROME_LINES, LineEdit, PromptError,
            PromptIo, PromptKind, PromptOptions, PromptValue, RenderContext, ScrollWindow,
            SearchMatch, Size, Transition, render_input_line, render_list_row,
            render_scroll_indicator};
use crate::engine::prompt_builder_methods;
use std::fmt::Debug;

pub const NO_MATCHES_MESSAGE: &str = "No matches.";

/// Turns the typed query into matches.
pub type QueryFn = Box<dyn FnMut(&str) -> Vec<SearchMatch>>;

/// Value model of [`SearchPrompt`]. The query is [`Engine::typed_value`].
pub struct SearchModel {
    pub query_fn: QueryFn,
    pub matches: Vec<SearchMatch>,
    pub scroll: ScrollWindow,
    pub scroll_size: usize,
    /// The value while nothing is highlighted.
    pub default_match: Option<SearchMatch>,
}

impl Debug for SearchModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchModel")
            .field("matches", &self.matches)
            .field("scroll", &self.scroll)
            .field("scroll_size", &self.scroll_size)
            .field("default_match", &self.default_match)
            .finish_non_exhaustive()
    }
}

impl SearchModel {
    pub fn new(query_fn: QueryFn, scroll_size: usize) -> Self {
        Self {
            query_fn,
            matches: vec![],
            scroll: ScrollWindow::new(scroll_size, false),
            scroll_size,
            default_match: None,
        }
    }

    /// Highlights the default among the current matches, if it is one of them.
    pub fn highlight_default(&mut self) {
        let Some(default_match) = &self.default_match else {
            return;
        };
        if let Some(index) = self.matches.iter().position(|it| it == default_match) {
            self.scroll.highlight(Some(index));
            self.scroll.center(self.matches.len());
        }
    }

    /// Letters are part of the query here, so only arrows and `Ctrl+P`/`Ctrl+N` move the
    /// highlight.
    pub fn handle_key(&mut self, engine: &mut Engine, key: &KeyEvent) -> Transition {
        let total = self.matches.len();
        match key {
            KeyEvent::Enter if self.scroll.highlighted.is_some() => Transition::Submit,
            KeyEvent::Enter | KeyEvent::CtrlU => Transition::Requery,
            KeyEvent::Up | KeyEvent::CtrlP => {
                self.scroll.highlight_previous(total);
                Transition::Continue
            }
            KeyEvent::Down | KeyEvent::CtrlN => {
                self.scroll.highlight_next(total);
                Transition::Continue
            }
            _ => match engine.typed_value.apply_key(key) {
                LineEdit::Edited => Transition::Requery,
                LineEdit::Moved | LineEdit::Ignored => Transition::Continue,
            },
        }
    }

    /// Replaces the matches, with nothing highlighted.
    pub fn run_query(&mut self, query: &str) {
        self.matches = (self.query_fn)(query);
        self.scroll.reset();
    }

    /// The default when nothing is highlighted, or a blank match (which fails a required
    /// prompt) without one.
    #[must_use]
    pub fn value(&self) -> PromptValue {
        PromptValue::Labeled(
            self.scroll
                .highlighted
                .and_then(|index| self.matches.get(index))
                .or(self.default_match.as_ref())
                .cloned()
                .unwrap_or_default(),
        )
    }

    pub fn fit_to_terminal(&mut self, size: Size) {
        self.scroll.window_size = self.scroll_size.max(1);
        // One more line for the query.
        self.scroll.reduce_to_terminal(size.rows, LIST_CHROME_LINES + 1);
    }

    #[must_use]
    pub fn render_body(&self, engine: &Engine, context: &RenderContext) -> Vec<String> {
        let mut lines = vec![render_input_line(engine, context)];

        if self.matches.is_empty() {
            lines.push(format!("<dim>{NO_MATCHES_MESSAGE}</>"));
            return lines;
        }
        let visible = self.scroll.visible_range(self.matches.len());
        lines.extend(visible.clone().map(|index| {
            let highlighted = self.scroll.highlighted == Some(index);
            render_list_row(context, highlighted, None, &self.matches[index].label)
        }));
        lines.extend(render_scroll_indicator(&visible, self.matches.len()));
        lines
    }
}

/// Type a query, pick one of the matches the query function returns for it.
///
/// Every edit runs the query again and highlights nothing, Up/Down pick a match, and
/// Enter submits the highlighted one (or runs the query again when there is none).
///
/// ```no_run
/// use r3bl_prompt::{PromptIo, SearchMatch, SearchPrompt};
///
/// # fn main() -> miette::Result<()> {
/// let fruits = ["apple", "banana", "cherry"];
/// let picked = SearchPrompt::new("Fruit?", move |query| {
///     fruits
///         .iter()
///         .filter(|it| it.contains(query))
///         .map(|it| SearchMatch::from(*it))
///         .collect()
/// })
/// .prompt(&mut PromptIo::default())?;
/// println!("{}", picked.value);
/// # Ok(())
/// # }
/// ```
pub struct SearchPrompt {
    options: PromptOptions,
    query_fn: QueryFn,
    scroll_size: usize,
    default_match: Option<SearchMatch>,
}

impl Debug for SearchPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPrompt")
            .field("options", &self.options)
            .field("scroll_size", &self.scroll_size)
            .field("default_match", &self.default_match)
            .finish_non_exhaustive()
    }
}

impl SearchPrompt {
    /// Required by default.
    pub fn new(
        label: impl Into<String>,
        query_fn: impl FnMut(&str) -> Vec<SearchMatch> + 'static,
    ) -> Self {
        let mut options = PromptOptions::new(label);
        options.required = true;
        Self {
            options,
            query_fn: Box::new(query_fn),
            scroll_size: DEFAULT_SCROLL,
            default_match: None,
        }
    }

    prompt_builder_methods!();

    #[must_use]
    pub fn scroll(mut self, rows: usize) -> Self {
        self.scroll_size = rows;
        self
    }

    /// Returned when nothing is highlighted, eg: when stdin is not interactive. It starts
    /// out highlighted if the empty query returns it.
    #[must_use]
    pub fn default_value(mut self, default_match: impl Into<SearchMatch>) -> Self {
        self.default_match = Some(default_match.into());
        self
    }

    /// The query function runs once for the empty query before the first key.
    ///
    /// # Errors
    ///
    /// See [`Engine::run()`].
    pub fn prompt(self, io: &mut PromptIo) -> Result<SearchMatch, PromptError> {
        let mut model = SearchModel::new(self.query_fn, self.scroll_size);
        model.default_match = self.default_match;
        model.run_query("");
        model.highlight_default();
        let mut engine = Engine::new(self.options, io);
        engine.run(&mut PromptKind::Search(model), io, None)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::MockTerminal;
    use std::{cell::RefCell, rc::Rc, sync::Arc};

    const FRUITS: [&str; 4] = ["apple", "apricot", "banana", "cherry"];

    fn fruit_prompt(queries: Rc<RefCell<Vec<String>>>) -> SearchPrompt {
        SearchPrompt::new("Fruit", move |query| {
            queries.borrow_mut().push(query.to_string());
            FRUITS
                .iter()
                .filter(|it| it.starts_with(query))
                .map(|it| SearchMatch::from(*it))
                .collect()
        })
    }

    #[test]
    fn test_typing_requeries_and_enter_picks() {
        let queries = Rc::new(RefCell::new(vec![]));
        let (mut io, stdout_mock) = PromptIo::new_mock(["ap", "\x1b[B\x1b[B", "\n"]);

        let picked = fruit_prompt(queries.clone()).prompt(&mut io).unwrap();

        assert_eq!(picked, SearchMatch::from("apricot"));
        assert_eq!(*queries.borrow(), vec!["", "a", "ap"]);
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("Searching…"));
    }

    #[test]
    fn test_enter_without_highlight_requeries() {
        let queries = Rc::new(RefCell::new(vec![]));
        let (mut io, _stdout_mock) = PromptIo::new_mock(["b", "\n", "\x1b[B\n"]);

        let picked = fruit_prompt(queries.clone()).prompt(&mut io).unwrap();

        assert_eq!(picked.value, "banana");
        assert_eq!(*queries.borrow(), vec!["", "b", "b"]);
    }

    #[test]
    fn test_letters_are_typed_not_movement() {
        let queries = Rc::new(RefCell::new(vec![]));
        let (mut io, _stdout_mock) = PromptIo::new_mock(["ch", "\x0e\n"]);

        let picked = fruit_prompt(queries).prompt(&mut io).unwrap();

        assert_eq!(picked.value, "cherry");
    }

    #[test]
    fn test_no_matches_is_shown() {
        let queries = Rc::new(RefCell::new(vec![]));
        let (mut io, stdout_mock) = PromptIo::new_mock(["z"]);

        let result = fruit_prompt(queries).prompt(&mut io);

        assert!(matches!(result, Err(PromptError::Cancelled)));
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_cursor_moves_do_not_requery() {
        let queries = Rc::new(RefCell::new(vec![]));
        let (mut io, _stdout_mock) = PromptIo::new_mock(["a", "\x1b[D\x1b[C", "\x1b[B\n"]);

        fruit_prompt(queries.clone()).prompt(&mut io).unwrap();

        assert_eq!(*queries.borrow(), vec!["", "a"]);
    }

    #[test]
    fn test_default_is_highlighted_at_start() {
        let queries = Rc::new(RefCell::new(vec![]));
        let (mut io, _stdout_mock) = PromptIo::new_mock(["\n"]);

        let picked = fruit_prompt(queries)
            .default_value("banana")
            .prompt(&mut io)
            .unwrap();

        assert_eq!(picked, SearchMatch::from("banana"));
    }

    #[test]
    fn test_default_satisfies_required_when_not_interactive() {
        let queries = Rc::new(RefCell::new(vec![]));
        let terminal = Arc::new(MockTerminal::new(false));
        let (mut io, stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal);

        let picked = fruit_prompt(queries.clone())
            .default_value(SearchMatch::new("b", "banana"))
            .prompt(&mut io)
            .unwrap();

        assert_eq!(picked.value, "b");
        assert_eq!(*queries.borrow(), vec![""]);
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }
}
