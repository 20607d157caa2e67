// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CANNOT_REVERT_MESSAGE, ChildRequest, DELETING_MESSAGE, DEVELOPMENT_MODE,
            DiffPaintView, ESCAPE_TIMEOUT, Frame, FrameBuilder, InputChunk, KeyEvent,
            LineBuffer, PromptError,
            PromptIo, PromptKind, PromptOptions, PromptState, PromptValue,
            REVERTED_MESSAGE, RenderContext, SEARCHING_MESSAGE, SessionMode, StyleSheet,
            TerminalSession, Transition, decode, escape_markup, split_complete_keys,
            split_keys};

/// Runs one prompt: owns its options, lifecycle state, typed text, and the view that
/// paints it. The widget specific state lives in the [`PromptKind`] passed to
/// [`Self::run()`].
#[derive(Debug)]
pub struct Engine {
    pub options: PromptOptions,
    /// The text the user is typing, for the widgets that take text.
    pub typed_value: LineBuffer,
    state: PromptState,
    error_message: Option<String>,
    cancel_message: String,
    /// Once a submit has been rejected, every key press validates again, so the error
    /// goes away as soon as the input is fixed.
    validated_once: bool,
    view: DiffPaintView,
    /// The start of a key that the last read cut off.
    held_input: InputChunk,
}

impl Engine {
    #[must_use]
    pub fn new(options: PromptOptions, io: &PromptIo) -> Self {
        let cancel_message = options.cancel_message.clone();
        Self {
            options,
            typed_value: LineBuffer::new(),
            state: PromptState::Initial,
            error_message: None,
            cancel_message,
            validated_once: false,
            view: DiffPaintView::new(io.output_device.clone(), io.color_support),
            held_input: InputChunk::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> PromptState { self.state }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> { self.error_message.as_deref() }

    /// Read keys until the prompt is submitted, cancelled or reverted, and return the
    /// value.
    ///
    /// - Not interactive: the widget's default value is validated and returned, and
    ///   nothing is written.
    /// - `parent_session` is the session of the prompt this one runs inside. Without one
    ///   (and unless [`PromptOptions::is_child`] is set) a raw mode session is entered
    ///   here and released on every exit path.
    ///
    /// # Errors
    ///
    /// - [`PromptError::Cancelled`] on `Ctrl+C`, or when input closes while the value is
    ///   invalid.
    /// - [`PromptError::Reverted`] on `Ctrl+U`, when reverting is allowed.
    /// - [`PromptError::NonInteractiveValidationFailed`] when not interactive and the
    ///   default value is invalid.
    /// - [`PromptError::Io`] when the terminal can't be read or written.
    pub fn run(
        &mut self,
        kind: &mut PromptKind,
        io: &mut PromptIo,
        parent_session: Option<&TerminalSession>,
    ) -> Result<PromptValue, PromptError> {
        let is_nested = parent_session.is_some() || self.options.is_child;
        if !is_nested && !io.terminal.is_interactive() {
            return self.resolve_non_interactive(kind);
        }

        let owned_session;
        let session = match parent_session {
            Some(session) => Some(session),
            None if !self.options.is_child => {
                owned_session = TerminalSession::enter(
                    io.terminal.clone(),
                    io.output_device.clone(),
                    SessionMode::Raw,
                )?;
                Some(&owned_session)
            }
            None => None,
        };

        self.paint(kind, io)?;
        self.set_state(PromptState::Active);

        let result = self.event_loop(kind, io, session);

        // A child leaves no trace, its parent repaints over the same lines.
        let finish_result = if self.options.is_child {
            self.view.clear(io.terminal.size().rows)
        } else {
            self.paint(kind, io)
        };

        match (result, finish_result) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(err.into()),
            (Err(err), _) => Err(err),
        }
    }

    fn event_loop(
        &mut self,
        kind: &mut PromptKind,
        io: &mut PromptIo,
        session: Option<&TerminalSession>,
    ) -> Result<PromptValue, PromptError> {
        loop {
            // Held bytes that nothing follows are a key on their own, eg: Escape.
            if !self.held_input.is_empty() && !io.input.poll_readable(ESCAPE_TIMEOUT)? {
                let held = std::mem::take(&mut self.held_input);
                if let Some(value) = self.handle_tokens(kind, io, session, split_keys(&held))? {
                    return Ok(value);
                }
                continue;
            }

            let Some(chunk) = io.input.read_chunk()? else {
                return self.resolve_closed_input(kind);
            };
            let mut bytes = std::mem::take(&mut self.held_input);
            bytes.extend_from_slice(&chunk);
            let (tokens, held) = split_complete_keys(&bytes);
            self.held_input = InputChunk::from_slice(held);
            if let Some(value) = self.handle_tokens(kind, io, session, tokens)? {
                return Ok(value);
            }
        }
    }

    fn handle_tokens<'a>(
        &mut self,
        kind: &mut PromptKind,
        io: &mut PromptIo,
        session: Option<&TerminalSession>,
        tokens: impl IntoIterator<Item = &'a [u8]>,
    ) -> Result<Option<PromptValue>, PromptError> {
        for token in tokens {
            // Unknown sequences are ignored.
            let Some(key) = decode(token) else {
                continue;
            };
            if let Some(value) = self.handle_key(kind, io, session, key)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Returns the value once the prompt is submitted.
    fn handle_key(
        &mut self,
        kind: &mut PromptKind,
        io: &mut PromptIo,
        session: Option<&TerminalSession>,
        key: KeyEvent,
    ) -> Result<Option<PromptValue>, PromptError> {
        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(message = "key", key = %key, state = %self.state);
        });

        if self.state == PromptState::Error {
            self.error_message = None;
            self.set_state(PromptState::Active);
        }

        let transition = match key {
            KeyEvent::CtrlC => return Err(self.cancel()),
            KeyEvent::CtrlU if !self.options.allow_value_clearance => {
                if self.options.on_revert.is_some() || io.allow_revert {
                    return Err(self.revert());
                }
                self.show_error(CANNOT_REVERT_MESSAGE.to_string());
                self.paint(kind, io)?;
                return Ok(None);
            }
            KeyEvent::CtrlU => {
                self.typed_value.clear();
                kind.handle_key(self, &key)
            }
            _ => kind.handle_key(self, &key),
        };

        match transition {
            Transition::Continue => {}
            Transition::Submit => match self.validate(kind.value(self)) {
                Ok(value) => {
                    self.set_state(PromptState::Submit);
                    return Ok(Some(value));
                }
                Err(err) => {
                    self.validated_once = true;
                    self.show_error(err.to_string());
                    self.paint(kind, io)?;
                    return Ok(None);
                }
            },
            Transition::Requery => self.requery(kind, io)?,
            Transition::OpenChild(request) => self.open_child(kind, io, session, *request)?,
        }

        if self.validated_once {
            if let Err(err) = self.validate(kind.value(self)) {
                self.show_error(err.to_string());
            }
        }

        self.paint(kind, io)?;
        Ok(None)
    }

    fn requery(&mut self, kind: &mut PromptKind, io: &PromptIo) -> Result<(), PromptError> {
        self.set_state(PromptState::Searching);
        self.paint(kind, io)?;
        kind.run_query(self);
        self.set_state(PromptState::Active);
        Ok(())
    }

    /// This prompt's lines are erased and the child paints in their place. Once it is
    /// done, this prompt is painted from scratch.
    fn open_child(
        &mut self,
        kind: &mut PromptKind,
        io: &mut PromptIo,
        session: Option<&TerminalSession>,
        request: ChildRequest,
    ) -> Result<(), PromptError> {
        let ChildRequest {
            kind: mut child_kind,
            mut options,
        } = request;

        self.set_state(PromptState::Deleting);
        self.paint(kind, io)?;
        self.view.clear(io.terminal.size().rows)?;

        options.is_child = true;
        let mut child = Engine::new(options, io);
        let outcome = child.run(&mut child_kind, io, session);

        self.set_state(PromptState::Active);
        kind.accept_child(self, outcome)
    }

    /// A blank value fails a required prompt. Otherwise the validator, if any, decides.
    ///
    /// # Errors
    ///
    /// [`PromptError::Required`] or [`PromptError::ValidationFailed`].
    pub fn validate(&self, value: PromptValue) -> Result<PromptValue, PromptError> {
        if self.options.required && value.is_blank() {
            return Err(PromptError::Required);
        }
        if let Some(message) = self.options.validator.as_ref().and_then(|it| it(&value)) {
            return Err(PromptError::ValidationFailed(message));
        }
        Ok(value)
    }

    fn resolve_non_interactive(&mut self, kind: &PromptKind) -> Result<PromptValue, PromptError> {
        match self.validate(kind.value(self)) {
            Ok(value) => {
                self.set_state(PromptState::Submit);
                Ok(value)
            }
            Err(err) => Err(PromptError::NonInteractiveValidationFailed {
                message: err.to_string(),
            }),
        }
    }

    /// Input closed before the user finished. A valid value is as good as submitted.
    fn resolve_closed_input(&mut self, kind: &PromptKind) -> Result<PromptValue, PromptError> {
        match self.validate(kind.value(self)) {
            Ok(value) => {
                self.set_state(PromptState::Submit);
                Ok(value)
            }
            Err(_) => {
                self.cancel_message = self.options.cancel_message.clone();
                self.set_state(PromptState::Cancel);
                Err(PromptError::Cancelled)
            }
        }
    }

    fn cancel(&mut self) -> PromptError {
        self.cancel_message = self.options.cancel_message.clone();
        self.set_state(PromptState::Cancel);
        if let Some(handler) = self.options.on_cancel.as_mut() {
            handler();
        }
        PromptError::Cancelled
    }

    fn revert(&mut self) -> PromptError {
        self.cancel_message = REVERTED_MESSAGE.to_string();
        self.set_state(PromptState::Cancel);
        if let Some(handler) = self.options.on_revert.as_mut() {
            handler();
        }
        PromptError::Reverted
    }

    fn show_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.set_state(PromptState::Error);
    }

    fn set_state(&mut self, state: PromptState) {
        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "state transition",
                label = %self.options.label,
                from = %self.state,
                to = %state
            );
        });
        self.state = state;
    }

    fn paint(&mut self, kind: &mut PromptKind, io: &PromptIo) -> std::io::Result<()> {
        let size = io.terminal.size();
        kind.fit_to_terminal(size);
        let context = RenderContext {
            style_sheet: io.style_sheet,
            size,
        };
        let frame = self.build_frame(kind, &context);
        self.view.render(&frame, size.rows)
    }

    /// The label line, then the widget's lines, then one footer line with the error, a
    /// progress note, or the hint. A finished prompt collapses to its label and answer.
    #[must_use]
    pub fn build_frame(&self, kind: &PromptKind, context: &RenderContext) -> Frame {
        let sheet = &context.style_sheet;
        let label = format!("<b>{}</>", escape_markup(&self.options.label));
        let header = |color, marker: &str| {
            format!("{} {label}", StyleSheet::paint(color, &escape_markup(marker)))
        };

        let mut builder = FrameBuilder::with_max_width(context.size.cols);
        match self.state {
            PromptState::Submit => {
                let mut line = header(sheet.submit_color, sheet.submit_marker);
                let summary = kind.summary(self);
                if !summary.is_empty() {
                    line.push_str(&format!(" <dim>{}</>", escape_markup(&summary)));
                }
                builder.push_line(line);
            }
            PromptState::Cancel => {
                builder.push_line(header(sheet.cancel_color, sheet.cancel_marker));
                builder.push_line(StyleSheet::paint(
                    sheet.cancel_color,
                    &escape_markup(&self.cancel_message),
                ));
            }
            _ => {
                builder.push_line(header(sheet.active_color, sheet.active_marker));
                for line in kind.render_body(self, context) {
                    builder.push_line(line);
                }
                if let Some(footer) = self.footer(sheet) {
                    builder.push_line(footer);
                }
            }
        }
        builder.build(self.state)
    }

    fn footer(&self, sheet: &StyleSheet) -> Option<String> {
        let hint = |text: &str| StyleSheet::paint(sheet.hint_color, &escape_markup(text));
        match (self.state, &self.error_message, &self.options.hint) {
            (PromptState::Error, Some(message), _) => {
                Some(StyleSheet::paint(sheet.error_color, &escape_markup(message)))
            }
            (PromptState::Searching, _, _) => Some(hint(SEARCHING_MESSAGE)),
            (PromptState::Deleting, _, _) => Some(hint(DELETING_MESSAGE)),
            (_, _, Some(text)) => Some(hint(text.as_str())),
            _ => None,
        }
    }
}
