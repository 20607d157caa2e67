// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_CANCEL_MESSAGE, DELAY_UNIT, DEVELOPMENT_MODE, DiffPaintView,
            EventHandler, FrameBuilder, KeyEvent, PromptError, PromptIo, PromptState,
            SessionMode, SpinnerStyle, StyleSheet, TerminalSession, decode,
            escape_markup, render_tick, split_keys};
use std::{fmt::Debug, time::Duration};

/// Polled once per tick. Returns `true` when the wait is over.
pub type WaitPredicate = Box<dyn FnMut() -> bool>;

/// Shows an animation until a condition holds. `Ctrl+C` stops waiting.
///
/// Between polls of the predicate the input is polled for up to one tick, so `Ctrl+C`
/// is noticed right away, not on the next poll.
///
/// ```no_run
/// use r3bl_prompt::{PromptIo, WaitPrompt};
/// use std::path::Path;
///
/// # fn main() -> miette::Result<()> {
/// WaitPrompt::new("Waiting for the lock file to go away", || {
///     !Path::new("/tmp/app.lock").exists()
/// })
/// .prompt(&mut PromptIo::default())?;
/// # Ok(())
/// # }
/// ```
pub struct WaitPrompt {
    label: String,
    hint: Option<String>,
    cancel_message: String,
    on_cancel: Option<EventHandler>,
    predicate: WaitPredicate,
    tick_delay: Duration,
    style: SpinnerStyle,
}

impl Debug for WaitPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitPrompt")
            .field("label", &self.label)
            .field("hint", &self.hint)
            .field("cancel_message", &self.cancel_message)
            .field("tick_delay", &self.tick_delay)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl WaitPrompt {
    pub fn new(label: impl Into<String>, predicate: impl FnMut() -> bool + 'static) -> Self {
        Self {
            label: label.into(),
            hint: None,
            cancel_message: DEFAULT_CANCEL_MESSAGE.to_string(),
            on_cancel: None,
            predicate: Box::new(predicate),
            tick_delay: DELAY_UNIT,
            style: SpinnerStyle::default(),
        }
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn cancel_message(mut self, message: impl Into<String>) -> Self {
        self.cancel_message = message.into();
        self
    }

    /// Runs when `Ctrl+C` is pressed. The prompt still returns
    /// [`PromptError::Cancelled`].
    #[must_use]
    pub fn on_cancel(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    #[must_use]
    pub fn style(mut self, style: SpinnerStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns `true` once the predicate does. When `io` is not interactive this polls
    /// silently, and can't be cancelled.
    ///
    /// # Errors
    ///
    /// [`PromptError::Cancelled`] on `Ctrl+C`, [`PromptError::Io`] when the terminal
    /// can't be read or written.
    pub fn prompt(mut self, io: &mut PromptIo) -> Result<bool, PromptError> {
        if !io.terminal.is_interactive() {
            while !(self.predicate)() {
                std::thread::sleep(self.tick_delay);
            }
            return Ok(true);
        }

        let _session = TerminalSession::enter(
            io.terminal.clone(),
            io.output_device.clone(),
            SessionMode::Raw,
        )?;
        let mut view = DiffPaintView::new(io.output_device.clone(), io.color_support);
        let mut input_closed = false;
        let mut count = 0;

        let final_state = loop {
            if (self.predicate)() {
                break PromptState::Submit;
            }

            let size = io.terminal.size();
            view.render(&self.build_frame(io, PromptState::Active, count), size.rows)?;
            count += 1;

            // Once input is closed there is nothing left to poll, so just sleep.
            if input_closed {
                std::thread::sleep(self.tick_delay);
                continue;
            }
            if !io.input.poll_readable(self.tick_delay)? {
                continue;
            }
            match io.input.read_chunk()? {
                None => input_closed = true,
                Some(chunk) => {
                    let ctrl_c = split_keys(&chunk)
                        .iter()
                        .any(|token| decode(token) == Some(KeyEvent::CtrlC));
                    if ctrl_c {
                        break PromptState::Cancel;
                    }
                }
            }
        };

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(message = "wait finished", label = %self.label, state = %final_state);
        });

        let size = io.terminal.size();
        view.render(&self.build_frame(io, final_state, count), size.rows)?;

        if final_state == PromptState::Cancel {
            if let Some(handler) = self.on_cancel.as_mut() {
                handler();
            }
            return Err(PromptError::Cancelled);
        }
        Ok(true)
    }

    fn build_frame(&self, io: &PromptIo, state: PromptState, count: usize) -> crate::Frame {
        let sheet = &io.style_sheet;
        let label = escape_markup(&self.label);
        let mut builder = FrameBuilder::with_max_width(io.terminal.size().cols);
        match state {
            PromptState::Submit => {
                let marker = StyleSheet::paint(sheet.submit_color, &escape_markup(sheet.submit_marker));
                builder.push_line(format!("{marker} <b>{label}</>"));
            }
            PromptState::Cancel => {
                let marker = StyleSheet::paint(sheet.cancel_color, &escape_markup(sheet.cancel_marker));
                builder.push_line(format!("{marker} <b>{label}</>"));
                builder.push_line(StyleSheet::paint(
                    sheet.cancel_color,
                    &escape_markup(&self.cancel_message),
                ));
            }
            _ => {
                builder.push_line(render_tick(&self.style, &self.label, count, io.terminal.size().cols));
                if let Some(hint) = &self.hint {
                    builder.push_line(StyleSheet::paint(sheet.hint_color, &escape_markup(hint)));
                }
            }
        }
        builder.build(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;
    use std::{cell::Cell, rc::Rc, sync::Arc};

    const QUANTUM: Duration = Duration::from_millis(1);

    #[test]
    fn test_returns_when_predicate_holds() {
        let (mut io, stdout_mock) = PromptIo::new_mock(Vec::<&str>::new());
        let polls = Rc::new(Cell::new(0));
        let polls_clone = polls.clone();

        let result = WaitPrompt::new("Waiting", move || {
            polls_clone.set(polls_clone.get() + 1);
            polls_clone.get() >= 3
        })
        .tick_delay(QUANTUM)
        .prompt(&mut io);

        assert!(result.unwrap());
        assert_eq!(polls.get(), 3);
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("⠋ Waiting"));
        assert!(output.contains("✔ Waiting\n"));
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let (mut io, stdout_mock) = PromptIo::new_mock(["x\x03"]);
        let cancelled = Rc::new(Cell::new(false));
        let cancelled_clone = cancelled.clone();

        let result = WaitPrompt::new("Waiting", || false)
            .tick_delay(QUANTUM)
            .on_cancel(move || cancelled_clone.set(true))
            .prompt(&mut io);

        assert!(matches!(result, Err(PromptError::Cancelled)));
        assert!(cancelled.get());
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("Cancelled."));
    }

    #[test]
    fn test_restores_terminal() {
        let terminal = Arc::new(MockTerminal::new(true));
        let (mut io, _stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal.clone());

        WaitPrompt::new("Waiting", || true).prompt(&mut io).unwrap();

        assert_eq!(terminal.enter_count(), 1);
        assert_eq!(terminal.restore_count(), 1);
    }

    #[test]
    fn test_not_interactive_is_silent() {
        let terminal = Arc::new(MockTerminal::new(false));
        let (mut io, stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal);

        assert!(WaitPrompt::new("Waiting", || true).prompt(&mut io).unwrap());
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }
}
