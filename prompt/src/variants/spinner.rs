// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DELAY_UNIT, DiffPaintView, FrameBuilder, MarkupColor, PromptIo, PromptState,
            SessionMode, SpinnerStyle, SpinnerTemplate, TerminalSession, escape_markup,
            format_markup, render_tick};
use miette::IntoDiagnostic;
use std::{future::Future, io::Write, time::Duration};
use tokio::{sync::{broadcast, oneshot},
            time::interval};

/// Shows an animation while a future runs, then erases it.
///
/// The animation runs in its own tokio task, ticking every [`Self::tick_delay()`], while
/// the work is awaited on the caller's task. When the work is done the animation task is
/// told to shut down, erases its line, and signals back, and only then does
/// [`Self::spin()`] return.
///
/// ```no_run
/// use r3bl_prompt::{PromptIo, Spinner};
///
/// # async fn example() -> miette::Result<()> {
/// let io = PromptIo::default();
/// let answer = Spinner::new("Thinking...")
///     .spin(&io, async { 42 })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Spinner {
    pub message: String,
    pub final_message: Option<String>,
    pub tick_delay: Duration,
    pub style: SpinnerStyle,
}

impl Spinner {
    /// ANSI escape sequences are stripped from `message`.
    pub fn new(message: impl AsRef<str>) -> Self {
        Self {
            message: strip_ansi_escapes::strip_str(message.as_ref()),
            final_message: None,
            tick_delay: DELAY_UNIT,
            style: SpinnerStyle::default(),
        }
    }

    #[must_use]
    pub fn tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    #[must_use]
    pub fn template(mut self, template: SpinnerTemplate) -> Self {
        self.style.template = template;
        self
    }

    #[must_use]
    pub fn color(mut self, color: MarkupColor) -> Self {
        self.style.color = color;
        self
    }

    /// Printed on its own line, where the animation was.
    #[must_use]
    pub fn final_message(mut self, message: impl AsRef<str>) -> Self {
        self.final_message = Some(strip_ansi_escapes::strip_str(message.as_ref()));
        self
    }

    /// Await `work` with the animation showing, and return its output. When `io` is not
    /// interactive, or stdout is piped, `work` is awaited without any output.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal session can't be entered or restored.
    pub async fn spin<F>(self, io: &PromptIo, work: F) -> miette::Result<F::Output>
    where
        F: Future,
    {
        if !io.terminal.is_interactive() || !io.terminal.is_output_terminal() {
            return Ok(work.await);
        }

        let session = TerminalSession::enter(
            io.terminal.clone(),
            io.output_device.clone(),
            SessionMode::HiddenCursor,
        )
        .into_diagnostic()?;

        // Subscribe before spawning, so a shutdown sent right away is not missed.
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
        let (shutdown_complete_sender, shutdown_complete_receiver) = oneshot::channel::<()>();

        // These are all moved into the spawn block.
        let mut view = DiffPaintView::new(io.output_device.clone(), io.color_support);
        let terminal = io.terminal.clone();
        let message = self.message.clone();
        let style = self.style;
        let tick_delay = self.tick_delay;

        tokio::spawn(async move {
            let mut interval = interval(tick_delay);

            // Count is used to pick the glyph.
            let mut count = 0;

            loop {
                tokio::select! {
                    // This branch is cancel safe because recv is cancel safe.
                    _ = shutdown_receiver.recv() => {
                        // We don't care about the result of this operation.
                        view.clear(terminal.size().rows).ok();
                        shutdown_complete_sender.send(()).ok();
                        break;
                    }

                    // This branch is cancel safe because tick is cancel safe.
                    _ = interval.tick() => {
                        let size = terminal.size();
                        let mut builder = FrameBuilder::new();
                        builder.push_line(render_tick(&style, &message, count, size.cols));
                        // We don't care about the result of this operation.
                        view.render(&builder.build(PromptState::Active), size.rows).ok();
                        count += 1;
                    }
                }
            }
        });

        let output = work.await;

        // We don't care about the result of these operations, the task may be gone.
        shutdown_sender.send(()).ok();
        shutdown_complete_receiver.await.ok();

        if let Some(final_message) = &self.final_message {
            let text = format_markup(&format!("{}\n", escape_markup(final_message)), io.color_support);
            let writer = &mut *io.output_device.lock();
            writer.write_all(text.as_bytes()).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }

        session.release().into_diagnostic()?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTerminal;
    use std::sync::Arc;

    const QUANTUM: Duration = Duration::from_millis(10);

    #[tokio::test]
    async fn test_spinner_animates_then_erases() {
        let (io, stdout_mock) = PromptIo::new_mock(Vec::<&str>::new());

        let output = Spinner::new("Loading")
            .tick_delay(QUANTUM)
            .spin(&io, async {
                tokio::time::sleep(QUANTUM * 5).await;
                42
            })
            .await
            .unwrap();

        assert_eq!(output, 42);
        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert!(raw.contains("⠋ Loading"));
        assert!(raw.contains("⠙ Loading"));
        // Erased, then the cursor is shown again.
        assert!(raw.ends_with("\x1b[0J\x1b[?25h"));
    }

    #[tokio::test]
    async fn test_final_message() {
        let (io, stdout_mock) = PromptIo::new_mock(Vec::<&str>::new());

        Spinner::new("Loading")
            .tick_delay(QUANTUM)
            .final_message("Done!")
            .spin(&io, async {})
            .await
            .unwrap();

        assert!(stdout_mock.get_copy_of_buffer_as_string().ends_with("Done!\n\x1b[?25h"));
    }

    #[tokio::test]
    async fn test_not_interactive_is_silent() {
        let terminal = Arc::new(MockTerminal::new(false));
        let (io, stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal.clone());

        let output = Spinner::new("Loading").spin(&io, async { "done" }).await.unwrap();

        assert_eq!(output, "done");
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
        assert_eq!(terminal.enter_count(), 0);
    }

    #[tokio::test]
    async fn test_piped_stdout_is_silent() {
        let mut terminal = MockTerminal::new(true);
        terminal.output_terminal = false;
        let terminal = Arc::new(terminal);
        let (io, stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal.clone());

        let output = Spinner::new("Loading")
            .tick_delay(QUANTUM)
            .spin(&io, async {
                tokio::time::sleep(QUANTUM * 3).await;
                7
            })
            .await
            .unwrap();

        assert_eq!(output, 7);
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }

    #[tokio::test]
    async fn test_does_not_enter_raw_mode() {
        let terminal = Arc::new(MockTerminal::new(true));
        let (io, _stdout_mock) =
            PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal.clone());

        Spinner::new("Loading").tick_delay(QUANTUM).spin(&io, async {}).await.unwrap();

        assert_eq!(terminal.enter_count(), 0);
        assert_eq!(terminal.restore_count(), 0);
    }
}
