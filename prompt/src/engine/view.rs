// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, CsiSequence, DEVELOPMENT_MODE, Frame, OutputDevice,
            format_markup, queue_commands_no_lock};
use std::io::{self, Write};

/// Repaints a prompt in place, with minimal cursor motion.
///
/// The cursor is assumed to be at the end of the last painted frame. Repainting moves to
/// column 1, moves up to the first line of that frame, erases to the end of the screen,
/// and writes the new frame. Nothing above the prompt is touched, so there is no flicker
/// and nothing scrolls into the scrollback buffer, as long as the frame fits the
/// terminal.
#[derive(Debug)]
pub struct DiffPaintView {
    output_device: OutputDevice,
    color_support: ColorSupport,
    previous: Option<Frame>,
}

impl DiffPaintView {
    #[must_use]
    pub fn new(output_device: OutputDevice, color_support: ColorSupport) -> Self {
        Self {
            output_device,
            color_support,
            previous: None,
        }
    }

    #[must_use]
    pub fn previous(&self) -> Option<&Frame> { self.previous.as_ref() }

    /// Paint `frame`, replacing the previous one. A frame with the same text as the
    /// previous one is not painted at all.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    pub fn render(&mut self, frame: &Frame, terminal_rows: u16) -> io::Result<()> {
        if self.previous.as_ref().is_some_and(|previous| previous.text == frame.text) {
            return Ok(());
        }

        let rows = usize::from(terminal_rows.max(1));
        {
            let writer = &mut *self.output_device.lock();
            let text = match &self.previous {
                None => frame.text.as_str(),
                Some(previous) => {
                    move_to_top_and_erase(writer, previous.height().min(rows))?;
                    frame.last_lines(rows)
                }
            };
            writer.write_all(format_markup(text, self.color_support).as_bytes())?;
            writer.flush()?;
        }

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "frame painted",
                state = %frame.state,
                height = frame.height()
            );
        });

        self.previous = Some(frame.clone());
        Ok(())
    }

    /// Erase the painted frame, and forget it. The next [`Self::render()`] writes its
    /// frame from the cursor position, as if it were the first.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    pub fn clear(&mut self, terminal_rows: u16) -> io::Result<()> {
        if let Some(previous) = self.previous.take() {
            let rows = usize::from(terminal_rows.max(1));
            let writer = &mut *self.output_device.lock();
            move_to_top_and_erase(writer, previous.height().min(rows))?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Forget the painted frame without erasing it.
    pub fn reset(&mut self) { self.previous = None; }
}

/// `height` is the number of lines to cover, including the one the cursor is on.
fn move_to_top_and_erase(writer: &mut dyn Write, height: usize) -> io::Result<()> {
    queue_commands_no_lock!(&mut *writer, CsiSequence::CursorHorizontalAbsolute(1));
    let lines_up = height.saturating_sub(1);
    if lines_up > 0 {
        let lines_up = u16::try_from(lines_up).unwrap_or(u16::MAX);
        queue_commands_no_lock!(&mut *writer, CsiSequence::CursorUp(lines_up));
    }
    queue_commands_no_lock!(&mut *writer, CsiSequence::EraseToEndOfScreen);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrameBuilder, OutputDeviceExt, PromptState};
    use pretty_assertions::assert_eq;

    fn frame(text: &str) -> Frame {
        let mut builder = FrameBuilder::new();
        for line in text.split('\n') {
            builder.push_line(line);
        }
        builder.build(PromptState::Active)
    }

    #[test]
    fn test_first_render_is_verbatim() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::NoColor);
        view.render(&frame("? Name\n> a"), 24).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "? Name\n> a");
    }

    #[test]
    fn test_idempotent_repaint() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::NoColor);
        let it = frame("? Name\n> a");

        view.render(&it, 24).unwrap();
        stdout_mock.clear();
        view.render(&it, 24).unwrap();

        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_repaint_moves_up_and_erases() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::NoColor);

        view.render(&frame("1\n2\n3"), 24).unwrap();
        stdout_mock.clear();
        view.render(&frame("x\ny"), 24).unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[1G\x1b[2A\x1b[0Jx\ny"
        );
    }

    #[test]
    fn test_single_line_repaint_does_not_move_up() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::NoColor);

        view.render(&frame("a"), 24).unwrap();
        stdout_mock.clear();
        view.render(&frame("b"), 24).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[1G\x1b[0Jb");
    }

    #[test]
    fn test_tall_frames_are_clipped_to_the_terminal() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::NoColor);

        view.render(&frame("1\n2\n3\n4\n5"), 3).unwrap();
        stdout_mock.clear();
        view.render(&frame("a\nb\nc\nd"), 3).unwrap();

        // Up 2, not 4: only 3 rows of the previous frame can still be on screen.
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[1G\x1b[2A\x1b[0Jb\nc\nd"
        );
    }

    #[test]
    fn test_clear_erases_and_forgets() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::NoColor);

        view.render(&frame("1\n2"), 24).unwrap();
        stdout_mock.clear();
        view.clear(24).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b[1G\x1b[1A\x1b[0J");
        assert!(view.previous().is_none());

        stdout_mock.clear();
        view.render(&frame("new"), 24).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "new");
    }

    #[test]
    fn test_markup_is_formatted_when_written() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let mut view = DiffPaintView::new(device, ColorSupport::Ansi);
        view.render(&frame("<b>hi</>"), 24).unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "hi"
        );
        assert_ne!(stdout_mock.get_copy_of_buffer_as_string(), "hi");
    }
}
