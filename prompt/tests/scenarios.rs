// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end runs of the widgets against scripted input and a captured output device.

use pretty_assertions::assert_eq;
use r3bl_prompt::{ArrayPrompt, ConfirmPrompt, MockTerminal, MultiSelectPrompt,
                  PausePrompt, PromptError, PromptIo, SearchMatch, SearchPrompt,
                  SelectPrompt, TextPrompt};
use std::sync::Arc;

fn non_interactive_io() -> (PromptIo, r3bl_prompt::StdoutMock, Arc<MockTerminal>) {
    let terminal = Arc::new(MockTerminal::new(false));
    let (io, stdout_mock) =
        PromptIo::new_mock_with_terminal(Vec::<&str>::new(), terminal.clone());
    (io, stdout_mock, terminal)
}

#[test]
fn scenario_a_required_text() {
    let (mut io, _stdout_mock) = PromptIo::new_mock(["ab", "\n"]);
    let value = TextPrompt::new("Name").required().prompt(&mut io).unwrap();
    assert_eq!(value, "ab");
}

#[test]
fn scenario_b_confirm_no() {
    let (mut io, _stdout_mock) = PromptIo::new_mock(["n", "\n"]);
    let value = ConfirmPrompt::new("Continue?")
        .default_value(true)
        .prompt(&mut io)
        .unwrap();
    assert!(!value);
}

#[test]
fn scenario_c_select_from_default() {
    let (mut io, _stdout_mock) = PromptIo::new_mock(["\x1b[B", "\n"]);
    let value = SelectPrompt::new("Letter", ["a", "b", "c"])
        .default_value("b")
        .prompt(&mut io)
        .unwrap();
    assert_eq!(value, "c");
}

#[test]
fn scenario_d_array_entries() {
    let (mut io, _stdout_mock) = PromptIo::new_mock(["x", "\n", "y", "\n", "\n"]);
    let value = ArrayPrompt::new("Tags").prompt(&mut io).unwrap();
    assert_eq!(value, vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn scenario_e_non_interactive_returns_defaults_silently() {
    let (mut io, stdout_mock, terminal) = non_interactive_io();

    let text = TextPrompt::new("Name")
        .default_value("Ferris")
        .required()
        .prompt(&mut io)
        .unwrap();
    let confirm = ConfirmPrompt::new("Ok?").default_value(false).prompt(&mut io).unwrap();
    let select = SelectPrompt::new("Letter", ["a", "b"])
        .default_value("b")
        .prompt(&mut io)
        .unwrap();
    let multi = MultiSelectPrompt::new("Letters", ["a", "b", "c"])
        .default_values(["c", "a"])
        .prompt(&mut io)
        .unwrap();
    let array = ArrayPrompt::new("Tags")
        .default_values(["t"])
        .prompt(&mut io)
        .unwrap();
    let paused = PausePrompt::default().prompt(&mut io).unwrap();

    assert_eq!(text, "Ferris");
    assert!(!confirm);
    assert_eq!(select, "b");
    assert_eq!(multi, vec!["a".to_string(), "c".to_string()]);
    assert_eq!(array, vec!["t".to_string()]);
    assert!(paused);

    assert!(stdout_mock.get_copy_of_buffer().is_empty());
    assert_eq!(terminal.enter_count(), 0);
}

#[test]
fn non_interactive_invalid_default_is_reported() {
    let (mut io, stdout_mock, _terminal) = non_interactive_io();

    let result = TextPrompt::new("Name").required().prompt(&mut io);

    match result {
        Err(PromptError::NonInteractiveValidationFailed { message }) => {
            assert_eq!(message, "Required.");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(stdout_mock.get_copy_of_buffer().is_empty());
}

#[test]
fn search_picks_a_labeled_match() {
    let (mut io, _stdout_mock) = PromptIo::new_mock(["ru", "\x1b[B", "\n"]);
    let languages = [("rs", "Rust"), ("rb", "Ruby"), ("py", "Python")];

    let picked = SearchPrompt::new("Language", move |query| {
        languages
            .iter()
            .filter(|(_, label)| label.to_lowercase().contains(&query.to_lowercase()))
            .map(|(value, label)| SearchMatch::new(*value, *label))
            .collect()
    })
    .prompt(&mut io)
    .unwrap();

    assert_eq!(picked, SearchMatch::new("rs", "Rust"));
}

#[test]
fn child_prompt_does_not_toggle_raw_mode_again() {
    let terminal = Arc::new(MockTerminal::new(true));
    let (mut io, _stdout_mock) = PromptIo::new_mock_with_terminal(
        ["a\n", "b\n", "\x1b[Z", "\n", "\n"],
        terminal.clone(),
    );

    let value = ArrayPrompt::new("Tags").prompt(&mut io).unwrap();

    assert_eq!(value, vec!["b".to_string()]);
    assert_eq!(terminal.enter_count(), 1);
    assert_eq!(terminal.restore_count(), 1);
}

#[test]
fn every_prompt_restores_the_terminal() {
    let terminal = Arc::new(MockTerminal::new(true));
    let (mut io, stdout_mock) = PromptIo::new_mock_with_terminal(
        ["hi\n", "\x03", "\n"],
        terminal.clone(),
    );

    TextPrompt::new("One").prompt(&mut io).unwrap();
    let cancelled = ConfirmPrompt::new("Two").prompt(&mut io);
    PausePrompt::default().prompt(&mut io).unwrap();

    assert!(matches!(cancelled, Err(PromptError::Cancelled)));
    assert_eq!(terminal.enter_count(), 3);
    assert_eq!(terminal.restore_count(), 3);
    let output = stdout_mock.get_copy_of_buffer_as_string();
    assert_eq!(output.matches("\x1b[?25l").count(), 3);
    assert_eq!(output.matches("\x1b[?25h").count(), 3);
}

#[test]
fn frames_stay_within_a_small_terminal() {
    let terminal = Arc::new(MockTerminal::with_size(
        true,
        r3bl_prompt::Size { cols: 20, rows: 6 },
    ));
    let (mut io, stdout_mock) = PromptIo::new_mock_with_terminal(["\n"], terminal);
    let choices: Vec<String> = (0..30).map(|it| format!("option number {it}")).collect();

    SelectPrompt::new("Pick", choices).scroll(10).prompt(&mut io).unwrap();

    // The first frame: label, 2 rows (6 rows minus 4 lines of chrome), indicator.
    let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    let first_frame: Vec<&str> = output.split("✔").next().unwrap().lines().collect();
    assert_eq!(first_frame, vec!["? Pick", "› option number 0", "  option number 1", "↓"]);
}

#[test]
fn long_input_never_wraps_on_a_narrow_terminal() {
    let terminal = Arc::new(MockTerminal::with_size(
        true,
        r3bl_prompt::Size { cols: 20, rows: 10 },
    ));
    let typed = "x".repeat(40);
    let (mut io, stdout_mock) =
        PromptIo::new_mock_with_terminal([typed.as_str(), "y", "\n"], terminal);

    let value = TextPrompt::new("A label that is far too long for the terminal")
        .hint("And a hint that is also far too long")
        .prompt(&mut io)
        .unwrap();
    assert_eq!(value, format!("{typed}y"));

    // Every repaint moves up by the frame's line count, so no painted line may wrap.
    // A repaint starts with a move to column 1, which starts a new painted line.
    let output = stdout_mock.get_copy_of_buffer_as_string().replace("\x1b[1G", "\n");
    for line in output.lines() {
        assert!(
            r3bl_prompt::display_width(line) <= 20,
            "{line:?} wraps on a 20 column terminal"
        );
    }
    // The end of the value stays visible while typing.
    assert!(output.contains("xxxxxxxxxxxxxxy"));
}
