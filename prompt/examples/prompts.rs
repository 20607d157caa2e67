// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Walks through every widget. Run it with `cargo run --example prompts`, and pipe
//! something into it (`echo | cargo run --example prompts`) to see the non interactive
//! fallback. Logs go to `r3bl_prompt_log.log` in the current folder.

use r3bl_prompt::{ArrayPrompt, ConfirmPrompt, Form, MultiSelectPrompt, PausePrompt,
                  PromptError, PromptIo, PromptValue, SearchMatch, SearchPrompt,
                  SelectPrompt, Spinner, TextPrompt, WaitPrompt,
                  try_initialize_logging_global};
use std::time::{Duration, Instant};
use tracing_core::LevelFilter;

const LANGUAGES: [&str; 8] = [
    "C", "Go", "Haskell", "Kotlin", "OCaml", "Python", "Rust", "TypeScript",
];

#[tokio::main]
async fn main() -> miette::Result<()> {
    try_initialize_logging_global(LevelFilter::DEBUG)?;

    let mut io = PromptIo::default();

    let responses = Form::new()
        .step("name", |io, _| {
            TextPrompt::new("What is your name?")
                .placeholder("E.g. Ferris")
                .required()
                .default_value("Ferris")
                .prompt(io)
                .map(PromptValue::Text)
        })
        .step("language", |io, _| {
            SearchPrompt::new("Favorite language?", |query| {
                LANGUAGES
                    .iter()
                    .filter(|it| it.to_lowercase().contains(&query.to_lowercase()))
                    .map(|it| SearchMatch::from(*it))
                    .collect()
            })
            .hint("Type to filter, Ctrl+U to go back")
            .optional()
            .prompt(io)
            .map(PromptValue::Labeled)
        })
        .step("editor", |io, _| {
            SelectPrompt::new("Editor?", [("hx", "Helix"), ("nvim", "Neovim"), ("code", "VS Code")])
                .default_value("hx")
                .prompt(io)
                .map(PromptValue::Text)
        })
        .run(&mut io);

    match responses {
        Ok(responses) => {
            for (name, value) in responses.iter() {
                println!("{name}: {}", value.to_display_string());
            }
        }
        Err(err) if err.is_user_initiated() => {
            println!("Form stopped: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    let tags = ArrayPrompt::new("Tags for this project?").prompt(&mut io)?;
    let features = MultiSelectPrompt::new("Features?", ["async", "cli", "tui", "wasm"])
        .default_values(["cli"])
        .prompt(&mut io)?;
    println!("tags: {tags:?}, features: {features:?}");

    let answer = Spinner::new("Computing the answer")
        .final_message("Computed.")
        .spin(&io, async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            42
        })
        .await?;
    println!("answer: {answer}");

    let started = Instant::now();
    WaitPrompt::new("Waiting 2 seconds", move || started.elapsed() > Duration::from_secs(2))
        .hint("Ctrl+C to stop waiting")
        .prompt(&mut io)?;

    if ConfirmPrompt::new("Show the last prompt?").prompt(&mut io)? {
        match PausePrompt::default().prompt(&mut io) {
            Ok(_) | Err(PromptError::Cancelled) => {}
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
