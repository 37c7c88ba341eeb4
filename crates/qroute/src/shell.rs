// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive chat loop.
//!
//! Reads queries with line editing and history, routes each one, and prints
//! the reply. Exit with `/quit`, `/exit`, Ctrl+C, or Ctrl+D.

use colored::Colorize;
use qroute_config::QrouteConfig;
use qroute_core::QrouteError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::app::{EMPTY_QUERY_MESSAGE, build_router};

/// What one line of shell input asks for.
#[derive(Debug, PartialEq, Eq)]
enum ShellInput<'a> {
    Quit,
    Empty,
    Query(&'a str),
}

fn parse_input(line: &str) -> ShellInput<'_> {
    match line.trim() {
        "" => ShellInput::Empty,
        "/quit" | "/exit" => ShellInput::Quit,
        query => ShellInput::Query(query),
    }
}

/// Run the chat loop until the user quits.
pub async fn run_shell(config: &QrouteConfig) -> Result<(), QrouteError> {
    let router = build_router(config).await?;

    let mut editor = DefaultEditor::new().map_err(|e| QrouteError::Internal(e.to_string()))?;
    let prompt = format!("{}> ", config.agent.name.green());

    println!("{}", "Welcome to the query routing chatbot!".bold().green());
    println!("Type /quit or press Ctrl+D to exit.");

    loop {
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        match parse_input(&line) {
            ShellInput::Quit => break,
            ShellInput::Empty => println!("{}", EMPTY_QUERY_MESSAGE.yellow()),
            ShellInput::Query(query) => {
                let _ = editor.add_history_entry(query);
                let response = router.route(query).await;
                println!("{}", "Here is your response:".bold());
                println!("{response}");
                println!();
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_commands() {
        assert_eq!(parse_input("/quit"), ShellInput::Quit);
        assert_eq!(parse_input("  /exit \n"), ShellInput::Quit);
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_input(""), ShellInput::Empty);
        assert_eq!(parse_input(" \t "), ShellInput::Empty);
    }

    #[test]
    fn queries_are_trimmed() {
        assert_eq!(
            parse_input("  What is the weather today?  "),
            ShellInput::Query("What is the weather today?")
        );
        assert_eq!(parse_input("/quitting time"), ShellInput::Query("/quitting time"));
    }
}
