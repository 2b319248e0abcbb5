use crate::evaluate_and_print;
use crate::formatter::Formatter;
use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use numerus::Engine;
use std::io::{self, BufRead};

/// Prompt for expressions until the user enters an empty line or cancels
pub fn run_interactive(engine: &Engine, formatter: &Formatter, explain: bool) -> Result<bool> {
    println!("Enter an expression such as X + V * (II - I). Leave it empty to quit.");

    let mut all_ok = true;
    loop {
        let input = match Text::new("Expression:")
            .with_help_message("Numerals I V X L C D M, operators + - * / and parentheses")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read expression"),
        };

        let expression = input.trim();
        if expression.is_empty() {
            break;
        }

        all_ok &= evaluate_and_print(engine, formatter, expression, explain);
    }

    Ok(all_ok)
}

/// Evaluate each non-empty line of standard input
pub fn run_piped(engine: &Engine, formatter: &Formatter, explain: bool) -> Result<bool> {
    let mut all_ok = true;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read standard input")?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        all_ok &= evaluate_and_print(engine, formatter, expression, explain);
    }

    Ok(all_ok)
}
