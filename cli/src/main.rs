mod error_formatter;
mod formatter;
mod interactive;

use anyhow::Result;
use clap::Parser;
use formatter::{Formatter, OutputFormat};
use numerus::{encode, Engine};
use std::io::{self, IsTerminal};
use tracing::debug;

#[derive(Parser)]
#[command(name = "numerus")]
#[command(about = "Arithmetic with Roman numerals.")]
#[command(
    long_about = "Numerus evaluates arithmetic written with Roman numerals, such as `X + V * (II - I)`.\nPass the expression as arguments, pipe one expression per line, or run without arguments for an interactive prompt."
)]
#[command(version)]
struct Cli {
    /// Expression to evaluate (words are joined with single spaces)
    ///
    /// Examples:
    ///   numerus XIV              - prints (14)
    ///   numerus X + V            - prints (XV)
    ///   numerus "(II + III) * II" - prints (X)
    #[arg(value_name = "EXPRESSION", trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
    /// Which result to print
    ///
    /// auto prints the integer for a single numeral and the numeral for anything else.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,
    /// Print results without the surrounding parentheses
    #[arg(long)]
    plain: bool,
    /// Show where an expression went wrong
    #[arg(short, long)]
    explain: bool,
    /// Log evaluation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "numerus=debug" } else { "numerus=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

/// Returns whether every evaluated expression produced a value
fn run(cli: &Cli) -> Result<bool> {
    let engine = Engine::new();
    let formatter = Formatter::new(cli.output, cli.plain);

    if !cli.words.is_empty() {
        let expression = cli.words.join(" ");
        return Ok(evaluate_and_print(
            &engine,
            &formatter,
            expression.trim(),
            cli.explain,
        ));
    }

    if io::stdin().is_terminal() {
        interactive::run_interactive(&engine, &formatter, cli.explain)
    } else {
        interactive::run_piped(&engine, &formatter, cli.explain)
    }
}

/// Calculate one expression and print it, returning false on error
pub(crate) fn evaluate_and_print(
    engine: &Engine,
    formatter: &Formatter,
    expression: &str,
    explain: bool,
) -> bool {
    debug!(expression, "evaluating");
    let calculation = engine.calculate(expression);
    print!("{}", formatter.format_calculation(&calculation));

    if calculation.is_error() && explain {
        if let Err(err) = engine.try_calculate(expression).and_then(encode) {
            eprint!("{}", error_formatter::format_error(&err, expression));
        }
    }

    !calculation.is_error()
}
