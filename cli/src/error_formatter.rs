use ariadne::{Color, Label, Report, ReportKind, Source};
use numerus::{CalcError, Span};
use std::ops::Range;

const SOURCE_ID: &str = "expression";

/// Format a CalcError with fancy terminal output using Ariadne
pub fn format_error(error: &CalcError, expression: &str) -> String {
    let Some(span) = error.span() else {
        return format!("Error: {}\n", error);
    };

    let source_id = SOURCE_ID.to_string();
    let range = char_range(expression, span);
    let mut output = Vec::new();

    let report = Report::build(ReportKind::Error, &source_id, range.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((&source_id, range))
                .with_message(label_message(error))
                .with_color(Color::Red),
        )
        .with_help(error.user_message());

    match report.finish().write(
        (&source_id, Source::from(expression)),
        &mut output,
    ) {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("Error: {}\n", error)
        }
    }
}

fn label_message(error: &CalcError) -> &'static str {
    match error {
        CalcError::InvalidSymbol { .. } | CalcError::InvalidNumeral { .. } => "not a numeral",
        CalcError::Unbalanced { .. } => "no matching parenthesis",
        CalcError::DivisionByZero { .. } => "this is zero",
        CalcError::Overflow { negative: true, .. } => "too small",
        CalcError::Overflow { .. } => "too large",
        _ => "here",
    }
}

/// Ariadne counts characters, spans count bytes
fn char_range(source: &str, span: Span) -> Range<usize> {
    let to_chars = |offset: usize| {
        source
            .get(..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset)
    };
    let range = span.range();
    to_chars(range.start)..to_chars(range.end)
}
