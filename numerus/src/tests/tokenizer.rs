use crate::ast::{Operator, Span, Token, TokenKind};
use crate::lexer::tokenize;

fn kinds(expression: &str) -> Vec<TokenKind> {
    tokenize(expression)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn numeral(text: &str) -> TokenKind {
    TokenKind::Numeral(text.to_string())
}

#[test]
fn test_tokenize_simple_expression() {
    assert_eq!(
        kinds("X + V"),
        vec![
            numeral("X"),
            TokenKind::Operator(Operator::Add),
            numeral("V"),
        ]
    );
}

#[test]
fn test_tokenize_all_operators_and_groups() {
    assert_eq!(
        kinds("(XX-II)*III/I"),
        vec![
            TokenKind::LeftParen,
            numeral("XX"),
            TokenKind::Operator(Operator::Subtract),
            numeral("II"),
            TokenKind::RightParen,
            TokenKind::Operator(Operator::Multiply),
            numeral("III"),
            TokenKind::Operator(Operator::Divide),
            numeral("I"),
        ]
    );
}

#[test]
fn test_tokenize_skips_unrecognised_characters() {
    assert_eq!(kinds("II + x II"), kinds("II+II"));
    assert_eq!(kinds("  \t"), vec![]);
    assert_eq!(kinds("hello"), vec![]);
}

#[test]
fn test_tokenize_splits_numerals_on_foreign_letters() {
    // 'a' is dropped and separates the two runs
    assert_eq!(kinds("XaV"), vec![numeral("X"), numeral("V")]);
}

#[test]
fn test_tokenize_records_spans() {
    let tokens = tokenize("XII * (IV)").unwrap();
    assert_eq!(
        tokens[0],
        Token::new(numeral("XII"), Span::new(0, 3))
    );
    assert_eq!(tokens[1].span, Span::new(4, 5));
    assert_eq!(tokens[2].span, Span::new(6, 7));
    assert_eq!(tokens[3].span, Span::new(7, 9));
    assert_eq!(tokens[4].span, Span::new(9, 10));
}

#[test]
fn test_token_display() {
    let rendered: Vec<String> = tokenize("(MC+I)")
        .unwrap()
        .iter()
        .map(|token| token.to_string())
        .collect();
    assert_eq!(rendered, vec!["(", "MC", "+", "I", ")"]);
}
