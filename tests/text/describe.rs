//! Integration tests for token descriptions

use charm::foundation::{ErrorKind, OUTDENT_MARKER, REPL_INPUT, Token, TokenType};
use charm::text::{
    Highlighter, TextConfig, describe_opposite, describe_position, describe_token,
};

#[test]
fn position_in_repl_input_is_unquoted() {
    let tok = Token::new(TokenType::Ident, "x")
        .with_source(REPL_INPUT)
        .at(3, 2, 2);
    let pos = describe_position(&tok);
    assert!(pos.contains("@3:2@"));
    assert!(!pos.contains("3:2-"));
    assert!(pos.ends_with("of REPL input"));
}

#[test]
fn position_in_file_is_quoted() {
    let tok = Token::new(TokenType::Ident, "x")
        .with_source("foo.lang")
        .at(3, 2, 2);
    assert!(describe_position(&tok).ends_with("of 'foo.lang'"));
}

#[test]
fn highlighted_position_reads_naturally() {
    let tok = Token::new(TokenType::Int, "12")
        .with_source("foo.lang")
        .at(7, 4, 5);
    let plain = Highlighter::new(&TextConfig::plain());
    assert_eq!(
        plain.highlight(&describe_position(&tok)),
        " at line 7:4-5 of 'foo.lang'"
    );
}

#[test]
fn full_error_message() {
    let expected = Token::new(TokenType::RParen, ")");
    let got = Token::new(TokenType::Int, "42").at(1, 6, 7);
    let message = format!(
        "$Error$expected {}, got {}{}",
        describe_token(&expected),
        describe_token(&got),
        describe_position(&got)
    );
    let plain = Highlighter::new(&TextConfig::plain());
    assert_eq!(
        plain.highlight(&message),
        "Error: expected ')', got <int> at line 1:6-7 of REPL input"
    );
}

#[test]
fn token_labels() {
    assert_eq!(describe_token(&Token::new(TokenType::Ident, "x")), "'x'");
    assert_eq!(
        describe_token(&Token::new(TokenType::String, "anything at all")),
        "<string>"
    );
    assert_eq!(describe_token(&Token::new(TokenType::Eof, "")), "end of line");
}

#[test]
fn opposite_of_outdent() {
    let tok = Token::new(TokenType::RParen, OUTDENT_MARKER);
    assert_eq!(describe_opposite(&tok).unwrap(), "indent");
}

#[test]
fn opposite_misuse_is_typed_error() {
    let tok = Token::new(TokenType::Ident, "x");
    let err = describe_opposite(&tok).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoOpposite(ref lit) if lit == "x"));
}
