//! Token descriptions for error messages.
//!
//! These build the fragments of messages like
//! `$Error$expected 'foo', got <int> at line@3:2@of 'main.ch'`, which are
//! then passed through the [`Highlighter`](crate::Highlighter).

use charm_foundation::{Error, INDENT_MARKER, OUTDENT_MARKER, Result, Token, TokenType};

/// Describes where a token came from.
///
/// Tokens with a known line produce ` at line@L:S@of SOURCE`, with `-E`
/// appended to the position when the token spans a range. The `@` span
/// is padded with spaces by the highlighter. Tokens without a line produce
/// ` in SOURCE`. File names are single-quoted; the REPL input sentinel is not.
#[must_use]
pub fn describe_position(tok: &Token) -> String {
    let source = if tok.is_repl_input() {
        tok.source.clone()
    } else {
        format!("'{}'", tok.source)
    };

    if !tok.has_position() {
        return format!(" in {source}");
    }

    let end = if tok.is_range() {
        format!("-{}", tok.ch_end)
    } else {
        String::new()
    };
    format!(" at line@{}:{}{end}@of {source}", tok.line, tok.ch_start)
}

/// Describes a token for "expected X, got Y" messages.
///
/// Literal kinds are shown as a type placeholder such as `<int>`; everything
/// else is shown as its quoted source text.
#[must_use]
pub fn describe_token(tok: &Token) -> String {
    match tok.kind {
        TokenType::LParen if tok.literal == INDENT_MARKER => "indent".to_string(),
        TokenType::RParen if tok.literal == OUTDENT_MARKER => "outdent".to_string(),
        TokenType::Newline if tok.literal == "\n" => "newline".to_string(),
        TokenType::Eof => "end of line".to_string(),
        kind => kind
            .placeholder()
            .map_or_else(|| format!("'{}'", tok.literal), str::to_string),
    }
}

/// Names the opening bracket that matches a closing one.
///
/// # Errors
///
/// Returns [`ErrorKind::NoOpposite`](charm_foundation::ErrorKind::NoOpposite)
/// if the token is not a closing bracket or the outdent marker. This means
/// the caller has a bug; it is never caused by user input.
pub fn describe_opposite(tok: &Token) -> Result<&'static str> {
    match tok.literal.as_str() {
        OUTDENT_MARKER => Ok("indent"),
        ")" => Ok("'('"),
        "]" => Ok("["),
        "}" => Ok("{"),
        other => {
            log::error!("describe_opposite called on token {other:?} of kind {}", tok.kind);
            Err(Error::no_opposite(other))
        }
    }
}
