//! Token types for the Charm language.
//!
//! Tokens are produced by the lexer. The front-end only reads them to
//! build diagnostic text.

use std::fmt;

/// Source name given to tokens typed at the interactive prompt.
pub const REPL_INPUT: &str = "REPL input";

/// Literal of the synthetic bracket the lexer emits when indentation increases.
pub const INDENT_MARKER: &str = "|->";

/// Literal of the synthetic bracket the lexer emits when indentation decreases.
pub const OUTDENT_MARKER: &str = "<-|";

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenType,
    /// Raw source text of this token.
    pub literal: String,
    /// Name of the input this token came from, or [`REPL_INPUT`].
    pub source: String,
    /// 1-based line number; 0 means unknown or synthetic.
    pub line: u32,
    /// 0-based character offset where the token starts.
    pub ch_start: usize,
    /// 0-based character offset where the token ends.
    pub ch_end: usize,
}

impl Token {
    /// Creates a token with no position information.
    #[must_use]
    pub fn new(kind: TokenType, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            source: REPL_INPUT.to_string(),
            line: 0,
            ch_start: 0,
            ch_end: 0,
        }
    }

    /// Sets the originating input name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the line and character span.
    #[must_use]
    pub const fn at(mut self, line: u32, ch_start: usize, ch_end: usize) -> Self {
        self.line = line;
        self.ch_start = ch_start;
        self.ch_end = ch_end;
        self
    }

    /// Returns true if this token came from the interactive prompt.
    #[must_use]
    pub fn is_repl_input(&self) -> bool {
        self.source == REPL_INPUT
    }

    /// Returns true if the token's line number is known.
    #[must_use]
    pub const fn has_position(&self) -> bool {
        self.line > 0
    }

    /// Returns true if this token spans more than one character position.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        self.ch_start != self.ch_end
    }
}

/// Token kinds for the Charm language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Delimiters
    /// `(`, or the synthetic indent marker
    LParen,
    /// `)`, or the synthetic outdent marker
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `=`
    Assign,
    /// Line break
    Newline,

    // Literals
    /// String literal
    String,
    /// Integer literal
    Int,
    /// Float literal
    Float,
    /// `true`
    True,
    /// `false`
    False,
    /// Identifier
    Ident,

    // Keywords
    /// `def`
    Def,
    /// `cmd`
    Cmd,
    /// `import`
    Import,

    // Meta
    /// End of input
    Eof,
    /// Unrecognized input
    Illegal,
}

impl TokenType {
    /// Returns the type placeholder shown in messages for literal kinds,
    /// such as `<int>`, or `None` for every other kind.
    #[must_use]
    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::String => Some("<string>"),
            Self::Int => Some("<int>"),
            Self::Float => Some("<float>"),
            Self::True | Self::False => Some("<bool>"),
            _ => None,
        }
    }

    /// Returns the name of this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACK",
            Self::RBracket => "RBRACK",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Assign => "ASSIGN",
            Self::Newline => "NEWLINE",
            Self::String => "STRING",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Ident => "IDENT",
            Self::Def => "DEF",
            Self::Cmd => "CMD",
            Self::Import => "IMPORT",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
