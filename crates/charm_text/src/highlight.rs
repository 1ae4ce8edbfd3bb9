//! Markup highlighting for diagnostic messages.
//!
//! Messages are written with lightweight inline markup and coloured in a
//! single pass:
//!
//! | Markup | Rendering |
//! |--------|-----------|
//! | `'foo'`, `"foo"` | cyan, delimiters kept |
//! | `<int>` | cyan, delimiters kept |
//! | `$Error$` | red `Error` followed by `: ` |
//! | `@3:2@` | yellow `3:2` padded with spaces |
//!
//! A quote only opens a span after whitespace, the start of the text, or a
//! closed `$` span, so apostrophes inside words or straight after another
//! span are left alone. `@` opens a span anywhere.

use crate::palette::{Palette, TextConfig};

/// The span currently open during a highlighting pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// No span is open.
    #[default]
    None,
    /// `'...'`
    Quote,
    /// `"..."`
    DoubleQuote,
    /// `<...>`
    Angle,
    /// `$...$`
    Dollar,
    /// `@...@`
    At,
}

impl Delimiter {
    /// Returns the span a character opens, if any.
    #[must_use]
    pub const fn opened_by(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(Self::Quote),
            '"' => Some(Self::DoubleQuote),
            '<' => Some(Self::Angle),
            '$' => Some(Self::Dollar),
            '@' => Some(Self::At),
            _ => None,
        }
    }

    /// Returns the character that closes this span.
    #[must_use]
    pub const fn closer(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Quote => Some('\''),
            Self::DoubleQuote => Some('"'),
            Self::Angle => Some('>'),
            Self::Dollar => Some('$'),
            Self::At => Some('@'),
        }
    }

    const fn opens_anywhere(self) -> bool {
        matches!(self, Self::At)
    }
}

/// Rewrites marked-up text into terminal-coloured text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Highlighter {
    palette: Palette,
}

impl Highlighter {
    /// Creates a highlighter for the given configuration.
    #[must_use]
    pub const fn new(config: &TextConfig) -> Self {
        Self {
            palette: config.effective_palette(),
        }
    }

    /// Creates a highlighter using a palette directly.
    #[must_use]
    pub const fn with_palette(palette: Palette) -> Self {
        Self { palette }
    }

    /// Returns the palette this highlighter renders with.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Highlights a line of marked-up text.
    #[must_use]
    pub fn highlight(&self, plain: &str) -> String {
        self.highlight_from(plain, Delimiter::None)
    }

    /// Highlights a line that starts inside an already open span.
    ///
    /// This is for continuation lines of a message whose span was opened on
    /// an earlier line. The output starts in cyan when a span is open.
    #[must_use]
    pub fn highlight_from(&self, plain: &str, open: Delimiter) -> String {
        let p = &self.palette;
        let mut out = String::with_capacity(plain.len() + 16);
        let mut open = open;
        // Start of text counts as a boundary.
        let mut at_boundary = true;

        if open != Delimiter::None {
            out.push_str(p.cyan);
        }

        for ch in plain.chars() {
            match open.closer() {
                Some(close) if ch == close => {
                    self.push_close(&mut out, open, ch);
                    // Only an error tag may be followed directly by a span.
                    at_boundary = open == Delimiter::Dollar;
                    open = Delimiter::None;
                }
                Some(_) => out.push(ch),
                None => {
                    let opener = Delimiter::opened_by(ch)
                        .filter(|d| at_boundary || d.opens_anywhere());
                    if let Some(delimiter) = opener {
                        self.push_open(&mut out, delimiter, ch);
                        open = delimiter;
                    } else {
                        out.push(ch);
                        at_boundary = ch.is_whitespace();
                    }
                }
            }
        }

        out
    }

    fn push_open(&self, out: &mut String, delimiter: Delimiter, ch: char) {
        let p = &self.palette;
        match delimiter {
            Delimiter::Dollar => out.push_str(p.red),
            Delimiter::At => {
                out.push(' ');
                out.push_str(p.yellow);
            }
            _ => {
                out.push_str(p.cyan);
                out.push(ch);
            }
        }
    }

    fn push_close(&self, out: &mut String, delimiter: Delimiter, ch: char) {
        let p = &self.palette;
        match delimiter {
            Delimiter::Dollar => {
                out.push_str(p.reset);
                out.push_str(": ");
            }
            Delimiter::At => {
                out.push(' ');
                out.push_str(p.reset);
            }
            _ => {
                out.push(ch);
                out.push_str(p.reset);
            }
        }
    }
}
