//! Core types shared by the Charm front-end.
//!
//! This crate provides:
//! - [`Token`] and [`TokenType`] - Lexical units read by the diagnostic formatter
//! - [`Error`] - Error type for editor, I/O, and caller failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod token;

pub use error::{Error, ErrorKind, Result};
pub use token::{INDENT_MARKER, OUTDENT_MARKER, REPL_INPUT, Token, TokenType};
