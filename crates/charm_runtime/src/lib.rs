//! REPL session loop, line editing, and CLI for Charm.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read loop that dispatches lines to a [`Hub`]
//! - [`LineEditor`] - Line editing abstraction with rustyline and stream backends
//! - [`BasicHub`] - A small hub for running the loop on its own
//! - [`ReplConfig`] - Session configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod hub;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, RustylineEditor, StreamEditor};
pub use hub::{BasicHub, Hub};
pub use repl::{Repl, SessionEnd, make_prompt, run_session};
