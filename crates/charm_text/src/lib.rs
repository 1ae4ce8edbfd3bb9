//! Diagnostic text rendering for Charm.
//!
//! This crate provides:
//! - [`Highlighter`] - Single-pass markup highlighting (`'code'`, `<type>`, `$Kind$`, `@pos@`)
//! - [`describe_position`], [`describe_token`], [`describe_opposite`] - Token descriptions
//! - [`TextConfig`] and [`Palette`] - Injectable colour configuration
//! - Text utilities for banners, escaping, and message tags

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod describe;
pub mod highlight;
pub mod palette;
pub mod text;

pub use describe::{describe_opposite, describe_position, describe_token};
pub use highlight::{Delimiter, Highlighter};
pub use palette::{Palette, TextConfig};
pub use text::{BULLET, ERROR, HUB_ERROR, PROMPT, RT_ERROR, VERSION};
