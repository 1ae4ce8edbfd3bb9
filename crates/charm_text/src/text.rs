//! Text utilities for help, banner, and error output.

use std::path::Path;

use crate::palette::Palette;

/// Version shown in the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bullet used for list items in help text.
pub const BULLET: &str = " ▪ ";

/// The bare prompt glyph.
pub const PROMPT: &str = "→ ";

/// Tag for errors found before execution.
pub const ERROR: &str = "$Error$";

/// Tag for errors raised while running code.
pub const RT_ERROR: &str = "$Runtime error$";

/// Tag for errors raised by the hub itself.
pub const HUB_ERROR: &str = "$Hub error$";

/// Wraps text in double quotes, showing control characters as escapes.
#[must_use]
pub fn to_escaped_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for ch in s.chars() {
        match ch {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

/// Turns a path into an identifier-safe name: its base name with `.`
/// replaced by `_`.
#[must_use]
pub fn flattened_filename(s: &str) -> String {
    let base = Path::new(s)
        .file_name()
        .map_or_else(|| s.to_string(), |name| name.to_string_lossy().into_owned());
    base.replace('.', "_")
}

/// Colours text cyan.
#[must_use]
pub fn cyan(palette: &Palette, s: &str) -> String {
    format!("{}{s}{}", palette.cyan, palette.reset)
}

/// Colours text red.
#[must_use]
pub fn red(palette: &Palette, s: &str) -> String {
    format!("{}{s}{}", palette.red, palette.reset)
}

/// Colours text green.
#[must_use]
pub fn green(palette: &Palette, s: &str) -> String {
    format!("{}{s}{}", palette.green, palette.reset)
}

/// Colours text yellow.
#[must_use]
pub fn yellow(palette: &Palette, s: &str) -> String {
    format!("{}{s}{}", palette.yellow, palette.reset)
}

/// Shows a piece of code: single-quoted and cyan.
#[must_use]
pub fn emph(palette: &Palette, s: &str) -> String {
    cyan(palette, &format!("'{s}'"))
}

/// Shows a type name: angle-bracketed and cyan.
#[must_use]
pub fn emph_type(palette: &Palette, s: &str) -> String {
    cyan(palette, &format!("<{s}>"))
}

/// A green `ok`.
#[must_use]
pub fn ok(palette: &Palette) -> String {
    green(palette, "ok")
}

/// The startup banner.
#[must_use]
pub fn logo(palette: &Palette) -> String {
    let padding = if VERSION.len() % 2 == 0 { "," } else { "" };
    let title = format!(" Charm{padding} version {VERSION} ");
    let heart = red(palette, "♥");
    let margin = "  ";
    let bar = "═".repeat(title.chars().count() / 2);

    format!(
        "\n{margin}╔{bar}{heart}{bar}╗\n{margin}║{title}║\n{margin}╚{bar}{heart}{bar}╝\n\n"
    )
}
