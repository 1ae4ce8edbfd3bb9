//! Terminal colours and text rendering configuration.

/// A set of terminal colour-control sequences.
///
/// Every piece of coloured output takes its escapes from a palette, so
/// colour is switched off by handing out [`Palette::plain`] instead of
/// editing call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Returns the terminal to its default colours.
    pub reset: &'static str,
    /// Error kinds and the banner hearts.
    pub red: &'static str,
    /// Success messages.
    pub green: &'static str,
    /// Source positions.
    pub yellow: &'static str,
    /// Blue.
    pub blue: &'static str,
    /// Purple.
    pub purple: &'static str,
    /// Quoted code and type names.
    pub cyan: &'static str,
    /// Gray.
    pub gray: &'static str,
    /// White.
    pub white: &'static str,
}

impl Palette {
    /// The standard ANSI palette.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            red: "\x1b[31m",
            green: "\x1b[32m",
            yellow: "\x1b[33m",
            blue: "\x1b[34m",
            purple: "\x1b[35m",
            cyan: "\x1b[36m",
            gray: "\x1b[37m",
            white: "\x1b[97m",
        }
    }

    /// A palette of empty strings, for output that is not a terminal.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            red: "",
            green: "",
            yellow: "",
            blue: "",
            purple: "",
            cyan: "",
            gray: "",
            white: "",
        }
    }

    /// Returns true if every escape in this palette is empty.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

/// Configuration for rendering diagnostic text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextConfig {
    /// Whether colour escapes are emitted at all.
    pub enable_color: bool,

    /// Escapes used when colour is enabled.
    pub palette: Palette,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            enable_color: true,
            palette: Palette::ansi(),
        }
    }
}

impl TextConfig {
    /// Creates a configuration with colour disabled.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enable_color: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable colour.
    #[must_use]
    pub const fn with_color(mut self, enable: bool) -> Self {
        self.enable_color = enable;
        self
    }

    /// Builder method to set the palette.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the palette to render with: the configured one, or the
    /// plain palette when colour is disabled.
    #[must_use]
    pub const fn effective_palette(&self) -> Palette {
        if self.enable_color {
            self.palette
        } else {
            Palette::plain()
        }
    }
}
