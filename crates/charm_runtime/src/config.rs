//! Configuration for the interactive session.

use charm_text::TextConfig;

/// Configuration for a REPL session.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// How diagnostic text is coloured.
    pub text: TextConfig,

    /// Whether the binary prints the banner before the first prompt.
    pub show_banner: bool,

    /// Number of lines the terminal editor keeps in history.
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            text: TextConfig::default(),
            show_banner: true,
            history_size: 1000,
        }
    }
}

impl ReplConfig {
    /// Builder method to set the text configuration.
    #[must_use]
    pub const fn with_text(mut self, text: TextConfig) -> Self {
        self.text = text;
        self
    }

    /// Builder method to enable/disable colour.
    #[must_use]
    pub const fn with_color(mut self, enable: bool) -> Self {
        self.text = self.text.with_color(enable);
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub const fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub const fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}
