//! The session loop.
//!
//! Each turn computes the prompt from the hub's current service, reads a
//! line, and hands the trimmed line to the hub. Blank lines are skipped.
//! The session ends when the hub asks to quit or the input fails; a failed
//! read is reported to the hub once and never retried.

use std::io::{BufRead, Write};

use charm_text::PROMPT;

use crate::config::ReplConfig;
use crate::editor::{LineEditor, RustylineEditor, StreamEditor};
use crate::hub::Hub;
use charm_foundation::Result;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The hub asked to quit.
    Quit,
    /// The input failed, closed, or was interrupted.
    InputClosed,
}

/// The interactive REPL.
pub struct Repl<H: Hub, E: LineEditor = RustylineEditor> {
    /// The hub that handles each line.
    hub: H,

    /// The line editor for input.
    editor: E,
}

impl<H: Hub> Repl<H, RustylineEditor> {
    /// Creates a new REPL reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(hub: H, config: &ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config)?;
        Ok(Self::with_editor(hub, editor))
    }
}

impl<H: Hub, E: LineEditor> Repl<H, E> {
    /// Creates a new REPL with the given editor, handing the hub's command
    /// words to the editor for completion.
    pub fn with_editor(hub: H, mut editor: E) -> Self {
        editor.set_commands(hub.commands());
        Self { hub, editor }
    }

    /// Returns a reference to the hub.
    #[must_use]
    pub const fn hub(&self) -> &H {
        &self.hub
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Consumes the REPL, returning the hub and editor.
    pub fn into_parts(self) -> (H, E) {
        (self.hub, self.editor)
    }

    /// Runs the loop until the hub quits or the input fails.
    pub fn run(&mut self) -> SessionEnd {
        log::info!("session started");

        loop {
            let prompt = make_prompt(self.hub.current_service_name());
            self.editor.set_prompt(&prompt);

            let line = match self.editor.read_line() {
                Ok(line) => line,
                Err(e) => {
                    if e.is_end_of_input() {
                        log::info!("input closed: {e}");
                    } else {
                        log::warn!("input failed: {e}");
                    }
                    self.hub.report_error(&e.to_string());
                    return SessionEnd::InputClosed;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            self.editor.add_history(line);

            log::debug!("dispatching {line:?}");
            if self.hub.dispatch(line) {
                log::info!("session ended by hub");
                return SessionEnd::Quit;
            }
        }
    }
}

/// Builds the prompt for the given current service name.
#[must_use]
pub fn make_prompt(service: &str) -> String {
    if service.is_empty() {
        PROMPT.to_string()
    } else {
        format!("{service} {PROMPT}")
    }
}

/// Runs a session over plain streams: prompts are written to `output` and
/// lines are read from `input`.
pub fn run_session<H, R, W>(hub: H, input: R, output: W) -> SessionEnd
where
    H: Hub,
    R: BufRead,
    W: Write,
{
    Repl::with_editor(hub, StreamEditor::new(input, output)).run()
}
