//! The hub contract and a basic hub.
//!
//! The hub interprets each line the session loop reads. The loop asks it
//! which service is current, what to do with a line, and how to report a
//! failed read. Its command words feed the editor's tab completion.

use std::io::Write;

use charm_text::{BULLET, ERROR, HUB_ERROR, Highlighter, TextConfig, text};

/// The command-dispatch engine behind the session loop.
pub trait Hub {
    /// Name of the current service, or `""` if none is active.
    fn current_service_name(&self) -> &str;

    /// Handles one trimmed, non-empty line. Returns true if the program
    /// should exit.
    fn dispatch(&mut self, line: &str) -> bool;

    /// Reports an error to the user.
    fn report_error(&mut self, message: &str);

    /// Command words offered for completion at the start of a line.
    fn commands(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<H: Hub + ?Sized> Hub for &mut H {
    fn current_service_name(&self) -> &str {
        (**self).current_service_name()
    }

    fn dispatch(&mut self, line: &str) -> bool {
        (**self).dispatch(line)
    }

    fn report_error(&mut self, message: &str) {
        (**self).report_error(message);
    }

    fn commands(&self) -> Vec<String> {
        (**self).commands()
    }
}

const COMMANDS: [&str; 4] = ["help", "use", "quit", "exit"];

/// A minimal hub that manages the current service and echoes everything
/// else back as highlighted text.
///
/// Commands:
/// - `quit`, `exit` - end the session
/// - `use NAME` - make `NAME` the current service
/// - `help` - list commands
pub struct BasicHub<W: Write> {
    out: W,
    highlighter: Highlighter,
    config: TextConfig,
    service: String,
}

impl<W: Write> BasicHub<W> {
    /// Creates a hub writing to `out`.
    pub fn new(out: W, config: TextConfig) -> Self {
        Self {
            out,
            highlighter: Highlighter::new(&config),
            config,
            service: String::new(),
        }
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the hub, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, marked_up: &str) {
        let line = self.highlighter.highlight(marked_up);
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("hub output failed: {e}");
        }
    }

    fn use_service(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                name.clone_into(&mut self.service);
                let ok = text::ok(&self.config.effective_palette());
                self.emit(&ok);
            }
            None => {
                let message = format!("{HUB_ERROR}'use' needs the name of a service");
                self.emit(&message);
            }
        }
    }

    fn help(&mut self) {
        self.emit("Commands:");
        for line in [
            "'use' <name> switches to a service",
            "'help' shows this list",
            "'quit' or 'exit' leaves Charm",
        ] {
            self.emit(&format!("{BULLET}{line}"));
        }
    }
}

impl<W: Write> Hub for BasicHub<W> {
    fn current_service_name(&self) -> &str {
        &self.service
    }

    fn dispatch(&mut self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("quit" | "exit") => {
                self.emit("Thank you for using Charm. Have a nice day!");
                true
            }
            Some("use") => {
                self.use_service(words.next());
                false
            }
            Some("help") => {
                self.help();
                false
            }
            _ => {
                self.emit(line);
                false
            }
        }
    }

    fn report_error(&mut self, message: &str) {
        self.emit(&format!("{ERROR}{message}"));
    }

    fn commands(&self) -> Vec<String> {
        COMMANDS.iter().map(ToString::to_string).collect()
    }
}
