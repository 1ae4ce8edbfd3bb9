//! Line editor abstraction for the REPL.
//!
//! The session loop only needs to set a prompt and read a line, so the
//! editor sits behind the [`LineEditor`] trait. [`RustylineEditor`] drives a
//! terminal; [`StreamEditor`] reads from any buffered reader and writes its
//! prompts to any writer.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use charm_foundation::{Error, Result};
use charm_text::Palette;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::config::ReplConfig;

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Sets the prompt shown before the next read.
    fn set_prompt(&mut self, prompt: &str);

    /// Reads one line, without its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an `Eof` error when the input is exhausted, an `Interrupted`
    /// error on Ctrl+C, and an `Editor` or `Io` error if reading fails.
    fn read_line(&mut self) -> Result<String>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);

    /// Sets the words offered for completion. Editors without completion
    /// ignore this.
    fn set_commands(&mut self, _commands: Vec<String>) {}
}

impl<E: LineEditor + ?Sized> LineEditor for &mut E {
    fn set_prompt(&mut self, prompt: &str) {
        (**self).set_prompt(prompt);
    }

    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }

    fn add_history(&mut self, line: &str) {
        (**self).add_history(line);
    }

    fn set_commands(&mut self, commands: Vec<String>) {
        (**self).set_commands(commands);
    }
}

/// Helper for rustyline that provides completion, hints, and prompt colouring.
#[derive(Helper, Completer, Hinter, Validator)]
struct CharmHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    palette: Palette,
}

impl CharmHelper {
    fn paint<'t>(&self, colour: &str, text: &'t str) -> Cow<'t, str> {
        if colour.is_empty() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(format!("{colour}{text}{}", self.palette.reset))
        }
    }
}

impl Highlighter for CharmHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            self.paint(self.palette.green, prompt)
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.paint(self.palette.gray, hint)
    }
}

/// Completes the first word of a line from a list of hub commands.
#[derive(Default)]
struct CommandCompleter {
    commands: Vec<String>,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[..pos];
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CharmHelper, DefaultHistory>,
    prompt: String,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails or the history
    /// size is rejected.
    pub fn new(config: &ReplConfig) -> Result<Self> {
        let rl_config = Config::builder()
            .auto_add_history(false)
            .max_history_size(config.history_size)
            .map_err(|e| Error::editor(e.to_string()))?
            .build();

        let helper = CharmHelper {
            completer: CommandCompleter::default(),
            hinter: HistoryHinter::new(),
            palette: config.text.effective_palette(),
        };

        let mut editor =
            Editor::with_config(rl_config).map_err(|e| Error::editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self {
            editor,
            prompt: String::new(),
        })
    }
}

impl LineEditor for RustylineEditor {
    fn set_prompt(&mut self, prompt: &str) {
        prompt.clone_into(&mut self.prompt);
    }

    fn read_line(&mut self) -> Result<String> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(Error::interrupted()),
            Err(ReadlineError::Eof) => Err(Error::eof()),
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            log::debug!("history entry dropped: {e}");
        }
    }

    fn set_commands(&mut self, commands: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.commands = commands;
        }
    }
}

/// Line editor over plain streams: prompts go to `output`, lines come from
/// `input`. End of input is reported as an `Eof` error.
pub struct StreamEditor<R, W> {
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> StreamEditor<R, W> {
    /// Creates an editor bound to the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: String::new(),
        }
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the editor, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineEditor for StreamEditor<R, W> {
    fn set_prompt(&mut self, prompt: &str) {
        prompt.clone_into(&mut self.prompt);
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.write_all(self.prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::eof());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn add_history(&mut self, _line: &str) {}
}
