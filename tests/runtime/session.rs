//! Integration tests for the session loop

use charm::foundation::{Error, Result};
use charm::runtime::{
    BasicHub, Hub, LineEditor, Repl, SessionEnd, make_prompt, run_session,
};
use charm::text::{PROMPT, TextConfig};

// =============================================================================
// Test Doubles
// =============================================================================

/// Replays scripted lines; `"<EOF>"` becomes an end-of-input error.
struct ScriptedEditor {
    lines: Vec<String>,
    next: usize,
    prompts: Vec<String>,
    current_prompt: String,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            next: 0,
            prompts: Vec::new(),
            current_prompt: String::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn set_prompt(&mut self, prompt: &str) {
        self.current_prompt = prompt.to_string();
    }

    fn read_line(&mut self) -> Result<String> {
        self.prompts.push(self.current_prompt.clone());
        let line = self.lines.get(self.next);
        self.next += 1;
        match line {
            Some(line) if line != "<EOF>" => Ok(line.clone()),
            _ => Err(Error::eof()),
        }
    }

    fn add_history(&mut self, _line: &str) {}
}

#[derive(Default)]
struct StubHub {
    service: String,
    dispatched: Vec<String>,
    errors: Vec<String>,
}

impl Hub for StubHub {
    fn current_service_name(&self) -> &str {
        &self.service
    }

    fn dispatch(&mut self, line: &str) -> bool {
        self.dispatched.push(line.to_string());
        false
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn blank_lines_then_command_then_eof() {
    let mut hub = StubHub::default();
    let mut editor = ScriptedEditor::new(&["", "  ", "echo hi", "<EOF>", "late"]);

    let end = Repl::with_editor(&mut hub, &mut editor).run();

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(hub.dispatched, vec!["echo hi".to_string()]);
    assert_eq!(hub.errors.len(), 1);
    assert_eq!(editor.next, 4);
}

#[test]
fn prompt_with_and_without_service() {
    assert_eq!(make_prompt(""), PROMPT);
    assert_eq!(make_prompt("math"), format!("math {PROMPT}"));

    let mut hub = StubHub {
        service: "math".to_string(),
        ..StubHub::default()
    };
    let mut editor = ScriptedEditor::new(&["1 + 1"]);
    Repl::with_editor(&mut hub, &mut editor).run();
    assert!(editor.prompts.iter().all(|p| *p == format!("math {PROMPT}")));
}

#[test]
fn basic_hub_over_streams() {
    let mut hub = BasicHub::new(Vec::new(), TextConfig::plain());
    let mut prompts = Vec::new();
    let input = "say 'hi'\n   \nuse math\nhello\nquit\nnever\n";

    let end = run_session(&mut hub, input.as_bytes(), &mut prompts);

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(hub.current_service_name(), "math");
    assert_eq!(
        String::from_utf8(prompts).unwrap(),
        format!("{PROMPT}{PROMPT}{PROMPT}math {PROMPT}math {PROMPT}")
    );
    let out = String::from_utf8(hub.into_output()).unwrap();
    assert_eq!(
        out,
        "say 'hi'\nok\nhello\nThank you for using Charm. Have a nice day!\n"
    );
}

#[test]
fn basic_hub_reports_end_of_input() {
    let mut hub = BasicHub::new(Vec::new(), TextConfig::plain());
    let end = run_session(&mut hub, "".as_bytes(), Vec::new());

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(String::from_utf8(hub.into_output()).unwrap(), "Error: EOF\n");
}
