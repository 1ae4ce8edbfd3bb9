//! Integration tests for the markup highlighter

use charm::text::{Delimiter, ERROR, Highlighter, Palette, TextConfig};
use proptest::prelude::*;

const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn ansi() -> Highlighter {
    Highlighter::new(&TextConfig::default())
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn emphasis_span() {
    assert_eq!(ansi().highlight("'foo'"), format!("{CYAN}'foo'{RESET}"));
}

#[test]
fn type_span() {
    assert_eq!(ansi().highlight("<int>"), format!("{CYAN}<int>{RESET}"));
}

#[test]
fn error_kind_span() {
    assert_eq!(
        ansi().highlight("$Error$rest"),
        format!("{RED}Error{RESET}: rest")
    );
}

#[test]
fn error_tag_constant_renders_like_markup() {
    let message = format!("{ERROR}unknown command 'frob'");
    assert_eq!(
        ansi().highlight(&message),
        format!("{RED}Error{RESET}: unknown command {CYAN}'frob'{RESET}")
    );
}

#[test]
fn several_spans_on_one_line() {
    assert_eq!(
        ansi().highlight("expected <int>, got 'x'"),
        format!("expected {CYAN}<int>{RESET}, got {CYAN}'x'{RESET}")
    );
}

#[test]
fn multiline_message_resets_boundary_after_newline() {
    assert_eq!(
        ansi().highlight("first\n'second'"),
        format!("first\n{CYAN}'second'{RESET}")
    );
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn unmatched_opener_at_end() {
    assert_eq!(ansi().highlight("see <"), format!("see {CYAN}<"));
    assert_eq!(ansi().highlight("'"), format!("{CYAN}'"));
}

#[test]
fn calls_do_not_share_state() {
    let h = ansi();
    let _ = h.highlight("left 'open");
    assert_eq!(h.highlight("plain"), "plain");
}

#[test]
fn custom_palette_is_used() {
    let palette = Palette {
        cyan: "[c]",
        reset: "[/]",
        ..Palette::plain()
    };
    let h = Highlighter::new(&TextConfig::default().with_palette(palette));
    assert_eq!(h.highlight("'a' <b>"), "[c]'a'[/] [c]<b>[/]");
}

#[test]
fn continuation_inside_angle_span() {
    assert_eq!(
        ansi().highlight_from("int> done", Delimiter::Angle),
        format!("{CYAN}int>{RESET} done")
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Text with no delimiter characters comes back unchanged.
    #[test]
    fn identity_without_delimiters(input in "[a-zA-Z0-9 ,.:;!?()>\\n\\t-]*") {
        prop_assert_eq!(ansi().highlight(&input), input);
    }

    /// Highlighting is deterministic.
    #[test]
    fn deterministic(input in any::<String>()) {
        let h = ansi();
        prop_assert_eq!(h.highlight(&input), h.highlight(&input));
    }
}
