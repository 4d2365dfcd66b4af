use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// CSI sequences as emitted by Gradle's rich console: ESC [ params letter
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[A-Za-z]").expect("ANSI escape pattern is valid")
});

/// Remove ANSI colour/cursor sequences from a single line.
///
/// Borrows the input when nothing needs removing.
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(line, "")
}

/// Strip every line, producing a new owned sequence
pub fn strip_ansi_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| strip_ansi(line.as_ref()).into_owned())
        .collect()
}
