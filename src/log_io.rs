// src/log_io.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SnipError;
use crate::extract::Snippet;

/// Decode bytes permissively; invalid UTF-8 sequences are dropped
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Line boundaries other than `\r`, which also absorbs a following `\n`
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into lines on every Unicode line boundary.
///
/// `\r\n` counts once, and a lone `\r` (Gradle's progress redraws) is a
/// break too. A trailing terminator adds no empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            ch if is_line_break(ch) => lines.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Read a build log into lines.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_log_lines(path: &Path) -> Result<Option<Vec<String>>, SnipError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SnipError::io(path, "reading", e)),
    };

    let lines = split_lines(&decode_ignoring_invalid(&bytes));
    tracing::debug!(path = %path.display(), bytes = bytes.len(), lines = lines.len(), "read build log");
    Ok(Some(lines))
}

/// Write the snippet as newline-joined text, replacing any existing file
pub fn write_snippet(path: &Path, snippet: &Snippet) -> Result<(), SnipError> {
    fs::write(path, snippet.to_text()).map_err(|e| SnipError::io(path, "writing", e))?;
    tracing::debug!(path = %path.display(), lines = snippet.len(), "wrote failure snippet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract, SnippetOrigin};
    use tempfile::TempDir;

    #[test]
    fn splits_all_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
    }

    #[test]
    fn blank_lines_preserved() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn splits_form_feeds_and_unicode_separators() {
        assert_eq!(split_lines("a\x0cFAILED\nb"), vec!["a", "FAILED", "b"]);
        assert_eq!(
            split_lines("a\x0bb\x1cc\x1dd\x1ee\u{85}f\u{2028}g\u{2029}h"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h"]
        );
    }

    #[test]
    fn invalid_utf8_is_dropped() {
        assert_eq!(decode_ignoring_invalid(b"BUILD \xffFAILED"), "BUILD FAILED");
        // Truncated multi-byte sequence at the end
        assert_eq!(decode_ignoring_invalid(b"ok \xe2\x82"), "ok ");
        assert_eq!(decode_ignoring_invalid("caf\u{e9}".as_bytes()), "caf\u{e9}");
    }

    #[test]
    fn marker_split_by_invalid_byte_still_matches() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("build.log");
        fs::write(&input, b"noise\nTest FAIL\xffED\nafter\n").unwrap();

        let lines = read_log_lines(&input).unwrap().unwrap();
        assert_eq!(lines, vec!["noise", "Test FAILED", "after"]);

        let snippet = extract(&lines);
        assert_eq!(snippet.origin, SnippetOrigin::Matched { rule: "failed", start: 1 });
        assert_eq!(snippet.to_text(), "Test FAILED\nafter");
    }

    #[test]
    fn missing_log_is_none() {
        let dir = TempDir::new().unwrap();
        let result = read_log_lines(&dir.path().join("nope.log")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn reads_and_writes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("build.log");
        let output = dir.path().join("snippet.txt");
        fs::write(&input, "compiling\nFAILURE: Build failed\n\nWhat went wrong\n\n").unwrap();

        let lines = read_log_lines(&input).unwrap().unwrap();
        let snippet = extract(&lines);
        write_snippet(&output, &snippet).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "FAILURE: Build failed\n\nWhat went wrong"
        );
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let snippet = extract(&["FAILURE: x"]);
        let err = write_snippet(&dir.path().join("missing").join("out.txt"), &snippet).unwrap_err();
        assert!(matches!(err, SnipError::Io { operation: "writing", .. }));
    }
}
