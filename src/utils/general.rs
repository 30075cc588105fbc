//! Utility functions and helpers.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Resolves the text to analyze from the CLI inputs: inline argument,
/// file path, or stdin (when neither is given).
pub fn read_text_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

/// Truncates `text` to at most `max_chars` characters, respecting
/// char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn inline_text_wins_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from file").unwrap();
        let text = read_text_input(Some("inline"), Some(file.path())).unwrap();
        assert_eq!(text, "inline");
    }

    #[test]
    fn file_input_is_read() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "from file").unwrap();
        let text = read_text_input(None, Some(file.path())).unwrap();
        assert_eq!(text, "from file");
    }

    #[test]
    fn missing_file_errors() {
        let result = read_text_input(None, Some(Path::new("/nonexistent/input.txt")));
        assert!(result.is_err());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 5), "");
    }
}
