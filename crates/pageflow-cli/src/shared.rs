use std::io::{self, IsTerminal, Write};
use std::path::Path;

use pageflow::{Document, ExtractOptions, JsonlTokenSource, LineKind};

/// Open a token file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or contains a malformed token line.
pub fn open_document(tokens: &Path) -> Result<Document<JsonlTokenSource>, i32> {
    if !tokens.exists() {
        eprintln!("Error: file not found: {}", tokens.display());
        return Err(1);
    }

    let source = JsonlTokenSource::open_file(tokens).map_err(|e| {
        eprintln!("Error: failed to read token file: {e}");
        1
    })?;
    Ok(Document::new(source))
}

/// Validate extraction options before touching any page.
pub fn check_options(options: &ExtractOptions) -> Result<(), i32> {
    options.validate().map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Number of pages a run will actually process under an optional cap.
pub fn capped_page_count(total: usize, max_pages: Option<usize>) -> usize {
    max_pages.map_or(total, |cap| total.min(cap))
}

/// Convert a `LineKind` enum value to a lowercase string.
pub fn kind_str(kind: &LineKind) -> &'static str {
    match kind {
        LineKind::Full => "full",
        LineKind::Left => "left",
        LineKind::Right => "right",
        LineKind::Unclassified => "unclassified",
    }
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// A progress reporter that prints "Processing page N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` pages.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for page `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty {
            eprint!("\rProcessing page {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            // Clear the line with carriage return and spaces
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_str_full() {
        assert_eq!(kind_str(&LineKind::Full), "full");
    }

    #[test]
    fn kind_str_left() {
        assert_eq!(kind_str(&LineKind::Left), "left");
    }

    #[test]
    fn kind_str_right() {
        assert_eq!(kind_str(&LineKind::Right), "right");
    }

    #[test]
    fn kind_str_unclassified() {
        assert_eq!(kind_str(&LineKind::Unclassified), "unclassified");
    }

    #[test]
    fn csv_escape_plain_text() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn csv_escape_with_comma() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
    }

    #[test]
    fn csv_escape_with_quotes() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_escape_with_newline() {
        assert_eq!(csv_escape("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn csv_escape_empty_string() {
        assert_eq!(csv_escape(""), "");
    }

    #[test]
    fn open_document_file_not_found() {
        let result = open_document(Path::new("/nonexistent/tokens.jsonl"));
        match result {
            Err(code) => assert_eq!(code, 1),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn check_options_accepts_defaults() {
        assert!(check_options(&ExtractOptions::default()).is_ok());
    }

    #[test]
    fn check_options_rejects_negative_tolerance() {
        let options = ExtractOptions {
            y_tolerance: -1.0,
            ..ExtractOptions::default()
        };
        assert_eq!(check_options(&options).unwrap_err(), 1);
    }

    #[test]
    fn capped_page_count_without_cap() {
        assert_eq!(capped_page_count(5, None), 5);
    }

    #[test]
    fn capped_page_count_with_cap_below_total() {
        assert_eq!(capped_page_count(5, Some(2)), 2);
    }

    #[test]
    fn capped_page_count_with_cap_above_total() {
        assert_eq!(capped_page_count(5, Some(9)), 5);
    }

    #[test]
    fn progress_reporter_creation() {
        let reporter = ProgressReporter::new(10);
        assert_eq!(reporter.total, 10);
        // is_tty depends on test environment; just verify it doesn't panic
    }
}
