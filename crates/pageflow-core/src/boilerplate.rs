//! Boilerplate detection — page numbers and running headers.

use regex::Regex;

use crate::error::ExtractError;
use crate::layout::Line;
use crate::normalize::normalize_space;

const PAGE_NUMBER_PATTERN: &str = r"^\d+$";
const STANDALONE_NUMBER_PATTERN: &str = r"\b\d+\b";

/// Patterns identifying boilerplate lines eligible for removal.
///
/// All matching happens on the whitespace-normalized, lower-cased line
/// text. The defaults target the report family this pipeline was built
/// against; swap the phrases per document family via
/// [`BoilerplateRules::new`].
#[derive(Debug, Clone)]
pub struct BoilerplateRules {
    title_phrase: String,
    dateline_prefix: String,
    page_number: Regex,
    standalone_number: Regex,
}

impl BoilerplateRules {
    /// Build rules around a report-title phrase and a dateline prefix.
    ///
    /// Both phrases are matched case-insensitively (stored lower-cased).
    /// The page-number patterns start from the defaults; override with
    /// [`with_page_number_pattern`](Self::with_page_number_pattern).
    pub fn new(title_phrase: &str, dateline_prefix: &str) -> Self {
        Self {
            title_phrase: title_phrase.to_lowercase(),
            dateline_prefix: dateline_prefix.to_lowercase(),
            page_number: Regex::new(PAGE_NUMBER_PATTERN).expect("default pattern is valid"),
            standalone_number: Regex::new(STANDALONE_NUMBER_PATTERN)
                .expect("default pattern is valid"),
        }
    }

    /// Replace the pattern a line must fully match to count as a bare
    /// page number.
    pub fn with_page_number_pattern(mut self, pattern: &str) -> Result<Self, ExtractError> {
        self.page_number = Regex::new(pattern)
            .map_err(|e| ExtractError::ConfigError(format!("invalid page-number pattern: {e}")))?;
        Ok(self)
    }

    /// True when the line should be dropped as boilerplate.
    ///
    /// The checks run in order and short-circuit: bare page number, then
    /// title phrase alongside a standalone integer, then dateline prefix
    /// followed by the title phrase.
    pub fn is_boilerplate(&self, line: &str) -> bool {
        let s = normalize_space(line).to_lowercase();
        self.is_page_number(&s) || self.is_numbered_running_header(&s) || self.is_dateline_header(&s)
    }

    /// Bare page number: the whole line is an integer.
    fn is_page_number(&self, s: &str) -> bool {
        self.page_number.is_match(s)
    }

    /// Running header carrying the title phrase plus a standalone integer.
    fn is_numbered_running_header(&self, s: &str) -> bool {
        s.contains(&self.title_phrase) && self.standalone_number.is_match(s)
    }

    /// Dateline header: starts with the dateline prefix and names the title.
    fn is_dateline_header(&self, s: &str) -> bool {
        s.starts_with(&self.dateline_prefix) && s.contains(&self.title_phrase)
    }
}

impl Default for BoilerplateRules {
    fn default() -> Self {
        Self::new("future of jobs report", "january 2025")
    }
}

/// Reduce ordered lines to their texts, dropping blanks and (when rules
/// are supplied) boilerplate.
///
/// Blank lines are removed unconditionally; boilerplate checks apply only
/// when `rules` is `Some`, so disabling the filter never drops content.
pub fn filter_lines(lines: &[Line], rules: Option<&BoilerplateRules>) -> Vec<String> {
    let mut filtered = Vec::new();
    for line in lines {
        if line.text.is_empty() {
            continue;
        }
        if let Some(rules) = rules {
            if rules.is_boilerplate(&line.text) {
                continue;
            }
        }
        filtered.push(line.text.clone());
    }
    filtered
}
