//! Paragraph merging — hyphenation repair and join-vs-newline decisions.

use regex::Regex;

use crate::error::ExtractError;

const BULLET_PATTERN: &str = r"^(•|-|–|\*|\d+\.)\s+";
const HEADING_PATTERN: &str = r"^[A-Z][A-Z\s]{3,}$";
const CAPTION_PATTERN: &str = r"(?i)^(figure|table|box)\s+\d";

/// Patterns deciding when two consecutive lines must NOT be joined into
/// one paragraph.
///
/// The checks run in a fixed order and short-circuit; see
/// [`should_join_with_space`](Self::should_join_with_space).
#[derive(Debug, Clone)]
pub struct JoinRules {
    bullet: Regex,
    heading: Regex,
    caption: Regex,
}

impl JoinRules {
    /// Build rules from custom patterns (bullet marker, all-caps heading,
    /// caption prefix). Useful for substituting a minimal rule set in tests.
    pub fn new(bullet: &str, heading: &str, caption: &str) -> Result<Self, ExtractError> {
        let compile = |name: &str, pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| ExtractError::ConfigError(format!("invalid {name} pattern: {e}")))
        };
        Ok(Self {
            bullet: compile("bullet", bullet)?,
            heading: compile("heading", heading)?,
            caption: compile("caption", caption)?,
        })
    }

    /// Decide whether `next` continues the paragraph ending in `prev`.
    ///
    /// Returns `false` (keep the newline) when any do-not-join condition
    /// holds, checked in order: blank `prev`, `next` starts a list item,
    /// `next` is an all-caps heading run, `next` is a figure/table/box
    /// caption, `prev` ends with terminal punctuation.
    pub fn should_join_with_space(&self, prev: &str, next: &str) -> bool {
        let prev = prev.trim_end();
        let next = next.trim_start();

        if prev.is_empty() {
            return false;
        }
        if self.starts_list_item(next) {
            return false;
        }
        if self.is_heading(next) {
            return false;
        }
        if self.is_caption(next) {
            return false;
        }
        if ends_sentence(prev) {
            return false;
        }
        true
    }

    /// Bullet or numbered list marker followed by a space.
    fn starts_list_item(&self, next: &str) -> bool {
        self.bullet.is_match(next)
    }

    /// All-caps heading-like run, four characters or more.
    fn is_heading(&self, next: &str) -> bool {
        self.heading.is_match(next)
    }

    /// Figure/table/box caption prefix, case-insensitive.
    fn is_caption(&self, next: &str) -> bool {
        self.caption.is_match(next)
    }
}

impl Default for JoinRules {
    fn default() -> Self {
        Self {
            bullet: Regex::new(BULLET_PATTERN).expect("default pattern is valid"),
            heading: Regex::new(HEADING_PATTERN).expect("default pattern is valid"),
            caption: Regex::new(CAPTION_PATTERN).expect("default pattern is valid"),
        }
    }
}

/// Terminal punctuation keeps the paragraph break.
fn ends_sentence(prev: &str) -> bool {
    prev.ends_with(['.', '!', '?', ':'])
}

/// Rejoin a word split across two lines by a trailing hyphen.
///
/// Merges when `prev` ends with `-` and `next` starts with a lowercase
/// letter: the hyphen is removed and the texts concatenate with no space
/// (`"transfor-"` + `"mation"` → `"transformation"`). Anything else —
/// including a capitalized continuation, which usually means a true
/// compound break — returns `None`.
pub fn merge_hyphenation(prev: &str, next: &str) -> Option<String> {
    let stem = prev.strip_suffix('-')?;
    let first = next.chars().next()?;
    if first.is_lowercase() {
        Some(format!("{stem}{next}"))
    } else {
        None
    }
}

/// Fold ordered line texts into paragraphs.
///
/// A single piece of state is carried: the last emitted line, taken back
/// by value each step. For every incoming line, in order: hyphenation
/// merge, join-with-space (per `rules`), otherwise emit as a new line.
/// The first line is emitted verbatim.
pub fn merge_paragraphs<I>(lines: I, rules: &JoinRules) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().fold(Vec::new(), |mut merged, line| {
        match merged.pop() {
            None => merged.push(line),
            Some(prev) => {
                if let Some(joined) = merge_hyphenation(&prev, &line) {
                    merged.push(joined);
                } else if rules.should_join_with_space(&prev, &line) {
                    merged.push(format!("{} {}", prev.trim_end(), line.trim_start()));
                } else {
                    merged.push(prev);
                    merged.push(line);
                }
            }
        }
        merged
    })
}
