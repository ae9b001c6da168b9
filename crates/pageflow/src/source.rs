//! Token sources: where pages of positioned word tokens come from.
//!
//! The reconstruction pipeline never reads PDF binary structure itself; an
//! upstream extractor hands it pages of tokens through the [`TokenSource`]
//! trait. Two sources ship with the crate: [`JsonlTokenSource`] for the
//! token JSON-Lines wire format, and [`VecTokenSource`] for in-memory pages.

use std::path::Path;

use pageflow_core::{ExtractError, Token};
use serde::{Deserialize, Serialize};

use crate::Page;

/// One page of tokens as carried on the wire and in memory.
///
/// `page_number` is 1-based, matching the numbering printed in the text
/// output's page markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPage {
    /// 1-based page number.
    pub page_number: usize,
    /// Page width in page units.
    pub width: f64,
    /// Page height in page units.
    pub height: f64,
    /// The page's tokens, in no particular order.
    pub tokens: Vec<Token>,
}

/// A supplier of token pages.
///
/// Implementations hold the pages however they like; [`page`](Self::page)
/// hands out an owned [`Page`] by 0-based index.
pub trait TokenSource {
    /// Number of pages the source can supply.
    fn page_count(&self) -> usize;

    /// Produce the page at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when the index is out of range or the page
    /// cannot be produced.
    fn page(&self, index: usize) -> Result<Page, ExtractError>;
}

fn page_at(pages: &[TokenPage], index: usize) -> Result<Page, ExtractError> {
    let page = pages.get(index).ok_or_else(|| {
        ExtractError::IoError(format!(
            "page index {index} out of range ({} pages)",
            pages.len()
        ))
    })?;
    Ok(Page::new(
        page.page_number,
        page.width,
        page.height,
        page.tokens.clone(),
    ))
}

/// Token source backed by a token JSON-Lines document.
///
/// Each input line is one [`TokenPage`] object:
///
/// ```text
/// {"page_number": 1, "width": 612.0, "height": 792.0,
///  "tokens": [{"text": "Hello", "x0": 10.0, "x1": 40.0, "top": 100.0, "bottom": 112.0}, ...]}
/// ```
///
/// Blank lines are skipped. The whole document is parsed up front, so a
/// malformed line fails the open rather than a later page access. Pages
/// keep their file order.
#[derive(Debug)]
pub struct JsonlTokenSource {
    pages: Vec<TokenPage>,
}

impl JsonlTokenSource {
    /// Parse a token JSON-Lines document from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ParseError`] naming the 1-based line number
    /// of the first malformed line.
    pub fn open(content: &str) -> Result<Self, ExtractError> {
        let mut pages = Vec::new();
        for (line_index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let page: TokenPage = serde_json::from_str(line).map_err(|e| {
                ExtractError::ParseError(format!("line {}: {e}", line_index + 1))
            })?;
            pages.push(page);
        }
        Ok(Self { pages })
    }

    /// Read and parse a token JSON-Lines file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::IoError`] when the file cannot be read and
    /// [`ExtractError::ParseError`] for a malformed line.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::open(&content)
    }
}

impl TokenSource for JsonlTokenSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Page, ExtractError> {
        page_at(&self.pages, index)
    }
}

/// Token source over in-memory pages, for tests and embedding.
pub struct VecTokenSource {
    pages: Vec<TokenPage>,
}

impl VecTokenSource {
    /// Wrap a list of pages; they are served in list order.
    pub fn new(pages: Vec<TokenPage>) -> Self {
        Self { pages }
    }
}

impl TokenSource for VecTokenSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Page, ExtractError> {
        page_at(&self.pages, index)
    }
}
