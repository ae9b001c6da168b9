//! Document type driving reconstruction and file output across a source.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pageflow_core::{ExtractError, ExtractOptions};

use crate::page::{Page, PageRecord};
use crate::source::TokenSource;

/// Iterator over pages of a document, yielding each page on demand.
///
/// Created by [`Document::pages_iter()`]. Each call to
/// [`next()`](Iterator::next) pulls one page from the token source; yielded
/// pages are owned by the caller and not retained here.
pub struct PagesIter<'a, S: TokenSource> {
    document: &'a Document<S>,
    current: usize,
    count: usize,
}

impl<S: TokenSource> Iterator for PagesIter<'_, S> {
    type Item = Result<Page, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.count {
            return None;
        }
        let result = self.document.page(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl<S: TokenSource> ExactSizeIterator for PagesIter<'_, S> {}

/// A document of token pages ready for reconstruction.
///
/// Wraps a [`TokenSource`] and provides page access, per-page
/// reconstruction across the document, and the two-file output writer.
///
/// # Example
///
/// ```ignore
/// let doc = Document::new(JsonlTokenSource::open_file("tokens.jsonl")?);
/// let summary = doc.extract_to_files(&ExtractOptions::default(), "out.txt", "out.jsonl")?;
/// println!("{} pages", summary.pages_processed);
/// ```
pub struct Document<S> {
    source: S,
}

impl<S: TokenSource> Document<S> {
    /// Wrap a token source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Return the number of pages the source supplies.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the index is out of range or the source
    /// fails to produce the page.
    pub fn page(&self, index: usize) -> Result<Page, ExtractError> {
        self.source.page(index)
    }

    /// Return a streaming iterator over all pages in the document.
    pub fn pages_iter(&self) -> PagesIter<'_, S> {
        PagesIter {
            document: self,
            current: 0,
            count: self.page_count(),
        }
    }

    /// Pages to process under `options`: all of them, capped by `max_pages`.
    fn effective_page_count(&self, options: &ExtractOptions) -> usize {
        let total = self.page_count();
        options.max_pages.map_or(total, |cap| total.min(cap))
    }

    /// Reconstruct every page in document order.
    ///
    /// Pages are processed strictly in index order, each fully
    /// reconstructed before the next begins. Honors `max_pages`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ConfigError`] when `options` fail
    /// validation, before any page is touched, and any source error as is.
    pub fn page_records(
        &self,
        options: &ExtractOptions,
    ) -> Result<Vec<PageRecord>, ExtractError> {
        options.validate()?;
        let count = self.effective_page_count(options);
        let mut records = Vec::with_capacity(count);
        for index in 0..count {
            records.push(self.page(index)?.reconstruct(options));
        }
        Ok(records)
    }

    /// Reconstruct all pages and write the text and JSONL output files.
    ///
    /// Equivalent to [`page_records`](Self::page_records) followed by
    /// [`write_records`].
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] for invalid options, a failing source, or
    /// an output file that cannot be written.
    pub fn extract_to_files(
        &self,
        options: &ExtractOptions,
        text_path: impl AsRef<Path>,
        jsonl_path: impl AsRef<Path>,
    ) -> Result<ExtractSummary, ExtractError> {
        let records = self.page_records(options)?;
        write_records(&records, text_path, jsonl_path)
    }
}

#[cfg(feature = "parallel")]
impl<S: TokenSource + Sync> Document<S> {
    /// Reconstruct all pages in parallel using rayon.
    ///
    /// Pages are independent, so they reconstruct concurrently; the
    /// returned records are re-sorted into page-number order, making the
    /// result interchangeable with [`page_records`](Self::page_records)
    /// for sources whose page numbers follow file order.
    ///
    /// # Errors
    ///
    /// Same contract as [`page_records`](Self::page_records).
    pub fn page_records_parallel(
        &self,
        options: &ExtractOptions,
    ) -> Result<Vec<PageRecord>, ExtractError> {
        use rayon::prelude::*;

        options.validate()?;
        let count = self.effective_page_count(options);
        let mut records: Vec<PageRecord> = (0..count)
            .into_par_iter()
            .map(|index| self.page(index).map(|page| page.reconstruct(options)))
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(|record| record.page_number);
        Ok(records)
    }
}

/// What an extraction run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSummary {
    /// Number of pages reconstructed and written.
    pub pages_processed: usize,
    /// Total merged paragraph lines across all pages.
    pub lines_emitted: usize,
    /// Path the concatenated text output was written to.
    pub text_path: PathBuf,
    /// Path the JSONL output was written to.
    pub jsonl_path: PathBuf,
}

/// Write page records to the two output files.
///
/// The JSONL file gets one record per line, UTF-8, non-ASCII text kept
/// verbatim. The text file concatenates every page as
/// `"\n\n--- PAGE {page_number} ---\n\n{text}"` and trims the surrounding
/// whitespace, so the file starts directly at the first page marker. Both
/// files are created fresh and flushed before returning.
///
/// # Errors
///
/// Returns [`ExtractError::IoError`] when either file cannot be created
/// or written.
pub fn write_records(
    records: &[PageRecord],
    text_path: impl AsRef<Path>,
    jsonl_path: impl AsRef<Path>,
) -> Result<ExtractSummary, ExtractError> {
    let text_path = text_path.as_ref();
    let jsonl_path = jsonl_path.as_ref();

    let mut jsonl = BufWriter::new(File::create(jsonl_path)?);
    for record in records {
        let line = serde_json::to_string(record)
            .map_err(|e| ExtractError::IoError(format!("encoding page record: {e}")))?;
        writeln!(jsonl, "{line}")?;
    }
    jsonl.flush()?;

    let mut text = String::new();
    for record in records {
        text.push_str(&format!(
            "\n\n--- PAGE {} ---\n\n{}",
            record.page_number, record.text
        ));
    }
    std::fs::write(text_path, text.trim())?;

    Ok(ExtractSummary {
        pages_processed: records.len(),
        lines_emitted: records.iter().map(|r| r.line_count).sum(),
        text_path: text_path.to_path_buf(),
        jsonl_path: jsonl_path.to_path_buf(),
    })
}
