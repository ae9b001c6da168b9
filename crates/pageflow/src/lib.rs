//! pageflow: Reconstruct reading-ordered page text from positioned word tokens.
//!
//! This is the public API facade crate for pageflow-rs. It re-exports types
//! from pageflow-core and adds the I/O layer: token sources, per-page
//! reconstruction through [`Page`], and document-level extraction through
//! [`Document`].
//!
//! # Architecture
//!
//! - **pageflow-core**: Backend-independent types and the reconstruction
//!   pipeline (pure, no I/O)
//! - **pageflow** (this crate): Token sources, `Page`/`Document`, file output
//!
//! # Example
//!
//! ```ignore
//! use pageflow::{Document, ExtractOptions, JsonlTokenSource};
//!
//! let source = JsonlTokenSource::open_file("tokens.jsonl")?;
//! let doc = Document::new(source);
//! let summary = doc.extract_to_files(&ExtractOptions::default(), "out.txt", "pages.jsonl")?;
//! println!("{} pages, {} lines", summary.pages_processed, summary.lines_emitted);
//! ```

pub mod document;
pub mod page;
pub mod source;

pub use document::{Document, ExtractSummary, PagesIter, write_records};
pub use page::{Page, PageRecord};
pub use source::{JsonlTokenSource, TokenPage, TokenSource, VecTokenSource};

pub use pageflow_core;
pub use pageflow_core::{
    BoilerplateRules, ExtractError, ExtractOptions, JoinRules, Line, LineKind, Token,
};
