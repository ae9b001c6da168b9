//! pageflow-core: Backend-independent types and reconstruction algorithms.
//!
//! This crate provides the foundational types (Token, Line, ExtractOptions)
//! and the page reconstruction pipeline (row grouping, gutter splitting,
//! column classification, reading order, boilerplate filtering, paragraph
//! merging) used by pageflow-rs. It performs no I/O; feeding tokens in and
//! writing results out is the facade crate's job.

pub mod boilerplate;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod options;
pub mod paragraph;
pub mod token;

pub use boilerplate::{BoilerplateRules, filter_lines};
pub use error::ExtractError;
pub use layout::{
    Line, LineKind, build_line, classify_columns, group_into_rows, lines_from_tokens,
    sort_reading_order, split_row_at_gutters,
};
pub use normalize::normalize_space;
pub use options::ExtractOptions;
pub use paragraph::{JoinRules, merge_hyphenation, merge_paragraphs};
pub use token::Token;
