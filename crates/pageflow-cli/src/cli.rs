use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Reconstruct reading-ordered page text from positioned word tokens.
#[derive(Debug, Parser)]
#[command(name = "pageflow", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct page text and write the text and JSONL outputs
    Extract {
        /// Path to the token file (one page object per line)
        #[arg(value_name = "TOKENS")]
        tokens: PathBuf,

        /// Text output path
        #[arg(long, value_name = "PATH", default_value = "output.txt")]
        out: PathBuf,

        /// Per-page JSONL output path
        #[arg(long, value_name = "PATH", default_value = "output_pages.jsonl")]
        jsonl: PathBuf,

        /// Maximum number of pages to process. Default: all pages
        #[arg(long, value_name = "N")]
        max_pages: Option<usize>,

        /// Vertical tolerance for grouping tokens into rows (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        y_tol: f64,

        /// Keep repeated headers, footers, and page numbers
        #[arg(long)]
        keep_headers_footers: bool,

        /// Exclude tokens whose vertical center falls above this offset (default: 0.0)
        #[arg(long, default_value_t = 0.0)]
        crop_top: f64,

        /// Exclude tokens whose vertical center falls below the page height
        /// minus this offset (default: 0.0)
        #[arg(long, default_value_t = 0.0)]
        crop_bottom: f64,
    },

    /// Print classified, reading-ordered lines for inspection
    Lines {
        /// Path to the token file (one page object per line)
        #[arg(value_name = "TOKENS")]
        tokens: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Maximum number of pages to process. Default: all pages
        #[arg(long, value_name = "N")]
        max_pages: Option<usize>,

        /// Vertical tolerance for grouping tokens into rows (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        y_tol: f64,

        /// Exclude tokens whose vertical center falls above this offset (default: 0.0)
        #[arg(long, default_value_t = 0.0)]
        crop_top: f64,

        /// Exclude tokens whose vertical center falls below the page height
        /// minus this offset (default: 0.0)
        #[arg(long, default_value_t = 0.0)]
        crop_bottom: f64,
    },
}

/// Output format for the lines subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
