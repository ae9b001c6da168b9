mod cli;
mod extract_cmd;
mod lines_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref tokens,
            ref out,
            ref jsonl,
            max_pages,
            y_tol,
            keep_headers_footers,
            crop_top,
            crop_bottom,
        } => extract_cmd::run(
            tokens,
            out,
            jsonl,
            max_pages,
            y_tol,
            keep_headers_footers,
            crop_top,
            crop_bottom,
        ),
        cli::Commands::Lines {
            ref tokens,
            ref format,
            max_pages,
            y_tol,
            crop_top,
            crop_bottom,
        } => lines_cmd::run(tokens, format, max_pages, y_tol, crop_top, crop_bottom),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
