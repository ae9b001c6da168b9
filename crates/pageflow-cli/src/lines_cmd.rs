use std::path::Path;

use pageflow::{Document, ExtractOptions, JsonlTokenSource};

use crate::cli::OutputFormat;
use crate::shared::{
    ProgressReporter, capped_page_count, check_options, csv_escape, kind_str, open_document,
};

pub fn run(
    tokens: &Path,
    format: &OutputFormat,
    max_pages: Option<usize>,
    y_tol: f64,
    crop_top: f64,
    crop_bottom: f64,
) -> Result<(), i32> {
    let options = ExtractOptions {
        max_pages,
        y_tolerance: y_tol,
        crop_top,
        crop_bottom,
        ..ExtractOptions::default()
    };
    check_options(&options)?;

    let doc = open_document(tokens)?;
    let page_count = capped_page_count(doc.page_count(), max_pages);
    let progress = ProgressReporter::new(page_count);

    match format {
        OutputFormat::Text => write_text(&doc, page_count, &options, &progress),
        OutputFormat::Json => write_json(&doc, page_count, &options, &progress),
        OutputFormat::Csv => write_csv(&doc, page_count, &options, &progress),
    }
}

fn write_text(
    doc: &Document<JsonlTokenSource>,
    page_count: usize,
    options: &ExtractOptions,
    progress: &ProgressReporter,
) -> Result<(), i32> {
    println!("page\tkind\ty\tx0\tx1\ttext");

    for index in 0..page_count {
        progress.report(index + 1);

        let page = doc.page(index).map_err(|e| {
            eprintln!("Error reading page {}: {e}", index + 1);
            1
        })?;

        for line in &page.lines(options) {
            println!(
                "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{}",
                page.page_number(),
                kind_str(&line.kind),
                line.y,
                line.x0,
                line.x1,
                line.text,
            );
        }
    }

    progress.finish();
    Ok(())
}

fn write_json(
    doc: &Document<JsonlTokenSource>,
    page_count: usize,
    options: &ExtractOptions,
    progress: &ProgressReporter,
) -> Result<(), i32> {
    let mut all_lines = Vec::new();

    for index in 0..page_count {
        progress.report(index + 1);

        let page = doc.page(index).map_err(|e| {
            eprintln!("Error reading page {}: {e}", index + 1);
            1
        })?;

        for line in &page.lines(options) {
            all_lines.push(serde_json::json!({
                "page": page.page_number(),
                "kind": kind_str(&line.kind),
                "y": line.y,
                "x0": line.x0,
                "x1": line.x1,
                "text": line.text,
            }));
        }
    }

    let json_str = serde_json::to_string(&all_lines).unwrap();
    println!("{json_str}");

    progress.finish();
    Ok(())
}

fn write_csv(
    doc: &Document<JsonlTokenSource>,
    page_count: usize,
    options: &ExtractOptions,
    progress: &ProgressReporter,
) -> Result<(), i32> {
    println!("page,kind,y,x0,x1,text");

    for index in 0..page_count {
        progress.report(index + 1);

        let page = doc.page(index).map_err(|e| {
            eprintln!("Error reading page {}: {e}", index + 1);
            1
        })?;

        for line in &page.lines(options) {
            println!(
                "{},{},{:.2},{:.2},{:.2},{}",
                page.page_number(),
                kind_str(&line.kind),
                line.y,
                line.x0,
                line.x1,
                csv_escape(&line.text),
            );
        }
    }

    progress.finish();
    Ok(())
}
