use std::path::Path;

use pageflow::{ExtractOptions, write_records};

use crate::shared::{ProgressReporter, capped_page_count, check_options, open_document};

#[allow(clippy::too_many_arguments)]
pub fn run(
    tokens: &Path,
    out: &Path,
    jsonl: &Path,
    max_pages: Option<usize>,
    y_tol: f64,
    keep_headers_footers: bool,
    crop_top: f64,
    crop_bottom: f64,
) -> Result<(), i32> {
    let options = ExtractOptions {
        max_pages,
        y_tolerance: y_tol,
        drop_boilerplate: !keep_headers_footers,
        crop_top,
        crop_bottom,
        ..ExtractOptions::default()
    };
    check_options(&options)?;

    let doc = open_document(tokens)?;
    let page_count = capped_page_count(doc.page_count(), max_pages);
    let progress = ProgressReporter::new(page_count);

    let mut records = Vec::with_capacity(page_count);
    for index in 0..page_count {
        progress.report(index + 1);

        let page = doc.page(index).map_err(|e| {
            eprintln!("Error reading page {}: {e}", index + 1);
            1
        })?;
        records.push(page.reconstruct(&options));
    }
    progress.finish();

    let summary = write_records(&records, out, jsonl).map_err(|e| {
        eprintln!("Error writing output: {e}");
        1
    })?;

    println!(
        "Done.\n- Text:   {}\n- JSONL:  {}\n- Pages:  {}",
        summary.text_path.display(),
        summary.jsonl_path.display(),
        summary.pages_processed,
    );
    Ok(())
}
