//! Page type running the reconstruction pipeline over one page's tokens.

use pageflow_core::{
    ExtractOptions, Line, Token, classify_columns, filter_lines, lines_from_tokens,
    merge_paragraphs, sort_reading_order,
};
use serde::{Deserialize, Serialize};

/// A single page of tokens awaiting reconstruction.
///
/// Carries the page's dimensions and tokens; [`lines`](Self::lines) and
/// [`reconstruct`](Self::reconstruct) run the pipeline on demand, so one
/// page can be reconstructed repeatedly under different options.
pub struct Page {
    /// 1-based page number from the token source.
    page_number: usize,
    /// Page width in page units.
    width: f64,
    /// Page height in page units.
    height: f64,
    /// Tokens on this page, in no particular order.
    tokens: Vec<Token>,
}

impl Page {
    /// Create a page from its dimensions and tokens.
    pub fn new(page_number: usize, width: f64, height: f64, tokens: Vec<Token>) -> Self {
        Self {
            page_number,
            width,
            height,
            tokens,
        }
    }

    /// Returns the 1-based page number.
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Returns the page width in page units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the page height in page units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the page's tokens as supplied by the source.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens inside the effective vertical band `[crop_top, height -
    /// crop_bottom]`, judged by bounding-box vertical center. With both
    /// crops at zero every token passes, even strays outside the page box.
    fn band_tokens(&self, options: &ExtractOptions) -> Vec<Token> {
        if options.crop_top <= 0.0 && options.crop_bottom <= 0.0 {
            return self.tokens.clone();
        }
        let band_top = options.crop_top;
        let band_bottom = self.height - options.crop_bottom;
        self.tokens
            .iter()
            .filter(|t| {
                let mid = t.mid_y();
                band_top <= mid && mid <= band_bottom
            })
            .cloned()
            .collect()
    }

    /// Classified, reading-ordered lines for this page.
    ///
    /// Runs crop, row grouping, gutter splitting, column classification,
    /// and reading-order sequencing. Boilerplate filtering and paragraph
    /// merging are left to [`reconstruct`](Self::reconstruct); inspection
    /// tooling wants the lines before those lossy steps.
    pub fn lines(&self, options: &ExtractOptions) -> Vec<Line> {
        let tokens = self.band_tokens(options);
        let lines = lines_from_tokens(&tokens, options.y_tolerance, options.min_gap);
        let lines = classify_columns(lines, self.width, options.gutter_ratio);
        sort_reading_order(lines)
    }

    /// Run the full pipeline and emit this page's [`PageRecord`].
    ///
    /// A page with no tokens (or none surviving the crop) yields a record
    /// with empty `text` and `line_count` 0.
    pub fn reconstruct(&self, options: &ExtractOptions) -> PageRecord {
        let lines = self.lines(options);
        let rules = options.drop_boilerplate.then_some(&options.boilerplate);
        let kept = filter_lines(&lines, rules);
        let merged = merge_paragraphs(kept, &options.join);

        PageRecord {
            page_number: self.page_number,
            width: self.width,
            height: self.height,
            line_count: merged.len(),
            text: merged.join("\n"),
        }
    }
}

/// The reconstructed output for one page, as written to the JSONL file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-based page number, also printed in the text output's page marker.
    pub page_number: usize,
    /// Page width in page units.
    pub width: f64,
    /// Page height in page units.
    pub height: f64,
    /// Reading-ordered page text, one merged paragraph per line.
    pub text: String,
    /// Number of merged paragraph lines in `text`.
    pub line_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_core::LineKind;

    fn make_token(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> Token {
        Token::new(text, x0, top, x1, bottom)
    }

    /// Two-column page, width 612: left column around x 20..280, right
    /// column around x 330..590.
    fn two_column_page() -> Page {
        Page::new(
            1,
            612.0,
            792.0,
            vec![
                make_token("Title", 200.0, 50.0, 420.0, 64.0),
                make_token("Left", 20.0, 100.0, 60.0, 112.0),
                make_token("one", 65.0, 100.0, 90.0, 112.0),
                make_token("Right", 330.0, 100.0, 375.0, 112.0),
                make_token("one", 380.0, 100.0, 405.0, 112.0),
                make_token("Left", 20.0, 130.0, 60.0, 142.0),
                make_token("two", 65.0, 130.0, 90.0, 142.0),
                make_token("Right", 330.0, 130.0, 375.0, 142.0),
                make_token("two", 380.0, 130.0, 405.0, 142.0),
            ],
        )
    }

    // --- accessors ---

    #[test]
    fn accessors_return_construction_values() {
        let page = Page::new(4, 595.0, 842.0, vec![make_token("a", 0.0, 0.0, 5.0, 10.0)]);
        assert_eq!(page.page_number(), 4);
        assert_eq!(page.width(), 595.0);
        assert_eq!(page.height(), 842.0);
        assert_eq!(page.tokens().len(), 1);
    }

    // --- lines ---

    #[test]
    fn lines_orders_full_then_left_then_right() {
        let page = two_column_page();
        let lines = page.lines(&ExtractOptions::default());
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Title",
                "Left one",
                "Left two",
                "Right one",
                "Right two"
            ]
        );
        assert_eq!(lines[0].kind, LineKind::Full);
        assert_eq!(lines[1].kind, LineKind::Left);
        assert_eq!(lines[3].kind, LineKind::Right);
    }

    #[test]
    fn lines_empty_page() {
        let page = Page::new(1, 612.0, 792.0, Vec::new());
        assert!(page.lines(&ExtractOptions::default()).is_empty());
    }

    #[test]
    fn lines_crop_excludes_header_band() {
        let opts = ExtractOptions {
            crop_top: 70.0,
            ..ExtractOptions::default()
        };
        let page = two_column_page();
        let lines = page.lines(&opts);
        assert!(lines.iter().all(|l| l.text != "Title"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn lines_crop_bottom_excludes_footer_band() {
        // Band becomes [0, 120]; rows at top 130 fall outside (mid_y 136).
        let opts = ExtractOptions {
            crop_bottom: 672.0,
            ..ExtractOptions::default()
        };
        let page = two_column_page();
        let lines = page.lines(&opts);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Title", "Left one", "Right one"]);
    }

    #[test]
    fn lines_band_membership_uses_token_center() {
        // Token spans top 95..112, center 103.5: a crop_top of 100 keeps it
        // (103.5 >= 100) even though its top edge lies above the band.
        let page = Page::new(1, 612.0, 792.0, vec![make_token("edge", 10.0, 95.0, 50.0, 112.0)]);
        let keeps = ExtractOptions {
            crop_top: 100.0,
            ..ExtractOptions::default()
        };
        assert_eq!(page.lines(&keeps).len(), 1);

        let drops = ExtractOptions {
            crop_top: 104.0,
            ..ExtractOptions::default()
        };
        assert!(page.lines(&drops).is_empty());
    }

    #[test]
    fn lines_zero_crop_keeps_out_of_box_strays() {
        // A token centered below the page box survives when cropping is off.
        let page = Page::new(1, 612.0, 792.0, vec![make_token("stray", 10.0, 800.0, 50.0, 812.0)]);
        assert_eq!(page.lines(&ExtractOptions::default()).len(), 1);
    }

    // --- reconstruct ---

    #[test]
    fn reconstruct_empty_page_yields_empty_record() {
        let page = Page::new(2, 612.0, 792.0, Vec::new());
        let record = page.reconstruct(&ExtractOptions::default());
        assert_eq!(record.page_number, 2);
        assert_eq!(record.text, "");
        assert_eq!(record.line_count, 0);
    }

    #[test]
    fn reconstruct_left_column_precedes_right() {
        let page = two_column_page();
        let record = page.reconstruct(&ExtractOptions::default());
        let left = record.text.find("Left two").unwrap();
        let right = record.text.find("Right one").unwrap();
        assert!(left < right);
    }

    /// Body text in the left column plus a bare page number in the right.
    fn page_with_page_number() -> Page {
        Page::new(
            1,
            612.0,
            792.0,
            vec![
                make_token("Body.", 20.0, 100.0, 60.0, 112.0),
                make_token("17", 520.0, 760.0, 532.0, 772.0),
            ],
        )
    }

    #[test]
    fn reconstruct_drops_page_number_line_by_default() {
        let record = page_with_page_number().reconstruct(&ExtractOptions::default());
        assert_eq!(record.text, "Body.");
        assert_eq!(record.line_count, 1);
    }

    #[test]
    fn reconstruct_keeps_boilerplate_when_disabled() {
        let opts = ExtractOptions {
            drop_boilerplate: false,
            ..ExtractOptions::default()
        };
        let record = page_with_page_number().reconstruct(&opts);
        // "Body." ends a sentence, so "17" stays on its own line.
        assert_eq!(record.text, "Body.\n17");
        assert_eq!(record.line_count, 2);
    }

    #[test]
    fn reconstruct_merges_hyphenated_continuation() {
        // One narrow column; "transfor-" ends the first line and the next
        // starts lowercase, so the hyphen merge applies.
        let page = Page::new(
            1,
            612.0,
            792.0,
            vec![
                make_token("digital", 20.0, 100.0, 80.0, 112.0),
                make_token("transfor-", 85.0, 100.0, 160.0, 112.0),
                make_token("mation", 20.0, 130.0, 80.0, 142.0),
                make_token("continues", 85.0, 130.0, 170.0, 142.0),
            ],
        );
        let record = page.reconstruct(&ExtractOptions::default());
        assert_eq!(record.text, "digital transformation continues");
        assert_eq!(record.line_count, 1);
    }

    #[test]
    fn reconstruct_line_count_counts_merged_lines() {
        let page = two_column_page();
        let record = page.reconstruct(&ExtractOptions::default());
        // Nothing blocks joining here, so all five lines flow into one
        // paragraph.
        assert_eq!(record.line_count, 1);
        assert_eq!(record.line_count, record.text.lines().count());
    }

    // --- PageRecord serialization ---

    #[test]
    fn record_serializes_with_exact_field_set() {
        let record = PageRecord {
            page_number: 3,
            width: 612.0,
            height: 792.0,
            text: "hello".to_string(),
            line_count: 1,
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["height", "line_count", "page_number", "text", "width"]
        );
        assert_eq!(value["page_number"], 3);
        assert_eq!(value["line_count"], 1);
    }

    #[test]
    fn record_json_keeps_non_ascii_text() {
        let record = PageRecord {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            text: "café № 5".to_string(),
            line_count: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("café № 5"));
        assert!(!json.contains("\\u"));
    }
}
