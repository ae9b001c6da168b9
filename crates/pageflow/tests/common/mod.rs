//! Shared test fixtures for the integration tests.
//!
//! Provides token builders and a canonical two-column report page used by
//! both `reconstruction_integration.rs` and `jsonl_io_integration.rs`.

#![allow(dead_code)]

use pageflow::{Token, TokenPage};

pub fn tok(text: &str, x0: f64, top: f64, x1: f64, bottom: f64) -> Token {
    Token::new(text, x0, top, x1, bottom)
}

pub fn token_page(page_number: usize, tokens: Vec<Token>) -> TokenPage {
    TokenPage {
        page_number,
        width: 612.0,
        height: 792.0,
        tokens,
    }
}

/// A realistic two-column report page (width 612, gutter at x=306):
/// a full-width intro line, a hyphenated left-column paragraph, a
/// right-column paragraph, and a centered page-number line at the bottom.
///
/// With default options this reconstructs to exactly:
///
/// ```text
/// The outlook for 2030 is summarised below.
/// Automation drives transformation of labour markets.
/// Employers expect major shifts by 2030.
/// ```
pub fn report_page(page_number: usize) -> TokenPage {
    token_page(
        page_number,
        vec![
            // Full-width intro row
            tok("The", 150.0, 50.0, 180.0, 62.0),
            tok("outlook", 185.0, 50.0, 245.0, 62.0),
            tok("for", 250.0, 50.0, 275.0, 62.0),
            tok("2030", 280.0, 50.0, 315.0, 62.0),
            tok("is", 320.0, 50.0, 335.0, 62.0),
            tok("summarised", 340.0, 50.0, 425.0, 62.0),
            tok("below.", 430.0, 50.0, 480.0, 62.0),
            // Row at y=100, split by the gutter into left and right segments
            tok("Automation", 40.0, 100.0, 130.0, 112.0),
            tok("drives", 135.0, 100.0, 185.0, 112.0),
            tok("transfor-", 190.0, 100.0, 260.0, 112.0),
            tok("Employers", 330.0, 100.0, 410.0, 112.0),
            tok("expect", 415.0, 100.0, 465.0, 112.0),
            tok("major", 470.0, 100.0, 515.0, 112.0),
            // Row at y=130, same split
            tok("mation", 40.0, 130.0, 95.0, 142.0),
            tok("of", 100.0, 130.0, 115.0, 142.0),
            tok("labour", 120.0, 130.0, 170.0, 142.0),
            tok("markets.", 175.0, 130.0, 245.0, 142.0),
            tok("shifts", 330.0, 130.0, 380.0, 142.0),
            tok("by", 385.0, 130.0, 400.0, 142.0),
            tok("2030.", 405.0, 130.0, 445.0, 142.0),
            // Centered page number near the bottom
            tok("17", 300.0, 760.0, 312.0, 772.0),
        ],
    )
}

/// The text `report_page` reconstructs to under default options.
pub const REPORT_PAGE_TEXT: &str = "The outlook for 2030 is summarised below.\n\
                                    Automation drives transformation of labour markets.\n\
                                    Employers expect major shifts by 2030.";

/// Serialize pages to the token JSON-Lines wire format.
pub fn to_jsonl(pages: &[TokenPage]) -> String {
    pages
        .iter()
        .map(|p| serde_json::to_string(p).unwrap())
        .fold(String::new(), |mut acc, line| {
            acc.push_str(&line);
            acc.push('\n');
            acc
        })
}
