//! Positioned word tokens — the input unit of page reconstruction.

/// A single word with its bounding box on a page.
///
/// Coordinates use a top-left origin with `top` increasing downward, the
/// convention common PDF word extractors emit. Tokens arrive from an
/// upstream extractor with text already decoded; the reconstruction
/// pipeline consumes them and never mutates them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The word text.
    pub text: String,
    /// Left edge in page coordinates.
    pub x0: f64,
    /// Right edge in page coordinates.
    pub x1: f64,
    /// Top edge in page coordinates (smaller = higher on the page).
    pub top: f64,
    /// Bottom edge in page coordinates.
    pub bottom: f64,
}

impl Token {
    /// Create a token from text and bounding-box edges.
    pub fn new(text: impl Into<String>, x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
        }
    }

    /// Vertical center of the bounding box, used for crop-band membership.
    pub fn mid_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}
