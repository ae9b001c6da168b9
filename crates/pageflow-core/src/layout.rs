use crate::normalize::normalize_space;
use crate::token::Token;

/// Column classification of a reconstructed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    /// Not yet classified; assigned by [`build_line`], overwritten by
    /// [`classify_columns`].
    #[default]
    Unclassified,
    /// Straddles the page midpoint (banners, headings, single-column text).
    Full,
    /// Lies entirely left of the midpoint.
    Left,
    /// Lies entirely right of the midpoint.
    Right,
}

/// A reconstructed text line: one gutter-free segment of a row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Top of the line (minimum `top` among source tokens).
    pub y: f64,
    /// Left edge (minimum `x0` among source tokens).
    pub x0: f64,
    /// Right edge (maximum `x1` among source tokens).
    pub x1: f64,
    /// Space-joined, whitespace-normalized token texts.
    pub text: String,
    /// Column classification; [`LineKind::Unclassified`] until
    /// [`classify_columns`] runs.
    pub kind: LineKind,
}

/// Cluster tokens into horizontal rows by y-proximity.
///
/// Tokens are sorted by `(top, x0)` and scanned once. The first token placed
/// in a row anchors it: a later token joins while `|top − anchor.top| <=
/// y_tolerance`, otherwise it opens a new row and becomes the new anchor.
/// Every token lands in exactly one row; rows are returned in scan order.
pub fn group_into_rows(tokens: &[Token], y_tolerance: f64) -> Vec<Vec<Token>> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Token> = tokens.iter().collect();
    sorted.sort_by(|a, b| {
        a.top
            .partial_cmp(&b.top)
            .unwrap()
            .then(a.x0.partial_cmp(&b.x0).unwrap())
    });

    let mut rows: Vec<Vec<Token>> = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut anchor_top = sorted[0].top;

    for token in sorted {
        if (token.top - anchor_top).abs() <= y_tolerance {
            current.push(token.clone());
        } else {
            rows.push(current);
            current = vec![token.clone()];
            anchor_top = token.top;
        }
    }
    rows.push(current);

    rows
}

/// Split one row into segments at gutter-sized horizontal gaps.
///
/// Expects tokens sorted ascending by `x0`. A gap of `min_gap` or more
/// between a token's `x0` and the previous token's `x1` starts a new
/// segment — a jump that large signals a column boundary rather than
/// ordinary inter-word spacing. No token is lost or duplicated.
pub fn split_row_at_gutters(row: &[Token], min_gap: f64) -> Vec<Vec<Token>> {
    if row.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<Vec<Token>> = Vec::new();
    let mut current = vec![row[0].clone()];
    let mut prev_x1 = row[0].x1;

    for token in &row[1..] {
        let gap = token.x0 - prev_x1;
        if gap >= min_gap {
            segments.push(current);
            current = vec![token.clone()];
        } else {
            current.push(token.clone());
        }
        prev_x1 = token.x1;
    }
    segments.push(current);

    segments
}

/// Assemble one segment into a [`Line`].
///
/// Token texts are joined with single spaces and whitespace-normalized;
/// the bounding values are `y` = min `top`, `x0` = min, `x1` = max over
/// the segment. The kind starts as [`LineKind::Unclassified`].
pub fn build_line(segment: &[Token]) -> Line {
    let text = normalize_space(
        &segment
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    );

    let (y, x0, x1) = segment
        .iter()
        .map(|t| (t.top, t.x0, t.x1))
        .reduce(|(y, x0, x1), (t_top, t_x0, t_x1)| (y.min(t_top), x0.min(t_x0), x1.max(t_x1)))
        .expect("build_line called with non-empty segment");

    Line {
        y,
        x0,
        x1,
        text,
        kind: LineKind::Unclassified,
    }
}

/// Convert a page's tokens into unclassified lines.
///
/// Rows are grouped by y-proximity, each row is re-sorted by `x0` and split
/// at gutter gaps, and each segment becomes one line. Lines come out in row
/// scan order, left-to-right within a row.
pub fn lines_from_tokens(tokens: &[Token], y_tolerance: f64, min_gap: f64) -> Vec<Line> {
    let mut lines = Vec::new();
    for mut row in group_into_rows(tokens, y_tolerance) {
        row.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap());
        for segment in split_row_at_gutters(&row, min_gap) {
            lines.push(build_line(&segment));
        }
    }
    lines
}

/// Assign a column kind to every line.
///
/// `mid = page_width * gutter_ratio`. A line straddling the midpoint
/// (`x0 < mid < x1`) is `Full`; otherwise it is `Left` when `x1 <= mid`,
/// else `Right`. Order is preserved; only the kind changes.
pub fn classify_columns(lines: Vec<Line>, page_width: f64, gutter_ratio: f64) -> Vec<Line> {
    let mid = page_width * gutter_ratio;
    lines
        .into_iter()
        .map(|line| {
            let kind = if line.x0 < mid && mid < line.x1 {
                LineKind::Full
            } else if line.x1 <= mid {
                LineKind::Left
            } else {
                LineKind::Right
            };
            Line { kind, ..line }
        })
        .collect()
}

/// Order classified lines for reading.
///
/// Full-width lines come first, then the whole left column, then the whole
/// right column, each bucket sorted ascending by `y` (stable, so ties keep
/// their encounter order). This matches conventional two-column print
/// layout; three-plus-column and right-to-left layouts are outside what
/// this heuristic promises.
pub fn sort_reading_order(lines: Vec<Line>) -> Vec<Line> {
    let mut full: Vec<Line> = Vec::new();
    let mut left: Vec<Line> = Vec::new();
    let mut right: Vec<Line> = Vec::new();

    for line in lines {
        match line.kind {
            LineKind::Left => left.push(line),
            LineKind::Right => right.push(line),
            // Placeholder kinds sort with full-width; classification precedes ordering.
            LineKind::Full | LineKind::Unclassified => full.push(line),
        }
    }

    full.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap());
    left.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap());
    right.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap());

    full.extend(left);
    full.extend(right);
    full
}
