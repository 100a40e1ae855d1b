//! Raw cell values as read from a tabular source

use std::fmt;

/// Literal token marking a missing value in the source format.
pub const NA_TOKEN: &str = "NA";

/// An untyped cell, auto-typed at the reader boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// The exact, case-sensitive `NA` sentinel
    Na,
    /// Zero-length cell
    Empty,
    /// Finite numeric literal
    Number(f64),
    /// Typed boolean, only produced by sources that carry one (JSON)
    Bool(bool),
    /// Any other token, verbatim
    Text(String),
}

impl RawCell {
    /// Auto-type a textual cell.
    ///
    /// The `NA` sentinel must match exactly; a padded ` NA ` stays text.
    /// Whitespace is ignored only when detecting empty and numeric cells.
    /// Numbers must be finite, so tokens like `NaN` or `inf` stay text.
    pub fn infer(s: &str) -> Self {
        if s == NA_TOKEN {
            return RawCell::Na;
        }

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return RawCell::Empty;
        }
        if let Some(n) = parse_number(trimmed) {
            return RawCell::Number(n);
        }

        RawCell::Text(s.to_string())
    }

    /// True for `NA` and empty cells
    pub fn is_missing(&self) -> bool {
        matches!(self, RawCell::Na | RawCell::Empty)
    }

    /// Numeric value of the cell, accepting numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawCell::Number(n) => Some(*n),
            RawCell::Text(s) => parse_number(s.trim()),
            RawCell::Na | RawCell::Empty | RawCell::Bool(_) => None,
        }
    }

    /// Cell content as source text.
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Na => NA_TOKEN.to_string(),
            RawCell::Empty => String::new(),
            RawCell::Number(n) => n.to_string(),
            RawCell::Bool(b) => b.to_string(),
            RawCell::Text(s) => s.clone(),
        }
    }
}

/// Diagnostic rendering, used in error messages.
impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Na => write!(f, "{}", NA_TOKEN),
            RawCell::Empty => write!(f, "<empty>"),
            RawCell::Number(n) => write!(f, "{}", n),
            RawCell::Bool(b) => write!(f, "{}", b),
            RawCell::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::infer(s)
    }
}

impl From<f64> for RawCell {
    fn from(n: f64) -> Self {
        RawCell::Number(n)
    }
}

impl From<i64> for RawCell {
    fn from(n: i64) -> Self {
        RawCell::Number(n as f64)
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
