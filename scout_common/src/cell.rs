//! Spreadsheet cell values.
//!
//! A custom function receives whatever the referenced cell holds: a number, a
//! piece of text, a boolean, or nothing at all. `CellValue` models that, and
//! its `FromStr` impl reads a raw textual cell (as typed on the command line)
//! the way a spreadsheet would interpret it when entered.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Value of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell.
    Empty,
    /// Numeric cell. Spreadsheets store every number as a double.
    Number(f64),
    /// Text cell.
    Text(String),
    /// `TRUE` / `FALSE` cell.
    Boolean(bool),
}

impl CellValue {
    /// Returns the value of a numeric cell with no fractional part.
    ///
    /// Any finite whole number qualifies, however large. Text that merely
    /// looks like a number (`"5"`) does not.
    pub fn as_integer(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n),
            _ => None,
        }
    }

    /// Returns the contents of a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl FromStr for CellValue {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Ok(CellValue::Empty);
        }
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return Ok(CellValue::Boolean(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Ok(CellValue::Boolean(false));
        }
        // f64::from_str also accepts "inf" and "NaN"; a sheet keeps those as text.
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(CellValue::Number(n)),
            _ => Ok(CellValue::Text(raw.to_string())),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("TRUE"),
            CellValue::Boolean(false) => f.write_str("FALSE"),
        }
    }
}
