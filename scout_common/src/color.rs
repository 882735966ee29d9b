//! Alliance colors and helpers for reading them out of a cell.

use strum_macros::{Display, EnumString};

use crate::cell::CellValue;

/// Alliance a driverstation belongs to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Display, EnumString, Hash, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum AllianceColor {
    RED,
    BLUE,
}

impl AllianceColor {
    /// Normalizes a cell into a color. Only text cells can name one.
    pub fn from_cell(cell: &CellValue) -> Option<Self> {
        cell.as_text().and_then(|s| s.parse().ok())
    }

    /// `true` for the blue alliance.
    pub fn is_blue(self) -> bool {
        self == AllianceColor::BLUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        for raw in ["red", "Red", "RED", "rEd"] {
            assert_eq!(raw.parse::<AllianceColor>().ok(), Some(AllianceColor::RED));
        }
        for raw in ["blue", "Blue", "BLUE", "bLUE"] {
            assert_eq!(raw.parse::<AllianceColor>().ok(), Some(AllianceColor::BLUE));
        }
    }

    #[test]
    fn rejects_anything_else() {
        for raw in ["", "green", " red", "blue ", "r", "REDD"] {
            assert!(raw.parse::<AllianceColor>().is_err(), "{raw:?} parsed");
        }
    }

    #[test]
    fn non_text_cells_have_no_color() {
        assert_eq!(AllianceColor::from_cell(&CellValue::Number(1.0)), None);
        assert_eq!(AllianceColor::from_cell(&CellValue::Boolean(true)), None);
        assert_eq!(AllianceColor::from_cell(&CellValue::Empty), None);
        assert_eq!(
            AllianceColor::from_cell(&CellValue::from("Blue")),
            Some(AllianceColor::BLUE)
        );
    }

    #[test]
    fn displays_normalized() {
        assert_eq!(AllianceColor::RED.to_string(), "RED");
        assert!(AllianceColor::BLUE.is_blue());
        assert!(!AllianceColor::RED.is_blue());
    }
}
