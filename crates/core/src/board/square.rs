//! Board coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A cell on the board. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form; only reaches the board through `Square::new`
#[derive(Deserialize)]
struct RawSquare {
    row: i32,
    col: i32,
}

impl TryFrom<RawSquare> for Square {
    type Error = Error;

    fn try_from(raw: RawSquare) -> Result<Self> {
        Square::new(raw.row, raw.col)
    }
}

impl Square {
    /// Builds a square, failing on anything outside `[0, 7]`
    pub fn new(row: i32, col: i32) -> Result<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(Error::InvalidSquare { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Rank number as printed on the board (1..=8)
    pub fn rank(&self) -> u8 {
        8 - self.row
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    /// Algebraic name, e.g. `e2` for (6, 4)
    pub fn name(&self) -> String {
        format!("{}{}", self.file_char(), self.rank())
    }

    /// Every square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_off_board_coordinates() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(Error::InvalidSquare { row: 8, col: 0 })
        ));
        assert!(Square::new(0, -1).is_err());
    }

    #[test]
    fn deserializing_checks_bounds() {
        let square: Square = serde_json::from_str(r#"{"row":6,"col":4}"#).unwrap();
        assert_eq!(square.name(), "e2");

        let err = serde_json::from_str::<Square>(r#"{"row":9,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("off the board"));
        assert!(serde_json::from_str::<Square>(r#"{"row":0,"col":-1}"#).is_err());
    }

    #[test]
    fn names_match_algebraic_layout() {
        assert_eq!(Square::new(6, 4).unwrap().name(), "e2");
        assert_eq!(Square::new(0, 0).unwrap().name(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[1], Square::at(0, 1));
        assert_eq!(squares[8], Square::at(1, 0));
    }
}
