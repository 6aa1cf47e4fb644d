//! Board model: sides, pieces, squares and the 8x8 grid

mod piece;
mod square;

pub use piece::{Piece, PieceKind, Side};
pub use square::Square;

use serde::{Deserialize, Serialize};
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of cells, row 0 = rank 8 (black's back rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for col in 0..8 {
            board.cells[0][col] = Some(Piece::new(Side::Black, BACK_RANK[col]));
            board.cells[1][col] = Some(Piece::new(Side::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Side::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Side::White, BACK_RANK[col]));
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Empties a cell and returns what was there
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Occupied cells of one side, row-major
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.belongs_to(side) => Some((sq, piece)),
            _ => None,
        })
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Rows of piece codes with `.` for empty cells
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|p| p.code()).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 8]) -> Self {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            for (col, code) in line.chars().enumerate() {
                board.cells[row][col] = Piece::from_code(code);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            writeln!(f, "{} {}", 8 - i, row)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout() {
        let board = Board::starting();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.rows(),
            vec![
                "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "RNBQKBNR",
            ]
        );
        assert_eq!(board.pieces(Side::White).count(), 16);
        assert_eq!(board.pieces(Side::Black).count(), 16);
    }

    #[test]
    fn take_clears_cell() {
        let mut board = Board::starting();
        let e2 = Square::new(6, 4).unwrap();
        let pawn = board.take(e2);

        assert_eq!(pawn, Some(Piece::new(Side::White, PieceKind::Pawn)));
        assert_eq!(board.piece_at(e2), None);
        assert_eq!(board.piece_count(), 31);
    }

    #[test]
    fn display_shows_ranks() {
        let text = Board::starting().to_string();
        assert!(text.starts_with("8 rnbqkbnr"));
        assert!(text.ends_with("  abcdefgh"));
    }
}
