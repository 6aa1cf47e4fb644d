//! Recorded moves

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Piece, PieceKind, Square};
use crate::error::{Error, Result};

/// A move as read off the board at creation time.
///
/// Never modified after construction; history keeps these verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Option<Piece>,
    captured: Option<Piece>,
    notation: String,
    created_at: DateTime<Utc>,
}

impl Move {
    /// Builds a move from whatever currently stands on `from` and `to`
    pub fn new(board: &Board, from: Square, to: Square) -> Result<Self> {
        if from == to {
            return Err(Error::SameSquare);
        }
        let piece = board.piece_at(from);
        let captured = board.piece_at(to);
        Ok(Self {
            from,
            to,
            piece,
            captured,
            notation: notation(piece, from, to, captured.is_some()),
            created_at: Utc::now(),
        })
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    /// The moving piece, `None` if the source square was empty
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Long algebraic form, e.g. `e2-e4` or `Nb1xc3`
    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Coordinate form understood by engines, e.g. `e2e4`
    pub fn uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

fn notation(piece: Option<Piece>, from: Square, to: Square, capture: bool) -> String {
    let prefix = match piece.map(|p| p.kind) {
        Some(PieceKind::Pawn) | None => String::new(),
        Some(kind) => kind.letter().to_string(),
    };
    let sep = if capture { 'x' } else { '-' };
    format!("{}{}{}{}", prefix, from, sep, to)
}
