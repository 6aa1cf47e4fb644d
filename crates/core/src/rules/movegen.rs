//! Candidate move generation and validation
//!
//! The generator is piece-agnostic: any own piece may go to any square that
//! is empty or holds an enemy piece. Nothing here knows about check, sliding
//! blockers, castling, en passant or promotion.

use crate::board::{Board, Side, Square};

use super::moves::Move;

/// Default cap on the number of candidates handed to the UI and the AI
pub const MAX_CANDIDATES: usize = 10;

/// Candidate moves for `side`, truncated to [`MAX_CANDIDATES`]
pub fn generate(board: &Board, side: Side) -> Vec<Move> {
    generate_capped(board, side, MAX_CANDIDATES)
}

/// Candidate moves in scan order: source squares row-major, then
/// destination squares row-major. Stops once `cap` moves are collected.
pub fn generate_capped(board: &Board, side: Side, cap: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(cap.min(64));
    if cap == 0 {
        return moves;
    }

    for (from, _) in board.pieces(side) {
        for to in Square::all() {
            if to == from || !is_open_for(board, to, side) {
                continue;
            }
            // from != to was checked above
            if let Ok(mv) = Move::new(board, from, to) {
                moves.push(mv);
                if moves.len() == cap {
                    return moves;
                }
            }
        }
    }
    moves
}

/// Every candidate without truncation
pub fn generate_all(board: &Board, side: Side) -> Vec<Move> {
    generate_capped(board, side, usize::MAX)
}

/// Minimal legality: there must be a mover, and it may not land on its own piece
pub fn is_legal(board: &Board, mv: &Move) -> bool {
    let Some(piece) = mv.piece() else {
        return false;
    };
    match board.piece_at(mv.to()) {
        Some(target) => !target.belongs_to(piece.side),
        None => true,
    }
}

fn is_open_for(board: &Board, square: Square, side: Side) -> bool {
    board
        .piece_at(square)
        .map_or(true, |piece| !piece.belongs_to(side))
}
