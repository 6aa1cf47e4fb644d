//! FEN export for handing positions to external engines

use shakmaty::fen::Fen;
use shakmaty::{Color, File, Rank, Role, Setup};
use std::num::NonZeroU32;

use crate::board::{Board, Piece, PieceKind, Side};
use crate::game::GameState;

/// FEN of the current placement and side to move.
///
/// No castling rights or en passant square are ever emitted, since the
/// board model has neither.
pub fn to_fen(state: &GameState) -> String {
    let mut setup = Setup::empty();
    setup.board = to_shakmaty_board(state.board());
    setup.turn = color(state.current_player());
    setup.fullmoves =
        NonZeroU32::new(1 + state.history().len() as u32 / 2).unwrap_or(NonZeroU32::MIN);
    // Only castling rights, pockets or promoted pieces make a FEN lossy,
    // and this setup never carries any of them.
    Fen::try_from_setup(setup)
        .unwrap_or_else(|lossy| lossy.ignore())
        .to_string()
}

pub fn to_shakmaty_board(board: &Board) -> shakmaty::Board {
    let mut out = shakmaty::Board::empty();
    for side in [Side::White, Side::Black] {
        for (square, piece) in board.pieces(side) {
            let sq = shakmaty::Square::from_coords(
                File::new(u32::from(square.col())),
                Rank::new(u32::from(7 - square.row())),
            );
            out.set_piece_at(sq, to_shakmaty_piece(piece));
        }
    }
    out
}

fn to_shakmaty_piece(piece: Piece) -> shakmaty::Piece {
    let role = match piece.kind {
        PieceKind::King => Role::King,
        PieceKind::Queen => Role::Queen,
        PieceKind::Rook => Role::Rook,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Knight => Role::Knight,
        PieceKind::Pawn => Role::Pawn,
    };
    shakmaty::Piece {
        color: color(piece.side),
        role,
    }
}

fn color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}
