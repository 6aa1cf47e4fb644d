//! Immutable game snapshots and their transitions

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side, Square};
use crate::rules::{is_legal, Move};

/// Placeholder status; the core never moves it away from `Normal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }
}

/// A full snapshot of one game. Every transition returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Side,
    selected_square: Option<Square>,
    history: Vec<Move>,
    status: GameStatus,
    white_elapsed_ms: u64,
    black_elapsed_ms: u64,
    ai_mode: bool,
    ai_thinking: bool,
}

impl GameState {
    /// Standard position, white to move, clocks at zero
    pub fn new() -> Self {
        Self::with_board(Board::starting(), Side::White)
    }

    pub fn with_board(board: Board, to_move: Side) -> Self {
        Self {
            board,
            current_player: to_move,
            selected_square: None,
            history: Vec::new(),
            status: GameStatus::Normal,
            white_elapsed_ms: 0,
            black_elapsed_ms: 0,
            ai_mode: false,
            ai_thinking: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected_square
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn elapsed_ms(&self, side: Side) -> u64 {
        match side {
            Side::White => self.white_elapsed_ms,
            Side::Black => self.black_elapsed_ms,
        }
    }

    pub fn ai_mode(&self) -> bool {
        self.ai_mode
    }

    pub fn ai_thinking(&self) -> bool {
        self.ai_thinking
    }

    /// Plays `mv` without re-checking legality; callers validate first.
    pub fn apply(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        next.board.set(mv.from(), None);
        next.board.set(mv.to(), mv.piece());
        next.history.push(mv.clone());
        next.current_player = self.current_player.opponent();
        next.selected_square = None;
        next.ai_thinking = false;
        next
    }

    /// Takes back the last move. Unchanged when there is no history.
    pub fn undo(&self) -> Self {
        let mut next = self.clone();
        let Some(mv) = next.history.pop() else {
            return next;
        };
        next.board.set(mv.from(), mv.piece());
        next.board.set(mv.to(), mv.captured());
        next.current_player = self.current_player.opponent();
        next.selected_square = None;
        next
    }

    /// Handles a click on `square` for the side to move.
    ///
    /// With nothing selected, selects an own piece. With a selection, plays
    /// the move if legal; otherwise reselects an own piece or clears.
    pub fn try_select_or_move(&self, square: Square) -> Self {
        let owns = |sq: Square| {
            self.board
                .piece_at(sq)
                .is_some_and(|p| p.belongs_to(self.current_player))
        };

        let Some(selected) = self.selected_square else {
            let mut next = self.clone();
            if owns(square) {
                next.selected_square = Some(square);
            }
            return next;
        };

        if let Ok(mv) = Move::new(&self.board, selected, square) {
            if is_legal(&self.board, &mv) {
                return self.apply(&mv);
            }
        }

        let mut next = self.clone();
        next.selected_square = if owns(square) { Some(square) } else { None };
        next
    }

    /// Adds one clock period to the side to move
    pub fn tick(&self, period_ms: u64) -> Self {
        let mut next = self.clone();
        match self.current_player {
            Side::White => next.white_elapsed_ms += period_ms,
            Side::Black => next.black_elapsed_ms += period_ms,
        }
        next
    }

    /// Overrides the status; nothing in this crate computes it
    pub fn set_status(&self, status: GameStatus) -> Self {
        let mut next = self.clone();
        next.status = status;
        next
    }

    pub(crate) fn set_ai_mode(&self, on: bool) -> Self {
        let mut next = self.clone();
        next.ai_mode = on;
        next
    }

    pub(crate) fn set_ai_thinking(&self, on: bool) -> Self {
        let mut next = self.clone();
        next.ai_thinking = on;
        next
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
