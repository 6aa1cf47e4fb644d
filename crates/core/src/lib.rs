//! Chess Board Core Library
//!
//! Board model, piece-agnostic move generation, the game store with
//! epoch-guarded AI moves, and a client for the external analysis service.

pub mod ai;
pub mod analysis;
pub mod board;
pub mod config;
pub mod error;
pub mod fen;
pub mod game;
pub mod rules;

pub use ai::{choose_ai_move, ThinkDelay};
pub use analysis::AnalysisClient;
pub use board::{Board, Piece, PieceKind, Side, Square};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use fen::to_fen;
pub use game::{AiCommit, AiRequest, AiTicket, GameState, GameStatus, GameStore};
pub use rules::{generate, is_legal, Move};
