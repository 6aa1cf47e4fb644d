//! Error types for chess-board-core

use thiserror::Error;

use crate::board::Side;

#[derive(Error, Debug)]
pub enum Error {
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare { row: i32, col: i32 },

    #[error("a move must leave its source square")]
    SameSquare,

    #[error("no legal moves for {0}")]
    NoLegalMoves(Side),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("analysis service error: {0}")]
    Analysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
