//! Server configuration

use serde::Deserialize;
use std::path::Path;

use chess_board_core::{Error, GameConfig, Result};

pub const DEFAULT_CONFIG_FILE: &str = "chess_board.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Base URL of the analysis service; analysis endpoints answer 503 without it
    pub analysis_url: Option<String>,
    pub game: GameConfig,
}

impl ServerConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(text)?;
        config.game.validate()?;
        if config.bind.trim().is_empty() {
            return Err(Error::Config("bind address is empty".into()));
        }
        Ok(config)
    }

    /// Reads `path` if given, else `chess_board.toml` if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            analysis_url: None,
            game: GameConfig::default(),
        }
    }
}
