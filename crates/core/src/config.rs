//! Tunables for the game store

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ai::ThinkDelay;
use crate::error::{Error, Result};
use crate::rules::MAX_CANDIDATES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Upper bound on generated candidates per turn
    pub max_candidates: usize,
    /// Pause before an AI move lands
    pub ai_delay: ThinkDelay,
    /// Clock tick period in milliseconds
    pub clock_tick_ms: u64,
}

impl GameConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(Error::Config("max_candidates must be at least 1".into()));
        }
        if self.clock_tick_ms == 0 {
            return Err(Error::Config("clock_tick_ms must be positive".into()));
        }
        self.ai_delay.validate()
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_candidates: MAX_CANDIDATES,
            ai_delay: ThinkDelay::default(),
            clock_tick_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.clock_tick(), Duration::from_millis(100));
    }

    #[test]
    fn partial_toml_overrides() {
        let config = GameConfig::from_toml(
            r#"
            max_candidates = 25

            [ai_delay]
            min_ms = 200
            max_ms = 400
            "#,
        )
        .unwrap();

        assert_eq!(config.max_candidates, 25);
        assert_eq!(config.ai_delay, ThinkDelay { min_ms: 200, max_ms: 400 });
        assert_eq!(config.clock_tick_ms, 100);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            GameConfig::from_toml("max_candidates = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_toml("[ai_delay]\nmin_ms = 9\nmax_ms = 1"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_toml("clock_tick_ms = \"fast\""),
            Err(Error::Toml(_))
        ));
    }
}
