//! Wire types of the remote analysis service

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyseRequest {
    pub fen: String,
    /// Seconds; the service applies its own default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<f64>,
}

impl AnalyseRequest {
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            time_limit: None,
        }
    }

    pub fn time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyseResponse {
    pub score: f64,
    pub centipawns: i32,
    pub nodes: u64,
    pub depth: u32,
    pub time_ms: u64,
    #[serde(default)]
    pub pv: Vec<String>,
    #[serde(default)]
    pub bestmove: Option<String>,
    #[serde(default)]
    pub mate_in: Option<i32>,
}

impl AnalyseResponse {
    pub fn evaluation(&self) -> Evaluation {
        match self.mate_in {
            Some(moves) => Evaluation::Mate(moves),
            None => Evaluation::Centipawns(self.centipawns),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Eval: {} | Depth: {} | Nodes: {} | PV: {}",
            self.evaluation(),
            self.depth,
            self.nodes,
            self.pv.iter().take(5).cloned().collect::<Vec<_>>().join(" ")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMoveResponse {
    pub score: f64,
    pub centipawns: i32,
    pub nodes: u64,
    pub time_ms: u64,
    pub bestmove: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub uptime: Option<f64>,
}

/// Engine score from white's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Centipawns(i32),
    /// Positive: white mates, negative: black mates
    Mate(i32),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Centipawns(cp) => {
                let score = *cp as f32 / 100.0;
                if score >= 0.0 {
                    write!(f, "+{:.2}", score)
                } else {
                    write!(f, "{:.2}", score)
                }
            }
            Evaluation::Mate(moves) => write!(f, "M{}", moves),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyse_response() {
        let json = r#"{
            "score": 0.12, "centipawns": 35, "nodes": 1200,
            "depth": 6, "time_ms": 480, "pv": ["e2e4", "e7e5", "g1f3"]
        }"#;
        let resp: AnalyseResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.evaluation(), Evaluation::Centipawns(35));
        assert_eq!(resp.evaluation().to_string(), "+0.35");
        assert_eq!(resp.summary(), "Eval: +0.35 | Depth: 6 | Nodes: 1200 | PV: e2e4 e7e5 g1f3");
    }

    #[test]
    fn mate_overrides_centipawns() {
        let json = r#"{
            "score": -1.0, "centipawns": -10000, "nodes": 5,
            "depth": 2, "time_ms": 3, "mate_in": -2
        }"#;
        let resp: AnalyseResponse = serde_json::from_str(json).unwrap();
        assert!(resp.pv.is_empty());
        assert_eq!(resp.evaluation().to_string(), "M-2");
    }

    #[test]
    fn request_omits_missing_time_limit() {
        let body = serde_json::to_value(AnalyseRequest::new("8/8/8/8/8/8/8/8 w - - 0 1")).unwrap();
        assert!(body.get("time_limit").is_none());

        let body = serde_json::to_value(AnalyseRequest::new("x").time_limit(2.5)).unwrap();
        assert_eq!(body["time_limit"], 2.5);
    }

    #[test]
    fn health_tolerates_minimal_body() {
        let health: HealthResponse = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.model_loaded, None);
    }
}
