//! Analyze / Best Move proxies to the external analysis service

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use chess_board_core::analysis::{
    AnalyseRequest, AnalyseResponse, BestMoveResponse, HealthResponse,
};
use chess_board_core::{to_fen, AnalysisClient};

use super::ApiError;
use crate::app::AppState;

#[derive(Deserialize, Default)]
pub struct AnalyseOptions {
    /// Seconds
    pub time_limit: Option<f64>,
}

fn client(state: &AppState) -> Result<&AnalysisClient, ApiError> {
    state.analysis.as_ref().ok_or_else(|| {
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "no analysis service configured",
        )
    })
}

fn prepare(
    state: &AppState,
    options: Option<Json<AnalyseOptions>>,
) -> Result<(&AnalysisClient, AnalyseRequest), ApiError> {
    let client = client(state)?;

    let fen = to_fen(state.store().state());
    let mut request = AnalyseRequest::new(fen);
    if let Some(limit) = options.and_then(|Json(o)| o.time_limit) {
        request = request.time_limit(limit);
    }
    Ok((client, request))
}

pub async fn analyse(
    State(state): State<Arc<AppState>>,
    options: Option<Json<AnalyseOptions>>,
) -> Result<Json<AnalyseResponse>, ApiError> {
    let (client, request) = prepare(&state, options)?;
    match client.analyse(&request).await {
        Ok(response) => {
            info!(fen = %request.fen, "{}", response.summary());
            Ok(Json(response))
        }
        Err(e) => {
            warn!("analysis failed: {}", e);
            Err(e.into())
        }
    }
}

pub async fn best_move(
    State(state): State<Arc<AppState>>,
    options: Option<Json<AnalyseOptions>>,
) -> Result<Json<BestMoveResponse>, ApiError> {
    let (client, request) = prepare(&state, options)?;
    match client.best_move(&request).await {
        Ok(response) => {
            info!(fen = %request.fen, bestmove = %response.bestmove, "best move");
            Ok(Json(response))
        }
        Err(e) => {
            warn!("best move failed: {}", e);
            Err(e.into())
        }
    }
}

/// Upstream status of the analysis service
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    match client(&state)?.health().await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!("analysis health check failed: {}", e);
            Err(e.into())
        }
    }
}
