use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use chess_board_core::{to_fen, AiRequest, Error, GameState, GameStore};

use crate::app::{spawn_ai_move, AppState};

pub mod analysis;

// ============================================================================
// RESPONSES
// ============================================================================

/// What the presentation layer renders from
#[derive(Serialize)]
pub struct Snapshot {
    pub epoch: u64,
    pub fen: String,
    pub rows: Vec<String>,
    #[serde(flatten)]
    pub state: GameState,
}

impl Snapshot {
    fn of(store: &GameStore) -> Self {
        let state = store.state();
        Self {
            epoch: store.epoch(),
            fen: to_fen(state),
            rows: state.board().rows(),
            state: state.clone(),
        }
    }
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let status = match &error {
            Error::InvalidSquare { .. } | Error::SameSquare => StatusCode::BAD_REQUEST,
            Error::NoLegalMoves(_) => StatusCode::CONFLICT,
            Error::Http(_) | Error::Analysis(_) | Error::Json(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct Body {
            error: String,
        }
        (self.status, Json(Body { error: self.message })).into_response()
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

#[derive(Deserialize)]
pub struct ClickRequest {
    pub row: i32,
    pub col: i32,
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn game_state(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(Snapshot::of(&state.store()))
}

pub async fn click(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClickRequest>,
) -> Result<Json<Snapshot>, ApiError> {
    let mut store = state.store();
    store.click(req.row, req.col)?;
    Ok(Json(Snapshot::of(&store)))
}

pub async fn new_game(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let mut store = state.store();
    store.new_game();
    Json(Snapshot::of(&store))
}

pub async fn undo(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let mut store = state.store();
    store.undo();
    Json(Snapshot::of(&store))
}

/// One AI move for the side to move, committed after the thinking pause
pub async fn ai_move(State(state): State<Arc<AppState>>) -> Result<Json<Snapshot>, ApiError> {
    let (request, snapshot) = {
        let mut store = state.store();
        let request = store.request_ai_move(&mut rand::rng())?;
        (request, Snapshot::of(&store))
    };

    match request {
        AiRequest::Scheduled(ticket) => spawn_ai_move(state.clone(), ticket),
        AiRequest::AlreadyThinking => warn!("AI move requested while one is pending"),
    }
    Ok(Json(snapshot))
}

/// New game with the computer on both sides
pub async fn ai_game(State(state): State<Arc<AppState>>) -> Result<Json<Snapshot>, ApiError> {
    let (ticket, snapshot) = {
        let mut store = state.store();
        store.start_ai_game();
        let ticket = store.next_auto_move(&mut rand::rng())?;
        (ticket, Snapshot::of(&store))
    };

    if let Some(ticket) = ticket {
        spawn_ai_move(state.clone(), ticket);
    }
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::Router;
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::app::router;

    fn app() -> Router {
        router(AppState::new(GameStore::default(), None))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn click(app: &Router, row: i64, col: i64) -> (StatusCode, Value) {
        send(app, "POST", "/api/click", Some(serde_json::json!({ "row": row, "col": col }))).await
    }

    #[tokio::test]
    async fn health_check() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn initial_state() {
        let app = app();
        let (status, json) = send(&app, "GET", "/api/state", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["current_player"], "white");
        assert_eq!(json["status"], "normal");
        assert_eq!(json["rows"][7], "RNBQKBNR");
        assert_eq!(json["history"].as_array().unwrap().len(), 0);
        assert_eq!(json["epoch"], 0);
    }

    #[tokio::test]
    async fn clicks_play_a_move() {
        let app = app();
        let (_, json) = click(&app, 6, 4).await;
        assert_eq!(json["selected_square"], serde_json::json!({ "row": 6, "col": 4 }));

        let (status, json) = click(&app, 4, 4).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["current_player"], "black");
        assert_eq!(json["rows"][4], "....P...");
        assert_eq!(json["rows"][6], "PPPP.PPP");
        assert_eq!(json["history"][0]["notation"], "e2-e4");
        assert_eq!(json["fen"], "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1");
    }

    #[tokio::test]
    async fn off_board_click_is_bad_request() {
        let app = app();
        let (status, json) = click(&app, 9, 0).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("off the board"));
    }

    #[tokio::test]
    async fn malformed_click_is_rejected() {
        let app = app();
        let (status, _) = send(
            &app,
            "POST",
            "/api/click",
            Some(serde_json::json!({ "row": "e", "col": 2 })),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn undo_reverts_and_empty_undo_is_harmless() {
        let app = app();
        let (_, fresh) = send(&app, "POST", "/api/undo", None).await;
        assert_eq!(fresh["history"].as_array().unwrap().len(), 0);

        click(&app, 6, 4).await;
        click(&app, 4, 4).await;
        let (_, json) = send(&app, "POST", "/api/undo", None).await;
        assert_eq!(json["rows"], fresh["rows"]);
        assert_eq!(json["current_player"], "white");
    }

    #[tokio::test(start_paused = true)]
    async fn ai_move_commits_after_delay() {
        let app = app();
        let (_, json) = send(&app, "POST", "/api/ai-move", None).await;
        assert_eq!(json["ai_thinking"], true);

        // Humans are locked out while the AI thinks
        let (_, json) = click(&app, 6, 4).await;
        assert_eq!(json["selected_square"], Value::Null);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let (_, json) = send(&app, "GET", "/api/state", None).await;
        assert_eq!(json["ai_thinking"], false);
        assert_eq!(json["current_player"], "black");
        assert_eq!(json["history"].as_array().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn new_game_drops_pending_ai_move() {
        let app = app();
        send(&app, "POST", "/api/ai-move", None).await;
        let (_, json) = send(&app, "POST", "/api/new-game", None).await;
        assert_eq!(json["epoch"], 1);
        assert_eq!(json["ai_thinking"], false);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let (_, json) = send(&app, "GET", "/api/state", None).await;
        assert_eq!(json["history"].as_array().unwrap().len(), 0);
        assert_eq!(json["current_player"], "white");
    }

    #[tokio::test(start_paused = true)]
    async fn ai_game_runs_one_move_at_a_time() {
        let app = app();
        let (_, json) = send(&app, "POST", "/api/ai-game", None).await;
        assert_eq!(json["ai_mode"], true);
        assert_eq!(json["ai_thinking"], true);

        // Extra requests must not queue a second pending move
        send(&app, "POST", "/api/ai-move", None).await;
        send(&app, "POST", "/api/ai-move", None).await;

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        let (_, json) = send(&app, "GET", "/api/state", None).await;
        let plies = json["history"].as_array().unwrap().len();
        assert!((5..=10).contains(&plies), "unexpected ply count {}", plies);
        assert_eq!(json["ai_thinking"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn new_game_stops_ai_game() {
        let app = app();
        send(&app, "POST", "/api/ai-game", None).await;
        tokio::time::sleep(Duration::from_millis(4500)).await;
        send(&app, "POST", "/api/new-game", None).await;

        tokio::time::sleep(Duration::from_millis(5000)).await;
        let (_, json) = send(&app, "GET", "/api/state", None).await;
        assert_eq!(json["ai_mode"], false);
        assert_eq!(json["history"].as_array().unwrap().len(), 0);
    }
}
