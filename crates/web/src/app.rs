//! Shared state, router and background tasks

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use chess_board_core::{AiCommit, AiTicket, AnalysisClient, GameStore};

use crate::routes;

pub struct AppState {
    store: Mutex<GameStore>,
    pub analysis: Option<AnalysisClient>,
}

impl AppState {
    pub fn new(store: GameStore, analysis: Option<AnalysisClient>) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
            analysis,
        })
    }

    /// Handlers never hold this across an await
    pub fn store(&self) -> MutexGuard<'_, GameStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/state", get(routes::game_state))
        .route("/api/click", post(routes::click))
        .route("/api/new-game", post(routes::new_game))
        .route("/api/ai-move", post(routes::ai_move))
        .route("/api/ai-game", post(routes::ai_game))
        .route("/api/undo", post(routes::undo))
        .route("/api/analyse", post(routes::analysis::analyse))
        .route("/api/bestmove", post(routes::analysis::best_move))
        .route("/api/analysis/health", get(routes::analysis::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Commits `ticket` after its delay, then keeps AI-vs-AI play going.
///
/// At most one continuation is spawned per committed move, and the store
/// only hands out a ticket when none is pending.
pub fn spawn_ai_move(state: Arc<AppState>, ticket: AiTicket) {
    tokio::spawn(async move {
        tokio::time::sleep(ticket.delay()).await;

        let next = {
            let mut store = state.store();
            let mut rng = rand::rng();
            match store.commit_ai_move(&ticket, &mut rng) {
                Ok(AiCommit::Applied(_)) => store.next_auto_move(&mut rng),
                Ok(AiCommit::Stale) => Ok(None),
                Err(e) => Err(e),
            }
        };

        match next {
            Ok(Some(ticket)) => spawn_ai_move(state, ticket),
            Ok(None) => debug!("no follow-up AI move"),
            Err(e) => warn!("AI play stopped: {}", e),
        }
    });
}

/// Ticks the side-to-move clock forever
pub fn spawn_clock(state: Arc<AppState>) {
    let period = state.store().config().clock_tick();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            state.store().tick();
        }
    });
}
