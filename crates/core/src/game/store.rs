//! The single owner of game state
//!
//! All commands go through [`GameStore`]. AI moves are two-phase: a request
//! hands out an [`AiTicket`] stamped with the current epoch, and the host
//! commits it after the ticket's delay. Starting a new game bumps the epoch,
//! so tickets issued for an earlier game are dropped at commit time.

use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::ai::choose_from;
use crate::board::Square;
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::rules::{generate_capped, Move};

use super::state::{GameState, GameStatus};

/// A deferred AI move, valid only for the epoch it was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    epoch: u64,
    delay: Duration,
}

impl AiTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// How long the host should wait before committing
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiRequest {
    Scheduled(AiTicket),
    /// An AI move is already pending; nothing was scheduled
    AlreadyThinking,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AiCommit {
    Applied(Move),
    /// The ticket belongs to a finished game or was superseded
    Stale,
}

pub struct GameStore {
    state: GameState,
    epoch: u64,
    config: GameConfig,
}

impl GameStore {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(),
            epoch: 0,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Candidates for the side to move, capped by the configuration
    pub fn candidates(&self) -> Vec<Move> {
        generate_capped(
            self.state.board(),
            self.state.current_player(),
            self.config.max_candidates,
        )
    }

    /// Fresh game in the standard position. Invalidates pending AI tickets.
    pub fn new_game(&mut self) -> &GameState {
        self.epoch += 1;
        self.state = GameState::new();
        info!(epoch = self.epoch, "new game");
        &self.state
    }

    /// New game with the computer playing both sides
    pub fn start_ai_game(&mut self) -> &GameState {
        self.new_game();
        self.state = self.state.set_ai_mode(true);
        info!(epoch = self.epoch, "AI vs AI enabled");
        &self.state
    }

    /// Human click at board coordinates. Ignored while the AI is thinking.
    pub fn click(&mut self, row: i32, col: i32) -> Result<&GameState> {
        let square = Square::new(row, col)?;
        if self.state.ai_thinking() {
            debug!(%square, "click ignored while AI is thinking");
            return Ok(&self.state);
        }

        let next = self.state.try_select_or_move(square);
        if next.history().len() > self.state.history().len() {
            if let Some(mv) = next.last_move() {
                info!(notation = mv.notation(), "human move");
            }
        } else {
            debug!(%square, selected = ?next.selected_square(), "selection changed");
        }
        self.state = next;
        Ok(&self.state)
    }

    /// Takes back one move. Ignored while an AI move is pending.
    pub fn undo(&mut self) -> &GameState {
        if self.state.ai_thinking() {
            debug!("undo ignored while AI is thinking");
            return &self.state;
        }
        if let Some(mv) = self.state.last_move() {
            debug!(notation = mv.notation(), "undo");
        }
        self.state = self.state.undo();
        &self.state
    }

    /// Advances the active side's clock by one tick
    pub fn tick(&mut self) -> &GameState {
        self.state = self.state.tick(self.config.clock_tick_ms);
        &self.state
    }

    pub fn set_status(&mut self, status: GameStatus) -> &GameState {
        self.state = self.state.set_status(status);
        &self.state
    }

    /// Starts an AI move for the side to move.
    ///
    /// Returns [`AiRequest::AlreadyThinking`] if one is pending, and
    /// [`Error::NoLegalMoves`] if the side has nothing to play.
    pub fn request_ai_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AiRequest> {
        if self.state.ai_thinking() {
            return Ok(AiRequest::AlreadyThinking);
        }
        let side = self.state.current_player();
        if self.candidates().is_empty() {
            warn!(%side, "AI has no legal moves");
            return Err(Error::NoLegalMoves(side));
        }

        self.state = self.state.set_ai_thinking(true);
        let ticket = AiTicket {
            epoch: self.epoch,
            delay: self.config.ai_delay.sample(rng),
        };
        debug!(%side, epoch = ticket.epoch, delay_ms = ticket.delay.as_millis() as u64, "AI move scheduled");
        Ok(AiRequest::Scheduled(ticket))
    }

    /// Commits a previously issued ticket against the latest state
    pub fn commit_ai_move<R: Rng + ?Sized>(
        &mut self,
        ticket: &AiTicket,
        rng: &mut R,
    ) -> Result<AiCommit> {
        if ticket.epoch != self.epoch || !self.state.ai_thinking() {
            warn!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "dropping stale AI move"
            );
            return Ok(AiCommit::Stale);
        }

        let side = self.state.current_player();
        let Some(mv) = choose_from(&self.candidates(), rng) else {
            self.state = self.state.set_ai_thinking(false);
            warn!(%side, "AI has no legal moves");
            return Err(Error::NoLegalMoves(side));
        };

        self.state = self.state.apply(&mv);
        info!(%side, notation = mv.notation(), "AI move");
        Ok(AiCommit::Applied(mv))
    }

    /// Next ticket for AI-vs-AI play, if one should be scheduled now.
    ///
    /// Yields nothing unless AI mode is on, the game is in normal status and
    /// no AI move is pending, so calling it repeatedly never queues two moves.
    pub fn next_auto_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<AiTicket>> {
        if !self.state.ai_mode()
            || self.state.status() != GameStatus::Normal
            || self.state.ai_thinking()
        {
            return Ok(None);
        }
        match self.request_ai_move(rng)? {
            AiRequest::Scheduled(ticket) => Ok(Some(ticket)),
            AiRequest::AlreadyThinking => Ok(None),
        }
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
