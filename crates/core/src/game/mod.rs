//! Game snapshots and the store that owns them

mod state;
mod store;

pub use state::{GameState, GameStatus};
pub use store::{AiCommit, AiRequest, AiTicket, GameStore};
