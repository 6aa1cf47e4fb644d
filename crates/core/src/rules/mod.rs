//! Move representation, generation and validation

mod movegen;
mod moves;

pub use movegen::{generate, generate_all, generate_capped, is_legal, MAX_CANDIDATES};
pub use moves::Move;
