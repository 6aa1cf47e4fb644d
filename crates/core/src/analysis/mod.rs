//! Client for the external position analysis service

mod client;
mod types;

pub use client::AnalysisClient;
pub use types::*;
