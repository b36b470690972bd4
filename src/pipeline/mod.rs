pub mod demo;
pub mod orchestrator;

#[cfg(test)]
mod tests;

use crate::analysis::match_record::MatchRecord;
use crate::api::models::{RankedEntry, SummonerProfile};
use crate::error::AppError;

/// Everything a run knows about the queried player.
#[derive(Debug, Clone)]
pub struct PlayerHistory {
    pub profile: SummonerProfile,
    /// `None` when the player is unranked in solo queue.
    pub solo_queue: Option<RankedEntry>,
    /// Most recent first. May be empty.
    pub matches: Vec<MatchRecord>,
}

/// Produces a [`PlayerHistory`] for one player. Implemented by the live
/// orchestrator and by the offline demo source.
pub trait HistorySource {
    fn load_history(&mut self, summoner_name: &str, count: u8) -> Result<PlayerHistory, AppError>;
}
