use super::{HistorySource, PlayerHistory};
use crate::analysis::match_record::MatchRecord;
use crate::api::models::{solo_queue_entry, MatchDto, RankedEntry, SummonerProfile, SOLO_QUEUE};
use crate::error::AppError;
use anyhow::Context;
use std::fs;
use std::path::Path;

pub const DEMO_PUUID: &str = "demo_player";

const BUILTIN_FIXTURE: &str = include_str!("../../fixtures/demo_matches.json");

/// Offline stand-in for the live orchestrator, backed by a static fixture.
pub struct DemoSource {
    matches: Vec<MatchDto>,
}

impl DemoSource {
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read demo fixture {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Fixture is a JSON array of match-detail payloads.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let matches = serde_json::from_str(raw)
            .map_err(|e| AppError::FixtureError(format!("invalid match fixture: {}", e)))?;
        Ok(DemoSource { matches })
    }

    fn profile() -> SummonerProfile {
        SummonerProfile {
            id: "demo_id".to_string(),
            puuid: DEMO_PUUID.to_string(),
            name: "DemoPlayer".to_string(),
            summoner_level: 100,
        }
    }

    fn ranked_entries() -> Vec<RankedEntry> {
        vec![RankedEntry {
            queue_type: SOLO_QUEUE.to_string(),
            tier: "Gold".to_string(),
            rank: "II".to_string(),
            league_points: 50,
            wins: 12,
            losses: 8,
        }]
    }
}

impl HistorySource for DemoSource {
    fn load_history(&mut self, _summoner_name: &str, count: u8) -> Result<PlayerHistory, AppError> {
        let profile = Self::profile();
        let matches = self
            .matches
            .iter()
            .take(count as usize)
            .filter_map(|m| MatchRecord::from_match(m, &profile.puuid))
            .collect();

        Ok(PlayerHistory {
            solo_queue: solo_queue_entry(Self::ranked_entries()),
            profile,
            matches,
        })
    }
}
