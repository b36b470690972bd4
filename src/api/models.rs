use serde::Deserialize;

pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

// Summoner V4 response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerProfile {
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    pub summoner_level: u32,
}

// League V4 response, one entry per queue
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl RankedEntry {
    pub fn games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Season win rate in percent, 0 when no games were played.
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            total => self.wins as f64 / total as f64 * 100.0,
        }
    }
}

/// Picks the entry whose queue type is exactly solo/duo ranked.
pub fn solo_queue_entry(entries: Vec<RankedEntry>) -> Option<RankedEntry> {
    entries.into_iter().find(|e| e.queue_type == SOLO_QUEUE)
}

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
pub struct MatchInfo {
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub champion_name: String,
    pub total_minions_killed: u32,
    pub gold_earned: u32,
}

impl MatchDto {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }
}
