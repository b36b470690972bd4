use crate::api::models::{MatchDto, ParticipantDto};

/// One completed match from the queried player's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub champion: String,
    pub cs: u32,
    pub gold: u32,
}

impl MatchRecord {
    /// `(kills + assists) / max(deaths, 1)`
    pub fn kda(&self) -> f64 {
        (f64::from(self.kills) + f64::from(self.assists)) / f64::from(self.deaths.max(1))
    }

    /// Normalizes the queried player's row out of a match payload. `None` when
    /// the player does not appear among the participants.
    pub fn from_match(detail: &MatchDto, puuid: &str) -> Option<Self> {
        detail.participant(puuid).map(MatchRecord::from)
    }
}

impl From<&ParticipantDto> for MatchRecord {
    fn from(p: &ParticipantDto) -> Self {
        MatchRecord {
            win: p.win,
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            champion: p.champion_name.clone(),
            cs: p.total_minions_killed,
            gold: p.gold_earned,
        }
    }
}
