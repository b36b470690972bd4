use super::{HistorySource, PlayerHistory};
use crate::analysis::match_record::MatchRecord;
use crate::api::client::JsonFetcher;
use crate::api::endpoints::Endpoints;
use crate::api::models::{solo_queue_entry, MatchDto, RankedEntry, SummonerProfile};
use crate::cache::{CacheKey, Stage, TtlCache};
use crate::error::{AppError, ClientError};
use chrono::Duration;
use indicatif::ProgressBar;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub type LookupCache = TtlCache<CacheKey, Value>;

/// Runs the dependent lookups (profile, ranked entries, match ids, match
/// details) through the fetcher, with every lookup going through the cache.
pub struct Orchestrator<F> {
    fetcher: F,
    endpoints: Endpoints,
    cache: LookupCache,
    ttl: Duration,
    progress: ProgressBar,
}

impl<F: JsonFetcher> Orchestrator<F> {
    pub fn new(fetcher: F, endpoints: Endpoints, cache: LookupCache) -> Self {
        let ttl = cache.default_ttl();
        Orchestrator {
            fetcher,
            endpoints,
            cache,
            ttl,
            progress: ProgressBar::hidden(),
        }
    }

    /// Progress bar advanced once per attempted match detail.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    fn lookup(&mut self, stage: Stage, id: &str, url: &str) -> Result<Value, ClientError> {
        let fetcher = &self.fetcher;
        self.cache
            .get_or_compute(CacheKey::new(stage, id), self.ttl, || fetcher.fetch(url))
    }

    /// Stage 1. Any failure here ends the run.
    pub fn fetch_profile(&mut self, summoner_name: &str) -> Result<SummonerProfile, AppError> {
        let url = self.endpoints.summoner_by_name(summoner_name);
        match self.lookup(Stage::Profile, summoner_name, &url) {
            Ok(body) => serde_json::from_value(body).map_err(|e| {
                AppError::JsonError(format!("summoner profile for '{}': {}", summoner_name, e))
            }),
            Err(ClientError::NotFound) => Err(AppError::PlayerNotFound(summoner_name.to_string())),
            Err(e) => Err(AppError::Client(e)),
        }
    }

    /// Stage 2. Failures degrade to "no entries".
    pub fn fetch_ranked(&mut self, profile: &SummonerProfile) -> Vec<RankedEntry> {
        let url = self.endpoints.league_entries(&profile.id);
        let body = self.lookup(Stage::Ranked, &profile.id, &url);
        decode_or_empty(Stage::Ranked, &profile.id, body)
    }

    /// Stage 3. Failures degrade to an empty list.
    pub fn fetch_match_ids(&mut self, profile: &SummonerProfile, count: u8) -> Vec<String> {
        let url = self.endpoints.match_ids(&profile.puuid, count);
        let id = format!("{}?count={}", profile.puuid, count);
        let body = self.lookup(Stage::MatchIds, &id, &url);
        decode_or_empty(Stage::MatchIds, &id, body)
    }

    /// Stage 4 for one id. `None` when the detail is unavailable or does not
    /// contain the queried player.
    pub fn fetch_match_record(&mut self, match_id: &str, puuid: &str) -> Option<MatchRecord> {
        let url = self.endpoints.match_detail(match_id);
        let body = match self.lookup(Stage::MatchDetail, match_id, &url) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Skipping match {}: {}", match_id, e);
                return None;
            }
        };

        let detail: MatchDto = match serde_json::from_value(body) {
            Ok(detail) => detail,
            Err(e) => {
                log::warn!("Skipping match {}: malformed payload: {}", match_id, e);
                return None;
            }
        };

        let record = MatchRecord::from_match(&detail, puuid);
        if record.is_none() {
            log::warn!("Skipping match {}: queried player not among participants", match_id);
        }
        record
    }

    /// Stage 4, sequential and in listing order.
    pub fn fetch_match_records(&mut self, match_ids: &[String], puuid: &str) -> Vec<MatchRecord> {
        self.progress.set_length(match_ids.len() as u64);
        let records = match_ids
            .iter()
            .filter_map(|id| {
                let record = self.fetch_match_record(id, puuid);
                self.progress.inc(1);
                record
            })
            .collect();
        self.progress.finish_and_clear();
        records
    }
}

impl<F: JsonFetcher> HistorySource for Orchestrator<F> {
    fn load_history(&mut self, summoner_name: &str, count: u8) -> Result<PlayerHistory, AppError> {
        let profile = self.fetch_profile(summoner_name)?;
        let solo_queue = solo_queue_entry(self.fetch_ranked(&profile));

        let match_ids = self.fetch_match_ids(&profile, count);
        let matches = if match_ids.is_empty() {
            Vec::new()
        } else {
            self.fetch_match_records(&match_ids, &profile.puuid)
        };

        Ok(PlayerHistory {
            profile,
            solo_queue,
            matches,
        })
    }
}

fn decode_or_empty<T: DeserializeOwned>(
    stage: Stage,
    id: &str,
    body: Result<Value, ClientError>,
) -> Vec<T> {
    let body = match body {
        Ok(body) => body,
        Err(ClientError::NotFound) => return Vec::new(),
        Err(e) => {
            log::warn!("{} lookup for {} failed, continuing without it: {}", stage, id, e);
            return Vec::new();
        }
    };

    serde_json::from_value(body).unwrap_or_else(|e| {
        log::warn!("{} lookup for {} returned malformed data: {}", stage, id, e);
        Vec::new()
    })
}
