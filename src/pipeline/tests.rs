use super::orchestrator::{LookupCache, Orchestrator};
use super::HistorySource;
use crate::analysis::stats::aggregate;
use crate::api::client::JsonFetcher;
use crate::api::endpoints::Endpoints;
use crate::config::Region;
use crate::error::{AppError, ClientError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

const PUUID: &str = "puuid-faker";

/// In-memory upstream: canned responses by URL, with a log of every call.
#[derive(Default)]
struct ScriptedFetcher {
    responses: HashMap<String, Result<Value, ClientError>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    fn respond(mut self, url: String, response: Result<Value, ClientError>) -> Self {
        self.responses.insert(url, response);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl JsonFetcher for ScriptedFetcher {
    fn fetch(&self, url: &str) -> Result<Value, ClientError> {
        self.calls.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or(Err(ClientError::NotFound))
    }
}

fn endpoints() -> Endpoints {
    Endpoints::new(Region::Na1)
}

fn profile_body() -> Value {
    json!({ "id": "sid-1", "puuid": PUUID, "name": "Faker", "summonerLevel": 512 })
}

fn participant(puuid: &str, win: bool, kills: u32, deaths: u32, assists: u32, champion: &str) -> Value {
    json!({
        "puuid": puuid,
        "win": win,
        "kills": kills,
        "deaths": deaths,
        "assists": assists,
        "championName": champion,
        "totalMinionsKilled": 180,
        "goldEarned": 11000
    })
}

fn match_body(me: Value) -> Value {
    json!({
        "metadata": { "matchId": "ignored" },
        "info": { "participants": [participant("someone-else", true, 1, 1, 1, "Garen"), me] }
    })
}

fn ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("NA1_{}", i)).collect()
}

/// Profile found, no ranked data, and `n` match ids whose details all succeed.
fn healthy_upstream(n: usize) -> ScriptedFetcher {
    let e = endpoints();
    let mut fetcher = ScriptedFetcher::default()
        .respond(e.summoner_by_name("Faker"), Ok(profile_body()))
        .respond(e.league_entries("sid-1"), Ok(json!([])))
        .respond(e.match_ids(PUUID, n as u8), Ok(json!(ids(n))));
    for (i, id) in ids(n).iter().enumerate() {
        let me = participant(PUUID, i % 2 == 0, 5, 2, 5, "Ahri");
        fetcher = fetcher.respond(e.match_detail(id), Ok(match_body(me)));
    }
    fetcher
}

fn orchestrator(fetcher: &ScriptedFetcher) -> Orchestrator<&ScriptedFetcher> {
    Orchestrator::new(fetcher, endpoints(), LookupCache::new())
}

#[test]
fn missing_profile_halts_the_run() {
    let fetcher = ScriptedFetcher::default();
    let mut orch = orchestrator(&fetcher);

    let err = orch.load_history("Nobody", 5).unwrap_err();

    assert!(matches!(err, AppError::PlayerNotFound(ref name) if name == "Nobody"));
    assert_eq!(fetcher.calls(), vec![endpoints().summoner_by_name("Nobody")]);
}

#[test]
fn profile_upstream_error_is_fatal_too() {
    let fetcher = ScriptedFetcher::default()
        .respond(endpoints().summoner_by_name("Faker"), Err(ClientError::UpstreamError(403)));
    let mut orch = orchestrator(&fetcher);

    let err = orch.load_history("Faker", 5).unwrap_err();

    assert!(matches!(err, AppError::Client(ClientError::UpstreamError(403))));
    assert_eq!(fetcher.calls().len(), 1);
}

#[test]
fn empty_ranked_list_leaves_player_unranked_and_continues() {
    let fetcher = healthy_upstream(3);
    let mut orch = orchestrator(&fetcher);

    let history = orch.load_history("Faker", 3).unwrap();

    assert!(history.solo_queue.is_none());
    assert_eq!(history.matches.len(), 3);
}

#[test]
fn ranked_failure_is_not_fatal() {
    let e = endpoints();
    let fetcher = healthy_upstream(3).respond(e.league_entries("sid-1"), Err(ClientError::UpstreamError(500)));
    let mut orch = orchestrator(&fetcher);

    let history = orch.load_history("Faker", 3).unwrap();

    assert!(history.solo_queue.is_none());
    assert_eq!(history.matches.len(), 3);
}

#[test]
fn solo_queue_entry_is_selected_by_queue_type() {
    let e = endpoints();
    let fetcher = healthy_upstream(3).respond(
        e.league_entries("sid-1"),
        Ok(json!([
            { "queueType": "RANKED_FLEX_SR", "tier": "SILVER", "rank": "I", "leaguePoints": 10, "wins": 3, "losses": 4 },
            { "queueType": "RANKED_SOLO_5x5", "tier": "CHALLENGER", "rank": "I", "leaguePoints": 1400, "wins": 200, "losses": 150 }
        ])),
    );
    let mut orch = orchestrator(&fetcher);

    let solo = orch.load_history("Faker", 3).unwrap().solo_queue.unwrap();

    assert_eq!(solo.tier, "CHALLENGER");
    assert_eq!(solo.league_points, 1400);
}

#[test]
fn one_transport_failure_drops_only_that_match() {
    let e = endpoints();
    let fetcher = healthy_upstream(5).respond(
        e.match_detail("NA1_3"),
        Err(ClientError::Transport("connection reset".to_string())),
    );
    let mut orch = orchestrator(&fetcher);

    let history = orch.load_history("Faker", 5).unwrap();

    assert_eq!(history.matches.len(), 4);
    let stats = aggregate(&history.matches).unwrap();
    assert_eq!(stats.games, 4);
    // NA1_1, NA1_2, NA1_4, NA1_5: wins alternate starting with a win
    assert_eq!(stats.wins, 2);
}

#[test]
fn match_without_the_queried_player_is_skipped() {
    let e = endpoints();
    let stranger = participant("not-me", true, 9, 9, 9, "Lux");
    let fetcher = healthy_upstream(3).respond(e.match_detail("NA1_2"), Ok(match_body(stranger)));
    let mut orch = orchestrator(&fetcher);

    let history = orch.load_history("Faker", 3).unwrap();

    assert_eq!(history.matches.len(), 2);
    assert!(history.matches.iter().all(|m| m.champion == "Ahri"));
}

#[test]
fn malformed_detail_is_skipped() {
    let e = endpoints();
    let fetcher = healthy_upstream(3).respond(e.match_detail("NA1_1"), Ok(json!({ "info": {} })));
    let mut orch = orchestrator(&fetcher);

    assert_eq!(orch.load_history("Faker", 3).unwrap().matches.len(), 2);
}

#[test]
fn missing_match_list_ends_with_no_matches() {
    let e = endpoints();
    let fetcher = ScriptedFetcher::default()
        .respond(e.summoner_by_name("Faker"), Ok(profile_body()))
        .respond(e.league_entries("sid-1"), Ok(json!([])));
    let mut orch = orchestrator(&fetcher);

    let history = orch.load_history("Faker", 5).unwrap();

    assert!(history.matches.is_empty());
    assert!(aggregate(&history.matches).is_none());
    // profile, ranked, match ids; no detail lookups
    assert_eq!(fetcher.calls().len(), 3);
}

#[test]
fn details_are_fetched_in_listing_order() {
    let e = endpoints();
    let listing = vec!["NA1_3".to_string(), "NA1_1".to_string(), "NA1_2".to_string()];
    let fetcher = healthy_upstream(3).respond(e.match_ids(PUUID, 3), Ok(json!(listing)));
    let mut orch = orchestrator(&fetcher);

    orch.load_history("Faker", 3).unwrap();

    let detail_calls: Vec<String> = fetcher.calls().into_iter().skip(3).collect();
    let expected: Vec<String> = listing.iter().map(|id| e.match_detail(id)).collect();
    assert_eq!(detail_calls, expected);
}

#[test]
fn kda_scenario_over_three_matches() {
    let e = endpoints();
    let fetcher = healthy_upstream(3)
        .respond(e.match_detail("NA1_1"), Ok(match_body(participant(PUUID, true, 10, 0, 5, "Ahri"))))
        .respond(e.match_detail("NA1_2"), Ok(match_body(participant(PUUID, false, 2, 4, 1, "Zed"))))
        .respond(e.match_detail("NA1_3"), Ok(match_body(participant(PUUID, true, 6, 2, 2, "Ahri"))));
    let mut orch = orchestrator(&fetcher);

    let stats = aggregate(&orch.load_history("Faker", 3).unwrap().matches).unwrap();

    assert_eq!(stats.kda_series, vec![15.0, 0.75, 4.0]);
    assert!((stats.avg_kda - 6.583_333).abs() < 1e-5);
}

#[test]
fn repeated_run_is_served_from_cache() {
    let fetcher = healthy_upstream(3);
    let mut orch = orchestrator(&fetcher);

    let first = orch.load_history("Faker", 3).unwrap();
    let calls_after_first = fetcher.calls().len();
    let second = orch.load_history("Faker", 3).unwrap();

    assert_eq!(calls_after_first, 6);
    assert_eq!(fetcher.calls().len(), calls_after_first);
    assert_eq!(first.matches, second.matches);
    assert_eq!(orch.cache().stats().hits, 6);
}

#[test]
fn failed_lookups_are_retried_on_next_run() {
    let e = endpoints();
    let fetcher = healthy_upstream(2).respond(
        e.match_detail("NA1_2"),
        Err(ClientError::Transport("timeout".to_string())),
    );
    let mut orch = orchestrator(&fetcher);

    orch.load_history("Faker", 2).unwrap();
    orch.load_history("Faker", 2).unwrap();

    let detail_2 = e.match_detail("NA1_2");
    assert_eq!(fetcher.calls().iter().filter(|c| **c == detail_2).count(), 2);
}

#[test]
fn different_count_is_a_separate_listing() {
    let e = endpoints();
    let fetcher = healthy_upstream(3).respond(e.match_ids(PUUID, 4), Ok(json!(ids(3))));
    let mut orch = orchestrator(&fetcher);

    orch.load_history("Faker", 3).unwrap();
    orch.load_history("Faker", 4).unwrap();

    assert!(fetcher.calls().contains(&e.match_ids(PUUID, 4)));
    // profile, ranked and the three details come from the cache on the second run
    assert_eq!(fetcher.calls().len(), 7);
}
