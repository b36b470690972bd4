use super::champion_tally::{ChampionCount, ChampionTally};
use super::match_record::MatchRecord;

/// Summary metrics over a run's match list. Recomputed every run.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Percent, in `[0, 100]`.
    pub recent_win_rate: f64,
    pub avg_kda: f64,
    pub avg_cs: f64,
    pub avg_gold: f64,
    pub top_champion: String,
    /// Per-match KDA, most recent first.
    pub kda_series: Vec<f64>,
    pub champion_counts: Vec<ChampionCount>,
}

/// Aggregates the match list; `None` when there is nothing to aggregate.
pub fn aggregate(matches: &[MatchRecord]) -> Option<AggregateStats> {
    if matches.is_empty() {
        return None;
    }

    let games = matches.len();
    let wins = matches.iter().filter(|m| m.win).count();
    let kda_series: Vec<f64> = matches.iter().map(MatchRecord::kda).collect();

    let tally: ChampionTally = matches.iter().map(|m| m.champion.as_str()).collect();
    let top_champion = tally.most_frequent()?.name.clone();

    Some(AggregateStats {
        games,
        wins,
        losses: games - wins,
        recent_win_rate: wins as f64 / games as f64 * 100.0,
        avg_kda: mean(kda_series.iter().copied()),
        avg_cs: mean(matches.iter().map(|m| m.cs as f64)),
        avg_gold: mean(matches.iter().map(|m| m.gold as f64)),
        top_champion,
        kda_series,
        champion_counts: tally.distribution(),
    })
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}
