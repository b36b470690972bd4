use crate::analysis::match_record::MatchRecord;
use crate::analysis::stats::AggregateStats;
use crate::api::models::{RankedEntry, SummonerProfile};
use crate::cache::CacheStats;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    result: String,
    kills: u32,
    deaths: u32,
    assists: u32,
    champion: String,
    cs: u32,
    gold: u32,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_profile(profile: &SummonerProfile) {
    println!(
        "\n{}",
        format!("🎮 Summoner: {} | Level {}", profile.name, profile.summoner_level)
            .bold()
            .cyan()
    );
    println!("{}", "=".repeat(60).cyan());
}

pub fn display_ranked(entry: Option<&RankedEntry>) {
    let Some(entry) = entry else {
        println!("{}", "Unranked in solo queue".dimmed());
        return;
    };

    println!(
        "{} {} {} ({} LP)",
        "🏆 Rank:".bold(),
        entry.tier,
        entry.rank,
        entry.league_points
    );
    println!("{} {:.1}%", "📈 Win Rate:".bold(), entry.win_rate());
    println!(
        "{} {}W {}L",
        "📋 Record:".bold(),
        entry.wins.to_string().green(),
        entry.losses.to_string().red()
    );
}

pub fn display_summary(stats: &AggregateStats) {
    println!(
        "\n{}",
        format!("📊 RECENT PERFORMANCE (Last {} Games)", stats.games)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {:.1}% ({} W / {} L)",
        "Recent Win Rate:".bold(),
        stats.recent_win_rate,
        stats.wins.to_string().green(),
        stats.losses.to_string().red()
    );
    println!("{} {:.2}", "Avg KDA:".bold(), stats.avg_kda);
    println!("{} {:.0}", "Avg CS:".bold(), stats.avg_cs);
    println!("{} {:.0}", "Avg Gold:".bold(), stats.avg_gold);
    println!("{} {}", "Top Champ:".bold(), stats.top_champion.yellow());

    let trend: Vec<String> = stats.kda_series.iter().map(|k| format!("{:.2}", k)).collect();
    println!("\n{} {}", "KDA Trend (Recent → Old):".bold(), trend.join(" → "));

    println!("\n{}", "Champion Distribution".bold().yellow());
    for count in &stats.champion_counts {
        let share = count.games as f64 / stats.games as f64 * 100.0;
        println!("  {:<14} {:>2} games ({:.1}%)", count.name, count.games, share);
    }
}

pub fn display_match_table(matches: &[MatchRecord]) {
    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchRow {
            number: format!("{}", idx + 1),
            result: if m.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            kills: m.kills,
            deaths: m.deaths,
            assists: m.assists,
            champion: m.champion.clone(),
            cs: m.cs,
            gold: m.gold,
        })
        .collect();

    println!("\n{}", "Match Details".bold().cyan());
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_usage(requests: u32, cache: CacheStats) {
    println!("📡 API Usage");
    println!("   Requests sent: {}", requests);
    println!(
        "   Cache: {} hits / {} misses ({} entries)\n",
        cache.hits, cache.misses, cache.entries
    );
}
