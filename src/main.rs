mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;
mod pipeline;
mod rate_limit;

use analysis::stats::aggregate;
use anyhow::Result;
use api::client::RiotApiClient;
use api::endpoints::Endpoints;
use cache::TtlCache;
use clap::Parser;
use config::{Config, Region, MAX_MATCH_COUNT, MIN_MATCH_COUNT};
use display::output::{
    display_error, display_info, display_match_table, display_profile, display_ranked,
    display_success, display_summary, display_usage, display_warning,
};
use indicatif::ProgressBar;
use pipeline::demo::DemoSource;
use pipeline::orchestrator::Orchestrator;
use pipeline::{HistorySource, PlayerHistory};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Summoner Stats")]
#[command(about = "Summarize a player's recent League of Legends matches", long_about = None)]
struct Args {
    /// Summoner display name
    summoner_name: String,

    /// Platform: na1, euw1, kr, eun1 or jp1 (default: RIOT_REGION or na1)
    #[arg(short, long)]
    region: Option<Region>,

    /// Number of recent matches to analyze (3-20)
    #[arg(
        short,
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(MIN_MATCH_COUNT as i64..=MAX_MATCH_COUNT as i64)
    )]
    matches: u8,

    /// Use the bundled demo data instead of the Riot API
    #[arg(long)]
    demo: bool,

    /// Demo fixture to load instead of the bundled one (implies --demo)
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Riot API key (default: RIOT_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.demo || args.fixture.is_some() {
        return run_demo(&args);
    }

    let config = Config::from_env(args.api_key.clone(), args.region)?;
    display_info(&format!(
        "Fetching data for {} in region {}",
        args.summoner_name, config.region
    ));

    let client = RiotApiClient::new(&config);
    let progress = ProgressBar::new(0);
    progress.set_message("Fetching match details");

    let mut orchestrator = Orchestrator::new(
        &client,
        Endpoints::new(config.region),
        TtlCache::with_default_ttl(chrono::Duration::from_std(config.cache_ttl)?),
    )
    .with_progress(progress);

    let history = orchestrator.load_history(&args.summoner_name, args.matches)?;
    present(&history);
    display_usage(client.requests_made(), orchestrator.cache().stats());

    Ok(())
}

fn run_demo(args: &Args) -> Result<()> {
    display_info("Demo mode: using bundled match data");

    let mut source = match &args.fixture {
        Some(path) => DemoSource::from_path(path)?,
        None => DemoSource::builtin()?,
    };

    let history = source.load_history(&args.summoner_name, args.matches)?;
    present(&history);

    Ok(())
}

fn present(history: &PlayerHistory) {
    display_profile(&history.profile);
    display_ranked(history.solo_queue.as_ref());

    match aggregate(&history.matches) {
        Some(stats) => {
            display_success(&format!("Analyzed {} matches", stats.games));
            display_summary(&stats);
            display_match_table(&history.matches);
        }
        None => display_warning("No recent matches found"),
    }
}
