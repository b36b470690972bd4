pub mod champion_tally;
pub mod match_record;
pub mod stats;
