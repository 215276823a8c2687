//! Minimum rating per score rank.

use anyhow::Result;
use chuni_core::{ExactDecimal, Level, ScoreRank};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::display;

#[derive(Serialize)]
struct RankRow {
    rank: ScoreRank,
    score: u32,
    rating: ExactDecimal,
}

/// Run the ranks command
pub fn run(level: Level, json: bool) -> Result<()> {
    if json {
        let rows: Vec<RankRow> = ScoreRank::iter()
            .rev()
            .map(|rank| RankRow {
                rank,
                score: rank.threshold(),
                rating: rank.min_rating(level),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", display::format_ranks(level));
    }
    Ok(())
}
