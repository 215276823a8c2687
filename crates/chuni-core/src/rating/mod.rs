//! Score to rating conversion and its inverse.
//!
//! This module contains:
//! - `rating` - the nine-segment score-to-rating curve
//! - `inverse_rating` - the smallest score reaching a target rating
//! - `rate_all` - parallel batch rating of score records

mod formula;
mod inverse;

pub use formula::{rating, rating_opt};
pub use inverse::{ScoreTarget, inverse_rating};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{ChartKey, Level};
use crate::decimal::ExactDecimal;

/// Best score on one chart, as handed over by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub chart: ChartKey,
    pub level: Level,
    pub score: u32,
}

/// Rating earned on one chart
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatingEntry {
    pub chart: ChartKey,
    pub level: Level,
    pub rating: ExactDecimal,
}

impl RatingEntry {
    pub fn from_record(record: &ScoreRecord, precision: u32) -> Self {
        Self {
            chart: record.chart,
            level: record.level,
            rating: rating(record.score, record.level, precision),
        }
    }

    /// Whether this entry already sits at its chart's rating ceiling.
    pub fn is_capped(&self) -> bool {
        self.rating >= self.level.max_rating()
    }
}

/// Rate every record in parallel. Output order follows input order.
pub fn rate_all(records: &[ScoreRecord], precision: u32) -> Vec<RatingEntry> {
    debug!("Rating {} score records", records.len());
    records
        .par_iter()
        .map(|record| RatingEntry::from_record(record, precision))
        .collect()
}
