//! Score-related types and calculations.
//!
//! This module contains types for representing scores and judgments:
//! - `ScoreRank` - letter ranks (D through SSS+)
//! - `JudgmentAllocation`, `JudgmentEditor` - per-grade note counts
//! - `solve_budget`, `DegradedSplit` - degraded-judgment budget for a target score

mod budget;
mod judgment;
mod rank;

pub use budget::*;
pub use judgment::*;
pub use rank::*;

use crate::config::score::MAX_SCORE;
use crate::error::{Error, Result};

/// Reject scores above the title's cap.
pub fn validate_score(score: u32) -> Result<u32> {
    if score > MAX_SCORE {
        return Err(Error::ScoreOutOfRange(score));
    }
    Ok(score)
}
