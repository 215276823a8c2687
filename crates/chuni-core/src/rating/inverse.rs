use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use serde::Serialize;
use tracing::debug;

use super::formula::rating;
use crate::chart::Level;
use crate::config::rating::{DEFAULT_PRECISION, MAX_BONUS};
use crate::config::score::MAX_SCORE;
use crate::decimal::ExactDecimal;

/// Minimum score for a target rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "score", rename_all = "snake_case")]
pub enum ScoreTarget {
    Score(u32),
    /// No score on the chart reaches the target
    Unachievable,
}

impl ScoreTarget {
    pub fn score(&self) -> Option<u32> {
        match self {
            Self::Score(score) => Some(*score),
            Self::Unachievable => None,
        }
    }

    pub fn is_achievable(&self) -> bool {
        matches!(self, Self::Score(_))
    }

    fn from_ceiled(value: BigInt) -> Self {
        if value.is_negative() {
            return Self::Score(0);
        }
        match value.to_u32() {
            Some(score) if score <= MAX_SCORE => Self::Score(score),
            _ => Self::Unachievable,
        }
    }
}

impl std::fmt::Display for ScoreTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Score(score) => write!(f, "{}", score),
            Self::Unachievable => write!(f, "unachievable"),
        }
    }
}

fn int(value: i64) -> ExactDecimal {
    ExactDecimal::from(value)
}

/// Smallest score whose rating on `level` is at least `target`.
///
/// Works in hundredths: `diff = target * 100 - level * 100`. Ratings up to
/// the 800,000 boundary share no constant `diff` threshold, so that range is
/// resolved against the boundary rating in [`invert_lower_segments`].
pub fn inverse_rating(target: &ExactDecimal, level: Level) -> ScoreTarget {
    if !target.is_positive() {
        return ScoreTarget::Score(0);
    }

    let l = level.hundredths();
    let diff = target.mul(&int(100)).sub(&int(l));

    if diff > int(MAX_BONUS) {
        debug!("Rating {} is above the ceiling of level {}", target, level);
        return ScoreTarget::Unachievable;
    }
    if diff == int(MAX_BONUS) {
        return ScoreTarget::Score(1_009_000);
    }

    let raw = if diff >= int(200) {
        diff.add(&int(9_875)).mul(&int(100))
    } else if diff >= int(150) {
        diff.add(&int(19_950)).mul(&int(50))
    } else if diff >= int(100) {
        diff.add(&int(9_900)).mul(&int(100))
    } else if diff >= int(0) {
        diff.add(&int(3_900)).mul(&int(250))
    } else if diff >= int(-500) {
        diff.add(&int(6_500)).mul(&int(150))
    } else {
        return invert_lower_segments(target, level);
    };

    ScoreTarget::from_ceiled(raw.ceil())
}

/// Invert the `[500000, 800000)` and `[800000, 900000)` segments.
///
/// Both scale with the level, so the target is compared against the rating
/// at exactly 800,000 to pick the segment.
fn invert_lower_segments(target: &ExactDecimal, level: Level) -> ScoreTarget {
    let l = level.hundredths();
    let target_hundredths = target.mul(&int(100));
    let boundary = rating(800_000, level, DEFAULT_PRECISION);

    let numerator = if *target >= boundary {
        debug!("Rating {} at or above the 800000 boundary {}", target, boundary);
        // (7L + 2T - 3500) * 100000 / (L - 500)
        int(7 * l - 3_500).add(&target_hundredths.mul(&int(2)))
    } else {
        debug!("Rating {} below the 800000 boundary {}", target, boundary);
        // (5L + 6T - 2500) * 100000 / (L - 500)
        int(5 * l - 2_500).add(&target_hundredths.mul(&int(6)))
    };

    // A positive target this low implies L > 500; the divisor is never zero.
    match numerator.mul(&int(100_000)).ceil_div(&int(l - 500)) {
        Some(score) => ScoreTarget::from_ceiled(score),
        None => ScoreTarget::Unachievable,
    }
}
