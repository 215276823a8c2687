use serde::Serialize;
use tracing::debug;

use super::TopRatings;
use crate::chart::{ChartKey, Level};
use crate::config::top::INCREASE_DISPLAY_PLACES;
use crate::decimal::ExactDecimal;
use crate::rating::{ScoreTarget, inverse_rating};

/// Effect of a new chart rating on the top list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProjection {
    /// Change of the top average, truncated to three places
    pub increase: ExactDecimal,
    /// 1-based position the rating would take
    pub rank: Option<usize>,
}

/// What it takes to raise the top average by a given amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncreaseTarget {
    /// Chart rating needed, or the displaced rating for a zero increase
    pub rating: ExactDecimal,
    pub score: ScoreTarget,
    /// Resulting top average, absent when the score is unachievable
    pub average: Option<ExactDecimal>,
    pub rank: Option<usize>,
}

impl TopRatings {
    /// Increase of the average if `rating` replaced `subtract`.
    ///
    /// `None` unless the new rating beats the one it replaces.
    pub fn project(&self, rating: &ExactDecimal, subtract: &ExactDecimal) -> Option<TopProjection> {
        if rating <= subtract {
            return None;
        }
        let total = self.total();
        let raised = total.add(&rating.sub(subtract));
        let increase = self
            .average_of(&raised)
            .sub(&self.average_of(&total))
            .rescale(INCREASE_DISPLAY_PLACES);

        Some(TopProjection {
            increase,
            rank: self.rank_of(rating),
        })
    }

    /// [`project`](Self::project) for a new play on `chart`.
    pub fn project_for(
        &self,
        chart: &ChartKey,
        level: Level,
        rating: &ExactDecimal,
    ) -> Option<TopProjection> {
        let subtract = self.displaced(chart, level)?;
        self.project(rating, &subtract)
    }

    /// Increase of the average if `chart` reached its rating ceiling.
    pub fn max_possible_increase(&self, chart: &ChartKey, level: Level) -> Option<TopProjection> {
        self.project_for(chart, level, &level.max_rating())
    }

    /// Chart rating and score needed to raise the average by `increase`.
    ///
    /// The needed rating is the displaced one plus `increase` times the list
    /// capacity. `None` when the chart cannot raise the list at all.
    pub fn target_for_increase(
        &self,
        chart: &ChartKey,
        level: Level,
        increase: &ExactDecimal,
    ) -> Option<IncreaseTarget> {
        let subtract = self.displaced(chart, level)?;
        let total = self.total();
        let raise = increase.mul(&ExactDecimal::from(self.capacity()));

        if raise.is_zero() {
            return Some(IncreaseTarget {
                rating: subtract,
                score: ScoreTarget::Score(0),
                average: Some(self.average_of(&total)),
                rank: None,
            });
        }

        let rating = subtract.add(&raise);
        let score = inverse_rating(&rating, level);
        debug!("Raising the top list by {} needs {} on {}: {}", increase, rating, chart, score);

        let (average, rank) = if score.is_achievable() {
            let average = self.average_of(&total.add(&raise));
            let rank = self.project(&rating, &subtract).and_then(|p| p.rank);
            (Some(average), rank)
        } else {
            (None, None)
        };

        Some(IncreaseTarget {
            rating,
            score,
            average,
            rank,
        })
    }
}
