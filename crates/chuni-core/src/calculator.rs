//! One-chart calculator tying the formulas, the budget solver and the top
//! list together.

use serde::Serialize;
use tracing::debug;

use crate::chart::Chart;
use crate::config::CalculatorConfig;
use crate::decimal::ExactDecimal;
use crate::error::{Error, Result};
use crate::rating::{ScoreTarget, inverse_rating, rating};
use crate::score::{
    BudgetOutcome, JudgmentAllocation, JudgmentEditor, ScoreRank, solve_budget, validate_score,
};
use crate::top::{IncreaseTarget, TopProjection, TopRatings};

/// Score to rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingResult {
    pub score: u32,
    pub rating: ExactDecimal,
    pub rank: ScoreRank,
    pub top: Option<TopProjection>,
}

/// Rating to minimum score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub rating: ExactDecimal,
    pub score: ScoreTarget,
    pub rank: Option<ScoreRank>,
    pub top: Option<TopProjection>,
}

/// Judgment counts to score and rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgmentResult {
    pub allocation: JudgmentAllocation,
    pub score: u32,
    pub rating: ExactDecimal,
    pub rank: ScoreRank,
    pub top: Option<TopProjection>,
}

#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    chart: Chart,
    top: Option<TopRatings>,
    config: CalculatorConfig,
}

impl ScoreCalculator {
    pub fn new(chart: Chart, config: CalculatorConfig) -> Self {
        Self {
            chart,
            top: None,
            config,
        }
    }

    /// Attach the player's top list so results carry a top projection.
    pub fn with_top(mut self, top: TopRatings) -> Self {
        self.top = Some(top);
        self
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn top(&self) -> Option<&TopRatings> {
        self.top.as_ref()
    }

    fn projection(&self, rating: &ExactDecimal) -> Option<TopProjection> {
        self.top
            .as_ref()
            .and_then(|top| top.project_for(&self.chart.key, self.chart.level, rating))
    }

    pub fn rate_score(&self, score: u32) -> Result<RatingResult> {
        let score = validate_score(score)?;
        let rating = rating(score, self.chart.level, self.config.precision);
        debug!("{} scored {} rates {}", self.chart.key, score, rating);

        Ok(RatingResult {
            score,
            top: self.projection(&rating),
            rank: ScoreRank::from_score(score),
            rating,
        })
    }

    pub fn score_for_rating(&self, target: &ExactDecimal) -> ScoreResult {
        let score = inverse_rating(target, self.chart.level);
        let top = if score.is_achievable() {
            self.projection(target)
        } else {
            None
        };

        ScoreResult {
            rating: target.clone(),
            rank: score.score().map(ScoreRank::from_score),
            score,
            top,
        }
    }

    /// Score and rating of a judgment spread covering every note of the chart.
    pub fn rate_judgments(&self, allocation: &JudgmentAllocation) -> Result<JudgmentResult> {
        let expected = self.chart.total_judge_count;
        if allocation.total() != u64::from(expected) {
            return Err(Error::JudgmentCountMismatch {
                expected,
                actual: allocation.total(),
            });
        }

        let score = allocation.score()?;
        let rating = rating(score, self.chart.level, self.config.precision);
        Ok(JudgmentResult {
            allocation: *allocation,
            score,
            top: self.projection(&rating),
            rank: ScoreRank::from_score(score),
            rating,
        })
    }

    /// Largest degraded budget that still reaches `target_score`, with the
    /// configured JUSTICE CRITICAL ratio and MISS fraction.
    pub fn budget(&self, target_score: u32) -> BudgetOutcome {
        solve_budget(
            self.chart.total_judge_count,
            target_score,
            self.config.clamped_ratio(),
            self.config.clamped_miss_fraction(),
        )
    }

    /// Budget breakdown for a resolved score target.
    pub fn budget_for(&self, target: ScoreTarget) -> BudgetOutcome {
        match target {
            ScoreTarget::Score(score) => self.budget(score),
            ScoreTarget::Unachievable => BudgetOutcome::Unachievable,
        }
    }

    /// Score needed to raise the top average by `increase`.
    ///
    /// `None` without a top list or when this chart cannot raise it.
    pub fn top_increase(&self, increase: &ExactDecimal) -> Option<IncreaseTarget> {
        self.top
            .as_ref()?
            .target_for_increase(&self.chart.key, self.chart.level, increase)
    }

    pub fn max_top_increase(&self) -> Option<TopProjection> {
        self.top
            .as_ref()?
            .max_possible_increase(&self.chart.key, self.chart.level)
    }

    /// Judgment editor over this chart's notes.
    pub fn editor(&self) -> JudgmentEditor {
        JudgmentEditor::new(self.chart.total_judge_count)
    }
}
