//! Exact rating engine for CHUNITHM charts.
//!
//! Converts scores to ratings and back, works out which judgment spreads still
//! reach a target score, and projects the effect of a play on the top rating
//! list. Every rating is an [`ExactDecimal`], so no value drifts through
//! binary floating point.

pub mod calculator;
pub mod chart;
pub mod config;
pub mod decimal;
pub mod error;
pub mod rating;
pub mod score;
pub mod top;

pub use calculator::{JudgmentResult, RatingResult, ScoreCalculator, ScoreResult};
pub use chart::{Chart, ChartKey, Difficulty, Level};
pub use config::CalculatorConfig;
pub use decimal::ExactDecimal;
pub use error::{Error, Result};
pub use rating::{
    RatingEntry, ScoreRecord, ScoreTarget, inverse_rating, rate_all, rating, rating_opt,
};
pub use score::{
    BudgetOutcome, DegradedSplit, JudgmentAllocation, JudgmentBudget, JudgmentEditor,
    JudgmentField, ScoreRank, solve_budget,
};
pub use top::{IncreaseTarget, TopProjection, TopRatings};
