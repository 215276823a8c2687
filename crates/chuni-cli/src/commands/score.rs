//! Target rating to minimum score.

use anyhow::Result;
use chuni_core::{BudgetOutcome, CalculatorConfig, ExactDecimal, ScoreResult};
use serde::Serialize;

use super::{calculator, emit};
use crate::cli::ChartArgs;
use crate::display;

#[derive(Serialize)]
struct Output {
    #[serde(flatten)]
    result: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<BudgetOutcome>,
}

/// Run the score command
pub fn run(
    chart: &ChartArgs,
    rating: &ExactDecimal,
    with_budget: bool,
    config: &CalculatorConfig,
    json: bool,
) -> Result<()> {
    let calc = calculator(chart, config)?;
    let result = calc.score_for_rating(rating);
    let budget = with_budget.then(|| calc.budget_for(result.score));

    let output = Output { result, budget };
    emit(&calc, json, &output, || {
        let mut text = display::format_score(&output.result);
        if let Some(budget) = &output.budget {
            text.push('\n');
            text.push_str(&display::format_budget(budget));
        }
        text
    })
}
