//! Score to rating.

use anyhow::Result;
use chuni_core::{BudgetOutcome, CalculatorConfig, RatingResult};
use serde::Serialize;

use super::{calculator, emit};
use crate::cli::ChartArgs;
use crate::display;

#[derive(Serialize)]
struct Output {
    #[serde(flatten)]
    result: RatingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<BudgetOutcome>,
}

/// Run the rating command
pub fn run(
    chart: &ChartArgs,
    score: u32,
    with_budget: bool,
    config: &CalculatorConfig,
    json: bool,
) -> Result<()> {
    let calc = calculator(chart, config)?;
    let result = calc.rate_score(score)?;
    let budget = with_budget.then(|| calc.budget(score));

    let output = Output { result, budget };
    emit(&calc, json, &output, || {
        let mut text = display::format_rating(&output.result);
        if let Some(budget) = &output.budget {
            text.push('\n');
            text.push_str(&display::format_budget(budget));
        }
        text
    })
}
