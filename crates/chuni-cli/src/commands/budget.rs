//! Judgment budget for a target score.

use anyhow::Result;
use chuni_core::CalculatorConfig;
use chuni_core::score::validate_score;

use super::{calculator, emit};
use crate::cli::ChartArgs;
use crate::display;

/// Run the budget command
pub fn run(chart: &ChartArgs, target: u32, config: &CalculatorConfig, json: bool) -> Result<()> {
    let target = validate_score(target)?;
    let calc = calculator(chart, config)?;
    let outcome = calc.budget(target);

    emit(&calc, json, &outcome, || display::format_budget(&outcome))
}
