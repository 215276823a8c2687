//! Judgment counts to score and rating.

use anyhow::{Result, bail};
use chuni_core::{CalculatorConfig, JudgmentAllocation, JudgmentField};

use super::{calculator, emit};
use crate::cli::ChartArgs;
use crate::display;

/// Run the notes command
pub fn run(
    chart: &ChartArgs,
    miss: u32,
    attack: u32,
    justice: u32,
    config: &CalculatorConfig,
    json: bool,
) -> Result<()> {
    let calc = calculator(chart, config)?;
    let counts = fill_judgments(&calc, miss, attack, justice)?;
    let result = calc.rate_judgments(&counts)?;

    emit(&calc, json, &result, || display::format_judgments(&result))
}

/// Counts with JUSTICE CRITICAL covering every note not given elsewhere.
fn fill_judgments(
    calc: &chuni_core::ScoreCalculator,
    miss: u32,
    attack: u32,
    justice: u32,
) -> Result<JudgmentAllocation> {
    let total = calc.chart().total_judge_count;
    let given = u64::from(miss) + u64::from(attack) + u64::from(justice);
    if given > u64::from(total) {
        bail!("{} judgments given but the chart has {} notes", given, total);
    }

    let mut editor = calc.editor();
    editor.edit(JudgmentField::Justice, i64::from(justice));
    editor.edit(JudgmentField::Attack, i64::from(attack));
    editor.edit(JudgmentField::Miss, i64::from(miss));
    Ok(*editor.counts())
}
